// File: src/core/language.rs
use crate::error::Result;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

const FRENCH_VOWELS: &str = "ah,ae,eh,ee,oe,ih,oh,oo,ou,uh,en,in,on,oi,ui";
const FRENCH_CONSONANTS: &str = "b,d,f,g,j,k,l,m,n,p,r,s,sh,t,v,w,y,z,gn,.,-,R,BR,_hh";
const FRENCH_PLOSIVES: &str = "t,k,g,p,b,d";
const FRENCH_REPLACEMENTS: &str = "aa=ah;ai=ae;ei=eh;eu=ee;ee=ee;oe=oe;ii=ih;au=oh;oo=oo;ou=ou;uu=uh;an=en;in=in;un=in;on=on;uy=ui;\
bb=b;dd=d;ff=f;gg=g;jj=j;kk=k;ll=l;mm=m;nn=n;pp=p;rr=r;ss=s;ch=sh;tt=t;vv=v;ww=w;yy=y;zz=z;gn=gn;4=l;hh=h;";

/// Rewrites raw dictionary tokens into the voicebank's phoneme vocabulary.
/// Built once per language and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct Replacements {
    table: HashMap<String, String>,
}

impl Replacements {
    /// Parses `raw=internal;raw=internal;...`. Entries that are not exactly one
    /// pair, or that map a token to itself, are dropped.
    pub fn parse(entries: &str) -> Self {
        let table = entries
            .split(';')
            .map(|entry| entry.split('=').collect::<Vec<_>>())
            .filter(|parts| parts.len() == 2)
            .filter(|parts| parts[0] != parts[1])
            .map(|parts| (parts[0].to_string(), parts[1].to_string()))
            .collect();
        Self { table }
    }

    /// Returns the mapped phoneme, or the token itself when unmapped.
    pub fn normalize<'a>(&'a self, token: &'a str) -> &'a str {
        self.table.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn normalize_all<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| self.normalize(t.as_ref()).to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl From<String> for Replacements {
    fn from(entries: String) -> Self {
        Self::parse(&entries)
    }
}

/// Phoneme inventory of one voicebank language.
#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub name: String,
    vowels: HashSet<String>,
    consonants: HashSet<String>,
    #[serde(default)]
    plosives: HashSet<String>,
    #[serde(default)]
    replacements: Replacements,
    /// A previous vowel that is voiced as another one in transitions.
    #[serde(default)]
    vowel_substitutions: HashMap<String, String>,
}

fn comma_set(list: &str) -> HashSet<String> {
    list.split(',').map(str::to_string).collect()
}

impl Language {
    /// The French xCV inventory.
    pub fn french() -> Self {
        Self {
            name: "FR xCV".to_string(),
            vowels: comma_set(FRENCH_VOWELS),
            consonants: comma_set(FRENCH_CONSONANTS),
            plosives: comma_set(FRENCH_PLOSIVES),
            replacements: Replacements::parse(FRENCH_REPLACEMENTS),
            vowel_substitutions: HashMap::from([("ui".to_string(), "ih".to_string())]),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let language = Self::from_json(&json)?;
        info!(
            language = %language.name,
            vowels = language.vowels.len(),
            consonants = language.consonants.len(),
            "loaded language descriptor from {}",
            path.display()
        );
        Ok(language)
    }

    pub fn is_vowel(&self, phoneme: &str) -> bool {
        self.vowels.contains(phoneme)
    }

    pub fn is_consonant(&self, phoneme: &str) -> bool {
        self.consonants.contains(phoneme)
    }

    pub fn is_plosive(&self, phoneme: &str) -> bool {
        self.plosives.contains(phoneme)
    }

    pub fn replacements(&self) -> &Replacements {
        &self.replacements
    }

    /// How a vowel sounds when it precedes a transition.
    pub fn previous_vowel<'a>(&'a self, v: &'a str) -> &'a str {
        self.vowel_substitutions
            .get(v)
            .map(String::as_str)
            .unwrap_or(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_table_drops_identity_entries() {
        let replacements = Language::french().replacements().clone();
        assert_eq!(replacements.normalize("aa"), "ah");
        assert_eq!(replacements.normalize("ch"), "sh");
        assert_eq!(replacements.normalize("4"), "l");
        // "ee=ee" and "gn=gn" are no-ops and never stored
        assert!(!replacements.table.contains_key("ee"));
        assert!(!replacements.table.contains_key("gn"));
    }

    #[test]
    fn unmapped_tokens_pass_through() {
        let replacements = Replacements::parse("aa=ah;");
        assert_eq!(replacements.normalize("xyz"), "xyz");
        assert_eq!(replacements.normalize("ah"), "ah");
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let replacements = Replacements::parse("aa=ah;broken;a=b=c;;ii=ih");
        assert_eq!(replacements.len(), 2);
        assert_eq!(replacements.normalize("ii"), "ih");
        assert_eq!(replacements.normalize("a"), "a");
    }

    #[test]
    fn many_to_one_mapping() {
        let replacements = Language::french().replacements().clone();
        assert_eq!(replacements.normalize("in"), "in");
        assert_eq!(replacements.normalize("un"), "in");
        assert_eq!(
            replacements.normalize_all(&["bb", "aa", "zz"]),
            vec!["b", "ah", "z"]
        );
    }

    #[test]
    fn french_membership() {
        let french = Language::french();
        assert!(french.is_vowel("ui"));
        assert!(french.is_consonant("sh"));
        assert!(french.is_plosive("t"));
        assert!(!french.is_plosive("n"));
        assert_eq!(french.previous_vowel("ui"), "ih");
        assert_eq!(french.previous_vowel("ah"), "ah");
    }

    #[test]
    fn language_from_json() {
        let json = r#"{
            "name": "test",
            "vowels": ["a", "o"],
            "consonants": ["k", "t"],
            "plosives": ["k"],
            "replacements": "kk=k;aa=a"
        }"#;
        let language = Language::from_json(json).unwrap();
        assert_eq!(language.name, "test");
        assert!(language.is_vowel("o"));
        assert!(language.is_plosive("k"));
        assert_eq!(language.replacements().normalize("aa"), "a");
        assert_eq!(language.previous_vowel("a"), "a");
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(Language::from_json("{ \"name\": 1 }").is_err());
    }
}
