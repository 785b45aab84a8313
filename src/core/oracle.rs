// File: src/core/oracle.rs
use crate::core::types::Syllable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Answers whether an alias is recorded for a pitch in the loaded voicebank.
/// Implementations are queried concurrently and must not mutate.
pub trait AliasOracle: Send + Sync {
    fn has_oto(&self, alias: &str, tone: i32) -> bool;
}

impl<F> AliasOracle for F
where
    F: Fn(&str, i32) -> bool + Send + Sync,
{
    fn has_oto(&self, alias: &str, tone: i32) -> bool {
        self(alias, tone)
    }
}

/// Decides whether a vowel-to-vowel syllable stretches the previous alias
/// instead of triggering a new one.
pub trait ExtensionPolicy: Send + Sync {
    fn can_extend(&self, syllable: &Syllable) -> bool;
}

/// Extends only extension notes that repeat the previous vowel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameVowelExtension;

impl ExtensionPolicy for SameVowelExtension {
    fn can_extend(&self, syllable: &Syllable) -> bool {
        syllable.can_extend && syllable.cc.is_empty() && syllable.prev_v == syllable.v
    }
}

/// Always triggers a new alias.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverExtend;

impl ExtensionPolicy for NeverExtend {
    fn can_extend(&self, _syllable: &Syllable) -> bool {
        false
    }
}

/// Inclusive range of tones an alias is recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneRange {
    pub low: i32,
    pub high: i32,
}

impl ToneRange {
    pub const ALL: ToneRange = ToneRange { low: i32::MIN, high: i32::MAX };

    pub fn new(low: i32, high: i32) -> Self {
        Self { low: low.min(high), high: low.max(high) }
    }

    pub fn contains(&self, tone: i32) -> bool {
        self.low <= tone && tone <= self.high
    }
}

/// Pre-indexed alias lookup built once per voicebank load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtoIndex {
    aliases: HashMap<String, Vec<ToneRange>>,
}

impl OtoIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an alias for a tone range. Empty aliases are ignored.
    pub fn insert(&mut self, alias: &str, range: ToneRange) {
        let alias = alias.trim();
        if alias.is_empty() {
            return;
        }
        let ranges = self.aliases.entry(alias.to_string()).or_default();
        if !ranges.contains(&range) {
            ranges.push(range);
        }
    }

    /// Reads `file.wav=alias,offset,consonant,cutoff,preutter,overlap` lines.
    /// An entry with no alias is known by its file stem.
    /// Returns the number of entries read.
    pub fn add_oto_ini(&mut self, text: &str, range: ToneRange) -> usize {
        let mut count = 0;
        for line in text.lines() {
            let line = line.trim_start_matches('\u{feff}').trim();
            let Some((wav, params)) = line.split_once('=') else {
                continue;
            };
            let alias = params.split(',').next().unwrap_or("").trim();
            if alias.is_empty() {
                let stem = Path::new(wav.trim())
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("");
                self.insert(stem, range);
            } else {
                self.insert(alias, range);
            }
            count += 1;
        }
        count
    }

    /// Reads one alias per line; blank lines and `#` comments are skipped.
    pub fn add_alias_list(&mut self, text: &str, range: ToneRange) -> usize {
        let mut count = 0;
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.insert(line, range);
            count += 1;
        }
        count
    }

    pub fn contains(&self, alias: &str, tone: i32) -> bool {
        self.aliases
            .get(alias)
            .is_some_and(|ranges| ranges.iter().any(|r| r.contains(tone)))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl AliasOracle for OtoIndex {
    fn has_oto(&self, alias: &str, tone: i32) -> bool {
        self.contains(alias, tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OTO: &str = "\
_ah.wav=- ah,0,100,-200,50,20
_kah.wav=- kah,10,120,-210,60,25
st.wav=s t,5,80,-100,40,10
ah_t.wav=ah t,0,90,-150,45,15
oh.wav=,0,90,-150,45,15
not an entry
";

    #[test]
    fn parses_oto_ini() {
        let mut index = OtoIndex::new();
        let count = index.add_oto_ini(OTO, ToneRange::ALL);
        assert_eq!(count, 5);
        assert!(index.has_oto("- ah", 60));
        assert!(index.has_oto("s t", 0));
        assert!(index.has_oto("ah t", 72));
        assert!(!index.has_oto("t -", 60));
    }

    #[test]
    fn unnamed_entry_uses_file_stem() {
        let mut index = OtoIndex::new();
        index.add_oto_ini(OTO, ToneRange::ALL);
        assert!(index.has_oto("oh", 60));
    }

    #[test]
    fn tone_ranges_are_respected() {
        let mut index = OtoIndex::new();
        index.add_alias_list("# low bank\n- ah\n\ns t\n", ToneRange::new(48, 59));
        index.add_alias_list("- ah\n", ToneRange::new(60, 71));
        assert_eq!(index.len(), 2);
        assert!(index.has_oto("- ah", 48));
        assert!(index.has_oto("- ah", 65));
        assert!(index.has_oto("s t", 59));
        assert!(!index.has_oto("s t", 60));
        assert!(!index.has_oto("- ah", 72));
    }

    #[test]
    fn closures_are_oracles() {
        let oracle = |alias: &str, _tone: i32| alias == "s t";
        assert!(oracle.has_oto("s t", 0));
        assert!(!oracle.has_oto("t r", 0));
    }

    #[test]
    fn same_vowel_extension() {
        let policy = SameVowelExtension;
        assert!(policy.can_extend(&Syllable::new("ah", &[], "ah", 60).extendable()));
        assert!(!policy.can_extend(&Syllable::new("ah", &[], "ah", 60)));
        assert!(!policy.can_extend(&Syllable::new("ah", &[], "oh", 60).extendable()));
        assert!(!NeverExtend.can_extend(&Syllable::new("ah", &[], "ah", 60).extendable()));
    }
}
