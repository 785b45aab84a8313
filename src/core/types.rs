// src/core/types.rs
use serde::{Deserialize, Serialize};

/// An opaque phoneme token, compared by exact string match.
pub type Phoneme = String;

/// Aliases in playback order. Never contains empty entries.
pub type AliasSequence = Vec<String>;

/// One vowel-centred unit of a word.
/// `prev_v` is empty when the syllable opens the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub prev_v: Phoneme,
    pub cc: Vec<Phoneme>,
    pub v: Phoneme,
    pub tone: i32,
    /// Set when the note continues the previous one (an extension note),
    /// which lets an extension policy stretch the previous alias.
    #[serde(default)]
    pub can_extend: bool,
}

impl Syllable {
    pub fn new(prev_v: &str, cc: &[&str], v: &str, tone: i32) -> Self {
        Self {
            prev_v: prev_v.to_string(),
            cc: cc.iter().map(|c| c.to_string()).collect(),
            v: v.to_string(),
            tone,
            can_extend: false,
        }
    }

    pub fn extendable(mut self) -> Self {
        self.can_extend = true;
        self
    }

    pub fn opens_word(&self) -> bool {
        self.prev_v.is_empty()
    }
}

/// The tail of a word: its last vowel and any trailing consonants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEnding {
    pub prev_v: Phoneme,
    pub cc: Vec<Phoneme>,
    pub tone: i32,
}

impl WordEnding {
    pub fn new(prev_v: &str, cc: &[&str], tone: i32) -> Self {
        Self {
            prev_v: prev_v.to_string(),
            cc: cc.iter().map(|c| c.to_string()).collect(),
            tone,
        }
    }
}

/// Outcome of realizing one syllable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Realization {
    /// Trigger these aliases, in order.
    Emit(AliasSequence),
    /// Trigger nothing; the caller stretches the previous alias instead.
    Extend,
}

impl Realization {
    pub fn aliases(&self) -> &[String] {
        match self {
            Realization::Emit(aliases) => aliases,
            Realization::Extend => &[],
        }
    }

    pub fn into_aliases(self) -> AliasSequence {
        match self {
            Realization::Emit(aliases) => aliases,
            Realization::Extend => Vec::new(),
        }
    }

    pub fn is_extend(&self) -> bool {
        matches!(self, Realization::Extend)
    }
}

/// A whole word, split and ready for realization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub syllables: Vec<Syllable>,
    pub ending: WordEnding,
}
