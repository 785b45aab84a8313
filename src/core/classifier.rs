// File: src/core/classifier.rs
use crate::core::types::{Syllable, WordEnding};

/// Shape of a syllable, computed from (previous vowel present, consonant count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyllableShape {
    /// `- V`: word-initial vowel.
    StartingV,
    /// `V V`: vowel straight after a vowel.
    Vv,
    /// `- CV`
    StartingCv,
    /// `- CCV`
    StartingCcv,
    /// `V CV`: one consonant between two vowels.
    Vcv,
    /// `V CC..V`: a cluster between two vowels.
    Vccv,
}

impl SyllableShape {
    pub fn of(syllable: &Syllable) -> Self {
        match (syllable.opens_word(), syllable.cc.len()) {
            (true, 0) => SyllableShape::StartingV,
            (false, 0) => SyllableShape::Vv,
            (true, 1) => SyllableShape::StartingCv,
            (true, _) => SyllableShape::StartingCcv,
            (false, 1) => SyllableShape::Vcv,
            (false, _) => SyllableShape::Vccv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndingShape {
    /// `V -`
    EndingV,
    /// `V C`
    EndingVc,
    /// `V CC..`
    EndingVcc,
}

impl EndingShape {
    pub fn of(ending: &WordEnding) -> Self {
        match ending.cc.len() {
            0 => EndingShape::EndingV,
            1 => EndingShape::EndingVc,
            _ => EndingShape::EndingVcc,
        }
    }
}
