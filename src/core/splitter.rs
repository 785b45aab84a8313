// File: src/core/splitter.rs
use crate::core::language::Language;
use crate::core::types::{Syllable, Word, WordEnding};
use crate::error::{PhonemizerError, Result};

/// Splits a normalized phoneme sequence into vowel-centred syllables and
/// a trailing ending.
///
/// Any token that is not a vowel counts as a consonant, so tokens the
/// dictionary table leaves unmapped pass through into the aliases.
/// Consonants between two vowels open the later syllable. `tones` gives one
/// tone per syllable; a short list repeats its last tone, an empty one means 0.
pub fn split_word<S: AsRef<str>>(language: &Language, phonemes: &[S], tones: &[i32]) -> Result<Word> {
    if phonemes.is_empty() {
        return Err(PhonemizerError::EmptyWord);
    }
    let tone_at = |i: usize| tones.get(i).or(tones.last()).copied().unwrap_or(0);

    let mut syllables = Vec::new();
    let mut prev_v = String::new();
    let mut cc = Vec::new();

    for (position, phoneme) in phonemes.iter().map(|p| p.as_ref()).enumerate() {
        if phoneme.is_empty() {
            return Err(PhonemizerError::EmptyPhoneme(position));
        }
        if language.is_vowel(phoneme) {
            syllables.push(Syllable {
                prev_v: std::mem::replace(&mut prev_v, phoneme.to_string()),
                cc: std::mem::take(&mut cc),
                v: phoneme.to_string(),
                tone: tone_at(syllables.len()),
                can_extend: false,
            });
        } else {
            cc.push(phoneme.to_string());
        }
    }

    if syllables.is_empty() {
        return Err(PhonemizerError::NoVowel(
            phonemes.iter().map(|p| p.as_ref().to_string()).collect(),
        ));
    }

    let ending = WordEnding {
        prev_v,
        cc,
        tone: tone_at(syllables.len() - 1),
    };
    Ok(Word { syllables, ending })
}

impl Word {
    /// Marks a syllable as an extension note. Out-of-range indices are ignored.
    pub fn mark_extension(&mut self, index: usize) {
        if let Some(syllable) = self.syllables.get_mut(index) {
            syllable.can_extend = true;
        }
    }
}
