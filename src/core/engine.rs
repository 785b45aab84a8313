use crate::core::language::Language;
use crate::core::oracle::{AliasOracle, ExtensionPolicy};
use crate::core::realizer::Realizer;
use crate::core::splitter::split_word;
use crate::core::types::{AliasSequence, Realization, Word};
use crate::error::Result;
use tracing::debug;

/// Aliases for one word: one realization per syllable, then the ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRealization {
    pub syllables: Vec<Realization>,
    pub ending: AliasSequence,
}

impl WordRealization {
    /// Playback order, with extended syllables contributing nothing.
    pub fn flatten(self) -> AliasSequence {
        self.syllables
            .into_iter()
            .flat_map(Realization::into_aliases)
            .chain(self.ending)
            .collect()
    }
}

/// Dictionary phonemes in, xCV aliases out.
///
/// Owns the language; the oracle and extension policy belong to the loaded
/// voicebank and are passed per call.
pub struct Phonemizer {
    language: Language,
}

impl Phonemizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn french() -> Self {
        Self::new(Language::french())
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Normalizes raw dictionary tokens and splits them into syllables.
    pub fn split<S: AsRef<str>>(&self, raw_phonemes: &[S], tones: &[i32]) -> Result<Word> {
        let phonemes = self.language.replacements().normalize_all(raw_phonemes);
        split_word(&self.language, &phonemes, tones)
    }

    pub fn realize(
        &self,
        word: &Word,
        oracle: &dyn AliasOracle,
        policy: &dyn ExtensionPolicy,
    ) -> WordRealization {
        let realizer = Realizer::new(&self.language, oracle, policy);
        let syllables = word.syllables.iter().map(|s| realizer.syllable(s)).collect();
        let ending = realizer.ending(&word.ending);
        WordRealization { syllables, ending }
    }

    pub fn realize_word<S: AsRef<str>>(
        &self,
        raw_phonemes: &[S],
        tones: &[i32],
        oracle: &dyn AliasOracle,
        policy: &dyn ExtensionPolicy,
    ) -> Result<WordRealization> {
        let word = self.split(raw_phonemes, tones)?;
        debug!(syllables = word.syllables.len(), coda = word.ending.cc.len(), "split word");
        Ok(self.realize(&word, oracle, policy))
    }

    pub fn aliases_for_word<S: AsRef<str>>(
        &self,
        raw_phonemes: &[S],
        tones: &[i32],
        oracle: &dyn AliasOracle,
        policy: &dyn ExtensionPolicy,
    ) -> Result<AliasSequence> {
        Ok(self.realize_word(raw_phonemes, tones, oracle, policy)?.flatten())
    }
}
