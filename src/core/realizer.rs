// File: src/core/realizer.rs
use crate::core::classifier::{EndingShape, SyllableShape};
use crate::core::language::Language;
use crate::core::oracle::{AliasOracle, ExtensionPolicy};
use crate::core::types::{AliasSequence, Realization, Syllable, WordEnding};
use tracing::debug;

/// Turns syllables and word endings into xCV aliases.
///
/// Holds only shared, read-only state, so one realizer can serve
/// many notes from many threads.
pub struct Realizer<'a> {
    language: &'a Language,
    oracle: &'a dyn AliasOracle,
    policy: &'a dyn ExtensionPolicy,
}

impl<'a> Realizer<'a> {
    pub fn new(
        language: &'a Language,
        oracle: &'a dyn AliasOracle,
        policy: &'a dyn ExtensionPolicy,
    ) -> Self {
        Self { language, oracle, policy }
    }

    /// Realizes one syllable. Cluster transitions come first, in cluster
    /// order, and the head alias (the one carrying the vowel) comes last.
    pub fn syllable(&self, syllable: &Syllable) -> Realization {
        let prev_v = self.language.previous_vowel(&syllable.prev_v);
        let cc = &syllable.cc;
        let v = &syllable.v;
        let tone = syllable.tone;
        let shape = SyllableShape::of(syllable);

        let mut aliases = Vec::new();
        let head = match shape {
            SyllableShape::StartingV => format!("- {v}"),
            SyllableShape::Vv => {
                if self.policy.can_extend(syllable) {
                    debug!(vowel = %v, "extending previous alias");
                    return Realization::Extend;
                }
                v.clone()
            }
            SyllableShape::StartingCv => format!("- {}{v}", cc[0]),
            SyllableShape::StartingCcv => {
                self.push_transitions(&mut aliases, cc, cc.len() - 1, tone);
                format!("- {}{v}", cc[cc.len() - 1])
            }
            SyllableShape::Vcv => format!("{}{v}", cc[0]),
            SyllableShape::Vccv => {
                aliases.push(format!("{prev_v} {}", cc[0]));

                let last = cc.len() - 1;
                let mut head = format!("{}{}{v}", cc[last - 1], cc[last]);
                // The CCV head covers the last pair; transitions stop before it.
                let mut window = cc.len() - 2;
                if !self.oracle.has_oto(&head, tone) {
                    debug!(alias = %head, "no CCV alias, falling back to - CV");
                    window = window.saturating_sub(1);
                    head = format!("- {}{v}", cc[last]);
                }
                self.push_transitions(&mut aliases, cc, window, tone);
                head
            }
        };
        debug!(?shape, head = %head, transitions = aliases.len(), "realized syllable");

        aliases.push(head);
        Realization::Emit(aliases)
    }

    /// Realizes the tail of a word. Plosive codas get a release alias.
    pub fn ending(&self, ending: &WordEnding) -> AliasSequence {
        let v = &ending.prev_v;
        let cc = &ending.cc;
        let mut aliases = Vec::new();

        match EndingShape::of(ending) {
            EndingShape::EndingV => aliases.push(format!("{v} -")),
            EndingShape::EndingVc => {
                aliases.push(format!("{v} {}", cc[0]));
                if self.language.is_plosive(&cc[0]) {
                    aliases.push(format!("{} -", cc[0]));
                }
            }
            EndingShape::EndingVcc => {
                aliases.push(format!("{v} {}", cc[0]));
                self.push_transitions(&mut aliases, cc, cc.len() - 1, ending.tone);
                let last = &cc[cc.len() - 1];
                if self.language.is_plosive(last) {
                    aliases.push(format!("{last} -"));
                }
            }
        }
        aliases
    }

    /// Pushes `c[i] c[i+1]` for `i < count`, keeping only recorded ones.
    fn push_transitions(&self, aliases: &mut AliasSequence, cc: &[String], count: usize, tone: i32) {
        for pair in cc.windows(2).take(count) {
            let ccx = format!("{} {}", pair[0], pair[1]);
            if self.oracle.has_oto(&ccx, tone) {
                aliases.push(ccx);
            } else {
                debug!(alias = %ccx, tone, "skipping unrecorded transition");
            }
        }
    }
}
