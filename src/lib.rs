// src/lib.rs

pub mod core;
pub mod error;
pub mod persistence;

pub use crate::core::engine::{Phonemizer, WordRealization};
pub use crate::core::language::{Language, Replacements};
pub use crate::core::oracle::{AliasOracle, ExtensionPolicy, NeverExtend, OtoIndex, SameVowelExtension, ToneRange};
pub use crate::core::types::{AliasSequence, Realization, Syllable, WordEnding};
pub use crate::error::{PhonemizerError, Result};
