// File: src/error.rs
use thiserror::Error;

/// Errors surfaced while loading configuration or splitting words.
/// Realization itself never fails; a missing alias is a branch, not an error.
#[derive(Debug, Error)]
pub enum PhonemizerError {
    #[error("word has no phonemes")]
    EmptyWord,

    #[error("word has no vowel: {0:?}")]
    NoVowel(Vec<String>),

    #[error("empty phoneme at position {0}")]
    EmptyPhoneme(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid language descriptor: {0}")]
    Json(#[from] serde_json::Error),

    #[error("oto index cache error: {0}")]
    Cache(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, PhonemizerError>;
