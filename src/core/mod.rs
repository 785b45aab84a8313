pub mod classifier;
pub mod engine;
pub mod language;
pub mod oracle;
pub mod realizer;
pub mod splitter;
pub mod types;
