//! Transcript line parsing.
//!
//! - [`grammar`] - the ordered set of line shapes found in exports
//! - [`classifier`] - applies the grammars to decoded text

pub mod classifier;
pub mod grammar;

pub use classifier::{Classification, ClassifiedLine, LineClassifier};
pub use grammar::Grammar;
