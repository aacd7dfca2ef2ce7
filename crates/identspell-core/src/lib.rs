//! Shared types for identspell.
//!
//! - [`character`] -- ASCII letter classification used by the tokenizer
//! - [`enums`] -- verdicts and fixed policy constants
//! - [`word`] -- the validated lowercase [`word::Word`] type

pub mod character;
pub mod enums;
pub mod word;

/// Error returned when text cannot become a [`word::Word`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("invalid character {ch:?} in word {text:?}")]
    InvalidChar { ch: char, text: String },
}
