//! Identifier spell checking for English dictionaries.
//!
//! # Architecture
//!
//! - [`tokenizer`] -- boundary splitting and case segmentation of raw tokens
//! - [`speller`] -- dictionary oracles, the oracle cache and the lexical checker
//! - [`handle`] -- [`handle::IdentSpellHandle`], the tokenize-filter-check pipeline

pub mod handle;
pub mod speller;
pub mod tokenizer;
