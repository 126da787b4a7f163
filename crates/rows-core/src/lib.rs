//! Core types, vocabularies, and errors for responsive column arrangements.
//!
//! This crate provides the foundational types used across all other rows crates:
//! - Size tokens and breakpoint names
//! - Arrangements (per-breakpoint token sequences) and resolved arrangements
//! - Keyword vocabularies for each call site
//! - Error types

pub mod errors;
pub mod tokens;
pub mod types;
pub mod vocabulary;

pub use errors::*;
pub use tokens::*;
pub use types::*;
pub use vocabulary::*;
