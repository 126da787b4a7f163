//! Size token classification and validation.
//!
//! Built on `nom` combinators. Classification is shared by the translator
//! (which never fails, malformed tokens simply carry no fraction) and by
//! validation of tokens typed into the editor (which reports why a token was
//! rejected).
//!
//! # Example
//!
//! ```
//! use rows_core::Vocabulary;
//! use rows_parser::{classify, validate_token, FractionPolicy, TokenKind};
//!
//! let vocab = Vocabulary::rows();
//! assert_eq!(classify("fill", &vocab), TokenKind::Keyword(rows_core::KeywordRole::Fill));
//! assert!(validate_token("3/2", &vocab, FractionPolicy::RejectImproper).is_err());
//! ```

mod classify;
mod lexer;
mod validate;

pub use classify::{classify, TokenKind};
pub use validate::{parse_arrangement, validate_token, FractionPolicy};
