//! Arrangement resolution for responsive column layouts.
//!
//! This crate resolves:
//! - The token of one child from a repeating per-breakpoint pattern
//! - The effective token at every breakpoint, inheriting across breakpoints
//!
//! Resolution never validates tokens. Malformed tokens are passed through
//! unchanged; only translation looks inside them.

mod arrangement;
mod tokens;

pub use arrangement::{apply_fallback, resolve_arrangement, resolve_children};
pub use tokens::{resolve_token, resolve_token_or};
