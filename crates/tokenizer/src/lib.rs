//! NearDup tokenizer layer.
//!
//! Splits raw text into a lazy stream of alphanumeric tokens. Every byte in
//! the active [`DelimiterSet`] acts as a boundary; runs of delimiters collapse
//! into a single boundary so no token is ever empty.
//!
//! ## Pure function guarantee
//!
//! No allocation per token, no locale lookups, no I/O. Tokens borrow the input
//! text, and the same text + delimiter set always yields the same sequence.
//!
//! ## Invariants worth knowing
//!
//! - Tokens are never empty.
//! - Every non-ASCII byte is a delimiter, so token boundaries always fall on
//!   UTF-8 character boundaries and every token is plain ASCII.
//! - A [`Tokens`] iterator cannot be rewound. Build a new one over the
//!   original text to scan again.
//!
//! ```
//! use tokenizer::{tokenize, DelimiterSet};
//!
//! let delims = DelimiterSet::non_alphanumeric();
//! let tokens: Vec<&str> = tokenize("Roses are red, my love!", &delims).collect();
//! assert_eq!(tokens, vec!["Roses", "are", "red", "my", "love"]);
//! ```

mod delimiters;
mod tokens;

pub use crate::delimiters::DelimiterSet;
pub use crate::tokens::{tokenize, Tokens};
