//! Text windows for zero-allocation parsing.
//!
//! A [`TextWindow`] wraps a byte [`Window`] and adds the text-shaped
//! operations:
//! - Content equality against other windows, `str`, and `String`
//! - Prefix/suffix tests and ASCII-whitespace trimming
//! - Delimiter tokenization driven by a caller-owned cursor (plus a
//!   [`Tokens`] iterator holding its own)
//! - Bounded, fallible numeric parsing
//! - A write-bytes sink contract and owned materialization
//!
//! Content is treated as raw bytes throughout. Nothing validates an
//! encoding beyond the whitespace class trimming uses;
//! [`TextWindow::as_str`] offers the UTF-8-checked view when one is
//! wanted.

mod parse;
mod sink;
mod text;
mod tokenize;

pub use parse::{ParseNumError, MAX_NUMERIC_LEN};
pub use sash_window::Window;
pub use text::TextWindow;
pub use tokenize::Tokens;
