//! Non-owning windows over contiguous memory.
//!
//! A [`Window`] is a small `Copy` value referencing a contiguous run of
//! elements it does not own:
//! - Construction from slices, fixed arrays, or raw pointer + count
//! - Clamped slicing that degrades instead of faulting
//! - Linear search for single elements and element patterns
//! - Checked reinterpretation casts between [`Pod`] element types
//!
//! The `'a` lifetime ties every window to the buffer it references, so
//! the aliasing hazards of a pointer-and-count view (use-after-free,
//! mutation while viewed) are compile errors here rather than runtime
//! contracts.
//!
//! This crate is standalone so embedded consumers can take the generic
//! window without pulling in the text layer (`sash_text`).

mod cast;
mod window;

pub use cast::{CastError, Pod};
pub use window::Window;
