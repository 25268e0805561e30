//! Generic non-owning window over contiguous memory.
//!
//! A [`Window`] pairs a data pointer with an element count and nothing
//! else. It never owns, grows, or frees the region it references, and
//! copying a window copies the view, never the data. Derived windows
//! (from [`slice`](Window::slice) and friends) borrow from the same
//! underlying buffer, not from the window that produced them, so they
//! may outlive it freely.
//!
//! # Degradation, not faults
//!
//! Derivation operations clamp: a slice past the end is the empty
//! window, an oversized count covers what is available. Element access
//! through [`get`](Window::get) is total; `window[i]` carries standard
//! slice indexing semantics; [`get_unchecked`](Window::get_unchecked)
//! is the zero-overhead path for call sites that have proven the index.

use std::fmt;
use std::ops::Index;

/// A non-owning view of a contiguous `[T]` region.
///
/// One fat pointer wide (data + element count). The empty window is the
/// no-data case: zero count, nothing to read.
///
/// Two windows compare equal when their element sequences compare
/// equal, regardless of which buffers they reference.
#[derive(PartialEq, Eq, Hash)]
pub struct Window<'a, T> {
    items: &'a [T],
}

/// Size assertion: a window is exactly one fat pointer.
const _: () = assert!(
    std::mem::size_of::<Window<'static, u8>>() == std::mem::size_of::<&[u8]>()
);

// Manual Clone/Copy: the derives would bound `T: Clone`/`T: Copy`, but
// a window is a borrow and copies freely for any element type.
#[allow(
    clippy::expl_impl_clone_on_copy,
    reason = "derive would add a spurious `T: Clone` bound"
)]
impl<T> Clone for Window<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Window<'_, T> {}

impl<T> Default for Window<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> Window<'a, T> {
    /// Create a window covering an entire borrowed slice.
    #[inline]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// The empty window: no data, zero count.
    #[inline]
    pub const fn empty() -> Self {
        Self { items: &[] }
    }

    /// Create a window from a raw pointer and element count.
    ///
    /// Escape hatch for buffers that arrive without a borrow (FFI,
    /// memory-mapped regions). A null `data` or a zero `len` yields the
    /// empty window, preserving the invariant that a window without data
    /// has zero count.
    ///
    /// # Safety
    ///
    /// When `len > 0` and `data` is non-null, `data` must be aligned and
    /// valid for reads of `len` consecutive `T` values for the whole of
    /// `'a`, and the region must not be mutated while the window lives.
    #[allow(unsafe_code, reason = "construction from pointer + count for FFI buffers")]
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Self {
        if data.is_null() || len == 0 {
            return Self::empty();
        }
        // SAFETY: caller guarantees validity for `len` reads over 'a.
        Self {
            items: unsafe { std::slice::from_raw_parts(data, len) },
        }
    }

    /// Borrow the window as a plain slice.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// Pointer to the first element (dangling for the empty window).
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the window covers no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total size of the viewed region in bytes (`len * size_of::<T>()`).
    #[inline]
    pub const fn size_bytes(&self) -> usize {
        self.items.len() * std::mem::size_of::<T>()
    }

    /// Element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    /// First element, or `None` when empty.
    #[inline]
    pub fn first(&self) -> Option<&'a T> {
        self.items.first()
    }

    /// Last element, or `None` when empty.
    #[inline]
    pub fn last(&self) -> Option<&'a T> {
        self.items.last()
    }

    /// Element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len()`](Self::len).
    #[inline]
    #[allow(
        unsafe_code,
        reason = "zero-overhead access for call sites that have proven the index"
    )]
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        debug_assert!(index < self.items.len(), "index {index} out of range");
        // SAFETY: caller guarantees `index < len`.
        unsafe { self.items.get_unchecked(index) }
    }

    /// Iterate over the viewed elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    /// Derived window covering at most `count` elements starting at
    /// `start`.
    ///
    /// A `start` at or past the end yields the empty window; `count` is
    /// clamped to the elements actually available. Never reads out of
    /// bounds, never panics.
    #[must_use]
    pub fn slice(&self, start: usize, count: usize) -> Self {
        let Some(tail) = self.items.get(start..) else {
            return Self::empty();
        };
        if tail.is_empty() {
            return Self::empty();
        }
        Self {
            items: &tail[..count.min(tail.len())],
        }
    }

    /// Derived window from `start` to the end.
    ///
    /// Equivalent to `slice(start, usize::MAX)`.
    #[inline]
    #[must_use]
    pub fn slice_from(&self, start: usize) -> Self {
        self.slice(start, usize::MAX)
    }
}

impl<T: PartialEq> Window<'_, T> {
    /// Smallest index holding `value`, or `None`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.index_of_from(value, 0)
    }

    /// Smallest index at or after `from` holding `value`, or `None`.
    pub fn index_of_from(&self, value: &T, from: usize) -> Option<usize> {
        let tail = self.items.get(from..)?;
        tail.iter().position(|item| item == value).map(|i| from + i)
    }

    /// `true` when `value` occurs anywhere in the window.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Smallest start index where `pattern` matches element-wise, or
    /// `None`.
    ///
    /// Empty patterns and patterns longer than the remaining span are
    /// never found. Plain quadratic scan: patterns are expected to be
    /// short, so the setup cost of a smarter algorithm does not pay off.
    #[inline]
    pub fn find(&self, pattern: Window<'_, T>) -> Option<usize> {
        self.find_from(pattern, 0)
    }

    /// Smallest start index at or after `from` where `pattern` matches,
    /// or `None`.
    pub fn find_from(&self, pattern: Window<'_, T>, from: usize) -> Option<usize> {
        let needle = pattern.items;
        if needle.is_empty() {
            return None;
        }
        let hay = self.items.get(from..)?;
        if needle.len() > hay.len() {
            return None;
        }
        hay.windows(needle.len())
            .position(|candidate| candidate == needle)
            .map(|i| from + i)
    }
}

impl<T> Index<usize> for Window<'_, T> {
    type Output = T;

    /// Standard slice indexing: panics when `index >= len()`. Use
    /// [`get`](Window::get) for the total accessor.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for Window<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &Window<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> From<&'a [T]> for Window<'a, T> {
    #[inline]
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Window<'a, T> {
    #[inline]
    fn from(items: &'a [T; N]) -> Self {
        Self::new(items)
    }
}

impl<T: fmt::Debug> fmt::Debug for Window<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items).finish()
    }
}
