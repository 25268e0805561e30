//! Read-only text fragments over borrowed bytes.
//!
//! [`TextWindow`] holds a byte [`Window`] by composition and derefs to
//! it, so every generic operation (clamped slicing, search, casts) is
//! available unchanged while the text-specific surface lives here. The
//! windows produced by trimming and slicing borrow from the same
//! underlying buffer as their source.

use std::ffi::CStr;
use std::fmt;
use std::ops::Deref;

use sash_window::Window;

/// A non-owning, read-only text fragment.
///
/// The same shape as the generic window (one fat pointer), specialized
/// to byte elements. No terminator is assumed or required after the
/// viewed range.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextWindow<'a> {
    window: Window<'a, u8>,
}

/// Size assertion: the text window adds nothing to the byte window.
const _: () = assert!(
    std::mem::size_of::<TextWindow<'static>>() == std::mem::size_of::<Window<'static, u8>>()
);

impl<'a> TextWindow<'a> {
    /// Window over the bytes of a borrowed `str`.
    #[inline]
    pub const fn new(text: &'a str) -> Self {
        Self {
            window: Window::new(text.as_bytes()),
        }
    }

    /// The empty text window.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            window: Window::empty(),
        }
    }

    /// Window over raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            window: Window::new(bytes),
        }
    }

    /// Window over the content of a null-terminated string, excluding
    /// the terminator.
    #[inline]
    pub fn from_cstr(text: &'a CStr) -> Self {
        Self::from_bytes(text.to_bytes())
    }

    /// Promote a generic byte window.
    #[inline]
    pub const fn from_window(window: Window<'a, u8>) -> Self {
        Self { window }
    }

    /// The viewed bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.window.as_slice()
    }

    /// The underlying byte window.
    #[inline]
    pub const fn as_window(&self) -> Window<'a, u8> {
        self.window
    }

    /// UTF-8-checked view of the content, `None` when invalid.
    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Derived text window covering at most `count` bytes starting at
    /// `start`, clamped like [`Window::slice`].
    #[inline]
    #[must_use]
    pub fn slice(&self, start: usize, count: usize) -> Self {
        Self {
            window: self.window.slice(start, count),
        }
    }

    /// Derived text window from `start` to the end.
    #[inline]
    #[must_use]
    pub fn slice_from(&self, start: usize) -> Self {
        Self {
            window: self.window.slice_from(start),
        }
    }

    /// `true` when both windows hold byte-identical content.
    #[inline]
    pub fn equals(&self, other: TextWindow<'_>) -> bool {
        self.as_bytes() == other.as_bytes()
    }

    /// `true` when the window begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.as_bytes().starts_with(prefix.as_ref())
    }

    /// `true` when the window ends with `suffix`.
    #[inline]
    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        self.as_bytes().ends_with(suffix.as_ref())
    }

    /// Sub-window with leading and trailing ASCII whitespace removed.
    ///
    /// All-whitespace input trims to the empty window. Idempotent.
    #[inline]
    #[must_use]
    pub fn trim(&self) -> Self {
        self.trim_start().trim_end()
    }

    /// Sub-window with leading ASCII whitespace removed.
    #[must_use]
    pub fn trim_start(&self) -> Self {
        let bytes = self.as_bytes();
        let start = bytes
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        Self::from_bytes(&bytes[start..])
    }

    /// Sub-window with trailing ASCII whitespace removed.
    #[must_use]
    pub fn trim_end(&self) -> Self {
        let bytes = self.as_bytes();
        let trailing = bytes
            .iter()
            .rev()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        Self::from_bytes(&bytes[..bytes.len() - trailing])
    }

    /// Smallest index holding `byte`, or `None`.
    ///
    /// SIMD-accelerated (`memchr`), shadowing the scalar scan the
    /// generic window offers through deref.
    #[inline]
    pub fn index_of(&self, byte: u8) -> Option<usize> {
        memchr::memchr(byte, self.as_bytes())
    }

    /// Smallest index at or after `from` holding `byte`, or `None`.
    pub fn index_of_from(&self, byte: u8, from: usize) -> Option<usize> {
        let tail = self.as_bytes().get(from..)?;
        memchr::memchr(byte, tail).map(|i| from + i)
    }

    /// `true` when `byte` occurs anywhere in the window.
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.index_of(byte).is_some()
    }
}

impl<'a> Deref for TextWindow<'a> {
    type Target = Window<'a, u8>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.window
    }
}

impl AsRef<[u8]> for TextWindow<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a> From<&'a str> for TextWindow<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a String> for TextWindow<'a> {
    #[inline]
    fn from(text: &'a String) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a [u8]> for TextWindow<'a> {
    #[inline]
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<'a> From<&'a CStr> for TextWindow<'a> {
    #[inline]
    fn from(text: &'a CStr) -> Self {
        Self::from_cstr(text)
    }
}

impl<'a> From<Window<'a, u8>> for TextWindow<'a> {
    #[inline]
    fn from(window: Window<'a, u8>) -> Self {
        Self::from_window(window)
    }
}

impl PartialEq<str> for TextWindow<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for TextWindow<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<String> for TextWindow<'_> {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<TextWindow<'_>> for &str {
    #[inline]
    fn eq(&self, other: &TextWindow<'_>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Debug for TextWindow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextWindow({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}
