//! Checked reinterpretation between plain-old-data element types.
//!
//! Viewing one element type's bytes as another is split into a checked
//! conversion ([`Window::cast`]) that validates size divisibility and
//! pointer alignment, and a separately named unchecked fast path
//! ([`Window::cast_unchecked`]) for call sites that have already proven
//! both. Element types opt in through the [`Pod`] contract; nothing is
//! copied either way.

use thiserror::Error;

use crate::Window;

/// Marker contract for plain-old-data element types: every bit pattern
/// is a valid value and the representation contains no padding.
///
/// Implemented for the fixed-width integers and floats. User types may
/// opt in with an `unsafe impl`.
///
/// # Safety
///
/// Implementors assert both properties above, and that the type has a
/// nonzero size. A violating impl makes [`Window::cast`] produce values
/// with undefined contents.
#[allow(unsafe_code, reason = "the trait is a caller-asserted representation contract")]
pub unsafe trait Pod: Copy {}

macro_rules! impl_pod {
    ($($ty:ty),* $(,)?) => {
        $(
            #[allow(
                unsafe_code,
                reason = "fixed-width primitive: no padding, all bit patterns valid"
            )]
            unsafe impl Pod for $ty {}
        )*
    };
}

impl_pod!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, f32, f64);

/// Why a checked reinterpretation cast was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CastError {
    /// The viewed byte size does not divide evenly into target elements.
    #[error("byte size {size_bytes} is not a multiple of the target element size {target_size}")]
    SizeMismatch {
        /// Byte size of the source window.
        size_bytes: usize,
        /// Size of the target element type.
        target_size: usize,
    },
    /// The data pointer does not satisfy the target type's alignment.
    #[error("data pointer lacks the target element alignment of {target_align}")]
    Misaligned {
        /// Alignment the target element type requires.
        target_align: usize,
    },
}

impl<'a, T: Pod> Window<'a, T> {
    /// Reinterpret the viewed bytes as a window of `U` elements.
    ///
    /// The result covers `size_bytes() / size_of::<U>()` elements over
    /// the same memory, byte for byte. Fails when the byte size is not a
    /// multiple of the target element size, or when the data pointer is
    /// misaligned for `U`. The empty window casts to the empty window of
    /// any target.
    #[allow(
        unsafe_code,
        reason = "reinterpretation guarded by the size and alignment checks above it"
    )]
    pub fn cast<U: Pod>(&self) -> Result<Window<'a, U>, CastError> {
        let size_bytes = self.size_bytes();
        let target_size = std::mem::size_of::<U>();
        if target_size == 0 || size_bytes % target_size != 0 {
            return Err(CastError::SizeMismatch {
                size_bytes,
                target_size,
            });
        }
        if self.is_empty() {
            return Ok(Window::empty());
        }
        let target_align = std::mem::align_of::<U>();
        if self.as_ptr() as usize % target_align != 0 {
            return Err(CastError::Misaligned { target_align });
        }
        // SAFETY: size fit and alignment were checked above; both Pod
        // bounds make every source byte pattern a valid U.
        Ok(unsafe { self.cast_unchecked() })
    }

    /// Reinterpret without the size and alignment checks.
    ///
    /// # Safety
    ///
    /// `size_bytes()` must be a multiple of `size_of::<U>()` and the
    /// data pointer must satisfy `align_of::<U>()`.
    #[allow(
        unsafe_code,
        reason = "separately named fast path for call sites proven safe"
    )]
    pub unsafe fn cast_unchecked<U: Pod>(&self) -> Window<'a, U> {
        let len = self.size_bytes() / std::mem::size_of::<U>();
        if len == 0 {
            return Window::empty();
        }
        // SAFETY: caller guarantees size fit and alignment; Pod makes
        // every bit pattern a valid U; the region stays borrowed for 'a.
        let items = unsafe { std::slice::from_raw_parts(self.as_ptr().cast::<U>(), len) };
        Window::new(items)
    }
}
