//! Bounded, fallible numeric parsing.
//!
//! Malformed input is reported, never folded into a default value, so a
//! parsed zero always means the text said zero. Inputs longer than
//! [`MAX_NUMERIC_LEN`] are refused up front, which keeps the cost of
//! any single parse bounded by a small constant.

use thiserror::Error;

use crate::TextWindow;

/// Longest input, in bytes, any numeric parser accepts.
///
/// Every `i64` and every finite `f64` has a canonical rendering well
/// under this bound; longer inputs fail with
/// [`ParseNumError::TooLong`].
pub const MAX_NUMERIC_LEN: usize = 64;

/// Why numeric parsing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseNumError {
    /// The window was empty, or held only a sign.
    #[error("empty numeric input")]
    Empty,
    /// The input exceeds [`MAX_NUMERIC_LEN`] bytes.
    #[error("numeric input of {len} bytes exceeds the supported maximum")]
    TooLong {
        /// Length of the offending input.
        len: usize,
    },
    /// A byte that is not a decimal digit, at this offset.
    #[error("invalid digit at byte {pos}")]
    InvalidDigit {
        /// Byte offset of the first non-digit.
        pos: usize,
    },
    /// The value does not fit the target type.
    #[error("value out of range for the target type")]
    OutOfRange,
    /// Input that does not form a number in the target grammar.
    #[error("malformed numeric input")]
    Malformed,
}

impl TextWindow<'_> {
    /// Parse the full window as a decimal `i64`.
    ///
    /// Grammar: optional `+`/`-` sign, then one or more ASCII digits,
    /// nothing else -- no surrounding whitespace, no separators. Pair
    /// with [`trim`](TextWindow::trim) for loosely formatted input.
    /// Accumulation is checked, so values outside `i64` report
    /// [`ParseNumError::OutOfRange`] instead of wrapping.
    pub fn parse_i64(&self) -> Result<i64, ParseNumError> {
        let bytes = self.as_bytes();
        if bytes.len() > MAX_NUMERIC_LEN {
            return Err(ParseNumError::TooLong { len: bytes.len() });
        }
        let (negative, digits, digits_at) = match bytes.split_first() {
            None => return Err(ParseNumError::Empty),
            Some((b'-', rest)) => (true, rest, 1),
            Some((b'+', rest)) => (false, rest, 1),
            Some(_) => (false, bytes, 0),
        };
        if digits.is_empty() {
            return Err(ParseNumError::Empty);
        }

        // Accumulate on the negative side so i64::MIN parses cleanly.
        let mut value: i64 = 0;
        for (i, &b) in digits.iter().enumerate() {
            if !b.is_ascii_digit() {
                return Err(ParseNumError::InvalidDigit { pos: digits_at + i });
            }
            let digit = i64::from(b - b'0');
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_sub(digit))
                .ok_or(ParseNumError::OutOfRange)?;
        }
        if negative {
            Ok(value)
        } else {
            value.checked_neg().ok_or(ParseNumError::OutOfRange)
        }
    }

    /// Parse the full window as an `f64`.
    ///
    /// Accepts the standard library float grammar (decimal point,
    /// exponent, `inf`, `NaN`); anything else reports
    /// [`ParseNumError::Malformed`].
    pub fn parse_f64(&self) -> Result<f64, ParseNumError> {
        self.float_text()?
            .parse()
            .map_err(|_| ParseNumError::Malformed)
    }

    /// Parse the full window as an `f32`.
    ///
    /// Same grammar as [`parse_f64`](Self::parse_f64).
    pub fn parse_f32(&self) -> Result<f32, ParseNumError> {
        self.float_text()?
            .parse()
            .map_err(|_| ParseNumError::Malformed)
    }

    /// Shared float-path validation: length bound, non-empty, UTF-8.
    fn float_text(&self) -> Result<&str, ParseNumError> {
        let bytes = self.as_bytes();
        if bytes.len() > MAX_NUMERIC_LEN {
            return Err(ParseNumError::TooLong { len: bytes.len() });
        }
        if bytes.is_empty() {
            return Err(ParseNumError::Empty);
        }
        self.as_str().ok_or(ParseNumError::Malformed)
    }
}
