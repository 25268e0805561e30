//! Byte-sink output and owned materialization.
//!
//! The window carries no formatting logic of its own: serialization is
//! "hand the raw byte span to an external sink, report bytes written".
//! `io::Write` is that capability here; `Display` covers formatted
//! output hosts; [`TextWindow::to_text`] is the one deliberate
//! allocation, delegating to the owned `String` collaborator.

use std::fmt;
use std::io;

use crate::TextWindow;

impl TextWindow<'_> {
    /// Write the raw byte span to `sink`, returning the bytes written.
    pub fn write_to<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<usize> {
        sink.write_all(self.as_bytes())?;
        Ok(self.len())
    }

    /// Materialize an owned copy of the content.
    ///
    /// Non-UTF-8 sequences are replaced with U+FFFD, the same way
    /// [`Display`](fmt::Display) renders them.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }
}

impl fmt::Display for TextWindow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}

#[cfg(test)]
mod tests;
