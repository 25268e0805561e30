//! Delimiter tokenization driven by a caller-owned cursor.
//!
//! The cursor is a plain byte offset the caller holds across calls; the
//! window itself is never mutated, so one window can be walked by any
//! number of independent cursors at once. The state machine has two
//! states -- input remaining (`cursor < len`) and exhausted
//! (`cursor >= len`) -- and the exhausted state is terminal: further
//! calls return the empty token and leave the cursor where it is.

use sash_window::Window;

use crate::TextWindow;

impl<'a> TextWindow<'a> {
    /// Next token before `delim`, starting at `*cursor`.
    ///
    /// On a match at position `p` the token covers `[*cursor, p)` and
    /// the cursor moves to `p + 1`. When the delimiter is absent the
    /// token is the rest of the input and the cursor moves to the end.
    /// An exhausted cursor yields the empty token and does not move.
    ///
    /// Adjacent delimiters produce empty tokens; a delimiter in final
    /// position exhausts the cursor without producing a trailing one.
    pub fn next_token(&self, delim: u8, cursor: &mut usize) -> TextWindow<'a> {
        if *cursor >= self.len() {
            return TextWindow::empty();
        }
        match self.index_of_from(delim, *cursor) {
            Some(pos) => {
                let token = self.slice(*cursor, pos - *cursor);
                *cursor = pos + 1;
                token
            }
            None => {
                let token = self.slice_from(*cursor);
                *cursor = self.len();
                token
            }
        }
    }

    /// Next token before the delimiter sequence `delim`.
    ///
    /// Same state machine as [`next_token`](Self::next_token), with the
    /// cursor advancing past the whole sequence on a match. Sequence
    /// lookup follows [`Window::find`]: an empty `delim` is never found,
    /// so the token is the remaining input.
    pub fn next_token_seq(&self, delim: &[u8], cursor: &mut usize) -> TextWindow<'a> {
        if *cursor >= self.len() {
            return TextWindow::empty();
        }
        match self.as_window().find_from(Window::new(delim), *cursor) {
            Some(pos) => {
                let token = self.slice(*cursor, pos - *cursor);
                *cursor = pos + delim.len();
                token
            }
            None => {
                let token = self.slice_from(*cursor);
                *cursor = self.len();
                token
            }
        }
    }

    /// Iterator over the tokens of [`next_token`](Self::next_token),
    /// holding its own cursor.
    ///
    /// Interior empty tokens (between adjacent delimiters) are yielded;
    /// the terminal empties of an exhausted cursor are not.
    #[inline]
    pub fn tokens(&self, delim: u8) -> Tokens<'a> {
        Tokens {
            text: *self,
            delim,
            cursor: 0,
        }
    }
}

/// Iterator over the delimiter-separated tokens of a [`TextWindow`].
///
/// Created by [`TextWindow::tokens`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    text: TextWindow<'a>,
    delim: u8,
    cursor: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = TextWindow<'a>;

    fn next(&mut self) -> Option<TextWindow<'a>> {
        if self.cursor >= self.text.len() {
            return None;
        }
        Some(self.text.next_token(self.delim, &mut self.cursor))
    }
}

// Once the cursor is exhausted it never moves again.
impl std::iter::FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests;
