use pretty_assertions::assert_eq;

use crate::TextWindow;

// === Byte delimiter ===

#[test]
fn csv_walkthrough() {
    let win = TextWindow::new("val1,val2,val3");
    let mut cursor = 0;

    assert_eq!(win.next_token(b',', &mut cursor), "val1");
    assert_eq!(cursor, 5);

    assert_eq!(win.next_token(b',', &mut cursor), "val2");
    assert_eq!(cursor, 10);

    assert_eq!(win.next_token(b',', &mut cursor), "val3");
    assert_eq!(cursor, 14);

    // Exhausted: empty tokens, cursor pinned.
    assert!(win.next_token(b',', &mut cursor).is_empty());
    assert_eq!(cursor, 14);
    assert!(win.next_token(b',', &mut cursor).is_empty());
    assert_eq!(cursor, 14);
}

#[test]
fn missing_delimiter_yields_rest_of_input() {
    let win = TextWindow::new("no delimiters here");
    let mut cursor = 0;
    assert_eq!(win.next_token(b',', &mut cursor), "no delimiters here");
    assert_eq!(cursor, win.len());
}

#[test]
fn leading_delimiter_yields_empty_first_token() {
    let win = TextWindow::new(",a");
    let mut cursor = 0;
    assert!(win.next_token(b',', &mut cursor).is_empty());
    assert_eq!(cursor, 1);
    assert_eq!(win.next_token(b',', &mut cursor), "a");
}

#[test]
fn adjacent_delimiters_yield_empty_token() {
    let win = TextWindow::new("a,,b");
    let mut cursor = 0;
    assert_eq!(win.next_token(b',', &mut cursor), "a");
    assert!(win.next_token(b',', &mut cursor).is_empty());
    assert_eq!(win.next_token(b',', &mut cursor), "b");
    assert_eq!(cursor, 4);
}

#[test]
fn trailing_delimiter_exhausts_without_trailing_token() {
    let win = TextWindow::new("a,b,");
    let mut cursor = 0;
    assert_eq!(win.next_token(b',', &mut cursor), "a");
    assert_eq!(win.next_token(b',', &mut cursor), "b");
    assert_eq!(cursor, 4);
    assert!(win.next_token(b',', &mut cursor).is_empty());
    assert_eq!(cursor, 4);
}

#[test]
fn empty_input_is_immediately_terminal() {
    let win = TextWindow::empty();
    let mut cursor = 0;
    assert!(win.next_token(b',', &mut cursor).is_empty());
    assert_eq!(cursor, 0);
}

#[test]
fn cursor_far_past_end_stays_put() {
    let win = TextWindow::new("a,b");
    let mut cursor = 900;
    assert!(win.next_token(b',', &mut cursor).is_empty());
    assert_eq!(cursor, 900);
}

#[test]
fn independent_cursors_do_not_interfere() {
    let win = TextWindow::new("x,y,z");
    let mut fast = 0;
    let mut slow = 0;

    assert_eq!(win.next_token(b',', &mut fast), "x");
    assert_eq!(win.next_token(b',', &mut fast), "y");
    assert_eq!(win.next_token(b',', &mut slow), "x");
    assert_eq!(win.next_token(b',', &mut fast), "z");
    assert_eq!(win.next_token(b',', &mut slow), "y");

    assert_eq!(fast, 5);
    assert_eq!(slow, 4);
}

#[test]
fn tokens_borrow_the_source_buffer() {
    let owned = String::from("k=v");
    let win = TextWindow::from(&owned);
    let mut cursor = 0;
    let key = win.next_token(b'=', &mut cursor);
    let value = win.next_token(b'=', &mut cursor);
    assert_eq!(key, "k");
    assert_eq!(value, "v");
    assert_eq!(key.as_ptr(), owned.as_ptr());
}

// === Sequence delimiter ===

#[test]
fn seq_delimiter_walkthrough() {
    let win = TextWindow::new("a::b::c");
    let mut cursor = 0;

    assert_eq!(win.next_token_seq(b"::", &mut cursor), "a");
    assert_eq!(cursor, 3);
    assert_eq!(win.next_token_seq(b"::", &mut cursor), "b");
    assert_eq!(cursor, 6);
    assert_eq!(win.next_token_seq(b"::", &mut cursor), "c");
    assert_eq!(cursor, 7);
    assert!(win.next_token_seq(b"::", &mut cursor).is_empty());
    assert_eq!(cursor, 7);
}

#[test]
fn seq_delimiter_absent_yields_rest() {
    let win = TextWindow::new("abc");
    let mut cursor = 0;
    assert_eq!(win.next_token_seq(b"::", &mut cursor), "abc");
    assert_eq!(cursor, 3);
}

#[test]
fn empty_seq_delimiter_is_never_found() {
    let win = TextWindow::new("abc");
    let mut cursor = 0;
    assert_eq!(win.next_token_seq(b"", &mut cursor), "abc");
    assert_eq!(cursor, 3);
}

#[test]
fn seq_delimiter_longer_than_input_yields_rest() {
    let win = TextWindow::new("ab");
    let mut cursor = 0;
    assert_eq!(win.next_token_seq(b"abc", &mut cursor), "ab");
    assert_eq!(cursor, 2);
}

#[test]
fn overlapping_seq_matches_take_the_earliest() {
    let win = TextWindow::new("aaa");
    let mut cursor = 0;
    assert!(win.next_token_seq(b"aa", &mut cursor).is_empty());
    assert_eq!(cursor, 2);
    assert_eq!(win.next_token_seq(b"aa", &mut cursor), "a");
    assert_eq!(cursor, 3);
}

#[test]
fn seq_cursor_advances_past_whole_delimiter() {
    let win = TextWindow::new("key-->value");
    let mut cursor = 0;
    assert_eq!(win.next_token_seq(b"-->", &mut cursor), "key");
    assert_eq!(cursor, 6);
    assert_eq!(win.next_token_seq(b"-->", &mut cursor), "value");
}

// === Tokens iterator ===

#[test]
fn iterator_collects_all_tokens() {
    let win = TextWindow::new("val1,val2,val3");
    let tokens: Vec<_> = win.tokens(b',').collect();
    assert_eq!(tokens, vec!["val1", "val2", "val3"]);
}

#[test]
fn iterator_yields_interior_empty_tokens() {
    let win = TextWindow::new("a,,b");
    let tokens: Vec<_> = win.tokens(b',').collect();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], "a");
    assert!(tokens[1].is_empty());
    assert_eq!(tokens[2], "b");
}

#[test]
fn iterator_skips_trailing_empty() {
    let win = TextWindow::new("a,b,");
    let tokens: Vec<_> = win.tokens(b',').collect();
    assert_eq!(tokens, vec!["a", "b"]);
}

#[test]
fn iterator_on_empty_input_is_empty() {
    assert_eq!(TextWindow::empty().tokens(b',').count(), 0);
}

#[test]
fn iterator_is_fused() {
    let win = TextWindow::new("a");
    let mut tokens = win.tokens(b',');
    assert_eq!(tokens.next(), Some(TextWindow::new("a")));
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
}

#[test]
fn iterator_clones_keep_their_own_cursor() {
    let win = TextWindow::new("a,b");
    let mut first = win.tokens(b',');
    assert_eq!(first.next(), Some(TextWindow::new("a")));
    let mut second = first.clone();
    assert_eq!(first.next(), Some(TextWindow::new("b")));
    assert_eq!(second.next(), Some(TextWindow::new("b")));
}

// === Property tests ===

mod properties {
    use proptest::prelude::*;

    use crate::TextWindow;

    proptest! {
        /// Joining the yielded tokens with the delimiter (plus the
        /// delimiter itself when the input ends in one) reconstructs the
        /// input exactly.
        #[test]
        fn tokens_reconstruct_the_input(
            bytes in proptest::collection::vec(any::<u8>(), 0..48),
            delim in any::<u8>(),
        ) {
            let win = TextWindow::from_bytes(&bytes);
            let tokens: Vec<_> = win.tokens(delim).collect();

            let mut rebuilt: Vec<u8> = Vec::new();
            for (i, token) in tokens.iter().enumerate() {
                if i > 0 {
                    rebuilt.push(delim);
                }
                rebuilt.extend_from_slice(token.as_bytes());
            }
            if bytes.last() == Some(&delim) {
                rebuilt.push(delim);
            }
            prop_assert_eq!(rebuilt, bytes);
        }

        /// A full manual drain leaves the cursor exactly at the end.
        #[test]
        fn drained_cursor_rests_at_len(
            bytes in proptest::collection::vec(any::<u8>(), 1..48),
            delim in any::<u8>(),
        ) {
            let win = TextWindow::from_bytes(&bytes);
            let mut cursor = 0;
            // Bounded by len + 1 iterations: every call either advances
            // the cursor or is terminal.
            for _ in 0..=bytes.len() {
                let _ = win.next_token(delim, &mut cursor);
            }
            prop_assert_eq!(cursor, bytes.len());
        }

        /// No yielded token ever contains the delimiter.
        #[test]
        fn tokens_never_contain_the_delimiter(
            bytes in proptest::collection::vec(any::<u8>(), 0..48),
            delim in any::<u8>(),
        ) {
            let win = TextWindow::from_bytes(&bytes);
            for token in win.tokens(delim) {
                prop_assert!(!token.contains(delim));
            }
        }
    }
}
