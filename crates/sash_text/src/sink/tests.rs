use pretty_assertions::assert_eq;

use crate::TextWindow;

// === write_to ===

#[test]
fn write_to_vec_reports_length() {
    let win = TextWindow::new("payload");
    let mut sink: Vec<u8> = Vec::new();
    assert_eq!(win.write_to(&mut sink).ok(), Some(7));
    assert_eq!(sink, b"payload");
}

#[test]
fn write_to_with_empty_window() {
    let win = TextWindow::empty();
    let mut sink: Vec<u8> = Vec::new();
    assert_eq!(win.write_to(&mut sink).ok(), Some(0));
    assert!(sink.is_empty());
}

#[test]
fn write_to_passes_raw_bytes_through() {
    let win = TextWindow::from_bytes(&[0x00, 0xFF, 0x7F]);
    let mut sink: Vec<u8> = Vec::new();
    assert_eq!(win.write_to(&mut sink).ok(), Some(3));
    assert_eq!(sink, vec![0x00, 0xFF, 0x7F]);
}

#[test]
fn write_to_appends_to_existing_content() {
    let mut sink: Vec<u8> = b"head:".to_vec();
    let win = TextWindow::new("tail");
    assert_eq!(win.write_to(&mut sink).ok(), Some(4));
    assert_eq!(sink, b"head:tail");
}

#[test]
fn write_to_dyn_sink() {
    let win = TextWindow::new("dyn");
    let mut sink: Vec<u8> = Vec::new();
    let erased: &mut dyn std::io::Write = &mut sink;
    assert_eq!(win.write_to(erased).ok(), Some(3));
    assert_eq!(sink, b"dyn");
}

// === Display ===

#[test]
fn display_renders_utf8_content() {
    let win = TextWindow::new("21.5");
    assert_eq!(format!("{win}"), "21.5");
}

#[test]
fn display_replaces_invalid_utf8() {
    let win = TextWindow::from_bytes(&[b'a', 0xFF, b'b']);
    assert_eq!(format!("{win}"), "a\u{FFFD}b");
}

#[test]
fn display_honors_format_width() {
    let win = TextWindow::new("x");
    assert_eq!(format!("[{win:>3}]"), "[  x]");
}

// === Materialization ===

#[test]
fn to_text_round_trips_string_content() {
    let original = String::from("line one, line two");
    let win = TextWindow::from(&original);
    assert_eq!(win.to_text(), original);
}

#[test]
fn to_text_of_empty_window() {
    assert_eq!(TextWindow::empty().to_text(), String::new());
}

#[test]
fn to_text_of_sub_window() {
    let original = String::from("key=value");
    let win = TextWindow::from(&original);
    assert_eq!(win.slice_from(4).to_text(), "value");
}
