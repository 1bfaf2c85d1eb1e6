use super::*;

#[test]
fn test_text_buffer_basic() {
    let mut buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.cursor(), (0, 0));

    buffer.set_cursor(1, 2);
    assert_eq!(buffer.cursor(), (1, 2));
}

#[test]
fn test_set_cursor_clamps_to_text() {
    let mut buffer = TextBuffer::from_text("ab\ncdef");

    buffer.set_cursor(9, 9);
    assert_eq!(buffer.cursor(), (1, 4));

    buffer.set_cursor(0, 9);
    assert_eq!(buffer.cursor(), (0, 2));
}

#[test]
fn test_pos_to_char() {
    let buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.pos_to_char((0, 0)), 0);
    assert_eq!(buffer.pos_to_char((1, 0)), 6);
}

#[test]
fn test_insert_str_moves_cursor_across_lines() {
    let mut buffer = TextBuffer::new();
    buffer.insert_str("a");
    assert_eq!(buffer.cursor(), (0, 1));

    buffer.insert_str("bc\ndé");
    assert_eq!(buffer.text(), "abc\ndé");
    assert_eq!(buffer.cursor(), (1, 2));
}

#[test]
fn test_insert_combining_mark_keeps_cursor_grapheme_index() {
    let mut buffer = TextBuffer::new();

    buffer.insert_str("e");
    buffer.insert_str("\u{301}");

    assert_eq!(buffer.text(), "e\u{301}");
    assert_eq!(buffer.line_grapheme_len(0), 1);
}

#[test]
fn test_delete_backward_joins_lines() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(1, 0);

    assert!(buffer.delete_backward());
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));

    buffer.set_cursor(0, 0);
    assert!(!buffer.delete_backward());
}

#[test]
fn test_delete_forward_at_line_end() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(0, 2);

    assert!(buffer.delete_forward());
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));

    buffer.move_end();
    assert!(!buffer.delete_forward());
}

#[test]
fn test_line_grapheme_len() {
    let buffer = TextBuffer::from_text("hello\nworld\n");

    assert_eq!(buffer.line_grapheme_len(0), 5);
    assert_eq!(buffer.line_grapheme_len(1), 5);
    assert_eq!(buffer.line_grapheme_len(7), 0);
}

#[test]
fn test_vertical_motion_clamps_column() {
    let mut buffer = TextBuffer::from_text("long line\nab\nlonger line");
    buffer.set_cursor(0, 8);

    buffer.move_down();
    assert_eq!(buffer.cursor(), (1, 2));

    buffer.move_down();
    assert_eq!(buffer.cursor(), (2, 2));

    buffer.move_left();
    buffer.move_left();
    buffer.move_left();
    assert_eq!(buffer.cursor(), (1, 2));

    buffer.move_right();
    assert_eq!(buffer.cursor(), (2, 0));
}

#[test]
fn test_set_text_resets_cursor() {
    let mut buffer = TextBuffer::from_text("abc");
    buffer.move_end();

    buffer.set_text("xyz\n123");
    assert_eq!(buffer.cursor(), (0, 0));
    assert_eq!(buffer.len_lines(), 2);
}

#[test]
fn test_insert_str_normalizes_carriage_returns() {
    let mut buffer = TextBuffer::new();

    buffer.insert_str("a\rb\r\nc");

    assert_eq!(buffer.text(), "a\nb\nc");
    assert_eq!(buffer.cursor(), (2, 1));
}

#[test]
fn test_delete_forward_joins_crlf_lines_from_loaded_text() {
    let mut buffer = TextBuffer::from_text("ab\r\ncd\rx");
    buffer.move_end();

    assert!(buffer.delete_forward());
    assert_eq!(buffer.text(), "abcd\rx");

    buffer.move_end();
    assert_eq!(buffer.cursor(), (0, 4));
    assert!(buffer.delete_forward());
    assert_eq!(buffer.text(), "abcdx");
}

#[test]
fn test_delete_backward_removes_whole_crlf_break() {
    let mut buffer = TextBuffer::from_text("ab\r\ncd");
    buffer.set_cursor(1, 0);

    assert!(buffer.delete_backward());

    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));
}
