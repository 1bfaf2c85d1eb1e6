use super::*;

#[test]
fn typing_and_editing_tracks_cursor() {
    let mut entry = NameEntry::default();
    entry.insert_str("mian.rs");
    assert_eq!(entry.cursor(), 7);

    for _ in 0..5 {
        assert!(entry.cursor_left());
    }
    assert_eq!(entry.cursor(), 2);
    assert!(entry.cursor_right());
    assert!(entry.backspace());
    assert!(entry.backspace());
    entry.insert_str("ai");

    assert_eq!(entry.value(), "main.rs");
}

#[test]
fn multibyte_characters_move_by_char() {
    let mut entry = NameEntry::default();
    entry.insert_str("é.py");
    while entry.cursor_left() {}
    assert_eq!(entry.cursor(), 0);

    assert!(entry.cursor_right());
    assert_eq!(entry.cursor(), 'é'.len_utf8());
    assert!(entry.backspace());
    assert_eq!(entry.value(), ".py");
}

#[test]
fn blank_names_are_rejected_until_edited() {
    let mut entry = NameEntry::default();
    entry.insert_str("   ");

    assert_eq!(entry.accept(), None);
    assert_eq!(entry.error(), Some("Name required"));

    entry.insert('a');
    assert_eq!(entry.error(), None);
    assert_eq!(entry.accept().as_deref(), Some("a"));
}

#[test]
fn control_characters_are_dropped_from_pastes() {
    let mut entry = NameEntry::default();
    entry.insert_str("a\nb\t.js");
    assert_eq!(entry.value(), "ab.js");
}

#[test]
fn edges_are_no_ops() {
    let mut entry = NameEntry::default();
    assert!(!entry.backspace());
    assert!(!entry.cursor_left());
    assert!(!entry.cursor_right());
}
