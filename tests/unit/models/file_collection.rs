use super::*;
use crate::models::FileIcon;

#[test]
fn create_derives_extension_and_icon() {
    let mut files = FileCollection::new();
    let id = files.create("Hello World.py");

    let record = files.get(id).unwrap();
    assert_eq!(record.name(), "Hello World.py");
    assert_eq!(record.extension(), Some("py"));
    assert_eq!(record.icon(), FileIcon::Python);
    assert!(record.content.is_empty());
}

#[test]
fn extension_is_absent_without_a_dot() {
    let mut files = FileCollection::new();
    let plain = files.create("Makefile");
    let trailing = files.create("notes.");
    let dotted = files.create("archive.tar.gz");

    assert_eq!(files.get(plain).unwrap().extension(), None);
    assert_eq!(files.get(plain).unwrap().icon(), FileIcon::Generic);
    assert_eq!(files.get(trailing).unwrap().extension(), None);
    assert_eq!(files.get(dotted).unwrap().extension(), Some("gz"));
}

#[test]
fn insertion_order_is_display_order() {
    let mut files = FileCollection::new();
    let a = files.create("a.js");
    let b = files.create("b.css");
    let c = files.create("c.html");

    assert_eq!(files.ids(), &[a, b, c]);
    files.remove(b);
    assert_eq!(files.ids(), &[a, c]);
    assert_eq!(files.position(c), Some(1));
    assert_eq!(files.id_at(0), Some(a));
}

#[test]
fn duplicate_names_get_distinct_ids() {
    let mut files = FileCollection::new();
    let first = files.create("a.css");
    let second = files.create("a.css");

    assert_ne!(first, second);
    assert_eq!(files.len(), 2);
    assert_eq!(files.find_by_name("a.css"), Some(first));

    files.remove(first);
    assert_eq!(files.find_by_name("a.css"), Some(second));
}

#[test]
fn replace_keeps_position() {
    let mut files = FileCollection::new();
    let a = files.create("a.js");
    let b = files.create("b.js");

    assert!(files.replace(a, FileRecord::with_content("a.js", "let x = 1;")));
    assert_eq!(files.ids(), &[a, b]);
    assert_eq!(files.get(a).unwrap().content, "let x = 1;");
}

#[test]
fn unknown_targets_are_no_ops() {
    let mut files = FileCollection::new();
    let a = files.create("a.js");
    files.remove(a);

    assert!(files.remove(a).is_none());
    assert!(!files.replace(a, FileRecord::new("x")));
    assert!(!files.rename(a, "y"));
    assert!(files.remove_by_name("missing").is_none());
    assert!(!files.replace_by_name("missing", FileRecord::new("missing")));
    assert!(files.is_empty());
}

#[test]
fn rename_rederives_icon_and_keeps_content() {
    let mut files = FileCollection::new();
    let id = files.insert(FileRecord::with_content("main.js", "console.log(1)"));

    assert!(files.rename(id, "main.py"));
    let record = files.get(id).unwrap();
    assert_eq!(record.name(), "main.py");
    assert_eq!(record.icon(), FileIcon::Python);
    assert_eq!(record.content, "console.log(1)");
}

#[test]
fn name_addressed_operations_hit_first_match() {
    let mut files = FileCollection::new();
    let first = files.create("dup.txt");
    let second = files.create("dup.txt");

    assert!(files.replace_by_name("dup.txt", FileRecord::with_content("dup.txt", "one")));
    assert_eq!(files.get(first).unwrap().content, "one");
    assert!(files.get(second).unwrap().content.is_empty());

    let removed = files.remove_by_name("dup.txt").unwrap();
    assert_eq!(removed.content, "one");
    assert_eq!(files.ids(), &[second]);
}
