use super::*;
use std::io::Read;
use tempfile::tempdir;

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.tsv");
    assert!(matches!(open_reader(&path), Err(InputError::MissingFile(_))));
}

#[test]
fn plain_file_is_read_verbatim() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("plain.tsv");
    std::fs::write(&path, "1\t2\n").expect("write file");

    let mut text = String::new();
    open_reader(&path)
        .expect("reader")
        .read_to_string(&mut text)
        .expect("read");
    assert_eq!(text, "1\t2\n");
}
