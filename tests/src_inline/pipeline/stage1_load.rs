use super::*;
use std::fs;
use tempfile::tempdir;

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write file");
}

#[test]
fn stage1_wide_matrix() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("wide.tsv");
    write_file(&path, "1\t2\t3\n4\t5\t6\n");

    let ctx = run_stage1(&path).expect("stage1");
    assert_eq!(ctx.n_rows, 2);
    assert_eq!(ctx.n_cols, 3);
    assert_eq!(ctx.delimiter, Delimiter::Tab);
    assert_eq!(ctx.axis(), ChannelAxis::Rows);
    assert_eq!(ctx.n_channels(), 2);
    assert_eq!(ctx.matrix_path, path);
}

#[test]
fn stage1_tall_csv_matrix() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tall.csv");
    write_file(&path, "1,4\n2,5\n3,6\n");

    let ctx = run_stage1(&path).expect("stage1");
    assert_eq!(ctx.delimiter, Delimiter::Comma);
    assert_eq!(ctx.axis(), ChannelAxis::Columns);
    assert_eq!(ctx.n_channels(), 2);
}

#[test]
fn stage1_missing_file() {
    let dir = tempdir().expect("tempdir");
    let err = run_stage1(&dir.path().join("nope.tsv")).expect_err("missing");
    assert!(matches!(err, Stage1Error::Input(InputError::MissingFile(_))));
}
