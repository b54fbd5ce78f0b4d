use super::*;
use std::fs;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn delimiter_from_extension() {
    assert_eq!(Delimiter::from_path(Path::new("a/m.csv")), Delimiter::Comma);
    assert_eq!(Delimiter::from_path(Path::new("m.CSV.gz")), Delimiter::Comma);
    assert_eq!(Delimiter::from_path(Path::new("m.tsv")), Delimiter::Tab);
    assert_eq!(Delimiter::from_path(Path::new("m.txt")), Delimiter::Tab);
    assert_eq!(Delimiter::from_path(Path::new("matrix")), Delimiter::Tab);
}

#[test]
fn reads_tsv_matrix() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("m.tsv");
    fs::write(&path, "# comment\n1\t2\t3\n4\t5\t6\n").expect("write file");

    let m = read_dense(&path).expect("read");
    assert_eq!(m.dim(), (2, 3));
    assert_eq!(m[[0, 0]], 1.0);
    assert_eq!(m[[1, 2]], 6.0);
}

#[test]
fn reads_csv_with_spaces_and_specials() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("m.csv");
    fs::write(&path, "1.5, -2e3\nnan, inf\n").expect("write file");

    let m = read_dense(&path).expect("read");
    assert_eq!(m.dim(), (2, 2));
    assert_eq!(m[[0, 0]], 1.5);
    assert_eq!(m[[0, 1]], -2000.0);
    assert!(m[[1, 0]].is_nan());
    assert!(m[[1, 1]].is_infinite());
}

#[test]
fn reads_gzip_input() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("m.tsv.gz");
    let file = fs::File::create(&path).expect("create");
    let mut enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    enc.write_all(b"1\t2\n3\t4\n5\t6\n").expect("write gz");
    enc.finish().expect("finish gz");

    let m = read_dense(&path).expect("read");
    assert_eq!(m.dim(), (3, 2));
    assert_eq!(m[[2, 1]], 6.0);
}

#[test]
fn ragged_row_reports_line() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("m.tsv");
    fs::write(&path, "1\t2\t3\n4\t5\n").expect("write file");

    match read_dense(&path) {
        Err(InputError::RaggedRow {
            line,
            expected,
            found,
        }) => {
            assert_eq!(line, 2);
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("expected ragged row error, got {other:?}"),
    }
}

#[test]
fn invalid_value_reports_position() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("m.tsv");
    fs::write(&path, "1\t2\n3\tabc\n").expect("write file");

    match read_dense(&path) {
        Err(InputError::InvalidValue {
            line,
            column,
            value,
        }) => {
            assert_eq!(line, 2);
            assert_eq!(column, 2);
            assert_eq!(value, "abc");
        }
        other => panic!("expected invalid value error, got {other:?}"),
    }
}

#[test]
fn empty_file_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("m.tsv");
    fs::write(&path, "# only a comment\n").expect("write file");
    assert!(matches!(read_dense(&path), Err(InputError::EmptyMatrix(_))));
}
