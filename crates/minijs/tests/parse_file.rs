use std::fs;

use minijs::{parse_file, MinijsError, ParseErrorKind};

#[test]
fn parse_file_reads_and_parses() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("main.js");
    fs::write(&path, "const greeting = 'hi';\nconsole.log(greeting);\n").expect("write");

    let file = parse_file(&path).expect("parse file");
    assert_eq!(file.statements.len(), 2);
}

#[test]
fn parse_file_surfaces_parse_and_io_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.js");
    fs::write(&path, "if (x) {}\n").expect("write");

    match parse_file(&path) {
        Err(MinijsError::Parse(err)) => {
            assert_eq!(err.kind, ParseErrorKind::UnsupportedConstruct)
        }
        other => panic!("expected parse error, got {other:?}"),
    }

    match parse_file(&dir.path().join("missing.js")) {
        Err(MinijsError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
