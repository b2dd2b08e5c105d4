//! Tests for standard IO providers.

use crate::{FileInput, InputProvider, OutputTarget, StderrOutput, StdinInput};
use std::fs;
use std::io::{Read, Write};

#[test]
fn file_input_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.md");
    fs::write(&path, b"hello world").unwrap();

    let inp = FileInput::new(path.clone());
    assert_eq!(inp.path(), path.as_path());
    assert_eq!(inp.id(), path.to_string_lossy());

    let mut reader = inp.open().unwrap();
    let mut buf = String::new();
    reader.read_to_string(&mut buf).unwrap();

    assert_eq!(buf, "hello world");
}

#[test]
fn file_input_open_fails_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let inp = FileInput::new(dir.path().join("missing.md"));

    let err = inp.open().err().expect("open should fail");
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn std_stream_ids() {
    assert_eq!(StdinInput::default().id(), "-");
    assert_eq!(StderrOutput::default().id(), "stderr");

    let mut w = StderrOutput::new().open_append().unwrap();
    w.flush().unwrap();
}
