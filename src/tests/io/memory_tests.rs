//! Tests for in-memory IO implementations.

use crate::{InMemorySink, InMemorySource, InputProvider, OutputTarget};
use std::io::{Read, Write};

#[test]
fn in_memory_source_reopens_from_start() {
    let src = InMemorySource::from_string("-", "hello");

    for _ in 0..2 {
        let mut reader = src.open().expect("open in-memory source");
        let mut buf = String::new();
        reader.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "hello");
    }
}

#[test]
fn in_memory_sink_appends_and_clears() {
    let sink = InMemorySink::new("diag");

    {
        let mut w = sink.open_append().unwrap();
        w.write_all(b"abc").unwrap();
    }
    {
        let mut w = sink.open_append().unwrap();
        w.write_all(b"def").unwrap();
    }
    assert_eq!(sink.contents(), b"abcdef".to_vec());
    assert_eq!(sink.contents_string(), "abcdef");

    sink.clear();
    assert!(sink.contents().is_empty());
}
