use std::io;
use std::path::PathBuf;

use crate::error::{CliError, InputError, Stage};

#[test]
fn messages_name_the_offending_target() {
    let not_found = InputError::NotFound {
        path: PathBuf::from("/work/tasks.md"),
    };
    assert_eq!(not_found.to_string(), "file not found: /work/tasks.md");
    assert_eq!(not_found.target(), "/work/tasks.md");
    assert!(not_found.is_not_found());

    let open = InputError::Open {
        target: "/work/locked.md".into(),
        source: io::Error::from(io::ErrorKind::PermissionDenied),
    };
    assert!(open.to_string().starts_with("failed to open file /work/locked.md: "));
    assert_eq!(open.stage(), Stage::Open);
    assert!(!open.is_not_found());
}

#[test]
fn wrapped_cause_is_exposed_as_source() {
    let err = InputError::Read {
        target: "-".into(),
        source: io::Error::other("broken pipe"),
    };

    let source = std::error::Error::source(&err).expect("source");
    assert_eq!(source.to_string(), "broken pipe");
}

#[test]
fn stage_display() {
    assert_eq!(Stage::ResolvePath.to_string(), "ResolvePath");
    assert_eq!(Stage::Locate.to_string(), "Locate");
    assert_eq!(Stage::Read.to_string(), "Read");
}

#[test]
fn cli_error_display() {
    assert_eq!(
        CliError::UnknownFlag("--nope".into()).to_string(),
        "unknown flag: --nope"
    );
}
