use std::path::PathBuf;

use miette::Diagnostic;

use crate::error::{InputDiagnostic, InputError};

#[test]
fn not_found_diagnostic_suggests_stdin() {
    let diag = InputDiagnostic::from(InputError::NotFound {
        path: PathBuf::from("/work/tasks.md"),
    });

    assert_eq!(diag.message, "[Locate] on '/work/tasks.md'");
    let help = diag.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("--stdin"));
}

#[test]
fn input_error_converts_to_report() {
    let report: miette::Report = InputError::Read {
        target: "-".into(),
        source: std::io::Error::other("boom"),
    }
    .into();

    assert_eq!(report.to_string(), "[Read] on '-'");
}
