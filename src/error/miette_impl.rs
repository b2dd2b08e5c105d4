//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{InputError, Stage};

/// A diagnostic wrapper for input errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct InputDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::ResolvePath => "Pass a non-empty path and run from an accessible working directory",
        Stage::Locate => "Pass an existing file, create tasks.md here, or use --stdin",
        Stage::Open => "Check the file permissions",
        Stage::Read => "The input stream failed while it was being read",
    }
}

impl From<InputError> for InputDiagnostic {
    fn from(e: InputError) -> Self {
        let stage = e.stage();
        let message = format!("[{}] on '{}'", stage, e.target());
        let source: Option<Box<dyn std::error::Error + Send + Sync>> = match e {
            InputError::PathResolution { source, .. }
            | InputError::Open { source, .. }
            | InputError::Read { source, .. } => Some(Box::new(source)),
            InputError::NotFound { path } => Some(
                format!("file not found: {}", path.display()).into(),
            ),
        };

        InputDiagnostic {
            message,
            source,
            help: Some(help_for(stage).into()),
            severity: Severity::Error,
        }
    }
}

impl From<InputError> for miette::Report {
    fn from(e: InputError) -> Self {
        miette::Report::new(InputDiagnostic::from(e))
    }
}
