//! # taskmd-input
//!
//! Input source resolution for the taskmd command-line tool.
//!
//! ## Overview
//!
//! A command reads its task list from exactly one place, chosen in strict
//! priority order:
//! 1. standard input, when `--stdin` is set (positional arguments are ignored)
//! 2. the first positional argument, as a file path
//! 3. `tasks.md` in the current working directory
//!
//! File paths are expanded to absolute paths before they are opened, and file
//! streams are buffered. Failures are reported as [`InputError`]:
//! `PathResolution`, `NotFound`, `Open` or `Read`. Nothing is retried.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use taskmd_input::InputResolver;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!     let content = InputResolver::new(false, true).read_all(&args)?;
//!     println!("{} bytes", content.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Streams are injectable
//!
//! The process stdin and stderr are only defaults. [`InputResolverBuilder`]
//! accepts any [`InputProvider`] as stdin and any [`OutputTarget`] for the
//! verbose trace, plus a base directory for relative paths, which is how the
//! tests run without touching process-wide state.
//!
//! ## Releasing the stream
//!
//! [`InputResolver::resolve_input`] returns a [`ResolvedInput`]; dropping it
//! (or calling [`ResolvedInput::release`]) closes the file. Stdin stays open.
//! [`InputResolver::read_all`] owns the stream for the duration of the read,
//! so it is released on every exit path.
//!
//! ## Features
//!
//! - `async` - [`AsyncInputResolver`] on Tokio
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - Parse the input flags with sarge

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Core modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod resolver;

// Async modules (feature-gated)
#[cfg(feature = "async")]
pub mod resolver_async;

// Re-exports for convenience
pub use builder::InputResolverBuilder;
pub use cli::{InputArgs, parse_manual};
pub use config::{ResolverOptions, Settings, SettingsOrigin};
pub use error::{CliError, ConfigError, InputError, Stage};
pub use io::{
    FileInput, InMemorySink, InMemorySource, InputProvider, OutputTarget, StderrOutput, StdinInput,
};
pub use resolver::{DEFAULT_TASK_FILE, InputResolver, InputSource, ResolvedInput};

// Async re-exports
#[cfg(feature = "async")]
pub use io::{AsyncFileInput, AsyncInMemorySource, AsyncInputProvider, AsyncStdinInput};
#[cfg(feature = "async")]
pub use resolver_async::{AsyncInputResolver, AsyncResolvedInput};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::InputDiagnostic;

/// Build a resolver from the layered settings of the current process:
/// `.taskmd.yaml` (or the `--config` file), `TASKMD_*` variables, then the
/// command-line flags in `args`. Trace lines go to stderr.
pub fn resolver_from_args(args: &InputArgs) -> InputResolver {
    resolver_from_args_with(args, Arc::new(StderrOutput::new()))
}

/// Like [`resolver_from_args`], writing trace lines to `diagnostics`.
///
/// An unreadable or malformed settings file never fails the command: its
/// values are dropped and, with `--verbose`, a line says so.
pub fn resolver_from_args_with(args: &InputArgs, diagnostics: Arc<dyn OutputTarget>) -> InputResolver {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let home = config::home_dir();
    let (settings, origin) =
        Settings::load_or_default(args.config.as_deref().map(Path::new), &cwd, home.as_deref());

    if args.verbose {
        let line = match &origin {
            SettingsOrigin::Defaults => None,
            SettingsOrigin::File(path) => Some(format!("Using config file: {}", path.display())),
            SettingsOrigin::Ignored(e) => Some(format!("Ignoring config file: {e}")),
        };
        if let (Some(line), Ok(mut w)) = (line, diagnostics.open_append()) {
            let _ = writeln!(w, "{line}");
        }
    }

    let settings = settings.with_process_env().merge_flags(args);
    InputResolverBuilder::new()
        .with_settings(&settings)
        .with_diagnostics(diagnostics)
        .build()
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
