//! Synchronous input resolver.
//!
//! Picks the stream a command reads from, in strict priority order:
//! the `--stdin` flag, then the first positional argument, then
//! `tasks.md` in the working directory.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::builder::InputResolverBuilder;
use crate::config::ResolverOptions;
use crate::error::InputError;
use crate::io::{FileInput, InputProvider, OutputTarget};

/// File read when neither `--stdin` nor a path argument is given.
pub const DEFAULT_TASK_FILE: &str = "tasks.md";

/// Where a resolved stream comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    /// Absolute path of the opened file
    File(PathBuf),
}

impl InputSource {
    /// Identifier used in errors: "-" for stdin, the path otherwise.
    pub fn id(&self) -> String {
        match self {
            InputSource::Stdin => "-".to_string(),
            InputSource::File(path) => path.to_string_lossy().into_owned(),
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, InputSource::Stdin)
    }

    /// The resolved path, if this source is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::Stdin => None,
            InputSource::File(path) => Some(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// An opened input stream.
///
/// Dropping the value releases the underlying handle (closing the file for
/// file sources). Stdin stays open: the process owns it.
pub struct ResolvedInput {
    source: InputSource,
    reader: Box<dyn Read + Send>,
}

impl ResolvedInput {
    pub(crate) fn new(source: InputSource, reader: Box<dyn Read + Send>) -> Self {
        Self { source, reader }
    }

    pub fn source(&self) -> &InputSource {
        &self.source
    }

    /// Release the stream now instead of at the end of the scope.
    pub fn release(self) {
        drop(self);
    }
}

impl Read for ResolvedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl fmt::Debug for ResolvedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedInput")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Resolves and opens the input of a single command invocation.
#[derive(Debug, Clone)]
pub struct InputResolver {
    options: ResolverOptions,
    stdin: Arc<dyn InputProvider>,
    diagnostics: Arc<dyn OutputTarget>,
    base_dir: Option<PathBuf>,
    default_file: PathBuf,
}

impl InputResolver {
    /// Create a resolver bound to the process stdin and stderr.
    pub fn new(use_stdin: bool, verbose: bool) -> Self {
        Self::with_options(ResolverOptions::new(use_stdin, verbose))
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        InputResolverBuilder::new().with_options(options).build()
    }

    pub fn builder() -> InputResolverBuilder {
        InputResolverBuilder::new()
    }

    pub(crate) fn from_parts(
        options: ResolverOptions,
        stdin: Arc<dyn InputProvider>,
        diagnostics: Arc<dyn OutputTarget>,
        base_dir: Option<PathBuf>,
        default_file: PathBuf,
    ) -> Self {
        Self {
            options,
            stdin,
            diagnostics,
            base_dir,
            default_file,
        }
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Determine the input source and open it.
    ///
    /// Priority: stdin flag > first argument > default `tasks.md`.
    /// Arguments after the first are ignored.
    pub fn resolve_input<S: AsRef<Path>>(&self, args: &[S]) -> Result<ResolvedInput, InputError> {
        if self.options.use_stdin {
            self.trace(format_args!("Reading from stdin..."));
            let reader = self.stdin.open().map_err(|source| InputError::Open {
                target: self.stdin.id().to_string(),
                source,
            })?;
            return Ok(ResolvedInput::new(InputSource::Stdin, reader));
        }

        match args.first() {
            Some(path) => self.open_file(path.as_ref()),
            None => self.open_file(&self.default_file),
        }
    }

    /// Resolve the input and read it to the end.
    ///
    /// The stream is released before returning, on success and on failure.
    pub fn read_all<S: AsRef<Path>>(&self, args: &[S]) -> Result<Vec<u8>, InputError> {
        let mut input = self.resolve_input(args)?;

        let mut content = Vec::new();
        input
            .read_to_end(&mut content)
            .map_err(|source| InputError::Read {
                target: input.source().id(),
                source,
            })?;

        Ok(content)
    }

    fn open_file(&self, path: &Path) -> Result<ResolvedInput, InputError> {
        let abs_path = absolutize(path, self.base_dir.as_deref())?;

        // Not atomic with the open below; a file removed in between surfaces
        // as an open error.
        if let Err(e) = fs::metadata(&abs_path) {
            if e.kind() == io::ErrorKind::NotFound {
                return Err(InputError::NotFound { path: abs_path });
            }
        }

        let provider = FileInput::new(abs_path.clone());
        let reader = provider.open().map_err(|source| InputError::Open {
            target: provider.id().to_string(),
            source,
        })?;

        self.trace(format_args!("Reading from file: {}", abs_path.display()));

        Ok(ResolvedInput::new(InputSource::File(abs_path), reader))
    }

    fn trace(&self, line: fmt::Arguments<'_>) {
        if !self.options.verbose {
            return;
        }
        // Trace output is informational; a broken diagnostics stream must not
        // fail the read.
        if let Ok(mut w) = self.diagnostics.open_append() {
            let _ = writeln!(w, "{line}");
        }
    }
}

/// Expand `path` to an absolute path, relative to `base_dir` when given and
/// to the process working directory otherwise.
pub(crate) fn absolutize(path: &Path, base_dir: Option<&Path>) -> Result<PathBuf, InputError> {
    let to_error = |source| InputError::PathResolution {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str().is_empty() {
        return Err(to_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot make an empty path absolute",
        )));
    }

    match base_dir {
        Some(base) if path.is_relative() => std::path::absolute(base.join(path)).map_err(to_error),
        _ => std::path::absolute(path).map_err(to_error),
    }
}
