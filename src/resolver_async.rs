//! Asynchronous input resolver.
//!
//! Same priority rule, errors and trace lines as [`InputResolver`](crate::InputResolver),
//! on top of tokio file and stdin handles.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::config::ResolverOptions;
use crate::error::InputError;
use crate::io::{AsyncFileInput, AsyncInputProvider, AsyncStdinInput, OutputTarget, StderrOutput};
use crate::resolver::{DEFAULT_TASK_FILE, InputSource, absolutize};

/// An opened async input stream; dropping it releases the handle.
pub struct AsyncResolvedInput {
    source: InputSource,
    reader: Box<dyn AsyncRead + Unpin + Send>,
}

impl AsyncResolvedInput {
    pub fn source(&self) -> &InputSource {
        &self.source
    }

    /// Borrow the underlying stream.
    pub fn reader(&mut self) -> &mut (dyn AsyncRead + Unpin + Send + 'static) {
        self.reader.as_mut()
    }

    pub fn release(self) {
        drop(self);
    }
}

impl fmt::Debug for AsyncResolvedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncResolvedInput")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Async counterpart of [`InputResolver`](crate::InputResolver).
#[derive(Debug, Clone)]
pub struct AsyncInputResolver {
    options: ResolverOptions,
    stdin: Arc<dyn AsyncInputProvider>,
    diagnostics: Arc<dyn OutputTarget>,
    base_dir: Option<PathBuf>,
    default_file: PathBuf,
}

impl AsyncInputResolver {
    pub fn new(use_stdin: bool, verbose: bool) -> Self {
        Self::with_options(ResolverOptions::new(use_stdin, verbose))
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self {
            options,
            stdin: Arc::new(AsyncStdinInput::new()),
            diagnostics: Arc::new(StderrOutput::new()),
            base_dir: None,
            default_file: PathBuf::from(DEFAULT_TASK_FILE),
        }
    }

    pub fn with_stdin(mut self, stdin: Arc<dyn AsyncInputProvider>) -> Self {
        self.stdin = stdin;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn OutputTarget>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn with_default_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.default_file = file.into();
        self
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Determine the input source and open it.
    pub async fn resolve_input<S: AsRef<Path>>(
        &self,
        args: &[S],
    ) -> Result<AsyncResolvedInput, InputError> {
        if self.options.use_stdin {
            self.trace(format_args!("Reading from stdin..."));
            let reader = self.stdin.open().await.map_err(|source| InputError::Open {
                target: self.stdin.id().to_string(),
                source,
            })?;
            return Ok(AsyncResolvedInput {
                source: InputSource::Stdin,
                reader,
            });
        }

        match args.first() {
            Some(path) => self.open_file(path.as_ref()).await,
            None => self.open_file(&self.default_file).await,
        }
    }

    /// Resolve the input and read it to the end.
    pub async fn read_all<S: AsRef<Path>>(&self, args: &[S]) -> Result<Vec<u8>, InputError> {
        let mut input = self.resolve_input(args).await?;

        let mut content = Vec::new();
        input
            .reader
            .read_to_end(&mut content)
            .await
            .map_err(|source| InputError::Read {
                target: input.source.id(),
                source,
            })?;

        Ok(content)
    }

    async fn open_file(&self, path: &Path) -> Result<AsyncResolvedInput, InputError> {
        let abs_path = absolutize(path, self.base_dir.as_deref())?;

        if let Err(e) = tokio::fs::metadata(&abs_path).await {
            if e.kind() == io::ErrorKind::NotFound {
                return Err(InputError::NotFound { path: abs_path });
            }
        }

        let provider = AsyncFileInput::new(abs_path.clone());
        let reader = provider.open().await.map_err(|source| InputError::Open {
            target: provider.id().to_string(),
            source,
        })?;

        self.trace(format_args!("Reading from file: {}", abs_path.display()));

        Ok(AsyncResolvedInput {
            source: InputSource::File(abs_path),
            reader,
        })
    }

    fn trace(&self, line: fmt::Arguments<'_>) {
        if !self.options.verbose {
            return;
        }
        if let Ok(mut w) = self.diagnostics.open_append() {
            let _ = writeln!(w, "{line}");
        }
    }
}
