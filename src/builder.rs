//! Builder for creating InputResolver instances.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::InputArgs;
use crate::config::{ResolverOptions, Settings};
use crate::io::{InputProvider, OutputTarget, StderrOutput, StdinInput};
use crate::resolver::{DEFAULT_TASK_FILE, InputResolver};

pub struct InputResolverBuilder {
    options: ResolverOptions,
    stdin: Arc<dyn InputProvider>,
    diagnostics: Arc<dyn OutputTarget>,
    base_dir: Option<PathBuf>,
    default_file: PathBuf,
}

impl InputResolverBuilder {
    pub fn new() -> Self {
        Self {
            options: ResolverOptions::default(),
            stdin: Arc::new(StdinInput::new()),
            diagnostics: Arc::new(StderrOutput::new()),
            base_dir: None,
            default_file: PathBuf::from(DEFAULT_TASK_FILE),
        }
    }

    pub fn use_stdin(mut self, use_stdin: bool) -> Self {
        self.options.use_stdin = use_stdin;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.options.verbose = verbose;
        self
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Take the flags from parsed command-line arguments.
    pub fn with_input_args(self, args: &InputArgs) -> Self {
        self.with_options(args.options())
    }

    /// Take the flags from layered settings (config file, env, command line).
    pub fn with_settings(self, settings: &Settings) -> Self {
        self.with_options(settings.options())
    }

    /// Replace the stream used when stdin mode is on.
    pub fn with_stdin(mut self, stdin: Arc<dyn InputProvider>) -> Self {
        self.stdin = stdin;
        self
    }

    /// Replace the destination of verbose trace lines.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn OutputTarget>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Resolve relative paths against `dir` instead of the process working
    /// directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn with_default_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.default_file = file.into();
        self
    }

    pub fn build(self) -> InputResolver {
        InputResolver::from_parts(
            self.options,
            self.stdin,
            self.diagnostics,
            self.base_dir,
            self.default_file,
        )
    }
}

impl Default for InputResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
