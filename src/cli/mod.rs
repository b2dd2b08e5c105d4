//! CLI integration helpers.
//!
//! `InputArgs` models the global input flags of the tool (`--stdin`,
//! `-v/--verbose`, `--config`) plus the positional arguments. It can be filled
//! by hand, by [`parse_manual`], or by `sarge` with the `sarge` feature.
//!
//! ```rust,ignore
//! use taskmd_input::cli::parse_manual;
//! use taskmd_input::InputResolver;
//!
//! let args = parse_manual(std::env::args().skip(1))?;
//! let content = InputResolver::builder()
//!     .with_input_args(&args)
//!     .build()
//!     .read_all(args.positional())?;
//! ```

use crate::config::ResolverOptions;
use crate::error::CliError;

#[cfg(feature = "sarge")]
mod sarge;

/// Common input arguments for CLI applications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArgs {
    /// `--stdin`: read input from stdin instead of a file.
    pub stdin: bool,
    /// `-v` / `--verbose`: trace the chosen input on stderr.
    pub verbose: bool,
    /// `--config <path>`: explicit settings file.
    pub config: Option<String>,
    /// Positional arguments; the first one names the input file.
    pub files: Vec<String>,
}

impl InputArgs {
    /// Create new empty input arguments.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdin(mut self) -> Self {
        self.stdin = true;
        self
    }

    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn with_config(mut self, path: impl Into<String>) -> Self {
        self.config = Some(path.into());
        self
    }

    /// Add a positional argument.
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.files.push(path.into());
        self
    }

    pub fn options(&self) -> ResolverOptions {
        ResolverOptions::new(self.stdin, self.verbose)
    }

    pub fn positional(&self) -> &[String] {
        &self.files
    }
}

/// Parse the input flags from `argv` (without the program name).
///
/// Everything after `--` is positional, as is a lone `-`.
pub fn parse_manual<I, S>(argv: I) -> Result<InputArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = InputArgs::new();
    let mut iter = argv.into_iter().map(Into::into);

    while let Some(token) = iter.next() {
        match token.as_str() {
            "--" => {
                args.files.extend(iter.by_ref());
                break;
            }
            "--stdin" => args.stdin = true,
            "-v" | "--verbose" => args.verbose = true,
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::MissingValue("--config".into()))?;
                args.config = Some(value);
            }
            other => {
                if let Some(value) = other.strip_prefix("--config=") {
                    if value.is_empty() {
                        return Err(CliError::MissingValue("--config".into()));
                    }
                    args.config = Some(value.to_string());
                } else if other.starts_with('-') && other != "-" {
                    return Err(CliError::UnknownFlag(other.to_string()));
                } else {
                    args.files.push(other.to_string());
                }
            }
        }
    }

    Ok(args)
}
