//! Resolver flags.

/// Flags fixed at resolver construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolverOptions {
    /// Read standard input, ignoring positional arguments
    pub use_stdin: bool,
    /// Write trace lines to the diagnostics target
    pub verbose: bool,
}

impl ResolverOptions {
    pub fn new(use_stdin: bool, verbose: bool) -> Self {
        Self { use_stdin, verbose }
    }
}
