//! Input provider trait definition.

use std::fmt::Debug;
use std::io::Read;

/// Trait for synchronous input providers.
///
/// Implementors open a readable stream from stdin, a file, or an in-memory
/// buffer. The resolver only ever sees this trait, so tests can stand in for
/// the process stdin.
pub trait InputProvider: Send + Sync + Debug {
    /// Returns a unique identifier for this input source.
    ///
    /// Convention: "-" for stdin, file path for files.
    fn id(&self) -> &str;

    /// Open and return a new readable stream.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}
