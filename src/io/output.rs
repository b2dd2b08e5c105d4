//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for diagnostic output targets.
///
/// The resolver writes its verbose trace through this trait instead of
/// touching the process stderr directly.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    fn id(&self) -> &str;

    /// Open the target for appending to existing content.
    fn open_append(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
