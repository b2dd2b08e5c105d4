//! Stream source seam for the async resolver.

use std::fmt::Debug;
use std::io;

use async_trait::async_trait;
use tokio::io::AsyncRead;

/// Where [`AsyncInputResolver`](crate::AsyncInputResolver) gets its stdin
/// stream from; tests plug in an in-memory source here.
#[async_trait]
pub trait AsyncInputProvider: Send + Sync + Debug {
    /// Name used in traces and errors ("-" for stdin).
    fn id(&self) -> &str;

    async fn open(&self) -> io::Result<Box<dyn AsyncRead + Unpin + Send>>;
}
