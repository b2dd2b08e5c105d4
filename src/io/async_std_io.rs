//! Tokio-backed stdin and task-file providers.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncRead, BufReader};

use super::AsyncInputProvider;
use super::std_io::STDIN_ID;

/// Tokio handle on the process stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncStdinInput;

impl AsyncStdinInput {
    pub const fn new() -> Self {
        AsyncStdinInput
    }
}

#[async_trait]
impl AsyncInputProvider for AsyncStdinInput {
    fn id(&self) -> &str {
        STDIN_ID
    }

    async fn open(&self) -> io::Result<Box<dyn AsyncRead + Unpin + Send>> {
        Ok(Box::new(tokio::io::stdin()))
    }
}

/// A task file at an already-resolved path, read through a tokio `BufReader`.
#[derive(Debug, Clone)]
pub struct AsyncFileInput {
    display: String,
    path: PathBuf,
}

impl AsyncFileInput {
    pub fn new(path: PathBuf) -> Self {
        Self {
            display: path.to_string_lossy().into_owned(),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AsyncInputProvider for AsyncFileInput {
    fn id(&self) -> &str {
        &self.display
    }

    async fn open(&self) -> io::Result<Box<dyn AsyncRead + Unpin + Send>> {
        let file = File::open(&self.path).await?;
        Ok(Box::new(BufReader::new(file)))
    }
}
