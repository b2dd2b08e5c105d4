//! Process-backed providers: stdin, task files on disk, and stderr for the
//! verbose trace.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use super::{InputProvider, OutputTarget};

/// Identifier reported for stdin in traces and errors.
pub(crate) const STDIN_ID: &str = "-";

/// The process stdin, selected by `--stdin`.
///
/// The process owns the stream; dropping an opened handle leaves it open.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInput;

impl StdinInput {
    pub const fn new() -> Self {
        StdinInput
    }
}

impl InputProvider for StdinInput {
    fn id(&self) -> &str {
        STDIN_ID
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(io::stdin()))
    }
}

/// A task file at an already-resolved path.
///
/// Each open returns a fresh `BufReader` over the file, so callers reading
/// line by line do not hit the file with tiny reads.
#[derive(Debug, Clone)]
pub struct FileInput {
    display: String,
    path: PathBuf,
}

impl FileInput {
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

impl InputProvider for FileInput {
    fn id(&self) -> &str {
        &self.display
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        File::open(&self.path).map(|file| Box::new(BufReader::new(file)) as Box<dyn Read + Send>)
    }
}

/// Default destination of the verbose trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrOutput;

impl StderrOutput {
    pub const fn new() -> Self {
        StderrOutput
    }
}

impl OutputTarget for StderrOutput {
    fn id(&self) -> &str {
        "stderr"
    }

    fn open_append(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stderr()))
    }
}
