//! Buffered file sink.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use confgen_core::application::ports::OutputSink;
use tracing::trace;

/// Output sink writing to a file on disk.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Ok(Self::from_file(file, path))
    }

    /// Wrap a file the caller already opened for writing.
    pub fn from_file(file: File, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: BufWriter::new(file),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl OutputSink for FileSink {
    fn close(self) -> io::Result<()> {
        trace!(path = %self.path.display(), "Closing output file");
        let file = self.writer.into_inner().map_err(io::IntoInnerError::into_error)?;

        // Dropping a File discards close(2) errors, so deferred write
        // failures are collected here. Pipes and devices cannot be synced.
        if file.metadata()?.is_file() {
            file.sync_data()?;
        }
        Ok(())
    }
}
