//! Standard output sink.

use std::io::{self, Write};

use confgen_core::application::ports::OutputSink;

/// Output sink writing to the process's stdout.
///
/// Closing flushes; the stream itself stays open for the process.
#[derive(Debug)]
pub struct StdoutSink {
    out: io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl OutputSink for StdoutSink {
    fn close(mut self) -> io::Result<()> {
        self.out.flush()
    }
}
