//! In-memory output sink for testing.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex, MutexGuard},
};

use confgen_core::application::ports::OutputSink;

/// Which operation a [`MemorySink`] should fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InjectedFailure {
    #[default]
    None,
    Write,
    Close,
}

#[derive(Debug, Default)]
struct MemorySinkInner {
    buffer: Vec<u8>,
    closed: bool,
    close_calls: usize,
}

/// In-memory sink. Clones share the same buffer, so a test can hand one
/// clone to the code under test and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<MemorySinkInner>>,
    failure: InjectedFailure,
}

impl MemorySink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose writes or close fail with `io::ErrorKind::Other`.
    pub fn failing(failure: InjectedFailure) -> Self {
        Self {
            failure,
            ..Self::default()
        }
    }

    /// Everything written so far, decoded lossily.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock().buffer).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.lock().buffer.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Number of times `close` succeeded on any clone.
    pub fn close_calls(&self) -> usize {
        self.lock().close_calls
    }

    fn lock(&self) -> MutexGuard<'_, MemorySinkInner> {
        // A panic while holding the lock leaves plain bytes behind; keep going.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.failure == InjectedFailure::Write {
            return Err(io::Error::other("injected write failure"));
        }
        let mut inner = self.lock();
        if inner.closed {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "write to closed sink",
            ));
        }
        inner.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputSink for MemorySink {
    fn close(self) -> io::Result<()> {
        if self.failure == InjectedFailure::Close {
            return Err(io::Error::other("injected close failure"));
        }
        let mut inner = self.lock();
        inner.closed = true;
        inner.close_calls += 1;
        Ok(())
    }
}
