// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write, sync::{Arc, PoisonError}};

use crate::{SafeRawTerminal, SendRawTerminal, StdMutex};

/// This struct represents an output device that can be used to write to the terminal.
/// - It is safe to clone.
/// - To write to it, call [`Self::lock()`] in its own block scope.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    /// Output goes into the returned [`StdoutMock`] instead of the terminal. Raw mode
    /// is skipped for mock devices.
    #[must_use]
    pub fn new_mock() -> (Self, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let it = Self {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (it, stdout_mock)
    }

    /// Locks the output device for writing. A poisoned lock is recovered, since the
    /// bytes in the buffer are still valid.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write the whole buffer and flush.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying device fails.
    pub fn write_and_flush(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut locked = self.lock();
        locked.write_all(bytes)?;
        locked.flush()
    }
}

/// In memory sink shared between an [`OutputDevice`] and the test that inspects it.
#[derive(Clone, Default, Debug)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
