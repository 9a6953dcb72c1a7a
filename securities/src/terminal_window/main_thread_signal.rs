// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::BenchmarkReport;

/// Signals that spawned tasks send back to the main event loop. All store mutation and
/// painting happens on the loop in response to these.
#[derive(Debug, Clone)]
pub enum MainThreadSignal {
    /// Exit the main event loop.
    Exit,
    /// Clear the screen and repaint the list, and the prompt if one is up.
    Render,
    /// The benchmark's initial delay elapsed.
    RunBulkUpdate,
    /// The benchmark's report delay elapsed.
    ShowReport(BenchmarkReport),
}

/// Whether the main event loop keeps going after handling a signal or input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Exit,
}
