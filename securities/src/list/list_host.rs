// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, VirtualList};

/// What the list asks its host to repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawRequest {
    /// Only the bounds of this item's row.
    Row(usize),
    /// Every visible row.
    Full,
}

/// The UI side of the virtualized list. Implementations paint synchronously, so a
/// caller timing [`ListHost::refresh`] measures the actual repaint.
pub trait ListHost {
    /// Repaint the row of item `index`. A no-op if it is scrolled out of view.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    fn invalidate_row(&mut self, list: &VirtualList<'_>, index: usize) -> CommonResult<()>;

    /// Repaint every visible row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    fn refresh(&mut self, list: &VirtualList<'_>) -> CommonResult<()>;

    /// Dispatch a [`RedrawRequest`] to the matching method.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    fn redraw(&mut self, list: &VirtualList<'_>, request: RedrawRequest) -> CommonResult<()> {
        match request {
            RedrawRequest::Row(index) => self.invalidate_row(list, index),
            RedrawRequest::Full => self.refresh(list),
        }
    }
}
