// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

/// Number of rows one mouse wheel notch scrolls.
pub const WHEEL_SCROLL_ROWS: usize = 3;

/// The window onto the list that is currently on screen. Rows have a fixed height of
/// one terminal line, so all the math here is plain index arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Index of the first visible item.
    pub scroll_offset: usize,
    /// Number of visible rows.
    pub height: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            scroll_offset: 0,
            height,
        }
    }

    /// Item indices that are on screen, clamped to `row_count`.
    #[must_use]
    pub fn visible_range(&self, row_count: usize) -> Range<usize> {
        let start = self.scroll_offset.min(row_count);
        let end = self.scroll_offset.saturating_add(self.height).min(row_count);
        start..end
    }

    /// Maps a row relative to the top of the list area to an item index. `None` when the
    /// row is below the viewport or past the last item.
    #[must_use]
    pub fn index_at(&self, relative_row: usize, row_count: usize) -> Option<usize> {
        if relative_row >= self.height {
            return None;
        }
        let index = self.scroll_offset + relative_row;
        (index < row_count).then_some(index)
    }

    /// Inverse of [`Self::index_at`]. `None` when `index` is scrolled out of view.
    #[must_use]
    pub fn relative_row_of(&self, index: usize) -> Option<usize> {
        let relative_row = index.checked_sub(self.scroll_offset)?;
        (relative_row < self.height).then_some(relative_row)
    }

    fn max_offset(&self, row_count: usize) -> usize { row_count.saturating_sub(self.height) }

    /// Returns `true` if the offset actually changed.
    pub fn scroll_up(&mut self, rows: usize) -> bool {
        let old = self.scroll_offset;
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
        old != self.scroll_offset
    }

    /// Returns `true` if the offset actually changed.
    pub fn scroll_down(&mut self, rows: usize, row_count: usize) -> bool {
        let old = self.scroll_offset;
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(rows)
            .min(self.max_offset(row_count));
        old != self.scroll_offset
    }

    pub fn page_up(&mut self) -> bool { self.scroll_up(self.height.max(1)) }

    pub fn page_down(&mut self, row_count: usize) -> bool {
        self.scroll_down(self.height.max(1), row_count)
    }

    pub fn scroll_to_start(&mut self) -> bool { self.scroll_up(self.scroll_offset) }

    pub fn scroll_to_end(&mut self, row_count: usize) -> bool {
        self.scroll_down(row_count, row_count)
    }

    /// Called on terminal resize. Keeps the offset valid for the new height.
    pub fn set_height(&mut self, height: usize, row_count: usize) {
        self.height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_offset(row_count));
    }
}
