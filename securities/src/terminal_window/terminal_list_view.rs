// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::{cursor::MoveTo,
                queue,
                style::{Attribute, Print, SetAttribute},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;
use unicode_width::UnicodeWidthChar;

use crate::{CommonResult, ListHost, ListLayout, OutputDevice, RenderRow, Size, Viewport,
            VirtualList, VirtualListSource, ok};

/// Counters the session summary reports, and tests assert on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintStats {
    pub full_refreshes: usize,
    pub scoped_redraws: usize,
    pub rows_painted: usize,
}

/// The terminal implementation of [`ListHost`]. It owns the viewport, and paints rows
/// straight to the [`OutputDevice`], one flush per redraw.
///
/// The bottom line of the window is a status line; the rest belongs to the list.
#[allow(missing_debug_implementations)]
pub struct TerminalListView {
    pub output_device: OutputDevice,
    pub layout: ListLayout,
    pub viewport: Viewport,
    pub window_size: Size,
    pub stats: PaintStats,
}

/// Pads or truncates `text` to exactly `width` display columns.
#[must_use]
pub fn fit_to_width(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let mut it = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        it.push(ch);
        used += ch_width;
    }
    it.extend(std::iter::repeat_n(' ', width - used));
    it
}

impl TerminalListView {
    #[must_use]
    pub fn new(
        output_device: OutputDevice,
        layout: ListLayout,
        window_size: Size,
    ) -> Self {
        Self {
            output_device,
            layout,
            viewport: Viewport::new(Self::list_height(layout, window_size)),
            window_size,
            stats: PaintStats::default(),
        }
    }

    /// Rows available to the list: everything below `origin_row`, minus the status line.
    fn list_height(layout: ListLayout, window_size: Size) -> usize {
        usize::from(
            window_size
                .row_height
                .saturating_sub(layout.origin_row)
                .saturating_sub(1),
        )
    }

    fn status_row(&self) -> u16 { self.window_size.row_height.saturating_sub(1) }

    pub fn resize(&mut self, window_size: Size, row_count: usize) {
        self.window_size = window_size;
        self.viewport
            .set_height(Self::list_height(self.layout, window_size), row_count);
    }

    /// Clears the whole screen first, then does a [`ListHost::refresh`]. Used after a
    /// resize and when the acknowledgement prompt goes away.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn clear_and_refresh(&mut self, list: &VirtualList<'_>) -> CommonResult<()> {
        let mut buffer: Vec<u8> = vec![];
        queue!(buffer, Clear(ClearType::All)).into_diagnostic()?;
        self.output_device
            .write_and_flush(&buffer)
            .into_diagnostic()?;
        self.refresh(list)
    }

    /// Columns left for the list to the right of `origin_col`.
    fn available_width(&self) -> u16 {
        self.window_size.col_width.saturating_sub(self.layout.origin_col)
    }

    /// The glyph and label cells of `row`, clipped so they never run past the right
    /// edge of the window.
    fn row_text(&self, row: RenderRow<'_>) -> String {
        let available_width = self.available_width();
        let glyph_width = self.layout.glyph_width.min(available_width);
        let label_width = self
            .layout
            .label_width
            .min(available_width - glyph_width);
        let mut it = fit_to_width(row.glyph_str(), glyph_width);
        it.push_str(&fit_to_width(row.label, label_width));
        it
    }

    /// Clipped one cell short of the window width, so the bottom right cell is never
    /// written and the terminal never scrolls.
    fn status_text(&self, row_count: usize) -> String {
        let range = self.viewport.visible_range(row_count);
        let status = if range.is_empty() {
            format!("0 of {row_count}")
        } else {
            format!("{}-{} of {row_count}", range.start + 1, range.end)
        };
        fit_to_width(
            &format!(
                " {status} │ ↑↓ PgUp PgDn Home End: scroll │ click a label: toggle │ q: quit "
            ),
            self.window_size.col_width.saturating_sub(1),
        )
    }

    fn queue_row(
        &self,
        buffer: &mut Vec<u8>,
        screen_row: u16,
        row: RenderRow<'_>,
    ) -> std::io::Result<()> {
        if self.available_width() == 0 {
            return Ok(());
        }
        queue!(
            buffer,
            MoveTo(self.layout.origin_col, screen_row),
            Print(self.row_text(row)),
        )
    }

    fn queue_status_line(&self, buffer: &mut Vec<u8>, row_count: usize) -> std::io::Result<()> {
        queue!(
            buffer,
            MoveTo(0, self.status_row()),
            Clear(ClearType::CurrentLine),
            SetAttribute(Attribute::Reverse),
            Print(self.status_text(row_count)),
            SetAttribute(Attribute::Reset),
        )
    }
}

impl ListHost for TerminalListView {
    fn invalidate_row(&mut self, list: &VirtualList<'_>, index: usize) -> CommonResult<()> {
        let Some(screen_row) = self.layout.screen_row_of(&self.viewport, index) else {
            return ok!();
        };
        let row = match isize::try_from(index) {
            Ok(index) => list.retrieve_row(index),
            Err(_) => RenderRow::placeholder(),
        };

        let mut buffer: Vec<u8> = vec![];
        self.queue_row(&mut buffer, screen_row, row).into_diagnostic()?;
        self.output_device
            .write_and_flush(&buffer)
            .into_diagnostic()?;

        self.stats.scoped_redraws += 1;
        self.stats.rows_painted += 1;
        ok!()
    }

    fn refresh(&mut self, list: &VirtualList<'_>) -> CommonResult<()> {
        let mut buffer: Vec<u8> = vec![];
        let mut rows_painted = 0;

        for relative_row in 0..self.viewport.height {
            let Some(screen_row) = u16::try_from(relative_row)
                .ok()
                .and_then(|it| self.layout.origin_row.checked_add(it))
            else {
                break;
            };
            // Rows past the last item come back as placeholders, which blank them out.
            let index = isize::try_from(self.viewport.scroll_offset + relative_row)
                .unwrap_or(isize::MAX);
            self.queue_row(&mut buffer, screen_row, list.retrieve_row(index))
                .into_diagnostic()?;
            rows_painted += 1;
        }
        self.queue_status_line(&mut buffer, list.row_count())
            .into_diagnostic()?;

        self.output_device
            .write_and_flush(&buffer)
            .into_diagnostic()?;

        self.stats.full_refreshes += 1;
        self.stats.rows_painted += rows_painted;
        ok!()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use unicode_width::UnicodeWidthStr;

    use super::*;
    use crate::{ItemStore, RedrawRequest, StoreMode, size};

    fn view() -> (TerminalListView, crate::StdoutMock) {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let view = TerminalListView::new(output_device, ListLayout::default(), size(80, 11));
        (view, stdout_mock)
    }

    #[test_case("Security 1", 4, "Secu")]
    #[test_case("☐", 4, "☐   " ; "glyph padded")]
    #[test_case("", 3, "   ")]
    fn test_fit_to_width(text: &str, width: u16, expected: &str) {
        assert_eq!(fit_to_width(text, width), expected);
    }

    #[test]
    fn test_viewport_leaves_room_for_status_line() {
        let (view, _) = view();
        assert_eq!(view.viewport.height, 10);
    }

    #[test]
    fn test_refresh_paints_only_visible_rows() {
        let store = ItemStore::initialize(3_000, StoreMode::Plain);
        let (mut view, stdout_mock) = view();

        view.refresh(&VirtualList::new(&store)).unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("Security 1 "));
        assert!(output.contains("Security 10 "));
        assert!(!output.contains("Security 11 "));
        assert!(output.contains("1-10 of 3000"));
        assert_eq!(
            view.stats,
            PaintStats {
                full_refreshes: 1,
                scoped_redraws: 0,
                rows_painted: 10,
            }
        );
    }

    #[test]
    fn test_refresh_blanks_rows_past_the_end() {
        let store = ItemStore::initialize(3, StoreMode::Plain);
        let (mut view, stdout_mock) = view();

        view.refresh(&VirtualList::new(&store)).unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("Security 3"));
        assert!(output.contains("1-3 of 3"));
        assert_eq!(view.stats.rows_painted, 10);
    }

    #[test]
    fn test_invalidate_row_paints_one_row() {
        let mut store = ItemStore::initialize(3_000, StoreMode::Plain);
        store.set_checked(4, true).unwrap();
        let (mut view, stdout_mock) = view();

        view.redraw(&VirtualList::new(&store), RedrawRequest::Row(4))
            .unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("☒   Security 5"));
        assert!(!output.contains("Security 4 "));
        assert_eq!(view.stats.scoped_redraws, 1);
        assert_eq!(view.stats.rows_painted, 1);
    }

    #[test]
    fn test_invalidate_row_out_of_view_is_a_no_op() {
        let store = ItemStore::initialize(3_000, StoreMode::Plain);
        let (mut view, stdout_mock) = view();

        view.invalidate_row(&VirtualList::new(&store), 2_000).unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
        assert_eq!(view.stats, PaintStats::default());
    }

    #[test]
    fn test_status_line_fits_window_after_scrolling_to_end() {
        let store = ItemStore::initialize(3_000, StoreMode::Plain);
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut view =
            TerminalListView::new(output_device, ListLayout::default(), size(80, 24));
        view.viewport.scroll_to_end(3_000);

        view.refresh(&VirtualList::new(&store)).unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string();
        let status = output
            .rsplit("\x1b[7m")
            .next()
            .and_then(|it| it.split("\x1b[0m").next())
            .unwrap();
        assert!(status.contains("2978-3000 of 3000"));
        assert_eq!(status.width(), 79);
    }

    #[test_case(80 ; "wide")]
    #[test_case(20 ; "narrower than a row")]
    #[test_case(3 ; "narrower than the glyph column")]
    fn test_painted_text_never_exceeds_window_width(col_width: u16) {
        let store = ItemStore::initialize(3_000, StoreMode::Plain);
        let (output_device, _) = OutputDevice::new_mock();
        let mut view =
            TerminalListView::new(output_device, ListLayout::default(), size(col_width, 5));
        view.viewport.scroll_to_end(3_000);
        let list = VirtualList::new(&store);

        assert!(view.row_text(list.retrieve_row(2_999)).width() <= usize::from(col_width));
        assert!(view.status_text(3_000).width() < usize::from(col_width));
    }

    #[test]
    fn test_row_clipped_at_right_edge_with_origin_offset() {
        let (output_device, _) = OutputDevice::new_mock();
        let layout = ListLayout {
            origin_col: 10,
            ..ListLayout::default()
        };
        let view = TerminalListView::new(output_device, layout, size(20, 5));
        let text = view.row_text(RenderRow::new(crate::Glyph::Checked, "Security 1234"));
        assert_eq!(text, "☒   Securi");
    }

    #[test]
    fn test_resize_clamps_viewport() {
        let (mut view, _) = view();
        view.viewport.scroll_to_end(3_000);
        view.resize(size(80, 21), 3_000);
        assert_eq!(view.viewport.height, 20);
        assert_eq!(view.viewport.scroll_offset, 2_980);
    }
}
