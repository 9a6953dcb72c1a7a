// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Viewport;

/// Default width of the glyph column, in cells.
pub const DEFAULT_GLYPH_COLUMN_WIDTH: u16 = 4;
/// Default width of the label column, in cells.
pub const DEFAULT_LABEL_COLUMN_WIDTH: u16 = 30;

/// Which logical part of the list a screen cell falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestLocation {
    Nowhere,
    Glyph(usize),
    Label(usize),
}

/// Screen geometry of the list: where it starts, and how wide its two columns are.
///
/// ```text
/// origin_col
/// ▼
/// ┌───────────┬──────────────────────────────┐ ◄ origin_row
/// │ ☐ (glyph) │ Security 1        (label)    │
/// │ ☒         │ Security 2                   │
/// └───────────┴──────────────────────────────┘
///  glyph_width           label_width
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    pub origin_col: u16,
    pub origin_row: u16,
    pub glyph_width: u16,
    pub label_width: u16,
}

impl Default for ListLayout {
    fn default() -> Self {
        Self {
            origin_col: 0,
            origin_row: 0,
            glyph_width: DEFAULT_GLYPH_COLUMN_WIDTH,
            label_width: DEFAULT_LABEL_COLUMN_WIDTH,
        }
    }
}

impl ListLayout {
    #[must_use]
    pub fn total_width(&self) -> u16 { self.glyph_width.saturating_add(self.label_width) }

    /// Classifies the screen cell `(col, row)`.
    #[must_use]
    pub fn hit_test(
        &self,
        viewport: &Viewport,
        row_count: usize,
        col: u16,
        row: u16,
    ) -> HitTestLocation {
        let (Some(relative_col), Some(relative_row)) = (
            col.checked_sub(self.origin_col),
            row.checked_sub(self.origin_row),
        ) else {
            return HitTestLocation::Nowhere;
        };

        let Some(index) = viewport.index_at(usize::from(relative_row), row_count) else {
            return HitTestLocation::Nowhere;
        };

        if relative_col < self.glyph_width {
            HitTestLocation::Glyph(index)
        } else if relative_col < self.total_width() {
            HitTestLocation::Label(index)
        } else {
            HitTestLocation::Nowhere
        }
    }

    /// Absolute screen row of item `index`, if it is on screen.
    #[must_use]
    pub fn screen_row_of(&self, viewport: &Viewport, index: usize) -> Option<u16> {
        let relative_row = viewport.relative_row_of(index)?;
        let relative_row = u16::try_from(relative_row).ok()?;
        self.origin_row.checked_add(relative_row)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn layout() -> ListLayout {
        ListLayout {
            origin_col: 2,
            origin_row: 1,
            glyph_width: 4,
            label_width: 10,
        }
    }

    fn viewport() -> Viewport {
        Viewport {
            scroll_offset: 100,
            height: 5,
        }
    }

    #[test_case(2, 1, HitTestLocation::Glyph(100) ; "first glyph cell")]
    #[test_case(5, 3, HitTestLocation::Glyph(102) ; "last glyph cell")]
    #[test_case(6, 3, HitTestLocation::Label(102) ; "first label cell")]
    #[test_case(15, 5, HitTestLocation::Label(104) ; "last label cell")]
    #[test_case(16, 3, HitTestLocation::Nowhere ; "right of label column")]
    #[test_case(1, 3, HitTestLocation::Nowhere ; "left of list")]
    #[test_case(6, 0, HitTestLocation::Nowhere ; "above list")]
    #[test_case(6, 6, HitTestLocation::Nowhere ; "below viewport")]
    fn test_hit_test(col: u16, row: u16, expected: HitTestLocation) {
        assert_eq!(layout().hit_test(&viewport(), 3_000, col, row), expected);
    }

    #[test]
    fn test_hit_test_past_last_item() {
        let viewport = Viewport::new(10);
        assert_eq!(
            layout().hit_test(&viewport, 2, 6, 3),
            HitTestLocation::Nowhere
        );
        assert_eq!(
            layout().hit_test(&viewport, 2, 6, 2),
            HitTestLocation::Label(1)
        );
    }

    #[test]
    fn test_screen_row_of() {
        assert_eq!(layout().screen_row_of(&viewport(), 100), Some(1));
        assert_eq!(layout().screen_row_of(&viewport(), 104), Some(5));
        assert_eq!(layout().screen_row_of(&viewport(), 105), None);
        assert_eq!(layout().screen_row_of(&viewport(), 99), None);
    }
}
