// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Checkbox glyph shown in the first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Checked,
    Unchecked,
}

impl Glyph {
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Glyph::Checked } else { Glyph::Unchecked }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Glyph::Checked => "\u{2612}",
            Glyph::Unchecked => "\u{2610}",
        }
    }
}

/// Ephemeral display row. Borrows the label from the store so producing one never
/// allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderRow<'a> {
    pub glyph: Option<Glyph>,
    pub label: &'a str,
}

impl<'a> RenderRow<'a> {
    #[must_use]
    pub fn new(glyph: Glyph, label: &'a str) -> Self {
        Self {
            glyph: Some(glyph),
            label,
        }
    }

    /// Empty row used for indices outside the store.
    #[must_use]
    pub fn placeholder() -> Self { Self::default() }

    #[must_use]
    pub fn is_placeholder(&self) -> bool { self.glyph.is_none() && self.label.is_empty() }

    #[must_use]
    pub fn glyph_str(&self) -> &'static str { self.glyph.map_or("", Glyph::as_str) }
}
