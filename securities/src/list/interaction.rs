// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, HitTestLocation, ItemStore, ListLayout, RedrawRequest, Viewport};

/// Turns pointer clicks into checked flag toggles.
///
/// Only a click on the label column toggles. A click on the glyph column is classified
/// but left alone, as are clicks that land on no row at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionHandler {
    pub layout: ListLayout,
}

impl InteractionHandler {
    #[must_use]
    pub fn new(layout: ListLayout) -> Self { Self { layout } }

    /// Returns the scoped redraw to perform, if the click changed anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the hit test resolves to an index outside the store, which
    /// means the viewport and the store disagree.
    pub fn on_click(
        &self,
        store: &mut ItemStore,
        viewport: &Viewport,
        col: u16,
        row: u16,
    ) -> CommonResult<Option<RedrawRequest>> {
        match self.layout.hit_test(viewport, store.count(), col, row) {
            HitTestLocation::Label(index) => {
                let checked = store.toggle(index)?;
                tracing::debug!(index, checked, "interaction -> toggled");
                Ok(Some(RedrawRequest::Row(index)))
            }
            HitTestLocation::Glyph(index) => {
                tracing::trace!(index, "interaction -> glyph click ignored");
                Ok(None)
            }
            HitTestLocation::Nowhere => Ok(None),
        }
    }
}
