// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Glyph, ItemStore, RenderRow, Viewport};

/// What a virtualized list control needs from its data: the row count, and one row at
/// a time on demand. Rows borrow from the data for `'a`, not from the source itself.
pub trait VirtualListSource<'a> {
    fn row_count(&self) -> usize;

    /// Must be a pure read. `index` is signed because hosts may hand out stale or
    /// negative indices while the viewport is changing; those get
    /// [`RenderRow::placeholder`].
    fn retrieve_row(&self, index: isize) -> RenderRow<'a>;
}

/// Non-owning view over the [`ItemStore`] that renders rows lazily.
#[derive(Debug, Clone, Copy)]
pub struct VirtualList<'a> {
    pub store: &'a ItemStore,
}

impl<'a> VirtualList<'a> {
    #[must_use]
    pub fn new(store: &'a ItemStore) -> Self { Self { store } }

    /// Rows for `viewport`, paired with their item index. The work done is proportional
    /// to the viewport height, not the store size.
    pub fn visible_rows(
        &self,
        viewport: &Viewport,
    ) -> impl Iterator<Item = (usize, RenderRow<'a>)> + use<'a> {
        let store = self.store;
        viewport
            .visible_range(store.count())
            .map(move |index| (index, render_index(store, index)))
    }
}

fn render_index(store: &ItemStore, index: usize) -> RenderRow<'_> {
    match store.try_get(index) {
        Some(item) => RenderRow::new(Glyph::from_checked(item.checked), &item.label),
        None => RenderRow::placeholder(),
    }
}

impl<'a> VirtualListSource<'a> for VirtualList<'a> {
    fn row_count(&self) -> usize { self.store.count() }

    fn retrieve_row(&self, index: isize) -> RenderRow<'a> {
        match usize::try_from(index) {
            Ok(index) => render_index(self.store, index),
            Err(_) => RenderRow::placeholder(),
        }
    }
}
