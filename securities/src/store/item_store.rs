// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::{BulkPolicy, RowChange, Security, StoreMode};

/// Default number of securities shown by the app.
pub const DEFAULT_ITEM_COUNT: usize = 3_000;

/// Index past the end of the store. The store never grows or shrinks, so this is always
/// a programming error on the caller's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("Index {index} is out of range for a store of {count} items")]
#[diagnostic(
    code(securities_list_view::store::index_out_of_range),
    help("Row indices come from the viewport, which must be clamped to the store size")
)]
pub struct IndexOutOfRangeError {
    pub index: usize,
    pub count: usize,
}

/// Fixed length, index addressable sequence of [`Security`] items.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Security>,
    mode: StoreMode,
    subscribers: Vec<UnboundedSender<RowChange>>,
}

mod constructor {
    use super::{ItemStore, Security, StoreMode};

    impl ItemStore {
        /// Fills the store with `count` unchecked items labeled `"Security 1"` to
        /// `"Security {count}"`.
        #[must_use]
        pub fn initialize(count: usize, mode: StoreMode) -> Self {
            let items = (1..=count).map(Security::new).collect();
            tracing::debug!(count, %mode, "item store -> initialized");
            Self {
                items,
                mode,
                subscribers: vec![],
            }
        }
    }
}

mod accessor {
    use super::{IndexOutOfRangeError, ItemStore, Security, StoreMode};

    impl ItemStore {
        #[must_use]
        pub fn count(&self) -> usize { self.items.len() }

        #[must_use]
        pub fn mode(&self) -> StoreMode { self.mode }

        /// # Errors
        ///
        /// Returns [`IndexOutOfRangeError`] if `index` is not in `0..count`.
        pub fn get(&self, index: usize) -> Result<&Security, IndexOutOfRangeError> {
            self.items.get(index).ok_or(IndexOutOfRangeError {
                index,
                count: self.count(),
            })
        }

        /// Lenient lookup for the virtual list, which tolerates stale indices.
        #[must_use]
        pub fn try_get(&self, index: usize) -> Option<&Security> { self.items.get(index) }

        #[must_use]
        pub fn checked_count(&self) -> usize {
            self.items.iter().filter(|it| it.checked).count()
        }

        pub fn iter(&self) -> std::slice::Iter<'_, Security> { self.items.iter() }
    }

    impl<'a> IntoIterator for &'a ItemStore {
        type Item = &'a Security;
        type IntoIter = std::slice::Iter<'a, Security>;

        fn into_iter(self) -> Self::IntoIter { self.items.iter() }
    }
}

mod mutator {
    use super::{BulkPolicy, IndexOutOfRangeError, ItemStore, RowChange};

    impl ItemStore {
        /// # Errors
        ///
        /// Returns [`IndexOutOfRangeError`] if `index` is not in `0..count`.
        pub fn set_checked(
            &mut self,
            index: usize,
            value: bool,
        ) -> Result<(), IndexOutOfRangeError> {
            let count = self.count();
            let item = self
                .items
                .get_mut(index)
                .ok_or(IndexOutOfRangeError { index, count })?;
            item.checked = value;
            self.publish(RowChange::Row(index));
            Ok(())
        }

        /// Flips the checked flag and returns the new value.
        ///
        /// # Errors
        ///
        /// Returns [`IndexOutOfRangeError`] if `index` is not in `0..count`.
        pub fn toggle(&mut self, index: usize) -> Result<bool, IndexOutOfRangeError> {
            let new_value = !self.get(index)?.checked;
            self.set_checked(index, new_value)?;
            Ok(new_value)
        }

        /// Overwrites every checked flag according to `policy`. Publishes a single
        /// [`RowChange::All`].
        pub fn apply_bulk(&mut self, policy: BulkPolicy) {
            for (index, item) in self.items.iter_mut().enumerate() {
                item.checked = policy.is_checked_at(index);
            }
            self.publish(RowChange::All);
        }
    }
}

mod notifier {
    use super::{ItemStore, RowChange, StoreMode, UnboundedReceiver, unbounded_channel};

    impl ItemStore {
        /// Returns a receiver of [`RowChange`]s, or `None` for a
        /// [`StoreMode::Plain`] store.
        pub fn subscribe(&mut self) -> Option<UnboundedReceiver<RowChange>> {
            match self.mode {
                StoreMode::Plain => None,
                StoreMode::Observable => {
                    let (sender, receiver) = unbounded_channel();
                    self.subscribers.push(sender);
                    Some(receiver)
                }
            }
        }

        /// Subscribers that have gone away are dropped; the mutation itself never fails.
        pub(super) fn publish(&mut self, change: RowChange) {
            if self.subscribers.is_empty() {
                return;
            }
            self.subscribers
                .retain(|subscriber| subscriber.send(change).is_ok());
        }
    }
}
