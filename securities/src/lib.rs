// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # securities_list_view
//!
//! A full screen terminal list of checkable "securities", rendered in virtual mode, plus
//! a one shot benchmark that times a bulk update of every checked flag.
//!
//! Only the rows that fit in the viewport are ever painted. The list asks the
//! [`ItemStore`] for each visible row on demand through [`VirtualList`], so the cost of a
//! repaint depends on the height of the terminal, not on the number of items.
//!
//! ## Session timeline
//!
//! 1. The store is populated with `Security 1` .. `Security N`, all unchecked, and the
//!    list gets its first paint.
//! 2. Clicking a label toggles that one item and repaints just its row. Clicking the
//!    checkbox glyph does nothing.
//! 3. After the initial delay (2 seconds by default) the [`BulkPolicy`] is applied to
//!    every item, and the visible list is repainted. Both are timed together.
//! 4. A little later the elapsed milliseconds are shown in a modal prompt.
//!
//! ## Running it
//!
//! ```text
//! slv --count 3000 --policy every-fourth --store-mode observable -l
//! ```
//!
//! Logging goes to `log.txt` only when `-l` is passed, since the list owns the terminal.
//!
//! ## Using the pieces directly
//!
//! ```
//! use securities_list_view::{BulkPolicy, ItemStore, StoreMode};
//!
//! let mut store = ItemStore::initialize(3_000, StoreMode::Plain);
//! store.apply_bulk(BulkPolicy::EveryFourth);
//! assert_eq!(store.checked_count(), 750);
//! assert!(store.get(3).unwrap().checked);
//! assert!(store.get(3_000).is_err());
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod app;
pub mod benchmark;
pub mod core;
pub mod list;
pub mod store;
pub mod terminal_window;

// Re-export.
pub use app::*;
pub use benchmark::*;
pub use core::*;
pub use list::*;
pub use store::*;
pub use terminal_window::*;
