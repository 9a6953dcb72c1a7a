// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Virtualized list of securities.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  host (TerminalListView)                 │
//! │  - owns the Viewport (scroll + height)   │
//! │  - paints scoped and full redraws        │
//! └──────────────────────────────────────────┘
//!       │ asks for visible rows only      ▲ RedrawRequest
//!       ▼                                 │
//! ┌────────────────────┐    ┌─────────────────────────┐
//! │  VirtualList       │    │  InteractionHandler     │
//! │  index → RenderRow │    │  click → hit test →     │
//! │  (pure read)       │    │  toggle label hits      │
//! └────────────────────┘    └─────────────────────────┘
//!       │ borrows                      │ borrows mutably
//!       ▼                              ▼
//! ┌──────────────────────────────────────────┐
//! │  ItemStore                               │
//! └──────────────────────────────────────────┘
//! ```

// Attach sources.
pub mod hit_test;
pub mod interaction;
pub mod list_host;
pub mod render_row;
pub mod viewport;
pub mod virtual_list;

// Re-export.
pub use hit_test::*;
pub use interaction::*;
pub use list_host::*;
pub use render_row::*;
pub use viewport::*;
pub use virtual_list::*;
