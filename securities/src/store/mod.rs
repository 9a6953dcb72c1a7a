// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The item store owns every [`Security`] for the lifetime of the session. Everything
//! else (the virtual list, the click handler, the benchmark) borrows it.

// Attach sources.
pub mod item_store;
pub mod row_change;
pub mod security;

// Re-export.
pub use item_store::*;
pub use row_change::*;
pub use security::*;
