// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One shot benchmark: wait, bulk update every checked flag, repaint the list, and
//! report how long the update plus repaint took.

// Attach sources.
pub mod benchmark_task;
pub mod bulk_policy;
pub mod bulk_update;

// Re-export.
pub use benchmark_task::*;
pub use bulk_policy::*;
pub use bulk_update::*;
