// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

/// What an observable [`crate::ItemStore`] publishes after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    Row(usize),
    All,
}

/// Whether the store publishes [`RowChange`]s.
///
/// - [`StoreMode::Plain`]: the click handler asks for the scoped redraw itself.
/// - [`StoreMode::Observable`]: redraws are driven by the store's change channel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    EnumIter,
    clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum StoreMode {
    #[default]
    Plain,
    Observable,
}
