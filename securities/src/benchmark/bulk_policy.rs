// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

/// The deterministic transformation the benchmark applies to every checked flag.
///
/// ```
/// use securities_list_view::BulkPolicy;
/// // 0-based index 3 is the 4th item.
/// assert!(BulkPolicy::EveryFourth.is_checked_at(3));
/// assert!(!BulkPolicy::EveryFourth.is_checked_at(4));
/// assert!(BulkPolicy::AllChecked.is_checked_at(4));
/// ```
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
pub enum BulkPolicy {
    /// Every item ends up checked.
    AllChecked,
    /// Only items whose 1-based position is divisible by 4 end up checked.
    #[default]
    EveryFourth,
}

impl BulkPolicy {
    /// `index` is 0-based.
    #[must_use]
    pub fn is_checked_at(self, index: usize) -> bool {
        match self {
            BulkPolicy::AllChecked => true,
            BulkPolicy::EveryFourth => (index + 1).is_multiple_of(4),
        }
    }
}
