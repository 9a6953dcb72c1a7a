// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// One checkable row. Its identity is its position in the [`crate::ItemStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Security {
    pub label: String,
    pub checked: bool,
}

impl Security {
    /// `position` is 1-based, so `Security::new(1)` is labeled `"Security 1"`.
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self {
            label: format!("Security {position}"),
            checked: false,
        }
    }
}
