// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Instant;

use crate::{BulkPolicy, CommonResult, ItemStore, ListHost, TimeDuration, VirtualList};

/// Outcome of one bulk update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub policy: BulkPolicy,
    /// Wall clock time for the bulk update plus the full repaint.
    pub elapsed: TimeDuration,
    pub checked_count: usize,
    pub total_count: usize,
}

impl BenchmarkReport {
    /// Text shown in the acknowledgement prompt, eg: `"12 ms"`.
    #[must_use]
    pub fn message(&self) -> String { format!("{} ms", self.elapsed.as_whole_millis()) }
}

/// Applies `policy` to every item, then asks `host` for a full repaint, and measures
/// both together.
///
/// # Errors
///
/// Returns an error if the repaint fails.
pub fn run_bulk_update(
    store: &mut ItemStore,
    policy: BulkPolicy,
    host: &mut impl ListHost,
) -> CommonResult<BenchmarkReport> {
    let start = Instant::now();

    store.apply_bulk(policy);
    host.refresh(&VirtualList::new(store))?;

    let elapsed = TimeDuration::from(start.elapsed());

    let report = BenchmarkReport {
        policy,
        elapsed,
        checked_count: store.checked_count(),
        total_count: store.count(),
    };

    tracing::info!(
        %policy,
        %elapsed,
        checked = report.checked_count,
        total = report.total_count,
        "benchmark -> bulk update finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{RenderRow, StoreMode, Viewport};

    /// Records what a real host would paint.
    #[derive(Debug, Default)]
    struct RecordingHost {
        viewport: Viewport,
        refreshes: usize,
        painted_labels: Vec<String>,
    }

    impl ListHost for RecordingHost {
        fn invalidate_row(&mut self, _list: &VirtualList<'_>, _index: usize) -> CommonResult<()> {
            Ok(())
        }

        fn refresh(&mut self, list: &VirtualList<'_>) -> CommonResult<()> {
            self.refreshes += 1;
            self.painted_labels = list
                .visible_rows(&self.viewport)
                .map(|(_, row): (usize, RenderRow<'_>)| {
                    format!("{} {}", row.glyph_str(), row.label)
                })
                .collect();
            Ok(())
        }
    }

    #[test]
    fn test_every_fourth_report() {
        let mut store = ItemStore::initialize(3_000, StoreMode::Plain);
        let mut host = RecordingHost {
            viewport: Viewport::new(4),
            ..Default::default()
        };

        let report = run_bulk_update(&mut store, BulkPolicy::EveryFourth, &mut host).unwrap();

        assert_eq!(report.checked_count, 750);
        assert_eq!(report.total_count, 3_000);
        assert_eq!(host.refreshes, 1);
        assert_eq!(
            host.painted_labels,
            vec![
                "☐ Security 1",
                "☐ Security 2",
                "☐ Security 3",
                "☒ Security 4"
            ]
        );
    }

    #[test]
    fn test_all_checked_report() {
        let mut store = ItemStore::initialize(3_000, StoreMode::Plain);
        let mut host = RecordingHost::default();
        let report = run_bulk_update(&mut store, BulkPolicy::AllChecked, &mut host).unwrap();
        assert_eq!(report.checked_count, 3_000);
        assert!(report.message().ends_with(" ms"));
    }
}
