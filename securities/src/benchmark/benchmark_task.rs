// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use tokio::{sync::mpsc::Sender, task::JoinHandle};

use crate::{BenchmarkReport, BulkPolicy, MainThreadSignal, send_signal};

/// How long to wait after startup before the bulk update runs.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(2);
/// How long to wait after the bulk update before the result is shown.
pub const DEFAULT_REPORT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub policy: BulkPolicy,
    pub initial_delay: Duration,
    pub report_delay: Duration,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            policy: BulkPolicy::default(),
            initial_delay: DEFAULT_INITIAL_DELAY,
            report_delay: DEFAULT_REPORT_DELAY,
        }
    }
}

/// Where the one shot benchmark is in its lifecycle. It only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BenchmarkPhase {
    #[default]
    Waiting,
    Measured(BenchmarkReport),
    Reported(BenchmarkReport),
    Acknowledged(BenchmarkReport),
}

impl BenchmarkPhase {
    /// Returns `true` exactly once: the first time the bulk update is allowed to run.
    #[must_use]
    pub fn can_run(&self) -> bool { matches!(self, BenchmarkPhase::Waiting) }

    #[must_use]
    pub fn report(&self) -> Option<BenchmarkReport> {
        match self {
            BenchmarkPhase::Waiting => None,
            BenchmarkPhase::Measured(it)
            | BenchmarkPhase::Reported(it)
            | BenchmarkPhase::Acknowledged(it) => Some(*it),
        }
    }

    pub fn mark_measured(&mut self, report: BenchmarkReport) {
        if self.can_run() {
            *self = BenchmarkPhase::Measured(report);
        }
    }

    pub fn mark_reported(&mut self) {
        if let BenchmarkPhase::Measured(report) = *self {
            *self = BenchmarkPhase::Reported(report);
        }
    }

    pub fn mark_acknowledged(&mut self) {
        if let BenchmarkPhase::Reported(report) = *self {
            *self = BenchmarkPhase::Acknowledged(report);
        }
    }
}

/// Spawns the timer that kicks off the bulk update. The sleep runs on the same
/// runtime as the event loop, which keeps handling input in the meantime.
pub fn start_benchmark_task(
    config: BenchmarkConfig,
    main_thread_channel_sender: Sender<MainThreadSignal>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(config.initial_delay).await;
        tracing::debug!(policy = %config.policy, "benchmark -> initial delay elapsed");
        send_signal!(main_thread_channel_sender, MainThreadSignal::RunBulkUpdate);
    })
}

/// Spawns the timer that surfaces `report` after `delay`.
pub fn schedule_report(
    report: BenchmarkReport,
    delay: Duration,
    main_thread_channel_sender: Sender<MainThreadSignal>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        send_signal!(
            main_thread_channel_sender,
            MainThreadSignal::ShowReport(report)
        );
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;
    use crate::TimeDuration;

    fn report() -> BenchmarkReport {
        BenchmarkReport {
            policy: BulkPolicy::EveryFourth,
            elapsed: TimeDuration::from(Duration::from_millis(3)),
            checked_count: 750,
            total_count: 3_000,
        }
    }

    #[test]
    fn test_phase_moves_forward_only() {
        let mut phase = BenchmarkPhase::default();
        assert!(phase.can_run());

        // Out of order transitions are ignored.
        phase.mark_reported();
        phase.mark_acknowledged();
        assert_eq!(phase, BenchmarkPhase::Waiting);

        phase.mark_measured(report());
        assert!(!phase.can_run());
        phase.mark_measured(report());
        assert_eq!(phase, BenchmarkPhase::Measured(report()));

        phase.mark_reported();
        phase.mark_acknowledged();
        assert_eq!(phase, BenchmarkPhase::Acknowledged(report()));
        assert_eq!(phase.report(), Some(report()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_benchmark_task_fires_after_initial_delay() {
        let (sender, mut receiver) = mpsc::channel(8);
        let start = tokio::time::Instant::now();
        let _handle = start_benchmark_task(BenchmarkConfig::default(), sender);

        let signal = receiver.recv().await.unwrap();
        assert!(matches!(signal, MainThreadSignal::RunBulkUpdate));
        assert!(start.elapsed() >= DEFAULT_INITIAL_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_report_fires_after_report_delay() {
        let (sender, mut receiver) = mpsc::channel(8);
        let start = tokio::time::Instant::now();
        let _handle = schedule_report(report(), DEFAULT_REPORT_DELAY, sender);

        let signal = receiver.recv().await.unwrap();
        assert!(matches!(signal, MainThreadSignal::ShowReport(it) if it == report()));
        assert!(start.elapsed() >= DEFAULT_REPORT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborted_task_never_fires() {
        let (sender, mut receiver) = mpsc::channel(8);
        let handle = start_benchmark_task(BenchmarkConfig::default(), sender);
        handle.abort();
        // Sender is dropped with the aborted task, so the channel closes.
        assert!(receiver.recv().await.is_none());
    }
}
