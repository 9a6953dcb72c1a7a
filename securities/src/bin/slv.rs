// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use securities_list_view::{AppConfig, BenchmarkPhase, CLIArg, CommonResult,
                           TracingConfig, run_app, set_mimalloc_in_main,
                           setup_default_miette_global_report_handler, throws,
                           try_initialize_logging_global};

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

// Note: The `tokio::main` macro internally calls `.expect("Failed building the Runtime")`
// when initializing the Tokio runtime. The lint must be suppressed here.
#[tokio::main(flavor = "current_thread")]
#[allow(clippy::unwrap_in_result)]
async fn main() -> CommonResult<()> {
    set_mimalloc_in_main!();

    throws!({
        setup_default_miette_global_report_handler(ISSUES_URL);

        let cli_arg = CLIArg::parse();
        let config = AppConfig::try_from(&cli_arg)?;

        let enable_logging = config.enable_logging;
        let tracing_config = if enable_logging {
            TracingConfig::new_file(None, tracing_core::LevelFilter::DEBUG)
        } else {
            TracingConfig::new_off()
        };
        if try_initialize_logging_global(tracing_config)? {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        }

        let summary = run_app(config).await?;

        match summary.benchmark_phase.report() {
            Some(report) => println!(
                "{policy}: {checked}/{total} checked, update + repaint took {elapsed}",
                policy = report.policy,
                checked = report.checked_count,
                total = report.total_count,
                elapsed = report.elapsed,
            ),
            None => println!("Exited before the bulk update ran."),
        }
        if !matches!(summary.benchmark_phase, BenchmarkPhase::Acknowledged(_)) {
            tracing::debug!(phase = ?summary.benchmark_phase, "Exited early");
        }

        if enable_logging {
            tracing::debug!(message = "Stop logging...");
        }
    })
}
