// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{BenchmarkConfig, CLIArg, CommonError, CommonErrorType, CommonResult,
            DEFAULT_ITEM_COUNT, ListLayout, StoreMode};

/// Everything the launcher needs to run one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub item_count: usize,
    pub store_mode: StoreMode,
    pub benchmark: BenchmarkConfig,
    pub layout: ListLayout,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            store_mode: StoreMode::default(),
            benchmark: BenchmarkConfig::default(),
            layout: ListLayout::default(),
            enable_logging: false,
        }
    }
}

impl TryFrom<&CLIArg> for AppConfig {
    type Error = miette::Report;

    fn try_from(cli_arg: &CLIArg) -> CommonResult<Self> {
        if cli_arg.count == 0 {
            return CommonError::new_error_result(
                CommonErrorType::InvalidArguments,
                "--count must be at least 1",
            );
        }

        Ok(Self {
            item_count: cli_arg.count,
            store_mode: cli_arg.store_mode,
            benchmark: BenchmarkConfig {
                policy: cli_arg.policy,
                initial_delay: Duration::from_millis(cli_arg.delay_ms),
                report_delay: Duration::from_millis(cli_arg.report_delay_ms),
            },
            layout: ListLayout::default(),
            enable_logging: cli_arg.global_options.enable_logging,
        })
    }
}
