// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

use crate::{BulkPolicy, DEFAULT_ITEM_COUNT, StoreMode};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "slv")]
#[command(about = "Time how long a virtual list takes to re-check thousands of securities ⏱️")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  slv [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_ITEM_COUNT,
        help = "Number of securities to put in the list"
    )]
    pub count: usize,

    #[arg(
        long,
        value_enum,
        default_value_t = BulkPolicy::default(),
        help = "How the bulk update sets the checked flags"
    )]
    pub policy: BulkPolicy,

    #[arg(
        long,
        value_enum,
        default_value_t = StoreMode::default(),
        help = "Whether the store notifies the list of each change"
    )]
    pub store_mode: StoreMode,

    #[arg(
        long,
        value_name = "MS",
        default_value_t = 2_000,
        help = "Milliseconds to wait after the first paint before the bulk update"
    )]
    pub delay_ms: u64,

    #[arg(
        long,
        value_name = "MS",
        default_value_t = 500,
        help = "Milliseconds to wait after the bulk update before showing the result"
    )]
    pub report_delay_ms: u64,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}
