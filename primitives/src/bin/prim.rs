// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `prim` runs and verifies the demonstrations of Rust's primitive types.
//!
//! ```text
//! prim list
//! prim run uint-overflow int-overflow
//! prim verify --all
//! prim inspect ação
//! ```

use clap::Parser;
use r3bl_primitives::{BufTextStorage, CommonResult,
                      cli::{CLIArg, handle_prim_command},
                      log::try_initialize_logging_global,
                      setup_default_miette_global_report_handler};

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    try_initialize_logging_global(cli_arg.global_options.tracing_config()).ok();
    should_log.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let mut acc = BufTextStorage::new();
    let result = handle_prim_command(&cli_arg.command, &mut acc);
    print!("{acc}");

    if let Err(ref report) = result {
        // % is Display, ? is Debug.
        tracing::error!(message = "prim failed", error = ?report);
    }

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    result
}
