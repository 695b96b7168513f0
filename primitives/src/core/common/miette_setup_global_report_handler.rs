// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Customize how a [`miette::Report`] is displayed when `main() -> miette::Result<_>`
//! "errors out", e.g. when `prim verify` finds a transcript that no longer matches its
//! golden block.
//!
//! - The global default implementation of the [`miette::ReportHandler`] trait is done by
//!   [`miette::MietteHandler`], configured using [`MietteHandlerOpts`].
//! - [`miette::set_hook`] registers the handler. The hook is only activated at the time
//!   that the error is displayed, not when it is registered, so the terminal width is
//!   measured just before the report is printed.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| columns);
            debug!("miette::set_hook -> terminal_width: {}", it);
            usize::from(it)
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
