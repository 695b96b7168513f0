// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write;

use miette::IntoDiagnostic;

use super::{CLICommand, DemoSelection};
use crate::{BufTextStorage, CommonResult, Demo, PrimitivesError, Transcript, ok,
            write_scalar_listing};

/// Run `command`, writing whatever it prints to `acc`. On error, `acc` still holds
/// the output produced before the error, eg: the demos that verified.
///
/// # Errors
///
/// Returns an error for an unknown demo name, or a transcript that does not match its
/// golden text block.
pub fn handle_prim_command(
    command: &CLICommand,
    acc: &mut BufTextStorage,
) -> CommonResult<()> {
    match command {
        CLICommand::List => {
            for demo in Demo::all() {
                writeln!(acc, "{demo}").into_diagnostic()?;
            }
        }
        CLICommand::Run(selection) => {
            let demos = select_demos(selection)?;
            let show_headings = demos.len() > 1;
            for (index, demo) in demos.iter().enumerate() {
                if show_headings {
                    if index > 0 {
                        acc.push('\n');
                    }
                    writeln!(acc, "{demo}:").into_diagnostic()?;
                }
                acc.push_str(&demo.try_transcript()?.to_string());
            }
        }
        CLICommand::Verify(selection) => {
            for demo in select_demos(selection)? {
                demo.verify()?;
                writeln!(acc, "✓ {demo}").into_diagnostic()?;
            }
        }
        CLICommand::Inspect { text } => {
            let mut transcript = Transcript::new();
            transcript.push_inspect(text.as_str()).into_diagnostic()?;
            transcript
                .push_labeled("text.len()", &text.len())
                .into_diagnostic()?;
            transcript.push_line(format!("scalars {text:?}:"));
            write_scalar_listing(text, &mut transcript).into_diagnostic()?;
            acc.push_str(&transcript.to_string());
        }
    }

    ok!()
}

/// Every demo when none are named (or `--all` is given), otherwise the named ones in
/// the order given.
///
/// # Errors
///
/// Returns [`PrimitivesError::UnknownDemo`] for the first name that is not a demo.
pub fn select_demos(selection: &DemoSelection) -> Result<Vec<Demo>, PrimitivesError> {
    if selection.all || selection.demos.is_empty() {
        return Ok(Demo::all().collect());
    }
    selection
        .demos
        .iter()
        .map(|name| Demo::try_parse(name))
        .collect()
}
