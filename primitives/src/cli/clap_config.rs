// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_core::LevelFilter;

use crate::log::{DEFAULT_LOG_FILE_NAME, TracingConfig, WriterConfig};

#[derive(Debug, Parser)]
#[command(bin_name = "prim")]
#[command(about = "🔢 See how Rust's primitive types really behave: integer wraparound, \
                   char scalar values, and UTF-8 bytes")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

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

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "Log level used when logging is enabled"
    )]
    pub log_level: LogLevel,
}

impl GlobalOption {
    /// Logging goes to [`DEFAULT_LOG_FILE_NAME`] when enabled, and is off otherwise.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        if self.enable_logging {
            TracingConfig {
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
                level_filter: self.log_level.into(),
            }
        } else {
            TracingConfig {
                writer_config: WriterConfig::None,
                level_filter: LevelFilter::OFF,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(it: LogLevel) -> Self {
        match it {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "📜 List the names of all the demos")]
    List,

    #[clap(about = "▶️ Print the transcript of each demo\n💡 Eg: `prim run uint-overflow`")]
    Run(DemoSelection),

    #[clap(
        about = "✅ Compare the transcript of each demo with its golden text block\n💡 Eg: `prim verify --all`"
    )]
    Verify(DemoSelection),

    #[clap(
        about = "🔍 Show the bytes and scalar values of any text\n💡 Eg: `prim inspect ação`"
    )]
    Inspect {
        #[arg(help = "The text to inspect")]
        text: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct DemoSelection {
    #[arg(value_name = "DEMO", help = "Demo names, see `prim list`. Defaults to all")]
    pub demos: Vec<String>,

    #[arg(long, short = 'a', help = "Select every demo")]
    pub all: bool,
}
