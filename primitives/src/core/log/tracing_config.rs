// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging to suit your needs. You can display the logs to:
/// 1. a file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level.
///
/// Use [`crate::log::try_initialize_logging_global`] or
/// [`crate::log::try_initialize_logging_thread_local`] to install it.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Where the log output goes. The [String] is the path of the log file, e.g.
/// `/tmp/prim/log.txt` or `log.txt`.
#[derive(Debug, Clone, PartialEq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

// XMARK: Clever Rust, use of `impl Into<ConfigStruct>` for elegant constructor config options.

/// These conversions make it easier to configure the logging system. Instead of having
/// lots of complex arguments to [`crate::log::try_initialize_logging_global`], it
/// receives a type that implements [`Into<TracingConfig>`].
///
/// ```
/// use r3bl_primitives::log::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let config_1: TracingConfig = tracing::Level::DEBUG.into();
/// let config_2: TracingConfig = DisplayPreference::Stderr.into();
/// let config_compose = config_1 + config_2;
///
/// assert_eq!(
///     config_compose.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "log.txt".to_string())
/// );
/// ```
mod tracing_config_options {
    use super::{Add, DEFAULT_LOG_FILE_NAME, DisplayPreference, LevelFilter,
                TracingConfig, WriterConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`] instances together. The more verbose level wins.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`] instances together. The `rhs` will clobber the `self`
    /// if it has a "some" value. That is, the value in `rhs` has higher specificity.
    ///
    /// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
    /// - `{a: None } + {a: "bar"} = {a: "bar"}`.
    /// - `{a: "foo"} + {a: None } = {a: "foo"}`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,
                (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

                // Collision (rhs has higher specificity).
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp_rhs, f_rhs)) => {
                    DisplayAndFile(dp_rhs, f_rhs)
                }
                (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
                (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            }
        }
    }
}

#[cfg(test)]
mod tests_add_writer_configs {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_add_writer_configs() {
        let fname = "log.txt".to_string();

        let none = WriterConfig::None;
        let display_stdout = WriterConfig::Display(DisplayPreference::Stdout);
        let display_stderr = WriterConfig::Display(DisplayPreference::Stderr);
        let file = WriterConfig::File(fname.clone());
        let display_stdout_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, fname.clone());
        let display_stderr_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, fname.clone());

        // No collision merge.
        assert_eq2!(none.clone() + none.clone(), none);
        assert_eq2!(display_stdout.clone() + none.clone(), display_stdout);
        assert_eq2!(none.clone() + display_stdout.clone(), display_stdout);
        assert_eq2!(file.clone() + none.clone(), file);
        assert_eq2!(none.clone() + file.clone(), file);
        assert_eq2!(
            display_stdout.clone() + file.clone(),
            display_stdout_and_file
        );
        assert_eq2!(
            file.clone() + display_stderr.clone(),
            display_stderr_and_file
        );

        // Collision (rhs has higher specificity).
        assert_eq2!(
            display_stdout.clone() + display_stderr.clone(),
            display_stderr
        );
        assert_eq2!(
            display_stdout.clone() + display_stderr_and_file.clone(),
            display_stderr_and_file
        );
        assert_eq2!(
            display_stderr_and_file.clone() + display_stdout.clone(),
            display_stdout_and_file
        );
        assert_eq2!(
            display_stdout_and_file.clone() + WriterConfig::File("other.txt".into()),
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "other.txt".into())
        );
        assert_eq2!(
            display_stdout_and_file.clone() + display_stderr_and_file.clone(),
            display_stderr_and_file
        );
    }

    #[test]
    fn test_add_tracing_configs_picks_more_verbose_level() {
        let lhs: TracingConfig = LevelFilter::WARN.into();
        let rhs: TracingConfig = TracingConfig {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::TRACE,
        };
        let it = lhs + rhs;
        assert_eq2!(it.level_filter, LevelFilter::TRACE);
        assert_eq2!(
            it.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }
}
