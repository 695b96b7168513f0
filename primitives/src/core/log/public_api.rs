// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;

use crate::{log::TracingConfig, ok};

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps, like the `prim` binary.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than
/// [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't matter if
/// the library emits events using the [`tracing::info!`], [`tracing::debug!`], etc.
/// macros.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Logging is **DISABLED** by **default**. Returns `None` when the level filter is
/// [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use tracing_core::LevelFilter;

    use super::*;
    use crate::log::WriterConfig;

    #[test]
    fn test_level_filter_off_is_a_no_op() {
        let it = try_initialize_logging_thread_local(TracingConfig {
            writer_config: WriterConfig::File("never_created.log".into()),
            level_filter: LevelFilter::OFF,
        })
        .unwrap();
        assert!(it.is_none());
        assert!(!std::path::Path::new("never_created.log").exists());

        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
    }
}
