// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Structured logging for the `prim` binary and the library. The library only emits
//! [`tracing`] events; it is up to the binary (or a test) to install a subscriber using
//! [`try_initialize_logging_global`] or [`try_initialize_logging_thread_local`].
//!
//! Logging is **DISABLED** by **default**.

// Attach sources.
pub mod public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use public_api::*;
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
