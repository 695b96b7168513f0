// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod friendly_random_id;
pub mod miette_setup_global_report_handler;
pub mod temp_dir;
pub mod write_to_buf;

// Re-export.
pub use friendly_random_id::*;
pub use miette_setup_global_report_handler::*;
pub use temp_dir::*;
pub use write_to_buf::*;
