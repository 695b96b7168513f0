// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ambient building blocks shared by the demonstrations: stack allocated strings, byte
//! units, error types, logging, and a few declarative macros.

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod error;
pub mod log;
pub mod stack_alloc_types;
pub mod units;

// Re-export.
pub use common::*;
pub use error::*;
pub use stack_alloc_types::*;
pub use units::*;
