// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command line interface for the `prim` binary.
//!
//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

// Attach.
pub mod clap_config;
pub mod command_handler;

// Re-export.
pub use clap_config::*;
pub use command_handler::*;
