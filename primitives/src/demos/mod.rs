// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The registry of demonstrations. Each [`Demo`] writes a [`Transcript`], which is
//! compared line by line with a golden text block in [`golden`].

// Attach.
pub mod demo;
pub mod golden;
pub mod transcript;

// Re-export.
pub use demo::*;
pub use transcript::*;
