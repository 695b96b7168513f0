// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{BufTextStorage, Inspect, InlineVec, WriteToBuf};

/// The ordered lines written by a demonstration. When rendered, every line ends with a
/// newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: InlineVec<BufTextStorage>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push_line(&mut self, line: impl Into<BufTextStorage>) {
        self.lines.push(line.into());
    }

    /// Add a line written by `write_fn`.
    ///
    /// # Errors
    ///
    /// Returns the error returned by `write_fn`.
    pub fn write_line(
        &mut self,
        write_fn: impl FnOnce(&mut BufTextStorage) -> Result,
    ) -> Result {
        let mut acc = BufTextStorage::new();
        write_fn(&mut acc)?;
        self.lines.push(acc);
        Ok(())
    }

    /// Add a `"{type name}: {representation}"` line.
    ///
    /// # Errors
    ///
    /// Returns an error if the value can't be written.
    pub fn push_inspect<T: Inspect + ?Sized>(&mut self, value: &T) -> Result {
        self.write_line(|acc| value.write_inspect(acc))
    }

    /// Add a `"{label} {type name}: {representation}"` line.
    ///
    /// # Errors
    ///
    /// Returns an error if the value can't be written.
    pub fn push_labeled<T: Inspect + ?Sized>(&mut self, label: &str, value: &T) -> Result {
        self.write_line(|acc| value.write_labeled(label, acc))
    }

    /// Add every line of a multi line block.
    ///
    /// # Errors
    ///
    /// Returns an error if the block can't be written.
    pub fn push_block(&mut self, block: &impl WriteToBuf) -> Result {
        let mut acc = BufTextStorage::new();
        block.write_to_buf(&mut acc)?;
        for line in acc.lines() {
            self.push_line(line);
        }
        Ok(())
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(BufTextStorage::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

impl WriteToBuf for Transcript {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        for line in &self.lines {
            acc.push_str(line);
            acc.push('\n');
        }
        Ok(())
    }
}

impl Display for Transcript {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut buffer = BufTextStorage::new();
        self.write_to_buf(&mut buffer)?;
        self.write_buf_to_fmt(&buffer, f)
    }
}
