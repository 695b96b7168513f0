// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the tooling around the demonstrations. The demonstrations themselves
//! never fail: integer overflow wraps and byte level slicing of text is rendered, not
//! rejected. What can fail is the tooling: asking for a demo that does not exist, or a
//! transcript that no longer matches its golden block (a semantics regression).

use crate::Utf8DecodeError;

/// Application level result type. Use this in binaries and in code that composes many
/// fallible operations.
pub type CommonResult<T> = miette::Result<T>;

/// Errors returned by the demonstration registry and harness.
///
/// | Variant                | Cause                                                  |
/// | :--------------------- | :----------------------------------------------------- |
/// | [`UnknownDemo`]        | A demo name that is not in the registry                |
/// | [`TranscriptMismatch`] | A transcript that differs from its golden text block   |
/// | [`Format`]             | The sink rejected a write                              |
/// | [`Utf8Decode`]         | Bytes that are not well formed `UTF-8`                 |
///
/// [`UnknownDemo`]: Self::UnknownDemo
/// [`TranscriptMismatch`]: Self::TranscriptMismatch
/// [`Format`]: Self::Format
/// [`Utf8Decode`]: Self::Utf8Decode
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PrimitivesError {
    #[error("🔍 Unknown demo: '{name}'")]
    #[diagnostic(
        code(r3bl_primitives::demo::unknown),
        help("Valid demo names are: {valid_names}")
    )]
    UnknownDemo {
        name: String,
        valid_names: String,
    },

    #[error("❌ Transcript for '{demo}' does not match its golden text block\n{diff}")]
    #[diagnostic(
        code(r3bl_primitives::demo::transcript_mismatch),
        help(
            "The semantics of a primitive type changed, or the harness output format \
             changed. Compare the left (expected) and right (actual) lines above."
        )
    )]
    TranscriptMismatch { demo: String, diff: String },

    #[error("📝 Could not write to the transcript")]
    #[diagnostic(code(r3bl_primitives::harness::format))]
    Format(#[from] std::fmt::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Utf8Decode(#[from] Utf8DecodeError),
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_diagnostic_codes() {
        let it = PrimitivesError::UnknownDemo {
            name: "foo".into(),
            valid_names: "uint-overflow".into(),
        };
        assert_eq2!(
            it.code().map(|code| code.to_string()),
            Some("r3bl_primitives::demo::unknown".to_string())
        );
        assert_eq2!(it.to_string(), "🔍 Unknown demo: 'foo'");
    }

    #[test]
    fn test_from_fmt_error() {
        let it: PrimitivesError = std::fmt::Error.into();
        assert!(matches!(it, PrimitivesError::Format(_)));
    }

    #[test]
    fn test_utf8_decode_is_transparent() {
        let it: PrimitivesError = Utf8DecodeError::Empty.into();
        assert_eq2!(it.to_string(), Utf8DecodeError::Empty.to_string());
        assert!(it.code().is_some());
    }
}
