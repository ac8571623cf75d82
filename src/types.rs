// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for dateglot
//!
//! The three format dialects, the translation directions between them,
//! and the shared value types used across the splitter, rewriter, and
//! renderer layers.

use serde::{Deserialize, Serialize};

/// A date/time format-string vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// POSIX `strftime`-style percent tokens: `%Y`, `%m`, `%d`, ...
    Percent,
    /// ICU/CLDR letter-repetition patterns: `yyyy`, `MM`, `dd`, ...
    Icu,
    /// Legacy single-letter tokens as consumed by PHP's `date()`:
    /// `Y`, `m`, `d`, `l`, `F`, ...
    Native,
}

impl Dialect {
    /// Whether this dialect uses the ICU single-quote literal convention.
    pub fn uses_quoted_literals(&self) -> bool {
        matches!(self, Dialect::Icu)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Percent => write!(f, "percent"),
            Dialect::Icu => write!(f, "icu"),
            Dialect::Native => write!(f, "native"),
        }
    }
}

/// Which rendering engine a session talks to.
///
/// Resolved once at session construction and injected, never probed at
/// call time, so translation logic stays testable without environment
/// dependence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// An ICU-backed engine that consumes letter-repetition patterns.
    Icu,
    /// A `strftime`-like engine that consumes percent tokens.
    PosixLike,
    /// A `date()`-like engine that consumes single-letter tokens.
    Native,
}

impl RendererKind {
    /// The dialect this engine expects format strings in.
    pub fn target_dialect(&self) -> Dialect {
        match self {
            RendererKind::Icu => Dialect::Icu,
            RendererKind::PosixLike => Dialect::Percent,
            RendererKind::Native => Dialect::Native,
        }
    }
}

/// An ordered (source, destination) dialect pair selecting one
/// substitution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationDirection {
    pub source: Dialect,
    pub destination: Dialect,
}

impl TranslationDirection {
    pub fn new(source: Dialect, destination: Dialect) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl std::fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}

/// One piece of a partitioned format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanKind {
    /// Quoted text, never tokenized; re-escaped for the destination
    /// dialect on output.
    Literal,
    /// Unquoted text, subject to pattern rewriting.
    Convertible,
}

/// A contiguous piece of a format string, tagged by how it must be
/// treated.
///
/// For `Literal` spans the text carries the decoded content: the quote
/// delimiters are stripped and a doubled quote (`''`) decodes to a
/// single quote character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Literal,
            text: text.into(),
        }
    }

    pub fn convertible(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Convertible,
            text: text.into(),
        }
    }
}

/// The outcome of one format-string translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub input: String,
    pub output: String,
    /// `None` when the input already matched the destination dialect
    /// and translation was a no-op.
    pub direction: Option<TranslationDirection>,
    /// Whether the output differs from the input. Callers use this to
    /// decide whether to report a "format was converted" diagnostic.
    pub converted: bool,
}

impl Translation {
    /// The identity translation: input passed through untouched.
    pub fn identity(format: &str) -> Self {
        Self {
            input: format.to_string(),
            output: format.to_string(),
            direction: None,
            converted: false,
        }
    }
}

/// A failure reported by a rendering engine.
///
/// Rendering is the only step that can fail; the failure is always a
/// value the caller can recover from, never a panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderError {
    pub code: i32,
    pub message: String,
}

impl RenderError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl std::error::Error for RenderError {}
