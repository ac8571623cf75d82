// SPDX-License-Identifier: PMPL-1.0-or-later

//! Whole-format translation and dialect selection.
//!
//! Glues the splitter and the rewriter together: convertible spans go
//! through the direction's substitution table, literal spans are
//! re-protected in the destination dialect's own escape convention, and
//! the pieces are reassembled in original order. Re-protection is what
//! keeps literal text literal all the way to the rendering engine: a
//! bare `Year:` handed to a `date()`-style renderer would have its `Y`
//! and `r` read as fields.
//!
//! Also hosts the thin dialect-selection logic: given a format string
//! and the renderer actually available, decide which translation
//! direction (if any) applies. A format "looks like" the percent
//! dialect when it contains any `%` followed by a word character;
//! otherwise it is taken to be ICU, the vocabulary callers are asked to
//! write in.

use crate::locale::short_patterns;
use crate::rewrite::{tables, CodeTable};
use crate::splitter;
use crate::types::{Dialect, RendererKind, SpanKind, Translation, TranslationDirection};
use regex::Regex;
use std::collections::HashMap;

/// Whether a format string appears to use strftime percent tokens.
pub fn looks_like_percent(format: &str) -> bool {
    Regex::new(r"%\w")
        .expect("hard-coded regex")
        .is_match(format)
}

/// The apparent source dialect of a format string.
///
/// Only Percent and Icu are distinguishable by inspection; a native
/// format is indistinguishable from ICU and is treated as ICU, matching
/// the behavior callers rely on.
pub fn apparent_dialect(format: &str) -> Dialect {
    if looks_like_percent(format) {
        Dialect::Percent
    } else {
        Dialect::Icu
    }
}

/// Pick the translation direction for a format and an available
/// renderer, or `None` when the format already matches the renderer's
/// dialect and translation would be a no-op.
pub fn direction_for(format: &str, kind: RendererKind) -> Option<TranslationDirection> {
    let destination = kind.target_dialect();
    let source = apparent_dialect(format);
    if source == destination {
        None
    } else {
        Some(TranslationDirection::new(source, destination))
    }
}

/// Translates format strings between dialects.
///
/// Holds the session locale and caches compiled tables per direction,
/// so the table build (including locale short-pattern resolution) runs
/// at most once per direction per translator.
pub struct FormatTranslator {
    locale: String,
    tables: HashMap<TranslationDirection, Option<CodeTable>>,
}

impl FormatTranslator {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            tables: HashMap::new(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate a format string along `direction`.
    ///
    /// Never fails: directions without a table and patterns without an
    /// entry pass the text through unchanged. The returned
    /// [`Translation`] records whether anything actually changed.
    pub fn translate(&mut self, format: &str, direction: TranslationDirection) -> Translation {
        let Some(table) = self.table_for(direction) else {
            return Translation::identity(format);
        };

        let output = if direction.source.uses_quoted_literals() {
            let mut out = String::with_capacity(format.len());
            for span in splitter::split(format) {
                match span.kind {
                    SpanKind::Convertible => out.push_str(&table.rewrite(&span.text)),
                    SpanKind::Literal => {
                        out.push_str(&protect_literal(&span.text, direction.destination))
                    }
                }
            }
            out
        } else {
            table.rewrite(format)
        };

        Translation {
            input: format.to_string(),
            converted: output != format,
            output,
            direction: Some(direction),
        }
    }

    fn table_for(&mut self, direction: TranslationDirection) -> Option<&CodeTable> {
        if !self.tables.contains_key(&direction) {
            let shorts = short_patterns(&self.locale, direction.destination);
            self.tables
                .insert(direction, CodeTable::compile(direction, shorts));
        }
        self.tables
            .get(&direction)
            .and_then(|table| table.as_ref())
    }
}

/// Re-encode a decoded literal span in the destination dialect's escape
/// convention, so the rendering engine reads it as text rather than as
/// fields.
///
/// `date()` honors a backslash before any character; strftime-style
/// engines only react to `%`; ICU gets the quote convention back.
fn protect_literal(text: &str, destination: Dialect) -> String {
    match destination {
        Dialect::Native => {
            let mut out = String::with_capacity(text.len() * 2);
            for c in text.chars() {
                if c.is_ascii_alphabetic() || c == '\\' {
                    out.push('\\');
                }
                out.push(c);
            }
            out
        }
        Dialect::Percent => text.replace('%', "%%"),
        Dialect::Icu => format!("'{}'", text.replace('\'', "''")),
    }
}

/// Whether a substitution table exists for this direction. Re-exported
/// for callers that want to warn about unsupported directions up front.
pub fn is_supported(direction: TranslationDirection) -> bool {
    tables::is_supported(direction)
}
