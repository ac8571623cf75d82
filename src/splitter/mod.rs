// SPDX-License-Identifier: PMPL-1.0-or-later

//! Literal-span splitting for quoted format strings.
//!
//! ICU patterns protect literal text with single quotes: a quoted run
//! lasts from an opening quote to its closing quote, a doubled quote
//! (`''`) inside the run is an escaped quote character, and a
//! standalone `''` stands for a literal quote on its own. The splitter
//! partitions a format string into an ordered, gapless sequence of
//! literal and convertible spans so the rewriter only ever touches the
//! convertible parts.
//!
//! A quote with no closing partner opens no literal span: the quote
//! character and everything after it stay convertible. That keeps the
//! splitter total — malformed quoting degrades to pass-through instead
//! of failing.

use crate::types::Span;

/// Partition a format string into literal and convertible spans.
///
/// Spans come back in original order with no overlap and no gap. The
/// text of a literal span is its decoded content: delimiters stripped,
/// `''` decoded to `'`. Empty convertible gaps between adjacent literal
/// spans are dropped.
pub fn split(format: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = format;

    while let Some(open) = rest.find('\'') {
        // Scan for the real closing quote, decoding `''` escapes along
        // the way: a quote directly followed by another quote belongs
        // to the literal, it does not close it.
        let mut literal = String::new();
        let mut tail = &rest[open + 1..];
        let mut closed = false;
        while let Some(quote) = tail.find('\'') {
            literal.push_str(&tail[..quote]);
            let after = &tail[quote + 1..];
            if let Some(stripped) = after.strip_prefix('\'') {
                literal.push('\'');
                tail = stripped;
            } else {
                tail = after;
                closed = true;
                break;
            }
        }
        if !closed {
            // Unterminated quote: no further literal spans.
            break;
        }

        if open > 0 {
            spans.push(Span::convertible(&rest[..open]));
        }
        if literal.is_empty() {
            spans.push(Span::literal("'"));
        } else {
            spans.push(Span::literal(literal));
        }
        rest = tail;
    }

    if !rest.is_empty() || spans.is_empty() {
        spans.push(Span::convertible(rest));
    }

    spans
}
