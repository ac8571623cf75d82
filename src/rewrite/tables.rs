// SPDX-License-Identifier: PMPL-1.0-or-later

//! Substitution tables, one per translation direction.
//!
//! Each table is an ordered list of (source pattern, destination
//! fragment) pairs. Order matters twice over: within a marker letter the
//! longer, more specific pattern is listed before its prefixes, and the
//! letter groups themselves are processed in declaration order during
//! the first rewrite phase.
//!
//! The `%x` / `%X` entries carry the default (English) locale fragments;
//! the compiler swaps in the session locale's short date/time fragments
//! before the table is used.

use crate::types::{Dialect, TranslationDirection};

/// ICU letter-repetition patterns to PHP `date()` letters.
///
/// Note the collapses: `yyyy`, `yyy`, and `y` all mean a 4-digit year,
/// while ICU's standalone `Y` (week-based year) has no `date()`
/// equivalent closer than ISO-8601 `o`.
pub const ICU_TO_NATIVE: &[(&str, &str)] = &[
    ("EEEE", "l"),
    ("E", "D"),
    ("MMMM", "F"),
    ("MMM", "M"),
    ("MM", "m"),
    ("M", "n"),
    ("w", "W"),
    ("dd", "d"),
    ("d", "j"),
    ("D", "z"),
    ("hh", "h"),
    ("h", "g"),
    ("HH", "H"),
    ("H", "G"),
    ("mm", "i"),
    ("m", "i"),
    ("ss", "s"),
    ("yyyy", "Y"),
    ("yyy", "Y"),
    ("yy", "y"),
    ("y", "Y"),
    ("Y", "o"),
    ("zzzz", "e"),
    ("ZZZZ", "P"),
];

/// ICU letter-repetition patterns to strftime percent tokens.
///
/// Not an inverse of the percent tables: strftime has no unpadded
/// variants, so `mm`/`m` both collapse to `%M`, `dd`/`d` to `%d`, and
/// so on.
pub const ICU_TO_PERCENT: &[(&str, &str)] = &[
    ("EEEE", "%A"),
    ("E", "%a"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%m"),
    ("dd", "%d"),
    ("d", "%d"),
    ("hh", "%I"),
    ("h", "%I"),
    ("HH", "%H"),
    ("H", "%H"),
    ("mm", "%M"),
    ("m", "%M"),
    ("ss", "%S"),
    ("s", "%S"),
    ("a", "%p"),
    ("yyyy", "%Y"),
    ("yyy", "%Y"),
    ("yy", "%y"),
    ("y", "%Y"),
    ("zzzz", "%Z"),
    ("ZZZZ", "%z"),
];

/// strftime percent tokens to ICU letter-repetition patterns.
pub const PERCENT_TO_ICU: &[(&str, &str)] = &[
    ("%a", "E"),
    ("%A", "EEEE"),
    ("%b", "MMM"),
    ("%B", "MMMM"),
    ("%d", "dd"),
    ("%H", "HH"),
    ("%m", "MM"),
    ("%M", "mm"),
    ("%S", "ss"),
    ("%T", "HH:mm:ss"),
    ("%x", "M/d/yy"),
    ("%X", "h:mm a"),
    ("%y", "yy"),
    ("%Y", "y"),
];

/// strftime percent tokens to PHP `date()` letters.
pub const PERCENT_TO_NATIVE: &[(&str, &str)] = &[
    ("%a", "D"),
    ("%A", "l"),
    ("%b", "M"),
    ("%B", "F"),
    ("%d", "d"),
    ("%H", "H"),
    ("%m", "m"),
    ("%M", "i"),
    ("%S", "s"),
    ("%T", "H:i:s"),
    ("%x", "m/d/Y"),
    ("%X", "H:i:s"),
    ("%y", "y"),
    ("%Y", "Y"),
];

/// The raw pairs for a direction, or `None` when no table exists.
pub fn pairs_for(
    direction: TranslationDirection,
) -> Option<&'static [(&'static str, &'static str)]> {
    match (direction.source, direction.destination) {
        (Dialect::Icu, Dialect::Native) => Some(ICU_TO_NATIVE),
        (Dialect::Icu, Dialect::Percent) => Some(ICU_TO_PERCENT),
        (Dialect::Percent, Dialect::Icu) => Some(PERCENT_TO_ICU),
        (Dialect::Percent, Dialect::Native) => Some(PERCENT_TO_NATIVE),
        _ => None,
    }
}

/// Whether a substitution table exists for this direction.
pub fn is_supported(direction: TranslationDirection) -> bool {
    pairs_for(direction).is_some()
}
