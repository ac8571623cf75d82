// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale-default short date/time patterns.
//!
//! The percent dialect has two tokens that stand for "whatever this
//! locale's short date/time looks like" (`%x` and `%X`). Resolving them
//! needs a per-locale fragment in the destination dialect. The fragments
//! come from a compile-time static catalog; lookups fall back to the
//! English defaults when a locale is missing (fail-open, never errors).

mod catalog;

use crate::types::Dialect;

/// The two locale-default fragments, expressed in one destination
/// dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortPatterns {
    /// The short date layout, e.g. ICU `M/d/yy` or native `m/d/Y`.
    pub date: &'static str,
    /// The short time layout, e.g. ICU `h:mm a` or native `H:i:s`.
    pub time: &'static str,
}

/// Reduce a locale identifier to its primary language subtag.
///
/// Accepts the usual shapes seen in environment locale strings:
/// `fr`, `fr_FR`, `fr-FR`, `fr_FR.UTF-8`.
pub fn normalize_locale(locale: &str) -> String {
    locale
        .split(['_', '-', '.'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Look up the short date/time fragments for a locale, expressed in
/// `dialect`.
///
/// Unknown locales fall back to the English entry; the function always
/// returns usable fragments.
pub fn short_patterns(locale: &str, dialect: Dialect) -> ShortPatterns {
    let tag = normalize_locale(locale);
    let table = catalog::catalog_for(dialect);

    for &(code, date, time) in table {
        if code == tag {
            return ShortPatterns { date, time };
        }
    }

    // First entry is always English.
    let &(_, date, time) = &table[0];
    ShortPatterns { date, time }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale_variants() {
        assert_eq!(normalize_locale("fr"), "fr");
        assert_eq!(normalize_locale("fr_FR"), "fr");
        assert_eq!(normalize_locale("fr-FR"), "fr");
        assert_eq!(normalize_locale("fr_FR.UTF-8"), "fr");
        assert_eq!(normalize_locale("DE"), "de");
    }

    #[test]
    fn test_known_locale_icu() {
        let shorts = short_patterns("fr_FR", Dialect::Icu);
        assert_eq!(shorts.date, "dd/MM/y");
        assert_eq!(shorts.time, "HH:mm");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let shorts = short_patterns("tlh", Dialect::Native);
        assert_eq!(shorts.date, "m/d/Y");
        assert_eq!(shorts.time, "H:i:s");
    }

    #[test]
    fn test_every_dialect_has_a_catalog() {
        for dialect in [Dialect::Percent, Dialect::Icu, Dialect::Native] {
            let shorts = short_patterns("en", dialect);
            assert!(!shorts.date.is_empty());
            assert!(!shorts.time.is_empty());
        }
    }
}
