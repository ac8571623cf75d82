// SPDX-License-Identifier: PMPL-1.0-or-later

//! Two-phase pattern rewriting between format dialects.
//!
//! The dialects share literal letters (`m`, `M`, `d`, `y` all mean
//! something in both ICU and `date()` vocabularies), so a single-pass
//! substitution can re-match text it just produced: translating `M` to
//! `m` and then reading that `m` as an input minute token. The fix is
//! an indirection through intermediate codes:
//!
//! 1. every matched source pattern is replaced by a placeholder code
//!    drawn from an alphabet that appears in no dialect (the Unicode
//!    private-use area, one code point per table entry);
//! 2. once matching is finished, each code is replaced by its
//!    destination fragment.
//!
//! Codes cannot occur in source text and the second phase removes them
//! entirely, so no pattern is ever processed twice and no code survives
//! into the output.
//!
//! Matching is repetition-sensitive for letter-run dialects: `yyyy`,
//! `yy`, and `y` are distinct patterns, and a run is only ever matched
//! whole. `Regex::find_iter` on `y+` yields exactly the maximal runs,
//! which is what the bounded-repetition rule requires.

pub mod tables;

use crate::locale::ShortPatterns;
use crate::types::{Dialect, TranslationDirection};
use regex::{Captures, Regex};

/// First code point of the intermediate-code alphabet (private use
/// area, disjoint from every dialect vocabulary).
const CODE_BASE: u32 = 0xE000;

/// True if `text` still contains an intermediate code.
///
/// Output of [`CodeTable::rewrite`] must never satisfy this; tests use
/// it to verify the no-leakage contract.
pub fn has_code_residue(text: &str) -> bool {
    text.chars()
        .any(|c| (CODE_BASE..CODE_BASE + 0x100).contains(&(c as u32)))
}

struct Entry {
    pattern: &'static str,
    code: String,
    replacement: String,
}

enum Matcher {
    /// `%` followed by one word character, e.g. `%Y`.
    PercentTokens(Regex),
    /// Maximal runs of each marker letter, e.g. `yyyy` but never a
    /// partial slice of a longer run. One compiled regex per distinct
    /// first letter, in table order.
    LetterRuns(Vec<Regex>),
}

/// A compiled substitution table for one translation direction.
///
/// Compiled once (per session and direction) and reused; the `%x`/`%X`
/// locale placeholders are resolved at compile time from the supplied
/// short patterns.
pub struct CodeTable {
    direction: TranslationDirection,
    entries: Vec<Entry>,
    matcher: Matcher,
}

impl CodeTable {
    /// Compile the table for `direction`, or `None` when the direction
    /// has no table.
    pub fn compile(direction: TranslationDirection, shorts: ShortPatterns) -> Option<Self> {
        let pairs = tables::pairs_for(direction)?;

        let entries: Vec<Entry> = pairs
            .iter()
            .enumerate()
            .map(|(i, &(pattern, replacement))| {
                let code = char::from_u32(CODE_BASE + i as u32)
                    .expect("private-use code point")
                    .to_string();
                let replacement = match pattern {
                    "%x" => shorts.date.to_string(),
                    "%X" => shorts.time.to_string(),
                    _ => replacement.to_string(),
                };
                Entry {
                    pattern,
                    code,
                    replacement,
                }
            })
            .collect();

        let matcher = if direction.source == Dialect::Percent {
            Matcher::PercentTokens(Regex::new(r"%\w").expect("hard-coded regex"))
        } else {
            let mut letters: Vec<char> = Vec::new();
            for entry in &entries {
                let first = entry.pattern.chars().next().expect("non-empty pattern");
                if !letters.contains(&first) {
                    letters.push(first);
                }
            }
            let runs = letters
                .iter()
                .map(|&c| Regex::new(&format!("{}+", regex::escape(&c.to_string())))
                    .expect("hard-coded regex"))
                .collect();
            Matcher::LetterRuns(runs)
        };

        Some(Self {
            direction,
            entries,
            matcher,
        })
    }

    pub fn direction(&self) -> TranslationDirection {
        self.direction
    }

    /// Every source pattern this table knows about.
    pub fn patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.pattern)
    }

    /// Rewrite one convertible span into the destination dialect.
    ///
    /// Patterns without a table entry pass through unchanged; that is
    /// the contract, not a failure.
    pub fn rewrite(&self, text: &str) -> String {
        let mut current = self.to_codes(text);

        // Second phase: codes to destination fragments. Codes are
        // single unique code points, so plain replacement cannot
        // collide or re-match.
        for entry in &self.entries {
            if current.contains(&entry.code) {
                current = current.replace(&entry.code, &entry.replacement);
            }
        }
        current
    }

    /// First phase: map every matched source pattern to its code.
    fn to_codes(&self, text: &str) -> String {
        match &self.matcher {
            Matcher::PercentTokens(re) => re
                .replace_all(text, |caps: &Captures| self.swap(&caps[0]))
                .into_owned(),
            Matcher::LetterRuns(runs) => {
                let mut current = text.to_string();
                for re in runs {
                    current = re
                        .replace_all(&current, |caps: &Captures| self.swap(&caps[0]))
                        .into_owned();
                }
                current
            }
        }
    }

    /// Code for a matched pattern, or the pattern itself when the table
    /// has no entry for it.
    fn swap(&self, matched: &str) -> String {
        match self.code_for(matched) {
            Some(code) => code.to_string(),
            None => matched.to_string(),
        }
    }

    fn code_for(&self, pattern: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.pattern == pattern)
            .map(|e| e.code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::short_patterns;
    use crate::types::Dialect;

    fn table(source: Dialect, destination: Dialect) -> CodeTable {
        let direction = TranslationDirection::new(source, destination);
        let shorts = short_patterns("en", destination);
        CodeTable::compile(direction, shorts).expect("table exists")
    }

    #[test]
    fn test_icu_to_native_basic() {
        let t = table(Dialect::Icu, Dialect::Native);
        assert_eq!(t.rewrite("yyyy-MM-dd"), "Y-m-d");
    }

    #[test]
    fn test_run_length_sensitivity() {
        let t = table(Dialect::Icu, Dialect::Native);
        assert_eq!(t.rewrite("yyyy"), "Y", "4-digit year");
        assert_eq!(t.rewrite("yy"), "y", "2-digit year");
        assert_ne!(t.rewrite("yyyy"), t.rewrite("yy"));
    }

    #[test]
    fn test_produced_letters_are_not_rematched() {
        // M -> n and m -> i share letters with their own sources; the
        // intermediate indirection keeps the outputs stable.
        let t = table(Dialect::Icu, Dialect::Native);
        assert_eq!(t.rewrite("M"), "n");
        assert_eq!(t.rewrite("mm"), "i");
        assert_eq!(t.rewrite("H:mm"), "G:i");
    }

    #[test]
    fn test_unmapped_run_passes_through() {
        let t = table(Dialect::Icu, Dialect::Native);
        assert_eq!(t.rewrite("QQQ"), "QQQ");
        // A run length with no entry also passes through whole.
        assert_eq!(t.rewrite("EEE"), "EEE");
    }

    #[test]
    fn test_repeated_pattern_occurrences_all_convert() {
        let t = table(Dialect::Icu, Dialect::Native);
        assert_eq!(t.rewrite("yyyy/yyyy"), "Y/Y");
    }

    #[test]
    fn test_percent_tokens() {
        let t = table(Dialect::Percent, Dialect::Icu);
        assert_eq!(t.rewrite("%Y-%m-%d %H:%M:%S"), "y-MM-dd HH:mm:ss");
    }

    #[test]
    fn test_percent_compound_token() {
        let t = table(Dialect::Percent, Dialect::Native);
        assert_eq!(t.rewrite("%T"), "H:i:s");
    }

    #[test]
    fn test_unknown_percent_token_passes_through() {
        let t = table(Dialect::Percent, Dialect::Icu);
        assert_eq!(t.rewrite("%Q"), "%Q");
    }

    #[test]
    fn test_no_code_residue_for_all_patterns() {
        for (source, destination) in [
            (Dialect::Icu, Dialect::Native),
            (Dialect::Icu, Dialect::Percent),
            (Dialect::Percent, Dialect::Icu),
            (Dialect::Percent, Dialect::Native),
        ] {
            let t = table(source, destination);
            let patterns: Vec<&str> = t.patterns().collect();
            for pattern in patterns {
                let out = t.rewrite(pattern);
                assert!(
                    !has_code_residue(&out),
                    "{source}->{destination} leaked a code for '{pattern}': {out:?}"
                );
            }
        }
    }
}
