// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static short-pattern catalog.
//!
//! Rows are (language code, short date, short time), expressed in the
//! destination dialect of the table. The English row comes first in
//! every table and doubles as the fallback.
//!
//! The ICU fragments follow CLDR's SHORT date/time skeletons for each
//! language; the native fragments are their `date()` equivalents.
//!
//! ## Adding a locale
//!
//! Add one row per table, keeping English first. The lookup is a linear
//! scan, which is fine at this size — it runs once per translation
//! direction per session, not in a hot loop.

use crate::types::Dialect;

const ICU_SHORT: &[(&str, &str, &str)] = &[
    ("en", "M/d/yy", "h:mm a"),
    ("es", "d/M/yy", "H:mm"),
    ("fr", "dd/MM/y", "HH:mm"),
    ("de", "dd.MM.yy", "HH:mm"),
    ("it", "dd/MM/yy", "HH:mm"),
    ("nl", "dd-MM-y", "HH:mm"),
    ("pt", "dd/MM/y", "HH:mm"),
    ("ja", "y/MM/dd", "H:mm"),
    ("zh", "y/M/d", "HH:mm"),
    ("ko", "y. M. d.", "a h:mm"),
];

const NATIVE_SHORT: &[(&str, &str, &str)] = &[
    ("en", "m/d/Y", "H:i:s"),
    ("es", "j/n/Y", "G:i"),
    ("fr", "d/m/Y", "H:i"),
    ("de", "d.m.Y", "H:i"),
    ("it", "d/m/Y", "H:i"),
    ("nl", "d-m-Y", "H:i"),
    ("pt", "d/m/Y", "H:i"),
    ("ja", "Y/m/d", "G:i"),
    ("zh", "Y/n/j", "H:i"),
    ("ko", "Y. n. j.", "g:i"),
];

const PERCENT_SHORT: &[(&str, &str, &str)] = &[
    ("en", "%m/%d/%y", "%H:%M:%S"),
    ("es", "%d/%m/%y", "%H:%M"),
    ("fr", "%d/%m/%Y", "%H:%M"),
    ("de", "%d.%m.%y", "%H:%M"),
    ("it", "%d/%m/%y", "%H:%M"),
    ("nl", "%d-%m-%Y", "%H:%M"),
    ("pt", "%d/%m/%Y", "%H:%M"),
    ("ja", "%Y/%m/%d", "%H:%M"),
    ("zh", "%Y/%m/%d", "%H:%M"),
    ("ko", "%Y. %m. %d.", "%H:%M"),
];

pub(crate) fn catalog_for(dialect: Dialect) -> &'static [(&'static str, &'static str, &'static str)] {
    match dialect {
        Dialect::Icu => ICU_SHORT,
        Dialect::Native => NATIVE_SHORT,
        Dialect::Percent => PERCENT_SHORT,
    }
}
