// SPDX-License-Identifier: PMPL-1.0-or-later

//! dateglot — date/time format-string translation between dialects.
//!
//! Three formatting dialects are in circulation for the same layouts:
//! POSIX strftime percent tokens (`%Y-%m-%d`), ICU letter-repetition
//! patterns (`yyyy-MM-dd`), and the single-letter vocabulary of PHP's
//! `date()` (`Y-m-d`). Callers write a format in one of them; the
//! rendering engine actually available on the host may speak another.
//!
//! ENGINE PILLARS:
//! 1. **Rewrite**: the two-phase pattern rewriter that maps tokens
//!    between dialects through collision-free intermediate codes, so
//!    nothing is ever converted twice.
//! 2. **Splitter**: isolates quoted literal text, which is never
//!    translated and is re-escaped for the destination dialect.
//! 3. **Session**: the caller-facing object tying a renderer, a locale,
//!    and the translator together behind one `output` call.

pub mod locale;
pub mod render;
pub mod rewrite;
pub mod session;
pub mod splitter;
pub mod translate;
pub mod types;
