// SPDX-License-Identifier: PMPL-1.0-or-later

//! Date-output sessions.
//!
//! A [`DateSession`] owns one rendering engine, one locale, and the
//! translator state (cached substitution tables). Callers hand it a
//! format string in whichever dialect they prefer; the session
//! translates to the engine's dialect when needed and renders.
//!
//! Sessions are built for cooperative single-owner use: all state is
//! per-instance, nothing is shared process-wide. Give each logical
//! session its own instance rather than sharing one across threads.
//!
//! The debug sink is a per-session flag. When enabled, every `output`
//! call emits one dimmed stderr line with the input format, the
//! (possibly unchanged) translated format, the timestamp, and the
//! rendered result. Render failures always emit a warning line,
//! debug or not, and come back as error values rather than aborting
//! anything.

use crate::render::Renderer;
use crate::translate::{direction_for, FormatTranslator};
use crate::types::{RenderError, RendererKind, Translation};
use chrono::Utc;
use colored::*;

pub struct DateSession {
    renderer: Box<dyn Renderer>,
    translator: FormatTranslator,
    debug: bool,
}

impl DateSession {
    pub fn new(renderer: Box<dyn Renderer>, locale: &str) -> Self {
        Self {
            renderer,
            translator: FormatTranslator::new(locale),
            debug: false,
        }
    }

    pub fn renderer_kind(&self) -> RendererKind {
        self.renderer.kind()
    }

    pub fn enable_debug(&mut self) {
        self.debug = true;
        self.debug_line(&format!(
            "debug enabled: {:?} renderer, locale '{}'",
            self.renderer.kind(),
            self.translator.locale()
        ));
    }

    pub fn disable_debug(&mut self) {
        self.debug = false;
    }

    /// Translate a format to the session renderer's dialect without
    /// rendering it.
    pub fn translate(&mut self, format: &str) -> Translation {
        match direction_for(format, self.renderer.kind()) {
            Some(direction) => self.translator.translate(format, direction),
            None => Translation::identity(format),
        }
    }

    /// Render `format` at `timestamp` (epoch seconds; `None` means
    /// now), translating to the renderer's dialect first when the
    /// format is written in another one.
    ///
    /// Only the render step can fail; translation always produces some
    /// format string. A failure is reported as a value and logged as a
    /// warning, never escalated.
    pub fn output(&mut self, format: &str, timestamp: Option<i64>) -> Result<String, RenderError> {
        let timestamp = timestamp.unwrap_or_else(|| Utc::now().timestamp());
        let translation = self.translate(format);

        let result = self.renderer.render(&translation.output, timestamp);
        match &result {
            Ok(text) => {
                if self.debug {
                    let note = if translation.converted {
                        format!(", format converted to '{}'", translation.output)
                    } else {
                        String::new()
                    };
                    self.debug_line(&format!(
                        "output for '{format}' with timestamp ({timestamp}): '{text}'{note}"
                    ));
                }
            }
            Err(err) => {
                eprintln!(
                    "{} formatting error using '{}': {}",
                    "warning:".yellow().bold(),
                    format,
                    err
                );
            }
        }
        result
    }

    fn debug_line(&self, message: &str) {
        if self.debug {
            eprintln!("{}", format!("dateglot: {message}").dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{NativeRenderer, PosixRenderer};

    // 2024-07-15 17:30:59 UTC, a Monday.
    const TS: i64 = 1_721_064_659;

    #[test]
    fn test_percent_format_on_posix_renderer_is_untranslated() {
        let mut session = DateSession::new(Box::new(PosixRenderer), "en");
        let translation = session.translate("%Y-%m-%d");
        assert!(!translation.converted);
        assert_eq!(translation.output, "%Y-%m-%d");
    }

    #[test]
    fn test_icu_format_on_native_renderer_translates_then_renders() {
        let mut session = DateSession::new(Box::new(NativeRenderer), "en");
        let out = session.output("yyyy-MM-dd", Some(TS)).unwrap();
        assert_eq!(out, "2024-07-15");
    }

    #[test]
    fn test_percent_format_on_native_renderer() {
        let mut session = DateSession::new(Box::new(NativeRenderer), "en");
        let out = session.output("%Y-%m-%d %H:%M:%S", Some(TS)).unwrap();
        assert_eq!(out, "2024-07-15 17:30:59");
    }

    #[test]
    fn test_render_failure_is_a_value() {
        let mut session = DateSession::new(Box::new(PosixRenderer), "en");
        let err = session.output("%Y", Some(i64::MAX)).unwrap_err();
        assert!(err.message.contains("out of range"));
    }
}
