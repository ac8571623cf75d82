// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering engines.
//!
//! A renderer is the platform primitive that turns a format string (in
//! the renderer's own dialect) plus an epoch timestamp into text. The
//! translation engine treats renderers as collaborators behind the
//! [`Renderer`] trait; which one a session gets is decided at
//! construction.
//!
//! Two engines ship in-crate: [`PosixRenderer`] (percent dialect,
//! backed by chrono's strftime formatter) and
//! [`native::NativeRenderer`] (the `date()` letter dialect). An ICU
//! engine is not provided; hosts with one implement the trait
//! themselves.

pub mod native;

pub use native::NativeRenderer;

use crate::types::{RenderError, RendererKind};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Write;

/// A date-rendering engine consuming one fixed dialect.
pub trait Renderer {
    /// Which dialect this engine expects.
    fn kind(&self) -> RendererKind;

    /// Render `format` at `timestamp` (epoch seconds, UTC).
    ///
    /// Failures come back as values; implementations must not panic on
    /// bad patterns or out-of-range timestamps.
    fn render(&self, format: &str, timestamp: i64) -> Result<String, RenderError>;
}

/// Error codes shared by the in-crate renderers.
pub const ERR_BAD_TIMESTAMP: i32 = 1;
pub const ERR_BAD_PATTERN: i32 = 2;

pub(crate) fn datetime_at(timestamp: i64) -> Result<DateTime<Utc>, RenderError> {
    Utc.timestamp_opt(timestamp, 0).single().ok_or_else(|| {
        RenderError::new(
            ERR_BAD_TIMESTAMP,
            format!("timestamp {timestamp} is out of range"),
        )
    })
}

/// strftime-style rendering via chrono.
pub struct PosixRenderer;

impl Renderer for PosixRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::PosixLike
    }

    fn render(&self, format: &str, timestamp: i64) -> Result<String, RenderError> {
        let dt = datetime_at(timestamp)?;

        // chrono reports an unknown specifier as a fmt::Error while
        // writing, not as a panic; catch it here and surface a value.
        let mut out = String::with_capacity(format.len() * 2);
        write!(out, "{}", dt.format(format)).map_err(|_| {
            RenderError::new(
                ERR_BAD_PATTERN,
                format!("invalid percent pattern '{format}'"),
            )
        })?;
        Ok(out)
    }
}
