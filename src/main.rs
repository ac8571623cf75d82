// SPDX-License-Identifier: PMPL-1.0-or-later

//! dateglot: translate date/time format strings between dialects and
//! render them.
//!
//! A thin CLI over the library: `convert` rewrites a format string into
//! another dialect, `render` formats a timestamp with whichever
//! rendering engine is selected, `detect` reports the apparent dialect
//! of a format string.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dateglot::render::{NativeRenderer, PosixRenderer, Renderer};
use dateglot::session::DateSession;
use dateglot::translate::{apparent_dialect, is_supported, FormatTranslator};
use dateglot::types::{Dialect, Translation, TranslationDirection};

#[derive(Parser)]
#[command(name = "dateglot")]
#[command(version)]
#[command(about = "Date/time format-string translation between strftime, ICU, and date() dialects")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a format string into another dialect
    Convert {
        /// Format string to translate
        #[arg(value_name = "FORMAT")]
        format: String,

        /// Destination dialect
        #[arg(short, long, value_enum)]
        to: DialectArg,

        /// Source dialect (default: detected from the format)
        #[arg(long, value_enum)]
        from: Option<DialectArg>,

        /// Locale for short date/time placeholders (%x / %X)
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Emit the translation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a format string at a timestamp
    Render {
        /// Format string, in any dialect
        #[arg(value_name = "FORMAT")]
        format: String,

        /// Rendering engine to use
        #[arg(short, long, value_enum, default_value = "posix")]
        renderer: RendererArg,

        /// Epoch seconds (default: now)
        #[arg(short, long)]
        timestamp: Option<i64>,

        /// Locale for short date/time placeholders (%x / %X)
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Emit per-call diagnostics to stderr
        #[arg(long)]
        debug: bool,
    },

    /// Report the apparent dialect of a format string
    Detect {
        /// Format string to inspect
        #[arg(value_name = "FORMAT")]
        format: String,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum DialectArg {
    Percent,
    Icu,
    Native,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Percent => Dialect::Percent,
            DialectArg::Icu => Dialect::Icu,
            DialectArg::Native => Dialect::Native,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum RendererArg {
    Posix,
    Native,
}

impl RendererArg {
    fn build(self) -> Box<dyn Renderer> {
        match self {
            RendererArg::Posix => Box::new(PosixRenderer),
            RendererArg::Native => Box::new(NativeRenderer),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            format,
            to,
            from,
            locale,
            json,
        } => {
            let destination = Dialect::from(to);
            let source = from
                .map(Dialect::from)
                .unwrap_or_else(|| apparent_dialect(&format));

            let translation = if source == destination {
                Translation::identity(&format)
            } else {
                let direction = TranslationDirection::new(source, destination);
                if !is_supported(direction) {
                    eprintln!(
                        "{} no conversion table for {}; format passed through",
                        "warning:".yellow().bold(),
                        direction
                    );
                }
                FormatTranslator::new(&locale).translate(&format, direction)
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&translation)?);
            } else {
                println!("{}", translation.output);
                if translation.converted {
                    eprintln!(
                        "{}",
                        format!("converted from '{}'", translation.input).dimmed()
                    );
                }
            }
        }

        Commands::Render {
            format,
            renderer,
            timestamp,
            locale,
            debug,
        } => {
            let mut session = DateSession::new(renderer.build(), &locale);
            if debug {
                session.enable_debug();
            }
            let rendered = session
                .output(&format, timestamp)
                .map_err(|err| anyhow!("rendering failed: {err}"))?;
            println!("{rendered}");
        }

        Commands::Detect { format } => {
            println!("{}", apparent_dialect(&format));
        }
    }

    Ok(())
}
