// SPDX-License-Identifier: PMPL-1.0-or-later

//! Letter-by-letter renderer for the native (`date()`) dialect.
//!
//! Walks the format string one character at a time, emitting the field
//! each recognized letter stands for and copying everything else
//! through verbatim. A backslash escapes the following character, as in
//! PHP's `date()`. Timestamps are interpreted in UTC.
//!
//! Covers every token the substitution tables can emit plus the common
//! calendar letters (`N`, `w`, `t`, `L`, `U`, ...). Unrecognized
//! letters are not an error; they render as themselves.

use super::{datetime_at, Renderer};
use crate::types::{RenderError, RendererKind};
use chrono::{DateTime, Datelike, Timelike, Utc};

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// `date()`-style rendering over chrono accessors.
pub struct NativeRenderer;

impl Renderer for NativeRenderer {
    fn kind(&self) -> RendererKind {
        RendererKind::Native
    }

    fn render(&self, format: &str, timestamp: i64) -> Result<String, RenderError> {
        let dt = datetime_at(timestamp)?;

        let mut out = String::with_capacity(format.len() * 2);
        let mut chars = format.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
                continue;
            }
            emit(&mut out, ch, &dt, timestamp);
        }
        Ok(out)
    }
}

fn emit(out: &mut String, ch: char, dt: &DateTime<Utc>, timestamp: i64) {
    let weekday = dt.weekday();
    match ch {
        // Day
        'd' => out.push_str(&format!("{:02}", dt.day())),
        'j' => out.push_str(&dt.day().to_string()),
        'D' => out.push_str(&full_day_name(dt)[..3]),
        'l' => out.push_str(full_day_name(dt)),
        'N' => out.push_str(&weekday.number_from_monday().to_string()),
        'w' => out.push_str(&weekday.num_days_from_sunday().to_string()),
        'z' => out.push_str(&dt.ordinal0().to_string()),

        // Week
        'W' => out.push_str(&format!("{:02}", dt.iso_week().week())),

        // Month
        'F' => out.push_str(full_month_name(dt)),
        'M' => out.push_str(&full_month_name(dt)[..3]),
        'm' => out.push_str(&format!("{:02}", dt.month())),
        'n' => out.push_str(&dt.month().to_string()),
        't' => out.push_str(&days_in_month(dt.year(), dt.month()).to_string()),

        // Year
        'L' => out.push(if is_leap_year(dt.year()) { '1' } else { '0' }),
        'o' => out.push_str(&dt.iso_week().year().to_string()),
        'Y' => out.push_str(&dt.year().to_string()),
        'y' => out.push_str(&format!("{:02}", dt.year().rem_euclid(100))),

        // Time
        'a' => out.push_str(if dt.hour12().0 { "pm" } else { "am" }),
        'A' => out.push_str(if dt.hour12().0 { "PM" } else { "AM" }),
        'g' => out.push_str(&dt.hour12().1.to_string()),
        'G' => out.push_str(&dt.hour().to_string()),
        'h' => out.push_str(&format!("{:02}", dt.hour12().1)),
        'H' => out.push_str(&format!("{:02}", dt.hour())),
        'i' => out.push_str(&format!("{:02}", dt.minute())),
        's' => out.push_str(&format!("{:02}", dt.second())),
        'u' => out.push_str("000000"),
        'v' => out.push_str("000"),

        // Timezone (always UTC here)
        'e' => out.push_str("UTC"),
        'T' => out.push_str("UTC"),
        'P' => out.push_str("+00:00"),
        'O' => out.push_str("+0000"),
        'Z' => out.push('0'),

        // Full date/time
        'U' => out.push_str(&timestamp.to_string()),

        _ => out.push(ch),
    }
}

fn full_day_name(dt: &DateTime<Utc>) -> &'static str {
    DAY_NAMES[dt.weekday().num_days_from_monday() as usize]
}

fn full_month_name(dt: &DateTime<Utc>) -> &'static str {
    MONTH_NAMES[dt.month0() as usize]
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-07-15 17:30:59 UTC, a Monday.
    const TS: i64 = 1_721_064_659;

    fn render(format: &str) -> String {
        NativeRenderer.render(format, TS).unwrap()
    }

    #[test]
    fn test_numeric_date() {
        assert_eq!(render("Y-m-d"), "2024-07-15");
        assert_eq!(render("j/n/y"), "15/7/24");
    }

    #[test]
    fn test_named_fields() {
        assert_eq!(render("l, F j, Y"), "Monday, July 15, 2024");
        assert_eq!(render("D M"), "Mon Jul");
    }

    #[test]
    fn test_time_fields() {
        assert_eq!(render("H:i:s"), "17:30:59");
        assert_eq!(render("g:i a"), "5:30 pm");
        assert_eq!(render("h A"), "05 PM");
        assert_eq!(render("G"), "17");
    }

    #[test]
    fn test_calendar_fields() {
        assert_eq!(render("N"), "1");
        assert_eq!(render("w"), "1");
        assert_eq!(render("z"), "196");
        assert_eq!(render("W"), "29");
        assert_eq!(render("t"), "31");
        assert_eq!(render("L"), "1");
        assert_eq!(render("o"), "2024");
    }

    #[test]
    fn test_timezone_fields() {
        assert_eq!(render("e"), "UTC");
        assert_eq!(render("P"), "+00:00");
    }

    #[test]
    fn test_backslash_escapes_next_character() {
        assert_eq!(render(r"\Y Y"), "Y 2024");
    }

    #[test]
    fn test_unrecognized_characters_pass_through() {
        assert_eq!(render("Y-m-d @ H:i"), "2024-07-15 @ 17:30");
    }

    #[test]
    fn test_epoch_token() {
        assert_eq!(render("U"), TS.to_string());
    }

    #[test]
    fn test_every_table_output_token_renders() {
        use crate::rewrite::tables::{ICU_TO_NATIVE, PERCENT_TO_NATIVE};

        let mut tokens: Vec<char> = Vec::new();
        for &(_, replacement) in ICU_TO_NATIVE.iter().chain(PERCENT_TO_NATIVE) {
            tokens.extend(replacement.chars().filter(|c| c.is_ascii_alphabetic()));
        }
        for token in tokens {
            let rendered = render(&token.to_string());
            assert!(
                !rendered.is_empty(),
                "native token '{token}' rendered nothing"
            );
        }
    }
}
