//! Bilingual date and time formatting
//!
//! Dates render as `22 April 2025`; date-times as `22 April 2025 at 10:30am`
//! with the minutes elided on the hour (`10am`, never `10:00am`). Incoming
//! UTC instants are converted to Europe/London before formatting, so a
//! payload timestamp of `09:30:00Z` in April displays as `10:30am`.
//!
//! Welsh output translates only the lead-in phrases; month names stay
//! English. Published Welsh fixtures read `Rhestr ar gyfer 22 April 2025`,
//! and that form is the contract.

use crate::error::{ConvertError, Result};
use crate::recipe::DateLineStyle;
use crate::text::substitute;
use crate::types::Language;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use chrono_tz::Europe::London;

/// English month names, used for both languages.
const MONTHS: [&str; 12] = [
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

/// Format a parsed date as `D Month YYYY` (no leading zero on the day).
fn format_date(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Format a clock time as `H:MMam/pm`, eliding zero minutes (`10am`).
fn format_clock<T: Timelike>(time: &T) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "pm" } else { "am" };
    if time.minute() == 0 {
        format!("{hour}{suffix}")
    } else {
        format!("{}:{:02}{}", hour, time.minute(), suffix)
    }
}

/// Parse a timestamp into Europe/London local time.
///
/// Offset-carrying values (RFC 3339) are converted; values without an
/// offset are taken as already local.
fn parse_local(raw: &str) -> Result<NaiveDateTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&London).naive_local());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive);
    }
    Err(ConvertError::InvalidDate(raw.to_string()))
}

/// Parse a `contentDate` value into a calendar date.
///
/// Accepts an ISO-8601 date (`2025-04-22`) or a timestamp, in which case
/// the Europe/London calendar date of that instant is used.
pub fn parse_content_date(raw: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_local(raw).map(|local| local.date())
}

/// Format a `contentDate` value as `D Month YYYY`.
pub fn format_content_date(raw: &str) -> Result<String> {
    parse_content_date(raw).map(format_date)
}

/// Format a timestamp as `D Month YYYY at H:MMam/pm` in Europe/London time.
pub fn format_timestamp(raw: &str) -> Result<String> {
    let local = parse_local(raw)?;
    Ok(format!("{} at {}", format_date(local.date()), format_clock(&local)))
}

/// The list-date line, e.g. `List for 22 April 2025` or
/// `Rhestr ar gyfer yr wythnos yn dechrau ar 22 April 2025`.
///
/// Week-commencing phrasing is a recipe choice; the language only selects
/// the lead-in words.
pub fn date_line(raw: &str, style: DateLineStyle, language: Language) -> Result<String> {
    let template = match (language, style) {
        (Language::English, DateLineStyle::SingleDate) => "List for {date}",
        (Language::English, DateLineStyle::WeekCommencing) => "List for week commencing {date}",
        (Language::Welsh, DateLineStyle::SingleDate) => "Rhestr ar gyfer {date}",
        (Language::Welsh, DateLineStyle::WeekCommencing) => {
            "Rhestr ar gyfer yr wythnos yn dechrau ar {date}"
        }
    };
    let date = format_content_date(raw)?;
    Ok(substitute(template, &[("date", &date)]))
}

/// The last-updated line, e.g. `Last updated 21 April 2025 at 10:30am`.
pub fn last_updated_line(raw: &str, language: Language) -> Result<String> {
    let template = match language {
        Language::English => "Last updated {datetime}",
        Language::Welsh => "Diweddarwyd ddiwethaf {datetime}",
    };
    let datetime = format_timestamp(raw)?;
    Ok(substitute(template, &[("datetime", &datetime)]))
}
