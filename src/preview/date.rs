//! Date, clock and duration preview.

use chrono::{Datelike, Timelike};

use crate::ast::{AmPmStyle, DatePart, DateTimeFormat, DateTimePart, DateTimeSection, ElapsedPart};
use crate::compiler::datetime::from_plan;
use crate::locale::Locale;
use crate::settings::{DateTimeMode, DateTimeSettings};
use crate::value::DateTimeSample;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Render the format compiled from `settings` against a sample.
pub fn render(settings: &DateTimeSettings, sample: &DateTimeSample, locale: &Locale) -> String {
    let format = from_plan(&settings.resolve());
    render_format(&format, settings.mode, sample, locale)
}

/// Render a typed format against a sample.
///
/// Clock formats take their time of day from `sample.date`; duration formats
/// take it from `sample.duration_seconds`. Calendar tokens always read
/// `sample.date`. Two-section formats are the smart presets, whose first
/// section covers durations under one hour.
pub fn render_format(
    format: &DateTimeFormat,
    mode: DateTimeMode,
    sample: &DateTimeSample,
    locale: &Locale,
) -> String {
    let sections = format.sections();
    let section = match sections {
        [] => return String::new(),
        [only] => only,
        [under_hour, over_hour, ..] => {
            if mode == DateTimeMode::Duration && sample.duration_seconds.abs() < SECONDS_PER_HOUR {
                under_hour
            } else {
                over_hour
            }
        }
    };

    let (seconds, negative) = match mode {
        DateTimeMode::Clock => {
            let time = sample.date.time();
            let s = time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 / 1e9;
            (s, false)
        }
        DateTimeMode::Duration => {
            let s = sample.duration_seconds;
            if s.is_finite() {
                (s.abs(), s < 0.0)
            } else {
                (0.0, false)
            }
        }
    };

    let fields = TimeFields::split(seconds, mode, section);
    let body = render_section(section, sample, &fields, locale);
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Clock components of a time value as a section displays them.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TimeFields {
    /// Hour of day (clock) or hours shown by the section (duration)
    hours: u64,
    minutes: u64,
    seconds: u64,
    /// Fractional seconds as an integer of `precision` digits
    fraction: u64,
    places: u8,
    /// Digits actually computed; `places` beyond this render as zeros
    precision: u8,
}

/// Sub-second digits computed from the sample (nanoseconds).
const MAX_SUBSECOND_DIGITS: u8 = 9;

impl TimeFields {
    fn split(total_seconds: f64, mode: DateTimeMode, section: &DateTimeSection) -> Self {
        let places = section
            .parts
            .iter()
            .find_map(|p| match p {
                DateTimePart::Date(DatePart::SubSecond(n)) => Some(*n),
                _ => None,
            })
            .unwrap_or(0);

        // fractional digits round, whole seconds truncate
        let precision = places.min(MAX_SUBSECOND_DIGITS);
        let scale = 10_u64.pow(precision as u32);
        let ticks = if precision > 0 {
            (total_seconds * scale as f64).round() as u64
        } else {
            total_seconds.trunc() as u64
        };
        let whole = ticks / scale;
        let fraction = ticks % scale;

        let total_minutes = whole / 60;
        let total_hours = whole / 3600;

        let (hours, minutes, seconds) = match section.elapsed_unit() {
            Some(ElapsedPart::Hours) => (total_hours, total_minutes % 60, whole % 60),
            Some(ElapsedPart::Minutes) => (0, total_minutes, whole % 60),
            Some(ElapsedPart::Seconds) | Some(ElapsedPart::Seconds2) => (0, 0, whole),
            None => {
                let hours = match mode {
                    DateTimeMode::Clock => total_hours % 24,
                    DateTimeMode::Duration => total_hours,
                };
                (hours, total_minutes % 60, whole % 60)
            }
        };

        TimeFields {
            hours,
            minutes,
            seconds,
            fraction,
            places,
            precision,
        }
    }
}

fn render_section(
    section: &DateTimeSection,
    sample: &DateTimeSample,
    fields: &TimeFields,
    locale: &Locale,
) -> String {
    let has_ampm = section.has_ampm();
    let mut result = String::new();

    for part in &section.parts {
        match part {
            DateTimePart::Locale(_) => {}
            DateTimePart::Date(date_part) => {
                result.push_str(&format_date_part(*date_part, sample, fields, has_ampm, locale));
            }
            DateTimePart::Elapsed(elapsed) => {
                let formatted = match elapsed {
                    ElapsedPart::Hours => fields.hours.to_string(),
                    ElapsedPart::Minutes => fields.minutes.to_string(),
                    ElapsedPart::Seconds => fields.seconds.to_string(),
                    ElapsedPart::Seconds2 => format!("{:02}", fields.seconds),
                };
                result.push_str(&formatted);
            }
            DateTimePart::AmPm(style) => {
                result.push_str(&format_ampm(*style, fields.hours, locale));
            }
            DateTimePart::Literal(text) | DateTimePart::Separator(text) => {
                result.push_str(text);
            }
        }
    }

    result
}

/// Format a single date/time part.
fn format_date_part(
    part: DatePart,
    sample: &DateTimeSample,
    fields: &TimeFields,
    has_ampm: bool,
    locale: &Locale,
) -> String {
    let date = sample.date.date();
    let hour = if has_ampm {
        to_12_hour(fields.hours)
    } else {
        fields.hours
    };

    match part {
        DatePart::Year2 => format!("{:02}", date.year().rem_euclid(100)),
        DatePart::Year4 => format!("{:04}", date.year()),

        DatePart::Month => date.month().to_string(),
        DatePart::Month2 => format!("{:02}", date.month()),
        DatePart::MonthAbbr => locale.month_short(date.month()).to_string(),
        DatePart::MonthFull => locale.month_full(date.month()).to_string(),
        DatePart::MonthLetter => locale.month_letter(date.month()),

        DatePart::Day => date.day().to_string(),
        DatePart::Day2 => format!("{:02}", date.day()),
        DatePart::DayAbbr => locale.weekday_short(date.weekday()).to_string(),
        DatePart::DayFull => locale.weekday_full(date.weekday()).to_string(),

        DatePart::Hour => hour.to_string(),
        DatePart::Hour2 => format!("{:02}", hour),

        DatePart::Minute => fields.minutes.to_string(),
        DatePart::Minute2 => format!("{:02}", fields.minutes),

        DatePart::Second => fields.seconds.to_string(),
        DatePart::Second2 => format!("{:02}", fields.seconds),

        DatePart::SubSecond(places) => {
            if places == 0 {
                String::new()
            } else if places == fields.places {
                format!(
                    "{}{:0width$}{}",
                    locale.decimal_separator,
                    fields.fraction,
                    "0".repeat((places - fields.precision) as usize),
                    width = fields.precision as usize
                )
            } else {
                // only the first sub-second token sets the precision
                format!("{}{}", locale.decimal_separator, "0".repeat(places as usize))
            }
        }
    }
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u64) -> u64 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

/// Format AM/PM indicator.
fn format_ampm(style: AmPmStyle, hour: u64, locale: &Locale) -> String {
    let marker = if hour >= 12 {
        locale.pm_string
    } else {
        locale.am_string
    };

    match style {
        AmPmStyle::Upper => marker.to_uppercase(),
        AmPmStyle::Lower => marker.to_lowercase(),
        AmPmStyle::ShortUpper => marker.chars().take(1).collect::<String>().to_uppercase(),
        AmPmStyle::ShortLower => marker.chars().take(1).collect::<String>().to_lowercase(),
    }
}
