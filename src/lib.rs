//! fmtcraft - build Excel-compatible custom format codes from structured settings
//!
//! This crate compiles numeric, date/time/duration and conditional settings
//! into spreadsheet custom-format codes, renders approximate previews of
//! those codes for sample values, and flags constructs the custom-format
//! dialog does not accept.
//!
//! ```
//! use fmtcraft::{compile_number_format, validate, NumberFormatSettings};
//!
//! let code = compile_number_format(&NumberFormatSettings::default());
//! assert_eq!(code, "\"$\" #,##0.00_);[Red](\"$\" #,##0.00);\"-\";@");
//! assert!(validate(&code).is_empty());
//! ```

pub mod ast;
pub mod compiler;
pub mod error;
pub mod literal;
pub mod parser;
pub mod preview;
pub mod settings;
pub mod validator;
pub mod value;

mod locale;

pub use ast::{
    AmPmStyle, Condition, ConditionOperator, DatePart, DateTimeFormat, DateTimePart,
    DateTimeSection, ElapsedPart, NamedColor,
};
pub use error::{IssueKind, ParseError, SettingsError};
pub use locale::Locale;
pub use preview::{NumberPreview, RenderedZone};
pub use settings::{
    ConditionalRule, ConditionalRules, CurrencyPosition, DateOrder, DateSeparator, DateTimeMode,
    DateTimeSettings, DayFormat, DurationUnit, GlobalNumberSettings, HourFormat, MinuteFormat,
    MonthFormat, NegativeMode, NegativeZone, NumberFormatSettings, PositiveZone, ScaleMode,
    SecondFormat, SmartDuration, TextZone, YearFormat, ZeroMode, ZeroZone,
};
pub use validator::{validate, ValidationIssue};
pub use value::{DateTimeSample, NumberSamples};

/// Compile numeric settings into a `positive;negative;zero;text` code.
pub fn compile_number_format(settings: &NumberFormatSettings) -> String {
    compiler::number::compile(settings)
}

/// Compile date/time/duration settings into a format code.
pub fn compile_date_time_format(settings: &DateTimeSettings) -> String {
    compiler::datetime::compile(settings)
}

/// Compile an ordered rule list into a conditional format code.
pub fn compile_conditional_format(rules: &[ConditionalRule]) -> String {
    compiler::conditional::compile(rules)
}

/// Preview a numeric value under the zone its sign selects.
pub fn preview_number(settings: &NumberFormatSettings, value: f64) -> String {
    preview::number::render_value(settings, value, &Locale::default()).text
}

/// Preview a text value under the text zone.
pub fn preview_text(settings: &NumberFormatSettings, text: &str) -> String {
    preview::number::render_text(settings, text)
}

/// Preview all four numeric zones for a set of samples.
pub fn preview_number_zones(settings: &NumberFormatSettings, samples: &NumberSamples) -> NumberPreview {
    NumberPreview::render(settings, samples, &Locale::default())
}

/// Preview the date/time format compiled from `settings` for a sample.
pub fn preview_date_time(settings: &DateTimeSettings, sample: &DateTimeSample) -> String {
    preview::date::render(settings, sample, &Locale::default())
}
