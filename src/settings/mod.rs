//! Structured settings supplied by the presentation layer.
//!
//! Every type here is an immutable value object with a `Default` matching
//! the builder's initial state. With the `serde` feature the types
//! (de)serialize using the presentation layer's JSON field names.

pub mod conditional;
pub mod datetime;
pub mod number;

pub use conditional::{ConditionalRule, ConditionalRules, MAX_SECTIONS};
pub use datetime::{
    DateOrder, DatePlan, DateSeparator, DateTimeMode, DateTimePlan, DateTimeSettings, DayFormat,
    DurationUnit, HourFormat, ManualPlan, MinuteFormat, MonthFormat, SecondFormat, SmartDuration,
    SmartPreset, TimePlan, UnitPlan, UnitStyle, YearFormat,
};
pub use number::{
    CurrencyPosition, GlobalNumberSettings, NegativeMode, NegativeZone, NumberFormatSettings,
    PositiveZone, ScaleMode, TextZone, ZeroMode, ZeroZone, MAX_DECIMALS,
};
