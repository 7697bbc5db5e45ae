//! Settings for date, clock and elapsed-duration formats.
//!
//! The option set has mutually exclusive parts: smart presets replace manual
//! assembly, a duration's leading unit hides the units above it, and date
//! tokens only survive next to durations led by hours. [`DateTimeSettings::resolve`]
//! folds those rules into a single [`DateTimePlan`] that the compiler
//! consumes without re-checking any of them.

use crate::ast::AmPmStyle;
use crate::literal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DateTimeMode {
    /// Time of day
    #[default]
    Clock,
    /// Elapsed time
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum DateOrder {
    #[default]
    Dmy,
    Mdy,
    Ymd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateSeparator {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "/"))]
    Slash,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Dash,
    #[cfg_attr(feature = "serde", serde(rename = "."))]
    Dot,
    #[cfg_attr(feature = "serde", serde(rename = " "))]
    Space,
    #[cfg_attr(feature = "serde", serde(rename = ", "))]
    CommaSpace,
    /// Use [`DateTimeSettings::custom_date_separator`]
    #[cfg_attr(feature = "serde", serde(rename = "custom"))]
    Custom,
}

impl DateSeparator {
    /// The separator text for the fixed choices.
    pub fn fixed_text(&self) -> Option<&'static str> {
        match self {
            DateSeparator::Slash => Some("/"),
            DateSeparator::Dash => Some("-"),
            DateSeparator::Dot => Some("."),
            DateSeparator::Space => Some(" "),
            DateSeparator::CommaSpace => Some(", "),
            DateSeparator::Custom => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayFormat {
    /// `d`
    D,
    /// `dd`
    #[default]
    Dd,
    /// `ddd`
    Ddd,
    /// `dddd`
    Dddd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MonthFormat {
    /// `m`
    M,
    /// `mm`
    #[default]
    Mm,
    /// `mmm`
    Mmm,
    /// `mmmm`
    Mmmm,
    /// `mmmmm`
    Mmmmm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum YearFormat {
    /// `yy`
    Yy,
    /// `yyyy`
    #[default]
    Yyyy,
}

/// Units of the elapsed-time hierarchy, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DurationUnit {
    #[default]
    Hours,
    Minutes,
    Seconds,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 3] = [
        DurationUnit::Hours,
        DurationUnit::Minutes,
        DurationUnit::Seconds,
    ];

    /// Returns true if `self` sits above `other` in hours > minutes > seconds.
    pub fn is_above(&self, other: DurationUnit) -> bool {
        *self < other
    }
}

/// Canned elapsed-time templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SmartDuration {
    #[default]
    None,
    /// Minutes below one hour, hours above
    AutoScale,
    /// `1h 02m 03s` style text
    CompositeText,
    /// `mm:ss` below one hour, `h:mm:ss` above
    Timer,
}

impl SmartDuration {
    pub fn preset(&self) -> Option<SmartPreset> {
        match self {
            SmartDuration::None => None,
            SmartDuration::AutoScale => Some(SmartPreset::AutoScale),
            SmartDuration::CompositeText => Some(SmartPreset::CompositeText),
            SmartDuration::Timer => Some(SmartPreset::Timer),
        }
    }
}

/// An active smart preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartPreset {
    AutoScale,
    CompositeText,
    Timer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HourFormat {
    None,
    /// `h`
    H,
    /// `hh`
    #[default]
    Hh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MinuteFormat {
    None,
    /// `m`
    M,
    /// `mm`
    #[default]
    Mm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecondFormat {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    None,
    /// `s`
    #[cfg_attr(feature = "serde", serde(rename = "s"))]
    S,
    /// `ss`
    #[cfg_attr(feature = "serde", serde(rename = "ss"))]
    Ss,
    /// `ss.00`
    #[cfg_attr(feature = "serde", serde(rename = "ss.00"))]
    SsCentis,
}

/// How a displayed unit is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitStyle {
    /// Single letter, no padding
    Plain,
    /// Double letter, zero-padded
    Padded,
    /// Zero-padded seconds with two fractional digits
    PaddedCentis,
}

/// Date, clock and duration settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DateTimeSettings {
    pub mode: DateTimeMode,
    pub use_date: bool,
    pub use_time: bool,
    /// Locale tag, bracketed (`[$-en-US]`) or bare (`en-US`); blank for none
    pub locale_code: String,

    pub date_order: DateOrder,
    pub date_separator: DateSeparator,
    pub custom_date_separator: String,
    pub day_format: DayFormat,
    pub month_format: MonthFormat,
    pub year_format: YearFormat,

    #[cfg_attr(feature = "serde", serde(rename = "leadingDurationUnit"))]
    pub leading_unit: DurationUnit,
    pub smart_duration: SmartDuration,

    pub hour_format: HourFormat,
    pub minute_format: MinuteFormat,
    pub second_format: SecondFormat,
    pub hour_suffix: String,
    pub minute_suffix: String,
    pub second_suffix: String,

    pub use_12_hour: bool,
    pub am_pm_format: AmPmStyle,
}

impl Default for DateTimeSettings {
    fn default() -> Self {
        DateTimeSettings {
            mode: DateTimeMode::Clock,
            use_date: true,
            use_time: true,
            locale_code: String::new(),
            date_order: DateOrder::Dmy,
            date_separator: DateSeparator::Slash,
            custom_date_separator: "-".to_string(),
            day_format: DayFormat::Dd,
            month_format: MonthFormat::Mm,
            year_format: YearFormat::Yyyy,
            leading_unit: DurationUnit::Hours,
            smart_duration: SmartDuration::None,
            hour_format: HourFormat::Hh,
            minute_format: MinuteFormat::Mm,
            second_format: SecondFormat::None,
            hour_suffix: ":".to_string(),
            minute_suffix: String::new(),
            second_suffix: String::new(),
            use_12_hour: false,
            am_pm_format: AmPmStyle::Upper,
        }
    }
}

/// The single legal compiled form derived from a settings value.
#[derive(Debug, Clone, PartialEq)]
pub enum DateTimePlan {
    /// A canned template; every manual option (locale included) is ignored
    Smart(SmartPreset),
    Manual(ManualPlan),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManualPlan {
    /// Content of the locale tag (e.g. `$-en-US`)
    pub locale: Option<String>,
    pub date: Option<DatePlan>,
    pub time: Option<TimePlan>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatePlan {
    pub order: DateOrder,
    /// Separator text; empty for none
    pub separator: String,
    pub day: DayFormat,
    pub month: MonthFormat,
    pub year: YearFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimePlan {
    /// Displayed units in hierarchy order
    pub units: Vec<UnitPlan>,
    /// AM/PM marker, clock mode only
    pub am_pm: Option<AmPmStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitPlan {
    pub unit: DurationUnit,
    pub style: UnitStyle,
    /// Rendered in bracket notation and allowed to exceed its modulus
    pub accumulating: bool,
    pub suffix: String,
}

impl DateTimeSettings {
    pub fn is_duration(&self) -> bool {
        self.mode == DateTimeMode::Duration
    }

    /// Returns true if date tokens are suppressed by the duration conflict rule.
    pub fn is_date_suppressed(&self) -> bool {
        self.is_duration()
            && (self.smart_duration != SmartDuration::None
                || self.leading_unit != DurationUnit::Hours)
    }

    /// Returns true if `unit` may be shown at all under the hierarchy rule.
    pub fn is_unit_allowed(&self, unit: DurationUnit) -> bool {
        !self.is_duration() || !unit.is_above(self.leading_unit)
    }

    fn unit_style(&self, unit: DurationUnit) -> Option<UnitStyle> {
        match unit {
            DurationUnit::Hours => match self.hour_format {
                HourFormat::None => None,
                HourFormat::H => Some(UnitStyle::Plain),
                HourFormat::Hh => Some(UnitStyle::Padded),
            },
            DurationUnit::Minutes => match self.minute_format {
                MinuteFormat::None => None,
                MinuteFormat::M => Some(UnitStyle::Plain),
                MinuteFormat::Mm => Some(UnitStyle::Padded),
            },
            DurationUnit::Seconds => match self.second_format {
                SecondFormat::None => None,
                SecondFormat::S => Some(UnitStyle::Plain),
                SecondFormat::Ss => Some(UnitStyle::Padded),
                SecondFormat::SsCentis => Some(UnitStyle::PaddedCentis),
            },
        }
    }

    fn unit_suffix(&self, unit: DurationUnit) -> &str {
        match unit {
            DurationUnit::Hours => &self.hour_suffix,
            DurationUnit::Minutes => &self.minute_suffix,
            DurationUnit::Seconds => &self.second_suffix,
        }
    }

    fn date_separator_text(&self) -> String {
        match self.date_separator.fixed_text() {
            Some(text) => text.to_string(),
            None => self.custom_date_separator.clone(),
        }
    }

    /// Resolve the settings into the plan the compiler emits.
    pub fn resolve(&self) -> DateTimePlan {
        if self.is_duration() {
            if let Some(preset) = self.smart_duration.preset() {
                return DateTimePlan::Smart(preset);
            }
        }

        let locale = literal::locale_code(&self.locale_code);

        let date = if !self.use_date {
            None
        } else if self.is_date_suppressed() {
            log::warn!(
                "date tokens suppressed: duration led by {:?}",
                self.leading_unit
            );
            None
        } else {
            Some(DatePlan {
                order: self.date_order,
                separator: self.date_separator_text(),
                day: self.day_format,
                month: self.month_format,
                year: self.year_format,
            })
        };

        let time = if self.use_time {
            let units: Vec<UnitPlan> = DurationUnit::ALL
                .iter()
                .filter(|unit| self.is_unit_allowed(**unit))
                .filter_map(|unit| {
                    self.unit_style(*unit).map(|style| UnitPlan {
                        unit: *unit,
                        style,
                        accumulating: self.is_duration() && *unit == self.leading_unit,
                        suffix: self.unit_suffix(*unit).to_string(),
                    })
                })
                .collect();

            if units.is_empty() {
                None
            } else {
                let am_pm = if !self.is_duration() && self.use_12_hour {
                    Some(self.am_pm_format)
                } else {
                    None
                };
                Some(TimePlan { units, am_pm })
            }
        } else {
            None
        };

        let plan = DateTimePlan::Manual(ManualPlan { locale, date, time });
        log::trace!("resolved date/time plan: {:?}", plan);
        plan
    }

    /// Switch between clock and duration, resetting suffixes to the
    /// conventional ones for the new mode.
    pub fn with_mode(mut self, mode: DateTimeMode) -> Self {
        self.mode = mode;
        match mode {
            DateTimeMode::Clock => {
                self.smart_duration = SmartDuration::None;
                self.hour_suffix = ":".to_string();
                self.minute_suffix = String::new();
                self.use_date = true;
            }
            DateTimeMode::Duration => {
                self.hour_suffix = "h ".to_string();
                self.minute_suffix = "m ".to_string();
            }
        }
        self
    }

    /// Change the leading duration unit.
    ///
    /// Moving down the hierarchy hides the units above the new leader and
    /// makes sure the leader itself is shown; moving back to hours restores
    /// the hour token.
    pub fn with_leading_unit(mut self, unit: DurationUnit) -> Self {
        self.leading_unit = unit;
        if !self.is_duration() {
            return self;
        }
        if unit != DurationUnit::Hours {
            self.use_date = false;
        }
        match unit {
            DurationUnit::Hours => {
                if self.hour_format == HourFormat::None {
                    self.hour_format = HourFormat::Hh;
                }
            }
            DurationUnit::Minutes => {
                self.hour_format = HourFormat::None;
                if self.minute_format == MinuteFormat::None {
                    self.minute_format = MinuteFormat::Mm;
                }
            }
            DurationUnit::Seconds => {
                self.hour_format = HourFormat::None;
                self.minute_format = MinuteFormat::None;
                if self.second_format == SecondFormat::None {
                    self.second_format = SecondFormat::Ss;
                }
            }
        }
        self
    }

    /// Select a smart preset; an active preset hides manual units and the date.
    pub fn with_smart_preset(mut self, preset: SmartDuration) -> Self {
        self.smart_duration = preset;
        if preset != SmartDuration::None {
            self.hour_format = HourFormat::None;
            self.minute_format = MinuteFormat::None;
            self.second_format = SecondFormat::None;
            self.use_date = false;
        }
        self
    }
}
