//! Sample values fed to the preview interpreters.

use chrono::{NaiveDate, NaiveDateTime};

/// Sample inputs for the four numeric zones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct NumberSamples {
    pub positive: f64,
    pub negative: f64,
    pub zero: f64,
    pub text: String,
}

impl Default for NumberSamples {
    fn default() -> Self {
        NumberSamples {
            positive: 1234.56,
            negative: -1234.56,
            zero: 0.0,
            text: "Input".to_string(),
        }
    }
}

/// Sample input for the date/time preview.
///
/// Clock formats read `date`; duration formats read `duration_seconds`,
/// whose fractional part feeds sub-second tokens.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DateTimeSample {
    pub date: NaiveDateTime,
    pub duration_seconds: f64,
}

impl DateTimeSample {
    pub fn new(date: NaiveDateTime, duration_seconds: f64) -> Self {
        DateTimeSample {
            date,
            duration_seconds,
        }
    }

    /// A sample with the default date and the given duration.
    pub fn with_duration(duration_seconds: f64) -> Self {
        DateTimeSample {
            duration_seconds,
            ..Default::default()
        }
    }

    /// A sample with the given date and the default duration.
    pub fn with_date(date: NaiveDateTime) -> Self {
        DateTimeSample {
            date,
            ..Default::default()
        }
    }
}

impl Default for DateTimeSample {
    fn default() -> Self {
        let date = NaiveDate::from_ymd_opt(2025, 10, 25)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap_or_default();
        DateTimeSample {
            date,
            duration_seconds: 100_000.0,
        }
    }
}
