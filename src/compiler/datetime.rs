//! Date, clock and elapsed-duration compiler.

use crate::ast::{
    Condition, ConditionOperator, DatePart, DateTimeFormat, DateTimePart, DateTimeSection,
    ElapsedPart, NamedColor,
};
use crate::literal;
use crate::settings::{
    DateOrder, DatePlan, DateTimePlan, DateTimeSettings, DayFormat, DurationUnit, ManualPlan,
    MonthFormat, SmartPreset, TimePlan, UnitPlan, UnitStyle, YearFormat,
};

/// One hour expressed in days (1/24), as written in the smart templates.
pub const AUTO_SCALE_THRESHOLD: f64 = 0.0416667;

/// Compile date/time settings into a format code.
pub fn compile(settings: &DateTimeSettings) -> String {
    let code = build(settings).to_string();
    log::debug!("compiled date/time format: {}", code);
    code
}

/// Compile date/time settings into the typed format.
pub fn build(settings: &DateTimeSettings) -> DateTimeFormat {
    from_plan(&settings.resolve())
}

/// Assemble the typed format for an already resolved plan.
pub fn from_plan(plan: &DateTimePlan) -> DateTimeFormat {
    match plan {
        DateTimePlan::Smart(preset) => smart_template(*preset),
        DateTimePlan::Manual(manual) => manual_format(manual),
    }
}

fn sep(text: &str) -> DateTimePart {
    DateTimePart::Separator(text.to_string())
}

fn lit(text: &str) -> DateTimePart {
    DateTimePart::Literal(text.to_string())
}

fn under_one_hour(parts: Vec<DateTimePart>) -> DateTimeSection {
    DateTimeSection {
        condition: Some(Condition::new(
            ConditionOperator::LessThan,
            AUTO_SCALE_THRESHOLD,
        )),
        color: Some(NamedColor::Blue),
        parts,
    }
}

/// The canned template of a smart preset.
pub fn smart_template(preset: SmartPreset) -> DateTimeFormat {
    use DateTimePart::{Date, Elapsed};

    let sections = match preset {
        SmartPreset::AutoScale => vec![
            under_one_hour(vec![Elapsed(ElapsedPart::Minutes), sep(" "), lit("mins")]),
            DateTimeSection::new(vec![Elapsed(ElapsedPart::Hours), sep(" "), lit("hours")]),
        ],
        SmartPreset::CompositeText => vec![DateTimeSection::new(vec![
            Elapsed(ElapsedPart::Hours),
            lit("h "),
            Date(DatePart::Minute2),
            lit("m "),
            Date(DatePart::Second2),
            lit("s"),
        ])],
        SmartPreset::Timer => vec![
            under_one_hour(vec![
                Date(DatePart::Minute2),
                sep(":"),
                Date(DatePart::Second2),
            ]),
            DateTimeSection::new(vec![
                Elapsed(ElapsedPart::Hours),
                sep(":"),
                Date(DatePart::Minute2),
                sep(":"),
                Date(DatePart::Second2),
            ]),
        ],
    };
    DateTimeFormat::from_sections(sections)
}

fn manual_format(plan: &ManualPlan) -> DateTimeFormat {
    let mut parts = Vec::new();

    if let Some(locale) = &plan.locale {
        parts.push(DateTimePart::Locale(locale.clone()));
    }
    if let Some(date) = &plan.date {
        date_parts(date, &mut parts);
    }
    if let Some(time) = &plan.time {
        if plan.date.is_some() {
            parts.push(sep(" "));
        }
        time_parts(time, &mut parts);
    }

    DateTimeFormat::from_sections(vec![DateTimeSection::new(parts)])
}

fn date_parts(plan: &DatePlan, parts: &mut Vec<DateTimePart>) {
    let day = DateTimePart::Date(match plan.day {
        DayFormat::D => DatePart::Day,
        DayFormat::Dd => DatePart::Day2,
        DayFormat::Ddd => DatePart::DayAbbr,
        DayFormat::Dddd => DatePart::DayFull,
    });
    let month = DateTimePart::Date(match plan.month {
        MonthFormat::M => DatePart::Month,
        MonthFormat::Mm => DatePart::Month2,
        MonthFormat::Mmm => DatePart::MonthAbbr,
        MonthFormat::Mmmm => DatePart::MonthFull,
        MonthFormat::Mmmmm => DatePart::MonthLetter,
    });
    let year = DateTimePart::Date(match plan.year {
        YearFormat::Yy => DatePart::Year2,
        YearFormat::Yyyy => DatePart::Year4,
    });

    let ordered = match plan.order {
        DateOrder::Dmy => [day, month, year],
        DateOrder::Mdy => [month, day, year],
        DateOrder::Ymd => [year, month, day],
    };

    let separator = match plan.separator.as_str() {
        "" => None,
        " " => Some(sep(" ")),
        text => Some(lit(text)),
    };

    for (i, part) in ordered.into_iter().enumerate() {
        if i > 0 {
            if let Some(s) = &separator {
                parts.push(s.clone());
            }
        }
        parts.push(part);
    }
}

fn time_parts(plan: &TimePlan, parts: &mut Vec<DateTimePart>) {
    for unit in &plan.units {
        unit_parts(unit, parts);
        if !unit.suffix.is_empty() {
            if literal::is_bare_time_literal(&unit.suffix) {
                parts.push(sep(&unit.suffix));
            } else {
                parts.push(lit(&unit.suffix));
            }
        }
    }
    if let Some(style) = plan.am_pm {
        parts.push(sep(" "));
        parts.push(DateTimePart::AmPm(style));
    }
}

fn unit_parts(unit: &UnitPlan, parts: &mut Vec<DateTimePart>) {
    use DateTimePart::{Date, Elapsed};

    if unit.accumulating {
        match (unit.unit, unit.style) {
            (DurationUnit::Hours, _) => parts.push(Elapsed(ElapsedPart::Hours)),
            (DurationUnit::Minutes, _) => parts.push(Elapsed(ElapsedPart::Minutes)),
            (DurationUnit::Seconds, UnitStyle::PaddedCentis) => {
                parts.push(Elapsed(ElapsedPart::Seconds2));
                parts.push(Date(DatePart::SubSecond(2)));
            }
            (DurationUnit::Seconds, _) => parts.push(Elapsed(ElapsedPart::Seconds)),
        }
        return;
    }

    match (unit.unit, unit.style) {
        (DurationUnit::Hours, UnitStyle::Plain) => parts.push(Date(DatePart::Hour)),
        (DurationUnit::Hours, _) => parts.push(Date(DatePart::Hour2)),
        (DurationUnit::Minutes, UnitStyle::Plain) => parts.push(Date(DatePart::Minute)),
        (DurationUnit::Minutes, _) => parts.push(Date(DatePart::Minute2)),
        (DurationUnit::Seconds, UnitStyle::Plain) => parts.push(Date(DatePart::Second)),
        (DurationUnit::Seconds, UnitStyle::Padded) => parts.push(Date(DatePart::Second2)),
        (DurationUnit::Seconds, UnitStyle::PaddedCentis) => {
            parts.push(Date(DatePart::Second2));
            parts.push(Date(DatePart::SubSecond(2)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AmPmStyle;
    use crate::settings::{
        DateSeparator, DateTimeMode, HourFormat, MinuteFormat, SecondFormat, SmartDuration,
    };

    fn duration(leading: DurationUnit) -> DateTimeSettings {
        DateTimeSettings {
            mode: DateTimeMode::Duration,
            use_date: false,
            leading_unit: leading,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_clock() {
        assert_eq!(compile(&DateTimeSettings::default()), "dd\"/\"mm\"/\"yyyy hh:mm");
    }

    #[test]
    fn test_smart_templates() {
        assert_eq!(
            smart_template(SmartPreset::AutoScale).to_string(),
            "[<0.0416667][Blue][m] \"mins\";[h] \"hours\""
        );
        assert_eq!(
            smart_template(SmartPreset::CompositeText).to_string(),
            "[h]\"h \"mm\"m \"ss\"s\""
        );
        assert_eq!(
            smart_template(SmartPreset::Timer).to_string(),
            "[<0.0416667][Blue]mm:ss;[h]:mm:ss"
        );
    }

    #[test]
    fn test_smart_preset_skips_locale() {
        let s = DateTimeSettings {
            mode: DateTimeMode::Duration,
            smart_duration: SmartDuration::Timer,
            locale_code: "[$-en-US]".to_string(),
            ..Default::default()
        };
        assert_eq!(compile(&s), "[<0.0416667][Blue]mm:ss;[h]:mm:ss");
    }

    #[test]
    fn test_leading_seconds_with_centis() {
        let s = DateTimeSettings {
            second_format: SecondFormat::SsCentis,
            second_suffix: "s".to_string(),
            ..duration(DurationUnit::Seconds)
        };
        assert_eq!(compile(&s), "[ss].00\"s\"");
    }

    #[test]
    fn test_leading_minutes() {
        let s = DateTimeSettings {
            hour_format: HourFormat::Hh,
            minute_format: MinuteFormat::M,
            minute_suffix: ":".to_string(),
            second_format: SecondFormat::Ss,
            ..duration(DurationUnit::Minutes)
        };
        assert_eq!(compile(&s), "[m]:ss");
    }

    #[test]
    fn test_clock_with_am_pm_and_seconds() {
        let s = DateTimeSettings {
            use_date: false,
            hour_format: HourFormat::H,
            minute_suffix: ":".to_string(),
            second_format: SecondFormat::Ss,
            use_12_hour: true,
            am_pm_format: AmPmStyle::ShortLower,
            ..Default::default()
        };
        assert_eq!(compile(&s), "h:mm:ss a/p");
    }

    #[test]
    fn test_date_orders_and_separators() {
        let s = DateTimeSettings {
            use_time: false,
            date_order: DateOrder::Ymd,
            date_separator: DateSeparator::Dash,
            ..Default::default()
        };
        assert_eq!(compile(&s), "yyyy\"-\"mm\"-\"dd");

        let s = DateTimeSettings {
            use_time: false,
            date_order: DateOrder::Mdy,
            date_separator: DateSeparator::Space,
            day_format: DayFormat::D,
            month_format: MonthFormat::Mmmm,
            ..Default::default()
        };
        assert_eq!(compile(&s), "mmmm d yyyy");

        let s = DateTimeSettings {
            use_time: false,
            date_separator: DateSeparator::Custom,
            custom_date_separator: String::new(),
            ..Default::default()
        };
        assert_eq!(compile(&s), "ddmmyyyy");
    }

    #[test]
    fn test_locale_prefix() {
        let s = DateTimeSettings {
            use_time: false,
            locale_code: "fr-FR".to_string(),
            ..Default::default()
        };
        assert_eq!(compile(&s), "[$-fr-FR]dd\"/\"mm\"/\"yyyy");
    }

    #[test]
    fn test_nothing_selected() {
        let s = DateTimeSettings {
            use_date: false,
            use_time: false,
            ..Default::default()
        };
        assert!(build(&s).is_empty());
        assert_eq!(compile(&s), "");
    }
}
