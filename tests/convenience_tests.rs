use chrono::NaiveDate;
use fmtcraft::{
    preview_date_time, preview_number, preview_number_zones, preview_text, ConditionalRules,
    DateTimeSample, DateTimeSettings, NamedColor, NumberFormatSettings, NumberSamples,
};

#[test]
fn test_preview_number_convenience() {
    let s = NumberFormatSettings::default();
    assert_eq!(preview_number(&s, 1234.56), "$ 1,234.56 ");
    assert_eq!(preview_number(&s, -0.5), "($ 0.50)");
    assert_eq!(preview_text(&s, "abc"), "abc");
}

#[test]
fn test_preview_number_zones_convenience() {
    let zones = preview_number_zones(&NumberFormatSettings::default(), &NumberSamples::default());
    assert_eq!(zones.positive.text, "$ 1,234.56 ");
    assert_eq!(zones.positive.color, None);
    assert_eq!(zones.negative.text, "($ 1,234.56)");
    assert_eq!(zones.negative.color, Some(NamedColor::Red));
    assert_eq!(zones.zero.text, "-");
    assert_eq!(zones.text.text, "Input");
}

#[test]
fn test_preview_date_time_convenience() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 29)
        .and_then(|d| d.and_hms_opt(8, 5, 9))
        .unwrap();
    let s = DateTimeSettings::default();
    assert_eq!(
        preview_date_time(&s, &DateTimeSample::with_date(date)),
        "29/02/2024 08:05"
    );
}

#[test]
fn test_rule_selection_for_highlighting() {
    let rules = ConditionalRules::default();
    let active = rules.select(100.0).unwrap();
    assert_eq!(active.color, Some(NamedColor::Green));
    assert!(rules.select(60.0).unwrap().is_else());
}
