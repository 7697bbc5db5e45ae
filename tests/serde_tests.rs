//! JSON settings round trips through the presentation layer's field names.
#![cfg(feature = "serde")]

use fmtcraft::{
    compile_date_time_format, compile_number_format, AmPmStyle, ConditionOperator,
    ConditionalRule, ConditionalRules, DateTimeMode, DateTimeSettings, DurationUnit, NamedColor, NegativeMode,
    NumberFormatSettings, ScaleMode, SmartDuration, ZeroMode,
};

#[test]
fn test_number_settings_from_json() {
    let json = r#"{
        "global": {
            "decimals": 1,
            "separator": false,
            "scale": "K",
            "currencySymbol": "",
            "currencyPosition": "prefix",
            "integerPadding": 1,
            "percentage": false
        },
        "positive": { "color": "Green", "padding": false },
        "negative": { "color": null, "mode": "parenColor" },
        "zero": { "mode": "text", "customText": "nil" },
        "text": { "prefix": "", "suffix": "" }
    }"#;
    let s: NumberFormatSettings = serde_json::from_str(json).unwrap();
    assert_eq!(s.global.scale, ScaleMode::Thousands);
    assert_eq!(s.negative.mode, NegativeMode::ParenColor);
    assert_eq!(s.zero.mode, ZeroMode::CustomText);
    assert_eq!(
        compile_number_format(&s),
        "[Green]0.0, \"K\";[Red](0.0, \"K\");\"nil\";@"
    );
}

#[test]
fn test_partial_json_uses_defaults() {
    let s: NumberFormatSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(s, NumberFormatSettings::default());

    let s: DateTimeSettings = serde_json::from_str(r#"{"use12Hour": true}"#).unwrap();
    assert!(s.use_12_hour);
    assert_eq!(s.mode, DateTimeMode::Clock);
}

#[test]
fn test_date_time_settings_from_json() {
    let json = r#"{
        "mode": "duration",
        "useDate": false,
        "leadingDurationUnit": "minutes",
        "smartDuration": "none",
        "hourFormat": "none",
        "minuteFormat": "mm",
        "secondFormat": "ss.00",
        "minuteSuffix": ":",
        "amPmFormat": "a/p"
    }"#;
    let s: DateTimeSettings = serde_json::from_str(json).unwrap();
    assert_eq!(s.leading_unit, DurationUnit::Minutes);
    assert_eq!(s.am_pm_format, AmPmStyle::ShortLower);
    assert_eq!(compile_date_time_format(&s), "[m]:ss.00");

    let smart: DateTimeSettings =
        serde_json::from_str(r#"{"mode": "duration", "smartDuration": "composite_text"}"#)
            .unwrap();
    assert_eq!(smart.smart_duration, SmartDuration::CompositeText);
}

#[test]
fn test_conditional_rule_json() {
    let rule = ConditionalRule::when(
        ">=100".parse().unwrap(),
        Some(NamedColor::Green),
        "0.0",
    );
    let json = serde_json::to_value(&rule).unwrap();
    assert_eq!(json["condition"]["operator"], ">=");
    assert_eq!(json["condition"]["value"], 100.0);
    assert_eq!(json["color"], "Green");

    let back: ConditionalRule = serde_json::from_value(json).unwrap();
    assert_eq!(back.condition.map(|c| c.operator), Some(ConditionOperator::GreaterOrEqual));

    let otherwise: ConditionalRule = serde_json::from_str(r#"{"format": "0"}"#).unwrap();
    assert!(otherwise.is_else());
}

#[test]
fn test_conditional_rules_json_keeps_limits() {
    let rules = ConditionalRules::default();
    let json = serde_json::to_value(&rules).unwrap();
    assert_eq!(json.as_array().map(|a| a.len()), Some(3));
    let back: ConditionalRules = serde_json::from_value(json).unwrap();
    assert_eq!(back, rules);

    let five: Vec<ConditionalRule> = (0..5)
        .map(|n| ConditionalRule::when(format!(">{}", n).parse().unwrap(), None, "0"))
        .collect();
    let json = serde_json::to_string(&five).unwrap();
    let err = serde_json::from_str::<ConditionalRules>(&json).unwrap_err();
    assert!(err.to_string().contains("too many rules"));

    let err = serde_json::from_str::<ConditionalRules>(r#"[{"format": "0"}, {"format": "0.0"}]"#)
        .unwrap_err();
    assert!(err.to_string().contains("else rule is already present"));

    let json = r#"[
        {"format": "0"},
        {"condition": {"operator": ">", "value": 1.0}, "format": "0.0"}
    ]"#;
    let reordered: ConditionalRules = serde_json::from_str(json).unwrap();
    assert!(reordered.as_slice()[1].is_else());
}
