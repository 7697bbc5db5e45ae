use fmtcraft::{
    Condition, ConditionalRule, ConditionalRules, IssueKind, NamedColor, ParseError,
    SettingsError,
};

#[test]
fn test_settings_error_display() {
    let err = "Purple".parse::<NamedColor>().unwrap_err();
    assert_eq!(err, SettingsError::UnknownColor("Purple".to_string()));
    assert!(err.to_string().contains("'Purple'"));

    let err = "=>5".parse::<Condition>().unwrap_err();
    assert_eq!(err, SettingsError::UnknownOperator("=>".to_string()));

    let err = ">=ten".parse::<Condition>().unwrap_err();
    assert!(matches!(err, SettingsError::InvalidCondition { .. }));
    assert!(err.to_string().contains("'ten' is not a number"));
}

#[test]
fn test_rule_list_errors() {
    let mut rules = ConditionalRules::default();
    let err = rules.push_default().unwrap_err();
    assert_eq!(err, SettingsError::TooManyRules { max: 3 });
    assert!(err.to_string().contains('3'));

    let mut rules = ConditionalRules::new();
    rules.push_else(None, "0").unwrap();
    assert_eq!(
        rules.push(ConditionalRule::otherwise(Some(NamedColor::Red), "0.0")),
        Err(SettingsError::DuplicateElse)
    );
    assert_eq!(
        rules.remove(4),
        Err(SettingsError::RuleIndexOutOfRange { index: 4, len: 1 })
    );
}

#[test]
fn test_parse_error_position() {
    let err = ParseError::UnterminatedBracket { position: 7 };
    assert_eq!(err.position(), 7);
    assert!(err.to_string().contains("position 7"));
}

#[test]
fn test_malformed_issue_wraps_parse_error() {
    let kind = IssueKind::Malformed(ParseError::DanglingEscape { position: 3 });
    let msg = kind.to_string();
    assert!(msg.starts_with("Malformed format code"));
    assert!(msg.contains("position 3"));
}
