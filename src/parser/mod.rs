//! Scanning of compiled format codes.
//!
//! The compilers never parse their own output; this module exists so that
//! codes can be checked after the fact (by the validator, or by callers that
//! receive a code from elsewhere).

pub mod lexer;
pub mod tokens;

use crate::ast::{Condition, NamedColor};
use crate::error::ParseError;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Bracket contents accepted as elapsed/time units (compared lowercase).
pub const TIME_UNIT_TAGS: [&str; 7] = ["h", "hh", "m", "mm", "s", "ss", "d"];

/// Classification of the content of a `[...]` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum BracketTag {
    /// One of the eight named colors, any case
    Color(NamedColor),
    /// Elapsed time unit such as `h` or `ss`
    TimeUnit(String),
    /// `$-...` locale / currency tag
    Locale(String),
    /// Section condition such as `>=100`
    Condition(Condition),
    Unknown(String),
}

impl BracketTag {
    pub fn is_known(&self) -> bool {
        !matches!(self, BracketTag::Unknown(_))
    }
}

/// Classify the content found between `[` and `]`.
pub fn classify_tag(content: &str) -> BracketTag {
    if let Ok(color) = content.parse::<NamedColor>() {
        return BracketTag::Color(color);
    }
    let lower = content.to_lowercase();
    if TIME_UNIT_TAGS.contains(&lower.as_str()) {
        return BracketTag::TimeUnit(lower);
    }
    if content.starts_with('$') {
        return BracketTag::Locale(content.to_string());
    }
    if content.starts_with(['<', '>', '=']) {
        if let Ok(condition) = content.parse::<Condition>() {
            return BracketTag::Condition(condition);
        }
    }
    BracketTag::Unknown(content.to_string())
}

/// Tokenize a format code.
pub fn tokenize(code: &str) -> Result<Vec<SpannedToken>, ParseError> {
    Lexer::new(code).tokenize()
}

/// Split a format code into its `;`-separated sections.
///
/// Semicolons inside quoted literals, escapes and brackets do not split.
pub fn split_sections(code: &str) -> Result<Vec<&str>, ParseError> {
    let mut sections = Vec::new();
    let mut section_start = 0;
    for token in tokenize(code)? {
        match token.token {
            Token::SectionSep => {
                sections.push(&code[section_start..token.start]);
                section_start = token.end;
            }
            Token::Eof => sections.push(&code[section_start..]),
            _ => {}
        }
    }
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ConditionOperator;

    #[test]
    fn test_classify_tag() {
        assert_eq!(classify_tag("Red"), BracketTag::Color(NamedColor::Red));
        assert_eq!(classify_tag("bLuE"), BracketTag::Color(NamedColor::Blue));
        assert_eq!(classify_tag("H"), BracketTag::TimeUnit("h".to_string()));
        assert_eq!(classify_tag("ss"), BracketTag::TimeUnit("ss".to_string()));
        assert_eq!(
            classify_tag("$-en-US"),
            BracketTag::Locale("$-en-US".to_string())
        );
        assert_eq!(
            classify_tag("<0.0416667"),
            BracketTag::Condition(Condition::new(ConditionOperator::LessThan, 0.0416667))
        );
        assert_eq!(classify_tag("Purple"), BracketTag::Unknown("Purple".to_string()));
        assert_eq!(classify_tag(">abc"), BracketTag::Unknown(">abc".to_string()));
        assert!(!classify_tag("").is_known());
    }

    #[test]
    fn test_split_sections() {
        assert_eq!(
            split_sections("0;\"a;b\";[Red]0;@").unwrap(),
            vec!["0", "\"a;b\"", "[Red]0", "@"]
        );
        assert_eq!(split_sections("").unwrap(), vec![""]);
        assert_eq!(split_sections("0;;").unwrap(), vec!["0", "", ""]);
        assert!(split_sections("\"open;").is_err());
    }
}
