//! Advisory checks over a compiled format code.
//!
//! Validation never alters or rejects a code; it only reports constructs the
//! spreadsheet's custom-format dialog does not support.

use std::fmt;
use std::ops::Range;

use crate::error::IssueKind;
use crate::parser::classify_tag;
use crate::parser::lexer::Lexer;
use crate::parser::tokens::{SpannedToken, Token};

/// A single advisory finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    /// Byte range of the offending text in the checked code
    pub span: Option<Range<usize>>,
}

impl ValidationIssue {
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Check a format code and return every issue found, in source order per kind.
///
/// Bracket tags must be a named color, a time unit, a `$` locale tag or a
/// section condition. Outside quoted literals and escapes, `&` and a digit
/// followed by `*24` are reported once each. A code that does not scan
/// cleanly gets a `Malformed` issue per scan error, and the checks still run
/// over everything that did scan.
pub fn validate(code: &str) -> Vec<ValidationIssue> {
    let (tokens, errors) = Lexer::new(code).tokenize_recovering();

    let mut issues: Vec<ValidationIssue> = errors
        .into_iter()
        .map(|err| {
            let position = err.position();
            ValidationIssue {
                kind: IssueKind::Malformed(err),
                span: Some(position..code.len()),
            }
        })
        .collect();

    issues.extend(tokens.iter().filter_map(|t| match &t.token {
        Token::Bracket(content) if !classify_tag(content).is_known() => Some(ValidationIssue {
            kind: IssueKind::UnknownTag {
                tag: content.clone(),
            },
            span: Some(t.span()),
        }),
        _ => None,
    }));

    if let Some(amp) = tokens.iter().find(|t| t.token == Token::Literal('&')) {
        issues.push(ValidationIssue {
            kind: IssueKind::Concatenation,
            span: Some(amp.span()),
        });
    }

    if let Some(span) = find_times_24(&tokens) {
        issues.push(ValidationIssue {
            kind: IssueKind::Arithmetic,
            span: Some(span),
        });
    }

    if !issues.is_empty() {
        log::debug!("format code {:?}: {} validation issue(s)", code, issues.len());
    }
    issues
}

/// Find a bare digit followed by `*24`.
fn find_times_24(tokens: &[SpannedToken]) -> Option<Range<usize>> {
    tokens.windows(4).find_map(|w| match (&w[0].token, &w[1].token, &w[2].token, &w[3].token) {
        (Token::Literal(d), Token::Literal('*'), Token::Literal('2'), Token::Literal('4'))
            if d.is_ascii_digit() =>
        {
            Some(w[0].start..w[3].end)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_clean_codes() {
        assert!(validate("\"$\" #,##0.00_);[Red](\"$\" #,##0.00);\"-\";@").is_empty());
        assert!(validate("[<0.0416667][Blue][m] \"mins\";[h] \"hours\"").is_empty());
        assert!(validate("[$-en-US]dd\"/\"mm\"/\"yyyy hh:mm").is_empty());
        assert!(validate("[ss].00\"s\"").is_empty());
        assert!(validate("").is_empty());
    }

    #[test]
    fn test_unknown_tag() {
        let issues = validate("[Purple]0.00");
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].kind,
            IssueKind::UnknownTag {
                tag: "Purple".to_string()
            }
        );
        assert_eq!(issues[0].span, Some(0..8));
        assert!(issues[0].message().contains("[Purple]"));
    }

    #[test]
    fn test_colors_case_insensitive() {
        assert!(validate("[red]0;[GREEN]0").is_empty());
    }

    #[test]
    fn test_concatenation_outside_quotes_only() {
        assert!(validate("\"A & B\" 0").is_empty());
        assert!(validate("\\& 0").is_empty());
        let issues = validate("0 & 0 &");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Concatenation);
        assert_eq!(issues[0].span, Some(2..3));
    }

    #[test]
    fn test_arithmetic() {
        let issues = validate("0*24");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Arithmetic);
        assert_eq!(issues[0].span, Some(0..4));
        assert!(validate("\"0*24\"").is_empty());
        assert!(validate("*24").is_empty());
    }

    #[test]
    fn test_multiple_issues_in_order() {
        let issues = validate("[Foo]0 & [Bar]1*24");
        let kinds: Vec<_> = issues.iter().map(|i| i.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::UnknownTag {
                    tag: "Foo".to_string()
                },
                IssueKind::UnknownTag {
                    tag: "Bar".to_string()
                },
                IssueKind::Concatenation,
                IssueKind::Arithmetic,
            ]
        );
    }

    #[test]
    fn test_malformed() {
        let issues = validate("0;\"open");
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].kind,
            IssueKind::Malformed(ParseError::UnterminatedQuote { position: 2 })
        );
        assert_eq!(issues[0].span, Some(2..7));
    }

    #[test]
    fn test_malformed_code_still_reports_tags_and_operators() {
        let issues = validate("[Purple]0 & \"open");
        let kinds: Vec<_> = issues.iter().map(|i| i.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::Malformed(ParseError::UnterminatedQuote { position: 12 }),
                IssueKind::UnknownTag {
                    tag: "Purple".to_string()
                },
                IssueKind::Concatenation,
            ]
        );
        assert_eq!(issues[2].span, Some(10..11));
    }

    #[test]
    fn test_unclosed_bracket_scans_as_literal() {
        let issues = validate("[Foo]0 [h & 1*24");
        let kinds: Vec<_> = issues.iter().map(|i| i.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::Malformed(ParseError::UnterminatedBracket { position: 7 }),
                IssueKind::UnknownTag {
                    tag: "Foo".to_string()
                },
                IssueKind::Concatenation,
                IssueKind::Arithmetic,
            ]
        );
    }
}
