//! Error types for settings, format scanning and validation.

use thiserror::Error;

/// Errors raised while building or parsing settings values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("unknown color '{0}' (expected one of the 8 named colors)")]
    UnknownColor(String),

    #[error("unknown comparison operator '{0}'")]
    UnknownOperator(String),

    #[error("invalid condition '{text}': {reason}")]
    InvalidCondition { text: String, reason: String },

    #[error("too many rules (maximum {max} sections allowed)")]
    TooManyRules { max: usize },

    #[error("an else rule is already present")]
    DuplicateElse,

    #[error("rule index {index} out of range (have {len})")]
    RuleIndexOutOfRange { index: usize, len: usize },
}

/// Errors that can occur when scanning a compiled format code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unterminated quoted literal at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("unterminated bracket at position {position}")]
    UnterminatedBracket { position: usize },

    #[error("dangling escape character at position {position}")]
    DanglingEscape { position: usize },
}

impl ParseError {
    /// Byte offset where the problem starts.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnterminatedQuote { position }
            | ParseError::UnterminatedBracket { position }
            | ParseError::DanglingEscape { position } => *position,
        }
    }
}

/// The kind of an advisory validation issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IssueKind {
    #[error(
        "Invalid tag \"[{tag}]\". Only standard 8 colors (e.g. [Red]) or time units (e.g. [h]) are allowed."
    )]
    UnknownTag { tag: String },

    #[error("Character \"&\" detected. Custom formats cannot perform concatenation.")]
    Concatenation,

    #[error("Calculations (like *24) are not supported in Custom Formats.")]
    Arithmetic,

    #[error("Malformed format code: {0}")]
    Malformed(ParseError),
}
