//! Token types for the format code scanner.

/// A token in a format code string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Any character outside quotes, brackets and escapes
    Literal(char),
    /// `\x`
    EscapedChar(char),
    /// `"text"`, with `\"` already unescaped
    QuotedString(String),
    /// `[content]`; holds the content between the brackets
    Bracket(String),
    /// `;`
    SectionSep,

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

impl SpannedToken {
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
