//! Typed vocabulary of the format-code grammar.
//!
//! Compilers build these values and render them with `Display`; the preview
//! interpreter walks the same values instead of re-reading the rendered
//! string. In particular the month and minute tokens share the letter `m`
//! in the grammar but are distinct variants of [`DatePart`] here.

use std::fmt;
use std::str::FromStr;

use crate::error::SettingsError;
use crate::literal;

/// Named colors supported in format codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedColor {
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

impl NamedColor {
    /// All eight colors in the order Excel documents them.
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Blue,
        NamedColor::Cyan,
        NamedColor::Green,
        NamedColor::Magenta,
        NamedColor::Red,
        NamedColor::White,
        NamedColor::Yellow,
    ];

    /// The canonical spelling used inside a color tag.
    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Black => "Black",
            NamedColor::Blue => "Blue",
            NamedColor::Cyan => "Cyan",
            NamedColor::Green => "Green",
            NamedColor::Magenta => "Magenta",
            NamedColor::Red => "Red",
            NamedColor::White => "White",
            NamedColor::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(NamedColor::Black),
            "blue" => Ok(NamedColor::Blue),
            "cyan" => Ok(NamedColor::Cyan),
            "green" => Ok(NamedColor::Green),
            "magenta" => Ok(NamedColor::Magenta),
            "red" => Ok(NamedColor::Red),
            "white" => Ok(NamedColor::White),
            "yellow" => Ok(NamedColor::Yellow),
            _ => Err(SettingsError::UnknownColor(s.to_string())),
        }
    }
}

/// Comparison operator of a conditional section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionOperator {
    #[cfg_attr(feature = "serde", serde(rename = ">"))]
    GreaterThan,
    #[cfg_attr(feature = "serde", serde(rename = ">="))]
    GreaterOrEqual,
    #[cfg_attr(feature = "serde", serde(rename = "<"))]
    LessThan,
    #[cfg_attr(feature = "serde", serde(rename = "<="))]
    LessOrEqual,
    #[cfg_attr(feature = "serde", serde(rename = "="))]
    Equal,
    #[cfg_attr(feature = "serde", serde(rename = "<>"))]
    NotEqual,
}

impl ConditionOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionOperator::GreaterThan => ">",
            ConditionOperator::GreaterOrEqual => ">=",
            ConditionOperator::LessThan => "<",
            ConditionOperator::LessOrEqual => "<=",
            ConditionOperator::Equal => "=",
            ConditionOperator::NotEqual => "<>",
        }
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionOperator {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(ConditionOperator::GreaterThan),
            ">=" => Ok(ConditionOperator::GreaterOrEqual),
            "<" => Ok(ConditionOperator::LessThan),
            "<=" => Ok(ConditionOperator::LessOrEqual),
            "=" => Ok(ConditionOperator::Equal),
            "<>" => Ok(ConditionOperator::NotEqual),
            _ => Err(SettingsError::UnknownOperator(s.to_string())),
        }
    }
}

/// Conditional expression for section selection, e.g. `>=100`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub operator: ConditionOperator,
    pub value: f64,
}

impl Condition {
    pub fn new(operator: ConditionOperator, value: f64) -> Self {
        Condition { operator, value }
    }

    /// Evaluate this condition against a value.
    pub fn evaluate(&self, value: f64) -> bool {
        let n = self.value;
        match self.operator {
            ConditionOperator::GreaterThan => value > n,
            ConditionOperator::LessThan => value < n,
            ConditionOperator::Equal => (value - n).abs() < f64::EPSILON,
            ConditionOperator::GreaterOrEqual => value >= n,
            ConditionOperator::LessOrEqual => value <= n,
            ConditionOperator::NotEqual => (value - n).abs() >= f64::EPSILON,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.value)
    }
}

impl FromStr for Condition {
    type Err = SettingsError;

    /// Parses the content of a condition tag, e.g. `>=100` or `<>-2.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let op_len = text
            .find(|c: char| !matches!(c, '<' | '>' | '='))
            .unwrap_or(text.len());
        if op_len == 0 {
            return Err(SettingsError::InvalidCondition {
                text: s.to_string(),
                reason: "missing comparison operator".to_string(),
            });
        }
        let operator = text[..op_len].parse::<ConditionOperator>()?;
        let number = text[op_len..].trim();
        let value = number
            .parse::<f64>()
            .map_err(|_| SettingsError::InvalidCondition {
                text: s.to_string(),
                reason: format!("'{}' is not a number", number),
            })?;
        Ok(Condition { operator, value })
    }
}

/// Calendar and clock tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    /// `yy` - Two-digit year
    Year2,
    /// `yyyy` - Four-digit year
    Year4,
    /// `m` - Month as number without leading zero (1-12)
    Month,
    /// `mm` - Month as number with leading zero (01-12)
    Month2,
    /// `mmm` - Month as abbreviated name (Jan, Feb, etc.)
    MonthAbbr,
    /// `mmmm` - Month as full name (January, February, etc.)
    MonthFull,
    /// `mmmmm` - Month as single letter (J, F, M, etc.)
    MonthLetter,
    /// `d` - Day of month without leading zero (1-31)
    Day,
    /// `dd` - Day of month with leading zero (01-31)
    Day2,
    /// `ddd` - Day of week as abbreviated name (Sun, Mon, etc.)
    DayAbbr,
    /// `dddd` - Day of week as full name (Sunday, Monday, etc.)
    DayFull,
    /// `h` - Hour without leading zero
    Hour,
    /// `hh` - Hour with leading zero
    Hour2,
    /// `m` - Minute without leading zero (0-59)
    Minute,
    /// `mm` - Minute with leading zero (00-59)
    Minute2,
    /// `s` - Second without leading zero (0-59)
    Second,
    /// `ss` - Second with leading zero (00-59)
    Second2,
    /// `.0`, `.00`, etc. - Fractional seconds with the given decimal places
    SubSecond(u8),
}

impl DatePart {
    /// The token text as it appears in a format code.
    pub fn code(&self) -> String {
        match self {
            DatePart::Year2 => "yy".to_string(),
            DatePart::Year4 => "yyyy".to_string(),
            DatePart::Month | DatePart::Minute => "m".to_string(),
            DatePart::Month2 | DatePart::Minute2 => "mm".to_string(),
            DatePart::MonthAbbr => "mmm".to_string(),
            DatePart::MonthFull => "mmmm".to_string(),
            DatePart::MonthLetter => "mmmmm".to_string(),
            DatePart::Day => "d".to_string(),
            DatePart::Day2 => "dd".to_string(),
            DatePart::DayAbbr => "ddd".to_string(),
            DatePart::DayFull => "dddd".to_string(),
            DatePart::Hour => "h".to_string(),
            DatePart::Hour2 => "hh".to_string(),
            DatePart::Second => "s".to_string(),
            DatePart::Second2 => "ss".to_string(),
            DatePart::SubSecond(places) => format!(".{}", "0".repeat(*places as usize)),
        }
    }

    /// Returns true for year, month and day tokens.
    pub fn is_calendar(&self) -> bool {
        matches!(
            self,
            DatePart::Year2
                | DatePart::Year4
                | DatePart::Month
                | DatePart::Month2
                | DatePart::MonthAbbr
                | DatePart::MonthFull
                | DatePart::MonthLetter
                | DatePart::Day
                | DatePart::Day2
                | DatePart::DayAbbr
                | DatePart::DayFull
        )
    }
}

/// Elapsed time token (accumulating unit in bracket notation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedPart {
    /// `[h]` - Total elapsed hours
    Hours,
    /// `[m]` - Total elapsed minutes
    Minutes,
    /// `[s]` - Total elapsed seconds
    Seconds,
    /// `[ss]` - Total elapsed seconds, zero-padded to 2 digits
    Seconds2,
}

impl ElapsedPart {
    pub fn code(&self) -> &'static str {
        match self {
            ElapsedPart::Hours => "[h]",
            ElapsedPart::Minutes => "[m]",
            ElapsedPart::Seconds => "[s]",
            ElapsedPart::Seconds2 => "[ss]",
        }
    }
}

/// AM/PM format style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmPmStyle {
    /// `AM/PM` - Uppercase AM or PM
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "AM/PM"))]
    Upper,
    /// `am/pm` - Lowercase am or pm
    #[cfg_attr(feature = "serde", serde(rename = "am/pm"))]
    Lower,
    /// `A/P` - Uppercase single letter A or P
    #[cfg_attr(feature = "serde", serde(rename = "A/P"))]
    ShortUpper,
    /// `a/p` - Lowercase single letter a or p
    #[cfg_attr(feature = "serde", serde(rename = "a/p"))]
    ShortLower,
}

impl AmPmStyle {
    pub fn code(&self) -> &'static str {
        match self {
            AmPmStyle::Upper => "AM/PM",
            AmPmStyle::Lower => "am/pm",
            AmPmStyle::ShortUpper => "A/P",
            AmPmStyle::ShortLower => "a/p",
        }
    }
}

/// A single part of a date/time section.
#[derive(Debug, Clone, PartialEq)]
pub enum DateTimePart {
    /// `[$-...]` - Locale tag; holds the content between the brackets
    Locale(String),
    /// Calendar or clock component
    Date(DatePart),
    /// Accumulating duration component
    Elapsed(ElapsedPart),
    /// AM/PM indicator
    AmPm(AmPmStyle),
    /// Literal text rendered inside quotes
    Literal(String),
    /// Literal text the grammar accepts without quoting (`:`, spaces)
    Separator(String),
}

impl fmt::Display for DateTimePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimePart::Locale(code) => write!(f, "[{}]", code),
            DateTimePart::Date(part) => f.write_str(&part.code()),
            DateTimePart::Elapsed(part) => f.write_str(part.code()),
            DateTimePart::AmPm(style) => f.write_str(style.code()),
            DateTimePart::Literal(text) => f.write_str(&literal::quote(text)),
            DateTimePart::Separator(text) => f.write_str(text),
        }
    }
}

/// One `;`-separated section of a date/time format.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DateTimeSection {
    /// Optional condition for this section (e.g., [<0.0416667])
    pub condition: Option<Condition>,
    /// Optional color for this section (e.g., [Blue])
    pub color: Option<NamedColor>,
    /// The parts that make up this section
    pub parts: Vec<DateTimePart>,
}

impl DateTimeSection {
    pub fn new(parts: Vec<DateTimePart>) -> Self {
        DateTimeSection {
            condition: None,
            color: None,
            parts,
        }
    }

    /// Returns true if this section shows an AM/PM indicator.
    pub fn has_ampm(&self) -> bool {
        self.parts.iter().any(|p| matches!(p, DateTimePart::AmPm(_)))
    }

    /// The accumulating unit of this section, if any.
    pub fn elapsed_unit(&self) -> Option<ElapsedPart> {
        self.parts.iter().find_map(|p| match p {
            DateTimePart::Elapsed(e) => Some(*e),
            _ => None,
        })
    }
}

impl fmt::Display for DateTimeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(condition) = &self.condition {
            f.write_str(&literal::condition_tag(condition))?;
        }
        f.write_str(&literal::color_tag(self.color))?;
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// A compiled date/time format in typed form.
///
/// `to_string()` yields the format code handed to the spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeFormat {
    sections: Vec<DateTimeSection>,
}

impl DateTimeFormat {
    pub fn from_sections(sections: Vec<DateTimeSection>) -> Self {
        DateTimeFormat { sections }
    }

    /// Get the sections of this format.
    pub fn sections(&self) -> &[DateTimeSection] {
        &self.sections
    }

    /// Iterate over every part of every section.
    pub fn parts(&self) -> impl Iterator<Item = &DateTimePart> {
        self.sections.iter().flat_map(|s| s.parts.iter())
    }

    /// Returns true if any section carries calendar (year/month/day) tokens.
    pub fn has_calendar_parts(&self) -> bool {
        self.parts()
            .any(|p| matches!(p, DateTimePart::Date(d) if d.is_calendar()))
    }

    /// Returns true if any section carries an accumulating unit.
    pub fn is_elapsed(&self) -> bool {
        self.parts().any(|p| matches!(p, DateTimePart::Elapsed(_)))
    }

    /// Returns true if the format renders nothing at all.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.parts.is_empty())
    }
}

impl fmt::Display for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_str_is_case_insensitive() {
        assert_eq!("red".parse::<NamedColor>(), Ok(NamedColor::Red));
        assert_eq!("MAGENTA".parse::<NamedColor>(), Ok(NamedColor::Magenta));
        assert!("Purple".parse::<NamedColor>().is_err());
    }

    #[test]
    fn test_condition_parse_and_display() {
        let c: Condition = ">=100".parse().unwrap();
        assert_eq!(c, Condition::new(ConditionOperator::GreaterOrEqual, 100.0));
        assert_eq!(c.to_string(), ">=100");

        let c: Condition = "<>-2.5".parse().unwrap();
        assert_eq!(c.operator, ConditionOperator::NotEqual);
        assert_eq!(c.value, -2.5);

        assert!("100".parse::<Condition>().is_err());
        assert!(">abc".parse::<Condition>().is_err());
        assert!("=>5".parse::<Condition>().is_err());
    }

    #[test]
    fn test_condition_evaluate() {
        let c = Condition::new(ConditionOperator::LessThan, 50.0);
        assert!(c.evaluate(49.9));
        assert!(!c.evaluate(50.0));
        let c = Condition::new(ConditionOperator::NotEqual, 0.0);
        assert!(c.evaluate(1.0));
        assert!(!c.evaluate(0.0));
    }

    #[test]
    fn test_month_and_minute_share_letters_but_not_kind() {
        assert_eq!(DatePart::Month2.code(), DatePart::Minute2.code());
        assert!(DatePart::Month2.is_calendar());
        assert!(!DatePart::Minute2.is_calendar());
    }

    #[test]
    fn test_section_display() {
        let section = DateTimeSection {
            condition: Some(Condition::new(ConditionOperator::LessThan, 0.0416667)),
            color: Some(NamedColor::Blue),
            parts: vec![
                DateTimePart::Date(DatePart::Minute2),
                DateTimePart::Separator(":".to_string()),
                DateTimePart::Date(DatePart::Second2),
            ],
        };
        assert_eq!(section.to_string(), "[<0.0416667][Blue]mm:ss");
    }
}
