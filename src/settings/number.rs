//! Settings for the 4-zone numeric format.

use crate::ast::NamedColor;

/// Largest number of decimal places the builder emits.
pub const MAX_DECIMALS: u8 = 10;

/// Divide-by-1000 scaling applied through trailing commas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleMode {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    None,
    /// One trailing comma, `K` suffix
    #[cfg_attr(feature = "serde", serde(rename = "K"))]
    Thousands,
    /// Two trailing commas, `M` suffix
    #[cfg_attr(feature = "serde", serde(rename = "M"))]
    Millions,
}

impl ScaleMode {
    /// Divisor applied to the displayed value.
    pub fn divisor(&self) -> f64 {
        match self {
            ScaleMode::None => 1.0,
            ScaleMode::Thousands => 1_000.0,
            ScaleMode::Millions => 1_000_000.0,
        }
    }

    /// Letter appended after the scaled number, if any.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            ScaleMode::None => None,
            ScaleMode::Thousands => Some("K"),
            ScaleMode::Millions => Some("M"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurrencyPosition {
    #[default]
    Prefix,
    Suffix,
}

/// Settings shared by every numeric zone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GlobalNumberSettings {
    /// Decimal places, 0 to [`MAX_DECIMALS`]
    pub decimals: u8,
    /// Thousands grouping separator
    pub separator: bool,
    pub scale: ScaleMode,
    /// Currency symbol; empty for none
    pub currency_symbol: String,
    pub currency_position: CurrencyPosition,
    /// Minimum integer digits (leading zeros), at least 1
    pub integer_padding: u8,
    /// Multiply by 100 and show `%`
    pub percentage: bool,
}

impl GlobalNumberSettings {
    /// Decimal places clamped to the supported range.
    pub fn effective_decimals(&self) -> usize {
        self.decimals.min(MAX_DECIMALS) as usize
    }

    /// Integer padding, never below one digit.
    pub fn effective_padding(&self) -> usize {
        self.integer_padding.max(1) as usize
    }

    /// Returns true if any setting is outside its documented range.
    pub fn is_clamped(&self) -> bool {
        self.decimals > MAX_DECIMALS || self.integer_padding == 0
    }
}

impl Default for GlobalNumberSettings {
    fn default() -> Self {
        GlobalNumberSettings {
            decimals: 2,
            separator: true,
            scale: ScaleMode::None,
            currency_symbol: "$".to_string(),
            currency_position: CurrencyPosition::Prefix,
            integer_padding: 1,
            percentage: false,
        }
    }
}

/// Positive zone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PositiveZone {
    pub color: Option<NamedColor>,
    /// Reserve the width of `)` so positives align with parenthesized negatives
    pub padding: bool,
}

impl Default for PositiveZone {
    fn default() -> Self {
        PositiveZone {
            color: None,
            padding: true,
        }
    }
}

/// How negative values are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum NegativeMode {
    /// `-1.23`
    Minus,
    /// `1.23` in color (Red unless set)
    Color,
    /// `(1.23)`
    #[default]
    Paren,
    /// `(1.23)` in color (Red unless set)
    ParenColor,
}

impl NegativeMode {
    /// Modes that fall back to Red when no color is chosen.
    pub fn implies_color(&self) -> bool {
        matches!(self, NegativeMode::Color | NegativeMode::ParenColor)
    }

    pub fn is_parenthesized(&self) -> bool {
        matches!(self, NegativeMode::Paren | NegativeMode::ParenColor)
    }
}

/// Negative zone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NegativeZone {
    pub color: Option<NamedColor>,
    pub mode: NegativeMode,
}

impl NegativeZone {
    /// Switch the presentation mode; color modes pick Red when no color is set.
    pub fn with_mode(mut self, mode: NegativeMode) -> Self {
        self.mode = mode;
        if mode.implies_color() && self.color.is_none() {
            self.color = Some(NamedColor::Red);
        }
        self
    }

    /// The color tag actually emitted for this zone.
    pub fn effective_color(&self) -> Option<NamedColor> {
        if self.mode.implies_color() {
            Some(self.color.unwrap_or(NamedColor::Red))
        } else {
            self.color
        }
    }
}

impl Default for NegativeZone {
    fn default() -> Self {
        NegativeZone {
            color: Some(NamedColor::Red),
            mode: NegativeMode::Paren,
        }
    }
}

/// How zero is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZeroMode {
    /// Formatted like a positive number, without grouping
    Number,
    /// A single dash
    #[default]
    Dash,
    /// Nothing at all
    Hide,
    /// The zone's custom text
    #[cfg_attr(feature = "serde", serde(rename = "text"))]
    CustomText,
}

/// Zero zone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ZeroZone {
    pub mode: ZeroMode,
    /// Only used when `mode` is [`ZeroMode::CustomText`]
    pub custom_text: String,
}

impl Default for ZeroZone {
    fn default() -> Self {
        ZeroZone {
            mode: ZeroMode::Dash,
            custom_text: "Free".to_string(),
        }
    }
}

/// Text zone: literals around the `@` placeholder.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextZone {
    pub prefix: String,
    pub suffix: String,
}

/// Complete numeric format settings.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberFormatSettings {
    pub global: GlobalNumberSettings,
    pub positive: PositiveZone,
    pub negative: NegativeZone,
    pub zero: ZeroZone,
    pub text: TextZone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        let global = GlobalNumberSettings {
            decimals: 42,
            integer_padding: 0,
            ..Default::default()
        };
        assert!(global.is_clamped());
        assert_eq!(global.effective_decimals(), 10);
        assert_eq!(global.effective_padding(), 1);
        assert!(!GlobalNumberSettings::default().is_clamped());
    }

    #[test]
    fn test_negative_with_mode_assigns_red() {
        let zone = NegativeZone {
            color: None,
            mode: NegativeMode::Minus,
        };
        let zone = zone.with_mode(NegativeMode::ParenColor);
        assert_eq!(zone.color, Some(NamedColor::Red));

        let zone = NegativeZone {
            color: Some(NamedColor::Blue),
            mode: NegativeMode::Minus,
        }
        .with_mode(NegativeMode::Color);
        assert_eq!(zone.color, Some(NamedColor::Blue));
    }

    #[test]
    fn test_effective_color() {
        let zone = NegativeZone {
            color: None,
            mode: NegativeMode::Color,
        };
        assert_eq!(zone.effective_color(), Some(NamedColor::Red));
        let zone = NegativeZone {
            color: None,
            mode: NegativeMode::Paren,
        };
        assert_eq!(zone.effective_color(), None);
    }
}
