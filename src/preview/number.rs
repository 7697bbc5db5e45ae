//! Numeric zone preview.
//!
//! The preview is recomputed from the settings rather than by interpreting
//! the compiled code, mirroring what each zone would display.

use crate::ast::NamedColor;
use crate::locale::Locale;
use crate::settings::{
    CurrencyPosition, GlobalNumberSettings, NegativeMode, NumberFormatSettings, ScaleMode,
    ZeroMode,
};
use crate::value::NumberSamples;

/// Rendered text of one zone together with the color it would display in.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedZone {
    pub text: String,
    pub color: Option<NamedColor>,
}

/// All four zones rendered for a set of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberPreview {
    pub positive: RenderedZone,
    pub negative: RenderedZone,
    pub zero: RenderedZone,
    pub text: RenderedZone,
}

impl NumberPreview {
    pub fn render(settings: &NumberFormatSettings, samples: &NumberSamples, locale: &Locale) -> Self {
        NumberPreview {
            positive: render_value(settings, samples.positive, locale),
            negative: render_value(settings, samples.negative, locale),
            zero: render_value(settings, samples.zero, locale),
            text: RenderedZone {
                text: render_text(settings, &samples.text),
                color: None,
            },
        }
    }
}

/// Render a numeric sample through the zone its sign selects.
pub fn render_value(settings: &NumberFormatSettings, value: f64, locale: &Locale) -> RenderedZone {
    if value.is_nan() {
        return RenderedZone {
            text: "NaN".to_string(),
            color: None,
        };
    }

    let global = &settings.global;

    if value == 0.0 {
        let text = match settings.zero.mode {
            ZeroMode::CustomText => settings.zero.custom_text.clone(),
            ZeroMode::Dash => "-".to_string(),
            ZeroMode::Hide => String::new(),
            ZeroMode::Number => with_currency(
                magnitude(global, 0.0, false, ScaleMode::None, locale),
                global,
            ),
        };
        return RenderedZone { text, color: None };
    }

    let body = with_currency(
        magnitude(global, value.abs(), global.separator, global.scale, locale),
        global,
    );

    if value < 0.0 {
        let negative = &settings.negative;
        let text = match negative.mode {
            NegativeMode::Minus => format!("-{}", body),
            NegativeMode::Color => body,
            NegativeMode::Paren | NegativeMode::ParenColor => format!("({})", body),
        };
        return RenderedZone {
            text,
            color: negative.effective_color(),
        };
    }

    let positive = &settings.positive;
    let mut text = body;
    if positive.padding {
        // stands in for the width of `_)`
        text.push(' ');
    }
    RenderedZone {
        text,
        color: positive.color,
    }
}

/// Text zone preview: prefix + input + suffix.
pub fn render_text(settings: &NumberFormatSettings, text: &str) -> String {
    format!("{}{}{}", settings.text.prefix, text, settings.text.suffix)
}

/// Format a non-negative magnitude: scale, percentage, fixed decimals,
/// grouping and minimum integer digits, followed by the suffixes.
fn magnitude(
    global: &GlobalNumberSettings,
    value: f64,
    grouping: bool,
    scale: ScaleMode,
    locale: &Locale,
) -> String {
    if value.is_infinite() {
        return "Infinity".to_string();
    }

    let mut v = value / scale.divisor();
    if global.percentage {
        v *= 100.0;
    }

    let decimals = global.effective_decimals();
    let multiplier = 10_f64.powi(decimals as i32);
    // f64::round is half away from zero
    let scaled = (v * multiplier).round();
    let integer_part = (scaled / multiplier).trunc();
    let fraction_part = scaled - integer_part * multiplier;

    let mut out = format_integer(
        &format!("{:.0}", integer_part),
        global.effective_padding(),
        grouping,
        locale.thousands_separator,
    );
    if decimals > 0 {
        out.push(locale.decimal_separator);
        out.push_str(&format!(
            "{:0>width$}",
            fraction_part.max(0.0) as u64,
            width = decimals
        ));
    }

    if let Some(letter) = scale.suffix() {
        out.push(' ');
        out.push_str(letter);
    }
    if global.percentage {
        out.push('%');
    }
    out
}

/// Group a string of integer digits with zero padding and an optional
/// thousands separator.
fn format_integer(digits: &str, min_digits: usize, grouping: bool, separator: char) -> String {
    let digits: Vec<char> = format!("{:0>width$}", digits, width = min_digits)
        .chars()
        .collect();

    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        let from_right = digits.len() - i;
        if grouping && i > 0 && from_right % 3 == 0 {
            result.push(separator);
        }
        result.push(*c);
    }
    result
}

fn with_currency(body: String, global: &GlobalNumberSettings) -> String {
    if global.currency_symbol.is_empty() {
        return body;
    }
    match global.currency_position {
        CurrencyPosition::Prefix => format!("{} {}", global.currency_symbol, body),
        CurrencyPosition::Suffix => format!("{} {}", body, global.currency_symbol),
    }
}
