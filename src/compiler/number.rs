//! Numeric 4-zone compiler (positive;negative;zero;text).

use crate::literal::{color_tag, quote};
use crate::settings::{
    CurrencyPosition, GlobalNumberSettings, NegativeMode, NegativeZone, NumberFormatSettings,
    PositiveZone, ScaleMode, TextZone, ZeroMode, ZeroZone,
};

/// Trailing spacer reserving the width of a closing parenthesis.
const ALIGNMENT_SPACER: &str = "_)";

/// Compile numeric settings into a `positive;negative;zero;text` format code.
pub fn compile(settings: &NumberFormatSettings) -> String {
    let NumberFormatSettings {
        global,
        positive,
        negative,
        zero,
        text,
    } = settings;

    if global.is_clamped() {
        log::warn!(
            "numeric settings out of range (decimals={}, padding={}); clamping",
            global.decimals,
            global.integer_padding
        );
    }

    let code = [
        positive_zone(global, positive),
        negative_zone(global, negative),
        zero_zone(global, zero),
        text_zone(text),
    ]
    .join(";");

    log::debug!("compiled number format: {}", code);
    code
}

/// The digit pattern shared by the numeric zones.
///
/// Scale is expressed through trailing commas: each comma divides by 1000.
pub fn base_pattern(global: &GlobalNumberSettings, separator: bool, scale: ScaleMode) -> String {
    let zeros = "0".repeat(global.effective_padding());
    let mut pattern = if separator {
        format!("#,##{}", zeros)
    } else {
        zeros
    };

    let decimals = global.effective_decimals();
    if decimals > 0 {
        pattern.push('.');
        pattern.push_str(&"0".repeat(decimals));
    }
    if global.percentage {
        pattern.push('%');
    }
    match scale {
        ScaleMode::None => {}
        ScaleMode::Thousands => pattern.push_str(", \"K\""),
        ScaleMode::Millions => pattern.push_str(",, \"M\""),
    }
    pattern
}

/// Place the quoted currency symbol around `pattern`.
pub fn apply_currency(pattern: String, global: &GlobalNumberSettings) -> String {
    if global.currency_symbol.is_empty() {
        return pattern;
    }
    let symbol = quote(&global.currency_symbol);
    match global.currency_position {
        CurrencyPosition::Prefix => format!("{} {}", symbol, pattern),
        CurrencyPosition::Suffix => format!("{} {}", pattern, symbol),
    }
}

fn currency_base(global: &GlobalNumberSettings) -> String {
    apply_currency(base_pattern(global, global.separator, global.scale), global)
}

fn positive_zone(global: &GlobalNumberSettings, zone: &PositiveZone) -> String {
    let mut out = color_tag(zone.color);
    out.push_str(&currency_base(global));
    if zone.padding {
        out.push_str(ALIGNMENT_SPACER);
    }
    out
}

fn negative_zone(global: &GlobalNumberSettings, zone: &NegativeZone) -> String {
    let base = currency_base(global);
    let color = color_tag(zone.effective_color());
    match zone.mode {
        NegativeMode::Minus => format!("{}-{}", color, base),
        // The negative zone already implies the sign; no explicit minus.
        NegativeMode::Color => format!("{}{}", color, base),
        NegativeMode::Paren | NegativeMode::ParenColor => format!("{}({})", color, base),
    }
}

fn zero_zone(global: &GlobalNumberSettings, zone: &ZeroZone) -> String {
    match zone.mode {
        ZeroMode::Number => apply_currency(base_pattern(global, false, ScaleMode::None), global),
        ZeroMode::Dash => quote("-"),
        ZeroMode::Hide => String::new(),
        ZeroMode::CustomText => quote(&zone.custom_text),
    }
}

fn text_zone(zone: &TextZone) -> String {
    format!("{}@{}", quote(&zone.prefix), quote(&zone.suffix))
}
