//! Conditional (rule based) compiler.

use crate::literal::{color_tag, condition_tag};
use crate::settings::{ConditionalRule, MAX_SECTIONS};

/// Compile an ordered rule list into a `;`-joined conditional format code.
///
/// Rules with neither a condition nor a fragment are skipped. Order is kept
/// as given; lists longer than [`MAX_SECTIONS`] are truncated.
pub fn compile(rules: &[ConditionalRule]) -> String {
    let effective: Vec<&ConditionalRule> = rules.iter().filter(|r| r.is_effective()).collect();

    if effective.len() > MAX_SECTIONS {
        log::warn!(
            "{} conditional sections given, keeping the first {}",
            effective.len(),
            MAX_SECTIONS
        );
    }
    let kept = &effective[..effective.len().min(MAX_SECTIONS)];

    if let Some(pos) = kept.iter().position(|r| r.is_else()) {
        if pos + 1 != kept.len() {
            log::warn!("else rule at position {} is not last; keeping given order", pos);
        }
    }

    let code = kept
        .iter()
        .map(|rule| section(rule))
        .collect::<Vec<_>>()
        .join(";");
    log::debug!("compiled conditional format: {}", code);
    code
}

fn section(rule: &ConditionalRule) -> String {
    let mut out = String::new();
    if let Some(condition) = &rule.condition {
        out.push_str(&condition_tag(condition));
    }
    out.push_str(&color_tag(rule.color));
    out.push_str(&rule.format);
    out
}
