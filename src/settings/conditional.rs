//! Rule list for the 3-section conditional format.

use crate::ast::{Condition, ConditionOperator, NamedColor};
use crate::error::SettingsError;

/// Excel accepts two explicit conditions plus one fallback section.
pub const MAX_SECTIONS: usize = 3;

/// One conditional section.
///
/// A rule without a condition is the "else" branch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalRule {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub condition: Option<Condition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<NamedColor>,
    /// Format fragment emitted verbatim
    #[cfg_attr(feature = "serde", serde(default))]
    pub format: String,
}

impl ConditionalRule {
    /// A rule that applies when `condition` holds.
    pub fn when(
        condition: Condition,
        color: Option<NamedColor>,
        format: impl Into<String>,
    ) -> Self {
        ConditionalRule {
            condition: Some(condition),
            color,
            format: format.into(),
        }
    }

    /// The fallback rule.
    pub fn otherwise(color: Option<NamedColor>, format: impl Into<String>) -> Self {
        ConditionalRule {
            condition: None,
            color,
            format: format.into(),
        }
    }

    pub fn is_else(&self) -> bool {
        self.condition.is_none()
    }

    /// Returns true if the rule contributes a section to the compiled code.
    pub fn is_effective(&self) -> bool {
        self.condition.is_some() || !self.format.is_empty()
    }
}

/// An ordered rule list holding at most [`MAX_SECTIONS`] rules, with the
/// else branch (if any) kept last.
///
/// Serialized as a plain array; deserializing goes through
/// [`ConditionalRules::from_rules`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<ConditionalRule>", into = "Vec<ConditionalRule>")
)]
pub struct ConditionalRules {
    rules: Vec<ConditionalRule>,
}

impl ConditionalRules {
    pub fn new() -> Self {
        ConditionalRules { rules: Vec::new() }
    }

    /// Build a list from rules, enforcing the size and else-placement rules.
    pub fn from_rules(rules: Vec<ConditionalRule>) -> Result<Self, SettingsError> {
        let mut list = ConditionalRules::new();
        for rule in rules {
            list.push(rule)?;
        }
        Ok(list)
    }

    /// Add a rule. Conditioned rules go before a trailing else branch.
    pub fn push(&mut self, rule: ConditionalRule) -> Result<(), SettingsError> {
        if self.rules.len() >= MAX_SECTIONS {
            return Err(SettingsError::TooManyRules { max: MAX_SECTIONS });
        }
        if rule.is_else() {
            if self.else_rule().is_some() {
                return Err(SettingsError::DuplicateElse);
            }
            self.rules.push(rule);
        } else if self.rules.last().is_some_and(|r| r.is_else()) {
            let at = self.rules.len() - 1;
            self.rules.insert(at, rule);
        } else {
            self.rules.push(rule);
        }
        Ok(())
    }

    /// Add a new `> 0` rule with the `0.00` fragment.
    pub fn push_default(&mut self) -> Result<(), SettingsError> {
        self.push(ConditionalRule::when(
            Condition::new(ConditionOperator::GreaterThan, 0.0),
            None,
            "0.00",
        ))
    }

    /// Add the fallback branch; fails if one is already present.
    pub fn push_else(
        &mut self,
        color: Option<NamedColor>,
        format: impl Into<String>,
    ) -> Result<(), SettingsError> {
        self.push(ConditionalRule::otherwise(color, format))
    }

    pub fn remove(&mut self, index: usize) -> Result<ConditionalRule, SettingsError> {
        if index >= self.rules.len() {
            return Err(SettingsError::RuleIndexOutOfRange {
                index,
                len: self.rules.len(),
            });
        }
        Ok(self.rules.remove(index))
    }

    pub fn else_rule(&self) -> Option<&ConditionalRule> {
        self.rules.iter().find(|r| r.is_else())
    }

    /// The rule that governs `value`: the first matching condition, else the
    /// fallback branch.
    pub fn select(&self, value: f64) -> Option<&ConditionalRule> {
        self.rules.iter().find(|rule| match &rule.condition {
            Some(condition) => condition.evaluate(value),
            None => true,
        })
    }

    pub fn as_slice(&self) -> &[ConditionalRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConditionalRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ConditionalRules {
    fn default() -> Self {
        ConditionalRules {
            rules: vec![
                ConditionalRule::when(
                    Condition::new(ConditionOperator::GreaterOrEqual, 100.0),
                    Some(NamedColor::Green),
                    "\"High\" 0.0",
                ),
                ConditionalRule::when(
                    Condition::new(ConditionOperator::LessThan, 50.0),
                    Some(NamedColor::Red),
                    "\"Low\" 0.0",
                ),
                ConditionalRule::otherwise(Some(NamedColor::Blue), "0.0"),
            ],
        }
    }
}

impl TryFrom<Vec<ConditionalRule>> for ConditionalRules {
    type Error = SettingsError;

    fn try_from(rules: Vec<ConditionalRule>) -> Result<Self, Self::Error> {
        ConditionalRules::from_rules(rules)
    }
}

impl From<ConditionalRules> for Vec<ConditionalRule> {
    fn from(list: ConditionalRules) -> Self {
        list.rules
    }
}

impl<'a> IntoIterator for &'a ConditionalRules {
    type Item = &'a ConditionalRule;
    type IntoIter = std::slice::Iter<'a, ConditionalRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
