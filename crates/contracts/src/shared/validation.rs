//! Reusable rule shapes for text fields

use once_cell::sync::Lazy;
use regex::Regex;

/// Which rule a value broke. Callers map this to their own message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    Missing,
    TooShort,
    WrongLength,
    PatternMismatch,
}

/// Validation rules for a text field.
/// Every rule sees the trimmed value; lengths are counted in chars.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub exact_length: Option<usize>,
    pub pattern: Option<&'static Lazy<Regex>>,
}

impl ValidationRules {
    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            exact_length: None,
            pattern: None,
        }
    }

    pub const fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn with_exact_length(mut self, len: usize) -> Self {
        self.exact_length = Some(len);
        self
    }

    pub const fn with_pattern(mut self, pattern: &'static Lazy<Regex>) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Validate a string value against the rules, in the order
    /// required, min length, exact length, pattern.
    pub fn check(&self, value: &str) -> Result<(), RuleViolation> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(RuleViolation::Missing)
            } else {
                Ok(())
            };
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(RuleViolation::TooShort);
            }
        }

        if let Some(exact) = self.exact_length {
            if len != exact {
                return Err(RuleViolation::WrongLength);
            }
        }

        if let Some(pattern) = self.pattern {
            if !pattern.is_match(trimmed) {
                return Err(RuleViolation::PatternMismatch);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

    #[test]
    fn test_optional_empty_is_ok() {
        assert_eq!(ValidationRules::default().check("   "), Ok(()));
    }

    #[test]
    fn test_required_empty_is_missing() {
        assert_eq!(
            ValidationRules::required().check(" \t"),
            Err(RuleViolation::Missing)
        );
    }

    #[test]
    fn test_rule_order() {
        let rules = ValidationRules::required()
            .with_exact_length(4)
            .with_pattern(&DIGITS);
        assert_eq!(rules.check("12a"), Err(RuleViolation::WrongLength));
        assert_eq!(rules.check("12a4"), Err(RuleViolation::PatternMismatch));
        assert_eq!(rules.check("1234"), Ok(()));
    }

    #[test]
    fn test_pattern_sees_trimmed_value() {
        let rules = ValidationRules::required()
            .with_exact_length(4)
            .with_pattern(&DIGITS);
        assert_eq!(rules.check(" 1234 "), Ok(()));
        assert_eq!(rules.check("\t12a4\n"), Err(RuleViolation::PatternMismatch));
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rules = ValidationRules::required().with_min_length(3);
        assert_eq!(rules.check("Jö"), Err(RuleViolation::TooShort));
        assert_eq!(rules.check("Jöe"), Ok(()));
    }
}
