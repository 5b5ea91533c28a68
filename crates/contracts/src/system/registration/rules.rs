//! Per-field validation of the registration form

use super::field::RegistrationField;
use crate::shared::validation::{RuleViolation, ValidationRules};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Youngest age allowed to register
pub const MINIMUM_AGE: i32 = 16;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]{1}$").expect("PAN pattern"));

/// User-facing validation failure. `Display` is the exact message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Name must be at least 3 characters")]
    FullNameTooShort,
    #[error("Date of birth is required")]
    DateOfBirthRequired,
    #[error("You must be at least 16 years old")]
    TooYoung,
    #[error("Email address is required")]
    EmailRequired,
    #[error("Enter a valid email address")]
    EmailInvalid,
    #[error("PAN number is required")]
    PanRequired,
    #[error("PAN must be 10 characters (e.g. ABCDE1234F)")]
    PanLength,
    #[error("Invalid PAN format (e.g. ABCDE1234F)")]
    PanFormat,
    #[error("Aadhar number is required")]
    AadharRequired,
    #[error("Aadhar must be 12 digits")]
    AadharLength,
    #[error("Please add at least one income amount")]
    IncomeMissing,
    #[error("Please add at least one expense amount")]
    ExpensesMissing,
}

fn full_name_rules() -> ValidationRules {
    ValidationRules::required().with_min_length(3)
}

fn email_rules() -> ValidationRules {
    ValidationRules::required().with_pattern(&EMAIL_RE)
}

fn pan_rules() -> ValidationRules {
    ValidationRules::required()
        .with_exact_length(10)
        .with_pattern(&PAN_RE)
}

/// Age in whole years on `today`: year difference, minus one if the
/// birthday has not come round yet this year.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Parse the ISO date produced by `<input type="date">`
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn validate_date_of_birth(value: &str, today: NaiveDate) -> Result<(), ValidationError> {
    let birth = parse_date_of_birth(value).ok_or(ValidationError::DateOfBirthRequired)?;
    if age_on(birth, today) < MINIMUM_AGE {
        return Err(ValidationError::TooYoung);
    }
    Ok(())
}

fn validate_aadhar(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::AadharRequired);
    }
    // spaces are display grouping; anything else that is not a digit is invalid
    if value.chars().any(|c| !c.is_ascii_digit() && !c.is_whitespace()) {
        return Err(ValidationError::AadharLength);
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits != 12 {
        return Err(ValidationError::AadharLength);
    }
    Ok(())
}

/// Validate one identity field. Pure; `today` anchors the age check.
pub fn validate_field(
    field: RegistrationField,
    value: &str,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    match field {
        RegistrationField::FullName => full_name_rules().check(value).map_err(|v| match v {
            RuleViolation::Missing => ValidationError::FullNameRequired,
            _ => ValidationError::FullNameTooShort,
        }),
        RegistrationField::DateOfBirth => validate_date_of_birth(value, today),
        RegistrationField::Email => email_rules().check(value).map_err(|v| match v {
            RuleViolation::Missing => ValidationError::EmailRequired,
            _ => ValidationError::EmailInvalid,
        }),
        RegistrationField::PanNumber => pan_rules().check(value).map_err(|v| match v {
            RuleViolation::Missing => ValidationError::PanRequired,
            RuleViolation::PatternMismatch => ValidationError::PanFormat,
            _ => ValidationError::PanLength,
        }),
        RegistrationField::AadharNumber => validate_aadhar(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::registration::normalize;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn check(field: RegistrationField, value: &str) -> Result<(), ValidationError> {
        validate_field(field, value, today())
    }

    #[test]
    fn test_full_name() {
        use RegistrationField::FullName;
        assert_eq!(check(FullName, ""), Err(ValidationError::FullNameRequired));
        assert_eq!(check(FullName, "   "), Err(ValidationError::FullNameRequired));
        assert_eq!(check(FullName, "Al"), Err(ValidationError::FullNameTooShort));
        assert_eq!(check(FullName, " Al "), Err(ValidationError::FullNameTooShort));
        assert_eq!(check(FullName, "Ali"), Ok(()));
    }

    #[test]
    fn test_messages_are_exact() {
        assert_eq!(
            ValidationError::PanLength.to_string(),
            "PAN must be 10 characters (e.g. ABCDE1234F)"
        );
        assert_eq!(
            ValidationError::PanFormat.to_string(),
            "Invalid PAN format (e.g. ABCDE1234F)"
        );
        assert_eq!(
            ValidationError::TooYoung.to_string(),
            "You must be at least 16 years old"
        );
        assert_eq!(
            ValidationError::ExpensesMissing.to_string(),
            "Please add at least one expense amount"
        );
    }

    #[test]
    fn test_email() {
        use RegistrationField::Email;
        assert_eq!(check(Email, ""), Err(ValidationError::EmailRequired));
        assert_eq!(check(Email, "a@b.co"), Ok(()));
        assert_eq!(check(Email, "a@b"), Err(ValidationError::EmailInvalid));
        assert_eq!(check(Email, "a b@c.de"), Err(ValidationError::EmailInvalid));
        assert_eq!(check(Email, "a@@b.de"), Err(ValidationError::EmailInvalid));
    }

    #[test]
    fn test_email_without_at_or_dot_always_fails() {
        let samples = [
            "plainaddress",
            "user",
            "user-name_42",
            "x",
            "ΑΒΓ",
            "no spaces here",
            "12345",
        ];
        for s in samples {
            assert!(check(RegistrationField::Email, s).is_err(), "{s}");
            let with_at = format!("{s}@host");
            assert!(check(RegistrationField::Email, &with_at).is_err(), "{with_at}");
            let with_dot = format!("{s}.com");
            assert!(check(RegistrationField::Email, &with_dot).is_err(), "{with_dot}");
        }
    }

    #[test]
    fn test_pan_scenarios() {
        use RegistrationField::PanNumber;
        let pan = normalize::pan_number("abcde1234f");
        assert_eq!(pan, "ABCDE1234F");
        assert_eq!(check(PanNumber, &pan), Ok(()));

        let pan = normalize::pan_number("abcde123");
        assert_eq!(pan, "ABCDE123");
        assert_eq!(check(PanNumber, &pan), Err(ValidationError::PanLength));

        assert_eq!(check(PanNumber, ""), Err(ValidationError::PanRequired));
        assert_eq!(check(PanNumber, "1BCDE1234F"), Err(ValidationError::PanFormat));
        assert_eq!(check(PanNumber, "ABCDE12345"), Err(ValidationError::PanFormat));
    }

    #[test]
    fn test_aadhar() {
        use RegistrationField::AadharNumber;
        let formatted = normalize::aadhar_number("123456789012");
        assert_eq!(formatted, "1234 5678 9012");
        assert_eq!(check(AadharNumber, &formatted), Ok(()));
        assert_eq!(check(AadharNumber, "123456789012"), Ok(()));
        assert_eq!(check(AadharNumber, ""), Err(ValidationError::AadharRequired));
        assert_eq!(
            check(AadharNumber, "1234 5678 901"),
            Err(ValidationError::AadharLength)
        );
    }

    #[test]
    fn test_aadhar_counts_digits_only() {
        use RegistrationField::AadharNumber;
        assert_eq!(
            check(AadharNumber, "abcd efgh ijkl"),
            Err(ValidationError::AadharLength)
        );
        assert_eq!(
            check(AadharNumber, "1234 5678 90ab"),
            Err(ValidationError::AadharLength)
        );
        assert_eq!(
            check(AadharNumber, "1234-5678-9012"),
            Err(ValidationError::AadharLength)
        );
        assert_eq!(check(AadharNumber, " 1234 5678 9012 "), Ok(()));
    }

    #[test]
    fn test_pan_with_surrounding_whitespace() {
        use RegistrationField::PanNumber;
        assert_eq!(check(PanNumber, "ABCDE1234F "), Ok(()));
        assert_eq!(check(PanNumber, " ABCDE1234F"), Ok(()));
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        let birth = NaiveDate::from_ymd_opt(2000, 10, 18).unwrap();
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2016, 10, 17).unwrap()), 15);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2016, 10, 18).unwrap()), 16);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2016, 12, 1).unwrap()), 16);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2017, 1, 1).unwrap()), 16);
    }

    #[test]
    fn test_sixteenth_birthday_boundary() {
        use RegistrationField::DateOfBirth;
        // exactly 16 years before today
        assert_eq!(check(DateOfBirth, "2010-10-18"), Ok(()));
        // 16 years minus one day
        assert_eq!(check(DateOfBirth, "2010-10-19"), Err(ValidationError::TooYoung));
        assert_eq!(check(DateOfBirth, "1990-01-01"), Ok(()));
        assert_eq!(check(DateOfBirth, "2030-01-01"), Err(ValidationError::TooYoung));
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = NaiveDate::from_ymd_opt(2008, 2, 29).unwrap();
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()), 15);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()), 16);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()), 17);
    }

    #[test]
    fn test_date_of_birth_missing_or_unparseable() {
        use RegistrationField::DateOfBirth;
        assert_eq!(check(DateOfBirth, ""), Err(ValidationError::DateOfBirthRequired));
        assert_eq!(
            check(DateOfBirth, "18/10/2000"),
            Err(ValidationError::DateOfBirthRequired)
        );
    }
}
