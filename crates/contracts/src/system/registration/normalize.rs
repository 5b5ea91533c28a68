//! Input filters applied as the user types, before the value is stored

use super::field::RegistrationField;

/// Keep letters and whitespace only
pub fn full_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect()
}

/// Uppercase, keep `[A-Z0-9]`, at most 10 chars
pub fn pan_number(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .take(10)
        .collect()
}

/// First 12 digits grouped as `XXXX XXXX XXXX`
pub fn aadhar_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).take(12).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Aadhar number without the display grouping
pub fn aadhar_digits(formatted: &str) -> String {
    formatted.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalizer for a field. Email and date of birth are stored as typed.
pub fn normalize_field(field: RegistrationField, raw: &str) -> String {
    match field {
        RegistrationField::FullName => full_name(raw),
        RegistrationField::PanNumber => pan_number(raw),
        RegistrationField::AadharNumber => aadhar_number(raw),
        RegistrationField::DateOfBirth | RegistrationField::Email => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_strips_non_letters() {
        assert_eq!(full_name("J0hn  O'Brien-3"), "Jhn  OBrien");
        assert_eq!(full_name("Ananya Śarma"), "Ananya Śarma");
        assert_eq!(full_name("1234"), "");
    }

    #[test]
    fn test_pan_number_normalizer_property() {
        let inputs = [
            "abcde1234f",
            "ab-cd e1/23.4f",
            "a1b2c3d4e5f6g7h8",
            "zz__zz..99##99__z",
            "  pan:  xyzab9876k  ",
            "éabcde1234f",
            "",
        ];
        for input in inputs {
            let out = pan_number(input);
            assert!(out.chars().count() <= 10, "{input} -> {out}");
            assert!(
                out.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                "{input} -> {out}"
            );
        }
        assert_eq!(pan_number("ab-cd e1/23.4f"), "ABCDE1234F");
        assert_eq!(pan_number("abcde1234fGHI"), "ABCDE1234F");
    }

    #[test]
    fn test_aadhar_formatter_property() {
        // walk a few deterministic 12-digit sequences
        let mut seed: u64 = 0x5eed_1234_abcd;
        for _ in 0..200 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let digits = format!("{:012}", seed % 1_000_000_000_000);
            let formatted = aadhar_number(&digits);
            assert_eq!(formatted.len(), 14);
            let groups: Vec<&str> = formatted.split(' ').collect();
            assert_eq!(groups, vec![&digits[0..4], &digits[4..8], &digits[8..12]]);
        }
    }

    #[test]
    fn test_aadhar_partial_and_noisy_input() {
        assert_eq!(aadhar_number("1234"), "1234");
        assert_eq!(aadhar_number("12345"), "1234 5");
        assert_eq!(aadhar_number("1234-5678-9012-3456"), "1234 5678 9012");
        assert_eq!(aadhar_number("abc"), "");
        assert_eq!(aadhar_digits("1234 5678 9012"), "123456789012");
    }

    #[test]
    fn test_normalize_field_passthrough() {
        assert_eq!(
            normalize_field(RegistrationField::Email, " Me@Example.com "),
            " Me@Example.com "
        );
        assert_eq!(
            normalize_field(RegistrationField::DateOfBirth, "2000-01-31"),
            "2000-01-31"
        );
    }
}
