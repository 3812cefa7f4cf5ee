//! Individual field rules. Each rule takes raw input and returns either the
//! normalized value or the message to show next to the field.

use crate::eligibility::LoanPurpose;
use log::*;
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$";

pub const NAME_LENGTH: RangeInclusive<usize> = 2..=255;
pub const PHONE_DIGITS: usize = 10;
pub const AGE_RANGE: RangeInclusive<f64> = 1.0..=99.0;

/// Bounds and wording for a currency amount typed with optional thousands
/// separators.
///
pub struct AmountRule {
    pub label: &'static str,
    pub range: RangeInclusive<f64>,
    pub range_message: &'static str,
}

pub const MONTHLY_INCOME: AmountRule = AmountRule {
    label: "Monthly income",
    range: 5_000.0..=5_000_000.0,
    range_message: "Monthly income must be between 5,000 and 5,000,000",
};

pub const LOAN_AMOUNT: AmountRule = AmountRule {
    label: "Loan Amount",
    range: 1_000.0..=5_000_000.0,
    range_message: "Loan Amount must be between 1,000 and 5,000,000",
};

fn email_regex() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Failed to compile email pattern: {}", e);
                None
            }
        })
        .as_ref()
}

/// Parse a number the way a form field would: surrounding whitespace is
/// ignored and anything unparseable is NaN.
///
fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

pub fn name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    let length = name.chars().count();
    if length < *NAME_LENGTH.start() {
        Err(format!("Name must be at least {} characters", NAME_LENGTH.start()))
    } else if length > *NAME_LENGTH.end() {
        Err(format!("Name must be at most {} characters", NAME_LENGTH.end()))
    } else {
        Ok(name.to_string())
    }
}

pub fn email(raw: &str) -> Result<String, String> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    let valid = match email_regex() {
        Some(re) => re.is_match(email) && !email.contains(".."),
        None => email.split_once('@').map_or(false, |(local, domain)| {
            !local.is_empty() && domain.contains('.')
        }),
    };
    if valid {
        Ok(email.to_string())
    } else {
        Err("Must be a valid email".to_string())
    }
}

pub fn phone(raw: &str) -> Result<String, String> {
    let phone = raw.trim();
    if phone.is_empty() {
        Err("Phone is required".to_string())
    } else if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        Err(format!("Phone must be exactly {} digits", PHONE_DIGITS))
    } else {
        Ok(phone.to_string())
    }
}

pub fn amount(raw: &str, rule: &AmountRule) -> Result<f64, String> {
    if raw.trim().is_empty() {
        return Err(format!("{} is required", rule.label));
    }
    let value = parse_number(&raw.replace(',', ""));
    if value.is_nan() {
        Err(format!("{} must be a number", rule.label))
    } else if !rule.range.contains(&value) {
        Err(rule.range_message.to_string())
    } else {
        Ok(value)
    }
}

pub fn loan_purpose(raw: Option<&str>) -> Result<LoanPurpose, String> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Err("Loan Purpose is required".to_string()),
        Some(value) => value
            .parse::<LoanPurpose>()
            .map_err(|_| "Invalid loan purpose selected".to_string()),
    }
}

pub fn age(raw: &str) -> Result<u8, String> {
    if raw.trim().is_empty() {
        return Err("Age is required".to_string());
    }
    let value = parse_number(raw);
    if value.is_nan() {
        Err("Age must be a number".to_string())
    } else if value.fract() != 0.0 {
        Err("Age must be an integer".to_string())
    } else if !AGE_RANGE.contains(&value) {
        Err("Age must be between 1 and 99".to_string())
    } else {
        Ok(value as u8)
    }
}

pub fn application_id(raw: &str) -> Result<String, String> {
    let id = raw.trim();
    if id.is_empty() {
        Err("Please enter an application ID.".to_string())
    } else {
        Ok(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_bounds() {
        assert!(name("A").is_err());
        assert!(name(" A ").is_err());
        assert_eq!(name("  Al  "), Ok("Al".to_string()));
        assert!(name(&"x".repeat(255)).is_ok());
        assert_eq!(
            name(&"x".repeat(256)),
            Err("Name must be at most 255 characters".to_string())
        );
    }

    #[test]
    fn email_shapes() {
        assert_eq!(email(""), Err("Email is required".to_string()));
        assert!(email("george@example.com").is_ok());
        assert!(email("first.last+tag@mail.example.co").is_ok());
        assert!(email("george@example").is_err());
        assert!(email("george.example.com").is_err());
        assert!(email("geo..rge@example.com").is_err());
        assert!(email("george@exa mple.com").is_err());
    }

    #[test]
    fn phone_requires_ten_digits() {
        assert_eq!(phone(""), Err("Phone is required".to_string()));
        assert!(phone("0851234567").is_ok());
        assert!(phone("085123456").is_err());
        assert!(phone("08512345678").is_err());
        assert!(phone("085-123-456").is_err());
        assert!(phone("０８５１２３４５６７").is_err());
    }

    #[test]
    fn amount_strips_separators_and_checks_range() {
        assert_eq!(amount("5,000", &MONTHLY_INCOME), Ok(5000.0));
        assert_eq!(amount("5,000,000", &MONTHLY_INCOME), Ok(5_000_000.0));
        assert_eq!(
            amount("4,999", &MONTHLY_INCOME),
            Err("Monthly income must be between 5,000 and 5,000,000".to_string())
        );
        assert_eq!(
            amount("abc", &MONTHLY_INCOME),
            Err("Monthly income must be a number".to_string())
        );
        assert_eq!(
            amount(" ", &LOAN_AMOUNT),
            Err("Loan Amount is required".to_string())
        );
        assert_eq!(amount("1000", &LOAN_AMOUNT), Ok(1000.0));
        assert!(amount("999.99", &LOAN_AMOUNT).is_err());
        assert!(amount("inf", &LOAN_AMOUNT).is_err());
        assert!(amount("nan", &LOAN_AMOUNT).is_err());
    }

    #[test]
    fn loan_purpose_enumeration() {
        assert_eq!(loan_purpose(Some("business")), Ok(LoanPurpose::Business));
        assert_eq!(
            loan_purpose(None),
            Err("Loan Purpose is required".to_string())
        );
        assert_eq!(
            loan_purpose(Some("")),
            Err("Loan Purpose is required".to_string())
        );
        assert_eq!(
            loan_purpose(Some("holiday")),
            Err("Invalid loan purpose selected".to_string())
        );
    }

    #[test]
    fn age_bounds() {
        assert_eq!(age("1"), Ok(1));
        assert_eq!(age("99"), Ok(99));
        assert_eq!(age("0"), Err("Age must be between 1 and 99".to_string()));
        assert_eq!(age("100"), Err("Age must be between 1 and 99".to_string()));
        assert_eq!(age("25.5"), Err("Age must be an integer".to_string()));
        assert_eq!(age("old"), Err("Age must be a number".to_string()));
        assert_eq!(age(""), Err("Age is required".to_string()));
    }

    #[test]
    fn application_id_is_trimmed() {
        assert_eq!(application_id("  A1 "), Ok("A1".to_string()));
        assert!(application_id("   ").is_err());
    }
}
