//! Structural validators for nondeterministic generator output.
//!
//! Exact-match assertions are useless for generated values; these check
//! shape instead (a hex color looks like `#A1B2C3`, a UUID matches the v4
//! layout, and so on).

use chrono::NaiveDate;
use serde::Serialize;

/// Shape check applied to a transformation's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralValidator {
    HexColor,
    PhoneNumber,
    Uuid,
    Email,
    Ip,
    Number,
    Date,
}

impl StructuralValidator {
    pub fn is_match(self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Self::HexColor => regex_match(r"^#[0-9A-Fa-f]{6}$", value),
            Self::PhoneNumber => is_phone_number(value),
            Self::Uuid => regex_match(
                r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
                value,
            ),
            Self::Email => regex_match(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$", value),
            Self::Ip => value.parse::<std::net::Ipv4Addr>().is_ok(),
            Self::Number => value.parse::<f64>().is_ok(),
            Self::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::HexColor => "hex color (#RRGGBB)",
            Self::PhoneNumber => "phone number",
            Self::Uuid => "UUID v4",
            Self::Email => "email address",
            Self::Ip => "IPv4 address",
            Self::Number => "number",
            Self::Date => "ISO date (YYYY-MM-DD)",
        }
    }
}

fn regex_match(pattern: &str, value: &str) -> bool {
    regex::Regex::new(pattern)
        .map(|r| r.is_match(value))
        .unwrap_or(false)
}

/// Digits and phone punctuation only, at least 10 characters of which at
/// least 10 are digits.
fn is_phone_number(value: &str) -> bool {
    if value.chars().count() < 10 {
        return false;
    }
    let all_allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '(' | ')' | '-' | '+' | '.' | ' '));
    all_allowed && value.chars().filter(char::is_ascii_digit).count() >= 10
}
