//! Generator transformations. These synthesize output and ignore their
//! input, which exempts them from the executor's empty-input rule.

use chrono::NaiveDate;
use rand::Rng;
use uuid::Uuid;

use texttools_model::{Result, TransformError};

/// Password alphabet: mixed case, digits, and a symbol set that survives
/// copy/paste into shells and URLs.
const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*-_=+";

const PASSWORD_LENGTH: usize = 16;

/// Days spanned by `random-date`: 1970-01-01 through 2029-12-31.
const RANDOM_DATE_DAYS: i64 = 21_914;

/// Days from 0001-01-01 (CE) to 1970-01-01.
const UNIX_EPOCH_CE_DAYS: i32 = 719_163;

pub fn uuid_generate(_text: &str) -> Result<String> {
    Ok(Uuid::new_v4().to_string())
}

pub fn password_generate(_text: &str) -> Result<String> {
    let mut rng = rand::thread_rng();
    Ok((0..PASSWORD_LENGTH)
        .map(|_| PASSWORD_CHARSET[rng.gen_range(0..PASSWORD_CHARSET.len())] as char)
        .collect())
}

pub fn random_number(_text: &str) -> Result<String> {
    Ok(rand::thread_rng().gen_range(0..=999_999u32).to_string())
}

pub fn random_hex_color(_text: &str) -> Result<String> {
    Ok(format!("#{:06X}", rand::thread_rng().gen_range(0..=0xFF_FFFFu32)))
}

pub fn random_date(_text: &str) -> Result<String> {
    let offset = rand::thread_rng().gen_range(0..=RANDOM_DATE_DAYS) as i32;
    let date = NaiveDate::from_num_days_from_ce_opt(UNIX_EPOCH_CE_DAYS + offset)
        .ok_or_else(|| TransformError::message("date offset out of range"))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// NANP-style phone number: `(NNN) NNN-NNNN`.
pub fn random_phone_number(_text: &str) -> Result<String> {
    let mut rng = rand::thread_rng();
    Ok(format!(
        "({}) {}-{:04}",
        rng.gen_range(200..=999),
        rng.gen_range(200..=999),
        rng.gen_range(0..=9999)
    ))
}

pub fn random_email(_text: &str) -> Result<String> {
    let mut rng = rand::thread_rng();
    let local: String = (0..8)
        .map(|_| (b'a' + rng.gen_range(0..26)) as char)
        .collect();
    Ok(format!("{local}@example.com"))
}

pub fn random_ip(_text: &str) -> Result<String> {
    let mut rng = rand::thread_rng();
    Ok(format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..=254u8),
        rng.gen_range(0..=255u8),
        rng.gen_range(0..=255u8),
        rng.gen_range(1..=254u8)
    ))
}

pub fn lorem_ipsum(_text: &str) -> Result<String> {
    Ok("Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
        incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
        exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat."
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_shape() {
        let out = uuid_generate("").unwrap();
        assert_eq!(out.len(), 36);
        assert_eq!(out.chars().filter(|c| *c == '-').count(), 4);
    }

    #[test]
    fn password_shape() {
        let out = password_generate("").unwrap();
        assert_eq!(out.len(), PASSWORD_LENGTH);
        assert!(out.bytes().all(|b| PASSWORD_CHARSET.contains(&b)));
    }

    #[test]
    fn hex_color_shape() {
        let out = random_hex_color("").unwrap();
        assert_eq!(out.len(), 7);
        assert!(out.starts_with('#'));
        assert!(out[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn date_in_window() {
        let out = random_date("").unwrap();
        let parsed = NaiveDate::parse_from_str(&out, "%Y-%m-%d").expect("parseable date");
        assert!(parsed >= NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert!(parsed <= NaiveDate::from_ymd_opt(2029, 12, 31).unwrap());
    }

    #[test]
    fn phone_shape() {
        let out = random_phone_number("").unwrap();
        assert_eq!(out.len(), 14);
        assert!(out.starts_with('('));
    }

    #[test]
    fn email_and_ip_shape() {
        assert!(random_email("").unwrap().ends_with("@example.com"));
        let ip = random_ip("").unwrap();
        assert_eq!(ip.split('.').count(), 4);
        assert!(ip.split('.').all(|octet| octet.parse::<u8>().is_ok()));
    }
}
