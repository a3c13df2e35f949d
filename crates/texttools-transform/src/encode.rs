//! Encoding and cipher transformations.
//!
//! Encode/decode pairs (base64, URL, hex, binary, ASCII codes, HTML,
//! Morse) round-trip for representable inputs. Decoders report malformed
//! input as a leaf failure, which the executor surfaces as an execution
//! failure with key context.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use texttools_model::{Result, TransformError};

pub fn base64_encode(text: &str) -> Result<String> {
    Ok(BASE64.encode(text.as_bytes()))
}

pub fn base64_decode(text: &str) -> Result<String> {
    let bytes = BASE64
        .decode(text.trim().as_bytes())
        .map_err(|e| TransformError::message(format!("invalid base64: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|_| TransformError::message("decoded bytes are not valid UTF-8"))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn url_encode(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    Ok(out)
}

pub fn url_decode(text: &str) -> Result<String> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut input = text.bytes();
    while let Some(byte) = input.next() {
        match byte {
            b'%' => {
                let hi = input.next();
                let lo = input.next();
                let (Some(hi), Some(lo)) = (hi, lo) else {
                    return Err(TransformError::message("truncated percent escape"));
                };
                let pair = [hi, lo];
                let pair = std::str::from_utf8(&pair)
                    .map_err(|_| TransformError::message("invalid percent escape"))?;
                let value = u8::from_str_radix(pair, 16)
                    .map_err(|_| TransformError::message(format!("invalid percent escape %{pair}")))?;
                bytes.push(value);
            }
            b'+' => bytes.push(b' '),
            other => bytes.push(other),
        }
    }
    String::from_utf8(bytes)
        .map_err(|_| TransformError::message("decoded bytes are not valid UTF-8"))
}

pub fn hex_encode(text: &str) -> Result<String> {
    Ok(hex::encode(text.as_bytes()))
}

pub fn hex_decode(text: &str) -> Result<String> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes =
        hex::decode(&compact).map_err(|e| TransformError::message(format!("invalid hex: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|_| TransformError::message("decoded bytes are not valid UTF-8"))
}

/// UTF-8 bytes as space-separated 8-bit binary groups.
pub fn binary_encode(text: &str) -> Result<String> {
    Ok(text
        .bytes()
        .map(|b| format!("{b:08b}"))
        .collect::<Vec<_>>()
        .join(" "))
}

pub fn binary_decode(text: &str) -> Result<String> {
    let mut bytes = Vec::new();
    for group in text.split_whitespace() {
        let value = u8::from_str_radix(group, 2)
            .map_err(|_| TransformError::message(format!("invalid binary group {group}")))?;
        bytes.push(value);
    }
    String::from_utf8(bytes)
        .map_err(|_| TransformError::message("decoded bytes are not valid UTF-8"))
}

/// Character code points as space-separated decimal numbers.
pub fn ascii_encode(text: &str) -> Result<String> {
    Ok(text
        .chars()
        .map(|c| (c as u32).to_string())
        .collect::<Vec<_>>()
        .join(" "))
}

pub fn ascii_decode(text: &str) -> Result<String> {
    let mut out = String::new();
    for token in text.split_whitespace() {
        let code: u32 = token
            .parse()
            .map_err(|_| TransformError::message(format!("invalid character code {token}")))?;
        let ch = char::from_u32(code)
            .ok_or_else(|| TransformError::message(format!("code {code} is not a character")))?;
        out.push(ch);
    }
    Ok(out)
}

const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

/// Morse code with letters separated by spaces and words by ` / `.
/// Characters without a Morse representation are dropped.
pub fn morse_encode(text: &str) -> Result<String> {
    let mut tokens = Vec::new();
    for ch in text.to_uppercase().chars() {
        if ch.is_whitespace() {
            if tokens.last().is_some_and(|t| t != "/") {
                tokens.push("/".to_string());
            }
        } else if let Some((_, code)) = MORSE_TABLE.iter().find(|(c, _)| *c == ch) {
            tokens.push((*code).to_string());
        }
    }
    while tokens.last().is_some_and(|t| t == "/") {
        tokens.pop();
    }
    Ok(tokens.join(" "))
}

pub fn morse_decode(text: &str) -> Result<String> {
    let mut out = String::new();
    for token in text.split_whitespace() {
        if token == "/" {
            out.push(' ');
            continue;
        }
        let (ch, _) = MORSE_TABLE
            .iter()
            .find(|(_, code)| *code == token)
            .ok_or_else(|| TransformError::message(format!("unknown morse code {token}")))?;
        out.push(*ch);
    }
    Ok(out)
}

fn shift_letter(ch: char, shift: i32) -> char {
    let base = if ch.is_ascii_uppercase() {
        b'A'
    } else if ch.is_ascii_lowercase() {
        b'a'
    } else {
        return ch;
    };
    let offset = i32::from(ch as u8 - base);
    let shifted = (offset + shift).rem_euclid(26) as u8;
    (base + shifted) as char
}

pub fn rot13(text: &str) -> Result<String> {
    Ok(text.chars().map(|c| shift_letter(c, 13)).collect())
}

/// Classic Caesar cipher with a fixed shift of 3.
pub fn caesar_cipher(text: &str) -> Result<String> {
    Ok(text.chars().map(|c| shift_letter(c, 3)).collect())
}

pub fn caesar_decipher(text: &str) -> Result<String> {
    Ok(text.chars().map(|c| shift_letter(c, -3)).collect())
}

pub fn html_encode(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Ok(out)
}

pub fn html_decode(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let entity = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
            ("&apos;", '\''),
        ]
        .iter()
        .find(|(name, _)| rest.starts_with(name));
        match entity {
            Some((name, ch)) => {
                out.push(*ch);
                rest = &rest[name.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Escape non-ASCII characters as `\u{...}` sequences.
pub fn unicode_escape(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            out.push_str(&format!("\\u{{{:x}}}", ch as u32));
        }
    }
    Ok(out)
}

const ROMAN_TABLE: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert a decimal number (1-3999) to Roman numerals.
pub fn number_to_roman(text: &str) -> Result<String> {
    let value: u32 = text
        .trim()
        .parse()
        .map_err(|_| TransformError::message(format!("not a number: {}", text.trim())))?;
    if !(1..=3999).contains(&value) {
        return Err(TransformError::message(
            "number out of roman numeral range (1-3999)",
        ));
    }
    Ok(roman_of(value))
}

fn roman_of(mut value: u32) -> String {
    let mut out = String::new();
    for (weight, glyphs) in ROMAN_TABLE {
        while value >= *weight {
            out.push_str(glyphs);
            value -= weight;
        }
    }
    out
}

/// Convert Roman numerals to a decimal number.
pub fn roman_to_number(text: &str) -> Result<String> {
    let input = text.trim().to_uppercase();
    let mut total: u32 = 0;
    let mut prev: u32 = 0;
    for ch in input.chars().rev() {
        let value = match ch {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            other => {
                return Err(TransformError::message(format!(
                    "invalid roman numeral character {other}"
                )));
            }
        };
        if value < prev {
            total = total
                .checked_sub(value)
                .ok_or_else(|| TransformError::message("malformed roman numeral"))?;
        } else {
            total += value;
            prev = value;
        }
    }
    // Reject non-canonical forms such as IIII or VX.
    if total == 0 || roman_of(total) != input {
        return Err(TransformError::message(format!(
            "malformed roman numeral {input}"
        )));
    }
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_pair() {
        assert_eq!(base64_encode("hello").unwrap(), "aGVsbG8=");
        assert_eq!(base64_decode("aGVsbG8=").unwrap(), "hello");
        assert!(base64_decode("not!!valid").is_err());
    }

    #[test]
    fn url_pair() {
        assert_eq!(url_encode("hello world").unwrap(), "hello%20world");
        assert_eq!(url_encode("a&b=c").unwrap(), "a%26b%3Dc");
        assert_eq!(url_decode("hello%20world").unwrap(), "hello world");
        assert_eq!(url_decode("a+b").unwrap(), "a b");
        assert!(url_decode("bad%2").is_err());
    }

    #[test]
    fn hex_pair() {
        assert_eq!(hex_encode("hi").unwrap(), "6869");
        assert_eq!(hex_decode("68 69").unwrap(), "hi");
        assert!(hex_decode("zz").is_err());
    }

    #[test]
    fn binary_pair() {
        assert_eq!(binary_encode("A").unwrap(), "01000001");
        assert_eq!(binary_decode("01000001 01000010").unwrap(), "AB");
        assert!(binary_decode("0102").is_err());
    }

    #[test]
    fn ascii_pair() {
        assert_eq!(ascii_encode("Hi").unwrap(), "72 105");
        assert_eq!(ascii_decode("72 105").unwrap(), "Hi");
        assert!(ascii_decode("xyz").is_err());
    }

    #[test]
    fn morse_pair() {
        assert_eq!(morse_encode("sos").unwrap(), "... --- ...");
        assert_eq!(morse_encode("hi there").unwrap(), ".... .. / - .... . .-. .");
        assert_eq!(morse_decode(".... .. / - .... . .-. .").unwrap(), "HI THERE");
        assert!(morse_decode("......").is_err());
    }

    #[test]
    fn rotation_ciphers() {
        assert_eq!(rot13("hello").unwrap(), "uryyb");
        assert_eq!(rot13("uryyb").unwrap(), "hello");
        assert_eq!(caesar_cipher("abc xyz").unwrap(), "def abc");
        assert_eq!(caesar_decipher("def abc").unwrap(), "abc xyz");
    }

    #[test]
    fn html_pair() {
        assert_eq!(
            html_encode("<a href=\"x\">&</a>").unwrap(),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
        assert_eq!(html_decode("&lt;b&gt; &amp; &#39;").unwrap(), "<b> & '");
        // Bare ampersands pass through.
        assert_eq!(html_decode("a & b").unwrap(), "a & b");
    }

    #[test]
    fn unicode_escape_non_ascii() {
        assert_eq!(unicode_escape("abc").unwrap(), "abc");
        assert_eq!(unicode_escape("café").unwrap(), "caf\\u{e9}");
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(number_to_roman("1994").unwrap(), "MCMXCIV");
        assert_eq!(number_to_roman("4").unwrap(), "IV");
        assert!(number_to_roman("0").is_err());
        assert!(number_to_roman("4000").is_err());
        assert!(number_to_roman("abc").is_err());

        assert_eq!(roman_to_number("MCMXCIV").unwrap(), "1994");
        assert_eq!(roman_to_number("iv").unwrap(), "4");
        assert!(roman_to_number("IIII").is_err());
        assert!(roman_to_number("ABC").is_err());
    }
}
