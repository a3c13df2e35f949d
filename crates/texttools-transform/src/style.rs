//! Unicode styled-alphabet transformations (Mathematical Alphanumeric
//! Symbols block, plus phonetic small caps and super/subscripts).
//!
//! Characters without a styled counterpart pass through unchanged.

use texttools_model::Result;

fn map_chars(text: &str, map: impl Fn(char) -> Option<char>) -> String {
    text.chars().map(|c| map(c).unwrap_or(c)).collect()
}

/// Map ASCII letters into a contiguous math alphabet at the given bases.
fn math_letter(ch: char, upper_base: u32, lower_base: u32) -> Option<char> {
    if ch.is_ascii_uppercase() {
        char::from_u32(upper_base + (ch as u32 - 'A' as u32))
    } else if ch.is_ascii_lowercase() {
        char::from_u32(lower_base + (ch as u32 - 'a' as u32))
    } else {
        None
    }
}

fn math_digit(ch: char, base: u32) -> Option<char> {
    if ch.is_ascii_digit() {
        char::from_u32(base + (ch as u32 - '0' as u32))
    } else {
        None
    }
}

pub fn bold_text(text: &str) -> Result<String> {
    Ok(map_chars(text, |ch| {
        math_letter(ch, 0x1D400, 0x1D41A).or_else(|| math_digit(ch, 0x1D7CE))
    }))
}

pub fn italic_text(text: &str) -> Result<String> {
    Ok(map_chars(text, |ch| {
        // U+1D455 is reserved; italic h lives in Letterlike Symbols.
        if ch == 'h' {
            char::from_u32(0x210E)
        } else {
            math_letter(ch, 0x1D434, 0x1D44E)
        }
    }))
}

pub fn bold_italic_text(text: &str) -> Result<String> {
    Ok(map_chars(text, |ch| math_letter(ch, 0x1D468, 0x1D482)))
}

/// Bold script alphabet (the plain script range has reserved holes).
pub fn cursive_text(text: &str) -> Result<String> {
    Ok(map_chars(text, |ch| math_letter(ch, 0x1D4D0, 0x1D4EA)))
}

pub fn double_struck_text(text: &str) -> Result<String> {
    Ok(map_chars(text, |ch| match ch {
        // Reserved points in the math block; these live in Letterlike Symbols.
        'C' => char::from_u32(0x2102),
        'H' => char::from_u32(0x210D),
        'N' => char::from_u32(0x2115),
        'P' => char::from_u32(0x2119),
        'Q' => char::from_u32(0x211A),
        'R' => char::from_u32(0x211D),
        'Z' => char::from_u32(0x2124),
        _ => math_letter(ch, 0x1D538, 0x1D552).or_else(|| math_digit(ch, 0x1D7D8)),
    }))
}

pub fn fraktur_text(text: &str) -> Result<String> {
    // Bold fraktur; the plain fraktur range has reserved holes.
    Ok(map_chars(text, |ch| math_letter(ch, 0x1D56C, 0x1D586)))
}

pub fn monospace_text(text: &str) -> Result<String> {
    Ok(map_chars(text, |ch| {
        math_letter(ch, 0x1D670, 0x1D68A).or_else(|| math_digit(ch, 0x1D7F6))
    }))
}

pub fn sans_serif_text(text: &str) -> Result<String> {
    Ok(map_chars(text, |ch| {
        math_letter(ch, 0x1D5A0, 0x1D5BA).or_else(|| math_digit(ch, 0x1D7E2))
    }))
}

pub fn small_caps(text: &str) -> Result<String> {
    Ok(map_chars(text, |ch| {
        Some(match ch.to_ascii_lowercase() {
            'a' => 'ᴀ',
            'b' => 'ʙ',
            'c' => 'ᴄ',
            'd' => 'ᴅ',
            'e' => 'ᴇ',
            'f' => 'ꜰ',
            'g' => 'ɢ',
            'h' => 'ʜ',
            'i' => 'ɪ',
            'j' => 'ᴊ',
            'k' => 'ᴋ',
            'l' => 'ʟ',
            'm' => 'ᴍ',
            'n' => 'ɴ',
            'o' => 'ᴏ',
            'p' => 'ᴘ',
            'q' => 'ǫ',
            'r' => 'ʀ',
            's' => 'ꜱ',
            't' => 'ᴛ',
            'u' => 'ᴜ',
            'v' => 'ᴠ',
            'w' => 'ᴡ',
            'y' => 'ʏ',
            'z' => 'ᴢ',
            _ => return None,
        })
    }))
}

pub fn superscript_text(text: &str) -> Result<String> {
    Ok(map_chars(text, |ch| {
        Some(match ch {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            '+' => '⁺',
            '-' => '⁻',
            '=' => '⁼',
            '(' => '⁽',
            ')' => '⁾',
            'a' => 'ᵃ',
            'b' => 'ᵇ',
            'c' => 'ᶜ',
            'd' => 'ᵈ',
            'e' => 'ᵉ',
            'f' => 'ᶠ',
            'g' => 'ᵍ',
            'h' => 'ʰ',
            'i' => 'ⁱ',
            'j' => 'ʲ',
            'k' => 'ᵏ',
            'l' => 'ˡ',
            'm' => 'ᵐ',
            'n' => 'ⁿ',
            'o' => 'ᵒ',
            'p' => 'ᵖ',
            'r' => 'ʳ',
            's' => 'ˢ',
            't' => 'ᵗ',
            'u' => 'ᵘ',
            'v' => 'ᵛ',
            'w' => 'ʷ',
            'x' => 'ˣ',
            'y' => 'ʸ',
            'z' => 'ᶻ',
            _ => return None,
        })
    }))
}

pub fn subscript_text(text: &str) -> Result<String> {
    Ok(map_chars(text, |ch| {
        Some(match ch {
            '0' => '₀',
            '1' => '₁',
            '2' => '₂',
            '3' => '₃',
            '4' => '₄',
            '5' => '₅',
            '6' => '₆',
            '7' => '₇',
            '8' => '₈',
            '9' => '₉',
            '+' => '₊',
            '-' => '₋',
            '=' => '₌',
            '(' => '₍',
            ')' => '₎',
            'a' => 'ₐ',
            'e' => 'ₑ',
            'h' => 'ₕ',
            'i' => 'ᵢ',
            'j' => 'ⱼ',
            'k' => 'ₖ',
            'l' => 'ₗ',
            'm' => 'ₘ',
            'n' => 'ₙ',
            'o' => 'ₒ',
            'p' => 'ₚ',
            'r' => 'ᵣ',
            's' => 'ₛ',
            't' => 'ₜ',
            'u' => 'ᵤ',
            'v' => 'ᵥ',
            'x' => 'ₓ',
            _ => return None,
        })
    }))
}
