//! Visual text effects: enclosed alphabets, combining marks, flipping,
//! and novelty rewrites.

use texttools_model::Result;

pub fn bubble_text(text: &str) -> Result<String> {
    Ok(text
        .chars()
        .map(|ch| match ch {
            'a'..='z' => char::from_u32(0x24D0 + (ch as u32 - 'a' as u32)).unwrap_or(ch),
            'A'..='Z' => char::from_u32(0x24B6 + (ch as u32 - 'A' as u32)).unwrap_or(ch),
            '1'..='9' => char::from_u32(0x2460 + (ch as u32 - '1' as u32)).unwrap_or(ch),
            '0' => '⓪',
            other => other,
        })
        .collect())
}

/// Fullwidth forms; ASCII space becomes an ideographic space.
pub fn fullwidth_text(text: &str) -> Result<String> {
    Ok(text
        .chars()
        .map(|ch| match ch {
            ' ' => '\u{3000}',
            '!'..='~' => char::from_u32(ch as u32 + 0xFEE0).unwrap_or(ch),
            other => other,
        })
        .collect())
}

const UPSIDE_DOWN: &[(char, char)] = &[
    ('a', 'ɐ'),
    ('b', 'q'),
    ('c', 'ɔ'),
    ('d', 'p'),
    ('e', 'ǝ'),
    ('f', 'ɟ'),
    ('g', 'ƃ'),
    ('h', 'ɥ'),
    ('i', 'ᴉ'),
    ('j', 'ɾ'),
    ('k', 'ʞ'),
    ('l', 'l'),
    ('m', 'ɯ'),
    ('n', 'u'),
    ('o', 'o'),
    ('p', 'd'),
    ('q', 'b'),
    ('r', 'ɹ'),
    ('s', 's'),
    ('t', 'ʇ'),
    ('u', 'n'),
    ('v', 'ʌ'),
    ('w', 'ʍ'),
    ('x', 'x'),
    ('y', 'ʎ'),
    ('z', 'z'),
    ('.', '˙'),
    (',', '\''),
    ('?', '¿'),
    ('!', '¡'),
    ('\'', ','),
    ('(', ')'),
    (')', '('),
    ('[', ']'),
    (']', '['),
    ('<', '>'),
    ('>', '<'),
    ('&', '⅋'),
    ('_', '‾'),
];

/// Flip the text upside down: lowercase, map each character, reverse.
pub fn upside_down_text(text: &str) -> Result<String> {
    Ok(text
        .to_lowercase()
        .chars()
        .map(|ch| {
            UPSIDE_DOWN
                .iter()
                .find(|(from, _)| *from == ch)
                .map_or(ch, |(_, to)| *to)
        })
        .rev()
        .collect())
}

fn with_combining(text: &str, mark: char) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        out.push(ch);
        if !ch.is_whitespace() {
            out.push(mark);
        }
    }
    out
}

pub fn strikethrough_text(text: &str) -> Result<String> {
    Ok(with_combining(text, '\u{0336}'))
}

pub fn underline_text(text: &str) -> Result<String> {
    Ok(with_combining(text, '\u{0332}'))
}

/// Insert a space between every character.
pub fn spaced_text(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len() * 2);
    let mut first = true;
    for ch in text.chars() {
        if !first {
            out.push(' ');
        }
        out.push(ch);
        first = false;
    }
    Ok(out)
}

pub fn leet_speak(text: &str) -> Result<String> {
    Ok(text
        .chars()
        .map(|ch| match ch.to_ascii_lowercase() {
            'a' => '4',
            'e' => '3',
            'i' => '1',
            'o' => '0',
            's' => '5',
            't' => '7',
            'b' => '8',
            other => {
                if ch.is_ascii_alphabetic() {
                    ch
                } else {
                    other
                }
            }
        })
        .collect())
}

/// Word-by-word Pig Latin: leading consonant cluster moves to the end
/// followed by `ay`; vowel-initial words take `way`.
pub fn pig_latin(text: &str) -> Result<String> {
    Ok(text
        .split_whitespace()
        .map(pig_latin_word)
        .collect::<Vec<_>>()
        .join(" "))
}

fn pig_latin_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if !lower.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return lower;
    }
    let split = lower
        .char_indices()
        .find(|(_, c)| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .map_or(lower.len(), |(idx, _)| idx);
    if split == 0 {
        format!("{lower}way")
    } else {
        format!("{}{}ay", &lower[split..], &lower[..split])
    }
}

/// Interleave a clapping-hands emoji between words.
pub fn clap_text(text: &str) -> Result<String> {
    Ok(text.split_whitespace().collect::<Vec<_>>().join(" \u{1F44F} "))
}

const MIRROR: &[(char, char)] = &[
    ('a', 'ɒ'),
    ('b', 'd'),
    ('c', 'ɔ'),
    ('d', 'b'),
    ('e', 'ɘ'),
    ('f', 'ꟻ'),
    ('g', 'ǫ'),
    ('j', 'Ⴑ'),
    ('k', 'ʞ'),
    ('p', 'q'),
    ('q', 'p'),
    ('r', 'ɿ'),
    ('s', 'ƨ'),
    ('y', 'ʏ'),
    ('z', 'ƹ'),
    ('?', '⸮'),
    ('(', ')'),
    (')', '('),
    ('[', ']'),
    (']', '['),
    ('<', '>'),
    ('>', '<'),
];

/// Mirror the text left-to-right: lowercase, swap mirrorable glyphs,
/// reverse. Characters without a mirrored form pass through.
pub fn mirror_text(text: &str) -> Result<String> {
    Ok(text
        .to_lowercase()
        .chars()
        .map(|ch| {
            MIRROR
                .iter()
                .find(|(from, _)| *from == ch)
                .map_or(ch, |(_, to)| *to)
        })
        .rev()
        .collect())
}

const NATO: &[&str] = &[
    "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

/// Spell out letters using the NATO phonetic alphabet; digits and other
/// characters pass through as their own tokens.
pub fn nato_alphabet(text: &str) -> Result<String> {
    let mut tokens = Vec::new();
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            let idx = (ch.to_ascii_uppercase() as u32 - 'A' as u32) as usize;
            tokens.push(NATO[idx].to_string());
        } else if !ch.is_whitespace() {
            tokens.push(ch.to_string());
        }
    }
    Ok(tokens.join(" "))
}
