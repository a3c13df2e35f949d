//! Line- and word-level text operations.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;

use texttools_model::Result;

pub fn reverse_text(text: &str) -> Result<String> {
    Ok(text.chars().rev().collect())
}

/// Reverse word order, collapsing runs of whitespace to single spaces.
pub fn reverse_words(text: &str) -> Result<String> {
    Ok(text.split_whitespace().rev().collect::<Vec<_>>().join(" "))
}

/// Reverse the letters inside each word, keeping word order.
pub fn reverse_each_word(text: &str) -> Result<String> {
    Ok(text
        .split_whitespace()
        .map(|w| w.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join(" "))
}

pub fn remove_spaces(text: &str) -> Result<String> {
    Ok(text.chars().filter(|c| !c.is_whitespace()).collect())
}

/// Collapse runs of spaces and tabs to a single space, trimming each line.
pub fn remove_extra_spaces(text: &str) -> Result<String> {
    Ok(text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn remove_punctuation(text: &str) -> Result<String> {
    Ok(text.chars().filter(|c| !c.is_ascii_punctuation()).collect())
}

pub fn remove_numbers(text: &str) -> Result<String> {
    Ok(text.chars().filter(|c| !c.is_ascii_digit()).collect())
}

fn is_ascii_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

pub fn remove_vowels(text: &str) -> Result<String> {
    Ok(text.chars().filter(|c| !is_ascii_vowel(*c)).collect())
}

/// Remove consonants, keeping vowels and every non-letter character.
pub fn remove_consonants(text: &str) -> Result<String> {
    Ok(text
        .chars()
        .filter(|c| !c.is_ascii_alphabetic() || is_ascii_vowel(*c))
        .collect())
}

pub fn remove_line_breaks(text: &str) -> Result<String> {
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Keep only digits, preserving the gaps between digit runs as single spaces.
pub fn extract_numbers(text: &str) -> Result<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    Ok(runs.join(" "))
}

pub fn extract_letters(text: &str) -> Result<String> {
    Ok(text.chars().filter(|c| c.is_alphabetic()).collect())
}

/// Prefix each line with a 1-based number.
pub fn add_line_numbers(text: &str) -> Result<String> {
    Ok(text
        .lines()
        .enumerate()
        .map(|(idx, line)| format!("{}. {line}", idx + 1))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn remove_empty_lines(text: &str) -> Result<String> {
    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Drop repeated lines, keeping the first occurrence in place.
pub fn remove_duplicate_lines(text: &str) -> Result<String> {
    let mut seen = BTreeSet::new();
    Ok(text
        .lines()
        .filter(|line| seen.insert(line.to_string()))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn sort_lines(text: &str) -> Result<String> {
    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort_unstable();
    Ok(lines.join("\n"))
}

pub fn reverse_lines(text: &str) -> Result<String> {
    Ok(text.lines().rev().collect::<Vec<_>>().join("\n"))
}

pub fn trim_whitespace(text: &str) -> Result<String> {
    Ok(text.trim().to_string())
}

/// Wrap each line in double quotes.
pub fn add_quotes(text: &str) -> Result<String> {
    Ok(text
        .lines()
        .map(|line| format!("\"{line}\""))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Shuffle word order. Nondeterministic.
pub fn shuffle_words(text: &str) -> Result<String> {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    words.shuffle(&mut rand::thread_rng());
    Ok(words.join(" "))
}

/// First letters of each word, uppercased: `as soon as possible` -> `ASAP`.
pub fn acronym(text: &str) -> Result<String> {
    Ok(text
        .split_whitespace()
        .filter_map(|w| w.chars().find(|c| c.is_alphanumeric()))
        .flat_map(char::to_uppercase)
        .collect())
}

/// Capitalized words prefixed with `#`: `hello world` -> `#Hello #World`.
pub fn hashtags(text: &str) -> Result<String> {
    Ok(text
        .split_whitespace()
        .map(|word| {
            let cleaned: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
            let mut chars = cleaned.chars();
            match chars.next() {
                Some(first) => format!(
                    "#{}{}",
                    first.to_uppercase(),
                    chars.flat_map(char::to_lowercase).collect::<String>()
                ),
                None => String::new(),
            }
        })
        .filter(|tag| tag.len() > 1)
        .collect::<Vec<_>>()
        .join(" "))
}
