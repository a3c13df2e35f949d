//! Counting and measurement transformations. Outputs are plain numbers
//! (or words) rendered as strings.

use texttools_model::Result;

pub fn word_count(text: &str) -> Result<String> {
    Ok(text.split_whitespace().count().to_string())
}

pub fn character_count(text: &str) -> Result<String> {
    Ok(text.chars().count().to_string())
}

pub fn line_count(text: &str) -> Result<String> {
    Ok(text.lines().count().to_string())
}

/// Sentences are delimited by `.`, `!` or `?`.
pub fn sentence_count(text: &str) -> Result<String> {
    let count = text
        .split(['.', '!', '?'])
        .filter(|part| !part.trim().is_empty())
        .count();
    Ok(count.to_string())
}

pub fn vowel_count(text: &str) -> Result<String> {
    let count = text
        .chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count();
    Ok(count.to_string())
}

pub fn consonant_count(text: &str) -> Result<String> {
    let count = text
        .chars()
        .filter(|c| {
            c.is_ascii_alphabetic()
                && !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
        })
        .count();
    Ok(count.to_string())
}

/// The first longest word; empty output for whitespace-only input.
pub fn longest_word(text: &str) -> Result<String> {
    let longest = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .max_by_key(|w| w.chars().count())
        .unwrap_or("");
    Ok(longest.to_string())
}

/// Per-word occurrence counts, lowercased, one `word: count` line each.
/// Ordered by count descending, then alphabetically.
pub fn word_frequency(text: &str) -> Result<String> {
    let mut counts = std::collections::BTreeMap::new();
    for word in text.split_whitespace() {
        let cleaned: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        if !cleaned.is_empty() {
            *counts.entry(cleaned).or_insert(0usize) += 1;
        }
    }
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(entries
        .iter()
        .map(|(word, count)| format!("{word}: {count}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Mean word length in characters, to two decimal places.
pub fn average_word_length(text: &str) -> Result<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Ok("0".to_string());
    }
    let total: usize = words.iter().map(|w| w.chars().count()).sum();
    Ok(format!("{:.2}", total as f64 / words.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        assert_eq!(word_count("one two three").unwrap(), "3");
        assert_eq!(character_count("héllo").unwrap(), "5");
        assert_eq!(line_count("a\nb\nc").unwrap(), "3");
        assert_eq!(sentence_count("One. Two! Three?").unwrap(), "3");
        assert_eq!(vowel_count("hello").unwrap(), "2");
        assert_eq!(consonant_count("hello").unwrap(), "3");
    }

    #[test]
    fn longest_word_ignores_punctuation() {
        assert_eq!(longest_word("hi, elephant. cat").unwrap(), "elephant");
        assert_eq!(longest_word("   ").unwrap(), "");
    }

    #[test]
    fn word_frequency_orders_by_count_then_word() {
        assert_eq!(
            word_frequency("the cat and the dog").unwrap(),
            "the: 2\nand: 1\ncat: 1\ndog: 1"
        );
        assert_eq!(word_frequency("Hi, hi!").unwrap(), "hi: 2");
    }

    #[test]
    fn average_length() {
        assert_eq!(average_word_length("ab abcd").unwrap(), "3.00");
        assert_eq!(average_word_length("").unwrap(), "0");
    }
}
