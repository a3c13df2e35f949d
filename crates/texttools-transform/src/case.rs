//! Case conversions and separator-style rewrites.
//!
//! Segment splitting treats every uppercase letter as the start of a new
//! segment, so `"APIResponse"` becomes `a_p_i_response` rather than
//! `api_response`. This matches the long-documented behavior of the
//! original tool set and is locked in by the validation tables; do not
//! "fix" it without a product decision.

use rand::Rng;

use texttools_model::Result;

pub fn upper_case(text: &str) -> Result<String> {
    Ok(text.to_uppercase())
}

pub fn lower_case(text: &str) -> Result<String> {
    Ok(text.to_lowercase())
}

/// Capitalize the first letter of each word, lowercasing the rest.
pub fn title_case(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    Ok(out)
}

/// Capitalize the first letter of each sentence, lowercasing the rest.
pub fn sentence_case(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut at_sentence_start = true;
    for ch in text.chars() {
        if matches!(ch, '.' | '!' | '?') {
            at_sentence_start = true;
            out.push(ch);
        } else if ch.is_alphabetic() && at_sentence_start {
            out.extend(ch.to_uppercase());
            at_sentence_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    Ok(out)
}

/// Capitalize the first letter of each word, leaving the rest untouched.
pub fn capitalize_words(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

/// Alternate letter case, starting lowercase: `hello` -> `hElLo`.
pub fn alternating_case(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut upper = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if upper {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            upper = !upper;
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

/// Swap the case of every letter.
pub fn inverse_case(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

/// Randomly upper- or lowercase each letter. Nondeterministic.
pub fn random_case(text: &str) -> Result<String> {
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if rng.gen_bool(0.5) {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

pub fn uppercase_first(text: &str) -> Result<String> {
    let mut chars = text.chars();
    Ok(match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    })
}

pub fn lowercase_first(text: &str) -> Result<String> {
    let mut chars = text.chars();
    Ok(match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    })
}

// ============================================================================
// Separator styles
// ============================================================================

/// Split text into lowercase segments.
///
/// Every uppercase letter opens a new segment (the documented
/// consecutive-capitals behavior); non-alphanumeric characters are
/// segment boundaries.
fn split_segments(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                current.extend(ch.to_lowercase());
            } else {
                current.push(ch);
            }
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn capitalize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn snake_case(text: &str) -> Result<String> {
    Ok(split_segments(text).join("_"))
}

pub fn kebab_case(text: &str) -> Result<String> {
    Ok(split_segments(text).join("-"))
}

pub fn camel_case(text: &str) -> Result<String> {
    let segments = split_segments(text);
    let mut out = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        if idx == 0 {
            out.push_str(segment);
        } else {
            out.push_str(&capitalize_segment(segment));
        }
    }
    Ok(out)
}

pub fn pascal_case(text: &str) -> Result<String> {
    Ok(split_segments(text)
        .iter()
        .map(|s| capitalize_segment(s))
        .collect())
}

pub fn constant_case(text: &str) -> Result<String> {
    Ok(split_segments(text)
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("_"))
}

pub fn dot_case(text: &str) -> Result<String> {
    Ok(split_segments(text).join("."))
}

pub fn path_case(text: &str) -> Result<String> {
    Ok(split_segments(text).join("/"))
}

pub fn train_case(text: &str) -> Result<String> {
    Ok(split_segments(text)
        .iter()
        .map(|s| capitalize_segment(s))
        .collect::<Vec<_>>()
        .join("-"))
}

/// URL-friendly slug: lowercase segments joined by hyphens.
pub fn slugify(text: &str) -> Result<String> {
    kebab_case(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_case_conversions() {
        assert_eq!(upper_case("hello world").unwrap(), "HELLO WORLD");
        assert_eq!(lower_case("HELLO World").unwrap(), "hello world");
        assert_eq!(title_case("hello WORLD").unwrap(), "Hello World");
        assert_eq!(capitalize_words("hello WORLD").unwrap(), "Hello WORLD");
        assert_eq!(uppercase_first("hello").unwrap(), "Hello");
        assert_eq!(lowercase_first("HELLO").unwrap(), "hELLO");
    }

    #[test]
    fn sentence_case_capitalizes_after_terminators() {
        assert_eq!(
            sentence_case("hello world. GOODBYE world! ok?").unwrap(),
            "Hello world. Goodbye world! Ok?"
        );
    }

    #[test]
    fn alternating_skips_non_letters() {
        assert_eq!(alternating_case("ab cd").unwrap(), "aB cD");
    }

    #[test]
    fn inverse_swaps_case() {
        assert_eq!(inverse_case("Hello World").unwrap(), "hELLO wORLD");
    }

    #[test]
    fn snake_case_basic() {
        assert_eq!(snake_case("Hello World").unwrap(), "hello_world");
        assert_eq!(snake_case("hello-world").unwrap(), "hello_world");
        assert_eq!(snake_case("  hello   world  ").unwrap(), "hello_world");
    }

    #[test]
    fn consecutive_capitals_split_per_character() {
        // Documented quirk: acronyms split per letter.
        assert_eq!(snake_case("APIResponse").unwrap(), "a_p_i_response");
        assert_eq!(kebab_case("APIResponse").unwrap(), "a-p-i-response");
        assert_eq!(camel_case("APIResponse").unwrap(), "aPIResponse");
    }

    #[test]
    fn separator_styles() {
        assert_eq!(camel_case("hello world foo").unwrap(), "helloWorldFoo");
        assert_eq!(pascal_case("hello world").unwrap(), "HelloWorld");
        assert_eq!(constant_case("hello world").unwrap(), "HELLO_WORLD");
        assert_eq!(dot_case("hello world").unwrap(), "hello.world");
        assert_eq!(path_case("hello world").unwrap(), "hello/world");
        assert_eq!(train_case("hello world").unwrap(), "Hello-World");
        assert_eq!(slugify("Hello, World!").unwrap(), "hello-world");
    }

    #[test]
    fn random_case_preserves_letters() {
        let out = random_case("hello").unwrap();
        assert_eq!(out.to_lowercase(), "hello");
    }
}
