//! The transformation registry: a fixed, insertion-ordered table binding
//! each kebab-case key to its label, display category, and implementation.
//!
//! Keys resolve to function pointers at compile time, so a registered key
//! without an implementation cannot build. The registry itself is an
//! immutable value constructed once and injected by reference; there is no
//! global singleton and no runtime mutation API.

use std::collections::BTreeMap;

use serde::Serialize;

use texttools_model::Result;

use crate::{analyze, case, encode, generate, style, textops, visual};

/// A transformation implementation: pure function from input to output.
pub type TransformFn = fn(&str) -> Result<String>;

/// Display grouping for registry listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Case,
    Separator,
    Encoding,
    TextOps,
    Analysis,
    Style,
    Visual,
    Generator,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Case => "Case",
            Self::Separator => "Separator",
            Self::Encoding => "Encoding",
            Self::TextOps => "Text Operations",
            Self::Analysis => "Analysis",
            Self::Style => "Style",
            Self::Visual => "Visual",
            Self::Generator => "Generator",
        }
    }
}

/// Whether a transformation derives output from its input or synthesizes
/// it. Generators are exempt from the executor's empty-input rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    Derived,
    Generator,
}

/// One registry entry.
#[derive(Clone, Copy)]
pub struct TransformDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub kind: TransformKind,
    pub func: TransformFn,
}

impl std::fmt::Debug for TransformDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("category", &self.category)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

const fn derived(
    key: &'static str,
    label: &'static str,
    category: Category,
    func: TransformFn,
) -> TransformDescriptor {
    TransformDescriptor {
        key,
        label,
        category,
        kind: TransformKind::Derived,
        func,
    }
}

const fn generator(key: &'static str, label: &'static str, func: TransformFn) -> TransformDescriptor {
    TransformDescriptor {
        key,
        label,
        category: Category::Generator,
        kind: TransformKind::Generator,
        func,
    }
}

/// The built-in transformation table, in display order.
const BUILTIN: &[TransformDescriptor] = &[
    // Case
    derived("upper-case", "Upper Case", Category::Case, case::upper_case),
    derived("lower-case", "Lower Case", Category::Case, case::lower_case),
    derived("title-case", "Title Case", Category::Case, case::title_case),
    derived("sentence-case", "Sentence Case", Category::Case, case::sentence_case),
    derived("capitalize-words", "Capitalize Each Word", Category::Case, case::capitalize_words),
    derived("alternating-case", "Alternating Case", Category::Case, case::alternating_case),
    derived("inverse-case", "Inverse Case", Category::Case, case::inverse_case),
    derived("random-case", "Random Case", Category::Case, case::random_case),
    derived("uppercase-first", "Uppercase First Letter", Category::Case, case::uppercase_first),
    derived("lowercase-first", "Lowercase First Letter", Category::Case, case::lowercase_first),
    // Separator styles
    derived("snake-case", "Snake Case", Category::Separator, case::snake_case),
    derived("camel-case", "Camel Case", Category::Separator, case::camel_case),
    derived("pascal-case", "Pascal Case", Category::Separator, case::pascal_case),
    derived("kebab-case", "Kebab Case", Category::Separator, case::kebab_case),
    derived("constant-case", "Constant Case", Category::Separator, case::constant_case),
    derived("dot-case", "Dot Case", Category::Separator, case::dot_case),
    derived("path-case", "Path Case", Category::Separator, case::path_case),
    derived("train-case", "Train Case", Category::Separator, case::train_case),
    derived("slugify", "Slugify", Category::Separator, case::slugify),
    // Encoding and ciphers
    derived("base64-encode", "Base64 Encode", Category::Encoding, encode::base64_encode),
    derived("base64-decode", "Base64 Decode", Category::Encoding, encode::base64_decode),
    derived("url-encode", "URL Encode", Category::Encoding, encode::url_encode),
    derived("url-decode", "URL Decode", Category::Encoding, encode::url_decode),
    derived("hex-encode", "Hex Encode", Category::Encoding, encode::hex_encode),
    derived("hex-decode", "Hex Decode", Category::Encoding, encode::hex_decode),
    derived("binary-encode", "Binary Encode", Category::Encoding, encode::binary_encode),
    derived("binary-decode", "Binary Decode", Category::Encoding, encode::binary_decode),
    derived("ascii-encode", "Character Codes", Category::Encoding, encode::ascii_encode),
    derived("ascii-decode", "From Character Codes", Category::Encoding, encode::ascii_decode),
    derived("morse-encode", "Morse Code", Category::Encoding, encode::morse_encode),
    derived("morse-decode", "Morse Decode", Category::Encoding, encode::morse_decode),
    derived("rot13", "ROT13", Category::Encoding, encode::rot13),
    derived("caesar-cipher", "Caesar Cipher", Category::Encoding, encode::caesar_cipher),
    derived("caesar-decipher", "Caesar Decipher", Category::Encoding, encode::caesar_decipher),
    derived("html-encode", "HTML Entities Encode", Category::Encoding, encode::html_encode),
    derived("html-decode", "HTML Entities Decode", Category::Encoding, encode::html_decode),
    derived("unicode-escape", "Unicode Escape", Category::Encoding, encode::unicode_escape),
    derived("number-to-roman", "Number to Roman", Category::Encoding, encode::number_to_roman),
    derived("roman-to-number", "Roman to Number", Category::Encoding, encode::roman_to_number),
    // Text operations
    derived("reverse-text", "Reverse Text", Category::TextOps, textops::reverse_text),
    derived("reverse-words", "Reverse Word Order", Category::TextOps, textops::reverse_words),
    derived("reverse-each-word", "Reverse Each Word", Category::TextOps, textops::reverse_each_word),
    derived("remove-spaces", "Remove Spaces", Category::TextOps, textops::remove_spaces),
    derived("remove-extra-spaces", "Remove Extra Spaces", Category::TextOps, textops::remove_extra_spaces),
    derived("remove-punctuation", "Remove Punctuation", Category::TextOps, textops::remove_punctuation),
    derived("remove-numbers", "Remove Numbers", Category::TextOps, textops::remove_numbers),
    derived("remove-vowels", "Remove Vowels", Category::TextOps, textops::remove_vowels),
    derived("remove-consonants", "Remove Consonants", Category::TextOps, textops::remove_consonants),
    derived("remove-line-breaks", "Remove Line Breaks", Category::TextOps, textops::remove_line_breaks),
    derived("extract-numbers", "Extract Numbers", Category::TextOps, textops::extract_numbers),
    derived("extract-letters", "Extract Letters", Category::TextOps, textops::extract_letters),
    derived("add-line-numbers", "Add Line Numbers", Category::TextOps, textops::add_line_numbers),
    derived("remove-empty-lines", "Remove Empty Lines", Category::TextOps, textops::remove_empty_lines),
    derived("remove-duplicate-lines", "Remove Duplicate Lines", Category::TextOps, textops::remove_duplicate_lines),
    derived("sort-lines", "Sort Lines", Category::TextOps, textops::sort_lines),
    derived("reverse-lines", "Reverse Line Order", Category::TextOps, textops::reverse_lines),
    derived("trim-whitespace", "Trim Whitespace", Category::TextOps, textops::trim_whitespace),
    derived("add-quotes", "Add Quotes", Category::TextOps, textops::add_quotes),
    derived("shuffle-words", "Shuffle Words", Category::TextOps, textops::shuffle_words),
    derived("acronym-generator", "Acronym Generator", Category::TextOps, textops::acronym),
    derived("hashtag-generator", "Hashtag Generator", Category::TextOps, textops::hashtags),
    // Analysis
    derived("word-count", "Word Count", Category::Analysis, analyze::word_count),
    derived("character-count", "Character Count", Category::Analysis, analyze::character_count),
    derived("line-count", "Line Count", Category::Analysis, analyze::line_count),
    derived("sentence-count", "Sentence Count", Category::Analysis, analyze::sentence_count),
    derived("vowel-count", "Vowel Count", Category::Analysis, analyze::vowel_count),
    derived("consonant-count", "Consonant Count", Category::Analysis, analyze::consonant_count),
    derived("longest-word", "Longest Word", Category::Analysis, analyze::longest_word),
    derived("average-word-length", "Average Word Length", Category::Analysis, analyze::average_word_length),
    derived("word-frequency", "Word Frequency", Category::Analysis, analyze::word_frequency),
    // Styled alphabets
    derived("bold-text", "Bold Text", Category::Style, style::bold_text),
    derived("italic-text", "Italic Text", Category::Style, style::italic_text),
    derived("bold-italic-text", "Bold Italic Text", Category::Style, style::bold_italic_text),
    derived("cursive-text", "Cursive Text", Category::Style, style::cursive_text),
    derived("double-struck-text", "Double-Struck Text", Category::Style, style::double_struck_text),
    derived("fraktur-text", "Fraktur Text", Category::Style, style::fraktur_text),
    derived("monospace-text", "Monospace Text", Category::Style, style::monospace_text),
    derived("sans-serif-text", "Sans-Serif Text", Category::Style, style::sans_serif_text),
    derived("small-caps", "Small Caps", Category::Style, style::small_caps),
    derived("superscript-text", "Superscript", Category::Style, style::superscript_text),
    derived("subscript-text", "Subscript", Category::Style, style::subscript_text),
    // Visual effects
    derived("bubble-text", "Bubble Text", Category::Visual, visual::bubble_text),
    derived("fullwidth-text", "Fullwidth Text", Category::Visual, visual::fullwidth_text),
    derived("upside-down-text", "Upside Down Text", Category::Visual, visual::upside_down_text),
    derived("strikethrough-text", "Strikethrough Text", Category::Visual, visual::strikethrough_text),
    derived("underline-text", "Underline Text", Category::Visual, visual::underline_text),
    derived("spaced-text", "Spaced Text", Category::Visual, visual::spaced_text),
    derived("leet-speak", "Leet Speak", Category::Visual, visual::leet_speak),
    derived("pig-latin", "Pig Latin", Category::Visual, visual::pig_latin),
    derived("clap-text", "Clap Text", Category::Visual, visual::clap_text),
    derived("mirror-text", "Mirror Text", Category::Visual, visual::mirror_text),
    derived("nato-alphabet", "NATO Alphabet", Category::Visual, visual::nato_alphabet),
    // Generators (empty-input exempt)
    generator("uuid-generate", "UUID Generator", generate::uuid_generate),
    generator("password-generate", "Password Generator", generate::password_generate),
    generator("random-number", "Random Number", generate::random_number),
    generator("random-hex-color", "Random Hex Color", generate::random_hex_color),
    generator("random-date", "Random Date", generate::random_date),
    generator("random-phone-number", "Random Phone Number", generate::random_phone_number),
    generator("random-email", "Random Email", generate::random_email),
    generator("random-ip", "Random IP Address", generate::random_ip),
    generator("lorem-ipsum", "Lorem Ipsum", generate::lorem_ipsum),
];

/// Immutable transformation registry.
///
/// Entries keep their table order for stable display; lookups go through
/// a key index.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<TransformDescriptor>,
    index: BTreeMap<&'static str, usize>,
}

impl Registry {
    /// Build the registry from the built-in table.
    ///
    /// # Panics
    ///
    /// Panics on duplicate keys. That is a table-authoring bug, caught the
    /// first time any process constructs the registry.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN)
    }

    /// Build a registry from an explicit descriptor table. The built-in
    /// registry goes through here too; harnesses use it to validate ad-hoc
    /// tables.
    ///
    /// # Panics
    ///
    /// Panics on duplicate keys.
    pub fn from_entries(entries: &[TransformDescriptor]) -> Self {
        let mut index = BTreeMap::new();
        for (position, descriptor) in entries.iter().enumerate() {
            let previous = index.insert(descriptor.key, position);
            assert!(
                previous.is_none(),
                "duplicate transformation key: {}",
                descriptor.key
            );
        }
        Self {
            entries: entries.to_vec(),
            index,
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&TransformDescriptor> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in display (table) order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|d| d.key)
    }

    /// Descriptors in display (table) order.
    pub fn descriptors(&self) -> &[TransformDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
