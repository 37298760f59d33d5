//! Shared regex primitives: email, phone and word tokens

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Optional `+`, then a digit, eight or more digit/space/dash/paren characters,
/// and a closing digit.
const PHONE_PATTERN: &str = r"\+?\d[\d\s\-()]{8,}\d";

const WORD_PATTERN: &str = r"\w+";

pub fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid email regex"))
}

pub fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("Invalid phone regex"))
}

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(WORD_PATTERN).expect("Invalid word regex"))
}

/// Lower-cased set of maximal word-character runs in `text`.
pub fn word_set(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    word_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_set_is_lowercase_and_deduplicated() {
        let words = word_set("Python, python; SQL_server 2024!");

        assert_eq!(words.len(), 3);
        assert!(words.contains("python"));
        assert!(words.contains("sql_server"));
        assert!(words.contains("2024"));
    }

    #[test]
    fn test_word_set_empty_text() {
        assert!(word_set("").is_empty());
        assert!(word_set("  -- !! ").is_empty());
    }

    #[test]
    fn test_phone_requires_ten_characters() {
        assert!(phone_regex().is_match("+1 (555) 123-4567"));
        assert!(phone_regex().is_match("9876543210"));
        assert!(!phone_regex().is_match("12345"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(email_regex().is_match("first.last+tag@mail.example.org"));
        assert!(!email_regex().is_match("user@localhost"));
    }
}
