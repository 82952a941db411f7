use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

lazy_static! {
    // `\w` is Unicode-aware, so CJK ideographs and other letters survive
    static ref DISALLOWED_REGEX: Regex = Regex::new(r"[^\w\s-]").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

const FALLBACK_PREFIX: &str = "heading-";
const FALLBACK_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const FALLBACK_LEN: usize = 9;

/// Generate an anchor ID from heading text.
///
/// Deterministic for any text that keeps at least one word character,
/// whitespace run or hyphen. Otherwise a random `heading-xxxxxxxxx` ID is
/// returned.
pub fn generate_id(text: &str) -> String {
    let cleaned = DISALLOWED_REGEX.replace_all(text.trim(), "");
    let id = WHITESPACE_REGEX
        .replace_all(&cleaned, "-")
        .to_ascii_lowercase();

    if id.is_empty() {
        random_id()
    } else {
        id
    }
}

fn random_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..FALLBACK_LEN)
        .map(|_| FALLBACK_ALPHABET[rng.gen_range(0..FALLBACK_ALPHABET.len())] as char)
        .collect();

    format!("{}{}", FALLBACK_PREFIX, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_fallback(id: &str) -> bool {
        Regex::new(r"^heading-[a-z0-9]{9}$").unwrap().is_match(id)
    }

    #[test]
    fn test_generate_id() {
        let test_cases = vec![
            ("Introduction", "introduction"),
            ("  Getting Started  ", "getting-started"),
            ("What's new?", "whats-new"),
            ("snake_case and kebab-case", "snake_case-and-kebab-case"),
            ("Tabs\tand\n\nnewlines", "tabs-and-newlines"),
            ("Version 2.0 (beta)", "version-20-beta"),
        ];

        for (input, expected) in test_cases {
            assert_eq!(generate_id(input), expected);
        }
    }

    #[test]
    fn test_cjk_is_preserved() {
        assert_eq!(generate_id("概要"), "概要");
        assert_eq!(generate_id("第一章 Overview"), "第一章-overview");
    }

    #[test]
    fn test_only_ascii_is_lowercased() {
        assert_eq!(generate_id("ÉCOLE Rust"), "École-rust");
        assert_eq!(generate_id("ABC"), "abc");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate_id("Same Text"), generate_id("Same Text"));
    }

    #[test]
    fn test_fallback_for_degenerate_text() {
        for input in ["", "   ", "!!!", "🎉", "(?)"] {
            let id = generate_id(input);
            assert!(is_fallback(&id), "unexpected id {:?} for {:?}", id, input);
        }
    }
}
