//! Palindrome checker - normalization and comparison
//!
//! Decides whether text reads the same forwards and backwards once it is
//! reduced to comparable content.
//!
//! # Pipeline
//!
//! `raw text → normalize (keep ASCII alphanumerics, lowercase) → compare with reverse`
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces the same result
//! - **Pure**: no side effects, no I/O, no shared state
//! - **Stable**: normalization never reorders surviving characters
//! - **O(n)**: one pass to normalize, one pass to compare

use crate::error::{Error, Result};

// ── Result Types ──────────────────────────────────────────

/// Verdict of a palindrome check, as recorded in the history log
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    Palindrome,
    NotPalindrome,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Palindrome => write!(f, "Palindrome"),
            Verdict::NotPalindrome => write!(f, "Not a Palindrome"),
        }
    }
}

/// Outcome of a single check: the verdict plus the string it was based on
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckResult {
    /// Whether the normalized text equals its own reverse
    pub is_palindrome: bool,
    /// The normalized comparison string, kept so callers can show *why*
    /// a verdict was reached
    pub cleaned: String,
}

impl CheckResult {
    /// Project the boolean verdict onto the status enum used by history
    pub fn verdict(&self) -> Verdict {
        if self.is_palindrome {
            Verdict::Palindrome
        } else {
            Verdict::NotPalindrome
        }
    }
}

// ── Public API ─────────────────────────────────────────────

/// Normalize text to its comparison form.
///
/// Keeps only ASCII letters and digits, lowercased, in their original
/// order. A single left-to-right pass; non-ASCII characters are dropped
/// along with punctuation and whitespace.
///
/// Input with no alphanumeric content normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Check whether text is a palindrome.
///
/// Normalizes the input, then compares the normalized string with its own
/// reverse. Case, punctuation, and whitespace are ignored.
///
/// Only a truly empty input is rejected; whitespace-only input passes
/// through to the normalizer. Input that normalizes to the empty string
/// (all punctuation, or whitespace) is reported as a palindrome, since
/// the empty string trivially equals its own reverse. Callers that want
/// to treat "no comparable content" specially can test
/// `result.cleaned.is_empty()`.
///
/// # Guarantees
/// - Deterministic: same input always produces the same `CheckResult`
/// - Pure: no state is read or written
///
/// # Errors
/// Returns `Error::EmptyInput` when `text` is the empty string.
pub fn check(text: &str) -> Result<CheckResult> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let cleaned = normalize(text);
    let is_palindrome = cleaned.chars().eq(cleaned.chars().rev());

    Ok(CheckResult {
        is_palindrome,
        cleaned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Literal scenarios ──────────────────────────────

    #[test]
    fn test_level_is_palindrome() {
        let result = check("Level").unwrap();
        assert!(result.is_palindrome);
        assert_eq!(result.cleaned, "level");
    }

    #[test]
    fn test_hello_is_not_palindrome() {
        let result = check("Hello").unwrap();
        assert!(!result.is_palindrome);
        assert_eq!(result.cleaned, "hello");
    }

    #[test]
    fn test_panama_phrase_is_palindrome() {
        let result = check("A man, a plan, a canal: Panama").unwrap();
        assert!(result.is_palindrome);
        assert_eq!(result.cleaned, "amanaplanacanalpanama");
    }

    #[test]
    fn test_digits_are_compared_too() {
        let result = check("12321").unwrap();
        assert!(result.is_palindrome);
        assert_eq!(result.cleaned, "12321");
    }

    // ── Case and punctuation insensitivity ─────────────

    #[test]
    fn test_case_and_punctuation_do_not_matter() {
        // Identical in both fields, not just the verdict
        assert_eq!(check("Madam").unwrap(), check("M.a.d.a.m").unwrap());
    }

    #[test]
    fn test_mixed_case_single_word() {
        assert!(check("RaceCar").unwrap().is_palindrome);
        assert!(!check("Palindrome").unwrap().is_palindrome);
    }

    // ── Empty and degenerate input ─────────────────────

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(check(""), Err(Error::EmptyInput));
    }

    #[test]
    fn test_whitespace_only_input_is_accepted() {
        // Only "" fails the fail-fast check; whitespace-only input reaches
        // the normalizer, cleans to "", and "" equals its own reverse.
        let result = check("   ").unwrap();
        assert!(result.is_palindrome);
        assert_eq!(result.cleaned, "");
    }

    #[test]
    fn test_all_punctuation_cleans_to_empty_and_counts_as_palindrome() {
        let result = check("?!... --- !!!").unwrap();
        assert!(result.is_palindrome);
        assert_eq!(result.cleaned, "");
    }

    // ── Normalization properties ───────────────────────

    /// True when `needle` appears in `haystack` in order (not necessarily
    /// contiguously).
    fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let mut chars = needle.chars().peekable();
        for c in haystack.chars() {
            if chars.peek() == Some(&c) {
                chars.next();
            }
        }
        chars.peek().is_none()
    }

    #[test]
    fn test_cleaned_contains_only_lowercase_ascii_alphanumerics() {
        let inputs = [
            "A man, a plan, a canal: Panama",
            "No 'x' in Nixon",
            "Was it a car or a cat I saw?",
            "12321",
            "Hello, World!",
        ];
        for input in inputs {
            let cleaned = normalize(input);
            assert!(
                cleaned
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "cleaned form of {:?} contains a non-alphanumeric: {:?}",
                input,
                cleaned
            );
        }
    }

    #[test]
    fn test_cleaned_preserves_character_order() {
        let inputs = ["A man, a plan, a canal: Panama", "Hello, World!", "a1b2c3"];
        for input in inputs {
            let cleaned = normalize(input);
            assert!(
                is_subsequence(&cleaned, &input.to_ascii_lowercase()),
                "cleaned form of {:?} is not an in-order subsequence: {:?}",
                input,
                cleaned
            );
            // Exactly the non-alphanumerics were removed, nothing else
            let kept = input.chars().filter(|c| c.is_ascii_alphanumeric()).count();
            assert_eq!(cleaned.len(), kept, "wrong character count for {:?}", input);
        }
    }

    #[test]
    fn test_non_ascii_characters_are_dropped() {
        // ASCII-only filtering is the documented policy: accented letters
        // are stripped, not transliterated.
        assert_eq!(normalize("café"), "caf");
        assert_eq!(normalize("Ära"), "ra");
        assert_eq!(normalize("日本語"), "");
    }

    // ── Verdict round-trip ─────────────────────────────

    #[test]
    fn test_verdict_iff_cleaned_equals_its_reverse() {
        let inputs = [
            "Level",
            "Hello",
            "A man, a plan, a canal: Panama",
            "12321",
            "not a palindrome",
            "Was it a car or a cat I saw?",
        ];
        for input in inputs {
            let result = check(input).unwrap();
            let reversed: String = result.cleaned.chars().rev().collect();
            assert_eq!(
                result.is_palindrome,
                result.cleaned == reversed,
                "verdict disagrees with reverse comparison for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_verdict_projection_matches_flag() {
        assert_eq!(check("Level").unwrap().verdict(), Verdict::Palindrome);
        assert_eq!(check("Hello").unwrap().verdict(), Verdict::NotPalindrome);
    }

    #[test]
    fn test_verdict_display_matches_recorded_status_strings() {
        assert_eq!(Verdict::Palindrome.to_string(), "Palindrome");
        assert_eq!(Verdict::NotPalindrome.to_string(), "Not a Palindrome");
    }

    // ── Determinism ────────────────────────────────────

    #[test]
    fn test_determinism_100_iterations() {
        let first = check("A man, a plan, a canal: Panama").unwrap();
        for i in 0..100 {
            let result = check("A man, a plan, a canal: Panama").unwrap();
            assert_eq!(first, result, "Non-determinism at iteration {}", i);
        }
    }
}
