use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

/// Pool the word round draws its secret from.
pub const WORD_LIST: &[&str] = &[
    "python",
    "computer",
    "programming",
    "gemini",
    "miniproject",
    "development",
    "challenge",
    "algorithm",
];

/// Inclusive range the number round draws its secret from.
pub const SECRET_NUMBER_RANGE: RangeInclusive<u32> = 1..=100;

/// Pick a uniformly random secret word.
pub fn random_word() -> &'static str {
    WORD_LIST
        .choose(&mut rand::thread_rng())
        .copied()
        .expect("word list is non-empty")
}

/// Pick a uniformly random secret number.
pub fn random_number() -> u32 {
    rand::thread_rng().gen_range(SECRET_NUMBER_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_is_usable() {
        assert!(!WORD_LIST.is_empty());
        for word in WORD_LIST {
            assert!(!word.is_empty());
            // guesses are lowercased before comparison, so secrets must be too
            assert_eq!(*word, word.to_lowercase().as_str());
        }
    }

    #[test]
    fn test_random_word_is_a_list_member() {
        for _ in 0..50 {
            let word = random_word();
            assert!(WORD_LIST.contains(&word));
        }
    }

    #[test]
    fn test_random_number_stays_in_range() {
        for _ in 0..200 {
            let n = random_number();
            assert!(SECRET_NUMBER_RANGE.contains(&n));
        }
    }
}
