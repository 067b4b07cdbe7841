//! Text normalization.
//!
//! Every character that is not an ASCII letter acts as a separator, runs of
//! separators collapse, and the surviving words are lowercased. Nothing here
//! can fail: empty or fully non-alphabetic input simply yields no tokens.

/// Splits raw text into lowercase alphabetic tokens.
///
/// The iterator is lazy and borrows the input.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
}

/// Normalizes a single user-supplied word.
///
/// Returns `None` unless the input normalizes to exactly one token, so
/// `"test@word"` (two tokens) and `"42"` (none) can never match a node.
pub fn normalize_word(raw: &str) -> Option<String> {
    let mut tokens = tokenize(raw);
    let word = tokens.next()?;
    match tokens.next() {
        Some(_) => None,
        None => Some(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        tokenize(text).collect()
    }

    #[test]
    fn test_case_and_spacing_are_normalized() {
        assert_eq!(tokens("The Cat"), tokens("the   cat"));
        assert_eq!(tokens("The Cat"), ["the", "cat"]);
    }

    #[test]
    fn test_punctuation_and_digits_split_words() {
        assert_eq!(
            tokens("Hello, world! It's 2024...ok"),
            ["hello", "world", "it", "s", "ok"]
        );
    }

    #[test]
    fn test_line_breaks_are_whitespace() {
        assert_eq!(tokens("one\r\ntwo\tthree\n"), ["one", "two", "three"]);
    }

    #[test]
    fn test_non_ascii_letters_are_separators() {
        assert_eq!(tokens("café au lait"), ["caf", "au", "lait"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokens("").is_empty());
        assert!(tokens("  123 !! ").is_empty());
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Apple"), Some("apple".to_string()));
        assert_eq!(normalize_word("  data! "), Some("data".to_string()));
        assert_eq!(normalize_word("test@word"), None);
        assert_eq!(normalize_word(""), None);
        assert_eq!(normalize_word("123"), None);
    }
}
