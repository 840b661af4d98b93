//! Word tokenizer shared by indexing and querying.
//!
//! Terms match by exact string equality after this step, so the same
//! function must run over documents and queries.

/// Tokens of this many characters or fewer are dropped as noise.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Split text into lowercase word tokens.
///
/// Every character that is not a letter, digit or underscore acts as a
/// separator. Tokens shorter than [`MIN_TOKEN_CHARS`] characters are
/// discarded. Length is counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use uxlex::core::query::tokenize;
///
/// assert_eq!(tokenize("Dark-Mode UI, OLED!"), vec!["dark", "mode", "oled"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
