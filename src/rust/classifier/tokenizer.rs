/// Symbols that may appear inside a token alongside alphanumeric characters.
const TOKEN_SYMBOLS: [char; 3] = ['\'', '-', '_'];

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || TOKEN_SYMBOLS.contains(&c)
}

/// Splits text into lowercase tokens, in order.
///
/// A token is a maximal run of alphanumeric characters and the symbols `'`, `-`
/// and `_`. Every other character separates tokens and never appears in the
/// output, so the result contains no empty strings.
///
/// Training and classification both go through this function; the two must
/// agree on what a word is.
///
/// # Example
/// ```
/// use naive_sentiment::tokenize;
///
/// assert_eq!(tokenize("Hello World 1234-5678"), vec!["hello", "world", "1234-5678"]);
/// assert!(tokenize("!!! ??? ...").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if is_token_char(c) {
            current.extend(c.to_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
