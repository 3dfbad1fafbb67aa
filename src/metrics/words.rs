//! Word counting

/// Word characters as in a `\w` class without Unicode: `[A-Za-z0-9_]`
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Count word tokens (`\w+` runs over `[A-Za-z0-9_]`) in `text`.
///
/// Punctuation splits tokens, so `two-three` counts as two words. Any
/// other character, accented letters included, acts as a separator too.
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for c in text.chars() {
        if is_word_char(c) {
            if !in_word {
                count += 1;
                in_word = true;
            }
        } else {
            in_word = false;
        }
    }
    count
}
