use crate::constants::MAX_POST_LENGTH;
use std::fmt;

/// Post body that has been trimmed, truncated and HTML-escaped.
///
/// Only [`sanitize`] builds one, so anything the board stores is safe to
/// embed in the rendered page as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content(String);

impl Content {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clean raw user input for storage.
///
/// Truncation counts characters, not bytes, and happens before escaping,
/// so the escaped result may be longer than `MAX_POST_LENGTH`.
pub fn sanitize(raw: &str) -> Content {
    let trimmed = raw.trim();
    let truncated = match trimmed.char_indices().nth(MAX_POST_LENGTH) {
        Some((end, _)) => &trimmed[..end],
        None => trimmed,
    };

    Content(escape_html(truncated))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        let table = [
            ("Hello world!", "Hello world!"),
            (
                "<script>alert('hello')</script>",
                "&lt;script&gt;alert(&#39;hello&#39;)&lt;/script&gt;",
            ),
            ("\"quoted\" & more", "&#34;quoted&#34; &amp; more"),
            ("                               ", ""),
        ];

        for (input, want) in table {
            assert_eq!(sanitize(input).as_str(), want, "sanitize({input:?})");
        }
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(sanitize(" \t\n ").is_empty());
        assert!(sanitize("").is_empty());
    }

    #[test]
    fn truncates_long_input() {
        let input = "a".repeat(MAX_POST_LENGTH + 1);
        assert_eq!(sanitize(&input).into_inner(), "a".repeat(MAX_POST_LENGTH));
    }

    #[test]
    fn truncates_before_escaping() {
        let input = "<".repeat(MAX_POST_LENGTH + 10);
        let got = sanitize(&input);
        assert_eq!(got.as_str(), "&lt;".repeat(MAX_POST_LENGTH));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let input = "é".repeat(MAX_POST_LENGTH + 5);
        assert_eq!(sanitize(&input).as_str().chars().count(), MAX_POST_LENGTH);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize("  hi there \n").as_str(), "hi there");
    }
}
