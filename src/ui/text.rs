//! Plain-text helpers shared by the composer and the list pane.

/// Word-wrap `text` to `max_width` columns, measured in characters so
/// multi-byte UTF-8 strings are not cut mid-glyph. A width of 0 returns
/// the text unwrapped.
pub(crate) fn word_wrap(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    for line in text.lines() {
        if line.chars().count() <= max_width {
            result.push(line.to_string());
            continue;
        }
        let mut current = String::new();
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word_len <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                result.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            result.push(current);
        }
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}

/// Truncate to `max_width` characters, appending an ellipsis when cut.
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    let count = text.chars().count();
    if count <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max_width.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_line_passes_through() {
        assert_eq!(word_wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let wrapped = word_wrap("one two three four", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_zero_width_is_identity() {
        assert_eq!(word_wrap("anything at all", 0), vec!["anything at all"]);
    }

    #[test]
    fn wrap_counts_chars_not_bytes() {
        // 6 chars, 12 bytes — must not split
        assert_eq!(word_wrap("éééééé", 6), vec!["éééééé"]);
    }

    #[test]
    fn wrap_empty_yields_one_empty_line() {
        assert_eq!(word_wrap("", 10), vec![""]);
    }

    #[test]
    fn truncate_leaves_short_text() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("a long pull request title", 10), "a long pu…");
    }
}
