//! utilities used across postrs
use tracing::level_filters::LevelFilter;

/// the marker appended to text that got cut short
pub const ELLIPSIS: char = '…';

/// convert a string into a level filter, falling back to [`LevelFilter::ERROR`]
///
/// `off` silences everything
pub fn string_to_log_level(lvl: &str) -> LevelFilter {
    match lvl.to_lowercase().as_str() {
        "d" | "debug" | "dbg" => LevelFilter::DEBUG,
        "t" | "trace" | "trc" => LevelFilter::TRACE,
        "e" | "error" | "err" => LevelFilter::ERROR,
        "i" | "info" | "inf" => LevelFilter::INFO,
        "w" | "warn" | "wrn" => LevelFilter::WARN,
        "o" | "off" => LevelFilter::OFF,
        _ => LevelFilter::ERROR,
    }
}

/// cut `text` down to at most `max` characters, ending with an ellipsis if anything was dropped
pub fn truncate_chars(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }

    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut out: String = text.chars().take(max - 1).collect();
    out.truncate(out.trim_end().len());
    out.push(ELLIPSIS);
    out
}

/// greedily wrap `text` on whitespace into lines of at most `width` characters
///
/// words longer than `width` are split. if `max_lines` is given and the text
/// doesn't fit, the last kept line ends with an ellipsis.
pub fn wrap_words(text: &str, width: usize, max_lines: Option<usize>) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }

            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };

        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }

        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }

    if let Some(max) = max_lines
        && lines.len() > max
    {
        lines.truncate(max);

        if let Some(last) = lines.last_mut() {
            let budget = width.saturating_sub(1);
            let mut cut = truncate_chars(last, budget.max(1));

            if !cut.ends_with(ELLIPSIS) {
                cut.push(ELLIPSIS);
            }

            *last = cut;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_log_level() {
        assert_eq!(string_to_log_level("DEBUG"), LevelFilter::DEBUG);
        assert_eq!(string_to_log_level("wrn"), LevelFilter::WARN);
        assert_eq!(string_to_log_level("nonsense"), LevelFilter::ERROR);
        assert_eq!(string_to_log_level("Off"), LevelFilter::OFF);
    }

    #[test]
    fn test_truncate_short_text_is_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_chars("hello world", 8), "hello w…");
        assert_eq!(truncate_chars("hello world", 7), "hello…");
        assert_eq!(truncate_chars("anything", 0), "");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("ñandú ñandú", 6), "ñandú…");
    }

    #[test]
    fn test_wrap_words() {
        let lines = wrap_words("the quick brown fox jumps over the lazy dog", 10, None);
        assert_eq!(
            lines,
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
    }

    #[test]
    fn test_wrap_words_limits_lines() {
        let lines = wrap_words("the quick brown fox jumps over the lazy dog", 10, Some(2));
        assert_eq!(lines, vec!["the quick", "brown fox…"]);
    }

    #[test]
    fn test_wrap_words_splits_long_words() {
        let lines = wrap_words("abcdefghij", 4, None);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_words_empty() {
        assert!(wrap_words("   ", 10, Some(2)).is_empty());
    }
}
