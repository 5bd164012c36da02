//! Line splitting.

/// Split text into lines on `\n`, dropping the terminators.
///
/// An empty string has no lines. A single trailing `\n` does not open a new
/// line, but every other separator does, so `"a\n\nb"` has a genuine empty
/// middle line. `\r` is kept as content.
///
/// ```
/// use shutter_core::diff::lines::split_lines;
///
/// assert!(split_lines("").is_empty());
/// assert_eq!(split_lines("a\n"), vec!["a"]);
/// assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
/// assert_eq!(split_lines("\n"), vec![""]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.strip_suffix('\n').unwrap_or(text).split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_lines() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
    }

    #[test]
    fn test_no_trailing_newline() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_single_trailing_newline_is_dropped() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_consecutive_separators_yield_empty_lines() {
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n\n"), vec!["", ""]);
        assert_eq!(split_lines("a\n\n\nb"), vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_lone_newline_is_one_empty_line() {
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_carriage_return_is_content() {
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn test_multibyte_content_is_preserved() {
        assert_eq!(split_lines("héllo\n世界"), vec!["héllo", "世界"]);
    }
}
