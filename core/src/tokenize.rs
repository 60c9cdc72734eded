//! Splits a raw argument string into tokens.
//!
//! Tokens are matched left to right, in priority order:
//!
//! 1. a double-quoted span (quotes stripped, contents verbatim),
//! 2. a single-quoted span (same),
//! 3. a maximal run of characters other than the ASCII separators
//!    space, `\t`, `\n`, `\x0B`, `\x0C` and `\r`.
//!
//! Unicode spaces such as U+00A0 are ordinary token characters.
//!
//! There is no escape mechanism. A backslash is an ordinary character and a
//! quote cannot be embedded in a span delimited by the same quote kind. A
//! quote that never closes falls through to the third alternative and stays
//! part of an ordinary token.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]*)"|'([^']*)'|[^ \t\n\x0B\f\r]+"#).expect("static regex must compile")
});

/// Whether `c` separates tokens.
pub fn is_token_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Splits `raw` into argument tokens.
///
/// # Examples
///
/// ```
/// use command_args_core::split_arguments;
///
/// assert!(split_arguments("").is_empty());
/// assert_eq!(
///     split_arguments(r#"a "b c" 'd e' f"#),
///     vec!["a", "b c", "d e", "f"]
/// );
/// // An unterminated quote is kept as an ordinary character.
/// assert_eq!(split_arguments(r#""abc def"#), vec![r#""abc"#, "def"]);
/// ```
pub fn split_arguments(raw: &str) -> Vec<String> {
    TOKEN_RE
        .captures_iter(raw)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(split_arguments("").is_empty());
        assert!(split_arguments("   \t\n ").is_empty());
    }

    #[test]
    fn test_mixed_quoting() {
        assert_eq!(
            split_arguments(r#"a "b c" 'd e' f"#),
            vec!["a", "b c", "d e", "f"]
        );
    }

    #[test]
    fn test_interior_whitespace_kept_verbatim() {
        assert_eq!(split_arguments(r#""  two  spaces ""#), vec!["  two  spaces "]);
    }

    #[test]
    fn test_other_quote_kind_inside_span() {
        assert_eq!(
            split_arguments(r#""it's" 'say "hi"'"#),
            vec!["it's", r#"say "hi""#]
        );
    }

    #[test]
    fn test_empty_quoted_span_yields_empty_token() {
        assert_eq!(split_arguments(r#"a "" b"#), vec!["a", "", "b"]);
    }

    #[test]
    fn test_unterminated_quote_degrades() {
        assert_eq!(split_arguments("'abc def"), vec!["'abc", "def"]);
    }

    #[test]
    fn test_quote_inside_word_is_ordinary() {
        assert_eq!(split_arguments(r#"a"b c"#), vec![r#"a"b"#, "c"]);
    }

    #[test]
    fn test_no_escaping() {
        assert_eq!(split_arguments(r#""a\"b""#), vec!["a\\", "b\""]);
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        assert_eq!(split_arguments("x y x"), vec!["x", "y", "x"]);
    }

    #[test]
    fn test_unicode_space_is_not_a_separator() {
        assert_eq!(split_arguments("a\u{a0}b c"), vec!["a\u{a0}b", "c"]);
        assert_eq!(split_arguments("x\u{2003}y"), vec!["x\u{2003}y"]);
    }

    #[test]
    fn test_ascii_control_separators() {
        assert_eq!(split_arguments("a\x0Bb\x0Cc\r\nd"), vec!["a", "b", "c", "d"]);
        assert!(is_token_separator('\x0B'));
        assert!(!is_token_separator('\u{a0}'));
    }
}
