//! Printf-verb rendering shared by the bundled loggers.
//!
//! This is deliberately small. It understands single-character verbs and
//! renders every argument through its `Display` implementation:
//!
//! | Verb            | Output                                      |
//! |-----------------|---------------------------------------------|
//! | `%v` `%s` `%d`  | the argument's `Display` form               |
//! | `%q`            | the `Display` form, quoted and escaped      |
//! | `%%`            | a literal `%`                               |
//! | other `%c`      | `%!c(value)`                                |
//!
//! Missing arguments render as `%!c(MISSING)`, a trailing `%` as
//! `%!(NOVERB)`, and unused arguments are appended as `%!(EXTRA a, b)`.
//! Flags, width and precision are not supported.

use std::fmt::{Display, Write};

/// Render `format` with `args`.
///
/// # Example
///
/// ```
/// use tlog::format::sprintf;
///
/// assert_eq!(sprintf("hello %s", &[&"world"]), "hello world");
/// assert_eq!(sprintf("%d%%", &[&50]), "50%");
/// assert_eq!(sprintf("%s", &[]), "%!s(MISSING)");
/// ```
pub fn sprintf(format: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut args = args.iter();
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        // Writing into a String cannot fail.
        let _ = match (verb, args.next()) {
            (_, None) => write!(out, "%!{}(MISSING)", verb),
            ('v' | 's' | 'd', Some(arg)) => write!(out, "{}", arg),
            ('q', Some(arg)) => write!(out, "{:?}", arg.to_string()),
            (_, Some(arg)) => write!(out, "%!{}({})", verb, arg),
        };
    }

    let extra: Vec<String> = args.map(|arg| arg.to_string()).collect();
    if !extra.is_empty() {
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sprintf("no verbs here", &[]), "no verbs here");
        assert_eq!(sprintf("", &[]), "");
    }

    #[test]
    fn test_basic_verbs() {
        assert_eq!(sprintf("hello %s", &[&"world"]), "hello world");
        assert_eq!(sprintf("%d apples", &[&3]), "3 apples");
        assert_eq!(sprintf("value=%v", &[&1.25]), "value=1.25");
    }

    #[test]
    fn test_arguments_consumed_in_order() {
        assert_eq!(sprintf("%s-%s-%s", &[&"a", &"b", &"c"]), "a-b-c");
    }

    #[test]
    fn test_quoted_verb_escapes() {
        assert_eq!(sprintf("%q", &[&"say \"hi\""]), r#""say \"hi\"""#);
    }

    #[test]
    fn test_percent_literal() {
        assert_eq!(sprintf("100%%", &[]), "100%");
        assert_eq!(sprintf("%d%% of %s", &[&9, &"disk"]), "9% of disk");
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(sprintf("%s and %d", &[&"one"]), "one and %!d(MISSING)");
    }

    #[test]
    fn test_extra_arguments() {
        assert_eq!(sprintf("hi", &[&1, &"two"]), "hi%!(EXTRA 1, two)");
    }

    #[test]
    fn test_unknown_verb() {
        assert_eq!(sprintf("%x", &[&255]), "%!x(255)");
    }

    #[test]
    fn test_trailing_percent() {
        assert_eq!(sprintf("oops %", &[]), "oops %!(NOVERB)");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(sprintf("héllo %s ✓", &[&"wörld"]), "héllo wörld ✓");
    }
}
