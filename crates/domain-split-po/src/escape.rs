//! PO string escaping.
//!
//! Both directions are chained substitutions with a fixed order. A value that
//! contains a literal backslash followed by `n` does not survive
//! `unescape(escape(..))`: the escaped `\\n` is read back as a backslash and a
//! newline. Catalogs produced by the split never contain such values, so the
//! order is kept as is.

/// Turns the escape sequences of a PO string literal into the characters they
/// stand for: `\n`, then `\"`, then `\\`.
pub fn unescape(raw: &str) -> String {
    raw.replace("\\n", "\n")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\")
}

/// Inverse of [`unescape`]: `\`, then `"`, then newline.
pub fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("Guardar", "Guardar")]
    #[case::quote("Say \"hi\"", r#"Say \"hi\""#)]
    #[case::newline("line one\nline two", r"line one\nline two")]
    #[case::backslash(r"C:\temp", r"C:\\temp")]
    #[case::mixed("a \"b\"\nc \\ d", r#"a \"b\"\nc \\ d"#)]
    fn test_escape_pairs(#[case] value: &str, #[case] escaped: &str) {
        assert_eq!(escape(value), escaped);
        assert_eq!(unescape(escaped), value);
        assert_eq!(unescape(&escape(value)), value);
        assert_eq!(escape(&unescape(escaped)), escaped);
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        // the backslashes added for the quote must not be escaped again
        assert_eq!(escape("\""), "\\\"");
        assert_eq!(escape("\n"), "\\n");
    }

    #[test]
    fn test_literal_backslash_n_is_lossy() {
        let value = "\\n";
        let escaped = escape(value);
        assert_eq!(escaped, "\\\\n");
        assert_eq!(unescape(&escaped), "\\\n");
    }
}
