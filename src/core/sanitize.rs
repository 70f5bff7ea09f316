// src/core/sanitize.rs

/// Whitespace stripped from the ends of a result line: space, tab, LF,
/// VT, FF, CR and NUL. Non-ASCII spaces (e.g. U+00A0) are kept.
pub fn is_strip_ws(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | '\0')
}

/// Trim leading and trailing whitespace; interior text is left untouched.
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(is_strip_ws)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_ascii_whitespace_and_nul() {
        assert_eq!(trim_text("  Course Three  "), "Course Three");
        assert_eq!(trim_text("\n\t\x0B\x0C\r\0x\0\r\n"), "x");
        assert_eq!(trim_text(" a  \n b "), "a  \n b");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(trim_text(" \n\t "), "");
        assert_eq!(trim_text(""), "");
    }

    #[test]
    fn keeps_nbsp() {
        assert_eq!(trim_text("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
    }
}
