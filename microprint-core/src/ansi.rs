//! ANSI escape sequence removal
//!
//! CI logs carry terminal color and cursor codes. They are deleted before a
//! log is rendered; nothing else about the text is touched.

use std::sync::LazyLock;

use regex::Regex;

/// ESC followed by a two-character escape byte (`@`..`Z`, `\`..`_`, which
/// excludes `[`), or a CSI sequence: `[`, parameter bytes `0x30..=0x3F`,
/// intermediate bytes `0x20..=0x2F`, one final byte `0x40..=0x7E`.
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B(?:[\x40-\x5A\x5C-\x5F]|\[[\x30-\x3F]*[\x20-\x2F]*[\x40-\x7E])")
        .expect("ANSI escape pattern is valid")
});

/// Removes every ANSI escape sequence from `text`
///
/// Deleting a sequence can splice a stray ESC onto the following bytes and
/// form a new sequence, so removal repeats until nothing matches. Each pass
/// shortens the text, which bounds the loop.
pub fn strip_ansi_escapes(text: &str) -> String {
    let mut current = ANSI_ESCAPE.replace_all(text, "").into_owned();
    while ANSI_ESCAPE.is_match(&current) {
        current = ANSI_ESCAPE.replace_all(&current, "").into_owned();
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_color_codes() {
        assert_eq!(
            strip_ansi_escapes("\x1b[31mERROR\x1b[0m: failed"),
            "ERROR: failed"
        );
    }

    #[test]
    fn test_strips_compound_csi() {
        assert_eq!(
            strip_ansi_escapes("\x1b[1;32mBold Green\x1b[0m Normal"),
            "Bold Green Normal"
        );
        assert_eq!(strip_ansi_escapes("a\x1b[2Kb\x1b[?25lc"), "abc");
    }

    #[test]
    fn test_strips_two_byte_escapes() {
        assert_eq!(strip_ansi_escapes("x\x1bMy\x1b_z"), "xyz");
    }

    #[test]
    fn test_leaves_esc_bracket_start_alone_when_not_csi() {
        // ESC followed by a byte outside both grammars is kept
        assert_eq!(strip_ansi_escapes("a\x1b\x01b"), "a\x1b\x01b");
    }

    #[test]
    fn test_identity_without_escape() {
        let inputs = [
            "",
            "plain text",
            "2024-01-01T00:00:00Z ##[group]Run cargo test\n  [ok] done",
            "tabs\tand\r\nnewlines, unicode ✓ ü",
        ];
        for input in inputs {
            assert_eq!(strip_ansi_escapes(input), input);
        }
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "\x1b[31mERROR\x1b[0m: failed",
            "\x1b\x1b[31mX",
            "\x1b\x1b\x1b[0m[1mY",
            "no escapes",
        ];
        for input in inputs {
            let once = strip_ansi_escapes(input);
            assert_eq!(strip_ansi_escapes(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_nested_sequence_is_fully_removed() {
        assert_eq!(strip_ansi_escapes("\x1b\x1b[31mX"), "");
    }
}
