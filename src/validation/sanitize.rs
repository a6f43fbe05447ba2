//! Markup stripping for free-text input.
//!
//! This is a small regex pass, not an HTML sanitiser: it drops `<script>`
//! blocks and anything shaped like a tag, then truncates. Malformed or
//! deliberately obfuscated markup (unterminated tags, entity-encoded
//! brackets) is not handled.

use std::sync::OnceLock;

use regex::Regex;

use super::MAX_STRING_LENGTH;

fn script_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap_or_else(|e| {
            unreachable!("script pattern is a valid regex: {e}")
        })
    })
}

fn markup_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"</?[A-Za-z!][^<>]*>")
            .unwrap_or_else(|e| unreachable!("tag pattern is a valid regex: {e}"))
    })
}

/// Strips script blocks and markup tags, then truncates to
/// [`MAX_STRING_LENGTH`] characters.
#[must_use]
pub fn sanitize_input(input: &str) -> String {
    let without_scripts = script_block().replace_all(input, "");
    let without_tags = markup_tag().replace_all(&without_scripts, "");
    without_tags.chars().take(MAX_STRING_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(sanitize_input("stagger grid"), "stagger grid");
        assert_eq!(sanitize_input("anime()"), "anime()");
    }

    #[test]
    fn script_blocks_are_removed_with_content() {
        let input = "before<script type=\"text/javascript\">alert('x')</script>after";
        assert_eq!(sanitize_input(input), "beforeafter");
    }

    #[test]
    fn script_removal_is_case_insensitive_and_multiline() {
        let input = "a<SCRIPT>\nlet x = 1;\n</Script>b";
        assert_eq!(sanitize_input(input), "ab");
    }

    #[test]
    fn markup_tags_are_stripped() {
        assert_eq!(sanitize_input("<b>timeline</b>"), "timeline");
        assert_eq!(sanitize_input("<img src=x onerror=y/>svg"), "svg");
    }

    #[test]
    fn comparison_operators_survive() {
        assert_eq!(sanitize_input("progress < 50 && x > 2"), "progress < 50 && x > 2");
    }

    #[test]
    fn output_is_truncated() {
        let long = "a".repeat(MAX_STRING_LENGTH + 500);
        assert_eq!(sanitize_input(&long).chars().count(), MAX_STRING_LENGTH);
    }
}
