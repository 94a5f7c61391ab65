//! Markdown-to-plain-text stripping for excerpt generation.
//!
//! An ordered pipeline of regex substitutions that turns a markdown body
//! into approximate human-readable text. Code is dropped entirely, link
//! and image syntax collapses to its label, structural markers (headings,
//! emphasis, quotes, lists, rules, tables) are stripped, and whitespace is
//! collapsed to single spaces.
//!
//! The pass order matters: constructs removed early must not re-expose
//! markup nested inside them to later passes. This is an approximation by
//! contract - adversarial markup may leave residual symbols.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! re {
    ($pattern:literal) => {
        LazyLock::new(|| Regex::new($pattern).unwrap())
    };
}

static FENCED_CODE: LazyLock<Regex> = re!(r"(?s)```.*?```");
static INLINE_CODE: LazyLock<Regex> = re!(r"`[^`]*`");
static IMAGE: LazyLock<Regex> = re!(r"!\[([^\]]*)\]\([^)]*\)");
static INLINE_LINK: LazyLock<Regex> = re!(r"\[([^\]]*)\]\([^)]*\)");
static REF_LINK: LazyLock<Regex> = re!(r"\[([^\]]*)\]\[[^\]]*\]");
static HEADING: LazyLock<Regex> = re!(r"(?m)^#{1,6}[ \t]+");
static BOLD_STAR: LazyLock<Regex> = re!(r"\*\*([^*]+)\*\*");
static ITALIC_STAR: LazyLock<Regex> = re!(r"\*([^*]+)\*");
static BOLD_UNDER: LazyLock<Regex> = re!(r"__([^_]+)__");
static ITALIC_UNDER: LazyLock<Regex> = re!(r"_([^_]+)_");
static STRIKETHROUGH: LazyLock<Regex> = re!(r"~~([^~]+)~~");
static BLOCKQUOTE: LazyLock<Regex> = re!(r"(?m)^>[ \t]+");
static BULLET_ITEM: LazyLock<Regex> = re!(r"(?m)^[ \t]*[-*+][ \t]+");
static NUMBERED_ITEM: LazyLock<Regex> = re!(r"(?m)^[ \t]*\d+\.[ \t]+");
static HORIZONTAL_RULE: LazyLock<Regex> = re!(r"(?m)^[-*]{3,}[ \t]*$");
static NEWLINE_RUN: LazyLock<Regex> = re!(r"\n+");
static WHITESPACE_RUN: LazyLock<Regex> = re!(r"\s+");

/// Strip markdown syntax from `body`, yielding plain text.
pub fn strip_markdown(body: &str) -> String {
    // Code first: its content may hold any other construct and must not
    // survive into the excerpt.
    let text = FENCED_CODE.replace_all(body, "");
    let text = INLINE_CODE.replace_all(&text, "");

    // Images before links: `![alt](url)` embeds the link pattern, so the
    // link pass would otherwise leave the leading `!` behind.
    let text = IMAGE.replace_all(&text, "$1");
    let text = INLINE_LINK.replace_all(&text, "$1");
    let text = REF_LINK.replace_all(&text, "$1");

    let text = HEADING.replace_all(&text, "");
    let text = BOLD_STAR.replace_all(&text, "$1");
    let text = ITALIC_STAR.replace_all(&text, "$1");
    let text = BOLD_UNDER.replace_all(&text, "$1");
    let text = ITALIC_UNDER.replace_all(&text, "$1");
    let text = STRIKETHROUGH.replace_all(&text, "$1");
    let text = BLOCKQUOTE.replace_all(&text, "");
    let text = BULLET_ITEM.replace_all(&text, "");
    let text = NUMBERED_ITEM.replace_all(&text, "");
    let text = HORIZONTAL_RULE.replace_all(&text, "");
    let text = text.replace('|', " ");

    let text = NEWLINE_RUN.replace_all(&text, " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");

    text.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(strip_markdown("just plain text"), "just plain text");
    }

    #[test]
    fn test_idempotent_on_plain_text() {
        let once = strip_markdown("some ordinary sentence here");
        assert_eq!(strip_markdown(&once), once);
    }

    #[test]
    fn test_fenced_code_removed() {
        let body = "before\n```rust\nfn main() {}\n```\nafter";
        assert_eq!(strip_markdown(body), "before after");
    }

    #[test]
    fn test_inline_code_removed() {
        assert_eq!(strip_markdown("run `cargo build` now"), "run now");
        assert_eq!(strip_markdown("a `b` c"), "a c");
    }

    #[test]
    fn test_inline_link_label_kept() {
        assert_eq!(
            strip_markdown("see [the docs](https://example.com) here"),
            "see the docs here"
        );
    }

    #[test]
    fn test_reference_link_label_kept() {
        assert_eq!(strip_markdown("see [the docs][1] here"), "see the docs here");
    }

    #[test]
    fn test_image_alt_kept() {
        assert_eq!(
            strip_markdown("logo ![alt text](img.png) end"),
            "logo alt text end"
        );
    }

    #[test]
    fn test_heading_markers_stripped() {
        assert_eq!(strip_markdown("# Title\n## Sub\ntext"), "Title Sub text");
        assert_eq!(strip_markdown("###### Deep"), "Deep");
    }

    #[test]
    fn test_emphasis_stripped() {
        assert_eq!(strip_markdown("**bold** and *italic*"), "bold and italic");
        assert_eq!(strip_markdown("__bold__ and _italic_"), "bold and italic");
    }

    #[test]
    fn test_strikethrough_stripped() {
        assert_eq!(strip_markdown("~~gone~~ kept"), "gone kept");
    }

    #[test]
    fn test_blockquote_stripped() {
        assert_eq!(strip_markdown("> quoted line\nplain"), "quoted line plain");
    }

    #[test]
    fn test_list_markers_stripped() {
        assert_eq!(strip_markdown("- one\n* two\n+ three"), "one two three");
        assert_eq!(strip_markdown("1. first\n2. second"), "first second");
        assert_eq!(strip_markdown("  - indented"), "indented");
    }

    #[test]
    fn test_horizontal_rule_removed() {
        assert_eq!(strip_markdown("above\n---\nbelow"), "above below");
        assert_eq!(strip_markdown("above\n*****\nbelow"), "above below");
    }

    #[test]
    fn test_table_pipes_collapse() {
        let body = "| a | b |\n| - | - |\n| 1 | 2 |";
        assert_eq!(strip_markdown(body), "a b - - 1 2");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(strip_markdown("a\n\n\nb   c\t d"), "a b c d");
    }

    #[test]
    fn test_leading_trailing_trimmed() {
        assert_eq!(strip_markdown("\n\n  hello  \n\n"), "hello");
    }

    #[test]
    fn test_markup_inside_code_not_exposed() {
        // The heading and emphasis live inside the fence and must vanish
        // with it instead of being re-interpreted.
        let body = "```\n# not a heading\n**not bold**\n```\ndone";
        assert_eq!(strip_markdown(body), "done");
    }

    #[test]
    fn test_typical_article_body() {
        let body = "# Hi\nBody text.";
        assert_eq!(strip_markdown(body), "Hi Body text.");
    }

    #[test]
    fn test_combined_document() {
        let body = "\
# Getting Started

Install with `cargo install quill`, then read [the guide](https://example.com/guide).

- fast
- **simple**

> works everywhere
";
        assert_eq!(
            strip_markdown(body),
            "Getting Started Install with , then read the guide. fast simple works everywhere"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_markdown(""), "");
    }
}
