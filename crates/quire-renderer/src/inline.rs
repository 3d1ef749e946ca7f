//! Inline span formatting.
//!
//! Applied to the text of a single logical block, never across block
//! boundaries. Each substitution is a non-overlapping global pass over
//! the already-partially-transformed string, in a fixed order: bold,
//! italic, inline code, links. Delimiters cannot be escaped; a literal
//! asterisk in prose will be eaten by the italic pass.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Apply inline formatting to one block's text.
pub(crate) fn apply_inline(text: &str) -> String {
    let text = BOLD.replace_all(text, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");
    let text = CODE.replace_all(&text, "<code>$1</code>");
    let text = LINK.replace_all(&text, r#"<a href="$2">$1</a>"#);
    text.into_owned()
}
