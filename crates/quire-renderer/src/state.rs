//! Accumulator state for the line renderer.
//!
//! The renderer holds one of these per block kind that spans multiple
//! lines. At most one of fence/list/quote is accumulating at any time;
//! the dispatch loop in [`crate::renderer`] enforces that by flushing
//! the others before it opens a new one.

/// State for a fenced code block being accumulated.
#[derive(Default)]
pub(crate) struct FenceState {
    /// Whether we're inside a fence.
    active: bool,
    /// Language tag from the opening fence line, kept for the record but
    /// not reflected in output.
    language: Option<String>,
    /// Raw fence content, one line per `push_line`.
    buffer: String,
}

impl FenceState {
    /// Open a fence with an optional language tag.
    pub(crate) fn open(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.buffer.clear();
    }

    /// Close the fence and return `(language, content)`.
    pub(crate) fn close(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.buffer))
    }

    /// Check if we're inside a fence.
    pub(crate) fn is_open(&self) -> bool {
        self.active
    }

    /// Append one verbatim line (plus its newline) to the fence content.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }
}

/// State for an unordered list being accumulated.
///
/// Items are stored individually so a continuation line can extend the
/// last item without inspecting rendered markup.
#[derive(Default)]
pub(crate) struct ListState {
    active: bool,
    /// Item bodies, already inline-formatted.
    items: Vec<String>,
}

impl ListState {
    /// Append a new item and open the list if it wasn't open yet.
    pub(crate) fn push_item(&mut self, item: String) {
        self.active = true;
        self.items.push(item);
    }

    /// Extend the last item with continuation text, space-separated.
    ///
    /// Returns `false` (and drops the text) when there is no item to
    /// extend.
    pub(crate) fn append_to_last(&mut self, text: &str) -> bool {
        match self.items.last_mut() {
            Some(last) => {
                last.push(' ');
                last.push_str(text);
                true
            }
            None => false,
        }
    }

    /// Check if the list is open.
    pub(crate) fn is_open(&self) -> bool {
        self.active
    }

    /// Close the list and return its items.
    pub(crate) fn close(&mut self) -> Vec<String> {
        self.active = false;
        std::mem::take(&mut self.items)
    }
}

/// State for a blockquote being accumulated.
///
/// Consecutive `> ` lines collapse into one quote; the raw text is kept
/// unformatted until the quote is flushed.
#[derive(Default)]
pub(crate) struct QuoteState {
    active: bool,
    buffer: String,
}

impl QuoteState {
    /// Append the text of one `> ` line plus a separating space.
    pub(crate) fn push_fragment(&mut self, text: &str) {
        self.active = true;
        self.buffer.push_str(text);
        self.buffer.push(' ');
    }

    /// Check if the quote is open.
    pub(crate) fn is_open(&self) -> bool {
        self.active
    }

    /// Close the quote and return the accumulated raw text.
    pub(crate) fn close(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.buffer)
    }
}

/// Compute the stable anchor identifier for a heading or page title.
///
/// Lowercases the text, deletes every character that is not a letter,
/// digit, hyphen, or whitespace, collapses whitespace runs to single
/// hyphens, and trims leading/trailing hyphens.
#[must_use]
pub fn make_anchor_id(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '-' || c.is_whitespace() {
            cleaned.push(c);
        }
    }

    let mut id = String::with_capacity(cleaned.len());
    let mut pending_gap = false;
    for c in cleaned.chars() {
        if c.is_whitespace() {
            pending_gap = true;
        } else {
            if pending_gap {
                id.push('-');
                pending_gap = false;
            }
            id.push(c);
        }
    }

    id.trim_matches('-').to_owned()
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_anchor_id() {
        assert_eq!(make_anchor_id("Getting Started!"), "getting-started");
        assert_eq!(make_anchor_id("getting   started"), "getting-started");
        assert_eq!(make_anchor_id("What's New?"), "whats-new");
        assert_eq!(make_anchor_id("  Spaces  "), "spaces");
        assert_eq!(make_anchor_id("pre-existing-hyphens"), "pre-existing-hyphens");
        assert_eq!(make_anchor_id("- wrapped -"), "wrapped");
    }

    #[test]
    fn test_make_anchor_id_drops_underscores() {
        assert_eq!(make_anchor_id("snake_case_name"), "snakecasename");
    }

    #[test]
    fn test_make_anchor_id_keeps_non_ascii_letters() {
        assert_eq!(make_anchor_id("Über Uns"), "über-uns");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_fence_state() {
        let mut state = FenceState::default();
        assert!(!state.is_open());

        state.open(Some("rust".to_owned()));
        assert!(state.is_open());

        state.push_line("fn main() {}");
        let (lang, content) = state.close();
        assert_eq!(lang, Some("rust".to_owned()));
        assert_eq!(content, "fn main() {}\n");
        assert!(!state.is_open());
    }

    #[test]
    fn test_list_state_extends_last_item() {
        let mut state = ListState::default();
        state.push_item("first".to_owned());
        assert!(state.append_to_last("continued"));
        assert_eq!(state.close(), vec!["first continued".to_owned()]);
        assert!(!state.is_open());
    }

    #[test]
    fn test_list_state_continuation_without_item_is_dropped() {
        let mut state = ListState::default();
        assert!(!state.append_to_last("orphan"));
        assert!(state.close().is_empty());
    }

    #[test]
    fn test_quote_state_joins_fragments_with_spaces() {
        let mut state = QuoteState::default();
        state.push_fragment("one");
        state.push_fragment("two");
        assert!(state.is_open());
        assert_eq!(state.close(), "one two ");
        assert!(!state.is_open());
    }
}
