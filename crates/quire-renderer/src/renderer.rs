//! Single-pass line dispatch.
//!
//! [`render`] walks the document line by line exactly once. Per-line
//! rules fire in priority order: fence toggle, headings, horizontal
//! rule, blockquote, list item, list continuation, blank line,
//! paragraph. While a fence is open no other rule applies.

use std::fmt::Write;

use crate::inline::apply_inline;
use crate::state::{FenceState, ListState, QuoteState, escape_html, make_anchor_id};

/// Heading markers in the supported range, deepest level last.
const HEADING_MARKERS: [(&str, u8); 4] = [("# ", 1), ("## ", 2), ("### ", 3), ("#### ", 4)];

/// Render one raw markdown string to HTML.
///
/// Total over all inputs: malformed documents degrade (an unterminated
/// fence is dropped at end of input, a continuation line with no item
/// to attach to is discarded) instead of failing.
#[must_use]
pub fn render(markdown: &str) -> String {
    let mut renderer = LineRenderer::default();
    for line in markdown.lines() {
        renderer.dispatch(line);
    }
    renderer.finish()
}

/// Per-invocation renderer state: the output buffer plus one
/// accumulator per multi-line block kind.
#[derive(Default)]
struct LineRenderer {
    html: String,
    fence: FenceState,
    list: ListState,
    quote: QuoteState,
}

impl LineRenderer {
    fn dispatch(&mut self, line: &str) {
        // Fence toggle wins over everything; inside a fence every other
        // line is verbatim content.
        if let Some(info) = line.strip_prefix("```") {
            if self.fence.is_open() {
                let (_lang, content) = self.fence.close();
                let _ = writeln!(
                    self.html,
                    "<pre><code>{}</code></pre>",
                    escape_html(&content)
                );
            } else {
                self.flush_list();
                self.flush_quote();
                let tag = info.trim();
                self.fence.open((!tag.is_empty()).then(|| tag.to_owned()));
            }
            return;
        }
        if self.fence.is_open() {
            self.fence.push_line(line);
            return;
        }

        for (marker, level) in HEADING_MARKERS {
            if let Some(rest) = line.strip_prefix(marker) {
                self.flush_list();
                self.flush_quote();
                let text = rest.trim();
                let id = make_anchor_id(text);
                let _ = writeln!(
                    self.html,
                    r#"<h{level} class="section-anchor" id="{id}">{}</h{level}>"#,
                    apply_inline(text)
                );
                return;
            }
        }

        if line.trim() == "---" {
            self.flush_list();
            self.flush_quote();
            self.html.push_str("<hr>\n");
            return;
        }

        if let Some(rest) = line.strip_prefix("> ") {
            self.flush_list();
            self.quote.push_fragment(rest);
            return;
        }
        if self.quote.is_open() && line.trim().is_empty() {
            self.flush_quote();
            return;
        }

        if let Some(rest) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
        {
            self.flush_quote();
            self.list.push_item(apply_inline(rest.trim()));
            return;
        }
        if self.list.is_open() {
            if line.trim().is_empty() {
                self.flush_list();
            } else {
                // Continuation of the last item; dropped if there is no
                // item to extend.
                let _ = self.list.append_to_last(&apply_inline(line.trim()));
            }
            return;
        }

        if line.trim().is_empty() {
            self.flush_quote();
            return;
        }

        self.flush_quote();
        let _ = writeln!(self.html, "<p>{}</p>", apply_inline(line));
    }

    /// Flush open accumulators and return the rendered document.
    ///
    /// A fence left open at end of input is not auto-closed; its content
    /// is dropped.
    fn finish(mut self) -> String {
        self.flush_list();
        self.flush_quote();
        self.html
    }

    fn flush_list(&mut self) {
        if !self.list.is_open() {
            return;
        }
        let items = self.list.close();
        if items.is_empty() {
            return;
        }
        self.html.push_str("<ul>\n");
        for item in items {
            let _ = writeln!(self.html, "<li>{item}</li>");
        }
        self.html.push_str("</ul>\n");
    }

    fn flush_quote(&mut self) {
        if !self.quote.is_open() {
            return;
        }
        let content = self.quote.close();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return;
        }
        let _ = writeln!(
            self.html,
            "<blockquote>{}</blockquote>",
            apply_inline(trimmed)
        );
    }
}
