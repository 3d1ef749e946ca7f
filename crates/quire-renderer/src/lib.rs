//! Line-oriented markdown renderer for quire manuals.
//!
//! This crate converts one raw markdown string into HTML with a single
//! forward pass over its lines. The subset it understands is the one the
//! manual sources actually use: headings (levels 1-4), fenced code blocks,
//! flat lists, blockquotes, horizontal rules, paragraphs, and the usual
//! inline spans (bold, italic, inline code, links). Anything fancier -
//! tables, nested lists, footnotes - passes through as paragraph text.
//!
//! Rendering is total: no input string produces an error or a panic.
//! Malformed documents degrade (an unterminated fence is dropped, a stray
//! list continuation attaches to the previous item) so that a manual with
//! imperfect sources still renders.
//!
//! # Example
//!
//! ```
//! use quire_renderer::render;
//!
//! let html = render("# Title\n\nHello **world**.");
//! assert!(html.contains(r#"<h1 class="section-anchor" id="title">Title</h1>"#));
//! assert!(html.contains("<p>Hello <strong>world</strong>.</p>"));
//! ```

mod inline;
mod renderer;
mod state;

pub use renderer::render;
pub use state::{escape_html, make_anchor_id};
