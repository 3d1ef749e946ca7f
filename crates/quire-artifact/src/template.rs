//! HTML document template.
//!
//! Mirrors the viewer's DOM contract: the script expects `#sidebar`,
//! `#menuToggle`, `#content`, and `.nav-link[data-page]` elements, and
//! a `CORPUS` constant holding the data block.

use std::fmt::Write;

use quire_corpus::NavGroup;
use quire_renderer::escape_html;

use crate::ArtifactError;
use crate::embed::corpus_data_block;

/// Stylesheet embedded into every artifact.
const THEME_CSS: &str = include_str!("assets/theme.css");
/// Viewer script embedded into every artifact.
const VIEWER_JS: &str = include_str!("assets/viewer.js");

/// Everything needed to render one artifact.
pub struct ArtifactData {
    /// Manual title, shown in the header and the document title.
    pub title: String,
    /// Tagline shown beside the title on wide viewports.
    pub tagline: String,
    /// Logo as a `data:` URL; empty when no logo is configured.
    pub logo_data_url: String,
    /// Sectioned navigation tree in corpus order.
    pub navigation: Vec<NavGroup>,
    /// Page corpus embedded as the data block.
    pub pages: quire_corpus::PageCorpus,
}

/// Render the complete self-contained HTML document.
pub fn render_artifact(data: &ArtifactData) -> Result<String, ArtifactError> {
    let corpus_block = corpus_data_block(&data.pages)?;
    let mut html = String::with_capacity(32 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&data.title));
    html.push_str("<style>\n");
    html.push_str(THEME_CSS);
    html.push_str("</style>\n</head>\n<body>\n");

    render_header(&mut html, data);

    html.push_str("<button class=\"menu-toggle\" id=\"menuToggle\">☰</button>\n");

    html.push_str("<div class=\"container\">\n");
    html.push_str("<nav class=\"sidebar\" id=\"sidebar\">\n");
    render_navigation(&mut html, &data.navigation);
    html.push_str("</nav>\n");
    html.push_str("<main class=\"main-content\">\n");
    html.push_str("<div class=\"content\" id=\"content\"></div>\n");
    html.push_str("</main>\n</div>\n");

    html.push_str("<script>\n");
    let _ = writeln!(html, "const CORPUS = {corpus_block};");
    html.push_str(VIEWER_JS);
    html.push_str("</script>\n</body>\n</html>\n");

    Ok(html)
}

/// Render the fixed header: logo (when present), title, tagline.
fn render_header(html: &mut String, data: &ArtifactData) {
    html.push_str("<div class=\"header\">\n");
    if !data.logo_data_url.is_empty() {
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"{}\" class=\"header-logo\">",
            data.logo_data_url,
            escape_html(&data.title)
        );
    }
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&data.title));
    if !data.tagline.is_empty() {
        let _ = writeln!(
            html,
            "<span class=\"tagline\">{}</span>",
            escape_html(&data.tagline)
        );
    }
    html.push_str("</div>\n");
}

/// Render the sidebar markup from the navigation tree.
///
/// Each group becomes one `nav-section` block; labeled groups carry a
/// `nav-section-title` heading, anonymous groups only their links.
fn render_navigation(html: &mut String, groups: &[NavGroup]) {
    for group in groups {
        html.push_str("<div class=\"nav-section\">\n");
        if let Some(section) = &group.section {
            let _ = writeln!(
                html,
                "<div class=\"nav-section-title\">{}</div>",
                escape_html(section)
            );
        }
        for entry in &group.entries {
            let _ = writeln!(
                html,
                "<a href=\"#{id}\" class=\"nav-link\" data-page=\"{id}\">{title}</a>",
                id = escape_html(&entry.page_id),
                title = escape_html(&entry.title)
            );
        }
        html.push_str("</div>\n");
    }
}
