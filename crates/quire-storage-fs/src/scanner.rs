//! Fragment discovery and reading.

use std::fs;
use std::path::{Path, PathBuf};

use quire_corpus::{Fragment, SECTION_SEPARATOR};
use quire_renderer::make_anchor_id;
use tracing::{debug, warn};

/// Where fragments come from on disk.
///
/// Built by the CLI from the loaded configuration; this crate stays
/// independent of the config format.
#[derive(Clone, Debug)]
pub struct SourceLayout {
    /// Root manual document `(path, navigation title)`, rendered as the
    /// first page when present.
    pub root_doc: Option<(PathBuf, String)>,
    /// Directory containing the section subdirectories.
    pub docs_dir: PathBuf,
    /// Section directories in presentation order.
    pub sections: Vec<SectionSource>,
    /// Path markers that exclude a file from collection.
    pub exclude: Vec<String>,
}

/// One section directory under the docs root.
#[derive(Clone, Debug)]
pub struct SectionSource {
    /// Subdirectory name.
    pub dir: String,
    /// Section label, also the section prefix of every page title.
    pub title: String,
    /// Ordering rank for the whole section.
    pub order: u32,
}

/// Scan the source layout and read every fragment.
///
/// The root document (when present on disk) becomes a sectionless
/// fragment with rank 0; each section directory contributes its `.md`
/// files in directory-listing order, titled from their file stems.
/// Missing directories are skipped; unreadable files degrade to
/// empty-content fragments with a warning.
#[must_use]
pub fn scan(layout: &SourceLayout) -> Vec<Fragment> {
    let mut fragments = Vec::new();

    if let Some((path, title)) = &layout.root_doc {
        if path.is_file() {
            let id = make_anchor_id(title);
            fragments.push(Fragment::new(
                title.clone(),
                id,
                read_or_empty(path),
                0,
            ));
        } else {
            debug!(path = %path.display(), "root document not found, skipping");
        }
    }

    for section in &layout.sections {
        let section_dir = layout.docs_dir.join(&section.dir);
        if !section_dir.is_dir() {
            continue;
        }
        for path in markdown_files(&section_dir) {
            if is_excluded(&path, &layout.exclude) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let page_title = title_from_stem(stem);
            let title = format!("{}{SECTION_SEPARATOR}{page_title}", section.title);
            let id = format!("{}-{stem}", section.dir);
            fragments.push(
                Fragment::new(title, id, read_or_empty(&path), section.order)
                    .with_section(section.title.clone()),
            );
        }
    }

    debug!(count = fragments.len(), "scanned documentation fragments");
    fragments
}

/// List `.md` files in a directory, sorted by filename.
fn markdown_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        warn!(dir = %dir.display(), "could not list section directory");
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();
    files
}

/// Check a path against the exclusion markers.
fn is_excluded(path: &Path, markers: &[String]) -> bool {
    let text = path.to_string_lossy();
    markers.iter().any(|marker| text.contains(marker.as_str()))
}

/// Read a file, degrading to an empty string with a warning.
fn read_or_empty(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read fragment source");
            String::new()
        }
    }
}

/// Derive a page title from a file stem: `-`/`_` become spaces, each
/// word is capitalized.
fn title_from_stem(stem: &str) -> String {
    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn layout(dir: &Path) -> SourceLayout {
        SourceLayout {
            root_doc: Some((dir.join("MANUAL.md"), "Reference".to_owned())),
            docs_dir: dir.join("docs"),
            sections: vec![
                SectionSource {
                    dir: "guide".to_owned(),
                    title: "Guide".to_owned(),
                    order: 1,
                },
                SectionSource {
                    dir: "internals".to_owned(),
                    title: "Internals".to_owned(),
                    order: 2,
                },
            ],
            exclude: vec!["development".to_owned()],
        }
    }

    #[test]
    fn test_scan_collects_root_and_sections() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "MANUAL.md", "# The Manual");
        write(tmp.path(), "docs/guide/setup-steps.md", "# Setup");
        write(tmp.path(), "docs/internals/layout.md", "# Layout");

        let fragments = scan(&layout(tmp.path()));

        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].title, "Reference");
        assert_eq!(fragments[0].id, "reference");
        assert_eq!(fragments[0].order, 0);
        assert_eq!(fragments[0].section, None);
        assert_eq!(fragments[0].content, "# The Manual");

        assert_eq!(fragments[1].title, "Guide → Setup Steps");
        assert_eq!(fragments[1].id, "guide-setup-steps");
        assert_eq!(fragments[1].section.as_deref(), Some("Guide"));
        assert_eq!(fragments[1].order, 1);

        assert_eq!(fragments[2].id, "internals-layout");
        assert_eq!(fragments[2].order, 2);
    }

    #[test]
    fn test_section_files_come_in_listing_order() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "docs/guide/b.md", "b");
        write(tmp.path(), "docs/guide/a.md", "a");
        let mut layout = layout(tmp.path());
        layout.root_doc = None;

        let fragments = scan(&layout);

        let ids: Vec<_> = fragments.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["guide-a", "guide-b"]);
    }

    #[test]
    fn test_excluded_marker_skips_files() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "docs/guide/development-notes.md", "internal");
        write(tmp.path(), "docs/guide/public.md", "public");
        let mut layout = layout(tmp.path());
        layout.root_doc = None;

        let fragments = scan(&layout);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].id, "guide-public");
    }

    #[test]
    fn test_missing_root_and_directories_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();

        let fragments = scan(&layout(tmp.path()));

        assert!(fragments.is_empty());
    }

    #[test]
    fn test_non_markdown_files_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "docs/guide/picture.png", "binary-ish");
        write(tmp.path(), "docs/guide/page.md", "page");
        let mut layout = layout(tmp.path());
        layout.root_doc = None;

        let fragments = scan(&layout);

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].id, "guide-page");
    }

    #[test]
    fn test_title_from_stem_variants() {
        assert_eq!(title_from_stem("setup-steps"), "Setup Steps");
        assert_eq!(title_from_stem("memory_model"), "Memory Model");
        assert_eq!(title_from_stem("faq"), "Faq");
    }
}
