//! Navigation assembly over the sorted corpus.

use crate::collector::SortedCorpus;
use crate::page_corpus::PageCorpus;

/// Separator between a section prefix and the page title proper.
pub const SECTION_SEPARATOR: &str = " → ";

/// One sidebar link: page id plus the title shown for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Page id, used as link target and location hash.
    pub page_id: String,
    /// Display title with any section prefix stripped.
    pub title: String,
}

/// A run of adjacent corpus entries sharing a section value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavGroup {
    /// Section label; `None` for an anonymous group.
    pub section: Option<String>,
    /// Links in corpus order.
    pub entries: Vec<NavEntry>,
}

/// Assemble the navigation tree and page corpus in one forward pass.
///
/// Group boundaries fall exactly where the section value changes
/// between adjacent corpus entries, `None` counting as a value of its
/// own. Two runs with the same label that are not adjacent produce two
/// separate groups; nothing is merged across the pass.
#[must_use]
pub fn assemble(corpus: SortedCorpus) -> (Vec<NavGroup>, PageCorpus) {
    let mut groups: Vec<NavGroup> = Vec::new();
    let mut current: Option<NavGroup> = None;
    let mut pages = PageCorpus::default();

    for fragment in corpus {
        let starts_group = current
            .as_ref()
            .is_none_or(|group| group.section != fragment.section);
        if starts_group {
            if let Some(done) = current.take() {
                groups.push(done);
            }
            current = Some(NavGroup {
                section: fragment.section.clone(),
                entries: Vec::new(),
            });
        }
        if let Some(group) = current.as_mut() {
            group.entries.push(NavEntry {
                page_id: fragment.id.clone(),
                title: display_title(&fragment.title),
            });
        }
        pages.insert(fragment.id, fragment.content);
    }
    if let Some(done) = current.take() {
        groups.push(done);
    }

    (groups, pages)
}

/// Portion of a title after its last section separator, or the full
/// title when no separator is present.
fn display_title(title: &str) -> String {
    match title.rfind(SECTION_SEPARATOR) {
        Some(pos) => title[pos + SECTION_SEPARATOR.len()..].to_owned(),
        None => title.to_owned(),
    }
}
