//! Corpus ordering and title collision handling.

use std::collections::HashMap;

use tracing::warn;

use crate::fragment::Fragment;

/// Fragments in final corpus order.
///
/// Sorted by `(order, title)` ascending with plain lexicographic title
/// comparison, so the ordering is deterministic for identical input.
/// All fragments sharing an `order` value are contiguous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortedCorpus(Vec<Fragment>);

impl SortedCorpus {
    /// Number of fragments in the corpus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the corpus is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fragments in corpus order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.0.iter()
    }
}

impl IntoIterator for SortedCorpus {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortedCorpus {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sort fragments into final corpus order.
///
/// Sorts by `(order, title)` ascending. A duplicate title is a
/// data-hygiene problem on the caller's side: the later entry in sort
/// order replaces the earlier one in place, and the collision is logged
/// so it shows up in build output instead of silently losing a page.
#[must_use]
pub fn collect(fragments: impl IntoIterator<Item = Fragment>) -> SortedCorpus {
    let mut fragments: Vec<Fragment> = fragments.into_iter().collect();
    fragments.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));

    let mut slots: HashMap<String, usize> = HashMap::with_capacity(fragments.len());
    let mut corpus: Vec<Fragment> = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        match slots.get(&fragment.title) {
            Some(&slot) => {
                warn!(
                    title = %fragment.title,
                    kept = %fragment.id,
                    dropped = %corpus[slot].id,
                    "duplicate fragment title, keeping the later entry"
                );
                corpus[slot] = fragment;
            }
            None => {
                slots.insert(fragment.title.clone(), corpus.len());
                corpus.push(fragment);
            }
        }
    }

    SortedCorpus(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(title: &str, id: &str, order: u32) -> Fragment {
        Fragment::new(title, id, format!("# {title}"), order)
    }

    #[test]
    fn test_sorts_by_order_then_title() {
        let corpus = collect(vec![
            fragment("Zebra", "zebra", 2),
            fragment("Intro", "intro", 0),
            fragment("Apple", "apple", 2),
            fragment("Middle", "middle", 1),
        ]);

        let titles: Vec<_> = corpus.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["Intro", "Middle", "Apple", "Zebra"]);
    }

    #[test]
    fn test_equal_keys_are_stable_across_runs() {
        let input = || {
            vec![
                fragment("Same", "first", 1),
                fragment("Other", "other", 1),
                fragment("Alpha", "alpha", 0),
            ]
        };

        assert_eq!(collect(input()), collect(input()));
    }

    #[test]
    fn test_duplicate_title_keeps_later_entry_in_sort_order() {
        let corpus = collect(vec![
            fragment("Guide", "guide-old", 0),
            fragment("Guide", "guide-new", 1),
        ]);

        assert_eq!(corpus.len(), 1);
        let kept = corpus.iter().next().unwrap();
        assert_eq!(kept.id, "guide-new");
    }

    #[test]
    fn test_empty_input_yields_empty_corpus() {
        let corpus = collect(Vec::new());
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
    }

    #[test]
    fn test_fragments_with_same_order_stay_contiguous() {
        let corpus = collect(vec![
            fragment("B", "b", 1).with_section("One"),
            fragment("D", "d", 2).with_section("Two"),
            fragment("A", "a", 1).with_section("One"),
            fragment("C", "c", 2).with_section("Two"),
        ]);

        let orders: Vec<_> = corpus.iter().map(|f| f.order).collect();
        assert_eq!(orders, [1, 1, 2, 2]);
    }
}
