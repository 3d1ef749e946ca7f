//! Page corpus embedded into the built artifact.

use std::collections::HashMap;

use tracing::warn;

/// Mapping from page id to raw markdown content.
///
/// Carries an explicit ordered id list beside the map: corpus order
/// decides both the embedded data block layout and which page the
/// viewer falls back to when the location hash is empty. Nothing relies
/// on map iteration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageCorpus {
    ids: Vec<String>,
    pages: HashMap<String, String>,
}

impl PageCorpus {
    /// Insert a page, keeping insertion order for new ids.
    ///
    /// Page ids must be unique; on a collision the later content
    /// replaces the earlier one (the id keeps its original position)
    /// and the collision is logged.
    pub fn insert(&mut self, id: impl Into<String>, content: impl Into<String>) {
        let id = id.into();
        if self.pages.insert(id.clone(), content.into()).is_some() {
            warn!(page = %id, "duplicate page id, keeping the later content");
        } else {
            self.ids.push(id);
        }
    }

    /// Look up a page's raw markdown by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.pages.get(id).map(String::as_str)
    }

    /// Check whether a page id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.pages.contains_key(id)
    }

    /// First page id in corpus order, if any.
    #[must_use]
    pub fn first_id(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    /// Page ids in corpus order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check whether the corpus is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate `(id, content)` pairs in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ids
            .iter()
            .filter_map(|id| self.pages.get(id).map(|content| (id.as_str(), content.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut corpus = PageCorpus::default();
        corpus.insert("zeta", "z");
        corpus.insert("alpha", "a");

        assert_eq!(corpus.first_id(), Some("zeta"));
        let ids: Vec<_> = corpus.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["zeta", "alpha"]);
    }

    #[test]
    fn test_duplicate_id_keeps_later_content_and_position() {
        let mut corpus = PageCorpus::default();
        corpus.insert("a", "old");
        corpus.insert("b", "middle");
        corpus.insert("a", "new");

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get("a"), Some("new"));
        assert_eq!(corpus.first_id(), Some("a"));
    }

    #[test]
    fn test_lookup_of_missing_id_is_none() {
        let corpus = PageCorpus::default();
        assert_eq!(corpus.get("nope"), None);
        assert!(!corpus.contains("nope"));
        assert!(corpus.is_empty());
        assert_eq!(corpus.first_id(), None);
    }
}
