//! Documentation fragment model.

/// One source markdown document plus its navigation metadata.
///
/// Fragments are created once by a storage backend from already-read
/// files and are read-only afterwards; the assembler consumes them when
/// the corpus is emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// Display title, possibly carrying a section prefix separated by
    /// [`crate::SECTION_SEPARATOR`].
    pub title: String,
    /// Stable page identifier, also used as the location hash.
    pub id: String,
    /// Raw markdown content. Empty when the source file was unreadable.
    pub content: String,
    /// Ordering rank; fragments sharing a rank stay contiguous after
    /// sorting, which section grouping relies on.
    pub order: u32,
    /// Section label, `None` for ungrouped fragments.
    pub section: Option<String>,
}

impl Fragment {
    /// Create a fragment without a section label.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        id: impl Into<String>,
        content: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            content: content.into(),
            order,
            section: None,
        }
    }

    /// Attach a section label.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}
