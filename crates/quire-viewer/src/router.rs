//! Page router.

use quire_corpus::PageCorpus;
use tracing::debug;

use crate::state::ViewerState;
use crate::surface::ViewSurface;

/// Owns the viewer state and drives page activation.
///
/// The router is the only mutator of [`ViewerState`]. Its three entry
/// points map one-to-one onto the events the hosting environment can
/// raise: link clicks ([`activate`](Self::activate)), location-hash
/// changes ([`on_hash_change`](Self::on_hash_change)), and the initial
/// open ([`initial_load`](Self::initial_load)).
pub struct PageRouter {
    pages: PageCorpus,
    state: ViewerState,
}

impl PageRouter {
    /// Create a router over the embedded page corpus.
    #[must_use]
    pub fn new(pages: PageCorpus) -> Self {
        Self {
            pages,
            state: ViewerState::default(),
        }
    }

    /// Current viewer state.
    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Activate a page by id.
    ///
    /// An unknown id leaves the state and the surface untouched; the
    /// triggering UI event must never crash the viewer, so the miss is
    /// only surfaced as a diagnostic. A known id re-renders the page
    /// from raw markdown, replaces the displayed content, moves the
    /// navigation highlight, resets scroll, and records the id in both
    /// the viewer state and the location hash.
    pub fn activate(&mut self, page_id: &str, surface: &mut dyn ViewSurface) {
        let Some(markdown) = self.pages.get(page_id) else {
            debug!(page = page_id, "activation ignored, unknown page id");
            return;
        };
        let html = quire_renderer::render(markdown);

        surface.replace_content(&html);
        surface.set_active_link(page_id);
        surface.scroll_to_top();
        surface.set_location_hash(page_id);
        self.state.active_page = Some(page_id.to_owned());
    }

    /// Handle a location-hash change. An empty hash is a no-op.
    pub fn on_hash_change(&mut self, new_hash: &str, surface: &mut dyn ViewSurface) {
        if !new_hash.is_empty() {
            self.activate(new_hash, surface);
        }
    }

    /// Handle the initial open of the artifact.
    ///
    /// Activates the page named by the location hash when it exists,
    /// otherwise the first page in corpus order. The artifact is only
    /// built with at least one fragment; an empty corpus leaves the
    /// viewer blank.
    pub fn initial_load(&mut self, location_hash: &str, surface: &mut dyn ViewSurface) {
        let target = if !location_hash.is_empty() && self.pages.contains(location_hash) {
            Some(location_hash.to_owned())
        } else {
            self.pages.first_id().map(str::to_owned)
        };
        if let Some(page_id) = target {
            self.activate(&page_id, surface);
        }
    }

    /// Toggle sidebar visibility.
    pub fn toggle_sidebar(&mut self, surface: &mut dyn ViewSurface) {
        self.state.sidebar_open = !self.state.sidebar_open;
        surface.set_sidebar_visible(self.state.sidebar_open);
    }

    /// Close the sidebar if it is open.
    pub fn close_sidebar(&mut self, surface: &mut dyn ViewSurface) {
        if self.state.sidebar_open {
            self.state.sidebar_open = false;
            surface.set_sidebar_visible(false);
        }
    }
}
