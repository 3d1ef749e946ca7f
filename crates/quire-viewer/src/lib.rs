//! Page routing and viewer state for quire manuals.
//!
//! Models the runtime half of the manual: a [`PageRouter`] that owns
//! the single [`ViewerState`], selects pages from the embedded
//! [`PageCorpus`](quire_corpus::PageCorpus), renders them through
//! `quire-renderer`, and pushes the results to the hosting environment
//! through the [`ViewSurface`] trait.
//!
//! Execution is single-threaded and event-driven: the host translates
//! each UI event into a [`ViewEvent`] and hands it to
//! [`PageRouter::dispatch`], which runs to completion before the next
//! event. Activating an unknown page id is a logged no-op, never a
//! failure; every page switch re-renders the page from its raw
//! markdown.

mod events;
mod router;
mod state;
mod surface;

pub use events::ViewEvent;
pub use router::PageRouter;
pub use state::ViewerState;
pub use surface::ViewSurface;
