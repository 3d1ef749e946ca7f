//! Viewer state.

/// The single piece of runtime state, owned and mutated only by the
/// [`PageRouter`](crate::PageRouter).
///
/// Initialized once when the artifact is opened, mutated on every
/// navigation or sidebar event, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewerState {
    /// Id of the page currently rendered into the viewport; `None`
    /// until the first successful activation.
    pub active_page: Option<String>,
    /// Sidebar visibility on small viewports. Orthogonal to the active
    /// page.
    pub sidebar_open: bool,
}
