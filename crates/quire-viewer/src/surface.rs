//! Seam between the router and the hosting environment.

/// Operations the router performs against the display.
///
/// The hosting environment (the artifact's document shell) implements
/// this; the router stays testable against a recording fake. All
/// methods are fire-and-forget: the surface has no way to reject an
/// update.
pub trait ViewSurface {
    /// Replace the displayed document with freshly rendered HTML.
    fn replace_content(&mut self, html: &str);

    /// Mark the navigation link for `page_id` as the sole active one.
    fn set_active_link(&mut self, page_id: &str);

    /// Reset the viewport scroll position to the top.
    fn scroll_to_top(&mut self);

    /// Update the location hash to `page_id`.
    fn set_location_hash(&mut self, page_id: &str);

    /// Show or hide the sidebar.
    fn set_sidebar_visible(&mut self, visible: bool);
}
