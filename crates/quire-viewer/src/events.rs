//! Event dispatch from the hosting environment.

use crate::router::PageRouter;
use crate::surface::ViewSurface;

/// UI events the hosting environment can raise.
///
/// These are the only externally triggerable operations; each runs to
/// completion before the next is handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// The artifact was opened; carries the initial location hash
    /// (empty when absent).
    Opened { location_hash: String },
    /// The location hash changed (back/forward navigation).
    HashChanged { hash: String },
    /// A navigation link was clicked.
    LinkClicked { page_id: String },
    /// The sidebar toggle control was pressed.
    MenuToggled,
    /// A click landed outside the sidebar; closes it on small
    /// viewports only.
    OutsideClick { small_viewport: bool },
}

impl PageRouter {
    /// Route an event to the matching router operation.
    pub fn dispatch(&mut self, event: ViewEvent, surface: &mut dyn ViewSurface) {
        match event {
            ViewEvent::Opened { location_hash } => self.initial_load(&location_hash, surface),
            ViewEvent::HashChanged { hash } => self.on_hash_change(&hash, surface),
            ViewEvent::LinkClicked { page_id } => self.activate(&page_id, surface),
            ViewEvent::MenuToggled => self.toggle_sidebar(surface),
            ViewEvent::OutsideClick { small_viewport } => {
                if small_viewport {
                    self.close_sidebar(surface);
                }
            }
        }
    }
}
