//! Tab dispatcher: owns the active view and repaints the shared region.

use crate::content::ContentStore;
use crate::surface::{Region, Surface};
use crate::views::{self, View};
use maud::Markup;

#[derive(Debug, Default)]
pub struct TabDispatcher {
    active: Option<View>,
}

impl TabDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed view, if any has been selected.
    pub fn active(&self) -> Option<View> {
        self.active
    }

    /// Replace the content region with `view` rendered from `store`.
    ///
    /// Synchronous and unqueued. Calling this before the store is loaded
    /// renders whatever the empty store yields.
    pub fn select_view(
        &mut self,
        view: View,
        store: &ContentStore,
        surface: &mut dyn Surface,
    ) -> Markup {
        if view.needs_content() && !store.is_loaded() {
            tracing::debug!(%view, "view selected before content finished loading");
        }

        let markup = views::render(view, store);
        surface.render(Region::Content, &markup);
        self.active = Some(view);
        markup
    }
}
