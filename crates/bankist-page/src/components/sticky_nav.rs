//! Sticky navigation
//!
//! The nav sticks once the header has scrolled out of view. The watcher's
//! root is shrunk by the nav height so the switch happens as the header's
//! bottom edge passes under the nav bar.

use bankist_dom::{Document, Mutation, NodeId};

use super::select_one;
use crate::{PageError, Reaction, RootMargin, StickyConfig, Viewport, VisibilityWatcher, WatcherOptions};

#[derive(Debug, Clone)]
pub struct StickyNav {
    nav: NodeId,
    header: NodeId,
    nav_height: f64,
    sticky_class: String,
    watcher: VisibilityWatcher,
}

impl StickyNav {
    pub fn select(document: &Document, config: &StickyConfig) -> Result<Self, PageError> {
        let nav = select_one(document, &config.nav)?;
        let header = select_one(document, &config.header)?;
        let nav_height = measure(document, nav);

        let mut watcher = VisibilityWatcher::new(WatcherOptions::new(
            RootMargin::px(-nav_height),
            [config.threshold],
        ));
        watcher.observe(header);
        tracing::debug!(nav_height, "Sticky nav measured");

        Ok(Self {
            nav,
            header,
            nav_height,
            sticky_class: config.sticky_class.clone(),
            watcher,
        })
    }

    pub fn nav(&self) -> NodeId {
        self.nav
    }

    pub fn header(&self) -> NodeId {
        self.header
    }

    /// Height used for the watcher's root margin
    pub fn nav_height(&self) -> f64 {
        self.nav_height
    }

    pub fn is_sticky(&self, document: &Document) -> bool {
        document.has_class(self.nav, &self.sticky_class)
    }

    /// Measure the nav again and shrink the watcher root accordingly
    pub fn remeasure(&mut self, document: &Document) {
        self.nav_height = measure(document, self.nav);
        self.watcher.set_root_margin(RootMargin::px(-self.nav_height));
        tracing::debug!(nav_height = self.nav_height, "Sticky nav re-measured");
    }

    /// Only the first entry of a batch decides the state; the watcher
    /// observes the header alone
    pub fn check(&mut self, viewport: &Viewport, document: &Document) -> Reaction {
        let entries = self.watcher.check(viewport, document);
        let Some(entry) = entries.first() else {
            return Reaction::none();
        };

        let mutation = if entry.is_intersecting {
            Mutation::remove_class(self.nav, &self.sticky_class)
        } else {
            Mutation::add_class(self.nav, &self.sticky_class)
        };
        Reaction::with_mutations(vec![mutation])
    }
}

fn measure(document: &Document, nav: NodeId) -> f64 {
    document.layout_rect(nav).map_or(0.0, |rect| rect.height)
}
