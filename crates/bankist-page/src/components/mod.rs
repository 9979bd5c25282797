//! Page behaviors
//!
//! Each component selects its elements once, registers its listeners, and
//! turns events (or visibility entries) into reactions. Components never
//! touch each other's elements or state.

mod hover_fade;
mod lazy_images;
mod modal;
mod reveal;
mod slider;
mod smooth_scroll;
mod sticky_nav;
mod tabs;

pub use hover_fade::HoverFade;
pub use lazy_images::LazyImages;
pub use modal::Modal;
pub use reveal::SectionReveal;
pub use slider::Slider;
pub use smooth_scroll::SmoothScroll;
pub use sticky_nav::StickyNav;
pub use tabs::Tabs;

use bankist_dom::{Document, NodeId, Selector};

use crate::PageError;

/// First element matching `selector`, or `MissingElement`
pub(crate) fn select_one(document: &Document, selector: &str) -> Result<NodeId, PageError> {
    document
        .query_selector(NodeId::ROOT, selector)?
        .ok_or_else(|| PageError::missing(selector))
}

/// All elements matching `selector`, possibly none
pub(crate) fn select_all(document: &Document, selector: &str) -> Result<Vec<NodeId>, PageError> {
    Ok(document.query_selector_all(NodeId::ROOT, selector)?)
}

/// Nearest inclusive ancestor matching a parsed selector
pub(crate) fn closest(document: &Document, node: NodeId, selector: &Selector) -> Option<NodeId> {
    std::iter::once(node)
        .chain(document.tree().ancestors(node))
        .find(|&n| selector.matches(document.tree(), n))
}

/// Labels of one class on many elements
#[cfg(test)]
pub(crate) fn labelled(document: &Document, nodes: &[NodeId], class: &str) -> Vec<NodeId> {
    nodes
        .iter()
        .copied()
        .filter(|&n| document.has_class(n, class))
        .collect()
}
