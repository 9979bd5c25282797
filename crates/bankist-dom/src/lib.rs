//! Bankist DOM - Document Object Model
//!
//! Arena-based document tree with just enough of the DOM surface for the
//! page behaviors: class lists, datasets, inline styles, selectors, events
//! and layout rectangles.

mod classlist;
mod dataset;
mod document;
mod error;
mod events;
mod geometry;
mod mutation;
mod node;
mod selector;
mod style;
mod tree;

pub use classlist::DOMTokenList;
pub use dataset::DOMStringMap;
pub use document::Document;
pub use error::DomError;
pub use events::{Event, EventType};
pub use geometry::DOMRect;
pub use mutation::Mutation;
pub use node::{ElementData, Node, NodeData};
pub use selector::{CompoundSelector, Selector, SimpleSelector};
pub use style::CssStyleDeclaration;
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Root node ID (the document node)
    pub const ROOT: NodeId = NodeId(0);

    /// Null link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this is not the null link
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
