//! Behavior reactions
//!
//! Every handler is a function from (event, document) to a `Reaction`;
//! the page applies it afterwards.

use bankist_dom::Mutation;

use crate::ScrollRequest;

/// What a behavior wants done in response to one event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reaction {
    /// Applied in order
    pub mutations: Vec<Mutation>,
    pub prevent_default: bool,
    pub scroll: Option<ScrollRequest>,
}

impl Reaction {
    /// Ignore the event
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_mutations(mutations: Vec<Mutation>) -> Self {
        Self { mutations, ..Self::default() }
    }

    pub fn preventing_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty() && !self.prevent_default && self.scroll.is_none()
    }
}
