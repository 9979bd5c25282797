//! Document mutations
//!
//! Behaviors describe their effect on the page as a list of mutations,
//! which the document then applies in order.

use crate::NodeId;

/// One change to an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AddClass { node: NodeId, class: String },
    RemoveClass { node: NodeId, class: String },
    SetStyle { node: NodeId, property: String, value: String },
    SetAttribute { node: NodeId, name: String, value: String },
}

impl Mutation {
    pub fn add_class(node: NodeId, class: impl Into<String>) -> Self {
        Mutation::AddClass { node, class: class.into() }
    }

    pub fn remove_class(node: NodeId, class: impl Into<String>) -> Self {
        Mutation::RemoveClass { node, class: class.into() }
    }

    pub fn set_style(node: NodeId, property: impl Into<String>, value: impl Into<String>) -> Self {
        Mutation::SetStyle { node, property: property.into(), value: value.into() }
    }

    pub fn set_attribute(node: NodeId, name: impl Into<String>, value: impl Into<String>) -> Self {
        Mutation::SetAttribute { node, name: name.into(), value: value.into() }
    }

    /// Element the mutation applies to
    pub fn node(&self) -> NodeId {
        match self {
            Mutation::AddClass { node, .. }
            | Mutation::RemoveClass { node, .. }
            | Mutation::SetStyle { node, .. }
            | Mutation::SetAttribute { node, .. } => *node,
        }
    }
}
