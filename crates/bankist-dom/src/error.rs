//! DOM errors

use crate::NodeId;

/// Errors raised by tree access, selector parsing and mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("No such node: {0}")]
    NoSuchNode(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),
}
