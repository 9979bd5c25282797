//! Event listener registry
//!
//! Handlers are registered per (node, event type), the way
//! `addEventListener` attaches them. Delegation falls out of bubbling: a
//! handler on a container sees every event from its descendants.

use std::collections::HashMap;

use bankist_dom::{DomTree, Event, EventType, NodeId};

/// Opacity applied by the nav hover handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opacity {
    /// Mouse entered a link
    Faded,
    /// Mouse left a link
    Full,
}

/// Registered handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    OpenModal,
    CloseModal,
    ModalKeys,
    NavLinkScroll,
    ScrollToSection,
    SwitchTab,
    HoverFade(Opacity),
    NextSlide,
    PreviousSlide,
    SliderKeys,
    DotClick,
    ImageLoaded,
}

/// Listeners by node and event type, in registration order
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: HashMap<(NodeId, EventType), Vec<Handler>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Registering the same handler twice on the same
    /// node and event is a no-op.
    pub fn add(&mut self, node: NodeId, event_type: EventType, handler: Handler) {
        let handlers = self.listeners.entry((node, event_type)).or_default();
        if !handlers.contains(&handler) {
            handlers.push(handler);
        }
    }

    pub fn remove(&mut self, node: NodeId, event_type: EventType, handler: Handler) -> bool {
        let Some(handlers) = self.listeners.get_mut(&(node, event_type)) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|h| *h != handler);
        handlers.len() != before
    }

    /// Handlers on one node for one event type
    pub fn handlers(&self, node: NodeId, event_type: EventType) -> &[Handler] {
        self.listeners
            .get(&(node, event_type))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total registered handlers
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nodes an event visits: the target, then its ancestors up to the
    /// document when the event bubbles
    pub fn propagation_path(tree: &DomTree, event: &Event) -> Vec<NodeId> {
        let mut path = vec![event.target];
        if event.event_type.bubbles() {
            path.extend(tree.ancestors(event.target));
        }
        path
    }
}
