//! DOM Events
//!
//! User-input and resource events delivered to the page.

use crate::NodeId;

/// Event types the page reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
    MouseOver,
    MouseOut,
    Load,
}

impl EventType {
    /// Check if this event type bubbles to ancestors
    pub fn bubbles(&self) -> bool {
        !matches!(self, EventType::Load)
    }

    /// Check if listeners may cancel the default action
    pub fn cancelable(&self) -> bool {
        !matches!(self, EventType::Load)
    }

    /// DOM event name
    pub fn name(&self) -> &'static str {
        match self {
            EventType::Click => "click",
            EventType::KeyDown => "keydown",
            EventType::MouseOver => "mouseover",
            EventType::MouseOut => "mouseout",
            EventType::Load => "load",
        }
    }
}

/// DOM event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub target: NodeId,
    /// Listener currently running, set during dispatch
    pub current_target: Option<NodeId>,
    /// `KeyboardEvent.key` for keydown events
    pub key: Option<String>,
    default_prevented: bool,
}

impl Event {
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            current_target: None,
            key: None,
            default_prevented: false,
        }
    }

    /// Click on an element
    pub fn click(target: NodeId) -> Self {
        Self::new(EventType::Click, target)
    }

    /// Keydown with no focused element, targeting the document
    pub fn key_down(key: &str) -> Self {
        Self::key_down_on(NodeId::ROOT, key)
    }

    /// Keydown on a focused element
    pub fn key_down_on(target: NodeId, key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::new(EventType::KeyDown, target)
        }
    }

    pub fn mouse_over(target: NodeId) -> Self {
        Self::new(EventType::MouseOver, target)
    }

    pub fn mouse_out(target: NodeId) -> Self {
        Self::new(EventType::MouseOut, target)
    }

    /// Resource finished loading
    pub fn load(target: NodeId) -> Self {
        Self::new(EventType::Load, target)
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.event_type.cancelable() {
            self.default_prevented = true;
        }
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
