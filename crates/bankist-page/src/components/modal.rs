//! Modal window
//!
//! Open triggers remove the hidden label from the modal and its overlay;
//! the close button, an overlay click or the close key add it back.

use bankist_dom::{Document, Event, EventType, Mutation, NodeId};

use super::{select_all, select_one};
use crate::{Handler, ListenerRegistry, ModalConfig, PageError, Reaction};

#[derive(Debug, Clone)]
pub struct Modal {
    modal: NodeId,
    overlay: NodeId,
    close_button: NodeId,
    open_buttons: Vec<NodeId>,
    hidden_class: String,
    close_key: String,
}

impl Modal {
    pub fn select(document: &Document, config: &ModalConfig) -> Result<Self, PageError> {
        Ok(Self {
            modal: select_one(document, &config.modal)?,
            overlay: select_one(document, &config.overlay)?,
            close_button: select_one(document, &config.close_button)?,
            open_buttons: select_all(document, &config.open_buttons)?,
            hidden_class: config.hidden_class.clone(),
            close_key: config.close_key.clone(),
        })
    }

    pub fn wire(&self, listeners: &mut ListenerRegistry) {
        for &button in &self.open_buttons {
            listeners.add(button, EventType::Click, Handler::OpenModal);
        }
        listeners.add(self.close_button, EventType::Click, Handler::CloseModal);
        listeners.add(self.overlay, EventType::Click, Handler::CloseModal);
        listeners.add(NodeId::ROOT, EventType::KeyDown, Handler::ModalKeys);
    }

    pub fn modal(&self) -> NodeId {
        self.modal
    }

    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    /// Visible when the modal lacks the hidden label
    pub fn is_open(&self, document: &Document) -> bool {
        !document.has_class(self.modal, &self.hidden_class)
    }

    /// Show modal and overlay; the trigger link must not navigate
    pub fn open(&self) -> Reaction {
        Reaction::with_mutations(vec![
            Mutation::remove_class(self.modal, &self.hidden_class),
            Mutation::remove_class(self.overlay, &self.hidden_class),
        ])
        .preventing_default()
    }

    pub fn close(&self) -> Reaction {
        Reaction::with_mutations(vec![
            Mutation::add_class(self.modal, &self.hidden_class),
            Mutation::add_class(self.overlay, &self.hidden_class),
        ])
    }

    /// Close on the close key, but only while open
    pub fn on_key_down(&self, document: &Document, event: &Event) -> Reaction {
        if event.key.as_deref() == Some(self.close_key.as_str()) && self.is_open(document) {
            self.close()
        } else {
            Reaction::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal_page() -> (Document, Modal) {
        let mut doc = Document::default();
        let body = doc.body();
        doc.append_element(body, "a", &[("class", "btn--show-modal"), ("href", "#")]).unwrap();
        doc.append_element(body, "a", &[("class", "btn--show-modal"), ("href", "#")]).unwrap();
        let modal = doc.append_element(body, "div", &[("class", "modal hidden")]).unwrap();
        doc.append_element(modal, "button", &[("class", "btn--close-modal")]).unwrap();
        doc.append_element(body, "div", &[("class", "overlay hidden")]).unwrap();

        let component = Modal::select(&doc, &ModalConfig::default()).unwrap();
        (doc, component)
    }

    #[test]
    fn test_open_and_close() {
        let (mut doc, modal) = modal_page();
        assert!(!modal.is_open(&doc));

        let reaction = modal.open();
        assert!(reaction.prevent_default);
        doc.apply_all(&reaction.mutations).unwrap();
        assert!(modal.is_open(&doc));
        assert!(!doc.has_class(modal.overlay(), "hidden"));

        doc.apply_all(&modal.close().mutations).unwrap();
        assert!(!modal.is_open(&doc));
        assert!(doc.has_class(modal.overlay(), "hidden"));
    }

    #[test]
    fn test_escape_only_when_open() {
        let (mut doc, modal) = modal_page();

        assert!(modal.on_key_down(&doc, &Event::key_down("Escape")).is_empty());

        doc.apply_all(&modal.open().mutations).unwrap();
        assert!(modal.on_key_down(&doc, &Event::key_down("Enter")).is_empty());
        assert_eq!(modal.on_key_down(&doc, &Event::key_down("Escape")), modal.close());
    }

    #[test]
    fn test_missing_overlay() {
        let mut doc = Document::default();
        doc.append_element(doc.body(), "div", &[("class", "modal hidden")]).unwrap();

        let err = Modal::select(&doc, &ModalConfig::default()).unwrap_err();
        assert!(matches!(err, PageError::MissingElement { ref selector } if selector == ".overlay"));
    }
}
