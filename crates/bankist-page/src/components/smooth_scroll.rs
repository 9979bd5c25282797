//! Smooth scrolling
//!
//! One delegated listener on the nav links container routes section links
//! to their anchors; the "learn more" button always goes to the first
//! section.

use bankist_dom::{Document, Event, EventType, NodeId};

use super::select_one;
use crate::{Handler, ListenerRegistry, PageError, Reaction, ScrollBehavior, ScrollConfig, ScrollRequest};

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    nav_links: NodeId,
    scroll_button: NodeId,
    scroll_target: NodeId,
    link_tag: String,
    href_marker: String,
    behavior: ScrollBehavior,
}

impl SmoothScroll {
    pub fn select(document: &Document, config: &ScrollConfig) -> Result<Self, PageError> {
        Ok(Self {
            nav_links: select_one(document, &config.nav_links)?,
            scroll_button: select_one(document, &config.scroll_button)?,
            scroll_target: select_one(document, &config.scroll_target)?,
            link_tag: config.link_tag.to_ascii_lowercase(),
            href_marker: config.href_marker.clone(),
            behavior: config.behavior,
        })
    }

    pub fn wire(&self, listeners: &mut ListenerRegistry) {
        listeners.add(self.nav_links, EventType::Click, Handler::NavLinkScroll);
        listeners.add(self.scroll_button, EventType::Click, Handler::ScrollToSection);
    }

    /// Delegated nav click: only links whose href names a section are
    /// routed, and the href is used as the anchor selector
    pub fn on_link_click(&self, document: &Document, event: &Event) -> Result<Reaction, PageError> {
        let Some(link) = document.tree().element(event.target) else {
            return Ok(Reaction::none());
        };
        if link.tag_name() != self.link_tag {
            return Ok(Reaction::none());
        }
        let Some(href) = link.get_attr("href").filter(|h| h.contains(self.href_marker.as_str())) else {
            return Ok(Reaction::none());
        };

        let section = document
            .query_selector(NodeId::ROOT, href)?
            .ok_or_else(|| PageError::missing(href))?;
        tracing::debug!(%href, "Scrolling to section");

        Ok(Reaction {
            prevent_default: true,
            scroll: Some(ScrollRequest::new(section, self.behavior)),
            ..Reaction::default()
        })
    }

    /// Call-to-action click, regardless of which child was hit
    pub fn on_button_click(&self) -> Reaction {
        Reaction {
            scroll: Some(ScrollRequest::new(self.scroll_target, self.behavior)),
            ..Reaction::default()
        }
    }
}
