//! Menu fade animation
//!
//! Hovering a nav link fades its sibling links and the logo; leaving the
//! link restores them. Both directions share one handler parameterized by
//! the target opacity.

use bankist_dom::{Document, Event, EventType, Mutation, NodeId, Selector};

use super::{closest, select_one};
use crate::{Handler, HoverConfig, ListenerRegistry, Opacity, PageError, Reaction};

#[derive(Debug, Clone)]
pub struct HoverFade {
    nav: NodeId,
    nav_selector: Selector,
    link_selector: Selector,
    logo_selector: Selector,
    logo: String,
    link_class: String,
    faded_opacity: f64,
    full_opacity: f64,
}

impl HoverFade {
    pub fn select(document: &Document, config: &HoverConfig) -> Result<Self, PageError> {
        Ok(Self {
            nav: select_one(document, &config.nav)?,
            nav_selector: Selector::parse(&config.nav)?,
            link_selector: Selector::parse(&format!(".{}", config.link_class))?,
            logo_selector: Selector::parse(&config.logo)?,
            logo: config.logo.clone(),
            link_class: config.link_class.clone(),
            faded_opacity: config.faded_opacity,
            full_opacity: config.full_opacity,
        })
    }

    pub fn wire(&self, listeners: &mut ListenerRegistry) {
        listeners.add(self.nav, EventType::MouseOver, Handler::HoverFade(Opacity::Faded));
        listeners.add(self.nav, EventType::MouseOut, Handler::HoverFade(Opacity::Full));
    }

    pub fn opacity_value(&self, opacity: Opacity) -> f64 {
        match opacity {
            Opacity::Faded => self.faded_opacity,
            Opacity::Full => self.full_opacity,
        }
    }

    /// Set every other link in the hovered link's nav, and the logo, to
    /// `opacity`. Events whose target is not itself a nav link are ignored.
    pub fn on_hover(&self, document: &Document, event: &Event, opacity: Opacity) -> Result<Reaction, PageError> {
        let link = event.target;
        if !document.has_class(link, &self.link_class) {
            return Ok(Reaction::none());
        }
        let Some(nav) = closest(document, link, &self.nav_selector) else {
            return Ok(Reaction::none());
        };
        let logo = document
            .find(nav, &self.logo_selector)
            .ok_or_else(|| PageError::missing(self.logo.as_str()))?;

        let value = self.opacity_value(opacity).to_string();
        let mut mutations: Vec<Mutation> = document
            .find_all(nav, &self.link_selector)
            .into_iter()
            .filter(|&sibling| sibling != link)
            .map(|sibling| Mutation::set_style(sibling, "opacity", value.as_str()))
            .collect();
        mutations.push(Mutation::set_style(logo, "opacity", value));

        Ok(Reaction::with_mutations(mutations))
    }
}
