//! Tabbed component

use bankist_dom::{Document, Event, EventType, Mutation, NodeId, Selector};

use super::{closest, select_all, select_one};
use crate::{Handler, ListenerRegistry, PageError, Reaction, TabsConfig};

#[derive(Debug, Clone)]
pub struct Tabs {
    container: NodeId,
    tabs: Vec<NodeId>,
    panels: Vec<NodeId>,
    tab_selector: Selector,
    tab_active_class: String,
    content_active_class: String,
    content_class_prefix: String,
    data_key: String,
}

impl Tabs {
    pub fn select(document: &Document, config: &TabsConfig) -> Result<Self, PageError> {
        Ok(Self {
            container: select_one(document, &config.container)?,
            tabs: select_all(document, &config.tab)?,
            panels: select_all(document, &config.content)?,
            tab_selector: Selector::parse(&config.tab)?,
            tab_active_class: config.tab_active_class.clone(),
            content_active_class: config.content_active_class.clone(),
            content_class_prefix: config.content_class_prefix.clone(),
            data_key: config.data_key.clone(),
        })
    }

    pub fn wire(&self, listeners: &mut ListenerRegistry) {
        listeners.add(self.container, EventType::Click, Handler::SwitchTab);
    }

    pub fn tabs(&self) -> &[NodeId] {
        &self.tabs
    }

    pub fn panels(&self) -> &[NodeId] {
        &self.panels
    }

    /// Delegated click. Clicks on the container itself (padding) resolve to
    /// no tab and are ignored; clicks on a tab's icon resolve to the tab.
    pub fn on_click(&self, document: &Document, event: &Event) -> Result<Reaction, PageError> {
        let Some(clicked) = closest(document, event.target, &self.tab_selector) else {
            return Ok(Reaction::none());
        };

        let tag = document.element(clicked)?.data(&self.data_key).unwrap_or_default();
        let panel_selector = format!(".{}{}", self.content_class_prefix, tag);
        let panel = document
            .query_selector(NodeId::ROOT, &panel_selector)?
            .ok_or_else(|| PageError::missing(panel_selector.as_str()))?;
        tracing::debug!(%tag, "Switching tab");

        let mut mutations: Vec<Mutation> = self
            .tabs
            .iter()
            .map(|&t| Mutation::remove_class(t, &self.tab_active_class))
            .chain(
                self.panels
                    .iter()
                    .map(|&p| Mutation::remove_class(p, &self.content_active_class)),
            )
            .collect();
        mutations.push(Mutation::add_class(clicked, &self.tab_active_class));
        mutations.push(Mutation::add_class(panel, &self.content_active_class));

        Ok(Reaction::with_mutations(mutations))
    }
}
