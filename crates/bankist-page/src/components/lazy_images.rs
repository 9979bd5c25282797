//! Lazy loading images
//!
//! Placeholder images carry their real source in a data attribute. When an
//! image comes within the root margin of the viewport its source is
//! swapped; the blur label is dropped only once the new source has loaded.

use bankist_dom::{Document, Mutation, NodeId};

use super::select_all;
use crate::{LazyConfig, PageError, Reaction, Viewport, VisibilityWatcher, WatcherOptions};

#[derive(Debug, Clone)]
pub struct LazyImages {
    images: Vec<NodeId>,
    data_key: String,
    lazy_class: String,
    watcher: VisibilityWatcher,
    /// Swapped images whose load event has not arrived yet
    pending: Vec<NodeId>,
}

impl LazyImages {
    pub fn select(document: &Document, config: &LazyConfig) -> Result<Self, PageError> {
        let images = select_all(document, &config.images)?;
        let mut watcher = VisibilityWatcher::new(WatcherOptions::new(
            config.root_margin.parse()?,
            [config.threshold],
        ));
        for &image in &images {
            watcher.observe(image);
        }

        Ok(Self {
            images,
            data_key: config.data_key.clone(),
            lazy_class: config.lazy_class.clone(),
            watcher,
            pending: Vec::new(),
        })
    }

    pub fn images(&self) -> &[NodeId] {
        &self.images
    }

    pub fn pending_loads(&self) -> &[NodeId] {
        &self.pending
    }

    /// Swap the source of every image that came into range
    pub fn check(&mut self, viewport: &Viewport, document: &Document) -> Result<Reaction, PageError> {
        let mut mutations = Vec::new();
        for entry in self.watcher.check(viewport, document) {
            if !entry.is_intersecting {
                continue;
            }
            let image = entry.target;
            self.watcher.unobserve(image);

            let Some(source) = document.element(image)?.data(&self.data_key) else {
                tracing::warn!(%image, key = %self.data_key, "Lazy image has no source");
                continue;
            };
            tracing::debug!(%image, %source, "Loading lazy image");
            mutations.push(Mutation::set_attribute(image, "src", source));
            self.pending.push(image);
        }
        Ok(Reaction::with_mutations(mutations))
    }

    /// The swapped source finished loading. Loads of images that were never
    /// swapped, or that already finished, change nothing.
    pub fn on_load(&mut self, image: NodeId) -> Reaction {
        let Some(index) = self.pending.iter().position(|&n| n == image) else {
            return Reaction::none();
        };
        self.pending.remove(index);
        Reaction::with_mutations(vec![Mutation::remove_class(image, &self.lazy_class)])
    }
}
