//! Reveal sections
//!
//! Every section starts hidden and is revealed the first time the visible
//! share of it reaches the threshold. Revealed sections are unobserved, so
//! the reveal happens once and is never undone.

use bankist_dom::{Document, Mutation, NodeId};

use super::select_all;
use crate::{PageError, Reaction, RevealConfig, Viewport, VisibilityWatcher, WatcherOptions};

#[derive(Debug, Clone)]
pub struct SectionReveal {
    sections: Vec<NodeId>,
    hidden_class: String,
    watcher: VisibilityWatcher,
}

impl SectionReveal {
    pub fn select(document: &Document, config: &RevealConfig) -> Result<Self, PageError> {
        let sections = select_all(document, &config.sections)?;
        let mut watcher = VisibilityWatcher::new(WatcherOptions::new(
            config.root_margin.parse()?,
            [config.threshold],
        ));
        for &section in &sections {
            watcher.observe(section);
        }

        Ok(Self {
            sections,
            hidden_class: config.hidden_class.clone(),
            watcher,
        })
    }

    pub fn sections(&self) -> &[NodeId] {
        &self.sections
    }

    /// Hide every section before the first check
    pub fn init(&self) -> Reaction {
        Reaction::with_mutations(
            self.sections
                .iter()
                .map(|&section| Mutation::add_class(section, &self.hidden_class))
                .collect(),
        )
    }

    /// Sections still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.watcher.observed_count()
    }

    pub fn check(&mut self, viewport: &Viewport, document: &Document) -> Reaction {
        let mut mutations = Vec::new();
        for entry in self.watcher.check(viewport, document) {
            if !entry.is_intersecting {
                continue;
            }
            tracing::debug!(section = %entry.target, ratio = entry.intersection_ratio, "Revealing section");
            mutations.push(Mutation::remove_class(entry.target, &self.hidden_class));
            self.watcher.unobserve(entry.target);
        }
        if !mutations.is_empty() && self.pending() == 0 {
            tracing::debug!("All sections revealed");
            self.watcher.disconnect();
        }
        Reaction::with_mutations(mutations)
    }
}

#[cfg(test)]
mod tests {
    use bankist_dom::DOMRect;

    use super::*;
    use crate::components::labelled;

    fn sections_page() -> (Document, SectionReveal) {
        let mut doc = Document::default();
        let body = doc.body();
        for i in 0..3_u32 {
            let section = doc.append_element(body, "section", &[("class", "section")]).unwrap();
            let top = 1000.0 * f64::from(i);
            doc.set_layout_rect(section, DOMRect::from_xywh(0.0, top, 1280.0, 1000.0)).unwrap();
        }

        let reveal = SectionReveal::select(&doc, &RevealConfig::default()).unwrap();
        doc.apply_all(&reveal.init().mutations).unwrap();
        (doc, reveal)
    }

    fn scrolled(top: f64) -> Viewport {
        let mut viewport = Viewport::new(1280.0, 800.0);
        viewport.scroll_to(0.0, top);
        viewport
    }

    #[test]
    fn test_init_hides_all() {
        let (doc, reveal) = sections_page();
        assert_eq!(labelled(&doc, reveal.sections(), "section--hidden"), reveal.sections());
    }

    #[test]
    fn test_reveal_visible_sections_in_one_batch() {
        let (mut doc, mut reveal) = sections_page();

        // Rows 500..1300 cover the tail of the first section and the head of the second
        doc.apply_all(&reveal.check(&scrolled(500.0), &doc).mutations).unwrap();

        let hidden = labelled(&doc, reveal.sections(), "section--hidden");
        assert_eq!(hidden, vec![reveal.sections()[2]]);
        assert_eq!(reveal.pending(), 1);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let (mut doc, mut reveal) = sections_page();
        let second = reveal.sections()[1];

        // Rows 300..1100: the second section is 10% visible
        doc.apply_all(&reveal.check(&scrolled(300.0), &doc).mutations).unwrap();
        assert!(doc.has_class(second, "section--hidden"));

        // Rows 400..1200: 20% visible
        doc.apply_all(&reveal.check(&scrolled(400.0), &doc).mutations).unwrap();
        assert!(!doc.has_class(second, "section--hidden"));
    }

    #[test]
    fn test_last_reveal_stops_watching() {
        let (mut doc, mut reveal) = sections_page();
        for top in [0.0, 1000.0, 2000.0] {
            doc.apply_all(&reveal.check(&scrolled(top), &doc).mutations).unwrap();
        }

        assert_eq!(reveal.pending(), 0);
        assert!(labelled(&doc, reveal.sections(), "section--hidden").is_empty());
        assert!(reveal.check(&scrolled(0.0), &doc).is_empty());
    }

    #[test]
    fn test_reveal_happens_once() {
        let (mut doc, mut reveal) = sections_page();
        let first = reveal.sections()[0];

        let reaction = reveal.check(&scrolled(0.0), &doc);
        assert_eq!(reaction.mutations, vec![Mutation::remove_class(first, "section--hidden")]);
        doc.apply_all(&reaction.mutations).unwrap();

        // Scrolling away and back never hides or re-reports it
        assert!(reveal.check(&scrolled(5000.0), &doc).is_empty());
        let back = reveal.check(&scrolled(0.0), &doc);
        assert!(back.mutations.iter().all(|m| m.node() != first));
        assert!(!doc.has_class(first, "section--hidden"));
    }

    #[test]
    fn test_bad_margin() {
        let doc = Document::default();
        let config = RevealConfig { root_margin: "ten".to_string(), ..RevealConfig::default() };
        assert!(matches!(
            SectionReveal::select(&doc, &config),
            Err(PageError::InvalidRootMargin(_))
        ));
    }
}
