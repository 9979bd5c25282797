//! Slider
//!
//! Slides sit side by side and are shifted with `translateX`. Navigation
//! wraps in both directions. One dot per slide is generated at init, and
//! exactly one dot carries the active label at any time.

use bankist_dom::{Document, Event, EventType, Mutation, NodeId};

use super::{select_all, select_one};
use crate::{Handler, ListenerRegistry, PageError, Reaction, SliderConfig};

#[derive(Debug, Clone)]
pub struct Slider {
    slides: Vec<NodeId>,
    left_button: NodeId,
    right_button: NodeId,
    dot_container: NodeId,
    dots: Vec<NodeId>,
    current_slide: usize,
    dot_class: String,
    dot_active_class: String,
    data_key: String,
    next_key: String,
    previous_key: String,
}

impl Slider {
    pub fn select(document: &Document, config: &SliderConfig) -> Result<Self, PageError> {
        let slides = select_all(document, &config.slides)?;
        if slides.is_empty() {
            return Err(PageError::EmptySlider { selector: config.slides.clone() });
        }

        Ok(Self {
            slides,
            left_button: select_one(document, &config.left_button)?,
            right_button: select_one(document, &config.right_button)?,
            dot_container: select_one(document, &config.dot_container)?,
            dots: Vec::new(),
            current_slide: 0,
            dot_class: config.dot_class.clone(),
            dot_active_class: config.dot_active_class.clone(),
            data_key: config.data_key.clone(),
            next_key: config.next_key.clone(),
            previous_key: config.previous_key.clone(),
        })
    }

    /// Create the dots and show the first slide
    pub fn init(&mut self, document: &mut Document) -> Result<(), PageError> {
        self.create_dots(document)?;
        self.current_slide = 0;
        let mutations = self.show(document, 0);
        document.apply_all(&mutations)?;
        tracing::debug!(slides = self.slides.len(), "Slider initialized");
        Ok(())
    }

    /// One dot per slide, tagged with the slide index, in slide order
    pub fn create_dots(&mut self, document: &mut Document) -> Result<(), PageError> {
        let attribute = format!("data-{}", self.data_key);
        self.dots = (0..self.slides.len())
            .map(|i| {
                let index = i.to_string();
                document.append_element(
                    self.dot_container,
                    "button",
                    &[("class", self.dot_class.as_str()), (attribute.as_str(), index.as_str())],
                )
            })
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    pub fn wire(&self, listeners: &mut ListenerRegistry) {
        listeners.add(self.right_button, EventType::Click, Handler::NextSlide);
        listeners.add(self.left_button, EventType::Click, Handler::PreviousSlide);
        listeners.add(NodeId::ROOT, EventType::KeyDown, Handler::SliderKeys);
        listeners.add(self.dot_container, EventType::Click, Handler::DotClick);
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// Index of the last slide
    pub fn max_slide(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[NodeId] {
        &self.slides
    }

    pub fn dots(&self) -> &[NodeId] {
        &self.dots
    }

    /// Slide `i` is offset by `100 * (i - n)` percent
    pub fn go_to_slide(&self, n: usize) -> Vec<Mutation> {
        let n = n as i64;
        self.slides
            .iter()
            .enumerate()
            .map(|(i, &slide)| {
                let offset = 100 * (i as i64 - n);
                Mutation::set_style(slide, "transform", format!("translateX({offset}%)"))
            })
            .collect()
    }

    /// Active label on the dot tagged with slide `n` and on no other dot
    pub fn activate_dot(&self, document: &Document, n: usize) -> Vec<Mutation> {
        let target = self
            .dots
            .iter()
            .copied()
            .find(|&dot| self.dot_index(document, dot) == Some(n));

        let mut mutations: Vec<Mutation> = self
            .dots
            .iter()
            .map(|&dot| Mutation::remove_class(dot, &self.dot_active_class))
            .collect();
        if let Some(dot) = target {
            mutations.push(Mutation::add_class(dot, &self.dot_active_class));
        }
        mutations
    }

    pub fn next_slide(&mut self, document: &Document) -> Reaction {
        let n = if self.current_slide == self.max_slide() { 0 } else { self.current_slide + 1 };
        self.go_to(document, n)
    }

    pub fn previous_slide(&mut self, document: &Document) -> Reaction {
        let n = if self.current_slide == 0 { self.max_slide() } else { self.current_slide - 1 };
        self.go_to(document, n)
    }

    /// Show slide `n` and mark its dot. Out-of-range indices are ignored.
    pub fn go_to(&mut self, document: &Document, n: usize) -> Reaction {
        if n > self.max_slide() {
            tracing::warn!(slide = n, max = self.max_slide(), "Slide out of range");
            return Reaction::none();
        }
        self.current_slide = n;
        tracing::debug!(slide = n, "Showing slide");
        Reaction::with_mutations(self.show(document, n))
    }

    pub fn on_key_down(&mut self, document: &Document, event: &Event) -> Reaction {
        match event.key.as_deref() {
            Some(key) if key == self.next_key => self.next_slide(document),
            Some(key) if key == self.previous_key => self.previous_slide(document),
            _ => Reaction::none(),
        }
    }

    /// Delegated dot click; only dots themselves count
    pub fn on_dot_click(&mut self, document: &Document, event: &Event) -> Reaction {
        if !document.has_class(event.target, &self.dot_class) {
            return Reaction::none();
        }
        match self.dot_index(document, event.target) {
            Some(n) => self.go_to(document, n),
            None => {
                tracing::warn!(dot = %event.target, "Dot has no usable slide index");
                Reaction::none()
            }
        }
    }

    fn dot_index(&self, document: &Document, dot: NodeId) -> Option<usize> {
        document
            .tree()
            .element(dot)?
            .data(&self.data_key)?
            .parse()
            .ok()
    }

    fn show(&self, document: &Document, n: usize) -> Vec<Mutation> {
        let mut mutations = self.go_to_slide(n);
        mutations.extend(self.activate_dot(document, n));
        mutations
    }
}
