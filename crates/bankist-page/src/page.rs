//! Page
//!
//! Owns the document, the viewport and every behavior. Host input arrives
//! as events, scrolls and resizes; each call runs to completion and leaves
//! the document updated.

use bankist_dom::{DOMRect, Document, Event, EventType, NodeId};

use crate::components::{
    HoverFade, LazyImages, Modal, SectionReveal, Slider, SmoothScroll, StickyNav, Tabs,
};
use crate::{
    Handler, ListenerRegistry, PageConfig, PageError, Reaction, ScrollBehavior, ScrollRequest, Viewport,
};

/// Result of delivering one event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Some handler cancelled the browser's default action
    pub default_prevented: bool,
    /// Handlers invoked along the propagation path
    pub handlers_run: usize,
}

/// The landing page with all behaviors attached
#[derive(Debug)]
pub struct Page {
    document: Document,
    viewport: Viewport,
    config: PageConfig,
    listeners: ListenerRegistry,
    modal: Modal,
    smooth_scroll: SmoothScroll,
    tabs: Tabs,
    hover_fade: HoverFade,
    sticky_nav: StickyNav,
    reveal: SectionReveal,
    lazy_images: LazyImages,
    slider: Slider,
    /// Smooth-scroll requests not yet taken by the host
    scroll_requests: Vec<ScrollRequest>,
}

impl Page {
    /// Select every behavior's elements, initialize, wire listeners and run
    /// the first visibility check
    pub fn attach(mut document: Document, viewport: Viewport, config: PageConfig) -> Result<Self, PageError> {
        let modal = Modal::select(&document, &config.modal)?;
        let smooth_scroll = SmoothScroll::select(&document, &config.scroll)?;
        let tabs = Tabs::select(&document, &config.tabs)?;
        let hover_fade = HoverFade::select(&document, &config.hover)?;
        let sticky_nav = StickyNav::select(&document, &config.sticky)?;
        let reveal = SectionReveal::select(&document, &config.reveal)?;
        let lazy_images = LazyImages::select(&document, &config.lazy)?;
        let mut slider = Slider::select(&document, &config.slider)?;
        tracing::debug!(
            tabs = tabs.tabs().len(),
            sections = reveal.sections().len(),
            images = lazy_images.images().len(),
            slides = slider.slide_count(),
            "Selected page elements"
        );

        document.apply_all(&reveal.init().mutations)?;
        slider.init(&mut document)?;

        let mut listeners = ListenerRegistry::new();
        modal.wire(&mut listeners);
        smooth_scroll.wire(&mut listeners);
        tabs.wire(&mut listeners);
        hover_fade.wire(&mut listeners);
        slider.wire(&mut listeners);

        let mut page = Self {
            document,
            viewport,
            config,
            listeners,
            modal,
            smooth_scroll,
            tabs,
            hover_fade,
            sticky_nav,
            reveal,
            lazy_images,
            slider,
            scroll_requests: Vec::new(),
        };
        page.refresh()?;

        tracing::debug!(url = page.document.url(), listeners = page.listeners.len(), "Page attached");
        Ok(page)
    }

    /// Parse markup and attach
    pub fn load_html(html: &str, viewport: Viewport, config: PageConfig) -> Result<Self, PageError> {
        let document = bankist_html::parse(html)?;
        Self::attach(document, viewport, config)
    }

    /// Deliver an event to the target and, if it bubbles, its ancestors up
    /// to the document
    pub fn dispatch(&mut self, mut event: Event) -> Result<DispatchOutcome, PageError> {
        tracing::trace!(event = event.event_type.name(), node = %event.target, "Dispatching event");
        let mut outcome = DispatchOutcome::default();

        for node in ListenerRegistry::propagation_path(self.document.tree(), &event) {
            event.current_target = Some(node);
            let handlers = self.listeners.handlers(node, event.event_type).to_vec();
            for handler in handlers {
                tracing::trace!(?handler, node = %node, "Running handler");
                let reaction = self.run_handler(handler, &event)?;
                if reaction.prevent_default {
                    event.prevent_default();
                }
                self.apply(reaction)?;
                outcome.handlers_run += 1;
            }
        }

        outcome.default_prevented = event.is_default_prevented();
        Ok(outcome)
    }

    fn run_handler(&mut self, handler: Handler, event: &Event) -> Result<Reaction, PageError> {
        let document = &self.document;
        let reaction = match handler {
            Handler::OpenModal => self.modal.open(),
            Handler::CloseModal => self.modal.close(),
            Handler::ModalKeys => self.modal.on_key_down(document, event),
            Handler::NavLinkScroll => self.smooth_scroll.on_link_click(document, event)?,
            Handler::ScrollToSection => self.smooth_scroll.on_button_click(),
            Handler::SwitchTab => self.tabs.on_click(document, event)?,
            Handler::HoverFade(opacity) => self.hover_fade.on_hover(document, event, opacity)?,
            Handler::NextSlide => self.slider.next_slide(document),
            Handler::PreviousSlide => self.slider.previous_slide(document),
            Handler::SliderKeys => self.slider.on_key_down(document, event),
            Handler::DotClick => self.slider.on_dot_click(document, event),
            Handler::ImageLoaded => {
                // One-shot: the listener goes away with the blur label
                self.listeners.remove(event.target, EventType::Load, Handler::ImageLoaded);
                self.lazy_images.on_load(event.target)
            }
        };
        Ok(reaction)
    }

    fn apply(&mut self, reaction: Reaction) -> Result<(), PageError> {
        self.document.apply_all(&reaction.mutations)?;
        if let Some(request) = reaction.scroll {
            tracing::debug!(node = %request.target, behavior = ?request.behavior, "Scroll requested");
            match request.behavior {
                ScrollBehavior::Smooth => self.scroll_requests.push(request),
                ScrollBehavior::Instant => {
                    self.scroll_into_view(request.target)?;
                }
            }
        }
        Ok(())
    }

    /// Re-run every visibility watcher against the current viewport
    pub fn refresh(&mut self) -> Result<(), PageError> {
        let sticky = self.sticky_nav.check(&self.viewport, &self.document);
        self.apply(sticky)?;

        let reveal = self.reveal.check(&self.viewport, &self.document);
        self.apply(reveal)?;

        let lazy = self.lazy_images.check(&self.viewport, &self.document)?;
        self.apply(lazy)?;
        for &image in self.lazy_images.pending_loads() {
            self.listeners.add(image, EventType::Load, Handler::ImageLoaded);
        }
        Ok(())
    }

    /// Scroll vertically to document row `top`
    pub fn scroll_to(&mut self, top: f64) -> Result<(), PageError> {
        let left = self.viewport.scroll_x;
        self.viewport.scroll_to(left, top);
        tracing::trace!(top = self.viewport.scroll_y, "Scrolled");
        self.refresh()
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), PageError> {
        self.viewport.resize(width, height);
        if self.config.sticky.remeasure_on_resize {
            self.sticky_nav.remeasure(&self.document);
        }
        self.refresh()
    }

    /// Drain the scroll requests made since the last call
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }

    /// Finish pending scrolls at once: the viewport jumps so the last
    /// requested element sits at the top. Returns whether it moved.
    pub fn settle_scroll(&mut self) -> Result<bool, PageError> {
        let Some(request) = self.take_scroll_requests().pop() else {
            return Ok(false);
        };
        self.scroll_into_view(request.target)
    }

    /// Jump so `target` sits at the top of the viewport
    fn scroll_into_view(&mut self, target: NodeId) -> Result<bool, PageError> {
        let Some(rect) = self.document.layout_rect(target) else {
            tracing::warn!(node = %target, "Scroll target has no layout box");
            return Ok(false);
        };
        self.scroll_to(rect.y)?;
        Ok(true)
    }

    /// The host finished loading an image's current source
    pub fn image_loaded(&mut self, image: NodeId) -> Result<DispatchOutcome, PageError> {
        self.dispatch(Event::load(image))
    }

    /// Update an element's layout box. Call `refresh` once all boxes are set.
    pub fn set_layout_rect(&mut self, node: NodeId, rect: DOMRect) -> Result<(), PageError> {
        Ok(self.document.set_layout_rect(node, rect)?)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn current_slide(&self) -> usize {
        self.slider.current_slide()
    }

    pub fn pending_image_loads(&self) -> &[NodeId] {
        self.lazy_images.pending_loads()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn tabs(&self) -> &Tabs {
        &self.tabs
    }

    pub fn sticky_nav(&self) -> &StickyNav {
        &self.sticky_nav
    }

    pub fn reveal(&self) -> &SectionReveal {
        &self.reveal
    }

    pub fn lazy_images(&self) -> &LazyImages {
        &self.lazy_images
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }
}
