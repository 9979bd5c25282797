//! Bankist Page
//!
//! The landing page's interactive behaviors, each wired to the shared
//! document at attach time:
//! - Modal dialog (open, close, Escape)
//! - Smooth in-page scrolling
//! - Tabbed operations panel
//! - Navigation hover fade
//! - Sticky navigation
//! - Section reveal on scroll
//! - Lazy image loading
//! - Slider with dots and keyboard control
//!
//! # Example
//! ```rust,ignore
//! use bankist_page::{Page, PageConfig, Viewport};
//! use bankist_dom::Event;
//!
//! let mut page = Page::load_html(html, Viewport::new(1280.0, 800.0), PageConfig::default())?;
//! page.dispatch(Event::key_down("ArrowRight"))?;
//! assert_eq!(page.current_slide(), 1);
//! ```

pub mod components;
mod config;
mod error;
mod listeners;
mod page;
mod reaction;
mod viewport;
pub mod visibility;

pub use config::{
    HoverConfig, LazyConfig, ModalConfig, PageConfig, RevealConfig, ScrollConfig, SliderConfig,
    StickyConfig, TabsConfig,
};
pub use error::PageError;
pub use listeners::{Handler, ListenerRegistry, Opacity};
pub use page::{DispatchOutcome, Page};
pub use reaction::Reaction;
pub use viewport::{ScrollBehavior, ScrollRequest, Viewport};
pub use visibility::{Length, RootMargin, VisibilityEntry, VisibilityWatcher, WatcherOptions};
