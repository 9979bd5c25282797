//! Page Configuration
//!
//! Selectors, class labels and watcher options for every behavior. The
//! defaults match the Bankist markup; hosts can deserialize partial
//! overrides since every section falls back to its default.

use serde::{Deserialize, Serialize};

use crate::ScrollBehavior;

/// Configuration for all page behaviors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub modal: ModalConfig,
    pub scroll: ScrollConfig,
    pub tabs: TabsConfig,
    pub hover: HoverConfig,
    pub sticky: StickyConfig,
    pub reveal: RevealConfig,
    pub lazy: LazyConfig,
    pub slider: SliderConfig,
}

/// Modal dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub modal: String,
    pub overlay: String,
    pub close_button: String,
    /// Every element matching this opens the modal
    pub open_buttons: String,
    pub hidden_class: String,
    pub close_key: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal: ".modal".to_string(),
            overlay: ".overlay".to_string(),
            close_button: ".btn--close-modal".to_string(),
            open_buttons: ".btn--show-modal".to_string(),
            hidden_class: "hidden".to_string(),
            close_key: "Escape".to_string(),
        }
    }
}

/// Smooth-scroll router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub nav_links: String,
    /// Tag of clickable links inside `nav_links`
    pub link_tag: String,
    /// Substring an href must contain to be routed
    pub href_marker: String,
    pub scroll_button: String,
    pub scroll_target: String,
    pub behavior: ScrollBehavior,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_links: ".nav__links".to_string(),
            link_tag: "a".to_string(),
            href_marker: "section".to_string(),
            scroll_button: ".btn--scroll-to".to_string(),
            scroll_target: "#section--1".to_string(),
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Tabbed component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub container: String,
    pub tab: String,
    pub content: String,
    pub tab_active_class: String,
    pub content_active_class: String,
    /// Panel for tab `t` carries class `{content_class_prefix}{t}`
    pub content_class_prefix: String,
    /// Dataset key holding the tab tag (`tab` reads `data-tab`)
    pub data_key: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            container: ".operations__tab-container".to_string(),
            tab: ".operations__tab".to_string(),
            content: ".operations__content".to_string(),
            tab_active_class: "operations__tab--active".to_string(),
            content_active_class: "operations__content--active".to_string(),
            content_class_prefix: "operations__content--".to_string(),
            data_key: "tab".to_string(),
        }
    }
}

/// Navigation hover fade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub nav: String,
    pub link_class: String,
    /// Logo inside the nav bar
    pub logo: String,
    pub faded_opacity: f64,
    pub full_opacity: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            nav: ".nav".to_string(),
            link_class: "nav__link".to_string(),
            logo: "img".to_string(),
            faded_opacity: 0.5,
            full_opacity: 1.0,
        }
    }
}

/// Sticky navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickyConfig {
    pub nav: String,
    /// Sentinel whose visibility drives the sticky state
    pub header: String,
    pub sticky_class: String,
    pub threshold: f64,
    /// Re-measure the nav height when the viewport is resized. Off by
    /// default: the height is measured once at attach.
    pub remeasure_on_resize: bool,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            nav: ".nav".to_string(),
            header: ".header".to_string(),
            sticky_class: "sticky".to_string(),
            threshold: 0.0,
            remeasure_on_resize: false,
        }
    }
}

/// Section reveal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub sections: String,
    pub hidden_class: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            sections: ".section".to_string(),
            hidden_class: "section--hidden".to_string(),
            threshold: 0.15,
            root_margin: "0px".to_string(),
        }
    }
}

/// Lazy image loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyConfig {
    pub images: String,
    /// Dataset key holding the real source (`src` reads `data-src`)
    pub data_key: String,
    pub lazy_class: String,
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for LazyConfig {
    fn default() -> Self {
        Self {
            images: "img[data-src]".to_string(),
            data_key: "src".to_string(),
            lazy_class: "lazy-img".to_string(),
            root_margin: "200px".to_string(),
            threshold: 0.0,
        }
    }
}

/// Slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub slides: String,
    pub left_button: String,
    pub right_button: String,
    pub dot_container: String,
    pub dot_class: String,
    pub dot_active_class: String,
    /// Dataset key tagging each dot with its slide (`slide` reads `data-slide`)
    pub data_key: String,
    pub next_key: String,
    pub previous_key: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            slides: ".slide".to_string(),
            left_button: ".slider__btn--left".to_string(),
            right_button: ".slider__btn--right".to_string(),
            dot_container: ".dots".to_string(),
            dot_class: "dots__dot".to_string(),
            dot_active_class: "dots__dot--active".to_string(),
            data_key: "slide".to_string(),
            next_key: "ArrowRight".to_string(),
            previous_key: "ArrowLeft".to_string(),
        }
    }
}
