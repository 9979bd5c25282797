//! Viewport and scroll requests

use bankist_dom::{DOMRect, NodeId};
use serde::{Deserialize, Serialize};

/// How a scroll request reaches its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Queued for the host to animate
    #[default]
    Smooth,
    /// Applied by the page at once
    Instant,
}

/// Request to bring an element into view. The host animates smooth
/// requests; `Page::settle_scroll` jumps straight to the end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodeId,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn new(target: NodeId, behavior: ScrollBehavior) -> Self {
        Self { target, behavior }
    }

    /// `scrollIntoView({ behavior: 'smooth' })`
    pub fn smooth(target: NodeId) -> Self {
        Self { target, behavior: ScrollBehavior::Smooth }
    }
}

/// Visible part of the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    /// Viewport at the top of the document
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, scroll_x: 0.0, scroll_y: 0.0 }
    }

    /// Viewport bounds in client coordinates
    pub fn rect(&self) -> DOMRect {
        DOMRect::from_xywh(0.0, 0.0, self.width, self.height)
    }

    /// Map a document-space rect to client coordinates
    pub fn to_client(&self, rect: &DOMRect) -> DOMRect {
        rect.translate(-self.scroll_x, -self.scroll_y)
    }

    /// Scroll so that `top` is the first visible document row
    pub fn scroll_to(&mut self, left: f64, top: f64) {
        self.scroll_x = left.max(0.0);
        self.scroll_y = top.max(0.0);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_client() {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.scroll_to(0.0, 500.0);

        let section = DOMRect::from_xywh(0.0, 900.0, 800.0, 400.0);
        assert_eq!(viewport.to_client(&section), DOMRect::from_xywh(0.0, 400.0, 800.0, 400.0));
    }

    #[test]
    fn test_scroll_clamps_negative() {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.scroll_to(-10.0, -50.0);
        assert_eq!((viewport.scroll_x, viewport.scroll_y), (0.0, 0.0));
    }
}
