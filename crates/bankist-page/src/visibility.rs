//! Visibility watcher
//!
//! Intersection observation of element layout boxes against the viewport.
//! A watcher reports an entry for a target the first time it is checked and
//! afterwards only when the target crosses one of the thresholds. A target
//! counts as intersecting once it reaches the lowest threshold.

use std::fmt;
use std::str::FromStr;

use bankist_dom::{DOMRect, Document, NodeId};

use crate::{PageError, Viewport};

/// CSS length used in root margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Resolve against the size percentages refer to
    pub fn resolve(&self, basis: f64) -> f64 {
        match self {
            Length::Px(v) => *v,
            Length::Percent(p) => basis * p / 100.0,
        }
    }
}

impl FromStr for Length {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PageError::InvalidRootMargin(s.to_string());
        let (number, percent) = if let Some(n) = s.strip_suffix('%') {
            (n, true)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, false)
        } else if s == "0" {
            (s, false)
        } else {
            return Err(invalid());
        };
        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(if percent { Length::Percent(value) } else { Length::Px(value) })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{v}px"),
            Length::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// Margin grown around (or, when negative, cut from) the viewport before
/// intersecting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    /// Same pixel margin on every side
    pub fn px(value: f64) -> Self {
        let len = Length::Px(value);
        Self { top: len, right: len, bottom: len, left: len }
    }

    /// Apply to a root rect. Percentages resolve against its width
    /// (left/right) or height (top/bottom).
    pub fn apply(&self, root: &DOMRect) -> DOMRect {
        root.inflate(
            self.top.resolve(root.height),
            self.right.resolve(root.width),
            self.bottom.resolve(root.height),
            self.left.resolve(root.width),
        )
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::px(0.0)
    }
}

/// CSS margin shorthand: one to four lengths
impl FromStr for RootMargin {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lengths = s
            .split_whitespace()
            .map(Length::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        match lengths.as_slice() {
            [all] => Ok(Self { top: *all, right: *all, bottom: *all, left: *all }),
            [vertical, horizontal] => Ok(Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(PageError::InvalidRootMargin(s.to_string())),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Watcher options
#[derive(Debug, Clone, PartialEq)]
pub struct WatcherOptions {
    pub root_margin: RootMargin,
    /// Visible-ratio thresholds, kept sorted
    pub thresholds: Vec<f64>,
}

impl WatcherOptions {
    pub fn new(root_margin: RootMargin, thresholds: impl IntoIterator<Item = f64>) -> Self {
        let mut thresholds: Vec<f64> = thresholds
            .into_iter()
            .map(|t| t.clamp(0.0, 1.0))
            .collect();
        if thresholds.is_empty() {
            thresholds.push(0.0);
        }
        thresholds.sort_by(f64::total_cmp);
        thresholds.dedup();
        Self { root_margin, thresholds }
    }
}

impl Default for WatcherOptions {
    fn default() -> Self {
        Self::new(RootMargin::default(), [0.0])
    }
}

/// One observation result
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry {
    pub target: NodeId,
    pub bounding_client_rect: DOMRect,
    pub intersection_rect: DOMRect,
    pub root_bounds: DOMRect,
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
}

/// Watches a set of elements against the viewport
#[derive(Debug, Clone)]
pub struct VisibilityWatcher {
    options: WatcherOptions,
    /// Targets in registration order with their last reported threshold index
    observed: Vec<(NodeId, Option<usize>)>,
}

impl VisibilityWatcher {
    pub fn new(options: WatcherOptions) -> Self {
        Self { options, observed: Vec::new() }
    }

    pub fn options(&self) -> &WatcherOptions {
        &self.options
    }

    /// Replace the root margin; observed targets keep their last state
    pub fn set_root_margin(&mut self, root_margin: RootMargin) {
        self.options.root_margin = root_margin;
    }

    /// Observe an element. Observing twice is a no-op.
    pub fn observe(&mut self, target: NodeId) {
        if !self.is_observing(target) {
            self.observed.push((target, None));
        }
    }

    /// Stop observing an element
    pub fn unobserve(&mut self, target: NodeId) -> bool {
        let before = self.observed.len();
        self.observed.retain(|(n, _)| *n != target);
        self.observed.len() != before
    }

    /// Stop observing everything
    pub fn disconnect(&mut self) {
        self.observed.clear();
    }

    pub fn is_observing(&self, target: NodeId) -> bool {
        self.observed.iter().any(|(n, _)| *n == target)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Compare every observed target's layout box with the viewport and
    /// return the entries that changed since the last check
    pub fn check(&mut self, viewport: &Viewport, document: &Document) -> Vec<VisibilityEntry> {
        let root = self.options.root_margin.apply(&viewport.rect());
        let thresholds = &self.options.thresholds;
        let mut entries = Vec::new();

        for (target, last) in &mut self.observed {
            let Some(layout) = document.layout_rect(*target) else {
                continue;
            };
            let client = viewport.to_client(&layout);
            let intersection = client.intersection(&root);
            let ratio = match intersection {
                Some(i) if client.area() > 0.0 => (i.area() / client.area()).min(1.0),
                Some(_) => 1.0,
                None => 0.0,
            };

            // Below the lowest threshold counts as not intersecting
            let index = threshold_index(thresholds, ratio, intersection.is_some());
            if *last == Some(index) {
                continue;
            }
            *last = Some(index);

            entries.push(VisibilityEntry {
                target: *target,
                bounding_client_rect: client,
                intersection_rect: intersection.unwrap_or_default(),
                root_bounds: root,
                intersection_ratio: ratio,
                is_intersecting: index > 0,
            });
        }

        entries
    }
}

/// Number of thresholds reached. A zero threshold counts only while the
/// boxes touch.
fn threshold_index(thresholds: &[f64], ratio: f64, touching: bool) -> usize {
    thresholds
        .iter()
        .filter(|&&t| if t == 0.0 { touching } else { ratio >= t })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_box(rect: DOMRect) -> (Document, NodeId) {
        let mut doc = Document::default();
        let section = doc.append_element(doc.body(), "section", &[("class", "section")]).unwrap();
        doc.set_layout_rect(section, rect).unwrap();
        (doc, section)
    }

    #[test]
    fn test_parse_root_margin() {
        assert_eq!("200px".parse::<RootMargin>().unwrap(), RootMargin::px(200.0));
        assert_eq!("-90px".parse::<RootMargin>().unwrap(), RootMargin::px(-90.0));
        assert_eq!("0".parse::<RootMargin>().unwrap(), RootMargin::px(0.0));

        let margin: RootMargin = "10px 5%".parse().unwrap();
        assert_eq!(margin.top, Length::Px(10.0));
        assert_eq!(margin.left, Length::Percent(5.0));

        for bad in ["", "10", "1px 2px 3px 4px 5px", "abcpx", "10em"] {
            assert!(bad.parse::<RootMargin>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_percent_margin_resolves_per_axis() {
        let margin: RootMargin = "10% 50%".parse().unwrap();
        let root = margin.apply(&DOMRect::from_xywh(0.0, 0.0, 800.0, 600.0));
        assert_eq!(root, DOMRect::from_xywh(-400.0, -60.0, 1600.0, 720.0));
    }

    #[test]
    fn test_first_check_always_reports() {
        let (doc, section) = doc_with_box(DOMRect::from_xywh(0.0, 2000.0, 800.0, 500.0));
        let mut watcher = VisibilityWatcher::new(WatcherOptions::default());
        watcher.observe(section);

        let entries = watcher.check(&Viewport::new(800.0, 600.0), &doc);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);

        assert!(watcher.check(&Viewport::new(800.0, 600.0), &doc).is_empty());
    }

    #[test]
    fn test_threshold_crossing() {
        let (doc, section) = doc_with_box(DOMRect::from_xywh(0.0, 1000.0, 800.0, 400.0));
        let mut watcher = VisibilityWatcher::new(WatcherOptions::new(RootMargin::default(), [0.15]));
        watcher.observe(section);
        let mut viewport = Viewport::new(800.0, 600.0);
        watcher.check(&viewport, &doc);

        // 40px of 400px visible is below the threshold: nothing changed
        viewport.scroll_to(0.0, 440.0);
        assert!(watcher.check(&viewport, &doc).is_empty());

        viewport.scroll_to(0.0, 500.0);
        let entries = watcher.check(&viewport, &doc);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);
        assert!((entries[0].intersection_ratio - 0.25).abs() < 1e-9);

        // Dropping back under the threshold reports the box as not intersecting
        viewport.scroll_to(0.0, 440.0);
        let entries = watcher.check(&viewport, &doc);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);
        assert!((entries[0].intersection_ratio - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_zero_threshold_counts_touching_edges() {
        let (doc, section) = doc_with_box(DOMRect::from_xywh(0.0, 600.0, 800.0, 400.0));
        let mut watcher = VisibilityWatcher::new(WatcherOptions::default());
        watcher.observe(section);

        let entries = watcher.check(&Viewport::new(800.0, 600.0), &doc);
        assert!(entries[0].is_intersecting);
        assert_eq!(entries[0].intersection_ratio, 0.0);
    }

    #[test]
    fn test_disconnect_clears_targets() {
        let (doc, section) = doc_with_box(DOMRect::from_xywh(0.0, 0.0, 800.0, 300.0));
        let mut watcher = VisibilityWatcher::new(WatcherOptions::default());
        watcher.observe(section);

        watcher.disconnect();
        assert!(!watcher.is_observing(section));
        assert!(watcher.check(&Viewport::new(800.0, 600.0), &doc).is_empty());
    }

    #[test]
    fn test_positive_margin_preloads() {
        let (doc, img) = doc_with_box(DOMRect::from_xywh(0.0, 750.0, 300.0, 200.0));
        let viewport = Viewport::new(800.0, 600.0);

        let mut plain = VisibilityWatcher::new(WatcherOptions::default());
        plain.observe(img);
        assert!(!plain.check(&viewport, &doc)[0].is_intersecting);

        let mut ahead = VisibilityWatcher::new(WatcherOptions::new(RootMargin::px(200.0), [0.0]));
        ahead.observe(img);
        assert!(ahead.check(&viewport, &doc)[0].is_intersecting);
    }

    #[test]
    fn test_unobserve_stops_entries() {
        let (doc, section) = doc_with_box(DOMRect::from_xywh(0.0, 0.0, 800.0, 300.0));
        let mut watcher = VisibilityWatcher::new(WatcherOptions::default());
        watcher.observe(section);
        watcher.observe(section);
        assert_eq!(watcher.observed_count(), 1);

        assert!(watcher.unobserve(section));
        assert!(!watcher.unobserve(section));
        assert!(watcher.check(&Viewport::new(800.0, 600.0), &doc).is_empty());
    }

    #[test]
    fn test_targets_without_layout_are_skipped() {
        let mut doc = Document::default();
        let div = doc.append_element(doc.body(), "div", &[]).unwrap();
        let mut watcher = VisibilityWatcher::new(WatcherOptions::default());
        watcher.observe(div);

        assert!(watcher.check(&Viewport::new(800.0, 600.0), &doc).is_empty());
        assert!(watcher.is_observing(div));
    }
}
