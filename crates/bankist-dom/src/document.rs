//! Document - High-level document API

use crate::{DOMRect, DomError, DomTree, ElementData, Mutation, NodeId, Selector};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with html/head/body
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate html/head/body after the tree was built externally
    pub fn finalize(&mut self) {
        let find_child = |tree: &DomTree, parent: NodeId, tag: &str| {
            tree.children(parent)
                .find(|(_, n)| n.as_element().is_some_and(|e| e.tag_name() == tag))
                .map_or(NodeId::NONE, |(id, _)| id)
        };

        self.html_element = find_child(&self.tree, NodeId::ROOT, "html");
        self.head_element = find_child(&self.tree, self.html_element, "head");
        self.body_element = find_child(&self.tree, self.html_element, "body");
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Text of the first <title> in <head>
    pub fn title(&self) -> String {
        self.tree
            .children(self.head_element)
            .find(|(_, n)| n.as_element().is_some_and(|e| e.tag_name() == "title"))
            .map(|(id, _)| self.tree.text_content(id).trim().to_string())
            .unwrap_or_default()
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Element data of a node, or an error naming the node
    pub fn element(&self, id: NodeId) -> Result<&ElementData, DomError> {
        match self.tree.get(id) {
            None => Err(DomError::NoSuchNode(id)),
            Some(node) => node.as_element().ok_or(DomError::NotAnElement(id)),
        }
    }

    /// Mutable element data of a node
    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData, DomError> {
        match self.tree.get_mut(id) {
            None => Err(DomError::NoSuchNode(id)),
            Some(node) => node.as_element_mut().ok_or(DomError::NotAnElement(id)),
        }
    }

    /// Check a class label; non-elements never carry one
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.tree.element(id).is_some_and(|e| e.has_class(class))
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(NodeId::ROOT)
            .into_iter()
            .find(|&n| self.tree.element(n).is_some_and(|e| e.id() == Some(id)))
    }

    /// First descendant of `root` matching a parsed selector
    pub fn find(&self, root: NodeId, selector: &Selector) -> Option<NodeId> {
        self.tree
            .descendants(root)
            .into_iter()
            .find(|&n| selector.matches(&self.tree, n))
    }

    /// All descendants of `root` matching a parsed selector, in document order
    pub fn find_all(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.tree
            .descendants(root)
            .into_iter()
            .filter(|&n| selector.matches(&self.tree, n))
            .collect()
    }

    /// querySelector scoped to the descendants of `root`
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>, DomError> {
        Ok(self.find(root, &Selector::parse(selector)?))
    }

    /// querySelectorAll scoped to the descendants of `root`
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        Ok(self.find_all(root, &Selector::parse(selector)?))
    }

    /// Nearest inclusive ancestor of `element` matching the selector
    pub fn closest(&self, element: NodeId, selector: &str) -> Result<Option<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(std::iter::once(element)
            .chain(self.tree.ancestors(element))
            .find(|&n| selector.matches(&self.tree, n)))
    }

    /// Check if element matches selector
    pub fn matches(&self, element: NodeId, selector: &str) -> Result<bool, DomError> {
        Ok(Selector::parse(selector)?.matches(&self.tree, element))
    }

    /// Create an element and append it to `parent`
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Result<NodeId, DomError> {
        self.element(parent)?;
        let id = self.tree.create_element(tag);
        if let Some(element) = self.tree.element_mut(id) {
            for (name, value) in attrs {
                element.set_attr(name, value);
            }
        }
        self.tree.append_child(parent, id);
        Ok(id)
    }

    /// Set the layout box of an element, in document coordinates
    pub fn set_layout_rect(&mut self, id: NodeId, rect: DOMRect) -> Result<(), DomError> {
        self.element_mut(id)?.layout = Some(rect);
        Ok(())
    }

    /// Layout box of an element, if the host supplied one
    pub fn layout_rect(&self, id: NodeId) -> Option<DOMRect> {
        self.tree.element(id).and_then(|e| e.layout)
    }

    /// Apply one mutation
    pub fn apply(&mut self, mutation: &Mutation) -> Result<(), DomError> {
        tracing::trace!(?mutation, "Applying mutation");
        let element = self.element_mut(mutation.node())?;
        match mutation {
            Mutation::AddClass { class, .. } => {
                element.add_class(class);
            }
            Mutation::RemoveClass { class, .. } => {
                element.remove_class(class);
            }
            Mutation::SetStyle { property, value, .. } => element.set_style(property, value),
            Mutation::SetAttribute { name, value, .. } => element.set_attr(name, value),
        }
        Ok(())
    }

    /// Apply mutations in order, stopping at the first failure
    pub fn apply_all<'a>(&mut self, mutations: impl IntoIterator<Item = &'a Mutation>) -> Result<(), DomError> {
        mutations.into_iter().try_for_each(|m| self.apply(m))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_document() -> (Document, NodeId, Vec<NodeId>, NodeId) {
        let mut doc = Document::default();
        let body = doc.body();
        let nav = doc.append_element(body, "nav", &[("class", "nav")]).unwrap();
        let logo = doc.append_element(nav, "img", &[("class", "nav__logo"), ("src", "logo.png")]).unwrap();
        let list = doc.append_element(nav, "ul", &[("class", "nav__links")]).unwrap();
        let links = (1..=3)
            .map(|i| {
                let item = doc.append_element(list, "li", &[("class", "nav__item")]).unwrap();
                let href = format!("#section--{i}");
                doc.append_element(item, "a", &[("class", "nav__link"), ("href", href.as_str())]).unwrap()
            })
            .collect();
        (doc, nav, links, logo)
    }

    #[test]
    fn test_query_and_closest() {
        let (doc, nav, links, logo) = nav_document();

        assert_eq!(doc.query_selector(NodeId::ROOT, ".nav").unwrap(), Some(nav));
        assert_eq!(doc.query_selector_all(nav, ".nav__link").unwrap(), links);
        assert_eq!(doc.query_selector(nav, "img").unwrap(), Some(logo));
        assert_eq!(doc.closest(links[1], ".nav").unwrap(), Some(nav));
        assert_eq!(doc.closest(links[1], "a").unwrap(), Some(links[1]));
        assert_eq!(doc.closest(logo, ".nav__links").unwrap(), None);
        assert!(doc.matches(links[2], r##"a[href="#section--3"]"##).unwrap());
        assert!(doc.query_selector(nav, "a >").is_err());
    }

    #[test]
    fn test_query_excludes_root() {
        let (doc, nav, _, _) = nav_document();
        assert!(doc.query_selector_all(nav, ".nav").unwrap().is_empty());
    }

    #[test]
    fn test_apply_mutations() {
        let (mut doc, nav, links, _) = nav_document();

        doc.apply_all(&[
            Mutation::add_class(nav, "sticky"),
            Mutation::set_style(links[0], "opacity", "0.5"),
            Mutation::set_attribute(links[0], "data-x", "1"),
        ])
        .unwrap();

        assert!(doc.has_class(nav, "sticky"));
        assert_eq!(doc.element(links[0]).unwrap().style().get_property_value("opacity"), Some("0.5"));
        assert_eq!(doc.element(links[0]).unwrap().data("x"), Some("1"));

        doc.apply(&Mutation::remove_class(nav, "sticky")).unwrap();
        assert!(!doc.has_class(nav, "sticky"));
    }

    #[test]
    fn test_apply_to_bad_node() {
        let mut doc = Document::default();
        assert_eq!(
            doc.apply(&Mutation::add_class(NodeId(999), "x")),
            Err(DomError::NoSuchNode(NodeId(999)))
        );
        assert_eq!(
            doc.apply(&Mutation::add_class(NodeId::ROOT, "x")),
            Err(DomError::NotAnElement(NodeId::ROOT))
        );
    }

    #[test]
    fn test_layout_rect() {
        let (mut doc, nav, _, _) = nav_document();
        assert_eq!(doc.layout_rect(nav), None);
        doc.set_layout_rect(nav, DOMRect::from_xywh(0.0, 0.0, 1200.0, 90.0)).unwrap();
        assert_eq!(doc.layout_rect(nav).map(|r| r.height), Some(90.0));
    }

    #[test]
    fn test_finalize_and_get_by_id() {
        let mut doc = Document::new("https://bankist.example/");
        let section = doc.append_element(doc.body(), "section", &[("id", "section--1")]).unwrap();
        doc.finalize();

        assert!(doc.body().is_valid());
        assert_eq!(doc.get_element_by_id("section--1"), Some(section));
        assert_eq!(doc.get_element_by_id("nope"), None);
        assert_eq!(doc.url(), "https://bankist.example/");
    }

    #[test]
    fn test_empty_document_finalized_after_build() {
        let mut doc = Document::empty("about:blank");
        assert!(!doc.body().is_valid());

        let tree = doc.tree_mut();
        let html = tree.create_element("html");
        let body = tree.create_element("body");
        let root = tree.root();
        tree.append_child(root, html);
        tree.append_child(html, body);
        doc.finalize();

        assert_eq!(doc.document_element(), html);
        assert_eq!(doc.body(), body);
        assert!(!doc.head().is_valid());
    }
}
