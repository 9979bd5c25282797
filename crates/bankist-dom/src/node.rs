//! DOM Node
//!
//! Nodes link to each other through `NodeId`s into the tree arena instead of
//! pointers, so components can hold cheap non-owning handles.

use crate::{CssStyleDeclaration, DOMRect, DOMStringMap, DOMTokenList, NodeId};

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: String) -> Self {
        Self::with_data(NodeData::Text(content))
    }

    /// Create a comment node
    pub fn comment(content: String) -> Self {
        Self::with_data(NodeData::Comment(content))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
///
/// `class` and `style` live both as attributes and as parsed structures;
/// every setter here keeps the two in step.
#[derive(Debug, Clone)]
pub struct ElementData {
    tag: String,
    attrs: Vec<(String, String)>,
    class_list: DOMTokenList,
    style: CssStyleDeclaration,
    /// Layout box in document coordinates, supplied by the host
    pub layout: Option<DOMRect>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            class_list: DOMTokenList::new(),
            style: CssStyleDeclaration::new(),
            layout: None,
        }
    }

    /// Lower-cased tag name
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "class" => self.class_list = DOMTokenList::from_string(value),
            "style" => self.style = CssStyleDeclaration::parse(value),
            _ => {}
        }
        self.write_attr(name, value.to_string());
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        match name.to_ascii_lowercase().as_str() {
            "class" => self.class_list = DOMTokenList::new(),
            "style" => self.style = CssStyleDeclaration::new(),
            _ => {}
        }
        Some(self.attrs.remove(pos).1)
    }

    /// Attributes in document order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn class_list(&self) -> &DOMTokenList {
        &self.class_list
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.contains(class)
    }

    /// Add a class label. Returns `true` if it was not present.
    pub fn add_class(&mut self, class: &str) -> bool {
        let changed = self.class_list.add(class);
        if changed {
            self.sync_class_attr();
        }
        changed
    }

    /// Remove a class label. Returns `true` if it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let changed = self.class_list.remove(class);
        if changed {
            self.sync_class_attr();
        }
        changed
    }

    pub fn style(&self) -> &CssStyleDeclaration {
        &self.style
    }

    /// Set one inline style property
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style.set_property(property, value);
        let text = self.style.css_text();
        self.write_attr("style".to_string(), text);
    }

    /// data-* attributes as a camel-cased map
    pub fn dataset(&self) -> DOMStringMap {
        DOMStringMap::from_attributes(self.attrs())
    }

    /// One data-* value by camelCase key (`slide` reads `data-slide`)
    pub fn data(&self, key: &str) -> Option<&str> {
        self.get_attr(&DOMStringMap::to_attribute_name(key))
    }

    fn sync_class_attr(&mut self) {
        let value = self.class_list.value();
        self.write_attr("class".to_string(), value);
    }

    fn write_attr(&mut self, name: String, value: String) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }
}
