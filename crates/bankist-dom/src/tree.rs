//! DOM Tree (arena-based allocation)

use crate::{ElementData, Node, NodeData, NodeId};

/// Arena-based DOM tree. Slot 0 is always the document node.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Element data of a node, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Allocate a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::text(text.to_string()))
    }

    /// Allocate a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(Node::comment(text.to_string()))
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    /// Unknown ids, self-appends and cycles are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child
            || self.get(parent).is_none()
            || self.get(child).is_none()
            || self.ancestors(parent).any(|a| a == child)
        {
            return;
        }

        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Unlink a node from its parent and siblings. Its own subtree stays.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Direct children, in order
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self.get(parent).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Ancestors from the parent up to the document node
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// All descendants in document (pre-)order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        stack.reverse();
        while let Some(current) = stack.pop() {
            out.push(current);
            let len = stack.len();
            stack.extend(self.children(current).map(|(c, _)| c));
            stack[len..].reverse();
        }
        out
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|d| match &self.nodes[d.index()].data {
                NodeData::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_children() {
        let mut tree = DomTree::new();
        let nav = tree.create_element("nav");
        let a = tree.create_element("a");
        let b = tree.create_element("a");
        tree.append_child(tree.root(), nav);
        tree.append_child(nav, a);
        tree.append_child(nav, b);

        let kids: Vec<NodeId> = tree.children(nav).map(|(id, _)| id).collect();
        assert_eq!(kids, vec![a, b]);
        assert_eq!(tree.parent(a), Some(nav));
        assert_eq!(tree.ancestors(b).collect::<Vec<_>>(), vec![nav, NodeId::ROOT]);
    }

    #[test]
    fn test_reappend_moves_node() {
        let mut tree = DomTree::new();
        let left = tree.create_element("div");
        let right = tree.create_element("div");
        let dot = tree.create_element("button");
        tree.append_child(NodeId::ROOT, left);
        tree.append_child(NodeId::ROOT, right);
        tree.append_child(left, dot);
        tree.append_child(right, dot);

        assert_eq!(tree.children(left).count(), 0);
        assert_eq!(tree.children(right).count(), 1);
        assert_eq!(tree.parent(dot), Some(right));
    }

    #[test]
    fn test_cycle_is_ignored() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(NodeId::ROOT, outer);
        tree.append_child(outer, inner);
        tree.append_child(inner, outer);

        assert_eq!(tree.parent(outer), Some(NodeId::ROOT));
    }

    #[test]
    fn test_descendants_preorder() {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        let section = tree.create_element("section");
        let h = tree.create_element("h2");
        let text = tree.create_text("Features");
        let img = tree.create_element("img");
        tree.append_child(NodeId::ROOT, body);
        tree.append_child(body, section);
        tree.append_child(section, h);
        tree.append_child(h, text);
        tree.append_child(section, img);

        assert_eq!(tree.descendants(body), vec![section, h, text, img]);
        assert_eq!(tree.text_content(body), "Features");
    }
}
