//! Arena-backed document tree.
//!
//! `InMemoryDom` needs no browser and no HTML parser: pages are built node by
//! node through the [`DomTree`] API. It backs the native test suite and any
//! caller that wants to run the assembler outside a browser.

use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::dom::{DomError, DomTree};

static NEXT_TREE: AtomicU32 = AtomicU32::new(0);

/// Handle to a node of an [`InMemoryDom`].
///
/// Handles remember the tree that minted them; every other tree treats them
/// as unknown nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    tree: u32,
    index: usize,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Document,
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeRecord {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeRecord {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Elements serialized without an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// An in-memory document tree.
///
/// A fresh tree holds the `#document > html > (head, body)` skeleton. Nodes
/// are never freed: removed nodes stay in the arena, detached, exactly like
/// unreferenced DOM nodes waiting for collection.
#[derive(Debug)]
pub struct InMemoryDom {
    tree: u32,
    nodes: RefCell<Vec<NodeRecord>>,
    document: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for InMemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDom {
    pub fn new() -> Self {
        let element = |tag: &str| {
            NodeRecord::new(NodeKind::Element {
                tag: tag.to_string(),
                attributes: Vec::new(),
            })
        };

        let mut nodes = vec![
            NodeRecord::new(NodeKind::Document),
            element("html"),
            element("head"),
            element("body"),
        ];
        let tree = NEXT_TREE.fetch_add(1, Ordering::Relaxed);
        let id = |index| NodeId { tree, index };
        let (document, html, head, body) = (id(0), id(1), id(2), id(3));
        nodes[document.index].children.push(html);
        nodes[html.index].parent = Some(document);
        nodes[html.index].children = vec![head, body];
        nodes[head.index].parent = Some(html);
        nodes[body.index].parent = Some(html);

        Self {
            tree,
            nodes: RefCell::new(nodes),
            document,
            head,
            body,
        }
    }

    /// The document node, root of the tree.
    pub fn document(&self) -> NodeId {
        self.document
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    /// Number of nodes ever created in this tree, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    /// Always `false`: the skeleton is part of every tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Concatenated data of every text node below `node`, in document order.
    pub fn text_content(&self, node: NodeId) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        if self.local(node).is_none() {
            return out;
        }
        if let Some(NodeKind::Text(data)) = nodes.get(node.index).map(|r| &r.kind) {
            out.push_str(data);
        }
        for id in Self::descendants(&nodes, node) {
            if let NodeKind::Text(data) = &nodes[id.index].kind {
                out.push_str(data);
            }
        }
        out
    }

    /// Serialize `node` and its subtree as HTML.
    pub fn outer_html(&self, node: NodeId) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        if self.local(node).is_some() {
            Self::serialize(&nodes, node, &mut out);
        }
        out
    }

    /// Serialize the children of `node` as HTML.
    pub fn inner_html(&self, node: NodeId) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        if let Some(record) = self.local(node).and_then(|index| nodes.get(index)) {
            for child in &record.children {
                Self::serialize(&nodes, *child, &mut out);
            }
        }
        out
    }

    fn serialize(nodes: &[NodeRecord], node: NodeId, out: &mut String) {
        let Some(record) = nodes.get(node.index) else {
            return;
        };
        match &record.kind {
            NodeKind::Document => {
                for child in &record.children {
                    Self::serialize(nodes, *child, out);
                }
            }
            NodeKind::Text(data) => out.push_str(&html_escape::encode_text(data)),
            NodeKind::Element { tag, attributes } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in &record.children {
                    Self::serialize(nodes, *child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }

    /// Pre-order descendants of `scope`, excluding `scope` itself.
    fn descendants(nodes: &[NodeRecord], scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(record) = nodes.get(scope.index) else {
            return out;
        };
        let mut stack: Vec<NodeId> = record.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.index].children.iter().rev().copied());
        }
        out
    }

    fn select(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = SimpleSelector::parse(selector)?;
        let nodes = self.nodes.borrow();
        Ok(Self::descendants(&nodes, scope)
            .into_iter()
            .filter(|id| match &nodes[id.index].kind {
                NodeKind::Element { tag, attributes } => {
                    let class = attributes
                        .iter()
                        .find(|(name, _)| name == "class")
                        .map(|(_, value)| value.as_str());
                    selector.matches(tag, class)
                }
                _ => false,
            })
            .collect())
    }

    fn new_node(&self, kind: NodeKind) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeRecord::new(kind));
        NodeId {
            tree: self.tree,
            index: nodes.len() - 1,
        }
    }

    /// Arena slot of `node`, or `None` when another tree minted it.
    fn local(&self, node: NodeId) -> Option<usize> {
        (node.tree == self.tree && node.index < self.nodes.borrow().len()).then_some(node.index)
    }

    fn check_owned(&self, node: NodeId) -> Result<(), DomError> {
        match self.local(node) {
            Some(_) => Ok(()),
            None => Err(DomError::HierarchyRequest(format!(
                "node {} does not belong to this document",
                node
            ))),
        }
    }
}

impl DomTree for InMemoryDom {
    type Node = NodeId;

    fn body(&self) -> Result<NodeId, DomError> {
        Ok(self.body)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.select(self.document, selector)
    }

    fn query_all_in(&self, scope: &NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.check_owned(*scope)?;
        self.select(*scope, selector)
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, DomError> {
        if !is_valid_tag_name(tag) {
            return Err(DomError::InvalidTagName(tag.to_string()));
        }
        Ok(self.new_node(NodeKind::Element {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
        }))
    }

    fn create_text(&self, text: &str) -> Result<NodeId, DomError> {
        Ok(self.new_node(NodeKind::Text(text.to_string())))
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.check_owned(*node)?;
        let mut nodes = self.nodes.borrow_mut();
        match &mut nodes[node.index].kind {
            NodeKind::Element { attributes, .. } => {
                match attributes.iter_mut().find(|(existing, _)| existing == name) {
                    Some((_, existing)) => *existing = value.to_string(),
                    None => attributes.push((name.to_string(), value.to_string())),
                }
                Ok(())
            }
            _ => Err(DomError::NotAnElement(node.to_string())),
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        match &nodes.get(self.local(*node)?)?.kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(existing, _)| existing == name)
                .map(|(_, value)| value.clone()),
            _ => None,
        }
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        self.check_owned(*parent)?;
        self.check_owned(*child)?;
        let mut nodes = self.nodes.borrow_mut();

        if matches!(nodes[parent.index].kind, NodeKind::Text(_)) {
            return Err(DomError::HierarchyRequest(format!(
                "text node {} cannot have children",
                parent
            )));
        }
        if matches!(nodes[child.index].kind, NodeKind::Document) {
            return Err(DomError::HierarchyRequest(
                "the document node cannot be inserted".to_string(),
            ));
        }
        let mut cursor = Some(*parent);
        while let Some(id) = cursor {
            if id == *child {
                return Err(DomError::HierarchyRequest(format!(
                    "node {} is an ancestor of {}",
                    child, parent
                )));
            }
            cursor = nodes[id.index].parent;
        }

        if let Some(old_parent) = nodes[child.index].parent.take() {
            nodes[old_parent.index].children.retain(|id| id != child);
        }
        nodes[parent.index].children.push(*child);
        nodes[child.index].parent = Some(*parent);
        Ok(())
    }

    fn remove(&self, node: &NodeId) -> Result<(), DomError> {
        self.check_owned(*node)?;
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[node.index].parent.take() {
            nodes[parent.index].children.retain(|id| id != node);
        }
        Ok(())
    }

    fn first_child(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.borrow().get(self.local(*node)?)?.children.first().copied()
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        let Some(index) = self.local(*node) else {
            return Vec::new();
        };
        self.nodes
            .borrow()
            .get(index)
            .map(|record| record.children.clone())
            .unwrap_or_default()
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.borrow().get(self.local(*node)?)?.parent
    }

    fn text(&self, node: &NodeId) -> Option<String> {
        match &self.nodes.borrow().get(self.local(*node)?)?.kind {
            NodeKind::Text(data) => Some(data.clone()),
            _ => None,
        }
    }

    fn tag_name(&self, node: &NodeId) -> Option<String> {
        match &self.nodes.borrow().get(self.local(*node)?)?.kind {
            NodeKind::Element { tag, .. } => Some(tag.clone()),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "InMemoryDom"
    }
}

/// `tag`, `.class`, `tag.class.other` or `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SimpleSelector {
    tag: Option<String>,
    classes: Vec<String>,
}

impl SimpleSelector {
    fn parse(selector: &str) -> Result<Self, DomError> {
        let trimmed = selector.trim();
        if trimmed.is_empty() {
            return Err(DomError::InvalidSelector {
                selector: selector.to_string(),
                message: "empty selector".to_string(),
            });
        }
        let unsupported = || DomError::UnsupportedSelector(selector.to_string());

        let mut parts = trimmed.split('.');
        let tag = match parts.next() {
            None | Some("") | Some("*") => None,
            Some(name) if is_valid_tag_name(name) => Some(name.to_ascii_lowercase()),
            Some(_) => return Err(unsupported()),
        };
        let classes = parts
            .map(|class| {
                if is_valid_class_name(class) {
                    Ok(class.to_string())
                } else {
                    Err(unsupported())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tag, classes })
    }

    fn matches(&self, tag: &str, class_attr: Option<&str>) -> bool {
        if self.tag.as_deref().is_some_and(|wanted| wanted != tag) {
            return false;
        }
        let present: Vec<&str> = class_attr.unwrap_or("").split_whitespace().collect();
        self.classes
            .iter()
            .all(|class| present.contains(&class.as_str()))
    }
}

fn is_valid_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_class_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element_with_class(dom: &InMemoryDom, tag: &str, class: &str) -> NodeId {
        let node = dom.create_element(tag).unwrap();
        dom.set_attribute(&node, "class", class).unwrap();
        node
    }

    #[test]
    fn test_new_dom_has_skeleton() {
        let dom = InMemoryDom::new();
        let body = dom.body().unwrap();

        assert_eq!(dom.len(), 4);
        assert_eq!(dom.tag_name(&body).as_deref(), Some("body"));
        assert_eq!(dom.tag_name(&dom.head()).as_deref(), Some("head"));
        assert!(dom.children(&body).is_empty());
        assert_eq!(
            dom.outer_html(dom.document()),
            "<html><head></head><body></body></html>"
        );
    }

    #[test]
    fn test_append_child_moves_node() {
        let dom = InMemoryDom::new();
        let body = dom.body().unwrap();
        let first = dom.create_element("div").unwrap();
        let second = dom.create_element("div").unwrap();
        let link = dom.create_element("a").unwrap();

        dom.append_child(&body, &first).unwrap();
        dom.append_child(&body, &second).unwrap();
        dom.append_child(&first, &link).unwrap();
        dom.append_child(&second, &link).unwrap();

        assert!(dom.children(&first).is_empty());
        assert_eq!(dom.children(&second), vec![link]);
        assert_eq!(dom.parent(&link), Some(second));
    }

    #[test]
    fn test_append_child_rejects_cycles() {
        let dom = InMemoryDom::new();
        let outer = dom.create_element("div").unwrap();
        let inner = dom.create_element("div").unwrap();
        dom.append_child(&outer, &inner).unwrap();

        let result = dom.append_child(&inner, &outer);
        assert!(matches!(result, Err(DomError::HierarchyRequest(_))));

        let result = dom.append_child(&outer, &outer);
        assert!(matches!(result, Err(DomError::HierarchyRequest(_))));
    }

    #[test]
    fn test_text_nodes_cannot_have_children() {
        let dom = InMemoryDom::new();
        let text = dom.create_text("next").unwrap();
        let span = dom.create_element("span").unwrap();

        let result = dom.append_child(&text, &span);
        assert!(matches!(result, Err(DomError::HierarchyRequest(_))));
    }

    #[test]
    fn test_document_cannot_be_inserted() {
        let dom = InMemoryDom::new();
        let div = dom.create_element("div").unwrap();
        let result = dom.append_child(&div, &dom.document());
        assert!(matches!(result, Err(DomError::HierarchyRequest(_))));
    }

    #[test]
    fn test_foreign_node_is_rejected() {
        let dom = InMemoryDom::new();
        let other = InMemoryDom::new();
        let foreign = other.create_element("nav").unwrap();
        // Same arena slot as the foreign handle
        let local = dom.create_element("div").unwrap();
        let body = dom.body().unwrap();

        let result = dom.append_child(&body, &foreign);
        assert!(matches!(result, Err(DomError::HierarchyRequest(_))));
        assert!(dom.children(&body).is_empty());
        assert!(dom.parent(&local).is_none());

        assert!(dom.tag_name(&foreign).is_none());
        assert!(dom.attribute(&foreign, "class").is_none());
        assert!(dom.children(&foreign).is_empty());
        assert!(matches!(
            dom.set_attribute(&foreign, "class", "x"),
            Err(DomError::HierarchyRequest(_))
        ));
        assert!(matches!(
            dom.remove(&foreign),
            Err(DomError::HierarchyRequest(_))
        ));
        assert_eq!(dom.outer_html(foreign), "");
        assert_eq!(other.tag_name(&foreign).as_deref(), Some("nav"));
    }

    #[test]
    fn test_foreign_scope_is_rejected() {
        let dom = InMemoryDom::new();
        let other = InMemoryDom::new();

        let result = dom.query_all_in(&other.body().unwrap(), "*");
        assert!(matches!(result, Err(DomError::HierarchyRequest(_))));
        assert_ne!(dom.body().unwrap(), other.body().unwrap());
    }

    #[test]
    fn test_remove_detaches_and_is_idempotent() {
        let dom = InMemoryDom::new();
        let body = dom.body().unwrap();
        let div = dom.create_element("div").unwrap();
        dom.append_child(&body, &div).unwrap();

        dom.remove(&div).unwrap();
        assert!(dom.children(&body).is_empty());
        assert!(dom.parent(&div).is_none());

        // Removing a detached node does nothing
        dom.remove(&div).unwrap();
    }

    #[test]
    fn test_create_element_rejects_invalid_tags() {
        let dom = InMemoryDom::new();
        for tag in ["", "1div", "di v", "a<b"] {
            let result = dom.create_element(tag);
            assert!(
                matches!(result, Err(DomError::InvalidTagName(_))),
                "tag {:?} should be rejected",
                tag
            );
        }
        let node = dom.create_element("DIV").unwrap();
        assert_eq!(dom.tag_name(&node).as_deref(), Some("div"));
    }

    #[test]
    fn test_set_attribute_overwrites() {
        let dom = InMemoryDom::new();
        let a = dom.create_element("a").unwrap();
        dom.set_attribute(&a, "href", "one.html").unwrap();
        dom.set_attribute(&a, "href", "two.html").unwrap();

        assert_eq!(dom.attribute(&a, "href").as_deref(), Some("two.html"));
        assert_eq!(dom.outer_html(a), r#"<a href="two.html"></a>"#);
        assert!(dom.attribute(&a, "title").is_none());
    }

    #[test]
    fn test_set_attribute_on_text_fails() {
        let dom = InMemoryDom::new();
        let text = dom.create_text("up").unwrap();
        let result = dom.set_attribute(&text, "class", "x");
        assert!(matches!(result, Err(DomError::NotAnElement(_))));
    }

    #[test]
    fn test_query_all_in_document_order() {
        let dom = InMemoryDom::new();
        let body = dom.body().unwrap();
        let outer = element_with_class(&dom, "div", "crosslinks");
        let nested = element_with_class(&dom, "div", "crosslinks extra");
        let later = element_with_class(&dom, "p", "crosslinks");
        dom.append_child(&body, &outer).unwrap();
        dom.append_child(&outer, &nested).unwrap();
        dom.append_child(&body, &later).unwrap();

        assert_eq!(
            dom.query_all(".crosslinks").unwrap(),
            vec![outer, nested, later]
        );
        assert_eq!(dom.query_all("div.crosslinks").unwrap(), vec![outer, nested]);
        assert_eq!(dom.query_all(".crosslinks.extra").unwrap(), vec![nested]);
        assert_eq!(dom.query_all("p").unwrap(), vec![later]);
        assert!(dom.query_all(".cross").unwrap().is_empty());
    }

    #[test]
    fn test_query_all_in_excludes_scope() {
        let dom = InMemoryDom::new();
        let outer = dom.create_element("a").unwrap();
        let inner = dom.create_element("a").unwrap();
        dom.append_child(&outer, &inner).unwrap();

        assert_eq!(dom.query_all_in(&outer, "a").unwrap(), vec![inner]);
        assert_eq!(dom.query_all_in(&outer, "*").unwrap(), vec![inner]);
    }

    #[test]
    fn test_query_skips_detached_nodes() {
        let dom = InMemoryDom::new();
        let _detached = element_with_class(&dom, "div", "sidebar");
        assert!(dom.query_all(".sidebar").unwrap().is_empty());
    }

    #[test]
    fn test_unsupported_selectors() {
        let dom = InMemoryDom::new();
        for selector in ["div a", "#main", "a[href]", "a > b", "a:first-child", "div.", "a,b"] {
            let result = dom.query_all(selector);
            assert!(
                matches!(result, Err(DomError::UnsupportedSelector(_))),
                "selector {:?} should be unsupported",
                selector
            );
        }
        assert!(matches!(
            dom.query_all("   "),
            Err(DomError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_text_accessors() {
        let dom = InMemoryDom::new();
        let a = dom.create_element("a").unwrap();
        let text = dom.create_text("prev").unwrap();
        dom.append_child(&a, &text).unwrap();

        assert_eq!(dom.first_child(&a), Some(text));
        assert_eq!(dom.text(&text).as_deref(), Some("prev"));
        assert!(dom.text(&a).is_none());
        assert!(dom.tag_name(&text).is_none());
        assert_eq!(dom.text_content(a), "prev");
    }

    #[test]
    fn test_serialization_escapes() {
        let dom = InMemoryDom::new();
        let a = dom.create_element("a").unwrap();
        dom.set_attribute(&a, "title", "say \"hi\" & <bye>").unwrap();
        let text = dom.create_text("1 < 2 & 3").unwrap();
        dom.append_child(&a, &text).unwrap();

        let html = dom.outer_html(a);
        assert!(html.contains("&quot;hi&quot;"));
        assert!(html.contains("1 &lt; 2 &amp; 3"));
    }

    #[test]
    fn test_void_elements_have_no_end_tag() {
        let dom = InMemoryDom::new();
        let div = dom.create_element("div").unwrap();
        let br = dom.create_element("br").unwrap();
        dom.append_child(&div, &br).unwrap();
        assert_eq!(dom.outer_html(div), "<div><br></div>");
        assert_eq!(dom.inner_html(div), "<br>");
    }

    #[test]
    fn test_name() {
        assert_eq!(InMemoryDom::new().name(), "InMemoryDom");
    }

    #[test]
    fn test_dom_error_display() {
        let err = DomError::InvalidTagName("1div".to_string());
        assert!(err.to_string().contains("1div"));

        let err = DomError::InvalidSelector {
            selector: "a[".to_string(),
            message: "unterminated".to_string(),
        };
        assert!(err.to_string().contains("a["));
        assert!(err.to_string().contains("unterminated"));
    }
}
