//! `DomTree` over a live browser document.

use docbar_traits::{DomError, DomTree};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Node, NodeList};

/// A browser document seen through [`DomTree`].
///
/// Node handles are `web_sys::Node`; elements and text nodes share the type
/// and are told apart with `dyn_ref`.
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the global `window`.
    pub fn from_window() -> Result<Self, DomError> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| DomError::Host("no global document".to_string()))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Best-effort message of a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else if let Some(text) = value.as_string() {
        text
    } else {
        format!("{:?}", value)
    }
}

fn snapshot(list: NodeList) -> Vec<Node> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn as_element<'n>(node: &'n Node) -> Result<&'n Element, DomError> {
    node.dyn_ref::<Element>()
        .ok_or_else(|| DomError::NotAnElement(node.node_name()))
}

impl DomTree for WebDom {
    type Node = Node;

    fn body(&self) -> Result<Node, DomError> {
        self.document
            .body()
            .map(Node::from)
            .ok_or(DomError::MissingBody)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Node>, DomError> {
        self.document
            .query_selector_all(selector)
            .map(snapshot)
            .map_err(|err| DomError::InvalidSelector {
                selector: selector.to_string(),
                message: js_message(&err),
            })
    }

    fn query_all_in(&self, scope: &Node, selector: &str) -> Result<Vec<Node>, DomError> {
        as_element(scope)?
            .query_selector_all(selector)
            .map(snapshot)
            .map_err(|err| DomError::InvalidSelector {
                selector: selector.to_string(),
                message: js_message(&err),
            })
    }

    fn create_element(&self, tag: &str) -> Result<Node, DomError> {
        self.document
            .create_element(tag)
            .map(Node::from)
            .map_err(|_| DomError::InvalidTagName(tag.to_string()))
    }

    fn create_text(&self, text: &str) -> Result<Node, DomError> {
        Ok(self.document.create_text_node(text).into())
    }

    fn set_attribute(&self, node: &Node, name: &str, value: &str) -> Result<(), DomError> {
        as_element(node)?
            .set_attribute(name, value)
            .map_err(|err| DomError::Host(js_message(&err)))
    }

    fn attribute(&self, node: &Node, name: &str) -> Option<String> {
        node.dyn_ref::<Element>()?.get_attribute(name)
    }

    fn append_child(&self, parent: &Node, child: &Node) -> Result<(), DomError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|err| DomError::HierarchyRequest(js_message(&err)))
    }

    fn remove(&self, node: &Node) -> Result<(), DomError> {
        if let Some(parent) = node.parent_node() {
            parent
                .remove_child(node)
                .map_err(|err| DomError::HierarchyRequest(js_message(&err)))?;
        }
        Ok(())
    }

    fn first_child(&self, node: &Node) -> Option<Node> {
        node.first_child()
    }

    fn children(&self, node: &Node) -> Vec<Node> {
        snapshot(node.child_nodes())
    }

    fn parent(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn text(&self, node: &Node) -> Option<String> {
        if node.node_type() == Node::TEXT_NODE {
            node.node_value()
        } else {
            None
        }
    }

    fn tag_name(&self, node: &Node) -> Option<String> {
        node.dyn_ref::<Element>().map(|element| element.local_name())
    }

    fn name(&self) -> &'static str {
        "WebDom"
    }
}
