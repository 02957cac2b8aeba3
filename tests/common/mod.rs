pub mod fixtures;
pub mod html_assertions;

use docbar::{DomTree, InMemoryDom, NodeId};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Every sidebar currently attached to the document.
pub fn sidebars(dom: &InMemoryDom) -> Vec<NodeId> {
    dom.query_all(".sidebar").unwrap_or_default()
}

/// Text of each child of `node`, in order.
pub fn child_texts(dom: &InMemoryDom, node: NodeId) -> Vec<String> {
    dom.children(&node)
        .into_iter()
        .map(|child| dom.text_content(child))
        .collect()
}

/// Class attribute of each child of `node`, in order.
pub fn child_classes(dom: &InMemoryDom, node: NodeId) -> Vec<String> {
    dom.children(&node)
        .into_iter()
        .map(|child| dom.attribute(&child, "class").unwrap_or_default())
        .collect()
}
