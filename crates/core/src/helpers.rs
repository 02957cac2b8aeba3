//! Small DOM helpers shared by the toolbar and sidebar builders.

use docbar_traits::{DomError, DomTree};

/// Snapshot of every element of the document matching `selector`.
pub fn query<D: DomTree>(dom: &D, selector: &str) -> Result<Vec<D::Node>, DomError> {
    dom.query_all(selector)
}

/// Snapshot of every descendant of `scope` matching `selector`.
pub fn query_in<D: DomTree>(
    dom: &D,
    scope: &D::Node,
    selector: &str,
) -> Result<Vec<D::Node>, DomError> {
    dom.query_all_in(scope, selector)
}

/// First element of the document matching `selector`, if any.
pub fn query_first<D: DomTree>(dom: &D, selector: &str) -> Result<Option<D::Node>, DomError> {
    Ok(query(dom, selector)?.into_iter().next())
}

/// Selector matching elements that carry `class`.
pub fn class_selector(class: &str) -> String {
    format!(".{}", class)
}

/// Create a detached `tag` element with the given class.
///
/// When `text` is present and non-empty, a single text node holding it is
/// appended to the new element.
pub fn create_element<D: DomTree>(
    dom: &D,
    tag: &str,
    class_name: &str,
    text: Option<&str>,
) -> Result<D::Node, DomError> {
    let element = dom.create_element(tag)?;
    dom.set_attribute(&element, "class", class_name)?;
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        let text_node = dom.create_text(text)?;
        dom.append_child(&element, &text_node)?;
    }
    Ok(element)
}

/// Replace the first child of `node` with a text node holding `text`.
///
/// A node without children simply gains the text node.
pub fn replace_text<D: DomTree>(dom: &D, node: &D::Node, text: &str) -> Result<(), DomError> {
    if let Some(first) = dom.first_child(node) {
        dom.remove(&first)?;
    }
    let text_node = dom.create_text(text)?;
    dom.append_child(node, &text_node)
}

/// Label of an anchor: the data of its first child when that child is text.
pub fn first_text<D: DomTree>(dom: &D, node: &D::Node) -> Option<String> {
    dom.first_child(node).and_then(|child| dom.text(&child))
}
