//! DomTree trait for abstracting the document being rearranged.
//!
//! This trait allows the assembler to work against a live browser document
//! or a detached in-memory tree without being tied to either.

use std::fmt::Debug;
use thiserror::Error;

/// Error type for document tree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Document has no body element")]
    MissingBody,

    #[error("Invalid tag name: '{0}'")]
    InvalidTagName(String),

    #[error("Unsupported selector: '{0}'")]
    UnsupportedSelector(String),

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Hierarchy request error: {0}")]
    HierarchyRequest(String),

    #[error("Node is not an element: {0}")]
    NotAnElement(String),

    #[error("Host DOM error: {0}")]
    Host(String),
}

/// A mutable document tree.
///
/// All methods take `&self`: documents are shared, interior-mutable
/// structures both in the browser and in [`crate::InMemoryDom`]. Node handles
/// are cheap to clone and compare by identity.
///
/// # Implementations
///
/// - `InMemoryDom`: arena-backed tree (always available)
/// - `WebDom`: live `web_sys::Document` (in `docbar-wasm`)
pub trait DomTree: Debug {
    /// Opaque handle to a node of this tree.
    type Node: Clone + PartialEq + Debug;

    /// The `<body>` element of the document.
    fn body(&self) -> Result<Self::Node, DomError>;

    /// All elements of the document matching `selector`, in document order.
    ///
    /// The result is a static snapshot; later mutations do not affect it.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Node>, DomError>;

    /// All descendants of `scope` matching `selector`, in document order.
    ///
    /// `scope` itself is never part of the result.
    fn query_all_in(&self, scope: &Self::Node, selector: &str)
    -> Result<Vec<Self::Node>, DomError>;

    /// Create a detached element with the given tag name.
    fn create_element(&self, tag: &str) -> Result<Self::Node, DomError>;

    /// Create a detached text node.
    fn create_text(&self, text: &str) -> Result<Self::Node, DomError>;

    /// Set an attribute on an element, replacing any previous value.
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    /// Read an attribute of an element. `None` for missing attributes and
    /// for non-element nodes.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Append `child` as the last child of `parent`.
    ///
    /// A child that is already attached somewhere is moved, not copied.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Detach `node` from its parent. Detached nodes are left untouched.
    fn remove(&self, node: &Self::Node) -> Result<(), DomError>;

    fn first_child(&self, node: &Self::Node) -> Option<Self::Node>;

    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The data of a text node; `None` for any other kind of node.
    fn text(&self, node: &Self::Node) -> Option<String>;

    /// Lower-case tag name of an element; `None` for any other kind of node.
    fn tag_name(&self, node: &Self::Node) -> Option<String>;

    /// Returns a human-readable name for this backend (for logging/debugging).
    fn name(&self) -> &'static str;
}
