//! # docbar
//!
//! Turns the previous/up/next cross-links and the local table of contents of
//! generated documentation pages into a single sidebar widget.
//!
//! ```
//! use docbar::{DomTree, InMemoryDom, assemble_sidebar};
//!
//! let dom = InMemoryDom::new();
//! let body = dom.body().unwrap();
//! let crosslinks = dom.create_element("div").unwrap();
//! dom.set_attribute(&crosslinks, "class", "crosslinks").unwrap();
//! dom.append_child(&body, &crosslinks).unwrap();
//!
//! let assembly = assemble_sidebar(&dom).unwrap();
//! assert_eq!(dom.text_content(assembly.toolbar), "⇦⇧⇨");
//! ```
//!
//! The browser bindings live in the `docbar-wasm` crate.

pub use docbar_traits as traits;

pub use docbar_core::{
    Assembly, Glyphs, LinkSource, NavRole, RoleSlots, SidebarAssembler, SidebarConfig,
    SidebarError, ToolbarLink, ToolbarLinks, assemble_sidebar, helpers, transform_crosslinks,
};
pub use docbar_traits::{DomError, DomTree, InMemoryDom, NodeId};
