//! # docbar-core
//!
//! Platform-agnostic sidebar assembly for generated documentation pages.
//!
//! Generated pages carry a cross-links container (anchors labelled `prev`,
//! `up` and `next`) and optionally a page-local table of contents. This crate
//! rearranges both into a single sidebar:
//! - **helpers**: query and element-factory shorthands over [`DomTree`]
//! - **role**: the closed set of navigation roles
//! - **toolbar**: cross-links to arrow-glyph toolbar entries
//! - **sidebar**: the assembler that ties it together
//! - **config**: class markers, tags and glyphs
//!
//! ## Design Principle
//!
//! This crate never touches a browser. Every operation is generic over the
//! [`DomTree`] trait; `docbar-wasm` supplies the `web_sys` implementation and
//! [`docbar_traits::InMemoryDom`] the native one.

pub use docbar_traits as traits;

pub mod config;
pub mod error;
pub mod helpers;
pub mod role;
pub mod sidebar;
pub mod toolbar;

pub use config::{Glyphs, SidebarConfig};
pub use error::SidebarError;
pub use role::{NavRole, RoleSlots};
pub use sidebar::{Assembly, SidebarAssembler, assemble_sidebar};
pub use toolbar::{LinkSource, ToolbarLink, ToolbarLinks, transform_crosslinks};

pub use traits::{DomError, DomTree, InMemoryDom, NodeId};
