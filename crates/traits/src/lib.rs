pub mod dom;
pub mod memory;

pub use dom::{DomError, DomTree};
pub use memory::{InMemoryDom, NodeId};
