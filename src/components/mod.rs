pub mod dom_node;

pub use dom_node::DomNode;
