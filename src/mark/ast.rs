//! AST definitions for the mark dialect
//!
//! The tree is built from a single [`Node`] type whose [`NodeKind`] carries the
//! kind-specific payload. Children are stored in document order and renderers rely on
//! that order.
//!
//! ## Modules
//!
//! - `node` - Node, NodeKind and ListKind
//! - `document` - The top-level block sequence
//! - `traits` - Uniform naming used by the debug formats

pub mod document;
pub mod node;
pub mod traits;

pub use document::Document;
pub use node::{ListKind, Node, NodeKind};
pub use traits::AstNode;
