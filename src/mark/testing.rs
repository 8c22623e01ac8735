//! Testing utilities for the mark parser
//!
//! Parser tests should assert on the whole shape of the tree, not on counts alone. The
//! fluent [`assert_ast`](fn@assert_ast) API keeps those assertions short:
//!
//! ```rust-example
//! use mark::mark::testing::assert_ast;
//!
//! let doc = parse_document("- a\n\t- b\n")?;
//! assert_ast(&doc)
//!     .block_count(1)
//!     .block(0, |list| {
//!         list.assert_unordered_list()
//!             .child_count(1)
//!             .child(0, |item| {
//!                 item.assert_list_item()
//!                     .child(0, |p| { p.assert_paragraph().text("a"); })
//!                     .child(1, |nested| { nested.assert_unordered_list().list_depth(1); });
//!             });
//!     });
//! ```
//!
//! Every assertion carries a context path (`doc:blocks[0]:children[1]`) so a failure
//! points straight at the offending node.
//!
//! Token-level tests build their expectations with [`factories::mk_tokens`].

mod testing_assertions;
mod testing_factories;
mod testing_matchers;

pub use testing_assertions::{assert_ast, DocumentAssertion, NodeAssertion};
pub use testing_matchers::TextMatch;

// Public submodule path: crate::mark::testing::factories
pub mod factories {
    pub use super::testing_factories::*;
}
