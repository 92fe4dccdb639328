//! Path-based element queries over arbitrary trees.
//!
//! A path is a sequence of segments. Each segment compiles to a step that
//! maps a set of elements to the next set: tag and attribute selectors pick
//! matching children, numeric segments pick by position. The `...` marker
//! switches the rest of the path to a depth-first search of all
//! descendants. Compiled queries borrow nothing from any tree and can run
//! any number of times.
//!
//! Trees plug in through the [`ElementNode`] trait; a ready-made
//! implementation lives in [`simple_element`].
//!
//! ```
//! use treepath::{compile_selector_path, ElementSet};
//! use treepath::simple_element::{doc, elem};
//!
//! let tree = doc()
//!     .child(
//!         elem("table")
//!             .child(elem("tr").child(elem("td").attr("id", "first")))
//!             .child(elem("tr").child(elem("td").attr("id", "second"))),
//!     )
//!     .build();
//!
//! let query = compile_selector_path(["table", "...", "td"]).unwrap();
//! let cells = query.execute(&ElementSet::singleton(tree));
//! assert_eq!(cells.len(), 2);
//! ```

mod compiler;
mod filter;
mod model;
mod parser;
mod query;
mod set;
pub mod simple_element;

pub use compiler::{
    CompileError, DESCENDANT_MARKER, PathSegment, compile_path, compile_selector_path,
};
pub use filter::{
    Filter, NameTest, all_of, any, attribute_equals, attribute_equals_qualified, qualified_tag,
    tag_name,
};
pub use model::{ElementNode, QName};
pub use parser::parse_selector;
pub use query::Query;
pub use set::ElementSet;
