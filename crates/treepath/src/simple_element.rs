//! A small reference-counted element tree implementing [`ElementNode`].
//!
//! Handy for tests, examples and callers without a DOM of their own. Trees
//! are built with [`elem`] and [`doc`] and immutable afterwards, so handles
//! are cheap to clone and safe to share across threads.
//!
//! ```
//! use treepath::{compile_selector_path, ElementSet};
//! use treepath::simple_element::{doc, elem};
//!
//! let tree = doc()
//!     .child(elem("ul").child(elem("li").attr("class", "done")))
//!     .build();
//!
//! let query = compile_selector_path(["ul", ".done"]).unwrap();
//! let found = query.execute(&ElementSet::singleton(tree));
//! assert_eq!(found.len(), 1);
//! ```

use core::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::model::{ElementNode, QName};

/// A shared handle to one node of an immutable element tree.
///
/// Equality is identity: two handles are equal when they point at the same
/// node, which is what set membership and deduplication want. Structural
/// comparison of distinct trees is not supported.
#[derive(Debug, Clone)]
pub struct SimpleElement(Arc<Inner>);

#[derive(Debug)]
struct Inner {
    name: Option<QName>,
    attributes: Vec<(QName, String)>,
    children: Vec<SimpleElement>,
}

impl SimpleElement {
    /// All attributes in insertion order.
    pub fn attributes(&self) -> &[(QName, String)] {
        &self.0.attributes
    }
}

impl PartialEq for SimpleElement {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SimpleElement {}

impl Hash for SimpleElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl ElementNode for SimpleElement {
    fn name(&self) -> Option<QName> {
        self.0.name.clone()
    }

    fn children(&self) -> Vec<Self> {
        self.0.children.clone()
    }

    fn attribute(&self, name: &QName) -> Option<String> {
        self.0
            .attributes
            .iter()
            .find(|(attr, _)| name.matches(attr))
            .map(|(_, value)| value.clone())
    }
}

impl fmt::Display for SimpleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.name {
            Some(name) => write!(f, "<{name}>"),
            None => f.write_str("<>"),
        }
    }
}

/// Builder for a [`SimpleElement`] and its subtree.
#[derive(Debug, Default)]
pub struct ElementBuilder {
    name: Option<QName>,
    attributes: Vec<(QName, String)>,
    children: Vec<SimpleElement>,
}

impl ElementBuilder {
    /// Add an attribute with no namespace.
    #[must_use]
    pub fn attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr_qualified(QName::local(name), value)
    }

    /// Add an attribute under an explicit qualified name.
    #[must_use]
    pub fn attr_qualified(mut self, name: impl Into<QName>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn child(mut self, child: impl Into<SimpleElement>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn build(self) -> SimpleElement {
        SimpleElement(Arc::new(Inner {
            name: self.name,
            attributes: self.attributes,
            children: self.children,
        }))
    }
}

impl From<ElementBuilder> for SimpleElement {
    fn from(builder: ElementBuilder) -> Self {
        builder.build()
    }
}

/// Start building a named element.
pub fn elem(name: impl Into<QName>) -> ElementBuilder {
    ElementBuilder { name: Some(name.into()), ..ElementBuilder::default() }
}

/// Start building a nameless container, such as a document root.
///
/// A container never matches a tag-name test but its children are still
/// reachable by every query step.
pub fn doc() -> ElementBuilder {
    ElementBuilder::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_equality() {
        let a = elem("p").build();
        let b = elem("p").build();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn attribute_lookup_respects_namespaces() {
        let ns = "urn:example";
        let element = elem("p")
            .attr("lang", "en")
            .attr_qualified(QName::namespaced("lang", ns), "de")
            .build();

        assert_eq!(element.attribute(&QName::local("lang")).as_deref(), Some("en"));
        assert_eq!(
            element.attribute(&QName::namespaced("lang", ns)).as_deref(),
            Some("de")
        );
    }

    #[test]
    fn containers_have_no_name() {
        let root = doc().child(elem("html")).build();
        assert_eq!(root.name(), None);
        assert_eq!(root.children().len(), 1);
    }
}
