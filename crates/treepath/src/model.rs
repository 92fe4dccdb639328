use core::fmt;

/// Namespace-qualified name of an element or attribute.
///
/// The prefix is carried for diagnostics only; matching compares local
/// names and namespace URIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub prefix: Option<String>,
    pub local: String,
    pub ns_uri: Option<String>,
}

impl QName {
    /// A name with no namespace.
    pub fn local(local: impl Into<String>) -> Self {
        QName { prefix: None, local: local.into(), ns_uri: None }
    }

    /// A name bound to a namespace URI.
    pub fn namespaced(local: impl Into<String>, ns_uri: impl Into<String>) -> Self {
        QName { prefix: None, local: local.into(), ns_uri: Some(ns_uri.into()) }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Whether `candidate` satisfies this name when used as a match rule.
    ///
    /// Local names must be equal. A matcher without a namespace URI accepts
    /// candidates in any namespace; an explicit URI must be equal on both
    /// sides. Prefixes never participate.
    pub fn matches(&self, candidate: &QName) -> bool {
        if self.local != candidate.local {
            return false;
        }
        match &self.ns_uri {
            None => true,
            Some(uri) => candidate.ns_uri.as_deref() == Some(uri.as_str()),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{prefix}:{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

impl From<&str> for QName {
    fn from(local: &str) -> Self {
        QName::local(local)
    }
}

impl From<String> for QName {
    fn from(local: String) -> Self {
        QName::local(local)
    }
}

/// A readable tree node: the interface the query engine consumes.
///
/// Implementations are expected to be cheap handles (an `Arc` or an index
/// into a shared arena). A node without a name models a document or root
/// container; it never matches a tag-name test but its children are still
/// traversed.
pub trait ElementNode: Clone + Eq + fmt::Debug + Send + Sync {
    fn name(&self) -> Option<QName>;

    /// Child elements in document order.
    fn children(&self) -> Vec<Self>;

    /// Value of the first attribute satisfying `name` (via [`QName::matches`]).
    fn attribute(&self, name: &QName) -> Option<String>;
}
