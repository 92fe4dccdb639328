use core::fmt;

use fancy_regex::Regex;

use crate::model::{ElementNode, QName};

/// Tag-name test: literal comparison or a full-string regex pattern.
///
/// A tag selector is treated as a regex over the element's local name, so
/// `h[1-6]` matches every heading. Plain identifiers skip regex compilation
/// entirely; a pattern that fails to compile degrades to literal comparison
/// instead of erroring.
#[derive(Debug, Clone)]
pub enum NameTest {
    Literal(String),
    Pattern { source: String, regex: Box<Regex> },
}

impl NameTest {
    pub fn new(pattern: &str) -> Self {
        if pattern.chars().all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | ':')) {
            return NameTest::Literal(pattern.to_string());
        }
        match Regex::new(&format!("^(?:{pattern})$")) {
            Ok(regex) => NameTest::Pattern { source: pattern.to_string(), regex: Box::new(regex) },
            Err(_) => NameTest::Literal(pattern.to_string()),
        }
    }

    pub fn source(&self) -> &str {
        match self {
            NameTest::Literal(source) | NameTest::Pattern { source, .. } => source,
        }
    }

    pub fn matches(&self, local: &str) -> bool {
        match self {
            NameTest::Literal(source) => source == local,
            NameTest::Pattern { regex, .. } => regex.is_match(local).unwrap_or(false),
        }
    }
}

impl PartialEq for NameTest {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
    }
}

impl Eq for NameTest {}

/// A pure boolean test over a single element.
///
/// Filters are immutable once built and reusable across trees. Conjunction
/// evaluates left-to-right and stops at the first failing part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Matches every element.
    Any,
    /// Element local name satisfies the test.
    Tag(NameTest),
    /// Namespace-aware name match, delegated to [`QName::matches`].
    QualifiedTag(QName),
    /// Attribute resolved via [`QName::matches`] equals `value` exactly.
    /// An absent attribute is a non-match, never an error.
    AttributeEquals { name: QName, value: String },
    /// All parts must match.
    All(Vec<Filter>),
}

impl Filter {
    pub fn matches<N: ElementNode>(&self, element: &N) -> bool {
        match self {
            Filter::Any => true,
            Filter::Tag(test) => element.name().is_some_and(|name| test.matches(&name.local)),
            Filter::QualifiedTag(want) => element.name().is_some_and(|name| want.matches(&name)),
            Filter::AttributeEquals { name, value } => {
                element.attribute(name).is_some_and(|v| v == *value)
            }
            Filter::All(parts) => parts.iter().all(|part| part.matches(element)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Any => f.write_str("*"),
            Filter::Tag(test) => f.write_str(test.source()),
            Filter::QualifiedTag(name) => write!(f, "{name}"),
            Filter::AttributeEquals { name, value } => write!(f, "[{name}={value}]"),
            Filter::All(parts) => {
                for part in parts {
                    match part {
                        // The leading any-part of a parsed selector reads
                        // better elided: `[lang=en]` rather than `*[lang=en]`.
                        Filter::Any if parts.len() > 1 => {}
                        _ => write!(f, "{part}")?,
                    }
                }
                Ok(())
            }
        }
    }
}

/// Matches every element.
pub fn any() -> Filter {
    Filter::Any
}

/// Tag-name filter; empty or `"*"` means any element.
pub fn tag_name(pattern: &str) -> Filter {
    if pattern.is_empty() || pattern == "*" {
        return Filter::Any;
    }
    Filter::Tag(NameTest::new(pattern))
}

/// Namespace-aware tag-name filter.
pub fn qualified_tag(name: impl Into<QName>) -> Filter {
    Filter::QualifiedTag(name.into())
}

/// Attribute equality in no particular namespace.
pub fn attribute_equals(name: &str, value: &str) -> Filter {
    attribute_equals_qualified(QName::local(name), value)
}

/// Attribute equality with an explicit qualified name.
pub fn attribute_equals_qualified(name: impl Into<QName>, value: &str) -> Filter {
    Filter::AttributeEquals { name: name.into(), value: value.to_string() }
}

/// Conjunction of filters, evaluated left-to-right with early exit.
pub fn all_of(parts: impl IntoIterator<Item = Filter>) -> Filter {
    Filter::All(parts.into_iter().collect())
}
