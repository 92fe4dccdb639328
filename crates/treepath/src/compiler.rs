use core::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::filter::Filter;
use crate::model::QName;
use crate::parser::parse_selector;
use crate::query::Query;

/// Path segment spelling that switches the remainder of the path to
/// descendant search.
pub const DESCENDANT_MARKER: &str = "...";

/// One step of a path expression, before compilation.
///
/// Most call sites build segments implicitly through the `From` impls, so a
/// path can mix string selectors, prebuilt filters, qualified names and
/// numeric positions in one literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Search all descendants instead of direct children.
    Descendants,
    /// A textual selector, parsed with [`parse_selector`].
    Selector(String),
    /// A prebuilt filter, used as a child step verbatim.
    Filter(Filter),
    /// A namespace-aware tag-name step.
    Name(QName),
    /// An attribute-equality step.
    Attribute { name: QName, value: String },
    /// An index into the current set. Validated during compilation.
    Position(i64),
}

impl From<&str> for PathSegment {
    fn from(text: &str) -> Self {
        if text == DESCENDANT_MARKER {
            PathSegment::Descendants
        } else {
            PathSegment::Selector(text.to_string())
        }
    }
}

impl From<String> for PathSegment {
    fn from(text: String) -> Self {
        PathSegment::from(text.as_str())
    }
}

impl From<Filter> for PathSegment {
    fn from(filter: Filter) -> Self {
        PathSegment::Filter(filter)
    }
}

impl From<QName> for PathSegment {
    fn from(name: QName) -> Self {
        PathSegment::Name(name)
    }
}

impl From<i64> for PathSegment {
    fn from(index: i64) -> Self {
        PathSegment::Position(index)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Position(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Descendants => f.write_str(DESCENDANT_MARKER),
            PathSegment::Selector(text) => f.write_str(text),
            PathSegment::Filter(filter) => write!(f, "{filter}"),
            PathSegment::Name(name) => write!(f, "{name}"),
            PathSegment::Attribute { name, value } => write!(f, "[{name}={value}]"),
            PathSegment::Position(index) => write!(f, "{index}"),
        }
    }
}

/// Path compilation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("position segments must be non-negative, got {0}")]
    NegativePosition(i64),
}

/// Compile a path expression into an executable [`Query`].
///
/// Segments compose right-to-left: each one wraps the query built from the
/// segments after it. A [`PathSegment::Descendants`] marker turns that
/// suffix query into a descendant search, absorbing a leading tag filter
/// when there is one. Consecutive markers collapse into a single
/// unfiltered search.
pub fn compile_path<I>(path: I) -> Result<Query, CompileError>
where
    I: IntoIterator,
    I::Item: Into<PathSegment>,
{
    let segments: Vec<PathSegment> = path.into_iter().map(Into::into).collect();
    let rendered = segments.iter().join("/");

    let mut query = Query::Identity;
    for segment in segments.into_iter().rev() {
        query = match segment {
            PathSegment::Descendants => Query::descendant_from(query),
            PathSegment::Selector(text) => {
                Query::from(parse_selector(&text)).then(query)
            }
            PathSegment::Filter(filter) => Query::from(filter).then(query),
            PathSegment::Name(name) => {
                Query::from(crate::filter::qualified_tag(name)).then(query)
            }
            PathSegment::Attribute { name, value } => {
                Query::from(crate::filter::attribute_equals_qualified(name, &value)).then(query)
            }
            PathSegment::Position(index) => {
                let index = usize::try_from(index)
                    .map_err(|_| CompileError::NegativePosition(index))?;
                Query::Position(index).then(query)
            }
        };
    }

    tracing::debug!(path = %rendered, query = %query, "compiled path");
    Ok(query)
}

/// Compile a path of plain selector strings.
///
/// Convenience over [`compile_path`] for the common all-text case.
pub fn compile_selector_path<'a>(
    path: impl IntoIterator<Item = &'a str>,
) -> Result<Query, CompileError> {
    compile_path(path)
}
