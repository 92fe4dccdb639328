use core::fmt;

use crate::filter::Filter;
use crate::model::ElementNode;
use crate::set::{ElementBuf, ElementSet};

/// A composable step pipeline mapping one [`ElementSet`] to another.
///
/// Queries are built once, borrow nothing from any tree, and can run against
/// any number of inputs. Execution never mutates elements and never fails:
/// a step with nothing to match yields an empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Returns its input unchanged.
    Identity,
    /// Child axis: the children of each input element satisfying the filter,
    /// in document order.
    Filter(Filter),
    /// Sequential composition: `child` runs on `parent`'s output.
    Child { parent: Box<Query>, child: Box<Query> },
    /// Depth-first search of all descendants satisfying `filter`, each fed
    /// through `next`. Matching does not stop the descent, so matches nested
    /// inside matches are found too.
    Descendant { filter: Filter, next: Box<Query> },
    /// The element at `index`, or nothing when the set is shorter.
    Position(usize),
}

impl Query {
    /// Compose `self` with a following step.
    pub fn then(self, next: Query) -> Query {
        Query::Child { parent: Box::new(self), child: Box::new(next) }
    }

    /// Turn the step after a descendant marker into a descendant search.
    ///
    /// A composition whose head is a plain filter donates that filter to the
    /// search and its tail becomes the continuation. Any other composition
    /// searches every descendant and runs the whole step as continuation.
    /// A step with no filter to donate (the identity, a bare filter, a
    /// position) searches every descendant with no continuation.
    pub(crate) fn descendant_from(rest: Query) -> Query {
        match rest {
            Query::Child { parent, child } => match *parent {
                Query::Filter(filter) => Query::Descendant { filter, next: child },
                other => Query::Descendant {
                    filter: Filter::Any,
                    next: Box::new(Query::Child { parent: Box::new(other), child }),
                },
            },
            _ => Query::Descendant { filter: Filter::Any, next: Box::new(Query::Identity) },
        }
    }

    /// Run the pipeline over `input`.
    pub fn execute<N: ElementNode>(&self, input: &ElementSet<N>) -> ElementSet<N> {
        match self {
            Query::Identity => input.clone(),
            Query::Filter(filter) => {
                let mut matched = ElementBuf::new();
                for element in input {
                    matched.extend(
                        element.children().into_iter().filter(|child| filter.matches(child)),
                    );
                }
                input.derive(self, matched)
            }
            Query::Child { parent, child } => child.execute(&parent.execute(input)),
            Query::Descendant { filter, next } => {
                let mut found = ElementBuf::new();
                for element in input {
                    collect_descendants(element, filter, next, &mut found);
                }
                input.derive(self, found)
            }
            Query::Position(index) => {
                let mut picked = ElementBuf::new();
                picked.extend(input.get(*index).cloned());
                input.derive(self, picked)
            }
        }
    }
}

fn collect_descendants<N: ElementNode>(
    element: &N,
    filter: &Filter,
    next: &Query,
    out: &mut ElementBuf<N>,
) {
    for child in element.children() {
        if filter.matches(&child) {
            out.extend(next.execute(&ElementSet::singleton(child.clone())));
        }
        collect_descendants(&child, filter, next, out);
    }
}

impl From<Filter> for Query {
    fn from(filter: Filter) -> Self {
        Query::Filter(filter)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Identity => f.write_str("."),
            Query::Filter(filter) => write!(f, "{filter}"),
            Query::Child { parent, child } => match child.as_ref() {
                Query::Identity => write!(f, "{parent}"),
                child => write!(f, "{parent}/{child}"),
            },
            Query::Descendant { filter, next } => {
                f.write_str("...")?;
                if *filter != Filter::Any {
                    write!(f, "/{filter}")?;
                }
                match next.as_ref() {
                    Query::Identity => Ok(()),
                    next => write!(f, "/{next}"),
                }
            }
            Query::Position(index) => write!(f, "{index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{any, tag_name};

    #[test]
    fn descendant_absorbs_leading_filter() {
        let rest = Query::from(tag_name("td")).then(Query::Identity);
        let query = Query::descendant_from(rest);
        assert_eq!(query.to_string(), ".../td");
    }

    #[test]
    fn descendant_after_position_keeps_whole_step() {
        let rest = Query::Position(2).then(Query::from(tag_name("a")).then(Query::Identity));
        let query = Query::descendant_from(rest);
        match &query {
            Query::Descendant { filter, .. } => assert_eq!(*filter, any()),
            other => panic!("expected descendant, got {other}"),
        }
        assert_eq!(query.to_string(), ".../2/a");
    }

    #[test]
    fn trailing_descendant_searches_everything() {
        let query = Query::descendant_from(Query::Identity);
        assert_eq!(
            query,
            Query::Descendant { filter: any(), next: Box::new(Query::Identity) }
        );
        assert_eq!(query.to_string(), "...");
    }
}
