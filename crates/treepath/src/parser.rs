//! Compact selector syntax for single-element predicates.
//!
//! A selector is one of four shapes, tried in this order:
//!
//! 1. `tag[attr=value]`: attribute equality, with optional tag prefix
//! 2. `tag#id`: id shorthand
//! 3. `tag.class`: class shorthand
//! 4. `tag`: plain tag name (possibly a regex pattern)
//!
//! In every shape the tag prefix may be empty or `*`, both meaning any
//! element. Parsing never fails: text that fits no decorated shape is a
//! tag-name test.

use crate::filter::{Filter, all_of, any, attribute_equals, tag_name};

/// Parse a selector string into a [`Filter`].
///
/// The decorated shapes split on the rightmost occurrence of their marker
/// that leaves a non-empty suffix, so a `#` or `.` inside the tag part stays
/// with the tag. An attribute body must contain `=` with text on both sides;
/// otherwise the bracket form does not apply and the later shapes get a try.
pub fn parse_selector(text: &str) -> Filter {
    if text.is_empty() || text == "*" {
        return any();
    }
    attribute_form(text)
        .or_else(|| marker_form(text, '#', "id"))
        .or_else(|| marker_form(text, '.', "class"))
        .unwrap_or_else(|| tag_name(text))
}

fn attribute_form(text: &str) -> Option<Filter> {
    let stripped = text.strip_suffix(']')?;
    // Greedy split: the longest tag prefix that still leaves a `name=value`
    // body wins, and within the body the longest name wins. `a[b=c][d]` has
    // no `=` after its last bracket, so the split falls back to the first
    // one and the value keeps the rest: attribute `b` equals `c][d`.
    for (open, _) in stripped.rmatch_indices('[') {
        let body = &stripped[open + 1..];
        for (eq, _) in body.rmatch_indices('=') {
            let (name, value) = (&body[..eq], &body[eq + 1..]);
            if !name.is_empty() && !value.is_empty() {
                return Some(all_of([
                    tag_name(&stripped[..open]),
                    attribute_equals(name, value),
                ]));
            }
        }
    }
    None
}

fn marker_form(text: &str, marker: char, attribute: &str) -> Option<Filter> {
    let mut pos = text.rfind(marker)?;
    if pos + marker.len_utf8() == text.len() {
        // A trailing marker cannot carry a value; back up to the previous
        // one, if any.
        pos = text[..pos].rfind(marker)?;
    }
    let value = &text[pos + marker.len_utf8()..];
    Some(all_of([tag_name(&text[..pos]), attribute_equals(attribute, value)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tag() {
        assert_eq!(parse_selector("div"), tag_name("div"));
    }

    #[test]
    fn wildcard_and_empty_match_anything() {
        assert_eq!(parse_selector("*"), any());
        assert_eq!(parse_selector(""), any());
    }

    #[test]
    fn id_shorthand() {
        assert_eq!(
            parse_selector("div#main"),
            all_of([tag_name("div"), attribute_equals("id", "main")])
        );
    }

    #[test]
    fn class_shorthand_without_tag() {
        assert_eq!(
            parse_selector(".highlight"),
            all_of([any(), attribute_equals("class", "highlight")])
        );
    }

    #[test]
    fn attribute_value_keeps_stray_brackets() {
        assert_eq!(
            parse_selector("a[b=c][d]"),
            all_of([tag_name("a"), attribute_equals("b", "c][d")])
        );
    }

    #[test]
    fn attribute_split_prefers_last_bracket() {
        assert_eq!(
            parse_selector("a[x][b=c]"),
            all_of([tag_name("a[x]"), attribute_equals("b", "c")])
        );
    }

    #[test]
    fn attribute_name_takes_extra_equals() {
        assert_eq!(
            parse_selector("a[b=c=d]"),
            all_of([tag_name("a"), attribute_equals("b=c", "d")])
        );
    }

    #[test]
    fn empty_attribute_name_falls_through() {
        // `[=x]` has no name, so the whole text is a tag test.
        assert_eq!(parse_selector("[=x]"), tag_name("[=x]"));
    }

    #[test]
    fn trailing_hash_backtracks() {
        assert_eq!(
            parse_selector("a#b#"),
            all_of([tag_name("a"), attribute_equals("id", "b#")])
        );
    }
}
