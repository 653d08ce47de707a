//! Reference evaluators for checking that compiled matchers keep their
//! meaning.
//!
//! Everything here is deliberately naive: each matcher is tested against the
//! whole input, and sequences try every split point.
use crate::ast::Node;
use crate::matcher::{Matcher, Primitive};

/// Every way to cut `s` in two at a character boundary.
fn splits(s: &str) -> impl Iterator<Item = (&str, &str)> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .map(move |i| s.split_at(i))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

pub(crate) fn primitive_matches(primitive: &Primitive, s: &str) -> bool {
    match primitive {
        Primitive::Raw(text) => s == text,
        Primitive::Single { separators } => {
            single_char(s).is_some_and(|c| !separators.contains(c))
        }
        Primitive::Any { separators } => !s.chars().any(|c| separators.contains(c)),
        Primitive::Super => true,
        Primitive::List { chars, not } => single_char(s).is_some_and(|c| chars.contains(c) != *not),
        Primitive::Range { lo, hi, not } => {
            single_char(s).is_some_and(|c| (*lo..=*hi).contains(&c) != *not)
        }
        Primitive::Prefix(prefix) => s.starts_with(prefix.as_str()),
        Primitive::Suffix(suffix) => s.ends_with(suffix.as_str()),
        Primitive::Contains {
            needle,
            negated: false,
        } => s.contains(needle.as_str()),
        Primitive::Contains {
            needle,
            negated: true,
        } => !s.chars().any(|c| needle.contains(c)),
        Primitive::Min(n) => s.chars().count() >= *n,
        Primitive::Max(n) => s.chars().count() <= *n,
    }
}

fn side_matches(side: Option<&Matcher>, s: &str) -> bool {
    side.map_or(s.is_empty(), |m| matcher_matches(m, s))
}

/// Whether `matcher` accepts the whole of `s`.
pub(crate) fn matcher_matches(matcher: &Matcher, s: &str) -> bool {
    match matcher {
        Matcher::Primitive(p) => primitive_matches(p, s),
        Matcher::Every(children) => children.iter().all(|m| matcher_matches(m, s)),
        Matcher::AnyOf(children) => children.iter().any(|m| matcher_matches(m, s)),
        Matcher::BTree(tree) => splits(s).any(|(before, rest)| {
            side_matches(tree.left.as_deref(), before)
                && splits(rest).any(|(span, after)| {
                    primitive_matches(&tree.value, span)
                        && side_matches(tree.right.as_deref(), after)
                })
        }),
    }
}

/// Whether `s` is a concatenation of strings accepted by `matchers` in order.
pub(crate) fn sequence_matches(matchers: &[Matcher], s: &str) -> bool {
    match matchers.split_first() {
        None => s.is_empty(),
        Some((first, rest)) => splits(s)
            .any(|(head, tail)| matcher_matches(first, head) && sequence_matches(rest, tail)),
    }
}

fn nodes_match(nodes: &[Node], separators: &str, s: &str) -> bool {
    match nodes.split_first() {
        None => s.is_empty(),
        Some((first, rest)) => splits(s).any(|(head, tail)| {
            node_matches(first, separators, head) && nodes_match(rest, separators, tail)
        }),
    }
}

/// Plain glob semantics over the syntax tree.
pub(crate) fn node_matches(node: &Node, separators: &str, s: &str) -> bool {
    match node {
        Node::Pattern(children) => nodes_match(children, separators, s),
        Node::AnyOf(children) => children.iter().any(|n| node_matches(n, separators, s)),
        Node::Text(text) => s == text,
        Node::List { chars, not } => single_char(s).is_some_and(|c| chars.contains(c) != *not),
        Node::Range { lo, hi, not } => {
            single_char(s).is_some_and(|c| (*lo..=*hi).contains(&c) != *not)
        }
        Node::Any => !s.chars().any(|c| separators.contains(c)),
        Node::Super => true,
        Node::Single => single_char(s).is_some_and(|c| !separators.contains(c)),
    }
}

/// All strings over `alphabet` up to `max_len` characters, shortest first.
pub(crate) fn sample_inputs(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|s| {
                alphabet.iter().map(move |c| {
                    let mut next = s.clone();
                    next.push(*c);
                    next
                })
            })
            .collect();
        all.extend(layer.iter().cloned());
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::BTree;

    #[test]
    fn absent_sides_match_only_empty_input() {
        let tree: Matcher = BTree::new(Primitive::Raw("a".into()), None, None).into();
        assert!(matcher_matches(&tree, "a"));
        assert!(!matcher_matches(&tree, "ba"));
        assert!(!matcher_matches(&tree, "ab"));
    }

    #[test]
    fn enumerates_sample_inputs() {
        let inputs = sample_inputs(&['x', 'y'], 2);
        assert_eq!(inputs, ["", "x", "y", "xx", "xy", "yx", "yy"]);
    }
}
