//! Peephole rewrites that replace split trees with direct checks.

use crate::matcher::{BTree, Matcher, Primitive};

/// Rewrite `matcher` into an equivalent, cheaper shape when one is known.
///
/// `BTree` sides are optimized bottom-up first. Only trees split on a literal
/// are rewritten further; `Every` and `AnyOf` children are left as they are,
/// since every child was optimized when it was lowered.
///
/// # Examples
/// ```
/// use glob_lowering::{BTree, Matcher, Primitive, optimize};
///
/// let tree = BTree::new(Primitive::Raw("foo".into()), None, Some(Primitive::Super.into()));
/// assert_eq!(optimize(tree.into()), Primitive::Prefix("foo".into()).into());
/// ```
#[must_use]
pub fn optimize(matcher: Matcher) -> Matcher {
    match matcher {
        Matcher::Primitive(Primitive::Any { separators }) if separators.is_empty() => {
            log::trace!("rewrote unrestricted any to super");
            Primitive::Super.into()
        }
        Matcher::BTree(tree) => optimize_tree(tree),
        other => other,
    }
}

fn optimize_side(side: Option<Box<Matcher>>) -> Option<Box<Matcher>> {
    side.map(|m| Box::new(optimize(*m)))
}

fn optimize_tree(tree: BTree) -> Matcher {
    let BTree { value, left, right } = tree;
    let left = optimize_side(left);
    let right = optimize_side(right);

    let Primitive::Raw(literal) = &value else {
        return BTree { value, left, right }.into();
    };

    rewrite_literal(literal, left.as_deref(), right.as_deref()).map_or_else(
        || BTree { value, left, right }.into(),
        |rewritten| {
            log::trace!("rewrote literal split tree to {rewritten}");
            rewritten
        },
    )
}

fn rewrite_literal(
    literal: &str,
    left: Option<&Matcher>,
    right: Option<&Matcher>,
) -> Option<Matcher> {
    let rewritten = match (left, right) {
        (None, None) => Primitive::Raw(literal.to_owned()).into(),
        (Some(Matcher::Primitive(Primitive::Super)), Some(Matcher::Primitive(Primitive::Super))) => {
            Primitive::Contains {
                needle: literal.to_owned(),
                negated: false,
            }
            .into()
        }
        (Some(Matcher::Primitive(Primitive::Super)), None) => {
            Primitive::Suffix(literal.to_owned()).into()
        }
        (None, Some(Matcher::Primitive(Primitive::Super))) => {
            Primitive::Prefix(literal.to_owned()).into()
        }
        (None, Some(Matcher::Primitive(Primitive::Suffix(suffix)))) => {
            prefix_and_suffix(literal.to_owned(), suffix.clone())
        }
        (Some(Matcher::Primitive(Primitive::Prefix(prefix))), None) => {
            prefix_and_suffix(prefix.clone(), literal.to_owned())
        }
        _ => return None,
    };
    Some(rewritten)
}

/// `prefix`, then anything, then `suffix`.
///
/// A string shorter than both fragments together can still start with one
/// and end with the other when they overlap, so such pairs get a length
/// floor.
fn prefix_and_suffix(prefix: String, suffix: String) -> Matcher {
    let floor = if fragments_overlap(&prefix, &suffix) {
        Some(Primitive::Min(prefix.chars().count() + suffix.chars().count()))
    } else {
        None
    };
    let mut every = vec![Primitive::Prefix(prefix).into(), Primitive::Suffix(suffix).into()];
    every.extend(floor.map(Matcher::from));
    Matcher::Every(every)
}

/// Whether some non-empty tail of `prefix` equals a head of `suffix`.
fn fragments_overlap(prefix: &str, suffix: &str) -> bool {
    prefix
        .char_indices()
        .map(|(i, _)| prefix.get(i..).unwrap_or_default())
        .any(|tail| suffix.starts_with(tail))
}
