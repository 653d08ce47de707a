//! Binary split trees over matcher sequences.

use crate::errors::CompileError;
use crate::matcher::{BTree, Matcher};

use super::glue::glue_matchers;

/// Index of the primitive to split on: the first literal, otherwise the last
/// primitive in the sequence.
fn find_anchor(matchers: &[Matcher]) -> Option<usize> {
    let mut anchor = None;
    for (idx, matcher) in matchers.iter().enumerate() {
        if let Some(primitive) = matcher.as_primitive() {
            anchor = Some(idx);
            if primitive.is_raw() {
                break;
            }
        }
    }
    anchor
}

/// Convert a non-empty side of a split; empty sides stay absent.
fn convert_side(matchers: &[Matcher]) -> Result<Option<Matcher>, CompileError> {
    if matchers.is_empty() {
        Ok(None)
    } else {
        convert_matchers(matchers).map(Some)
    }
}

/// Combine a sequence of matchers into one matcher for their concatenation.
///
/// Runs of fusible wildcards are glued together directly. Otherwise the
/// sequence is split around an anchor primitive (the first literal, or the
/// last primitive when there is no literal) and both sides are converted
/// recursively.
///
/// # Errors
/// Returns [`CompileError::NoAnchorFound`] when the sequence cannot be fused
/// and holds no primitive to split on.
///
/// # Examples
/// ```
/// use glob_lowering::{BTree, Matcher, Primitive, convert_matchers};
///
/// let single: Matcher = Primitive::Single { separators: String::new() }.into();
/// let tree = convert_matchers(&[Primitive::Raw("a".into()).into(), single.clone()])
///     .expect("a literal anchors the split");
/// assert_eq!(tree, BTree::new(Primitive::Raw("a".into()), None, Some(single)).into());
/// ```
pub fn convert_matchers(matchers: &[Matcher]) -> Result<Matcher, CompileError> {
    if let Some(glued) = glue_matchers(matchers) {
        return Ok(glued);
    }

    let Some(idx) = find_anchor(matchers) else {
        return Err(CompileError::NoAnchorFound {
            matchers: matchers.to_vec(),
        });
    };
    let (left, rest) = matchers.split_at(idx);
    let Some((Matcher::Primitive(value), right)) = rest.split_first() else {
        return Err(CompileError::NoAnchorFound {
            matchers: matchers.to_vec(),
        });
    };
    log::trace!("split {} matchers at {idx} on {value}", matchers.len());

    Ok(BTree::new(value.clone(), convert_side(left)?, convert_side(right)?).into())
}
