//! Lowering of glob syntax trees into optimized matcher trees.

mod glue;
mod optimize;
#[cfg(test)]
pub(crate) mod test_support;
mod tree;

use crate::ast::Node;
use crate::config::CompileOptions;
use crate::errors::CompileError;
use crate::matcher::{Matcher, Primitive};

pub use glue::glue_matchers;
pub use optimize::optimize;
pub use tree::convert_matchers;

/// Lower each child and optimize it on its own.
fn lower_children(children: &[Node], separators: &str) -> Result<Vec<Matcher>, CompileError> {
    children
        .iter()
        .map(|child| lower(child, separators).map(optimize))
        .collect()
}

fn lower(node: &Node, separators: &str) -> Result<Matcher, CompileError> {
    let matcher = match node {
        Node::Pattern(children) => convert_matchers(&lower_children(children, separators)?)?,
        Node::AnyOf(children) => Matcher::AnyOf(lower_children(children, separators)?),
        Node::Text(text) => Primitive::Raw(text.clone()).into(),
        Node::List { chars, not } => Primitive::List {
            chars: chars.clone(),
            not: *not,
        }
        .into(),
        Node::Range { lo, hi, not } => Primitive::Range {
            lo: *lo,
            hi: *hi,
            not: *not,
        }
        .into(),
        Node::Any => Primitive::Any {
            separators: separators.to_owned(),
        }
        .into(),
        Node::Super => Primitive::Super.into(),
        Node::Single => Primitive::Single {
            separators: separators.to_owned(),
        }
        .into(),
        #[expect(unreachable_patterns, reason = "guard future Node variants")]
        _ => return Err(CompileError::UnknownNodeKind),
    };
    Ok(optimize(matcher))
}

/// Compile a glob syntax tree into a matcher tree.
///
/// Wildcards take their separator set from `options`. The result accepts
/// exactly the strings the pattern describes.
///
/// # Errors
/// Returns [`CompileError::NoAnchorFound`] when a concatenation cannot be
/// split (for example two adjacent alternations), and
/// [`CompileError::UnknownNodeKind`] for nodes the compiler cannot lower.
///
/// # Examples
/// ```
/// use glob_lowering::{CompileOptions, Matcher, Node, Primitive, compile};
///
/// let ast = Node::pattern([Node::Super, Node::text("foo"), Node::Super]);
/// let matcher = compile(&ast, &CompileOptions::default()).expect("pattern compiles");
/// assert_eq!(
///     matcher,
///     Matcher::from(Primitive::Contains { needle: "foo".into(), negated: false })
/// );
/// ```
pub fn compile(ast: &Node, options: &CompileOptions) -> Result<Matcher, CompileError> {
    match lower(ast, options.separators()) {
        Ok(matcher) => {
            log::debug!("compiled {} nodes into {matcher}", ast.node_count());
            Ok(matcher)
        }
        Err(err) => {
            log::debug!("failed to compile {} nodes: {err}", ast.node_count());
            Err(err)
        }
    }
}

/// Compile with the given separators and otherwise default options.
///
/// # Errors
/// See [`compile`].
pub fn compile_with_separators(ast: &Node, separators: &[char]) -> Result<Matcher, CompileError> {
    compile(
        ast,
        &CompileOptions::new().with_separators(separators.iter().copied()),
    )
}
