//! Error types surfaced by the compiler.

use thiserror::Error;

use crate::matcher::{DisplayList, Matcher};

/// Errors that abort a compilation.
///
/// # Examples
/// ```
/// use glob_lowering::CompileError;
/// let err = CompileError::UnknownNodeKind;
/// assert_eq!(err.to_string(), "could not compile tree: unknown node type");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A matcher sequence held nothing the tree builder could split on.
    #[error("could not convert matchers {}: need at least one primitive", DisplayList(.matchers))]
    NoAnchorFound {
        /// The sequence that could not be converted.
        matchers: Vec<Matcher>,
    },
    /// The tree contained a node the compiler does not know how to lower.
    #[error("could not compile tree: unknown node type")]
    UnknownNodeKind,
}
