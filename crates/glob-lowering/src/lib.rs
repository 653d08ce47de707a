//! Lowering and optimization of parsed glob patterns.
//!
//! The crate turns a glob syntax tree into a tree of matcher primitives and
//! rewrites common shapes (`foo*`, `*foo`, `*foo*`, runs of `?`) into direct
//! prefix, suffix, containment and length checks. Parsing pattern text and
//! evaluating the resulting matchers are left to the caller.

mod ast;
mod compiler;
mod config;
mod errors;
mod matcher;

pub use ast::Node;
pub use compiler::{compile, compile_with_separators, convert_matchers, glue_matchers, optimize};
pub use config::CompileOptions;
pub use errors::CompileError;
pub use matcher::{BTree, Matcher, Primitive};
