//! Matcher algebra produced by the compiler.
//!
//! These types only describe matchers. Evaluating them against input strings
//! belongs to the runtime that consumes the compiled tree.

use std::fmt;

/// A matcher that covers one contiguous span and can anchor a [`BTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    /// The exact literal.
    Raw(String),
    /// Exactly one character outside `separators`.
    Single {
        /// Characters the wildcard may not consume.
        separators: String,
    },
    /// Any run of characters outside `separators`.
    Any {
        /// Characters the wildcard may not consume.
        separators: String,
    },
    /// Any run of characters.
    Super,
    /// One character that is (or, when `not`, is not) in `chars`.
    List {
        /// Characters of the class.
        chars: String,
        /// Whether the class is negated.
        not: bool,
    },
    /// One character inside (or, when `not`, outside) `lo..=hi`.
    Range {
        /// Inclusive lower bound.
        lo: char,
        /// Inclusive upper bound.
        hi: char,
        /// Whether the range is negated.
        not: bool,
    },
    /// Input starts with the literal.
    Prefix(String),
    /// Input ends with the literal.
    Suffix(String),
    /// Input contains `needle`.
    ///
    /// When `negated`, the input must contain none of the characters of
    /// `needle`; the run fuser uses this form as a separator guard.
    Contains {
        /// Literal searched for, or the guarded separator set.
        needle: String,
        /// Inverts the test.
        negated: bool,
    },
    /// At least this many characters.
    Min(usize),
    /// At most this many characters.
    Max(usize),
}

impl Primitive {
    /// Whether this is a [`Primitive::Raw`] literal.
    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

/// Split node: the input is `left`, then a span matched by `value`, then
/// `right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BTree {
    /// Span the input is split around.
    pub value: Primitive,
    /// Matcher for the input before `value`; `None` requires it to be empty.
    pub left: Option<Box<Matcher>>,
    /// Matcher for the input after `value`; `None` requires it to be empty.
    pub right: Option<Box<Matcher>>,
}

impl BTree {
    /// Build a split node.
    #[must_use]
    pub fn new(value: Primitive, left: Option<Matcher>, right: Option<Matcher>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
}

/// A compiled matching rule.
///
/// # Examples
/// ```
/// use glob_lowering::{Matcher, Primitive};
///
/// let m = Matcher::every([Primitive::Min(2).into(), Primitive::Max(2).into()]);
/// assert_eq!(m.to_string(), "<every:[<min:2>,<max:2>]>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// A single-span matcher.
    Primitive(Primitive),
    /// All children match.
    Every(Vec<Self>),
    /// At least one child matches.
    AnyOf(Vec<Self>),
    /// The input splits around an occurrence of a primitive.
    BTree(BTree),
}

impl Matcher {
    /// Build an AND-combinator.
    #[must_use]
    pub fn every(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Every(children.into_iter().collect())
    }

    /// Build an OR-combinator.
    #[must_use]
    pub fn any_of(children: impl IntoIterator<Item = Self>) -> Self {
        Self::AnyOf(children.into_iter().collect())
    }

    /// The wrapped primitive, if this matcher is one.
    #[must_use]
    pub const fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Self::Primitive(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Primitive> for Matcher {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<BTree> for Matcher {
    fn from(tree: BTree) -> Self {
        Self::BTree(tree)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(s) => write!(f, "<raw:{s}>"),
            Self::Single { separators } => write!(f, "<single:![{separators}]>"),
            Self::Any { separators } => write!(f, "<any:![{separators}]>"),
            Self::Super => f.write_str("<super>"),
            Self::List { chars, not } => {
                write!(f, "<list:{}[{chars}]>", if *not { "!" } else { "" })
            }
            Self::Range { lo, hi, not } => {
                write!(f, "<range:{}[{lo},{hi}]>", if *not { "!" } else { "" })
            }
            Self::Prefix(s) => write!(f, "<prefix:{s}>"),
            Self::Suffix(s) => write!(f, "<suffix:{s}>"),
            Self::Contains { needle, negated } => {
                write!(f, "<contains:{}[{needle}]>", if *negated { "!" } else { "" })
            }
            Self::Min(n) => write!(f, "<min:{n}>"),
            Self::Max(n) => write!(f, "<max:{n}>"),
        }
    }
}

/// Writes `[a,b,c]`.
pub(crate) struct DisplayList<'a>(pub(crate) &'a [Matcher]);

impl fmt::Display for DisplayList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{m}")?;
        }
        f.write_str("]")
    }
}

fn fmt_side(side: Option<&Matcher>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match side {
        Some(m) => write!(f, "{m}"),
        None => f.write_str("nil"),
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Every(children) => write!(f, "<every:{}>", DisplayList(children)),
            Self::AnyOf(children) => write!(f, "<any_of:{}>", DisplayList(children)),
            Self::BTree(tree) => {
                f.write_str("<btree:[")?;
                fmt_side(tree.left.as_deref(), f)?;
                write!(f, "<-{}->", tree.value)?;
                fmt_side(tree.right.as_deref(), f)?;
                f.write_str("]>")
            }
        }
    }
}
