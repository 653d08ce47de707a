//! Parsed glob syntax tree consumed by the compiler.
//!
//! The tree is produced by an external parser. Wildcard leaves do not carry
//! their separator set; the compiler supplies it from
//! [`CompileOptions`](crate::CompileOptions).

/// One syntactic element of a glob pattern.
///
/// # Examples
/// ```
/// use glob_lowering::Node;
///
/// // `foo*`
/// let ast = Node::pattern([Node::text("foo"), Node::Any]);
/// assert_eq!(ast.node_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Node {
    /// Children matched one after another.
    Pattern(Vec<Self>),
    /// Children tried as alternatives (`{a,b}`).
    AnyOf(Vec<Self>),
    /// Literal text. Never empty.
    Text(String),
    /// Character class (`[abc]`, `[!abc]`).
    List {
        /// Characters of the class.
        chars: String,
        /// Whether the class is negated.
        not: bool,
    },
    /// Character range (`[a-z]`, `[!a-z]`).
    Range {
        /// Inclusive lower bound.
        lo: char,
        /// Inclusive upper bound.
        hi: char,
        /// Whether the range is negated.
        not: bool,
    },
    /// `*`: any run of characters outside the separator set.
    Any,
    /// `**`: any run of characters at all.
    Super,
    /// `?`: one character outside the separator set.
    Single,
}

impl Node {
    /// Build a concatenation node.
    #[must_use]
    pub fn pattern(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Pattern(children.into_iter().collect())
    }

    /// Build an alternation node.
    #[must_use]
    pub fn any_of(children: impl IntoIterator<Item = Self>) -> Self {
        Self::AnyOf(children.into_iter().collect())
    }

    /// Build a literal leaf.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Build a character-class leaf.
    #[must_use]
    pub fn list(chars: impl Into<String>, not: bool) -> Self {
        Self::List {
            chars: chars.into(),
            not,
        }
    }

    /// Build a character-range leaf.
    #[must_use]
    pub const fn range(lo: char, hi: char, not: bool) -> Self {
        Self::Range { lo, hi, not }
    }

    /// Child nodes of a `Pattern` or `AnyOf`; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Pattern(children) | Self::AnyOf(children) => children,
            _ => &[],
        }
    }

    /// Number of nodes in the tree rooted here, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }
}
