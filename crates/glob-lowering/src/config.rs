//! Compilation settings.

/// Options applied to every wildcard in a compiled pattern.
///
/// Separators are kept in the order given: run fusion compares separator
/// sets textually, so the same characters in another order count as a
/// different set.
///
/// # Examples
/// ```
/// use glob_lowering::CompileOptions;
///
/// let options = CompileOptions::new().with_separators(['/', '.']);
/// assert_eq!(options.separators(), "/.");
/// assert!(CompileOptions::default().separators().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    separators: String,
}

impl CompileOptions {
    /// Options with no separators: `*` behaves like `**`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the separator set.
    #[must_use]
    pub fn with_separators(mut self, separators: impl IntoIterator<Item = char>) -> Self {
        self.separators = separators.into_iter().collect();
        self
    }

    /// Characters `*` and `?` may not consume.
    #[must_use]
    pub fn separators(&self) -> &str {
        &self.separators
    }
}
