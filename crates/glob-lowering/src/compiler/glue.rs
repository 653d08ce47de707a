//! Fusion of wildcard runs into one aggregate matcher.

use crate::matcher::{Matcher, Primitive};

/// Shape of a fusible run.
#[derive(Debug, Default)]
struct Run<'a> {
    has_super: bool,
    has_any: bool,
    has_single: bool,
    min: usize,
    separators: Option<&'a str>,
}

impl<'a> Run<'a> {
    /// Record one element; `None` when it cannot take part in a fused run.
    fn push(&mut self, matcher: &'a Matcher) -> Option<()> {
        let separators: &'a str = match matcher.as_primitive()? {
            Primitive::Super => {
                self.has_super = true;
                ""
            }
            Primitive::Any { separators } => {
                self.has_any = true;
                separators.as_str()
            }
            Primitive::Single { separators } => {
                self.has_single = true;
                self.min += 1;
                separators.as_str()
            }
            Primitive::List { chars, not: true } => {
                self.has_single = true;
                self.min += 1;
                chars.as_str()
            }
            _ => return None,
        };
        match self.separators {
            None => self.separators = Some(separators),
            Some(seen) if seen != separators => return None,
            Some(_) => {}
        }
        Some(())
    }

    fn into_matcher(self) -> Matcher {
        let separators = self.separators.unwrap_or_default();
        let unbounded = self.has_super || self.has_any;

        if self.has_super && !self.has_any && !self.has_single {
            return Primitive::Super.into();
        }
        if self.has_any && !self.has_super && !self.has_single {
            return Primitive::Any {
                separators: separators.to_owned(),
            }
            .into();
        }
        if unbounded && self.min > 0 && separators.is_empty() {
            return Primitive::Min(self.min).into();
        }

        let mut every = Vec::new();
        if self.min > 0 {
            every.push(Primitive::Min(self.min).into());
            if !unbounded {
                every.push(Primitive::Max(self.min).into());
            }
        }
        if !separators.is_empty() {
            every.push(
                Primitive::Contains {
                    needle: separators.to_owned(),
                    negated: true,
                }
                .into(),
            );
        }
        Matcher::Every(every)
    }
}

/// Fuse a run of sibling wildcards into a single matcher.
///
/// Returns `None` when the run is empty, contains anything other than
/// `Super`, `Any`, `Single` or a negated `List`, or mixes separator sets. A
/// single-element run is returned as is, whatever its kind.
///
/// # Examples
/// ```
/// use glob_lowering::{Matcher, Primitive, glue_matchers};
///
/// let single: Matcher = Primitive::Single { separators: String::new() }.into();
/// let glued = glue_matchers(&[single.clone(), Primitive::Super.into(), single]);
/// assert_eq!(glued, Some(Primitive::Min(2).into()));
/// ```
#[must_use]
pub fn glue_matchers(matchers: &[Matcher]) -> Option<Matcher> {
    match matchers {
        [] => return None,
        [only] => return Some(only.clone()),
        _ => {}
    }

    let mut run = Run::default();
    for matcher in matchers {
        run.push(matcher)?;
    }
    let glued = run.into_matcher();
    log::trace!("glued {} matchers into {glued}", matchers.len());
    Some(glued)
}
