/*!
Allowed-value sets for value arguments.
*/

use core::fmt::Display;

use joinery::JoinableIterator;

/**
An ordered set of the only values an argument may take.

The set remembers its own rendering (`a|b|c`, in declared order) at
construction time; arguments built with an allowed set use that rendering as
their type description, so that usage text lists the legal values.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Allowed<T> {
    values: Vec<T>,
    rendered: String,
}

impl<T: Display> Allowed<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = values.into_iter().collect();
        let rendered = values.iter().join_with('|').to_string();

        Self { values, rendered }
    }
}

impl<T> Allowed<T> {
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values joined with `|`, like `1|2|3`
    #[inline]
    #[must_use]
    pub fn describe(&self) -> &str {
        &self.rendered
    }
}

impl<T: PartialEq> Allowed<T> {
    /// True if `value` is a member of this set. An empty set allows
    /// everything.
    #[must_use]
    pub fn permits(&self, value: &T) -> bool {
        self.values.is_empty() || self.values.contains(value)
    }
}

/// Check an extracted value against an optional allowed set. An absent or
/// empty set always passes; otherwise the value must equal some member.
#[must_use]
pub fn check<T: PartialEq>(value: &T, allowed: Option<&Allowed<T>>) -> bool {
    allowed.is_none_or(|allowed| allowed.permits(value))
}
