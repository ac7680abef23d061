/*!
The abstract argument contract.

A [`Descriptor`] is one declared command line argument. The driver offers
each token to descriptors in list order through [`Descriptor::consume`]; the
first one that accepts it wins. The set of descriptor kinds is closed: a
[`ValueArg`][crate::ValueArg] for `--name value` style arguments and an
[`UnlabeledValueArg`][crate::UnlabeledValueArg] for positional ones.
*/

use docket_parser::Cursor;

use crate::errors::ArgError;

/// Who an argument is: its optional one-character flag, its name, and its
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    flag: Option<char>,
    name: String,
    description: String,
}

impl Identity {
    pub fn new(flag: Option<char>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            flag,
            name: name.into(),
            description: description.into(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn flag(&self) -> Option<char> {
        self.flag
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn set_flag(&mut self, flag: char) {
        self.flag = Some(flag);
    }
}

/// Whether a descriptor is matched by its flag/name or by its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    Labeled,
    Positional,
}

/// Where [`DescriptorList::register`][crate::DescriptorList::register] puts a
/// new descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Front,
    Back,
}

impl Placement {
    /**
    The registration policy. Labeled descriptors go to the front, so that the
    most recently registered one is tried first; positional descriptors go to
    the back, so that they bind to free tokens in the order they were
    declared. Together these keep every positional after every labeled
    descriptor.
    */
    #[inline]
    #[must_use]
    pub const fn insertion(self) -> Insertion {
        match self {
            Placement::Labeled => Insertion::Front,
            Placement::Positional => Insertion::Back,
        }
    }
}

/**
A hook that runs every time a descriptor successfully consumes a token (which,
for the value arguments in this crate, is at most once per pass). It never
runs when a token is rejected or fails to parse.

Any `FnMut()` closure is a visitor.
*/
pub trait Visitor {
    fn visit(&mut self);
}

impl<F: FnMut()> Visitor for F {
    #[inline]
    fn visit(&mut self) {
        self()
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/**
The capability set shared by every kind of argument.

Read accessors describe the argument; [`matches`][Descriptor::matches] and
[`consume`][Descriptor::consume] drive parsing; [`short_id`][Descriptor::short_id]
and [`long_id`][Descriptor::long_id] feed usage text; and
[`same_identity`][Descriptor::same_identity] drives duplicate detection at
registration.
*/
pub trait Descriptor: sealed::Sealed {
    fn identity(&self) -> &Identity;

    fn placement(&self) -> Placement;

    /// How errors refer to this argument: `--name` for labeled arguments, the
    /// bare name for positional ones.
    fn label(&self) -> String;

    /// The human-readable type tag used in usage text, like `int` or `1|2|3`
    fn type_description(&self) -> &str;

    fn is_required(&self) -> bool;

    /// If true, this argument stops matching once a `--` has been seen
    fn is_ignoreable(&self) -> bool;

    /// True once this argument has consumed a token
    fn is_set(&self) -> bool;

    /**
    True if this descriptor would claim `token`, judged only on its form and
    this descriptor's eligibility. For labeled arguments this is the flag/name
    match, regardless of whether the argument was already given; for
    positional arguments, which never inspect the token, it's just "not yet
    set".
    */
    fn matches(&self, token: &str) -> bool;

    /**
    Try to consume the token under the cursor.

    Returns `Ok(false)` if the token isn't for this descriptor, without
    touching the cursor or any state. Returns `Ok(true)` after extracting and
    storing a value; the cursor is left on the last token this descriptor
    used (the value token, for `--name value`), and the driver moves past it.
    Returns an error if the token matched this descriptor's syntax but its
    value was missing, failed to parse, or isn't allowed.
    */
    fn consume(&mut self, cursor: &mut Cursor<'_>) -> Result<bool, ArgError>;

    /// A short rendering for usage lines, like `-c <int>` or `<file>`
    fn short_id(&self) -> String;

    /// A long rendering for the argument list, like `-c <int>,  --count <int>`
    fn long_id(&self) -> String;

    /// True if `other` should be considered the same argument as `self` when
    /// registering.
    fn same_identity(&self, other: &dyn Descriptor) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_policy() {
        assert_eq!(Placement::Labeled.insertion(), Insertion::Front);
        assert_eq!(Placement::Positional.insertion(), Insertion::Back);
    }

    #[test]
    fn closures_are_visitors() {
        let mut count = 0;
        {
            let mut visitor = || count += 1;
            visitor.visit();
            visitor.visit();
        }
        assert_eq!(count, 2);
    }
}
