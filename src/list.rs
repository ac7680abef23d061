use std::collections::VecDeque;

use docket_parser::Cursor;

use crate::descriptor::{Descriptor, Insertion, Placement};
use crate::errors::{ArgError, ParseError, SpecError};

/**
An ordered list of borrowed descriptors, and the driver for a single parse
pass over them.

The list doesn't own its descriptors; it mutably borrows them for as long as
it lives, and the caller reads their values back once the list is gone. The
order of the list is the order descriptors are offered tokens in, and it's
decided entirely by [`Placement::insertion`]: labeled descriptors are
inserted at the front and positional descriptors at the back.

```
use docket::{DescriptorList, UnlabeledValueArg, ValueArg};

let mut count = ValueArg::new("count", "how many", 1, "int").allowed([1, 2, 3]);
let mut file = UnlabeledValueArg::new("file", "input file", String::new(), "file");

let mut list = DescriptorList::new();
list.register(&mut count).unwrap();
list.register(&mut file).unwrap();
list.parse(&["--count", "2", "input.txt"]).unwrap();

assert_eq!(*count.value(), 2);
assert_eq!(file.value(), "input.txt");
```
*/
#[derive(Default)]
pub struct DescriptorList<'d> {
    entries: VecDeque<&'d mut dyn Descriptor>,
}

impl<'d> DescriptorList<'d> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /**
    Add a descriptor to the list, at the front if it's labeled or at the back
    if it's positional.

    Fails if the descriptor's flag or name is malformed, or if it has the same
    identity as a descriptor that's already registered (as judged by the *new*
    descriptor's [`same_identity`][Descriptor::same_identity]).
    */
    pub fn register(&mut self, descriptor: &'d mut dyn Descriptor) -> Result<(), SpecError> {
        validate(&*descriptor)?;

        if self
            .entries
            .iter()
            .any(|existing| descriptor.same_identity(&**existing))
        {
            return Err(SpecError::Duplicate {
                argument: descriptor.label(),
            });
        }

        let insertion = descriptor.placement().insertion();
        log::debug!("registering {} at the {insertion:?}", descriptor.label());

        match insertion {
            Insertion::Front => self.entries.push_front(descriptor),
            Insertion::Back => self.entries.push_back(descriptor),
        }

        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The descriptors in the order they're offered tokens
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Descriptor + 'd)> + '_ {
        self.entries.iter().map(|descriptor| &**descriptor)
    }

    /// Just the positional descriptors, in registration order
    pub fn positionals(&self) -> impl Iterator<Item = &(dyn Descriptor + 'd)> + '_ {
        self.iter()
            .filter(|descriptor| descriptor.placement() == Placement::Positional)
    }

    /**
    Run one parse pass over `tokens`, which should exclude the program name.

    The first bare `--` is dropped and marks the rest of the tokens as
    following a terminator (see [`Descriptor::is_ignoreable`]). Every other
    token is offered to each descriptor in list order until one accepts it.
    The pass stops at the first error: a descriptor failing to accept a token
    it matched, or a token nobody accepts. Once the tokens are exhausted, any
    required descriptor that's still unset is reported.
    */
    pub fn parse<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), ParseError> {
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let mut cursor = Cursor::new(&tokens);

        while let Some(token) = cursor.current() {
            if token == "--" && !cursor.is_terminated() {
                log::debug!("terminator at token {}", cursor.index());
                cursor.terminate();
                cursor.advance();
                continue;
            }

            if !self.offer(&mut cursor)? {
                return Err(self.rejection(token));
            }

            cursor.advance();
        }

        self.check_required()
    }

    /// Offer the token under the cursor to each descriptor in turn
    fn offer(&mut self, cursor: &mut Cursor<'_>) -> Result<bool, ArgError> {
        for descriptor in self.entries.iter_mut() {
            if descriptor.consume(cursor)? {
                log::debug!("{} accepted token {}", descriptor.label(), cursor.index());
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Explain why nobody accepted `token`
    fn rejection(&self, token: &str) -> ParseError {
        let repeated = self.iter().find(|descriptor| {
            descriptor.placement() == Placement::Labeled
                && descriptor.is_set()
                && descriptor.matches(token)
        });

        match repeated {
            Some(descriptor) => ParseError::AlreadySet {
                argument: descriptor.label(),
                token: token.to_owned(),
            },
            None => ParseError::Unrecognized {
                token: token.to_owned(),
            },
        }
    }

    fn check_required(&self) -> Result<(), ParseError> {
        let missing: Vec<String> = self
            .iter()
            .filter(|descriptor| descriptor.is_required() && !descriptor.is_set())
            .map(|descriptor| descriptor.label())
            .collect();

        match missing.is_empty() {
            true => Ok(()),
            false => {
                log::debug!("missing required arguments: {missing:?}");
                Err(ParseError::MissingRequired { arguments: missing })
            }
        }
    }
}

fn validate(descriptor: &dyn Descriptor) -> Result<(), SpecError> {
    let identity = descriptor.identity();

    if let Some(flag) = identity.flag() {
        if flag == '-' || flag == '=' || flag.is_whitespace() || flag.is_control() {
            return Err(SpecError::InvalidFlag {
                argument: descriptor.label(),
                flag,
            });
        }
    }

    let name = identity.name();

    if (name.is_empty() && descriptor.placement() == Placement::Labeled)
        || name.starts_with('-')
        || name.contains(|c: char| c.is_whitespace() || c == '=')
    {
        return Err(SpecError::InvalidName {
            name: name.to_owned(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UnlabeledValueArg, ValueArg};

    #[test]
    fn labeled_prepend_positional_append() {
        let mut a = ValueArg::new("alpha", "a", 0, "int");
        let mut p1 = UnlabeledValueArg::new("first", "1", String::new(), "s");
        let mut b = ValueArg::new("beta", "b", 0, "int");
        let mut p2 = UnlabeledValueArg::new("second", "2", String::new(), "s");

        let mut list = DescriptorList::new();
        list.register(&mut a).unwrap();
        list.register(&mut p1).unwrap();
        list.register(&mut b).unwrap();
        list.register(&mut p2).unwrap();

        let order: Vec<String> = list.iter().map(|d| d.label()).collect();
        assert_eq!(order, ["--beta", "--alpha", "first", "second"]);

        let positionals: Vec<String> = list.positionals().map(|d| d.label()).collect();
        assert_eq!(positionals, ["first", "second"]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn duplicates_rejected() {
        let mut a = ValueArg::new("count", "a", 0, "int").flag('c');
        let mut b = ValueArg::new("cycles", "b", 0, "int").flag('c');
        let mut p = UnlabeledValueArg::new("file", "input", String::new(), "s");
        let mut q = UnlabeledValueArg::new("other", "input", String::new(), "s");

        let mut list = DescriptorList::new();
        list.register(&mut a).unwrap();
        assert_eq!(
            list.register(&mut b),
            Err(SpecError::Duplicate {
                argument: "--cycles".to_owned()
            })
        );
        list.register(&mut p).unwrap();
        assert!(matches!(
            list.register(&mut q),
            Err(SpecError::Duplicate { .. })
        ));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn invalid_specs() {
        let mut list = DescriptorList::new();

        let mut dash = ValueArg::new("count", "a", 0, "int").flag('-');
        assert!(matches!(
            list.register(&mut dash),
            Err(SpecError::InvalidFlag { flag: '-', .. })
        ));

        let mut unnamed = ValueArg::new("", "a", 0, "int").flag('x');
        assert!(matches!(
            list.register(&mut unnamed),
            Err(SpecError::InvalidName { .. })
        ));

        let mut spaced = UnlabeledValueArg::new("two words", "a", 0, "int");
        assert!(matches!(
            list.register(&mut spaced),
            Err(SpecError::InvalidName { .. })
        ));

        let mut dashed = ValueArg::new("--count", "a", 0, "int");
        assert!(matches!(
            list.register(&mut dashed),
            Err(SpecError::InvalidName { .. })
        ));

        assert!(list.is_empty());
    }

    #[test]
    fn terminator_is_dropped_once() {
        let mut a = UnlabeledValueArg::new("a", "a", String::new(), "s");
        let mut b = UnlabeledValueArg::new("b", "b", String::new(), "s");

        let mut list = DescriptorList::new();
        list.register(&mut a).unwrap();
        list.register(&mut b).unwrap();
        list.parse(&["--", "--"]).unwrap_err();

        let mut a = UnlabeledValueArg::new("a", "a", String::new(), "s");
        let mut b = UnlabeledValueArg::new("b", "b", String::new(), "s");

        let mut list = DescriptorList::new();
        list.register(&mut a).unwrap();
        list.register(&mut b).unwrap();
        list.parse(&["--", "--", "-x"]).unwrap();

        assert_eq!(a.value(), "--");
        assert_eq!(b.value(), "-x");
    }

    #[test]
    fn ignoreable_labeled_skipped_after_terminator() {
        let mut level = ValueArg::new("level", "l", 0, "int").ignoreable();
        let mut rest = UnlabeledValueArg::new("rest", "r", String::new(), "s");

        let mut list = DescriptorList::new();
        list.register(&mut level).unwrap();
        list.register(&mut rest).unwrap();

        assert_eq!(
            list.parse(&["--", "--level", "3"]),
            Err(ParseError::Unrecognized {
                token: "3".to_owned()
            })
        );
        drop(list);

        assert!(!level.is_set());
        assert_eq!(rest.value(), "--level");
    }

    #[test]
    fn unrecognized_and_repeated() {
        let mut count = ValueArg::new("count", "c", 0, "int").flag('c');

        let mut list = DescriptorList::new();
        list.register(&mut count).unwrap();
        assert_eq!(
            list.parse(&["--bogus"]),
            Err(ParseError::Unrecognized {
                token: "--bogus".to_owned()
            })
        );

        let mut count = ValueArg::new("count", "c", 0, "int").flag('c');

        let mut list = DescriptorList::new();
        list.register(&mut count).unwrap();
        assert_eq!(
            list.parse(&["-c", "1", "--count=2"]),
            Err(ParseError::AlreadySet {
                argument: "--count".to_owned(),
                token: "--count=2".to_owned()
            })
        );
        drop(list);

        assert_eq!(*count.value(), 1);
    }

    #[test]
    fn missing_required_lists_everything() {
        let mut count = ValueArg::new("count", "c", 0, "int").required();
        let mut verbose = ValueArg::new("level", "v", 0, "int");
        let mut file = UnlabeledValueArg::new("file", "f", String::new(), "s");

        let mut list = DescriptorList::new();
        list.register(&mut count).unwrap();
        list.register(&mut verbose).unwrap();
        list.register(&mut file).unwrap();

        assert_eq!(
            list.parse::<&str>(&[]),
            Err(ParseError::MissingRequired {
                arguments: vec!["--count".to_owned(), "file".to_owned()]
            })
        );
    }
}
