use core::fmt::{self, Display};

use docket_parser::{Cursor, Token};

use crate::binding::Binding;
use crate::constraint::Allowed;
use crate::descriptor::{Descriptor, Identity, Placement, Visitor, sealed};
use crate::errors::ArgError;
use crate::value::{Extractor, Value};

/**
A positional argument that takes a single value.

Positional arguments have no flag. They don't look at the token to decide
whether it's theirs: each one takes the first free token offered to it after
the labeled arguments have passed on it, in the order the positionals were
registered. They are always required.

Each positional consumes exactly one token, and only once; the one exception
to "any token will do" is a token like `--name=value` or `-n=value`, which is
left alone so that a mistyped labeled argument doesn't get swallowed as a
positional value.

```
use docket::{DescriptorList, UnlabeledValueArg};

let mut source = UnlabeledValueArg::new("source", "copy from", String::new(), "path");
let mut dest = UnlabeledValueArg::new("dest", "copy to", String::new(), "path");

let mut list = DescriptorList::new();
list.register(&mut source).unwrap();
list.register(&mut dest).unwrap();
list.parse(&["a.txt", "b.txt"]).unwrap();

assert_eq!(source.value(), "a.txt");
assert_eq!(dest.value(), "b.txt");
```
*/
pub struct UnlabeledValueArg<T> {
    identity: Identity,
    ignoreable: bool,
    type_description: String,
    binding: Binding<T>,
}

impl<T: Value> UnlabeledValueArg<T> {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        default: T,
        type_description: impl Into<String>,
    ) -> Self {
        Self::with_extractor(name, description, default, type_description, T::from_token)
    }
}

impl<T> UnlabeledValueArg<T> {
    pub fn with_extractor(
        name: impl Into<String>,
        description: impl Into<String>,
        default: T,
        type_description: impl Into<String>,
        extract: Extractor<T>,
    ) -> Self {
        Self {
            identity: Identity::new(None, name, description),
            ignoreable: false,
            type_description: type_description.into(),
            binding: Binding::new(default, extract),
        }
    }

    /**
    Mark this argument as ignoreable. Positionals are still offered tokens
    after a `--` (that's usually the point of a `--`); the flag is reported
    through [`Descriptor::is_ignoreable`] for the benefit of usage text.
    */
    #[must_use]
    pub fn ignoreable(mut self) -> Self {
        self.ignoreable = true;
        self
    }

    #[must_use]
    pub fn extractor(mut self, extract: Extractor<T>) -> Self {
        self.binding.set_extractor(extract);
        self
    }

    #[must_use]
    pub fn visitor(mut self, visitor: impl Visitor + 'static) -> Self {
        self.binding.set_visitor(Box::new(visitor));
        self
    }

    /// The value given on the command line, or the default if it wasn't
    #[inline]
    #[must_use]
    pub fn value(&self) -> &T {
        self.binding.value()
    }

    #[inline]
    #[must_use]
    pub fn default_value(&self) -> &T {
        self.binding.default_value()
    }

    pub fn into_value(self) -> T {
        self.binding.into_value()
    }

    #[inline]
    #[must_use]
    pub fn allowed_values(&self) -> Option<&[T]> {
        self.binding.allowed().map(Allowed::values)
    }
}

impl<T: Display> UnlabeledValueArg<T> {
    /// Restrict this argument to `values`. The type description becomes the
    /// values joined with `|`.
    #[must_use]
    pub fn allowed(mut self, values: impl IntoIterator<Item = T>) -> Self {
        let allowed = Allowed::new(values);
        self.type_description = allowed.describe().to_owned();
        self.binding.set_allowed(allowed);
        self
    }
}

impl<T> sealed::Sealed for UnlabeledValueArg<T> {}

impl<T: PartialEq> Descriptor for UnlabeledValueArg<T> {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn placement(&self) -> Placement {
        Placement::Positional
    }

    fn label(&self) -> String {
        self.identity.name().to_owned()
    }

    fn type_description(&self) -> &str {
        &self.type_description
    }

    fn is_required(&self) -> bool {
        true
    }

    fn is_ignoreable(&self) -> bool {
        self.ignoreable
    }

    fn is_set(&self) -> bool {
        self.binding.is_set()
    }

    fn matches(&self, _token: &str) -> bool {
        !self.binding.is_set()
    }

    fn consume(&mut self, cursor: &mut Cursor<'_>) -> Result<bool, ArgError> {
        if self.binding.is_set() {
            return Ok(false);
        }

        let Some(token) = cursor.current() else {
            return Ok(false);
        };

        if Token::classify(token).has_inline_value() {
            log::debug!(
                "{}: passing on {token:?}, which looks like an option with a value",
                self.label()
            );
            return Ok(false);
        }

        let label = self.label();
        self.binding.bind(&label, token)
    }

    fn short_id(&self) -> String {
        format!("<{}>", self.type_description)
    }

    fn long_id(&self) -> String {
        format!("<{}>", self.type_description)
    }

    /// Positionals are the same argument if their names match *or* their
    /// descriptions match.
    fn same_identity(&self, other: &dyn Descriptor) -> bool {
        let other = other.identity();

        self.identity.name() == other.name() || self.identity.description() == other.description()
    }
}

impl<T: fmt::Debug> fmt::Debug for UnlabeledValueArg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnlabeledValueArg")
            .field("identity", &self.identity)
            .field("ignoreable", &self.ignoreable)
            .field("type_description", &self.type_description)
            .field("binding", &self.binding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::labeled::ValueArg;

    fn file() -> UnlabeledValueArg<String> {
        UnlabeledValueArg::new("file", "input file", String::new(), "file")
    }

    #[test]
    fn always_required() {
        let arg = file();
        assert!(arg.is_required());
        assert!(!arg.is_set());
        assert_eq!(arg.placement(), Placement::Positional);
    }

    #[test]
    fn takes_whole_token_only() {
        let mut arg = file();
        let tokens = ["input.txt", "next"];
        let mut cursor = Cursor::new(&tokens);

        assert_eq!(arg.consume(&mut cursor), Ok(true));
        assert_eq!(cursor.index(), 0);
        assert_eq!(arg.value(), "input.txt");
    }

    #[test]
    fn at_most_once() {
        let mut arg = file();
        let tokens = ["a", "b", "c"];
        let mut cursor = Cursor::new(&tokens);

        assert_eq!(arg.consume(&mut cursor), Ok(true));
        cursor.advance();
        assert_eq!(arg.consume(&mut cursor), Ok(false));
        cursor.advance();
        assert_eq!(arg.consume(&mut cursor), Ok(false));
        assert_eq!(arg.value(), "a");
        assert!(!arg.matches("anything"));
    }

    #[test]
    fn does_not_inspect_token_form() {
        for token in ["--verbose", "-x", "-", "--", "-5", "a=b", ""] {
            let mut arg = file();
            let tokens = [token];
            let mut cursor = Cursor::new(&tokens);

            assert!(arg.matches(token));
            assert_eq!(arg.consume(&mut cursor), Ok(true), "token {token:?}");
            assert_eq!(arg.value(), token);
        }
    }

    #[test]
    fn passes_on_embedded_option_values() {
        for token in ["--count=2", "-c=2", "--name="] {
            let mut arg = file();
            let tokens = [token];
            let mut cursor = Cursor::new(&tokens);

            assert_eq!(arg.consume(&mut cursor), Ok(false), "token {token:?}");
            assert!(!arg.is_set());
        }
    }

    #[test]
    fn extraction_and_constraint_errors() {
        let mut level = UnlabeledValueArg::new("level", "log level", 0u8, "level");
        let tokens = ["high"];
        let mut cursor = Cursor::new(&tokens);
        assert!(matches!(
            level.consume(&mut cursor),
            Err(ArgError::Extraction { ref argument, .. }) if argument == "level"
        ));

        let mut mode = UnlabeledValueArg::new("mode", "mode", String::new(), "mode")
            .allowed(["a".to_owned(), "b".to_owned()]);
        let tokens = ["c"];
        let mut cursor = Cursor::new(&tokens);
        assert!(matches!(
            mode.consume(&mut cursor),
            Err(ArgError::ConstraintViolation { .. })
        ));
        assert!(!mode.is_set());
    }

    #[test]
    fn ids_use_type_description() {
        let arg = UnlabeledValueArg::new("out", "output", PathBuf::new(), "path");
        assert_eq!(arg.short_id(), "<path>");
        assert_eq!(arg.long_id(), "<path>");

        let mode = UnlabeledValueArg::new("mode", "mode", 1, "int").allowed([1, 2]);
        assert_eq!(mode.short_id(), "<1|2>");
    }

    #[test]
    fn loose_identity() {
        let a = file();
        let same_name = UnlabeledValueArg::new("file", "other", String::new(), "s");
        let same_description = UnlabeledValueArg::new("other", "input file", String::new(), "s");
        let different = UnlabeledValueArg::new("other", "other", String::new(), "s");

        assert!(a.same_identity(&same_name));
        assert!(a.same_identity(&same_description));
        assert!(!a.same_identity(&different));

        // Descriptions are compared against labeled arguments too
        let labeled = ValueArg::new("unrelated", "input file", 0, "int");
        assert!(a.same_identity(&labeled));
    }
}
