use core::fmt::{self, Display};

use docket_parser::{Cursor, Token};
use lazy_format::lazy_format;

use crate::binding::Binding;
use crate::constraint::Allowed;
use crate::descriptor::{Descriptor, Identity, Placement, Visitor, sealed};
use crate::errors::ArgError;
use crate::value::{Extractor, Value};

/**
A labeled argument that takes a value: `--count 2`, `--count=2`, `-c 2`, or
`-c=2`.

Labeled arguments are optional unless made [`required`][ValueArg::required];
an optional argument that never appears reads back as its default value.

```
use docket::{DescriptorList, ValueArg};

let mut count = ValueArg::new("count", "how many times", 1u32, "int").flag('c');

let mut list = DescriptorList::new();
list.register(&mut count).unwrap();
list.parse(&["-c", "3"]).unwrap();

assert_eq!(*count.value(), 3);
```
*/
pub struct ValueArg<T> {
    identity: Identity,
    required: bool,
    ignoreable: bool,
    type_description: String,
    binding: Binding<T>,
}

impl<T: Value> ValueArg<T> {
    /// Create an optional argument matched by `--name`, which extracts its
    /// value with `T`'s [`Value`] implementation.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        default: T,
        type_description: impl Into<String>,
    ) -> Self {
        Self::with_extractor(name, description, default, type_description, T::from_token)
    }
}

impl<T> ValueArg<T> {
    /// Create an optional argument matched by `--name`, which extracts its
    /// value with `extract`.
    pub fn with_extractor(
        name: impl Into<String>,
        description: impl Into<String>,
        default: T,
        type_description: impl Into<String>,
        extract: Extractor<T>,
    ) -> Self {
        Self {
            identity: Identity::new(None, name, description),
            required: false,
            ignoreable: false,
            type_description: type_description.into(),
            binding: Binding::new(default, extract),
        }
    }

    /// Also match this argument with `-flag`
    #[must_use]
    pub fn flag(mut self, flag: char) -> Self {
        self.identity.set_flag(flag);
        self
    }

    /// Make this argument required, so that a parse pass fails without it
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Stop matching this argument once a `--` has been seen
    #[must_use]
    pub fn ignoreable(mut self) -> Self {
        self.ignoreable = true;
        self
    }

    /// Replace the value extractor
    #[must_use]
    pub fn extractor(mut self, extract: Extractor<T>) -> Self {
        self.binding.set_extractor(extract);
        self
    }

    /// Run `visitor` when this argument consumes its value
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

    fn matches_token(&self, token: &Token<'_>) -> bool {
        match *token {
            Token::Long { name, .. } => name == self.identity.name(),
            Token::Short { flag, .. } => Some(flag) == self.identity.flag(),
            _ => false,
        }
    }
}

impl<T: Display> ValueArg<T> {
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

impl<T> sealed::Sealed for ValueArg<T> {}

impl<T: PartialEq> Descriptor for ValueArg<T> {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn placement(&self) -> Placement {
        Placement::Labeled
    }

    fn label(&self) -> String {
        format!("--{}", self.identity.name())
    }

    fn type_description(&self) -> &str {
        &self.type_description
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn is_ignoreable(&self) -> bool {
        self.ignoreable
    }

    fn is_set(&self) -> bool {
        self.binding.is_set()
    }

    fn matches(&self, token: &str) -> bool {
        self.matches_token(&Token::classify(token))
    }

    fn consume(&mut self, cursor: &mut Cursor<'_>) -> Result<bool, ArgError> {
        let Some(token) = cursor.current() else {
            return Ok(false);
        };

        if self.ignoreable && cursor.is_terminated() {
            return Ok(false);
        }

        let parsed = Token::classify(token);

        if !self.matches_token(&parsed) {
            return Ok(false);
        }

        if self.binding.is_set() {
            log::debug!("{}: already set, passing on {token:?}", self.label());
            return Ok(false);
        }

        let value = match parsed.inline_value() {
            Some(value) => value,
            None => cursor.take_value().ok_or_else(|| ArgError::MissingValue {
                argument: self.label(),
            })?,
        };

        let label = self.label();
        self.binding.bind(&label, value)
    }

    fn short_id(&self) -> String {
        let ty = self.type_description.as_str();
        let name = self.identity.name();
        let tag = lazy_format!(match (self.identity.flag()) {
            Some(flag) => "-{flag} <{ty}>",
            None => "--{name} <{ty}>",
        });

        match self.required {
            true => tag.to_string(),
            false => format!("[{tag}]"),
        }
    }

    fn long_id(&self) -> String {
        let ty = self.type_description.as_str();
        let name = self.identity.name();

        lazy_format!(match (self.identity.flag()) {
            Some(flag) => "-{flag} <{ty}>,  --{name} <{ty}>",
            None => "--{name} <{ty}>",
        })
        .to_string()
    }

    fn same_identity(&self, other: &dyn Descriptor) -> bool {
        let other = other.identity();

        (self.identity.flag().is_some() && self.identity.flag() == other.flag())
            || self.identity.name() == other.name()
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueArg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueArg")
            .field("identity", &self.identity)
            .field("required", &self.required)
            .field("ignoreable", &self.ignoreable)
            .field("type_description", &self.type_description)
            .field("binding", &self.binding)
            .finish()
    }
}
