use core::fmt;

use crate::constraint::{self, Allowed};
use crate::descriptor::Visitor;
use crate::errors::ArgError;
use crate::state::Slot;
use crate::value::Extractor;

/// The value half of a value argument: how to extract a `T`, what values are
/// allowed, what was given, and who to tell about it. Both kinds of value
/// argument delegate to this.
pub(crate) struct Binding<T> {
    default: T,
    slot: Slot<T>,
    extract: Extractor<T>,
    allowed: Option<Allowed<T>>,
    visitor: Option<Box<dyn Visitor>>,
}

impl<T> Binding<T> {
    pub fn new(default: T, extract: Extractor<T>) -> Self {
        Self {
            default,
            slot: Slot::Unset,
            extract,
            allowed: None,
            visitor: None,
        }
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.slot.is_set()
    }

    #[inline]
    pub fn value(&self) -> &T {
        self.slot.get().unwrap_or(&self.default)
    }

    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn into_value(self) -> T {
        self.slot.into_inner().unwrap_or(self.default)
    }

    pub fn allowed(&self) -> Option<&Allowed<T>> {
        self.allowed.as_ref()
    }

    pub fn set_allowed(&mut self, allowed: Allowed<T>) {
        self.allowed = Some(allowed);
    }

    pub fn set_extractor(&mut self, extract: Extractor<T>) {
        self.extract = extract;
    }

    pub fn set_visitor(&mut self, visitor: Box<dyn Visitor>) {
        self.visitor = Some(visitor);
    }
}

impl<T: PartialEq> Binding<T> {
    /**
    Extract `token`, check it against the allowed set, and store it. Returns
    `Ok(false)` without extracting anything if a value was already stored.
    The visitor runs only after the value is stored.
    */
    pub fn bind(&mut self, argument: &str, token: &str) -> Result<bool, ArgError> {
        if self.slot.is_set() {
            return Ok(false);
        }

        let value = (self.extract)(token).map_err(|source| ArgError::Extraction {
            argument: argument.to_owned(),
            source,
        })?;

        if !constraint::check(&value, self.allowed.as_ref()) {
            return Err(ArgError::ConstraintViolation {
                argument: argument.to_owned(),
                token: token.to_owned(),
                allowed: self
                    .allowed
                    .as_ref()
                    .map(|allowed| allowed.describe().to_owned())
                    .unwrap_or_default(),
            });
        }

        if self.slot.fill(value).is_err() {
            return Ok(false);
        }

        log::trace!("{argument}: bound {token:?}");

        if let Some(visitor) = self.visitor.as_mut() {
            visitor.visit();
        }

        Ok(true)
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("default", &self.default)
            .field("slot", &self.slot)
            .field("allowed", &self.allowed)
            .field("visitor", &self.visitor.is_some())
            .finish_non_exhaustive()
    }
}
