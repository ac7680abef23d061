/*!
Value extraction: turning a single raw token into a typed value.

Most types get this for free. Any type with a [`FromStr`] implementation can
opt in with an empty [`ParsedValue`] impl, which gives it a [`Value`]
implementation that parses the whole token. Types that need something more
unusual can implement [`Value`] directly, or a single argument can be given
its own [`Extractor`].
*/

use core::{fmt::Display, str::FromStr};

/// A token couldn't be converted into a value of the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse {token:?}: {message}")]
pub struct ExtractError {
    /// The literal token that failed to parse
    pub token: String,

    /// Why it failed, usually the `Display` of the type's parse error
    pub message: String,
}

impl ExtractError {
    pub fn new(token: &str, message: impl Display) -> Self {
        Self {
            token: token.to_owned(),
            message: message.to_string(),
        }
    }
}

/**
A type that can be extracted from exactly one command line token.

Extraction is all-or-nothing: the entire token has to be consumed, so
trailing garbage (`12abc`), empty input for types that need content, and
out-of-range numeric literals are all errors. Implementations must not have
side effects.
*/
pub trait Value: Sized {
    fn from_token(token: &str) -> Result<Self, ExtractError>;
}

/// For types with a [`FromStr`] implementation, [`ParsedValue`] automatically
/// gives them a [`Value`] implementation so that they can be used as the
/// value type of an argument.
pub trait ParsedValue: FromStr {}

impl<T> Value for T
where
    T: ParsedValue,
    T::Err: Display,
{
    #[inline]
    fn from_token(token: &str) -> Result<Self, ExtractError> {
        token.parse().map_err(|err| ExtractError::new(token, err))
    }
}

/// A user-supplied conversion for a single argument, used in place of the
/// value type's own [`Value`] implementation.
pub type Extractor<T> = fn(&str) -> Result<T, ExtractError>;
