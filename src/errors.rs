/*!
Error types for each layer of [`docket`][crate].

- [`ExtractError`][crate::value::ExtractError]: a token couldn't be converted
  into a value.
- [`ArgError`]: a descriptor recognized a token as its own, but couldn't
  accept it. These abort the parse pass.
- [`ParseError`]: anything that ends a parse pass, including the errors that
  only the driver can detect (unrecognized tokens, repeated arguments,
  missing required arguments).
- [`SpecError`]: a descriptor was rejected at registration time.

Every error names the offending argument by its label (`--count` for a
labeled argument, the bare name for a positional one).
*/

use joinery::JoinableIterator;

use crate::value::ExtractError;

/// Hard failures raised by a single descriptor while consuming a token that
/// matched its surface syntax.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ArgError {
    /// The token couldn't be converted into the argument's value type
    #[error("argument {argument}: {source}")]
    Extraction {
        argument: String,
        source: ExtractError,
    },

    /// The value was converted, but it isn't in the argument's allowed set
    #[error("argument {argument}: {token:?} is not one of {allowed}")]
    ConstraintViolation {
        argument: String,
        token: String,
        allowed: String,
    },

    /// A labeled argument was given, but there was no value for it
    #[error("argument {argument} requires a value")]
    MissingValue { argument: String },
}

impl ArgError {
    /// The label of the argument that raised this error
    #[must_use]
    pub fn argument(&self) -> &str {
        match self {
            Self::Extraction { argument, .. }
            | Self::ConstraintViolation { argument, .. }
            | Self::MissingValue { argument } => argument,
        }
    }
}

/// Everything that can end a parse pass early, or fail it at the end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A descriptor matched the token and then failed to accept it
    #[error(transparent)]
    Argument(#[from] ArgError),

    /// The token belongs to a labeled argument that was already given
    #[error("argument {argument} was given more than once (again as {token:?})")]
    AlreadySet { argument: String, token: String },

    /// No descriptor accepted the token
    #[error("unrecognized argument {token:?}")]
    Unrecognized { token: String },

    /// These required arguments never received a value
    #[error("required argument(s) missing: {}", .arguments.iter().join_with(", "))]
    MissingRequired { arguments: Vec<String> },
}

impl ParseError {
    /// The descriptor error behind this parse error, if there is one
    #[must_use]
    pub fn argument_error(&self) -> Option<&ArgError> {
        match self {
            Self::Argument(error) => Some(error),
            _ => None,
        }
    }
}

/// A descriptor was rejected by [`DescriptorList::register`][crate::DescriptorList::register].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SpecError {
    /// An argument with the same identity is already registered
    #[error("an argument with the same flag or name as {argument} already exists")]
    Duplicate { argument: String },

    /// Flags must be a single printable character other than `-`
    #[error("invalid flag {flag:?} for argument {argument}")]
    InvalidFlag { argument: String, flag: char },

    /// Names can't be empty on labeled arguments, and can't start with `-` or
    /// contain whitespace
    #[error("invalid argument name {name:?}")]
    InvalidName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let error = ParseError::MissingRequired {
            arguments: vec!["--count".to_owned(), "file".to_owned()],
        };
        assert_eq!(
            error.to_string(),
            "required argument(s) missing: --count, file"
        );

        let error = ParseError::from(ArgError::ConstraintViolation {
            argument: "--count".to_owned(),
            token: "9".to_owned(),
            allowed: "1|2|3".to_owned(),
        });
        assert_eq!(error.to_string(), "argument --count: \"9\" is not one of 1|2|3");
        assert_eq!(
            error.argument_error().map(ArgError::argument),
            Some("--count")
        );
    }

    #[test]
    fn extraction_message_includes_token() {
        let error = ArgError::Extraction {
            argument: "--count".to_owned(),
            source: ExtractError::new("x", "invalid digit found in string"),
        };
        assert_eq!(
            error.to_string(),
            "argument --count: failed to parse \"x\": invalid digit found in string"
        );
    }
}
