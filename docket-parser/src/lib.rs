#![cfg_attr(not(test), no_std)]

/*!
Low-level token handling for `docket`. Takes care of telling flags, options,
and plain words apart, and of walking the token list during a parse pass. No
type handling happens here, and nothing here knows about descriptors.
Usually this is too low level to use directly.
*/

/**
The shape of a single raw token from the command line.

Classification is purely syntactic: `--count=2` is a [`Token::Long`] whether
or not anything named `count` exists. Given
`--target foo -o=bar -abc input.txt --`, the tokens classify as
`Long { name: "target", value: None }`, `Word("foo")`,
`Short { flag: 'o', value: Some("bar") }`, `ShortRun("abc")`,
`Word("input.txt")` and `Terminator`.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A bare `--`, marking the end of option parsing
    Terminator,

    /// A long option, `--name` or `--name=value`
    Long {
        name: &'a str,
        value: Option<&'a str>,
    },

    /// A single short option, `-x` or `-x=value`
    Short { flag: char, value: Option<&'a str> },

    /// A combined run of short switches, like `-abc`. Value arguments never
    /// match these.
    ShortRun(&'a str),

    /// A lone `-`, which by convention is an ordinary word (usually stdin)
    Dash,

    /// Anything that doesn't start with a dash
    Word(&'a str),
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        match token {
            "--" => Token::Terminator,
            "-" => Token::Dash,
            _ => {
                if let Some(option) = token.strip_prefix("--") {
                    match split_once(option, b'=') {
                        Some((name, value)) => Token::Long {
                            name,
                            value: Some(value),
                        },
                        None => Token::Long {
                            name: option,
                            value: None,
                        },
                    }
                } else if let Some(short) = token.strip_prefix('-') {
                    let mut chars = short.chars();

                    match (chars.next(), chars.as_str()) {
                        (Some(flag), "") => Token::Short { flag, value: None },
                        (Some(flag), rest) => match rest.strip_prefix('=') {
                            Some(value) => Token::Short {
                                flag,
                                value: Some(value),
                            },
                            None => Token::ShortRun(short),
                        },
                        // Unreachable: "-" was handled above
                        (None, _) => Token::Dash,
                    }
                } else {
                    Token::Word(token)
                }
            }
        }
    }

    /// True if this token is an option that carries its own `=value`.
    #[inline]
    #[must_use]
    pub const fn has_inline_value(&self) -> bool {
        matches!(
            *self,
            Token::Long { value: Some(_), .. } | Token::Short { value: Some(_), .. }
        )
    }

    /// The inline `=value` of an option token, if any
    #[inline]
    #[must_use]
    pub const fn inline_value(&self) -> Option<&'a str> {
        match *self {
            Token::Long { value, .. } | Token::Short { value, .. } => value,
            _ => None,
        }
    }
}

/**
A [`Cursor`] is a position in the list of raw tokens during a single parse
pass. The driver owns it and lends it to each descriptor it offers the
current token to, so that an option like `--count 2` can take its value from
the following token.

[docket-parser][crate] operates entirely on borrowed data; the `'t` lifetime
refers to the token list, which should exclude the program name.
*/
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tokens: &'t [&'t str],
    index: usize,
    terminated: bool,
}

impl<'t> Cursor<'t> {
    #[inline]
    #[must_use]
    pub const fn new(tokens: &'t [&'t str]) -> Self {
        Self {
            tokens,
            index: 0,
            terminated: false,
        }
    }

    /// The token under the cursor, or `None` if the tokens are exhausted
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&'t str> {
        self.tokens.get(self.index).copied()
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The current token and everything after it
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'t [&'t str] {
        self.tokens.get(self.index..).unwrap_or(&[])
    }

    /// Move past the current token
    #[inline]
    pub fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    /// Has a `--` terminator been seen during this pass?
    #[inline]
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Record that a `--` terminator has been seen
    #[inline]
    pub fn terminate(&mut self) {
        self.terminated = true;
    }

    /**
    Take the token following the current one as the value of the current
    option, moving the cursor onto it.

    Returns [`None`] if there is no following token, or if the following
    token is a `--` terminator that hasn't been seen yet; in that case the
    cursor is left where it is, so the terminator is still handled by the
    driver.
    */
    pub fn take_value(&mut self) -> Option<&'t str> {
        let next = *self.tokens.get(self.index + 1)?;

        if next == "--" && !self.terminated {
            return None;
        }

        self.index += 1;
        Some(next)
    }
}

fn split_once(input: &str, delimiter: u8) -> Option<(&str, &str)> {
    // `delimiter` is ASCII, so both halves are on char boundaries
    memchr::memchr(delimiter, input.as_bytes()).map(|i| (&input[..i], &input[i + 1..]))
}
