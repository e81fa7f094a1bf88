//! Command line tokenization
//!
//! Splits the raw `--cmd` string into a program and its arguments.

use std::fmt;

use super::StressError;

/// A tokenized command: the program to execute plus its arguments.
///
/// Tokenization is plain whitespace splitting. A quoted argument with an
/// embedded space (`--cmd 'grep "a b" file'`) is split into multiple
/// tokens rather than kept whole; wrap such commands in a script if the
/// quoting matters. Known limitation, kept for compatibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    /// Parse a raw command string. Fails if the string contains no tokens.
    pub fn parse(raw: &str) -> Result<Self, StressError> {
        let tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();

        if tokens.is_empty() {
            return Err(StressError::EmptyCommand);
        }

        Ok(Self { tokens })
    }

    /// The executable to invoke.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// Arguments passed to the executable.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
