//! Error types. The data structures themselves report missing entries with `Option`; these cover
//! the few operations that can genuinely fail.

use std::io;

use derive_more::{Display, Error, From};

/// Why [`Tree::lowest_common_ancestor`][crate::tree::Tree::lowest_common_ancestor] has no answer.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum LcaError {
    /// There are no nodes to search.
    #[display("The tree is empty")]
    EmptyTree,
    /// At least one of the keys is not in the tree.
    #[display("The key doesn't exist")]
    MissingKey,
}

/// A binomial coefficient (or a row of them) doesn't fit in a `u64`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("C({n}, {k}) overflows u64")]
pub struct Overflow {
    /// Size of the set being chosen from.
    pub n: u64,
    /// How many elements are chosen.
    pub k: u64,
}

/// Why [`draw`][crate::pascal::draw] stopped part way through the triangle.
#[derive(Debug, Display, Error, From)]
pub enum DrawError {
    /// Writing a row failed.
    #[display("Failed to write the triangle: {_0}")]
    Io(io::Error),
    /// A row is too large for `u64`.
    Overflow(Overflow),
}

/// Everything that stops the Pascal's triangle command reader. None of these are recoverable: the
/// reader gives up on the first one.
#[derive(Debug, Display, Error, From)]
pub enum CommandError {
    /// Reading commands or writing results failed.
    #[display("Failed to read or write: {_0}")]
    Io(io::Error),
    /// A token that isn't `binomial` or `draw` where a command was expected.
    #[display("Invalid input! Unknown command `{token}`")]
    #[from(ignore)]
    UnknownCommand {
        /// The offending token.
        token: String,
    },
    /// The input ended before a command got all of its arguments.
    #[display("Invalid input! `{command}` is missing an argument")]
    #[from(ignore)]
    MissingArgument {
        /// The command that was cut short.
        command: &'static str,
    },
    /// An argument that doesn't parse as a `u64`.
    #[display("Invalid input! `{token}` is not a non-negative integer")]
    #[from(ignore)]
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// The requested coefficients are too large.
    Overflow(Overflow),
}

impl From<DrawError> for CommandError {
    fn from(e: DrawError) -> Self {
        match e {
            DrawError::Io(e) => Self::Io(e),
            DrawError::Overflow(e) => Self::Overflow(e),
        }
    }
}
