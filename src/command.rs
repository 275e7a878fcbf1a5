//! The Pascal's triangle command reader.
//!
//! Input is a stream of whitespace separated tokens (line breaks are just whitespace). Two commands
//! are understood:
//!
//! * `binomial <n> <k>` prints `C(n, k)` on its own line.
//! * `draw <n>` prints rows `0..=n` of Pascal's triangle.
//!
//! Anything else where a command is expected is invalid input and stops the reader.
//!
//! # Examples
//!
//! ```
//! use dslab::command;
//!
//! let mut out = Vec::new();
//! command::run("binomial 4 2\ndraw 2".as_bytes(), &mut out).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "6\n1\n1 1\n1 2 1\n");
//! ```

use std::fmt;
use std::io::{BufRead, Write};

use log::debug;

use crate::error::CommandError;
use crate::pascal;
use crate::queue::Queue;

/// One parsed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print a single binomial coefficient.
    Binomial {
        /// Size of the set being chosen from.
        n: u64,
        /// How many elements are chosen.
        k: u64,
    },
    /// Print the first `n + 1` rows of Pascal's triangle.
    Draw {
        /// Index of the last row to print.
        n: u64,
    },
}

impl Command {
    /// Runs the command, writing its output to `out`.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        match *self {
            Self::Binomial { n, k } => {
                let coefficient = pascal::binomial(n, k)?;
                writeln!(out, "{}", coefficient)?;
            }
            Self::Draw { n } => pascal::draw(n, out)?,
        }
        Ok(())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binomial { n, k } => write!(f, "binomial {} {}", n, k),
            Self::Draw { n } => write!(f, "draw {}", n),
        }
    }
}

/// Parses [`Command`]s out of a reader, one line at a time.
pub struct Commands<R> {
    input: R,
    pending: Queue<String>,
}

impl<R: BufRead> Commands<R> {
    /// Reads commands from `input`.
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: Queue::new(),
        }
    }

    /// The next whitespace separated token, reading more lines as needed. `None` at the end of the
    /// input.
    fn next_token(&mut self) -> Result<Option<String>, CommandError> {
        loop {
            if let Some(token) = self.pending.dequeue() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(String::from));
        }
    }

    fn argument(&mut self, command: &'static str) -> Result<u64, CommandError> {
        let token = self
            .next_token()?
            .ok_or(CommandError::MissingArgument { command })?;

        token
            .parse::<u64>()
            .map_err(|_| CommandError::InvalidNumber { token })
    }

    fn parse(&mut self, token: String) -> Result<Command, CommandError> {
        match token.as_str() {
            "binomial" => {
                let n = self.argument("binomial")?;
                let k = self.argument("binomial")?;
                Ok(Command::Binomial { n, k })
            }
            "draw" => {
                let n = self.argument("draw")?;
                Ok(Command::Draw { n })
            }
            _ => Err(CommandError::UnknownCommand { token }),
        }
    }
}

impl<R: BufRead> Iterator for Commands<R> {
    type Item = Result<Command, CommandError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token().transpose()?;
        Some(token.and_then(|token| self.parse(token)))
    }
}

/// Runs every command in `input` in order, writing the results to `out`.
///
/// The first error stops the run. Output from earlier commands has already been written by then.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<(), CommandError> {
    for command in Commands::new(input) {
        let command = command?;
        debug!("Running `{}`", command);
        command.execute(out)?;
    }

    out.flush()?;
    Ok(())
}
