//! Reads `binomial <n> <k>` and `draw <n>` commands from stdin and prints the results to stdout.
//! Invalid input is fatal: the error goes to stderr and the process exits unsuccessfully.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use log::debug;

use dslab::command;
use dslab::error::CommandError;
use dslab::logging;

fn main() -> ExitCode {
    if let Err(e) = logging::init_from_env() {
        eprintln!("Failed to set up logging: {}", e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command::run(stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Stopping after error: {:?}", e);
            report(&e, &mut out, &mut io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

/// Flushes what earlier commands already wrote to `out`, then writes `error` to `err`. A failed
/// flush is reported on `err` too.
fn report<W: Write, E: Write>(error: &CommandError, out: &mut W, err: &mut E) {
    // Results of the commands before the bad one still belong on stdout.
    if let Err(flush) = out.flush() {
        debug!("Flushing stdout failed: {:?}", flush);
        let _ = writeln!(err, "Failed to write results: {}", flush);
    }
    let _ = writeln!(err, "{}", error);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    fn unknown(token: &str) -> CommandError {
        CommandError::UnknownCommand {
            token: token.to_string(),
        }
    }

    #[test]
    fn error_goes_to_err() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        report(&unknown("foo"), &mut out, &mut err);

        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Invalid input! Unknown command `foo`\n"
        );
    }

    #[test]
    fn failed_flush_is_reported() {
        let mut err = Vec::new();
        report(&unknown("foo"), &mut BrokenPipe, &mut err);

        let err = String::from_utf8(err).unwrap();
        let mut lines = err.lines();
        assert!(lines
            .next()
            .is_some_and(|line| line.starts_with("Failed to write results: ")));
        assert_eq!(lines.next(), Some("Invalid input! Unknown command `foo`"));
    }
}
