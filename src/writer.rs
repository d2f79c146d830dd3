use std::io::{self, Stderr, Stdout, Write};

/// Destination for user-facing output: codes on one stream, errors on the other.
pub trait OutErr {
    fn write_err(&mut self, s: &str);
    fn write(&mut self, s: &str);
}

pub struct ConsoleWriter {
    pub out: Stdout,
    pub err: Stderr,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        ConsoleWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutErr for ConsoleWriter {
    fn write_err(&mut self, s: &str) {
        if let Err(e) = self.err.write_all(s.as_bytes()) {
            log::warn!("unable to write to stderr: {}", e);
        }
    }

    fn write(&mut self, s: &str) {
        if let Err(e) = self.out.write_all(s.as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("unable to write to stdout: {}", e);
        }
    }
}
