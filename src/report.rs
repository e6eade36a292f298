use std::io::Write;

/// Receives lexical errors as they are found. Reporting never stops a scan;
/// deciding what an error means for the program is up to the implementor.
pub trait Reporter {
    fn report(&mut self, line: u32, message: &str);
}

/// Writes `[line N] Error: message` to a stream and remembers that it did.
pub struct ConsoleReporter<W: Write> {
    stream: W,
    had_error: bool,
}

impl ConsoleReporter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            had_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn reset(&mut self) {
        self.had_error = false;
    }

    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, line: u32, message: &str) {
        let _ = writeln!(self.stream, "[line {}] Error: {}", line, message);
        self.had_error = true;
    }
}

/// Collects every report in order.
impl Reporter for Vec<(u32, String)> {
    fn report(&mut self, line: u32, message: &str) {
        self.push((line, message.to_string()));
    }
}
