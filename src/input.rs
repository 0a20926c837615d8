//! Numeric input sources
//!
//! The match loop asks for two numbers per turn (velocity, angle). Sources
//! own their retry behaviour: [`ConsoleInput`] re-prompts until it gets a
//! number inside the requested range, [`ScriptedInput`] replays a fixed list.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Inclusive range of accepted values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
}

impl ValidRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN is never contained
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<[f64; 2]> for ValidRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Something that can be asked for a number
pub trait NumberSource {
    /// Return a number inside `range`, retrying as the source sees fit
    fn get_number(&mut self, prompt: &str, range: ValidRange) -> io::Result<f64>;

    /// Wait for the operator before moving on
    fn pause(&mut self, prompt: &str) -> io::Result<()>;
}

/// Prompts on a writer and reads answers line by line
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer (used to inspect prompts)
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> NumberSource for ConsoleInput<R, W> {
    fn get_number(&mut self, prompt: &str, range: ValidRange) -> io::Result<f64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<f64>() {
                Err(_) => {
                    log::warn!("Rejected non-numeric input {:?}", line.trim());
                    writeln!(self.writer, "Please enter a number")?;
                }
                Ok(value) if range.contains(value) => return Ok(value),
                Ok(value) => {
                    log::warn!("Rejected out-of-range input {value}");
                    writeln!(self.writer, "Please enter a value in the range {range}")?;
                }
            }
        }
    }

    fn pause(&mut self, prompt: &str) -> io::Result<()> {
        self.read_line(prompt).map(|_| ())
    }
}

/// Replays a fixed list of numbers; pauses are no-ops
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    values: VecDeque<f64>,
}

impl ScriptedInput {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Parse a comma or whitespace separated list such as `"50, 45, 60 135"`
    pub fn parse(script: &str) -> Result<Self, std::num::ParseFloatError> {
        script
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::parse::<f64>)
            .collect::<Result<VecDeque<_>, _>>()
            .map(|values| Self { values })
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl NumberSource for ScriptedInput {
    fn get_number(&mut self, prompt: &str, range: ValidRange) -> io::Result<f64> {
        // Out-of-range entries are skipped, like an operator being re-prompted
        while let Some(value) = self.values.pop_front() {
            if range.contains(value) {
                log::debug!("{prompt}{value}");
                return Ok(value);
            }
            log::warn!("Skipping scripted value {value} outside {range}");
        }
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "script exhausted",
        ))
    }

    fn pause(&mut self, _prompt: &str) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(text: &str) -> ConsoleInput<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(text.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_valid_range_inclusive() {
        let range = ValidRange::new(0.0, 180.0);
        assert!(range.contains(0.0));
        assert!(range.contains(180.0));
        assert!(!range.contains(180.5));
        assert!(!range.contains(f64::NAN));
        assert!(ValidRange::new(f64::NEG_INFINITY, f64::INFINITY).contains(-1e300));
        assert_eq!(range.to_string(), "[0, 180]");
    }

    #[test]
    fn test_console_accepts_number() {
        let mut input = console("42.5\n");
        let value = input.get_number("Enter velocity > ", ValidRange::new(0.0, 100.0)).unwrap();
        assert_eq!(value, 42.5);
        let out = String::from_utf8(input.into_writer()).unwrap();
        assert_eq!(out, "Enter velocity > ");
    }

    #[test]
    fn test_console_reprompts_until_valid() {
        let mut input = console("abc\n200\n  45  \n");
        let value = input
            .get_number("Enter angle > ", ValidRange::new(0.0, 180.0))
            .unwrap();
        assert_eq!(value, 45.0);

        let out = String::from_utf8(input.into_writer()).unwrap();
        assert_eq!(out.matches("Enter angle > ").count(), 3);
        assert!(out.contains("Please enter a number\n"));
        assert!(out.contains("Please enter a value in the range [0, 180]\n"));
    }

    #[test]
    fn test_console_eof() {
        let mut input = console("nope\n");
        let err = input.get_number("> ", ValidRange::new(0.0, 100.0)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_console_pause_consumes_line() {
        let mut input = console("\n7\n");
        input.pause("Press Enter to Continue").unwrap();
        assert_eq!(input.get_number("> ", ValidRange::new(0.0, 100.0)).unwrap(), 7.0);
    }

    #[test]
    fn test_scripted_replay() {
        let mut input = ScriptedInput::parse("50, 45 -3 60").unwrap();
        assert_eq!(input.remaining(), 4);
        let speed = ValidRange::new(0.0, 100.0);
        assert_eq!(input.get_number("v", speed).unwrap(), 50.0);
        assert_eq!(input.get_number("v", speed).unwrap(), 45.0);
        // -3 is skipped
        assert_eq!(input.get_number("v", speed).unwrap(), 60.0);
        assert_eq!(
            input.get_number("v", speed).unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_scripted_parse_error() {
        assert!(ScriptedInput::parse("50, fast").is_err());
        assert_eq!(ScriptedInput::parse("").unwrap().remaining(), 0);
    }
}
