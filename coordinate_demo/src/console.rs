use colored::Colorize;
use std::io::{self, BufRead, Stdin, Stdout, Write};

/// The console the demo talks to. Keeps stdin/stdout out of the driver so it
/// can run against scripted input.
pub trait Console {
    /// Reads one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn out(&mut self) -> &mut dyn Write;

    fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out(), "{text}")
    }
}

pub struct StdConsole {
    stdin: Stdin,
    stdout: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(&line).to_string()))
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", text.bright_blue())
    }
}

fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Console fed from a fixed list of lines, capturing everything written.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedConsole {
    input: std::collections::VecDeque<String>,
    pub output: Vec<u8>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
