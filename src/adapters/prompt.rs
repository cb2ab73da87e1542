//! Line-based prompter
//!
//! Asks for each field on a writer and reads the answer from a reader.
//! End of input declines the prompt; an empty line submits the empty string.

use std::io::{BufRead, Write};

use log::debug;

use crate::core::ports::{FieldInput, Prompter};

/// Prompter over any line reader and writer (stdin/stdout for the CLI)
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Prompt on `output`, read answers from `input`
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt(&mut self, label: &str, current: &str) -> FieldInput {
        let shown = write!(self.output, "{label} [{current}]: ").and_then(|()| self.output.flush());
        if let Err(e) = shown {
            debug!("Prompt '{label}' could not be shown: {e}");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                debug!("Prompt '{label}' declined");
                FieldInput::Declined
            },
            Ok(_) => FieldInput::Submitted(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                debug!("Prompt '{label}' failed: {e}");
                FieldInput::Declined
            },
        }
    }
}
