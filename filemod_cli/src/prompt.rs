//! Reading answers from the user
//!
//! A terminal gets dialoguer widgets; anything else (pipes, test scripts)
//! gets plain line reading. Both report end of input as `Ok(None)`.

use anyhow::{Context, Result};
use dialoguer::Input;
use std::io::{self, BufRead, Write};

/// Source of answers for the interactive session
pub trait Prompter {
    /// Show `prompt` and return the trimmed answer, or `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompts through dialoguer on the controlling terminal
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(text) => Ok(Some(text.trim().to_string())),
            Err(dialoguer::Error::IO(err)) if is_end_of_input(&err) => Ok(None),
            Err(err) => Err(err).context("Failed to read input"),
        }
    }
}

fn is_end_of_input(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
    )
}

/// Prompts by writing to `output` and reading lines from `input`
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;

        if read == 0 {
            // Keep the next message off the prompt line
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Answer accepted as yes; an empty answer counts only when `empty_is_yes`
pub fn is_yes(answer: &str, empty_is_yes: bool) -> bool {
    match answer.to_lowercase().as_str() {
        "y" | "yes" => true,
        "" => empty_is_yes,
        _ => false,
    }
}
