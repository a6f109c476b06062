//! Interactive read-modify-write loop
//!
//! Each pass asks for a file, validates and previews it, optionally writes a
//! modified copy, and returns a [`LoopControl`] to the driver. Nothing here
//! terminates the process.

use crate::config::AppConfig;
use crate::prompt::{Prompter, is_yes};
use crate::render;
use anyhow::Result;
use chrono::NaiveDateTime;
use filemod_core::{FileManager, is_typical_text_extension};
use std::io::Write;
use std::path::Path;

/// Words that end the session at the filename prompt
const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// What the driver should do after a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Current local time without an offset
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub struct Session<'a, P, W> {
    manager: &'a FileManager,
    config: &'a AppConfig,
    prompter: P,
    out: W,
    clock: fn() -> NaiveDateTime,
}

impl<'a, P: Prompter, W: Write> Session<'a, P, W> {
    pub fn new(manager: &'a FileManager, config: &'a AppConfig, prompter: P, out: W) -> Self {
        Self {
            manager,
            config,
            prompter,
            out,
            clock: local_now,
        }
    }

    /// Replace the wall clock used for header timestamps
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Print the banner and run passes until one returns [`LoopControl::Stop`]
    pub fn run(&mut self) -> Result<()> {
        self.banner()?;
        while self.step()? == LoopControl::Continue {}
        Ok(())
    }

    fn banner(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            render::heading("File Manager - Read, Modify & Write")
        )?;
        writeln!(self.out, "{}", "=".repeat(50))?;
        writeln!(self.out, "This program will:")?;
        writeln!(self.out, "• Read a file you specify")?;
        writeln!(self.out, "• Show you a preview of its contents")?;
        writeln!(self.out, "• Create a modified version")?;
        writeln!(self.out, "• Save the modified version to a new file")?;
        Ok(())
    }

    /// One pass: filename → validate → read → preview → write → ask again
    pub fn step(&mut self) -> Result<LoopControl> {
        let Some(filename) = self.ask_filename()? else {
            return self.goodbye();
        };
        let path = Path::new(&filename);

        let validated = match self.manager.validate(path) {
            Ok(validated) => {
                writeln!(self.out, "{}", render::success(&validated.to_string()))?;
                validated
            }
            Err(err) => {
                writeln!(self.out, "{}", render::failure(&err.to_string()))?;
                return Ok(LoopControl::Continue);
            }
        };

        if !is_typical_text_extension(path) {
            writeln!(
                self.out,
                "{}",
                render::notice("Note: this does not look like a typical text file (.txt, .py, .md, .csv)")
            )?;
        }

        let content = match self.manager.read_validated(&validated) {
            Ok(content) => {
                writeln!(self.out, "{}", render::success(&content.summary()))?;
                content
            }
            Err(err) => {
                writeln!(self.out, "{}", render::failure(&err.to_string()))?;
                return Ok(LoopControl::Continue);
            }
        };

        let preview = self
            .manager
            .preview(content.text(), self.config.preview.max_lines);
        writeln!(self.out, "\n{preview}")?;

        let Some(proceed) = self
            .prompter
            .ask("\nDo you want to create a modified version? (y/n)")?
        else {
            return self.goodbye();
        };
        if !is_yes(&proceed, true) {
            writeln!(self.out, "Skipping modification.")?;
            return Ok(LoopControl::Continue);
        }

        writeln!(self.out, "\nModifying content from '{filename}'...")?;
        let transformed = self.manager.transform(&content, (self.clock)());
        writeln!(self.out, "\n{}\n", transformed.stats)?;

        let written = self
            .manager
            .next_available_path(path)
            .map_err(filemod_core::Error::from)
            .and_then(|output| {
                self.manager
                    .write(&output, &transformed.modified_text)
                    .map(|()| output)
                    .map_err(filemod_core::Error::from)
            });

        match written {
            Ok(output) => {
                writeln!(
                    self.out,
                    "{}",
                    render::success(&format!(
                        "Successfully wrote modified content to '{}'",
                        output.display()
                    ))
                )?;
                writeln!(self.out, "Success! Your modified file has been created.")?;

                let Some(show) = self
                    .prompter
                    .ask("\nWould you like to see the modified file? (y/n)")?
                else {
                    return self.goodbye();
                };
                if is_yes(&show, false) {
                    let preview = self.manager.preview(
                        &transformed.modified_text,
                        self.config.preview.modified_max_lines,
                    );
                    writeln!(self.out, "\n{preview}")?;
                }
            }
            Err(err) => {
                writeln!(self.out, "{}", render::failure(&err.to_string()))?;
            }
        }

        let Some(another) = self.prompter.ask("\nProcess another file? (y/n)")? else {
            return self.goodbye();
        };
        if is_yes(&another, true) {
            Ok(LoopControl::Continue)
        } else {
            writeln!(self.out, "Thanks for using File Manager!")?;
            Ok(LoopControl::Stop)
        }
    }

    /// Ask until a non-empty filename arrives; `None` means the user is leaving
    fn ask_filename(&mut self) -> Result<Option<String>> {
        loop {
            let Some(answer) = self
                .prompter
                .ask("\nEnter the filename to read (or 'quit' to exit)")?
            else {
                return Ok(None);
            };

            if QUIT_WORDS.contains(&answer.to_lowercase().as_str()) {
                return Ok(None);
            }
            if answer.is_empty() {
                writeln!(self.out, "Filename cannot be empty. Please try again.")?;
                continue;
            }
            return Ok(Some(answer));
        }
    }

    fn goodbye(&mut self) -> Result<LoopControl> {
        writeln!(self.out, "Goodbye!")?;
        Ok(LoopControl::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::LinePrompter;
    use chrono::NaiveDate;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn fixed_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn run_script(script: &str) -> String {
        let manager = FileManager::new();
        let config = AppConfig::default();
        let mut out = Vec::new();
        {
            let prompter = LinePrompter::new(Cursor::new(script.to_string()), Vec::new());
            let mut session =
                Session::new(&manager, &config, prompter, &mut out).with_clock(fixed_clock);
            session.run().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quit_word_stops() {
        let output = run_script("QUIT\n");
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_end_of_input_stops() {
        let output = run_script("");
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_empty_filename_reprompts() {
        let output = run_script("\n\nq\n");
        assert_eq!(
            output
                .matches("Filename cannot be empty. Please try again.")
                .count(),
            2
        );
    }

    #[test]
    fn test_missing_file_continues() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let output = run_script(&format!("{}\nq\n", missing.display()));

        assert!(output.contains("does not exist"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_full_pass_writes_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("sample_text.txt");
        fs::write(&source, "a b\nc d e\n").unwrap();

        let output = run_script(&format!("{}\ny\ny\nn\n", source.display()));

        let written = dir.path().join("sample_text_modified.txt");
        assert!(written.exists());
        assert!(output.contains("is valid and ready to read"));
        assert!(output.contains("File Preview (showing first 3 lines):"));
        assert!(output.contains("Average words per line: 1.7"));
        assert!(output.contains("Success! Your modified file has been created."));
        assert!(output.contains("# Modification timestamp: 2023-06-01 12:00:00"));
        assert!(output.contains("Thanks for using File Manager!"));

        let text = fs::read_to_string(written).unwrap();
        assert!(text.starts_with("# Modified version of: "));
        assert!(text.ends_with("a b\nc d e\n"));
    }

    #[test]
    fn test_declining_modification_skips_write() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("notes.md");
        fs::write(&source, "hello").unwrap();

        let output = run_script(&format!("{}\nn\nq\n", source.display()));

        assert!(output.contains("Skipping modification."));
        assert!(!dir.path().join("notes_modified.md").exists());
    }

    #[test]
    fn test_empty_answers_default_to_yes() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "x").unwrap();

        // proceed (empty), show modified (empty = no), another (empty = yes), quit
        let output = run_script(&format!("{}\n\n\n\nq\n", source.display()));

        assert!(dir.path().join("a_modified.txt").exists());
        assert_eq!(output.matches("File Preview").count(), 1);
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_second_pass_gets_numbered_name() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "x").unwrap();
        let name = source.display();

        run_script(&format!("{name}\ny\nn\ny\n{name}\ny\nn\nn\n"));

        assert!(dir.path().join("a_modified.txt").exists());
        assert!(dir.path().join("a_modified_1.txt").exists());
    }

    #[test]
    fn test_unusual_extension_notice() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("data.bin");
        fs::write(&source, "plain").unwrap();

        let output = run_script(&format!("{}\nn\nq\n", source.display()));
        assert!(output.contains("does not look like a typical text file"));
    }
}
