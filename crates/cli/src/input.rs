//! Line-oriented input for the console game.

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Source of text commands, one line per request.
pub trait LineInput {
    /// Shows `prompt` and blocks until a line is entered.
    ///
    /// `Ok(None)` means the input was closed (end of file or Ctrl-C).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive terminal input with line editing and history.
pub struct Console {
    editor: DefaultEditor,
}

impl Console {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to initialise the line editor")?;
        Ok(Self { editor })
    }
}

impl LineInput for Console {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("failed to read from the terminal"),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;

    use anyhow::Result;

    use super::LineInput;

    /// Replays a fixed list of lines, recording every prompt shown.
    #[derive(Debug, Default)]
    pub struct Scripted {
        lines: VecDeque<String>,
        pub prompts: Vec<String>,
    }

    impl Scripted {
        pub fn new<I, S>(lines: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                lines: lines.into_iter().map(Into::into).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineInput for Scripted {
        fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.lines.pop_front())
        }
    }
}
