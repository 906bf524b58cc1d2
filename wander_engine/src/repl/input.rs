//! Terminal input handling for the REPL.
//!
//! Wraps a rustyline editor with command history kept alongside the saved games.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

const HISTORY_FILE: &str = ".history";

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

pub struct InputManager {
    editor: DefaultEditor,
    history_path: PathBuf,
}
impl InputManager {
    /// Start a line editor, loading any history stored in `save_dir`.
    ///
    /// # Errors
    /// - if the terminal editor can't be initialized
    pub fn new(save_dir: &Path) -> Result<InputManager> {
        let mut editor = DefaultEditor::new().context("starting line editor")?;
        let history_path = save_dir.join(HISTORY_FILE);
        if history_path.exists() && editor.load_history(&history_path).is_err() {
            warn!("could not read command history from '{}'", history_path.display());
        }
        Ok(InputManager { editor, history_path })
    }

    /// Read one line of input.
    ///
    /// # Errors
    /// - on terminal I/O failures other than end-of-input or interrupt
    pub fn read_line(&mut self, prompt: &str) -> Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(InputEvent::Line(line))
            },
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(err) => Err(err).context("reading input line"),
        }
    }

    /// Persist command history next to the saved games.
    pub fn save_history(&mut self) {
        if let Some(dir) = self.history_path.parent()
            && fs::create_dir_all(dir).is_err()
        {
            warn!("could not create '{}' for command history", dir.display());
            return;
        }
        match self.editor.save_history(&self.history_path) {
            Ok(()) => info!("saved command history to '{}'", self.history_path.display()),
            Err(err) => warn!("could not save command history: {err}"),
        }
    }
}
