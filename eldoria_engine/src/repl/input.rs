//! Input handling for the game's menus.
//!
//! [`InputSource`] abstracts where lines come from: [`ConsoleInput`] wraps
//! rustyline (or plain stdin when not attached to a terminal), while
//! [`ScriptedInput`] replays a fixed list of lines for tests. On top of that,
//! [`read_choice`] implements the validated numeric menu prompt.

use std::collections::VecDeque;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::style::GameStyle;
use crate::view::{View, ViewItem};

const CHOICE_PROMPT: &str = "Your choice: ";
const NAME_PROMPT: &str = "Enter your character's name: ";

/// Outcome of reading a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything that can hand the game a line of player input.
pub trait InputSource {
    /// Show `prompt` and wait for a line.
    ///
    /// # Errors
    /// - if the underlying reader fails
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

/// Problems with a typed menu choice. Both are reported and re-prompted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("'{0}' is not a number. Please enter a valid number.")]
    NotANumber(String),
    #[error("{value} is out of range. Choose between {min} and {max}.")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

/// The input stream ended. The game loop treats this as the player leaving.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("input stream closed")]
pub struct InputClosed;

/// Parse a line as an integer in `min..=max`.
///
/// # Errors
/// - `ChoiceError::NotANumber` if the trimmed line isn't an integer
/// - `ChoiceError::OutOfRange` if it is, but falls outside the bounds
pub fn parse_choice(line: &str, min: u32, max: u32) -> Result<u32, ChoiceError> {
    let trimmed = line.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ChoiceError::NotANumber(trimmed.to_string()))?;
    match u32::try_from(value) {
        Ok(choice) if (min..=max).contains(&choice) => Ok(choice),
        _ => Err(ChoiceError::OutOfRange { value, min, max }),
    }
}

/// Prompt until the player enters an integer in `min..=max`.
///
/// Pending view output is flushed before every prompt. Invalid input is
/// reported and the prompt repeats; it never escapes this function.
///
/// # Errors
/// - `InputClosed` when input runs out
/// - I/O failures from the input source
pub fn read_choice(input: &mut dyn InputSource, view: &mut View, min: u32, max: u32) -> Result<u32> {
    loop {
        view.flush();
        let line = match input.read_line(&CHOICE_PROMPT.prompt_style().to_string())? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => return Err(InputClosed.into()),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Input canceled.".to_string()));
                continue;
            },
        };
        match parse_choice(&line, min, max) {
            Ok(choice) => return Ok(choice),
            Err(err) => {
                info!("rejected menu input {line:?}: {err}");
                view.push(ViewItem::Error(err.to_string()));
            },
        }
    }
}

/// Prompt until the player enters a non-blank name. The result is trimmed.
///
/// # Errors
/// - `InputClosed` when input runs out
/// - I/O failures from the input source
pub fn read_name(input: &mut dyn InputSource, view: &mut View) -> Result<String> {
    let mut prompt = NAME_PROMPT;
    loop {
        view.flush();
        match input.read_line(&prompt.prompt_style().to_string())? {
            InputEvent::Line(line) if !line.trim().is_empty() => return Ok(line.trim().to_string()),
            InputEvent::Line(_) => prompt = "Name cannot be empty. Try again: ",
            InputEvent::Eof => return Err(InputClosed.into()),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Input canceled.".to_string()));
            },
        }
    }
}

/// Lines supplied up front. Yields `Eof` once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    pub prompts_seen: usize,
}
impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts_seen: 0,
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<InputEvent> {
        self.prompts_seen += 1;
        Ok(self.lines.pop_front().map_or(InputEvent::Eof, InputEvent::Line))
    }
}

/// Terminal input.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct ConsoleInput {
    backend: Backend,
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleInput {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match DefaultEditor::new() {
                Ok(editor) => {
                    info!("using rustyline-backed input");
                    Backend::Rustyline(Box::new(editor))
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }
}

impl InputSource for ConsoleInput {
    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(Box<DefaultEditor>),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => match editor.readline(prompt) {
                Ok(line) => Ok(InputEvent::Line(line)),
                Err(err) => convert_readline_error(err),
            },
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}
