use rustyline::{error::ReadlineError, DefaultEditor};

/// Blocking questions asked of the user.
pub trait Prompter {
    /// Ask for a line of text; `None` when the user cancels.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

/// The page hosting the list.
pub trait PageHost {
    /// Re-render the page from server state.
    fn reload(&mut self);
}

/// Host that records reload requests for the owner to act on.
#[derive(Debug, Default)]
pub struct ReloadFlag {
    requested: bool,
}

impl ReloadFlag {
    /// Whether a reload was requested since the last call; clears the flag.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.requested)
    }
}

impl PageHost for ReloadFlag {
    fn reload(&mut self) {
        self.requested = true;
    }
}

/// Terminal prompter backed by a line editor. Ctrl-C and Ctrl-D cancel.
pub struct LinePrompter {
    editor: DefaultEditor,
}

impl LinePrompter {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Read one line with history, distinguishing cancellation from errors.
    pub fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    // A line missing from history is not worth failing the read.
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl Prompter for LinePrompter {
    fn prompt(&mut self, message: &str) -> Option<String> {
        match self.read_line(&format!("{} ", message)) {
            Ok(line) => line,
            Err(err) => {
                tracing::error!(error = %err, "prompt failed");
                None
            }
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompt(&format!("{} [y/N]", message))
            .map(|answer| is_affirmative(&answer))
            .unwrap_or(false)
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
