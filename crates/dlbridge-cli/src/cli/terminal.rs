//! Terminal stand-ins for the toast and modal collaborators.

use dlbridge_core::ui::{DirectoryPrompt, Notice, NoticeLevel, Notifier, PromptResponse, Prompter};
use std::cell::RefCell;
use std::io::{BufRead, Write};

/// Asks for the download directory on a line-based terminal.
///
/// An empty answer accepts the default; end of input dismisses the prompt.
pub struct LinePrompter<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            assume_yes,
        }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt(&self, prompt: &DirectoryPrompt) -> PromptResponse {
        let default = prompt.default.clone().unwrap_or_default();
        if self.assume_yes {
            return PromptResponse::confirmed(default);
        }

        {
            let mut out = self.output.borrow_mut();
            let _ = write!(out, "{} for {} [{}]: ", prompt.title, prompt.file_name, default);
            let _ = out.flush();
        }

        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => PromptResponse::dismissed(),
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() {
                    PromptResponse::confirmed(default)
                } else {
                    PromptResponse::confirmed(answer)
                }
            }
        }
    }
}

/// Prints notices to stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        let tag = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        };
        eprintln!("[{tag}] {}", notice.title);
    }
}
