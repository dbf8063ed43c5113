//! Presentation collaborators: toast notices and the download directory prompt.
//!
//! The library never renders anything. It hands these values to a [`Notifier`]
//! or [`Prompter`] owned by the caller.

/// Severity of a toast notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Non-blocking banner message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
}

impl Notice {
    /// Shown at the top of the page.
    pub const POSITION: &'static str = "top";
    pub const SHOW_CONFIRM_BUTTON: bool = false;
    pub const BACKDROP: bool = false;

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
        }
    }
}

/// Modal asking where a file should be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPrompt {
    pub title: String,
    /// Name of the file being asked about.
    pub file_name: String,
    /// Pre-filled text input value.
    pub default: Option<String>,
}

impl DirectoryPrompt {
    pub const TITLE: &'static str = "Enter download directory";
    pub const POSITION: &'static str = "center";
    pub const SHOW_CANCEL_BUTTON: bool = true;
    pub const BACKDROP: bool = false;

    pub fn new(file_name: &str, default: Option<String>) -> Self {
        Self {
            title: Self::TITLE.to_string(),
            file_name: file_name.to_string(),
            default,
        }
    }
}

/// What the user answered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptResponse {
    pub value: Option<String>,
    pub confirmed: bool,
}

impl PromptResponse {
    pub fn confirmed(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            confirmed: true,
        }
    }

    pub fn dismissed() -> Self {
        Self::default()
    }

    /// The chosen directory; None when dismissed or left empty.
    pub fn accepted_value(&self) -> Option<&str> {
        if !self.confirmed {
            return None;
        }
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

pub trait Prompter {
    fn prompt(&self, prompt: &DirectoryPrompt) -> PromptResponse;
}
