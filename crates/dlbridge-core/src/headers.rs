//! Request headers for download clients, rendered in four dialects.
//!
//! A header set is always built in the same order (User-Agent, Referer,
//! Cookie, then configured extra lines) and then rendered by one of the
//! dialect functions below. Cookies are passed in per file.

use crate::config::BridgeConfig;
use crate::file::strip_controls;

/// Target format for a header set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderDialect {
    /// Array of `Name: Value` strings for the `header` option of `aria2.addUri`.
    Rpc,
    /// `--header "..."` flags for an `aria2c` command line.
    Aria2Cmd,
    /// ` header=...` lines of an aria2 input file.
    Aria2c,
    /// Lower-cased header lines of an IDM `.ef2` import block.
    Idm,
}

/// Ordered `Name: Value` lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderSet(Vec<String>);

/// Output of [`HeaderSet::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Lines(Vec<String>),
    Text(String),
}

impl Rendered {
    /// Text form; RPC lines are joined with `\n`.
    pub fn into_text(self) -> String {
        match self {
            Rendered::Lines(lines) => lines.join("\n"),
            Rendered::Text(text) => text,
        }
    }
}

impl HeaderSet {
    /// Builds the header set for one file.
    ///
    /// `runtime_user_agent` is the caller's own user agent; it replaces the
    /// configured one only when `browser_user_agent` is set and it is non-empty.
    pub fn build(cfg: &BridgeConfig, runtime_user_agent: Option<&str>, cookie: &str) -> Self {
        let user_agent = match runtime_user_agent {
            Some(ua) if cfg.browser_user_agent && !ua.is_empty() => ua,
            _ => cfg.user_agent.as_str(),
        };

        let mut lines = vec![format!("User-Agent: {user_agent}")];
        if let Some(referer) = &cfg.referer {
            lines.push(format!("Referer: {referer}"));
        }
        lines.push(format!("Cookie: {cookie}"));
        lines.extend(cfg.extra_headers().map(String::from));
        HeaderSet(lines)
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn render(&self, dialect: HeaderDialect) -> Rendered {
        match dialect {
            HeaderDialect::Rpc => Rendered::Lines(self.0.clone()),
            HeaderDialect::Aria2Cmd => Rendered::Text(aria2_cmd(&self.0)),
            HeaderDialect::Aria2c => Rendered::Text(aria2c(&self.0)),
            HeaderDialect::Idm => Rendered::Text(idm(&self.0)),
        }
    }
}

impl From<Vec<String>> for HeaderSet {
    fn from(lines: Vec<String>) -> Self {
        HeaderSet(lines)
    }
}

/// Double-quoted POSIX shell word. `\`, `"`, `$` and `` ` `` are the only
/// characters still special inside double quotes, so each gets a backslash.
pub(crate) fn shell_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

pub fn aria2_cmd(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("--header {}", shell_quote(line)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn aria2c(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!(" header={}", strip_controls(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn idm(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| match line.split_once(": ") {
            Some((name, value)) => format!("{}: {}", name.to_lowercase(), value),
            None => line.clone(),
        })
        .collect::<Vec<_>>()
        .join("\r\n")
}
