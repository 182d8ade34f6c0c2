pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

impl From<bool> for OutputMode {
    fn from(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Routes command results to stdout as plain text or pretty JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Headings, footers and empty-result notices. Silent in JSON mode.
    pub fn note(&self, line: &str) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_line(line),
            OutputMode::Json => Ok(()),
        }
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_line(text_line),
            OutputMode::Json => json::print(json_value),
        }
    }

    pub fn emit_table<T: Serialize>(
        &self,
        header: &[&str],
        rows: Vec<Vec<String>>,
        json_value: &T,
    ) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_table(header, rows),
            OutputMode::Json => json::print(json_value),
        }
    }
}
