use std::path::PathBuf;

use thiserror::Error;

use crate::ir::Diagnostics;
use crate::render::RenderError;

#[derive(Error, Debug)]
pub enum PlainvizError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Invalid IR JSON: {0}")]
    InvalidIr(#[source] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] Diagnostics),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl PlainvizError {
    /// Short category shown before the message.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
            Self::InvalidIr(_) => "IR",
            Self::Parse(_) => "Parse",
            Self::Render(_) => "Render",
        }
    }

    /// Main message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) | Self::InvalidIr(e) => e.to_string(),
            Self::Parse(diagnostics) => match diagnostics.len() {
                1 => "1 problem found".to_string(),
                n => format!("{n} problems found"),
            },
            Self::Render(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => e.span().map(|span| format!("at bytes {}..{}", span.start, span.end)),
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileRead { .. } => Some("Check that the file exists and is readable"),
            Self::TomlParse(_) => Some("Check the TOML syntax of the configuration file"),
            Self::InvalidIr(_) => Some("Expected the JSON printed by `plainviz parse`"),
            Self::Render(RenderError::CanvasTooSmall { .. }) => {
                Some("Increase --width/--height or reduce --padding")
            }
            Self::Render(RenderError::NonPositiveScale { .. } | RenderError::NonPositiveTotal { .. }) => {
                Some("At least one value must be greater than zero")
            }
            _ => None,
        }
    }
}

impl PlainvizError {
    /// Process exit code: the document itself was bad, or the environment was.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Parse(_) | Self::Render(_) | Self::InvalidIr(_) => crate::EXIT_FAILURE,
            Self::Config(_)
            | Self::FileRead { .. }
            | Self::Io(_)
            | Self::TomlParse(_)
            | Self::JsonSerialize(_) => crate::EXIT_CONFIG_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlainvizError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
