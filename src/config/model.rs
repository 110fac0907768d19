use serde::{Deserialize, Serialize};

use crate::ir::Ir;
use crate::render::{RenderOptions, Theme};

/// Root of `.plainviz.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub embed: EmbedConfig,
}

/// Canvas and colour settings `[render]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default = "default_padding")]
    pub padding: f64,

    /// Colour scheme. When unset, a document's `Theme:` header decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    /// Series palette replacing the theme's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: default_padding(),
            theme: None,
            colors: None,
            background_color: None,
            text_color: None,
            grid_color: None,
        }
    }
}

impl RenderConfig {
    /// Renderer options, falling back to `document_theme` when no theme is
    /// configured.
    #[must_use]
    pub fn options_for(&self, document_theme: Option<Theme>) -> RenderOptions {
        let theme = self.theme.or(document_theme).unwrap_or_default();
        let mut options = RenderOptions::themed(theme)
            .with_size(self.width, self.height)
            .with_padding(self.padding);

        if let Some(colors) = &self.colors {
            options = options.with_colors(colors.clone());
        }
        if let Some(color) = &self.background_color {
            options.background_color.clone_from(color);
        }
        if let Some(color) = &self.text_color {
            options.text_color.clone_from(color);
        }
        if let Some(color) = &self.grid_color {
            options.grid_color.clone_from(color);
        }

        options
    }

    /// Renderer options for one document, honouring its `Theme:` header
    /// when no theme is configured. Unknown theme names are ignored.
    #[must_use]
    pub fn options_for_ir(&self, ir: &Ir) -> RenderOptions {
        let document_theme = ir
            .meta
            .as_ref()
            .and_then(|meta| meta.theme.as_deref())
            .and_then(|name| match name.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(reason) => {
                    tracing::warn!(%reason, "ignoring document theme");
                    None
                }
            });
        self.options_for(document_theme)
    }
}

/// Markdown embedding settings `[embed]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EmbedConfig {
    /// Class of the `<div>` wrapping each chart.
    #[serde(default = "default_class_name")]
    pub class_name: String,

    /// Fenced code block languages treated as charts.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            class_name: default_class_name(),
            languages: default_languages(),
        }
    }
}

const fn default_width() -> f64 {
    500.0
}

const fn default_height() -> f64 {
    300.0
}

const fn default_padding() -> f64 {
    60.0
}

fn default_class_name() -> String {
    "plainviz-chart".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["plainviz".to_string(), "pv".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
