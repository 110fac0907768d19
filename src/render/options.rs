//! Canvas dimensions, themes and palettes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ir::Ir;

/// Series palette used when neither the document nor the caller supplies one.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#89b4fa", "#a6e3a1", "#f9e2af", "#f38ba8", "#cba6f7", "#fab387", "#94e2d5", "#f5c2e7",
];

const LIGHT_PALETTE: [&str; 8] = [
    "#1e66f5", "#40a02b", "#df8e1d", "#d20f39", "#8839ef", "#fe640b", "#179299", "#ea76cb",
];

/// Named colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn palette(self) -> &'static [&'static str] {
        match self {
            Self::Dark => &DEFAULT_PALETTE,
            Self::Light => &LIGHT_PALETTE,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

/// Everything the renderer needs besides the IR itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub colors: Vec<String>,
    pub background_color: String,
    pub text_color: String,
    pub grid_color: String,
    /// Axis labels, tick labels and captions.
    pub muted_color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::themed(Theme::Dark)
    }
}

impl RenderOptions {
    /// Default canvas with the colours of `theme`.
    #[must_use]
    pub fn themed(theme: Theme) -> Self {
        let (background, text, grid, muted) = match theme {
            Theme::Dark => ("#1e1e2e", "#cdd6f4", "#313244", "#6c7086"),
            Theme::Light => ("#eff1f5", "#4c4f69", "#ccd0da", "#8c8fa1"),
        };
        Self {
            width: 500.0,
            height: 300.0,
            padding: 60.0,
            colors: theme.palette().iter().map(|c| (*c).to_string()).collect(),
            background_color: background.to_string(),
            text_color: text.to_string(),
            grid_color: grid.to_string(),
            muted_color: muted.to_string(),
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        if !colors.is_empty() {
            self.colors = colors;
        }
        self
    }

    /// Swap in another theme's colours, keeping the canvas geometry.
    #[must_use]
    pub fn with_theme(self, theme: Theme) -> Self {
        let themed = Self::themed(theme);
        Self {
            width: self.width,
            height: self.height,
            padding: self.padding,
            ..themed
        }
    }
}

/// Palette in effect for one chart: the document's `Colors:` list wins over
/// the caller's colours. Indices wrap around.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette<'a> {
    colors: &'a [String],
}

impl<'a> Palette<'a> {
    pub(crate) fn resolve(ir: &'a Ir, options: &'a RenderOptions) -> Self {
        let colors = ir.custom_colors().unwrap_or(&options.colors);
        Self { colors }
    }

    pub(crate) fn color(&self, index: usize) -> &'a str {
        if self.colors.is_empty() {
            return DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
        }
        &self.colors[index % self.colors.len()]
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
