//! Configuration semantic validation.
//!
//! Range checks and cross-field constraints applied after parsing.

use crate::config::{Config, EmbedConfig, RenderConfig};
use crate::{PlainvizError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a dimension is out of range, the padding leaves no
/// room to draw, a colour is blank, or the embed section is empty.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_render_section(&config.render)?;
    validate_embed_section(&config.embed)?;
    Ok(())
}

fn validate_render_section(render: &RenderConfig) -> Result<()> {
    for (name, value) in [("width", render.width), ("height", render.height)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(invalid(format!("render.{name} must be greater than 0, got {value}")));
        }
    }

    if !(render.padding.is_finite() && render.padding >= 0.0) {
        return Err(invalid(format!(
            "render.padding must be 0 or greater, got {}",
            render.padding
        )));
    }

    let smaller_side = render.width.min(render.height);
    if render.padding * 2.0 >= smaller_side {
        return Err(invalid(format!(
            "render.padding ({}) leaves no room on a {}x{} canvas",
            render.padding, render.width, render.height
        )));
    }

    if let Some(colors) = &render.colors {
        if colors.is_empty() {
            return Err(invalid("render.colors must not be empty when set"));
        }
        if let Some(i) = colors.iter().position(|c| c.trim().is_empty()) {
            return Err(invalid(format!("render.colors[{i}] is blank")));
        }
    }

    let single_colors = [
        ("background_color", &render.background_color),
        ("text_color", &render.text_color),
        ("grid_color", &render.grid_color),
    ];
    for (name, color) in single_colors {
        if color.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(invalid(format!("render.{name} is blank")));
        }
    }

    Ok(())
}

fn validate_embed_section(embed: &EmbedConfig) -> Result<()> {
    if embed.class_name.trim().is_empty() {
        return Err(invalid("embed.class_name must not be empty"));
    }
    if embed.languages.is_empty() {
        return Err(invalid("embed.languages must list at least one language"));
    }
    if let Some(i) = embed.languages.iter().position(|l| l.trim().is_empty()) {
        return Err(invalid(format!("embed.languages[{i}] is blank")));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> PlainvizError {
    PlainvizError::Config(message.into())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
