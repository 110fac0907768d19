//! SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;

/// Assembles a standalone SVG document from rendered elements.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    description: String,
    background: Option<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            description: String::new(),
            background: None,
            elements: Vec::new(),
        }
    }

    /// Accessible name of the document.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Accessible description of the document.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Full-canvas rectangle painted before any element.
    #[must_use]
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn push<E: SvgElement>(&mut self, element: &E) {
        self.elements.push(element.render());
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img">"#,
            w = self.width,
            h = self.height
        );

        if !self.title.is_empty() {
            let _ = writeln!(output, "    <title>{}</title>", html_escape(&self.title));
        }

        if !self.description.is_empty() {
            let _ = writeln!(output, "    <desc>{}</desc>", html_escape(&self.description));
        }

        if let Some(background) = &self.background {
            let _ = writeln!(
                output,
                r#"    <rect width="100%" height="100%" fill="{}"/>"#,
                html_escape(background)
            );
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
