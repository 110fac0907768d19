//! Replace chart code blocks in markdown with rendered SVG.
//!
//! Only fenced blocks whose info string starts with a configured language
//! are touched; every other byte of the document is copied through.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

use crate::config::{Config, RenderConfig};
use crate::dsl::parse;
use crate::render::{html_escape, render};

/// Class of the `<pre>` element replacing a block that failed.
pub const ERROR_CLASS: &str = "plainviz-error";

/// How chart blocks are recognised and rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedOptions {
    pub class_name: String,
    pub languages: Vec<String>,
    pub render: RenderConfig,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl EmbedOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            class_name: config.embed.class_name.clone(),
            languages: config.embed.languages.clone(),
            render: config.render.clone(),
        }
    }

    fn is_chart_language(&self, info: &str) -> bool {
        info.split_whitespace()
            .next()
            .is_some_and(|lang| self.languages.iter().any(|l| l.eq_ignore_ascii_case(lang)))
    }
}

/// A chart block found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBlock {
    /// Byte range of the whole block, fences included.
    pub range: Range<usize>,
    pub source: String,
}

/// Locate every chart block in `markdown`, in document order.
#[must_use]
pub fn find_chart_blocks(markdown: &str, options: &EmbedOptions) -> Vec<ChartBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<ChartBlock> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) if options.is_chart_language(&info) => {
                current = Some(ChartBlock {
                    range,
                    source: String::new(),
                });
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.source.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Render one chart block to the HTML that replaces it.
#[must_use]
pub fn render_block(source: &str, options: &EmbedOptions) -> String {
    let ir = match parse(source) {
        Ok(ir) => ir,
        Err(diagnostics) => {
            let lines: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
            return error_block(&lines.join("\n"));
        }
    };

    match render(&ir, &options.render.options_for_ir(&ir)) {
        Ok(svg) => format!(
            "<div class=\"{}\">{svg}</div>",
            html_escape(&options.class_name)
        ),
        Err(err) => error_block(&format!("Render error: {err}")),
    }
}

fn error_block(message: &str) -> String {
    format!(
        "<pre class=\"{ERROR_CLASS}\"><code>{}</code></pre>",
        html_escape(message)
    )
}

/// Rewrite `markdown`, replacing each chart block with its rendering.
#[must_use]
pub fn embed_charts(markdown: &str, options: &EmbedOptions) -> String {
    replace_chart_blocks(markdown, &find_chart_blocks(markdown, options), options)
}

/// Rewrite `markdown` using blocks already found by [`find_chart_blocks`].
///
/// `blocks` must come from the same document, in document order.
#[must_use]
pub fn replace_chart_blocks(markdown: &str, blocks: &[ChartBlock], options: &EmbedOptions) -> String {
    tracing::debug!(blocks = blocks.len(), "embedding charts");

    let mut output = String::with_capacity(markdown.len());
    let mut cursor = 0;

    for block in blocks {
        output.push_str(&markdown[cursor..block.range.start]);
        output.push_str(&render_block(&block.source, options));
        if markdown[block.range.clone()].ends_with('\n') {
            output.push('\n');
        }
        cursor = block.range.end;
    }

    output.push_str(&markdown[cursor..]);
    output
}

#[cfg(test)]
#[path = "embed_tests.rs"]
mod tests;
