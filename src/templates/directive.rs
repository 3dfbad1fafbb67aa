//! `/script-<style>` directives and template insertion

use super::catalog::{template_for_style, Template};
use crate::metrics::is_word_char;
use serde::Serialize;
use thiserror::Error;

const DIRECTIVE_PREFIX: &str = "/script-";

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum TemplateError {
    #[error("Unknown script style: {0}")]
    UnknownStyle(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}

pub type TemplateResult<T> = Result<T, TemplateError>;

/// Parse a `/script-<style>` directive, returning the lowercased style.
///
/// The line is trimmed; the prefix is case-insensitive and must be
/// followed by at least one word character. Anything after the style is
/// ignored.
pub fn parse_directive(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let head = trimmed.get(..DIRECTIVE_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(DIRECTIVE_PREFIX) {
        return None;
    }
    let style: String = trimmed[DIRECTIVE_PREFIX.len()..]
        .chars()
        .take_while(|c| is_word_char(*c))
        .collect();
    if style.is_empty() {
        None
    } else {
        Some(style.to_ascii_lowercase())
    }
}

/// Append a template body to `content`, on its own lines.
pub fn append_template(content: &str, body: &str) -> String {
    let mut out = String::with_capacity(content.len() + body.len() + 3);
    out.push_str(content);
    if !content.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(body.trim());
    out.push('\n');
    out
}

/// Append the template with id `template_id` to `content`.
///
/// Ids and `/script-` styles share one lookup, so anything a directive
/// can expand is also insertable by id.
pub fn insert_template(content: &str, template_id: &str) -> TemplateResult<String> {
    let template = template_for_style(template_id)
        .ok_or_else(|| TemplateError::UnknownTemplate(template_id.to_string()))?;
    Ok(append_template(content, template.body))
}

/// Apply a directive found on line `line` (0-based).
///
/// Removes the directive line and appends the style's template. Returns
/// `Ok(None)` when the line holds no directive or does not exist. An
/// unmapped style is an error and leaves the content untouched.
pub fn apply_directive(content: &str, line: usize) -> TemplateResult<Option<String>> {
    let lines: Vec<&str> = content.split('\n').collect();
    let Some(style) = lines.get(line).and_then(|l| parse_directive(l)) else {
        return Ok(None);
    };
    let template: &Template =
        template_for_style(&style).ok_or_else(|| TemplateError::UnknownStyle(style.clone()))?;

    let remaining: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != line)
        .map(|(_, l)| *l)
        .collect();
    let rest = remaining.join("\n");

    tracing::debug!(style = %style, line, "applied script directive");
    Ok(Some(append_template(&rest, template.body)))
}

/// Apply a directive on the first line, as done when a document is opened
pub fn apply_directive_on_open(content: &str) -> TemplateResult<Option<String>> {
    apply_directive(content, 0)
}
