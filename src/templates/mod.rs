//! Script templates and `/script-<style>` directives
//!
//! A document whose line reads `/script-cinema` (or any other style in
//! [`TEMPLATES`]) gets that line removed and the matching template
//! appended. Template bodies are plain text; the functions here are pure
//! string transforms and leave reading and writing the document to the
//! caller.

mod catalog;
mod directive;

pub use catalog::{template_for_style, Template, TEMPLATES};
pub use directive::{
    append_template, apply_directive, apply_directive_on_open, insert_template, parse_directive,
    TemplateError, TemplateResult,
};
