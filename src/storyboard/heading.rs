//! Scene heading classification
//!
//! A scene heading is a screenplay-convention line (`INT. KITCHEN - DAY`,
//! `FADE IN:`, ...). Classification is a pure predicate over the trimmed
//! line and the fixed pattern table below.

use crate::metrics::is_word_char;

/// A single scene-heading prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingPattern {
    /// Uppercase literal prefix
    pub prefix: &'static str,
    /// Require a non-word character (or end of line) right after the prefix
    pub word_boundary: bool,
}

impl HeadingPattern {
    const fn prefix(prefix: &'static str) -> Self {
        Self {
            prefix,
            word_boundary: false,
        }
    }

    const fn word(prefix: &'static str) -> Self {
        Self {
            prefix,
            word_boundary: true,
        }
    }

    /// Check whether `line` (already trimmed) starts with this pattern,
    /// ignoring ASCII case.
    pub fn matches(&self, line: &str) -> bool {
        let len = self.prefix.len();
        let Some(head) = line.get(..len) else {
            return false;
        };
        if !head.eq_ignore_ascii_case(self.prefix) {
            return false;
        }
        if !self.word_boundary {
            return true;
        }
        match line[len..].chars().next() {
            Some(c) => !is_word_char(c),
            None => true,
        }
    }
}

/// Scene-heading prefixes, tested in order against the trimmed line.
pub const SCENE_HEADING_PATTERNS: &[HeadingPattern] = &[
    HeadingPattern::prefix("INT."),
    HeadingPattern::prefix("EXT."),
    HeadingPattern::prefix("INT./EXT."),
    HeadingPattern::word("TEASER"),
    HeadingPattern::prefix("ESTABLISHING"),
    HeadingPattern::prefix("FADE IN:"),
    HeadingPattern::prefix("FADE OUT."),
    HeadingPattern::prefix("MONTAGE:"),
    HeadingPattern::prefix("INTERCUT"),
    HeadingPattern::prefix("INSERT"),
    HeadingPattern::prefix("SMASH CUT:"),
    HeadingPattern::prefix("MATCH CUT:"),
];

/// Whether a line is a scene heading.
///
/// Leading and trailing whitespace is ignored; matching is anchored at
/// the start of the trimmed line and case-insensitive.
pub fn is_scene_heading(line: &str) -> bool {
    let trimmed = line.trim();
    SCENE_HEADING_PATTERNS.iter().any(|p| p.matches(trimmed))
}
