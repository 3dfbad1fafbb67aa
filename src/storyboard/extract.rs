//! Storyboard card extraction

use super::heading::is_scene_heading;
use serde::{Deserialize, Serialize};

/// Number of lines after a heading that feed the excerpt
pub const EXCERPT_LINES: usize = 4;

/// Maximum excerpt length, in characters
pub const EXCERPT_MAX_CHARS: usize = 160;

/// UI-facing summary of one scene heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardCard {
    /// The heading line, trimmed
    pub heading: String,
    /// Up to four following lines joined by a single space, capped at 160 chars
    pub excerpt: String,
    /// 0-based index of the heading line, used for click-to-jump
    pub line: usize,
}

/// Extract storyboard cards from a document, top to bottom.
///
/// Every matching line yields a card. The excerpt takes the next lines
/// verbatim whether or not they are headings themselves. Empty input or
/// a document with no headings gives an empty list.
pub fn extract_scenes(text: &str) -> Vec<StoryboardCard> {
    let lines: Vec<&str> = text.lines().collect();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_scene_heading(line))
        .map(|(idx, line)| {
            let end = (idx + 1 + EXCERPT_LINES).min(lines.len());
            let excerpt = lines[idx + 1..end].join(" ");
            StoryboardCard {
                heading: line.trim().to_string(),
                excerpt: truncate_chars(&excerpt, EXCERPT_MAX_CHARS),
                line: idx,
            }
        })
        .collect()
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_scene() {
        let cards = extract_scenes("INT. HOUSE - DAY\nShe walks in.\nHe waits.\n");
        assert_eq!(
            cards,
            vec![StoryboardCard {
                heading: "INT. HOUSE - DAY".into(),
                excerpt: "She walks in. He waits.".into(),
                line: 0,
            }]
        );
    }

    #[test]
    fn test_empty_and_headingless_input() {
        assert!(extract_scenes("").is_empty());
        assert!(extract_scenes("just prose\nmore prose\n").is_empty());
    }

    #[test]
    fn test_excerpt_takes_at_most_four_lines() {
        let text = "EXT. PARK - DAY\na\nb\nc\nd\ne\nf";
        let cards = extract_scenes(text);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].excerpt, "a b c d");
    }

    #[test]
    fn test_adjacent_headings_are_not_filtered_from_excerpt() {
        let text = "INT. A\nINT. B\nbody";
        let cards = extract_scenes(text);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].excerpt, "INT. B body");
        assert_eq!(cards[1].line, 1);
        assert_eq!(cards[1].excerpt, "body");
    }

    #[test]
    fn test_heading_on_last_line_has_empty_excerpt() {
        let cards = extract_scenes("prose\nFADE OUT.");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].excerpt, "");
        assert_eq!(cards[0].line, 1);
    }

    #[test]
    fn test_heading_is_trimmed_but_excerpt_lines_are_not() {
        let cards = extract_scenes("   INT. LAB - NIGHT  \n  beakers bubble");
        assert_eq!(cards[0].heading, "INT. LAB - NIGHT");
        assert_eq!(cards[0].excerpt, "  beakers bubble");
    }

    #[test]
    fn test_excerpt_truncated_to_160_chars() {
        let long = "x".repeat(300);
        let text = format!("INT. HALL\n{long}");
        let cards = extract_scenes(&text);
        assert_eq!(cards[0].excerpt.chars().count(), EXCERPT_MAX_CHARS);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let accented = "é".repeat(200);
        let text = format!("EXT. PRAIA\n{accented}");
        let cards = extract_scenes(&text);
        assert_eq!(cards[0].excerpt.chars().count(), EXCERPT_MAX_CHARS);
        assert!(cards[0].excerpt.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_crlf_line_endings() {
        let cards = extract_scenes("INT. HOUSE - DAY\r\nShe walks in.\r\n");
        assert_eq!(cards[0].heading, "INT. HOUSE - DAY");
        assert_eq!(cards[0].excerpt, "She walks in.");
    }
}
