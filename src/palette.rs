//! Insertion palette offered on blank lines
//!
//! The palette is data: an ordered list of labelled snippets. Showing and
//! positioning it is up to the UI.

use crate::settings::Settings;
use serde::Serialize;
use PaletteGroup::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteGroup {
    SceneHeadings,
    ActionAndDialogue,
    Transitions,
    Shots,
    Supers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub label: &'static str,
    pub insert: &'static str,
    pub group: PaletteGroup,
}

const fn entry(group: PaletteGroup, label: &'static str, insert: &'static str) -> PaletteEntry {
    PaletteEntry {
        label,
        insert,
        group,
    }
}

pub const PALETTE: &[PaletteEntry] = &[
    entry(SceneHeadings, "Scene Heading", "INT./EXT. LOCAL - DIA/NOITE\n"),
    entry(SceneHeadings, "INT.", "INT. LOCAL - DIA\n"),
    entry(SceneHeadings, "EXT.", "EXT. LOCAL - NOITE\n"),
    entry(SceneHeadings, "ESTABLISHING", "ESTABLISHING SHOT - LOCAL\n"),
    entry(ActionAndDialogue, "Description", "Ação/Descrição\n"),
    entry(ActionAndDialogue, "Character", "PERSONAGEM\n"),
    entry(ActionAndDialogue, "Parenthetical", "(parenthetical)\n"),
    entry(ActionAndDialogue, "Dialogue", "Diálogo.\n"),
    entry(ActionAndDialogue, "V.O.", "(V.O.)\n"),
    entry(ActionAndDialogue, "O.S.", "(O.S.)\n"),
    entry(ActionAndDialogue, "CONT'D", "(CONT'D)\n"),
    entry(Transitions, "Transition", "TRANSIÇÃO: CUT TO:\n"),
    entry(Transitions, "SMASH CUT:", "SMASH CUT:\n"),
    entry(Transitions, "MATCH CUT:", "MATCH CUT:\n"),
    entry(Transitions, "DISSOLVE TO:", "DISSOLVE TO:\n"),
    entry(Transitions, "FADE IN:", "FADE IN:\n"),
    entry(Transitions, "FADE OUT:", "FADE OUT.\n"),
    entry(Shots, "SHOT", "SHOT:\n"),
    entry(Shots, "CLOSE UP", "CLOSE UP:\n"),
    entry(Shots, "WIDE", "WIDE SHOT:\n"),
    entry(Shots, "POV", "POV:\n"),
    entry(Shots, "OVER THE SHOULDER", "OVER THE SHOULDER:\n"),
    entry(Shots, "INSERT", "INSERT:\n"),
    entry(Shots, "INTERCUT", "INTERCUT:\n"),
    entry(Supers, "SUPER:", "SUPER: TÍTULO NA TELA\n"),
];

/// The palette to offer for the current line, if any.
///
/// Only blank lines get a palette, and only when enabled in settings.
pub fn palette_for_line(line: &str, settings: &Settings) -> Option<&'static [PaletteEntry]> {
    if settings.show_context_menu && line.trim().is_empty() {
        Some(PALETTE)
    } else {
        None
    }
}

impl PaletteEntry {
    /// Insert this entry at the start of line `line` (0-based) of `text`.
    ///
    /// A line index past the end appends the snippet on a new last line.
    pub fn apply(&self, text: &str, line: usize) -> String {
        let offset = line_start(text, line);
        let mut out = String::with_capacity(text.len() + self.insert.len() + 1);
        match offset {
            Some(offset) => {
                out.push_str(&text[..offset]);
                out.push_str(self.insert);
                out.push_str(&text[offset..]);
            }
            None => {
                out.push_str(text);
                if !text.is_empty() && !text.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(self.insert);
            }
        }
        out
    }
}

/// Byte offset where line `line` starts, `None` past the last line
fn line_start(text: &str, line: usize) -> Option<usize> {
    if line == 0 {
        return Some(0);
    }
    text.match_indices('\n')
        .nth(line - 1)
        .map(|(idx, _)| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storyboard::is_scene_heading;

    #[test]
    fn test_palette_only_on_blank_lines() {
        let settings = Settings::default();
        assert!(palette_for_line("", &settings).is_some());
        assert!(palette_for_line("   \t", &settings).is_some());
        assert!(palette_for_line("She walks in.", &settings).is_none());
    }

    #[test]
    fn test_palette_disabled_in_settings() {
        let settings = Settings {
            show_context_menu: false,
            ..Settings::default()
        };
        assert!(palette_for_line("", &settings).is_none());
    }

    #[test]
    fn test_scene_heading_entries_are_detected_as_headings() {
        for entry in PALETTE.iter().filter(|e| e.group == PaletteGroup::SceneHeadings) {
            assert!(is_scene_heading(entry.insert), "{}", entry.label);
        }
    }

    #[test]
    fn test_apply_inserts_at_line_start() {
        let int = PALETTE.iter().find(|e| e.label == "INT.").unwrap();
        assert_eq!(int.apply("Title\n\nend", 1), "Title\nINT. LOCAL - DIA\n\nend");
        assert_eq!(int.apply("", 0), "INT. LOCAL - DIA\n");
    }

    #[test]
    fn test_apply_past_end_appends() {
        let pov = PALETTE.iter().find(|e| e.label == "POV").unwrap();
        assert_eq!(pov.apply("one", 4), "one\nPOV:\n");
        assert_eq!(pov.apply("one\n", 1), "one\nPOV:\n");
    }
}
