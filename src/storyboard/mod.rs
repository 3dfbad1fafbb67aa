//! Scene-based storyboard extraction
//!
//! Scans a document's lines, classifies scene headings and produces one
//! [`StoryboardCard`] per heading, in document order. Cards are derived
//! data: recompute them on every render, never persist them.
//!
//! # Example
//!
//! ```
//! use screenwright::storyboard::extract_scenes;
//!
//! let cards = extract_scenes("INT. HOUSE - DAY\nShe walks in.\nHe waits.\n");
//! assert_eq!(cards.len(), 1);
//! assert_eq!(cards[0].excerpt, "She walks in. He waits.");
//! ```

mod extract;
mod heading;

pub use extract::{extract_scenes, StoryboardCard, EXCERPT_LINES, EXCERPT_MAX_CHARS};
pub use heading::{is_scene_heading, HeadingPattern, SCENE_HEADING_PATTERNS};
