//! Themes: the content sources decks are built from.
//!
//! ## Key Types
//!
//! - `ThemeId`: Identifier for a built-in theme
//! - `Theme`: Ordered content tokens plus display metadata
//! - `ThemeProvider`: Lookup seam, never fails (unknown ids fall back)
//! - `ThemeLibrary`: Built-in provider

pub mod library;
pub mod theme;

pub use library::{ThemeLibrary, ThemeProvider, DEFAULT_THEME};
pub use theme::{ContentKind, Difficulty, Theme, ThemeId, ThemePalette};
