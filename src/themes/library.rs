//! Theme lookup.
//!
//! `ThemeProvider` is the seam between the engine and whatever owns theme
//! assets. `ThemeLibrary` is the built-in provider with six themes.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::theme::{ContentKind, Difficulty, Theme, ThemeId, ThemePalette};

/// Supplies content tokens and display metadata for a theme id.
///
/// Implementations never fail: an id they do not know resolves to a
/// default theme.
pub trait ThemeProvider {
    fn content_for(&self, id: ThemeId) -> &Theme;
}

/// Theme used when an id is not registered.
pub const DEFAULT_THEME: ThemeId = ThemeId::FriendlyCars;

/// Built-in theme registry.
///
/// ```
/// use memory_match::themes::{ThemeId, ThemeLibrary, ThemeProvider};
///
/// let library = ThemeLibrary::new();
/// let theme = library.content_for(ThemeId::RainbowNumbers);
/// assert_eq!(theme.content.len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct ThemeLibrary {
    themes: FxHashMap<ThemeId, Theme>,
    fallback: Theme,
}

impl ThemeLibrary {
    /// Library with every built-in theme.
    #[must_use]
    pub fn new() -> Self {
        let mut themes = FxHashMap::default();
        for theme in builtin_themes() {
            themes.insert(theme.id, theme);
        }
        Self {
            themes,
            fallback: friendly_cars(),
        }
    }

    /// Library containing only the fallback theme.
    #[must_use]
    pub fn fallback_only() -> Self {
        let fallback = friendly_cars();
        let mut themes = FxHashMap::default();
        themes.insert(fallback.id, fallback.clone());
        Self { themes, fallback }
    }

    /// Add or replace a theme.
    pub fn register(&mut self, theme: Theme) {
        if theme.id == DEFAULT_THEME {
            self.fallback = theme.clone();
        }
        self.themes.insert(theme.id, theme);
    }

    #[must_use]
    pub fn contains(&self, id: ThemeId) -> bool {
        self.themes.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }
}

impl Default for ThemeLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeProvider for ThemeLibrary {
    fn content_for(&self, id: ThemeId) -> &Theme {
        match self.themes.get(&id) {
            Some(theme) => theme,
            None => {
                debug!(theme = %id, fallback = %DEFAULT_THEME, "unknown theme, using fallback");
                &self.fallback
            }
        }
    }
}

fn friendly_cars() -> Theme {
    Theme::new(
        ThemeId::FriendlyCars,
        ["🚗", "🚕", "🚙", "🚌", "🚎", "🏎", "🚓", "🚑"],
    )
    .with_kind(ContentKind::Emoji)
    .with_difficulty(Difficulty::Easy)
    .with_palette(ThemePalette::new("#ff3b30", "#ff9500", "#fff2e6"))
    .with_sound("siren")
}

fn builtin_themes() -> Vec<Theme> {
    vec![
        friendly_cars(),
        Theme::new(
            ThemeId::RainbowNumbers,
            ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
        )
        .with_kind(ContentKind::Number)
        .with_difficulty(Difficulty::Easy)
        .with_palette(ThemePalette::new("#007aff", "#af52de", "#e6f2ff"))
        .with_sound("chime"),
        Theme::new(
            ThemeId::LetterLab,
            ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"],
        )
        .with_kind(ContentKind::Letter)
        .with_difficulty(Difficulty::Medium)
        .with_palette(ThemePalette::new("#34c759", "#b3f2cc", "#f0fff0"))
        .with_sound("sparkle"),
        Theme::new(
            ThemeId::TinyWords,
            ["cat", "sun", "map", "hat", "dog", "car", "bug", "cup"],
        )
        .with_kind(ContentKind::Word)
        .with_difficulty(Difficulty::Medium)
        .with_palette(ThemePalette::new("#ff2d55", "#ffcc00", "#ffebf5"))
        .with_sound("pageFlip"),
        Theme::new(
            ThemeId::AdventureMix,
            ["🚀", "🦊", "7", "Q", "ship", "hero", "kite", "ring"],
        )
        .with_kind(ContentKind::Word)
        .with_difficulty(Difficulty::Hard)
        .with_palette(ThemePalette::new("#4d3399", "#1a8080", "#ebedff"))
        .with_sound("whoosh"),
        Theme::new(
            ThemeId::JungleDiscovery,
            ["🦁", "🐯", "🐵", "🦓", "🦒", "🐼", "🦜", "🐘"],
        )
        .with_kind(ContentKind::Emoji)
        .with_difficulty(Difficulty::Easy)
        .with_palette(ThemePalette::new("#8c5933", "#34c759", "#edfae6"))
        .with_sound("growl"),
    ]
}
