//! Theme definitions: content tokens plus display metadata.

use serde::{Deserialize, Serialize};

/// Identifier for a built-in theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeId {
    FriendlyCars,
    RainbowNumbers,
    LetterLab,
    TinyWords,
    AdventureMix,
    JungleDiscovery,
}

impl ThemeId {
    /// Every theme id, in library order.
    pub const ALL: [ThemeId; 6] = [
        ThemeId::FriendlyCars,
        ThemeId::RainbowNumbers,
        ThemeId::LetterLab,
        ThemeId::TinyWords,
        ThemeId::AdventureMix,
        ThemeId::JungleDiscovery,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ThemeId::FriendlyCars => "Friendly Cars",
            ThemeId::RainbowNumbers => "Rainbow Numbers",
            ThemeId::LetterLab => "Letter Lab",
            ThemeId::TinyWords => "Tiny Words",
            ThemeId::AdventureMix => "Adventure Mix",
            ThemeId::JungleDiscovery => "Jungle Discovery",
        }
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What kind of tokens a theme deals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Emoji,
    Number,
    Letter,
    Word,
}

/// Rough difficulty tag shown alongside the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Colors as `#rrggbb` strings. The engine never interprets them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
}

impl ThemePalette {
    #[must_use]
    pub fn new(primary: &str, secondary: &str, background: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            background: background.to_string(),
        }
    }
}

/// A content source for decks.
///
/// `content` is ordered; the deck builder draws pairs from a shuffled copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    pub display_name: String,
    pub content: Vec<String>,
    pub content_kind: ContentKind,
    pub difficulty: Difficulty,
    pub palette: ThemePalette,
    pub sound_effect: Option<String>,
}

impl Theme {
    /// Create a theme from its tokens. Metadata defaults can be
    /// overridden with the `with_*` methods.
    pub fn new<I, S>(id: ThemeId, content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            display_name: id.name().to_string(),
            content: content.into_iter().map(Into::into).collect(),
            content_kind: ContentKind::Emoji,
            difficulty: Difficulty::Easy,
            palette: ThemePalette::new("#000000", "#808080", "#ffffff"),
            sound_effect: None,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.content_kind = kind;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ThemePalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound_effect = Some(sound.into());
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Number of distinct tokens available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_builder() {
        let theme = Theme::new(ThemeId::TinyWords, ["cat", "sun"])
            .with_kind(ContentKind::Word)
            .with_difficulty(Difficulty::Medium)
            .with_sound("pageFlip");

        assert_eq!(theme.display_name, "Tiny Words");
        assert_eq!(theme.len(), 2);
        assert_eq!(theme.content_kind, ContentKind::Word);
        assert_eq!(theme.sound_effect.as_deref(), Some("pageFlip"));
    }

    #[test]
    fn test_theme_id_serde_names() {
        let json = serde_json::to_string(&ThemeId::JungleDiscovery).unwrap();
        assert_eq!(json, "\"jungle_discovery\"");
        let id: ThemeId = serde_json::from_str("\"letter_lab\"").unwrap();
        assert_eq!(id, ThemeId::LetterLab);
    }
}
