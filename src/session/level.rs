//! Level definitions and the default campaign.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config::duration_secs;
use crate::core::error::{MatchError, Result};
use crate::themes::ThemeId;

/// Optional per-level rule tags. The engine carries them for the host to
/// act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialRule {
    /// Highlight the partner of a mismatched card.
    MismatchHint,
    /// Offer the mid-round shuffle.
    RandomShuffle,
}

/// One level of a campaign. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    level_number: u32,
    theme_id: ThemeId,
    #[serde(with = "duration_secs")]
    bonus_time_limit: Duration,
    #[serde(default)]
    special_rules: Vec<SpecialRule>,
    title: String,
}

impl LevelConfig {
    pub fn new(
        level_number: u32,
        theme_id: ThemeId,
        bonus_time_limit: Duration,
        title: impl Into<String>,
    ) -> Self {
        Self {
            level_number,
            theme_id,
            bonus_time_limit,
            special_rules: Vec::new(),
            title: title.into(),
        }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: SpecialRule) -> Self {
        if !self.special_rules.contains(&rule) {
            self.special_rules.push(rule);
        }
        self
    }

    /// 1-based position in the campaign.
    #[must_use]
    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    #[must_use]
    pub fn theme_id(&self) -> ThemeId {
        self.theme_id
    }

    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    #[must_use]
    pub fn special_rules(&self) -> &[SpecialRule] {
        &self.special_rules
    }

    #[must_use]
    pub fn has_rule(&self, rule: SpecialRule) -> bool {
        self.special_rules.contains(&rule)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// The built-in five-level campaign.
#[must_use]
pub fn default_campaign() -> Vec<LevelConfig> {
    vec![
        LevelConfig::new(1, ThemeId::FriendlyCars, Duration::from_secs(8), "Friendly Cars")
            .with_rule(SpecialRule::MismatchHint),
        LevelConfig::new(2, ThemeId::RainbowNumbers, Duration::from_secs(7), "Rainbow Numbers"),
        LevelConfig::new(3, ThemeId::LetterLab, Duration::from_secs(6), "Letter Lab"),
        LevelConfig::new(4, ThemeId::TinyWords, Duration::from_secs(6), "Tiny Words")
            .with_rule(SpecialRule::RandomShuffle),
        LevelConfig::new(5, ThemeId::AdventureMix, Duration::from_secs(5), "Adventure Mix")
            .with_rule(SpecialRule::RandomShuffle),
    ]
}

/// A campaign must be non-empty and numbered `1..=n` in order.
pub fn validate_campaign(levels: &[LevelConfig]) -> Result<()> {
    if levels.is_empty() {
        return Err(MatchError::EmptyCampaign);
    }
    for (index, level) in levels.iter().enumerate() {
        let expected = index as u32 + 1;
        if level.level_number != expected {
            return Err(MatchError::LevelNumbering {
                index,
                expected,
                found: level.level_number,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_campaign_shape() {
        let campaign = default_campaign();
        assert_eq!(campaign.len(), 5);
        assert!(validate_campaign(&campaign).is_ok());

        let limits: Vec<_> = campaign.iter().map(|l| l.bonus_time_limit().as_secs()).collect();
        assert_eq!(limits, vec![8, 7, 6, 6, 5]);

        assert!(campaign[0].has_rule(SpecialRule::MismatchHint));
        assert!(campaign[3].has_rule(SpecialRule::RandomShuffle));
        assert!(campaign[1].special_rules().is_empty());
    }

    #[test]
    fn test_with_rule_is_deduplicated() {
        let level = LevelConfig::new(1, ThemeId::LetterLab, Duration::from_secs(6), "Letters")
            .with_rule(SpecialRule::RandomShuffle)
            .with_rule(SpecialRule::RandomShuffle);
        assert_eq!(level.special_rules(), &[SpecialRule::RandomShuffle]);
    }

    #[test]
    fn test_validate_rejects_gaps() {
        let levels = vec![
            LevelConfig::new(1, ThemeId::FriendlyCars, Duration::from_secs(8), "One"),
            LevelConfig::new(3, ThemeId::TinyWords, Duration::from_secs(6), "Three"),
        ];
        assert!(matches!(
            validate_campaign(&levels),
            Err(MatchError::LevelNumbering { index: 1, expected: 2, found: 3 })
        ));
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(matches!(validate_campaign(&[]), Err(MatchError::EmptyCampaign)));
    }

    #[test]
    fn test_level_serde() {
        let level = LevelConfig::new(2, ThemeId::RainbowNumbers, Duration::from_millis(7500), "Numbers")
            .with_rule(SpecialRule::MismatchHint);
        let json = serde_json::to_string(&level).unwrap();
        assert!(json.contains("\"bonus_time_limit\":7.5"));
        assert!(json.contains("\"mismatch_hint\""));

        let restored: LevelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, level);
    }
}
