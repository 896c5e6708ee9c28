//! Pair-count policy.

use crate::session::LevelConfig;
use crate::themes::ThemeProvider;

/// Pairs to deal given a device limit and the size of a theme.
///
/// The result is never zero and never exceeds either input (unless an input
/// is zero, in which case one pair is still dealt).
///
/// ```
/// use memory_match::density::admissible_pair_count;
///
/// assert_eq!(admissible_pair_count(5, 8), 5);
/// assert_eq!(admissible_pair_count(10, 8), 8);
/// assert_eq!(admissible_pair_count(0, 8), 1);
/// ```
#[must_use]
pub fn admissible_pair_count(device_limit: usize, theme_content_size: usize) -> usize {
    device_limit.min(theme_content_size).max(1)
}

/// Pairs to deal for `level` on a device with `device_limit`.
pub fn pair_count_for(level: &LevelConfig, themes: &dyn ThemeProvider, device_limit: usize) -> usize {
    let theme = themes.content_for(level.theme_id());
    admissible_pair_count(device_limit, theme.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::default_campaign;
    use crate::themes::ThemeLibrary;

    #[test]
    fn test_clamps_to_smaller_input() {
        assert_eq!(admissible_pair_count(5, 8), 5);
        assert_eq!(admissible_pair_count(8, 5), 5);
        assert_eq!(admissible_pair_count(7, 7), 7);
    }

    #[test]
    fn test_never_zero() {
        assert_eq!(admissible_pair_count(0, 0), 1);
        assert_eq!(admissible_pair_count(3, 0), 1);
    }

    #[test]
    fn test_pair_count_for_default_campaign() {
        let library = ThemeLibrary::new();
        let campaign = default_campaign();

        let counts: Vec<_> = campaign
            .iter()
            .map(|level| pair_count_for(level, &library, 10))
            .collect();

        // Cars 8, Numbers 10, Letters 12 (capped), Words 8, Mix 8
        assert_eq!(counts, vec![8, 10, 10, 8, 8]);
    }

    #[test]
    fn test_small_device_limits_every_level() {
        let library = ThemeLibrary::new();
        for level in default_campaign() {
            assert_eq!(pair_count_for(&level, &library, 4), 4);
        }
    }
}
