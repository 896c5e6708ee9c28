//! Device capability: how many pairs a display can show comfortably.
//!
//! The engine never measures screens. Hosts describe their display with a
//! `DisplayProfile` (or implement `DeviceCapability` themselves) and the
//! engine consumes the resulting integer.

use serde::{Deserialize, Serialize};

/// Reports the largest number of pairs the host display can hold.
pub trait DeviceCapability {
    /// Always at least 1.
    fn pair_limit(&self) -> usize;
}

/// A capability pinned to a fixed value, for tests and configuration
/// overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedPairLimit(pub usize);

impl DeviceCapability for FixedPairLimit {
    fn pair_limit(&self) -> usize {
        self.0.max(1)
    }
}

/// Broad device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceIdiom {
    Phone,
    Tablet,
    Desktop,
}

/// Display description supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayProfile {
    pub idiom: DeviceIdiom,
    /// Longest screen side in points.
    pub longest_side: f64,
}

impl DisplayProfile {
    #[must_use]
    pub fn phone(longest_side: f64) -> Self {
        Self {
            idiom: DeviceIdiom::Phone,
            longest_side,
        }
    }

    #[must_use]
    pub fn tablet() -> Self {
        Self {
            idiom: DeviceIdiom::Tablet,
            longest_side: 0.0,
        }
    }

    #[must_use]
    pub fn desktop() -> Self {
        Self {
            idiom: DeviceIdiom::Desktop,
            longest_side: 0.0,
        }
    }
}

impl DeviceCapability for DisplayProfile {
    fn pair_limit(&self) -> usize {
        match self.idiom {
            DeviceIdiom::Tablet => 10,
            DeviceIdiom::Desktop => 8,
            DeviceIdiom::Phone => match self.longest_side {
                side if side < 650.0 => 5,
                side if side < 780.0 => 6,
                side if side < 900.0 => 7,
                _ => 8,
            },
        }
    }
}
