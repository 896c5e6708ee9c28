//! Card density: how many pairs a round deals.
//!
//! `DeviceCapability` reports a display's pair limit; `admissible_pair_count`
//! clamps it against the size of the theme being dealt.

pub mod advisor;
pub mod capability;

pub use advisor::{admissible_pair_count, pair_count_for};
pub use capability::{DeviceCapability, DeviceIdiom, DisplayProfile, FixedPairLimit};
