//! Cards and their bonus-time clocks.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identifier, unique across rounds
//! - `Card`: Content token, face-up/matched flags, bonus-time bookkeeping

pub mod card;

pub use card::{Card, CardId};
