//! Deck building: turns a theme's tokens into a shuffled set of pairs.

pub mod builder;

pub use builder::DeckBuilder;
