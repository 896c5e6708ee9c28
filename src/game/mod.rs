//! Game facade tying the session, deck building and the round together.

mod memory_game;

pub use memory_game::{MemoryGame, MemoryGameBuilder};
