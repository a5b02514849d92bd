//! Shared types for the roulette game: items, players, shot outcomes and the
//! public match snapshot handed to front ends.

pub mod game;
pub mod item;
pub mod player;

pub use game::*;
pub use item::*;
pub use player::*;
