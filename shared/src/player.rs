//! Player identifiers and the public view of a player.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Seat index of a player in the match (0 or 1).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PlayerId(pub usize);

impl From<usize> for PlayerId {
    fn from(v: usize) -> Self {
        PlayerId(v)
    }
}

impl From<PlayerId> for usize {
    fn from(player_id: PlayerId) -> Self {
        player_id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a player as shown to the presentation layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub name: String,
    pub lives: i32,
    pub max_lives: i32,
    pub items: Vec<Option<Item>>,
    pub rounds_survived: u32,
}

impl PlayerPublic {
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}
