//! Match modes, shot outcomes, events and the public match snapshot.

use serde::{Deserialize, Serialize};

use crate::item::ItemType;
use crate::player::{PlayerId, PlayerPublic};

/// How many seats the match has.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    SinglePlayer,
    #[default]
    TwoPlayer,
}

impl GameMode {
    pub fn player_count(self) -> usize {
        match self {
            GameMode::SinglePlayer => 1,
            GameMode::TwoPlayer => 2,
        }
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single_player" | "solo" | "1" => Ok(GameMode::SinglePlayer),
            "two" | "two_player" | "versus" | "2" => Ok(GameMode::TwoPlayer),
            other => Err(format!("unknown game mode '{}'", other)),
        }
    }
}

/// Who the shooter points the gun at.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShootTarget {
    SelfTarget,
    Opponent,
}

/// Outcome of a single trigger pull.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShootResult {
    SelfSafe,
    SelfHit,
    OpponentSafe,
    OpponentHit,
}

impl ShootResult {
    pub fn new(target: ShootTarget, hit: bool) -> Self {
        match (target, hit) {
            (ShootTarget::SelfTarget, false) => ShootResult::SelfSafe,
            (ShootTarget::SelfTarget, true) => ShootResult::SelfHit,
            (ShootTarget::Opponent, false) => ShootResult::OpponentSafe,
            (ShootTarget::Opponent, true) => ShootResult::OpponentHit,
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(self, ShootResult::SelfHit | ShootResult::OpponentHit)
    }

    pub fn target(self) -> ShootTarget {
        match self {
            ShootResult::SelfSafe | ShootResult::SelfHit => ShootTarget::SelfTarget,
            ShootResult::OpponentSafe | ShootResult::OpponentHit => ShootTarget::Opponent,
        }
    }
}

/// Where the match currently sits in its turn cycle.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// The current player may use items and must shoot.
    AwaitingShot,
    /// A shot was fired; items may still be used before the turn advances.
    AwaitingTurnAdvance { last: ShootResult },
    /// Some player ran out of lives.
    RoundOver,
}

/// Why the turn stayed with the same player.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum KeepReason {
    SinglePlayer,
    DoubleTrigger,
    SelfSafe,
}

/// A single recorded event in the match, oldest first in the log.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchEvent {
    ChambersLoaded {
        loaded: usize,
        total: usize,
    },
    Shot {
        shooter: PlayerId,
        target: PlayerId,
        result: ShootResult,
        damage: i32,
    },
    ItemsGranted {
        player_id: PlayerId,
        items: Vec<ItemType>,
        dropped: usize,
    },
    ItemUsed {
        player_id: PlayerId,
        item: ItemType,
    },
    TurnPassed {
        to: PlayerId,
    },
    TurnKept {
        player_id: PlayerId,
        reason: KeepReason,
    },
    MatchOver {
        winner: Option<PlayerId>,
    },
}

/// Complete public view of the match. Chamber positions stay hidden; only
/// the counts a player could see or work out are exposed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchStatePublic {
    pub mode: GameMode,
    pub players: Vec<PlayerPublic>,
    pub current_player: PlayerId,
    pub round: u32,
    pub phase: Phase,
    pub total_chambers: usize,
    pub remaining_chambers: usize,
    pub loaded_count: usize,
    pub empty_count: usize,
    pub double_trigger_active: bool,
    pub double_damage_active: bool,
    #[serde(default)]
    pub winner: Option<PlayerId>,
    #[serde(default)]
    pub event_log: Vec<MatchEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_tags_follow_target_and_hit() {
        assert_eq!(
            ShootResult::new(ShootTarget::SelfTarget, false),
            ShootResult::SelfSafe
        );
        assert_eq!(
            ShootResult::new(ShootTarget::Opponent, true),
            ShootResult::OpponentHit
        );
        assert!(ShootResult::SelfHit.is_hit());
        assert!(!ShootResult::OpponentSafe.is_hit());
        assert_eq!(ShootResult::OpponentSafe.target(), ShootTarget::Opponent);
    }

    #[test]
    fn mode_parses_common_spellings() {
        assert_eq!("solo".parse::<GameMode>(), Ok(GameMode::SinglePlayer));
        assert_eq!("Two".parse::<GameMode>(), Ok(GameMode::TwoPlayer));
        assert!("three".parse::<GameMode>().is_err());
        assert_eq!(GameMode::TwoPlayer.player_count(), 2);
    }
}
