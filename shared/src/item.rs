//! Item types and their display metadata.

use serde::{Deserialize, Serialize};

/// The four kinds of power-up a player can hold.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// Shuffles the chambers that have not been fired yet.
    ReorderChambers,
    /// Keeps the turn with the current player for one turn change.
    DoubleTrigger,
    /// Restores one life, up to the maximum.
    RestoreLife,
    /// The next hit deals two damage instead of one.
    DoubleDamage,
}

/// Static presentation data for an [`ItemType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub short: &'static str,
}

/// Indexed in the same order as [`ItemType::ALL`].
static ITEM_TABLE: [ItemInfo; 4] = [
    ItemInfo {
        name: "Bullet Order Switcher",
        description: "Changes the order of bullets in the drum",
        icon: "🔄",
        short: "Shuffle",
    },
    ItemInfo {
        name: "Double Trigger",
        description: "Fire twice in the next round",
        icon: "⚡",
        short: "2x Shot",
    },
    ItemInfo {
        name: "Cigarette",
        description: "Restores 1 life (max 5)",
        icon: "🚬",
        short: "+1 Life",
    },
    ItemInfo {
        name: "Double Damage",
        description: "Next shot deals 2 damage",
        icon: "💥",
        short: "2x DMG",
    },
];

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::ReorderChambers,
        ItemType::DoubleTrigger,
        ItemType::RestoreLife,
        ItemType::DoubleDamage,
    ];

    fn index(self) -> usize {
        match self {
            ItemType::ReorderChambers => 0,
            ItemType::DoubleTrigger => 1,
            ItemType::RestoreLife => 2,
            ItemType::DoubleDamage => 3,
        }
    }

    pub fn info(self) -> &'static ItemInfo {
        &ITEM_TABLE[self.index()]
    }
}

/// An item sitting in an inventory slot. Everything but the type is derived.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Item {
    pub kind: ItemType,
}

impl Item {
    pub fn new(kind: ItemType) -> Self {
        Item { kind }
    }

    pub fn name(&self) -> &'static str {
        self.kind.info().name
    }

    pub fn description(&self) -> &'static str {
        self.kind.info().description
    }
}

impl From<ItemType> for Item {
    fn from(kind: ItemType) -> Self {
        Item::new(kind)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lines_up_with_variants() {
        assert_eq!(ItemType::RestoreLife.info().name, "Cigarette");
        assert_eq!(ItemType::DoubleDamage.info().short, "2x DMG");
        for kind in ItemType::ALL {
            assert!(!kind.info().description.is_empty());
        }
    }

    #[test]
    fn item_serializes_as_its_type() {
        let item = Item::new(ItemType::DoubleTrigger);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"kind":"DoubleTrigger"}"#);
    }
}
