//! Item identity and static item definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable item identifier, unique within a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Potions, food, anything consumed on use
    Consumable,
    /// Weapons and armor
    Equipment,
    /// Items that grant skills
    SkillItem,
    /// Stones that empower skills
    SkillStone,
    /// Cores harvested from beasts
    BeastCore,
    /// Everything else
    Misc,
}

impl Default for ItemCategory {
    fn default() -> Self {
        Self::Misc
    }
}

/// Item rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemRarity {
    /// Common items
    Common,
    /// Uncommon items
    Uncommon,
    /// Rare items
    Rare,
    /// Epic items
    Epic,
    /// Legendary items
    Legendary,
}

impl Default for ItemRarity {
    fn default() -> Self {
        Self::Common
    }
}

/// Static item definition
///
/// Owned by the catalog and shared read-only; per-slot state lives in
/// [`ItemStack`](crate::stack::ItemStack).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Unique identifier
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Category
    #[serde(default)]
    pub category: ItemCategory,
    /// Rarity
    #[serde(default)]
    pub rarity: ItemRarity,
    /// Maximum stack size (1 = not stackable)
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    /// Weight per unit
    #[serde(default)]
    pub weight: f32,
    /// Base value/price
    #[serde(default)]
    pub value: u32,
    /// Icon path
    #[serde(default)]
    pub icon: String,
    /// World model path (for dropped items)
    #[serde(default)]
    pub model: String,
}

fn default_max_stack() -> u32 {
    1
}

impl ItemDefinition {
    /// Create a new item definition
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: ItemCategory::default(),
            rarity: ItemRarity::default(),
            max_stack: 1,
            weight: 0.0,
            value: 0,
            icon: String::new(),
            model: String::new(),
        }
    }

    /// Set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set category
    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = category;
        self
    }

    /// Set rarity
    pub fn with_rarity(mut self, rarity: ItemRarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set max stack size (clamped to at least 1)
    pub fn with_max_stack(mut self, max: u32) -> Self {
        self.max_stack = max.max(1);
        self
    }

    /// Set weight per unit (negative weights are clamped to 0)
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight.max(0.0);
        self
    }

    /// Set value
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    /// Set icon path
    pub fn with_icon(mut self, path: impl Into<String>) -> Self {
        self.icon = path.into();
        self
    }

    /// Set world model path
    pub fn with_model(mut self, path: impl Into<String>) -> Self {
        self.model = path.into();
        self
    }

    /// Check if stackable
    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }
}
