//! Item stacks

use crate::item::ItemId;
use serde::{Deserialize, Serialize};

/// A quantity of one item type occupying one inventory slot
///
/// A stack is a plain value owned exclusively by its slot; it is never
/// aliased across two slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item ID (references an [`ItemDefinition`](crate::item::ItemDefinition))
    pub item_id: ItemId,
    /// Quantity (always at least 1 while the stack exists)
    pub quantity: u32,
}

impl ItemStack {
    /// Create a new item stack; quantity is clamped to at least 1
    pub fn new(item_id: impl Into<ItemId>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: quantity.max(1),
        }
    }

    /// Check if this stack has been depleted
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// Remaining room below `max_stack`
    pub fn headroom(&self, max_stack: u32) -> u32 {
        max_stack.saturating_sub(self.quantity)
    }

    /// Remove from this stack (returns amount actually removed)
    pub fn remove(&mut self, amount: u32) -> u32 {
        let to_remove = amount.min(self.quantity);
        self.quantity -= to_remove;
        to_remove
    }

    /// Split this stack; requires `0 < amount < quantity`
    pub fn split(&mut self, amount: u32) -> Option<ItemStack> {
        if amount > 0 && amount < self.quantity {
            self.quantity -= amount;
            Some(ItemStack {
                item_id: self.item_id.clone(),
                quantity: amount,
            })
        } else {
            None
        }
    }
}
