//! Inventory change events

use arpg_item::{ItemId, ItemStack};

/// Events published after each mutation step
///
/// Dispatch is synchronous and happens only once the step's invariants
/// hold, so handlers always observe a consistent payload.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryEvent {
    /// Storage slot contents changed
    SlotChanged {
        slot: usize,
        contents: Option<ItemStack>,
    },
    /// A sub-stack was placed into storage
    ItemAdded {
        slot: usize,
        item_id: ItemId,
        quantity: u32,
    },
    /// A quantity was removed from storage
    ItemRemoved {
        slot: usize,
        item_id: ItemId,
        quantity: u32,
    },
    /// An item was activated
    ItemUsed { slot: usize, item_id: ItemId },
    /// Quick-use binding changed; contents snapshot the referenced stack
    QuickSlotChanged {
        slot: usize,
        contents: Option<ItemStack>,
    },
}
