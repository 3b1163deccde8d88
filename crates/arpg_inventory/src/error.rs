//! Error types for inventory operations

use arpg_item::ItemId;
use thiserror::Error;

/// Inventory operation errors
///
/// Every expected failure is rejected before any slot mutates; stale
/// quick-use bindings are the one self-healing case and are surfaced as
/// [`InventoryError::StaleBinding`] only after the binding has been cleared.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// Storage slot index outside the slot array
    #[error("invalid slot index: {0}")]
    InvalidSlot(usize),

    /// Quick-use index outside the bar
    #[error("invalid quick-use slot index: {0}")]
    InvalidQuickSlot(usize),

    /// Operation needs a non-empty slot
    #[error("slot {0} is empty")]
    SlotEmpty(usize),

    /// Item ID not present in the catalog
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// Zero or otherwise unusable quantity argument
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Adding would push the carried weight past the limit
    #[error("weight limit exceeded: {current:.2} + {incoming:.2} > {max:.2}")]
    WeightExceeded {
        current: f32,
        incoming: f32,
        max: f32,
    },

    /// Not enough slot room for the requested quantity
    #[error("no room for {overflow} of {item}")]
    CapacityExceeded { item: ItemId, overflow: u32 },

    /// Split requested on an item with a stack cap of 1
    #[error("{0} cannot be split")]
    NotStackable(ItemId),

    /// Transfer target holds a different item
    #[error("target slot holds a different item")]
    IncompatibleItem,

    /// Item category not accepted by the quick-use slot class
    #[error("item category not accepted by this quick-use slot")]
    IncompatibleCategory,

    /// Quick-use slot has no binding
    #[error("quick-use slot {0} is not bound")]
    QuickSlotUnbound(usize),

    /// Quick-use binding no longer matched its storage slot (now cleared)
    #[error("quick-use slot {0} binding was stale")]
    StaleBinding(usize),

    /// Owner policy vetoed the use
    #[error("use of {0} rejected by owner policy")]
    UseRejected(ItemId),

    /// No world placement strategy configured
    #[error("no world placement service configured")]
    PlacementUnavailable,

    /// World placement service refused the drop
    #[error("world placement failed: {0}")]
    PlacementFailed(String),
}

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
