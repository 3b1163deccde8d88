//! ActionRPG Inventory - Slot Storage and Quick-Use Bar
//!
//! This crate provides the item-storage core for a single actor.
//!
//! # Features
//!
//! - Fixed-capacity slot array with per-item stack caps and a weight limit
//! - Stacking placement: partial stacks absorb first, then empty slots
//! - Transactional adds: weight and room are verified before any slot mutates
//! - 10-slot quick-use bar bound to storage by index, with automatic
//!   invalidation of stale bindings
//! - Stack splitting and slot-to-slot transfer
//! - World drops through a pluggable placement strategy, removed only after
//!   placement confirms
//! - Synchronous change events for presentation layers
//!
//! # Example
//!
//! ```ignore
//! use arpg_inventory::prelude::*;
//! use arpg_item::prelude::*;
//! use std::sync::Arc;
//!
//! let mut catalog = ItemCatalog::new();
//! catalog.register(
//!     ItemDefinition::new("health_potion", "Health Potion")
//!         .with_category(ItemCategory::Consumable)
//!         .with_max_stack(10)
//!         .with_weight(0.5),
//! )?;
//!
//! let mut inventory = Inventory::new(Arc::new(catalog), InventoryConfig::default());
//! inventory.add_item(&"health_potion".into(), 3)?;
//! inventory.assign_to_quick_slot(0, 9)?;
//! inventory.use_quick_slot(9)?;
//! ```

pub mod error;
pub mod events;
pub mod inventory;
pub mod policy;
pub mod quickuse;
pub mod world;

mod transfer;

pub mod prelude {
    pub use crate::error::{InventoryError, Result};
    pub use crate::events::InventoryEvent;
    pub use crate::inventory::{Inventory, InventoryConfig};
    pub use crate::policy::UsePolicy;
    pub use crate::quickuse::{
        QuickBinding, QuickSlotClass, QuickUseSlot, QUICK_SLOT_COUNT, SKILL_SLOT_COUNT,
    };
    pub use crate::world::{PlacementError, WorldPlacement};
}

pub use prelude::*;
