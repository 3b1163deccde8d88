//! World-drop bridge

use crate::error::{InventoryError, Result};
use crate::inventory::Inventory;
use arpg_item::ItemDefinition;
use thiserror::Error;

/// Failure reported by a placement strategy
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct PlacementError(pub String);

impl PlacementError {
    /// Create a new placement error
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Strategy that materializes dropped stacks in the world
///
/// Configured once at construction; implementations typically dispatch on
/// the item's category to pick the world representation.
pub trait WorldPlacement {
    /// Place `quantity` of `item` at `position`
    fn place(
        &mut self,
        item: &ItemDefinition,
        quantity: u32,
        position: [f32; 3],
    ) -> std::result::Result<(), PlacementError>;
}

impl Inventory {
    /// Drop part of a slot into the world
    ///
    /// The quantity is clamped to the slot contents, so an out-of-range
    /// request drops the whole slot. The placement strategy must confirm
    /// before the slot is reduced; a placement failure leaves the inventory
    /// untouched. Returns the dropped amount.
    pub fn drop_item_to_world(
        &mut self,
        slot: usize,
        quantity: u32,
        position: [f32; 3],
    ) -> Result<u32> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        let stack = self
            .slots
            .get(slot)
            .ok_or(InventoryError::InvalidSlot(slot))?
            .as_ref()
            .ok_or(InventoryError::SlotEmpty(slot))?;
        let drop_quantity = quantity.min(stack.quantity);
        let item_id = stack.item_id.clone();
        let def = self.definition(&item_id)?;

        let placement = self
            .placement
            .as_mut()
            .ok_or(InventoryError::PlacementUnavailable)?;
        placement
            .place(&def, drop_quantity, position)
            .map_err(|err| {
                log::warn!("drop_item_to_world: placement refused {}: {}", item_id, err);
                InventoryError::PlacementFailed(err.to_string())
            })?;

        // Placement confirmed; now the matching removal
        self.remove_item(slot, drop_quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{Inventory, InventoryConfig};
    use arpg_item::{ItemCatalog, ItemCategory, ItemDefinition, ItemId};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    struct RecordingPlacement {
        placed: Rc<RefCell<Vec<(String, u32, [f32; 3])>>>,
    }

    impl WorldPlacement for RecordingPlacement {
        fn place(
            &mut self,
            item: &ItemDefinition,
            quantity: u32,
            position: [f32; 3],
        ) -> std::result::Result<(), PlacementError> {
            self.placed
                .borrow_mut()
                .push((item.id.to_string(), quantity, position));
            Ok(())
        }
    }

    struct RefusingPlacement;

    impl WorldPlacement for RefusingPlacement {
        fn place(
            &mut self,
            _item: &ItemDefinition,
            _quantity: u32,
            _position: [f32; 3],
        ) -> std::result::Result<(), PlacementError> {
            Err(PlacementError::new("no ground below"))
        }
    }

    fn catalog() -> Arc<ItemCatalog> {
        let mut catalog = ItemCatalog::new();
        catalog
            .register(
                ItemDefinition::new("beast_core", "Beast Core")
                    .with_category(ItemCategory::BeastCore)
                    .with_max_stack(20),
            )
            .unwrap();
        Arc::new(catalog)
    }

    #[test]
    fn test_drop_removes_after_placement() {
        let placed = Rc::new(RefCell::new(Vec::new()));
        let mut inv = Inventory::new(catalog(), InventoryConfig::default())
            .with_world_placement(RecordingPlacement {
                placed: placed.clone(),
            });
        let core: ItemId = "beast_core".into();

        inv.add_item(&core, 10).unwrap();
        let dropped = inv.drop_item_to_world(0, 4, [1.0, 0.0, 2.0]).unwrap();

        assert_eq!(dropped, 4);
        assert_eq!(inv.slot(0).unwrap().quantity, 6);
        assert_eq!(
            *placed.borrow(),
            vec![("beast_core".to_string(), 4, [1.0, 0.0, 2.0])]
        );
    }

    #[test]
    fn test_drop_clamps_to_slot_contents() {
        let placed = Rc::new(RefCell::new(Vec::new()));
        let mut inv = Inventory::new(catalog(), InventoryConfig::default())
            .with_world_placement(RecordingPlacement {
                placed: placed.clone(),
            });
        let core: ItemId = "beast_core".into();

        inv.add_item(&core, 3).unwrap();
        let dropped = inv.drop_item_to_world(0, 99, [0.0; 3]).unwrap();

        assert_eq!(dropped, 3);
        assert!(inv.slot(0).is_none());
    }

    #[test]
    fn test_failed_placement_keeps_slot() {
        let mut inv = Inventory::new(catalog(), InventoryConfig::default())
            .with_world_placement(RefusingPlacement);
        let core: ItemId = "beast_core".into();

        inv.add_item(&core, 10).unwrap();
        let result = inv.drop_item_to_world(0, 4, [0.0; 3]);

        assert!(matches!(result, Err(InventoryError::PlacementFailed(_))));
        assert_eq!(inv.slot(0).unwrap().quantity, 10);
    }

    #[test]
    fn test_drop_without_placement_service() {
        let mut inv = Inventory::new(catalog(), InventoryConfig::default());
        let core: ItemId = "beast_core".into();

        inv.add_item(&core, 10).unwrap();
        let result = inv.drop_item_to_world(0, 4, [0.0; 3]);

        assert!(matches!(
            result,
            Err(InventoryError::PlacementUnavailable)
        ));
        assert_eq!(inv.slot(0).unwrap().quantity, 10);
    }
}
