//! Stack splitting between storage slots

use crate::error::{InventoryError, Result};
use crate::events::InventoryEvent;
use crate::inventory::Inventory;

impl Inventory {
    /// Split part of a stack into the first empty slot
    ///
    /// Returns the quantity actually moved. Fails if no empty slot exists.
    pub fn split_stack(&mut self, slot: usize, split_quantity: u32) -> Result<u32> {
        let source = self
            .slots
            .get(slot)
            .ok_or(InventoryError::InvalidSlot(slot))?
            .as_ref()
            .ok_or(InventoryError::SlotEmpty(slot))?;
        let item_id = source.item_id.clone();

        let target = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(InventoryError::CapacityExceeded {
                item: item_id,
                overflow: split_quantity,
            })?;

        self.split_stack_to_slot(slot, target, split_quantity)
    }

    /// Split part of a stack into a chosen slot
    ///
    /// Requires `0 < split_quantity < source quantity` and a stackable
    /// item. An empty target receives a new stack; a same-item target
    /// absorbs up to its headroom (the transfer may move less than
    /// requested - the return value is the amount that moved); a target
    /// holding a different item fails with nothing changed.
    pub fn split_stack_to_slot(
        &mut self,
        source: usize,
        target: usize,
        split_quantity: u32,
    ) -> Result<u32> {
        let len = self.slots.len();
        if source >= len {
            return Err(InventoryError::InvalidSlot(source));
        }
        if target >= len || target == source {
            return Err(InventoryError::InvalidSlot(target));
        }

        let source_stack = self.slots[source]
            .as_ref()
            .ok_or(InventoryError::SlotEmpty(source))?;
        if split_quantity == 0 || split_quantity >= source_stack.quantity {
            return Err(InventoryError::InvalidQuantity(split_quantity));
        }
        let item_id = source_stack.item_id.clone();
        let def = self.definition(&item_id)?;
        if !def.is_stackable() {
            return Err(InventoryError::NotStackable(item_id));
        }

        let moved = match &self.slots[target] {
            None => split_quantity,
            Some(existing) if existing.item_id == item_id => {
                let headroom = existing.headroom(def.max_stack);
                if headroom == 0 {
                    return Err(InventoryError::CapacityExceeded {
                        item: item_id,
                        overflow: split_quantity,
                    });
                }
                split_quantity.min(headroom)
            }
            Some(_) => return Err(InventoryError::IncompatibleItem),
        };

        // moved < source quantity, so the detach cannot empty the source
        let piece = self.slots[source]
            .as_mut()
            .and_then(|stack| stack.split(moved))
            .ok_or(InventoryError::InvalidQuantity(split_quantity))?;
        match &mut self.slots[target] {
            Some(existing) => existing.quantity += piece.quantity,
            empty @ None => *empty = Some(piece),
        }

        self.emit(InventoryEvent::SlotChanged {
            slot: source,
            contents: self.slots[source].clone(),
        });
        self.emit(InventoryEvent::SlotChanged {
            slot: target,
            contents: self.slots[target].clone(),
        });
        log::debug!(
            "split_stack: moved {}x {} from slot {} to slot {}",
            moved,
            item_id,
            source,
            target
        );
        Ok(moved)
    }
}
