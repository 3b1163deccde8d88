//! Quick-use bar: shortcut slots referencing storage by index

use crate::error::{InventoryError, Result};
use crate::events::InventoryEvent;
use crate::inventory::Inventory;
use arpg_item::{ItemCategory, ItemId};
use serde::{Deserialize, Serialize};

/// Number of quick-use slots
pub const QUICK_SLOT_COUNT: usize = 10;
/// Bar indices below this are skill slots; the rest take consumables
pub const SKILL_SLOT_COUNT: usize = 8;

/// Class of a quick-use slot, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickSlotClass {
    /// Activates learned skills (slots 0-7)
    Skill,
    /// Activates consumable items (slots 8-9)
    Consumable,
}

impl QuickSlotClass {
    /// Class assigned to a bar index
    pub fn for_index(index: usize) -> Self {
        if index < SKILL_SLOT_COUNT {
            Self::Skill
        } else {
            Self::Consumable
        }
    }

    /// Whether this class accepts items of `category`
    ///
    /// Skill slots shortcut learned skills, not carried items, so they
    /// reject every inventory assignment.
    pub fn accepts(&self, category: ItemCategory) -> bool {
        match self {
            Self::Skill => false,
            Self::Consumable => category == ItemCategory::Consumable,
        }
    }
}

/// Binding from a quick slot to a storage slot
///
/// The item identity is captured at bind time; a slot that later holds a
/// different item makes the binding stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickBinding {
    /// Bound storage slot index
    pub slot: usize,
    /// Item the storage slot held when the binding was made
    pub item_id: ItemId,
}

/// One quick-use bar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickUseSlot {
    class: QuickSlotClass,
    binding: Option<QuickBinding>,
}

impl QuickUseSlot {
    pub(crate) fn new(class: QuickSlotClass) -> Self {
        Self {
            class,
            binding: None,
        }
    }

    /// Slot class
    pub fn class(&self) -> QuickSlotClass {
        self.class
    }

    /// Current binding, if any
    pub fn binding(&self) -> Option<&QuickBinding> {
        self.binding.as_ref()
    }

    /// Check if bound to a storage slot
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub(crate) fn bind(&mut self, binding: QuickBinding) {
        self.binding = Some(binding);
    }

    pub(crate) fn clear(&mut self) {
        self.binding = None;
    }
}

impl Inventory {
    /// Get a quick-use slot
    pub fn quick_slot(&self, index: usize) -> Option<&QuickUseSlot> {
        self.quick_slots.get(index)
    }

    /// All quick-use slots in bar order
    pub fn quick_slots(&self) -> &[QuickUseSlot] {
        &self.quick_slots
    }

    /// Bind a storage slot to a quick-use slot
    ///
    /// The storage slot must be occupied and its item's category accepted
    /// by the quick slot's class. Any other quick slot bound to the same
    /// storage index is cleared first, so a storage slot never feeds two
    /// bar entries.
    pub fn assign_to_quick_slot(&mut self, inventory_slot: usize, quick_slot: usize) -> Result<()> {
        if quick_slot >= QUICK_SLOT_COUNT {
            return Err(InventoryError::InvalidQuickSlot(quick_slot));
        }
        let stack = self
            .slots
            .get(inventory_slot)
            .ok_or(InventoryError::InvalidSlot(inventory_slot))?
            .as_ref()
            .ok_or(InventoryError::SlotEmpty(inventory_slot))?;
        let item_id = stack.item_id.clone();
        let def = self.definition(&item_id)?;

        if !self.quick_slots[quick_slot].class().accepts(def.category) {
            log::debug!(
                "assign_to_quick_slot: {} not accepted by quick slot {}",
                item_id,
                quick_slot
            );
            return Err(InventoryError::IncompatibleCategory);
        }

        // A storage slot may feed at most one quick slot
        for index in 0..QUICK_SLOT_COUNT {
            if index == quick_slot {
                continue;
            }
            let duplicate = self.quick_slots[index]
                .binding()
                .is_some_and(|binding| binding.slot == inventory_slot);
            if duplicate {
                self.quick_slots[index].clear();
                self.emit(InventoryEvent::QuickSlotChanged {
                    slot: index,
                    contents: None,
                });
            }
        }

        let binding = QuickBinding {
            slot: inventory_slot,
            item_id,
        };
        if self.quick_slots[quick_slot].binding() != Some(&binding) {
            self.quick_slots[quick_slot].bind(binding);
            self.emit(InventoryEvent::QuickSlotChanged {
                slot: quick_slot,
                contents: self.slots[inventory_slot].clone(),
            });
        }
        Ok(())
    }

    /// Activate the item bound to a quick-use slot
    ///
    /// A binding whose storage slot emptied or changed item since bind time
    /// is cleared here and reported stale. Otherwise the call delegates to
    /// [`use_item`](Self::use_item); consumption inside that call may clear
    /// this very binding through the regular cascade, which already fires
    /// the change notification, so the binding is not re-checked afterwards.
    pub fn use_quick_slot(&mut self, quick_slot: usize) -> Result<()> {
        if quick_slot >= QUICK_SLOT_COUNT {
            return Err(InventoryError::InvalidQuickSlot(quick_slot));
        }
        let Some(binding) = self.quick_slots[quick_slot].binding().cloned() else {
            return Err(InventoryError::QuickSlotUnbound(quick_slot));
        };

        let stale = match self.slots.get(binding.slot).and_then(Option::as_ref) {
            Some(stack) => stack.item_id != binding.item_id,
            None => true,
        };
        if stale {
            self.quick_slots[quick_slot].clear();
            self.emit(InventoryEvent::QuickSlotChanged {
                slot: quick_slot,
                contents: None,
            });
            log::debug!("use_quick_slot: cleared stale binding on {}", quick_slot);
            return Err(InventoryError::StaleBinding(quick_slot));
        }

        self.use_item(binding.slot)
    }

    /// Clear a quick-use slot
    ///
    /// Idempotent; always fires the change notification with an empty
    /// payload.
    pub fn clear_quick_slot(&mut self, quick_slot: usize) -> Result<()> {
        if quick_slot >= QUICK_SLOT_COUNT {
            return Err(InventoryError::InvalidQuickSlot(quick_slot));
        }
        self.quick_slots[quick_slot].clear();
        self.emit(InventoryEvent::QuickSlotChanged {
            slot: quick_slot,
            contents: None,
        });
        Ok(())
    }

    /// Clear the binding on `storage_slot` if it no longer matches the
    /// slot's contents. Returns the quick index that was cleared, if any;
    /// the caller publishes the notification once its own invariants hold.
    pub(crate) fn revalidate_binding(&mut self, storage_slot: usize) -> Option<usize> {
        let current = self.slots.get(storage_slot).and_then(Option::as_ref);
        for (index, quick) in self.quick_slots.iter_mut().enumerate() {
            let Some(binding) = quick.binding() else {
                continue;
            };
            if binding.slot != storage_slot {
                continue;
            }
            let valid = current.is_some_and(|stack| stack.item_id == binding.item_id);
            if valid {
                return None;
            }
            quick.clear();
            return Some(index);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_layout() {
        assert_eq!(QuickSlotClass::for_index(0), QuickSlotClass::Skill);
        assert_eq!(QuickSlotClass::for_index(7), QuickSlotClass::Skill);
        assert_eq!(QuickSlotClass::for_index(8), QuickSlotClass::Consumable);
        assert_eq!(QuickSlotClass::for_index(9), QuickSlotClass::Consumable);
    }

    #[test]
    fn test_class_gating() {
        assert!(!QuickSlotClass::Skill.accepts(ItemCategory::Consumable));
        assert!(!QuickSlotClass::Skill.accepts(ItemCategory::SkillItem));
        assert!(QuickSlotClass::Consumable.accepts(ItemCategory::Consumable));
        assert!(!QuickSlotClass::Consumable.accepts(ItemCategory::Equipment));
    }
}
