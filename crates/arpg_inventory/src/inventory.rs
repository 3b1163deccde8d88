//! Inventory component: slot storage, stacking, and weight accounting

use crate::error::{InventoryError, Result};
use crate::events::InventoryEvent;
use crate::policy::UsePolicy;
use crate::quickuse::{QuickSlotClass, QuickUseSlot, QUICK_SLOT_COUNT};
use crate::world::WorldPlacement;
use arpg_event::EventBus;
use arpg_item::{ItemCatalog, ItemCategory, ItemDefinition, ItemId, ItemStack};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Inventory dimensions, fixed for the lifetime of the inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Number of storage slots
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Maximum total carried weight
    #[serde(default = "default_max_weight")]
    pub max_weight: f32,
}

fn default_capacity() -> usize {
    50
}

fn default_max_weight() -> f32 {
    100.0
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            max_weight: default_max_weight(),
        }
    }
}

/// One planned slot write during an add
struct Placement {
    slot: usize,
    amount: u32,
}

/// Inventory component
///
/// Owns the storage slot array and the quick-use bar for a single actor.
/// Never shared between owners; all operations run synchronously on the
/// calling thread and publish change events only after the affected
/// invariants hold again.
pub struct Inventory {
    /// Storage slots (None = empty)
    pub(crate) slots: Vec<Option<ItemStack>>,
    /// Quick-use bar, fixed class layout
    pub(crate) quick_slots: Vec<QuickUseSlot>,
    /// Maximum total carried weight
    pub(crate) max_weight: f32,
    /// Item definition lookup
    pub(crate) catalog: Arc<ItemCatalog>,
    /// Change event observers
    pub(crate) events: EventBus<InventoryEvent>,
    /// Owner hook gating item use
    pub(crate) policy: Option<Box<dyn UsePolicy>>,
    /// Strategy materializing world drops
    pub(crate) placement: Option<Box<dyn WorldPlacement>>,
}

impl Inventory {
    /// Create a new inventory with all slots empty
    pub fn new(catalog: Arc<ItemCatalog>, config: InventoryConfig) -> Self {
        let quick_slots = (0..QUICK_SLOT_COUNT)
            .map(|index| QuickUseSlot::new(QuickSlotClass::for_index(index)))
            .collect();
        log::debug!(
            "inventory created: {} slots, max weight {:.1}",
            config.capacity,
            config.max_weight
        );
        Self {
            slots: vec![None; config.capacity],
            quick_slots,
            max_weight: config.max_weight,
            catalog,
            events: EventBus::new(),
            policy: None,
            placement: None,
        }
    }

    /// Set the owner policy consulted by [`use_item`](Self::use_item)
    pub fn with_use_policy(mut self, policy: impl UsePolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Set the world placement strategy used by drops
    pub fn with_world_placement(mut self, placement: impl WorldPlacement + 'static) -> Self {
        self.placement = Some(Box::new(placement));
        self
    }

    /// Access the observer bus for subscribe/unsubscribe
    pub fn observers_mut(&mut self) -> &mut EventBus<InventoryEvent> {
        &mut self.events
    }

    pub(crate) fn emit(&self, event: InventoryEvent) {
        self.events.publish(&event);
    }

    pub(crate) fn definition(&self, id: &ItemId) -> Result<Arc<ItemDefinition>> {
        self.catalog
            .lookup(id)
            .cloned()
            .ok_or_else(|| InventoryError::UnknownItem(id.clone()))
    }

    /// Number of storage slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Maximum total carried weight
    pub fn max_weight(&self) -> f32 {
        self.max_weight
    }

    /// Get slot contents (None for empty or out-of-range slots)
    pub fn slot(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index)?.as_ref()
    }

    /// All storage slots in index order
    pub fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    /// Total carried weight
    pub fn current_weight(&self) -> f32 {
        self.slots
            .iter()
            .flatten()
            .filter_map(|stack| {
                self.catalog
                    .lookup(&stack.item_id)
                    .map(|def| def.weight * stack.quantity as f32)
            })
            .sum()
    }

    /// Number of empty slots
    pub fn empty_slot_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Number of occupied slots
    pub fn used_slot_count(&self) -> usize {
        self.capacity() - self.empty_slot_count()
    }

    /// Total quantity across all slots
    pub fn total_item_count(&self) -> u32 {
        self.slots.iter().flatten().map(|stack| stack.quantity).sum()
    }

    /// Total quantity of one item
    pub fn count_item(&self, item_id: &ItemId) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|stack| &stack.item_id == item_id)
            .map(|stack| stack.quantity)
            .sum()
    }

    /// First slot holding the item
    pub fn find_item_slot(&self, item_id: &ItemId) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|stack| &stack.item_id == item_id)
        })
    }

    /// Check whether `quantity` of an item would fit right now
    ///
    /// Runs the same weight check and placement plan as
    /// [`add_item`](Self::add_item), so the two can never disagree.
    pub fn has_space_for(&self, item_id: &ItemId, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        let Some(def) = self.catalog.lookup(item_id) else {
            return false;
        };
        if self.check_weight(def, quantity).is_err() {
            return false;
        }
        let (_, remaining) = self.placement_plan(def, quantity);
        remaining == 0
    }

    /// Add items to storage
    ///
    /// Verify-fully-then-commit-fully: the weight check and the placement
    /// plan both run before the first slot mutates, and a plan that cannot
    /// absorb the whole quantity fails the call with nothing changed. The
    /// committed plan tops up partial stacks of the same item first, then
    /// opens new stacks in empty slots, always in ascending slot order.
    pub fn add_item(&mut self, item_id: &ItemId, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        let def = self.definition(item_id)?;
        self.check_weight(&def, quantity)?;

        let (plan, remaining) = self.placement_plan(&def, quantity);
        if remaining > 0 {
            log::warn!(
                "add_item: no room for {}x {} ({} left over)",
                quantity,
                item_id,
                remaining
            );
            return Err(InventoryError::CapacityExceeded {
                item: item_id.clone(),
                overflow: remaining,
            });
        }

        for placement in plan {
            match &mut self.slots[placement.slot] {
                Some(stack) => stack.quantity += placement.amount,
                empty @ None => {
                    *empty = Some(ItemStack::new(item_id.clone(), placement.amount))
                }
            }
            self.emit(InventoryEvent::SlotChanged {
                slot: placement.slot,
                contents: self.slots[placement.slot].clone(),
            });
            self.emit(InventoryEvent::ItemAdded {
                slot: placement.slot,
                item_id: item_id.clone(),
                quantity: placement.amount,
            });
        }
        log::debug!("add_item: placed {}x {}", quantity, item_id);
        Ok(())
    }

    /// Remove up to `quantity` from a slot, returning the removed amount
    ///
    /// The amount is clamped to the slot contents. A slot that reaches zero
    /// becomes empty and any quick-use binding on it is cleared in the same
    /// call.
    pub fn remove_item(&mut self, slot: usize, quantity: u32) -> Result<u32> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        let stack = self
            .slots
            .get_mut(slot)
            .ok_or(InventoryError::InvalidSlot(slot))?
            .as_mut()
            .ok_or(InventoryError::SlotEmpty(slot))?;

        let item_id = stack.item_id.clone();
        let removed = stack.remove(quantity);
        if stack.is_empty() {
            self.slots[slot] = None;
        }
        let cleared = self.revalidate_binding(slot);

        self.emit(InventoryEvent::SlotChanged {
            slot,
            contents: self.slots[slot].clone(),
        });
        self.emit(InventoryEvent::ItemRemoved {
            slot,
            item_id: item_id.clone(),
            quantity: removed,
        });
        if let Some(quick) = cleared {
            self.emit(InventoryEvent::QuickSlotChanged {
                slot: quick,
                contents: None,
            });
        }
        log::debug!("remove_item: took {}x {} from slot {}", removed, item_id, slot);
        Ok(removed)
    }

    /// Move a stack between slots
    ///
    /// Empty destination relocates the stack; a same-item destination with
    /// headroom merges as much as fits (leftover stays in the source);
    /// anything else swaps the two slots.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.slots.len();
        if from >= len {
            return Err(InventoryError::InvalidSlot(from));
        }
        if to >= len {
            return Err(InventoryError::InvalidSlot(to));
        }
        if from == to {
            return Ok(());
        }
        if self.slots[from].is_none() {
            return Err(InventoryError::SlotEmpty(from));
        }

        if self.slots[to].is_none() {
            self.slots[to] = self.slots[from].take();
            let cleared = self.revalidate_binding(from);
            self.emit(InventoryEvent::SlotChanged {
                slot: from,
                contents: None,
            });
            self.emit(InventoryEvent::SlotChanged {
                slot: to,
                contents: self.slots[to].clone(),
            });
            if let Some(quick) = cleared {
                self.emit(InventoryEvent::QuickSlotChanged {
                    slot: quick,
                    contents: None,
                });
            }
            return Ok(());
        }

        let merge = match (&self.slots[from], &self.slots[to]) {
            (Some(source), Some(target)) if source.item_id == target.item_id => {
                let def = self.definition(&source.item_id)?;
                let headroom = target.headroom(def.max_stack);
                (headroom > 0).then(|| source.quantity.min(headroom))
            }
            _ => None,
        };

        if let Some(amount) = merge {
            if let Some(source) = self.slots[from].as_mut() {
                source.quantity -= amount;
            }
            if self.slots[from].as_ref().is_some_and(|s| s.quantity == 0) {
                self.slots[from] = None;
            }
            if let Some(target) = self.slots[to].as_mut() {
                target.quantity += amount;
            }
            let cleared = self.revalidate_binding(from);
            self.emit(InventoryEvent::SlotChanged {
                slot: from,
                contents: self.slots[from].clone(),
            });
            self.emit(InventoryEvent::SlotChanged {
                slot: to,
                contents: self.slots[to].clone(),
            });
            if let Some(quick) = cleared {
                self.emit(InventoryEvent::QuickSlotChanged {
                    slot: quick,
                    contents: None,
                });
            }
            return Ok(());
        }

        self.swap_items(from, to)
    }

    /// Swap two slots unconditionally (no type checks)
    ///
    /// Bindings on either index survive only if their slot still holds the
    /// item they captured.
    pub fn swap_items(&mut self, slot_a: usize, slot_b: usize) -> Result<()> {
        let len = self.slots.len();
        if slot_a >= len {
            return Err(InventoryError::InvalidSlot(slot_a));
        }
        if slot_b >= len {
            return Err(InventoryError::InvalidSlot(slot_b));
        }
        if slot_a == slot_b {
            return Ok(());
        }

        self.slots.swap(slot_a, slot_b);
        let cleared_a = self.revalidate_binding(slot_a);
        let cleared_b = self.revalidate_binding(slot_b);

        self.emit(InventoryEvent::SlotChanged {
            slot: slot_a,
            contents: self.slots[slot_a].clone(),
        });
        self.emit(InventoryEvent::SlotChanged {
            slot: slot_b,
            contents: self.slots[slot_b].clone(),
        });
        for quick in [cleared_a, cleared_b].into_iter().flatten() {
            self.emit(InventoryEvent::QuickSlotChanged {
                slot: quick,
                contents: None,
            });
        }
        log::debug!("swap_items: {} <-> {}", slot_a, slot_b);
        Ok(())
    }

    /// Use the item in a slot
    ///
    /// The owner policy may veto the use. Consumable items lose 1 quantity
    /// through the removal path (with its empty-slot and unbind cascades);
    /// every other category is used without being consumed.
    pub fn use_item(&mut self, slot: usize) -> Result<()> {
        let stack = self
            .slots
            .get(slot)
            .ok_or(InventoryError::InvalidSlot(slot))?
            .as_ref()
            .ok_or(InventoryError::SlotEmpty(slot))?;
        let item_id = stack.item_id.clone();
        let def = self.definition(&item_id)?;

        if let Some(policy) = &self.policy {
            if !policy.allow_use(&def) {
                log::debug!("use_item: {} vetoed by owner policy", item_id);
                return Err(InventoryError::UseRejected(item_id));
            }
        }

        self.emit(InventoryEvent::ItemUsed {
            slot,
            item_id: item_id.clone(),
        });

        if def.category == ItemCategory::Consumable {
            self.remove_item(slot, 1)?;
        }
        log::debug!("use_item: used {} from slot {}", item_id, slot);
        Ok(())
    }

    /// Log the current contents at debug level
    pub fn log_contents(&self) {
        log::debug!(
            "inventory: {}/{} slots used, weight {:.2}/{:.2}, {} items total",
            self.used_slot_count(),
            self.capacity(),
            self.current_weight(),
            self.max_weight,
            self.total_item_count()
        );
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(stack) = slot {
                log::debug!("  slot {}: {} x{}", index, stack.item_id, stack.quantity);
            }
        }
        for (index, quick) in self.quick_slots.iter().enumerate() {
            if let Some(binding) = quick.binding() {
                log::debug!(
                    "  quick {}: -> slot {} ({})",
                    index,
                    binding.slot,
                    binding.item_id
                );
            }
        }
    }

    fn check_weight(&self, def: &ItemDefinition, quantity: u32) -> Result<()> {
        let incoming = def.weight * quantity as f32;
        let current = self.current_weight();
        if current + incoming > self.max_weight {
            log::warn!(
                "weight limit: {:.2} + {:.2} > {:.2}",
                current,
                incoming,
                self.max_weight
            );
            return Err(InventoryError::WeightExceeded {
                current,
                incoming,
                max: self.max_weight,
            });
        }
        Ok(())
    }

    /// Plan where `quantity` of an item would land: partial stacks first,
    /// then empty slots, ascending. Returns the plan and any overflow.
    fn placement_plan(&self, def: &ItemDefinition, quantity: u32) -> (Vec<Placement>, u32) {
        let mut plan = Vec::new();
        let mut remaining = quantity;

        for (index, slot) in self.slots.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            if let Some(stack) = slot {
                if stack.item_id == def.id {
                    let headroom = stack.headroom(def.max_stack);
                    if headroom > 0 {
                        let amount = remaining.min(headroom);
                        plan.push(Placement {
                            slot: index,
                            amount,
                        });
                        remaining -= amount;
                    }
                }
            }
        }

        for (index, slot) in self.slots.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            if slot.is_none() {
                let amount = remaining.min(def.max_stack);
                plan.push(Placement {
                    slot: index,
                    amount,
                });
                remaining -= amount;
            }
        }

        (plan, remaining)
    }
}
