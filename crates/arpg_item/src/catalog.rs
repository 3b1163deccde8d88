//! Item catalog: the read-only registry of item definitions

use crate::item::{ItemCategory, ItemDefinition, ItemId, ItemRarity};
use crate::stack::ItemStack;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Item ID not present in the catalog
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// Item ID registered twice
    #[error("item already registered: {0}")]
    DuplicateItem(ItemId),

    /// Stack requested with a zero quantity
    #[error("invalid quantity for {0}: 0")]
    InvalidQuantity(ItemId),

    /// Item data failed to parse
    #[error("failed to parse item data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Registry of item definitions
///
/// Built once at startup (programmatically or from JSON) and handed to
/// consumers as an `Arc`; definitions are immutable once registered.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    registry: HashMap<ItemId, Arc<ItemDefinition>>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }

    /// Build a catalog from a JSON array of item definitions
    pub fn from_json(json: &str) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.load_json(json)?;
        Ok(catalog)
    }

    /// Register a definition; duplicate IDs are rejected
    pub fn register(&mut self, definition: ItemDefinition) -> Result<()> {
        let id = definition.id.clone();
        if self.registry.contains_key(&id) {
            return Err(CatalogError::DuplicateItem(id));
        }
        self.registry.insert(id, Arc::new(definition));
        Ok(())
    }

    /// Register every definition in a JSON array, returning how many loaded
    pub fn load_json(&mut self, json: &str) -> Result<usize> {
        let definitions: Vec<ItemDefinition> = serde_json::from_str(json)?;
        let count = definitions.len();
        for definition in definitions {
            self.register(definition)?;
        }
        log::info!("item catalog: registered {} definitions", count);
        Ok(count)
    }

    /// Look up a definition by ID
    pub fn lookup(&self, id: &ItemId) -> Option<&Arc<ItemDefinition>> {
        self.registry.get(id)
    }

    /// Check whether an ID is registered
    pub fn contains(&self, id: &ItemId) -> bool {
        self.registry.contains_key(id)
    }

    /// Create a stack of a registered item
    pub fn create_stack(&self, id: &ItemId, quantity: u32) -> Result<ItemStack> {
        if quantity == 0 {
            return Err(CatalogError::InvalidQuantity(id.clone()));
        }
        if !self.contains(id) {
            return Err(CatalogError::UnknownItem(id.clone()));
        }
        Ok(ItemStack::new(id.clone(), quantity))
    }

    /// All registered IDs
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.registry.keys()
    }

    /// All definitions in a category
    pub fn items_by_category(&self, category: ItemCategory) -> Vec<&Arc<ItemDefinition>> {
        self.registry
            .values()
            .filter(|def| def.category == category)
            .collect()
    }

    /// All definitions of a rarity tier
    pub fn items_by_rarity(&self, rarity: ItemRarity) -> Vec<&Arc<ItemDefinition>> {
        self.registry
            .values()
            .filter(|def| def.rarity == rarity)
            .collect()
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if the catalog has no definitions
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = ItemCatalog::new();
        catalog
            .register(ItemDefinition::new("iron_sword", "Iron Sword"))
            .unwrap();

        assert_eq!(catalog.len(), 1);
        let def = catalog.lookup(&"iron_sword".into()).unwrap();
        assert_eq!(def.name, "Iron Sword");
        assert!(catalog.lookup(&"bronze_sword".into()).is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut catalog = ItemCatalog::new();
        catalog
            .register(ItemDefinition::new("gold", "Gold"))
            .unwrap();

        let result = catalog.register(ItemDefinition::new("gold", "Gold Again"));
        assert!(matches!(result, Err(CatalogError::DuplicateItem(_))));
        assert_eq!(catalog.lookup(&"gold".into()).unwrap().name, "Gold");
    }

    #[test]
    fn test_create_stack() {
        let mut catalog = ItemCatalog::new();
        catalog
            .register(ItemDefinition::new("arrows", "Arrows").with_max_stack(99))
            .unwrap();

        let stack = catalog.create_stack(&"arrows".into(), 30).unwrap();
        assert_eq!(stack.quantity, 30);

        assert!(matches!(
            catalog.create_stack(&"bolts".into(), 1),
            Err(CatalogError::UnknownItem(_))
        ));
        assert!(matches!(
            catalog.create_stack(&"arrows".into(), 0),
            Err(CatalogError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "id": "health_potion", "name": "Health Potion", "category": "Consumable", "max_stack": 10, "weight": 0.5 },
            { "id": "beast_core", "name": "Beast Core", "category": "BeastCore", "rarity": "Rare" }
        ]"#;

        let catalog = ItemCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.items_by_category(ItemCategory::Consumable).len(),
            1
        );
        assert_eq!(catalog.items_by_rarity(ItemRarity::Rare).len(), 1);
    }
}
