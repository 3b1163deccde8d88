//! Owner-supplied use validation

use arpg_item::ItemDefinition;

/// Decides whether the owning actor may use an item right now
///
/// The inventory knows nothing about actor state; checks such as "no
/// healing at full health" live behind this hook, supplied by the owner at
/// construction. Without a policy every use is permitted.
pub trait UsePolicy {
    /// Return false to veto the use; nothing is consumed on a veto
    fn allow_use(&self, item: &ItemDefinition) -> bool;
}

impl<F> UsePolicy for F
where
    F: Fn(&ItemDefinition) -> bool,
{
    fn allow_use(&self, item: &ItemDefinition) -> bool {
        self(item)
    }
}
