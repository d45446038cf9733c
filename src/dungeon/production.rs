//! Production system - credits building output each tick
//!
//! Every built building pays out `floor(rate * delta)` of each resource in its
//! production map. Fractions are dropped per tick, not carried forward.

use crate::core::types::BuildingId;
use crate::dungeon::registry::BuildingRegistry;
use crate::economy::{accrual_units, ResourceKind, ResourceLedger};

/// One building paying out one resource during a tick
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionResult {
    pub building_id: BuildingId,
    pub resource: ResourceKind,
    pub amount: u64,
}

/// Process production for all built buildings
pub fn tick_production(
    buildings: &BuildingRegistry,
    ledger: &mut ResourceLedger,
    delta: f64,
) -> Vec<ProductionResult> {
    let mut results = Vec::new();

    for building in buildings.iter_built() {
        for (resource, rate) in &building.production_rates {
            let amount = accrual_units(*rate, delta);
            if amount == 0 {
                continue;
            }
            ledger.add(*resource, amount);
            results.push(ProductionResult {
                building_id: building.id,
                resource: *resource,
                amount,
            });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;
    use crate::dungeon::building::BuildingKind;

    #[test]
    fn test_tick_production_basic() {
        let mut buildings = BuildingRegistry::new();
        let heart = buildings.spawn(BuildingKind::DungeonHeart, Vec3::ORIGIN);
        let mut ledger = ResourceLedger::new();

        // Heart makes 2 mana/s
        let results = tick_production(&buildings, &mut ledger, 1.5);

        assert_eq!(
            results,
            vec![ProductionResult {
                building_id: heart,
                resource: ResourceKind::Mana,
                amount: 3,
            }]
        );
        assert_eq!(ledger.get(ResourceKind::Mana), 3);
    }

    #[test]
    fn test_tick_production_drops_fractions() {
        let mut buildings = BuildingRegistry::new();
        buildings.spawn(BuildingKind::OrcLair, Vec3::ORIGIN);
        let mut ledger = ResourceLedger::new();

        // 0.5 food/s at 60 fps never reaches one unit in a tick
        for _ in 0..600 {
            tick_production(&buildings, &mut ledger, 1.0 / 60.0);
        }
        assert_eq!(ledger.get(ResourceKind::Food), 0);

        tick_production(&buildings, &mut ledger, 3.0);
        assert_eq!(ledger.get(ResourceKind::Food), 1);
    }

    #[test]
    fn test_unbuilt_buildings_do_not_produce() {
        let mut buildings = BuildingRegistry::new();
        buildings.restore(BuildingKind::DemonLair, Vec3::ORIGIN, 800, false);
        let mut ledger = ResourceLedger::new();

        let results = tick_production(&buildings, &mut ledger, 10.0);
        assert!(results.is_empty());
        assert_eq!(ledger.get(ResourceKind::Food), 0);
    }

    #[test]
    fn test_instance_rate_override() {
        let mut buildings = BuildingRegistry::new();
        let id = buildings.spawn(BuildingKind::ArcaneTower, Vec3::ORIGIN);
        buildings
            .get_mut(id)
            .unwrap()
            .production_rates
            .insert(ResourceKind::Mana, 4.0);
        let mut ledger = ResourceLedger::new();

        tick_production(&buildings, &mut ledger, 1.0);
        assert_eq!(ledger.get(ResourceKind::Mana), 4);
    }

    #[test]
    fn test_zero_delta_produces_nothing() {
        let mut buildings = BuildingRegistry::new();
        buildings.spawn(BuildingKind::DungeonHeart, Vec3::ORIGIN);
        buildings.spawn(BuildingKind::DemonLair, Vec3::ORIGIN);
        let mut ledger = ResourceLedger::new();

        assert!(tick_production(&buildings, &mut ledger, 0.0).is_empty());
        assert_eq!(ledger.total(), 0);
    }
}
