//! Building registry - append-only collection of constructed buildings

use crate::core::error::{CoreError, Result};
use crate::core::types::{BuildingId, Vec3};
use crate::dungeon::building::{Building, BuildingKind};
use crate::economy::{CostTable, ResourceKind, ResourceLedger};

/// Every building in the dungeon, in construction order
#[derive(Debug, Clone, Default)]
pub struct BuildingRegistry {
    buildings: Vec<Building>,
}

impl BuildingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Pay for and construct a building.
    ///
    /// Nothing is charged or created unless the position is finite and the
    /// ledger covers the full cost.
    pub fn build(
        &mut self,
        kind: BuildingKind,
        position: Vec3,
        ledger: &mut ResourceLedger,
        costs: &CostTable,
    ) -> Result<BuildingId> {
        if !position.is_finite() {
            tracing::warn!("Rejected {} at non-finite position {}", kind, position);
            return Err(CoreError::InvalidPosition(position));
        }

        let cost = costs.building_cost(kind);
        if !ledger.charge(cost) {
            tracing::debug!("Cannot afford {} at {}", kind, position);
            return Err(CoreError::InsufficientResources(kind.tag().to_string()));
        }

        let id = self.spawn(kind, position);
        tracing::info!("Built {} at {} ({:?})", kind, position, id);
        Ok(id)
    }

    /// Append a finished building without charging for it
    pub(crate) fn spawn(&mut self, kind: BuildingKind, position: Vec3) -> BuildingId {
        let id = BuildingId(self.buildings.len() as u32);
        let mut building = Building::from_profile(id, kind, position);
        building.is_built = true;
        self.buildings.push(building);
        id
    }

    /// Append a building restored from a snapshot
    pub(crate) fn restore(
        &mut self,
        kind: BuildingKind,
        position: Vec3,
        health: u32,
        is_built: bool,
    ) -> BuildingId {
        let id = BuildingId(self.buildings.len() as u32);
        let mut building = Building::from_profile(id, kind, position);
        building.health = health.min(building.max_health);
        building.is_built = is_built;
        self.buildings.push(building);
        id
    }

    pub fn get(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.get(id.index())
    }

    pub fn get_mut(&mut self, id: BuildingId) -> Option<&mut Building> {
        self.buildings.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Building> + '_ {
        self.buildings.iter()
    }

    /// Iterate over completed buildings
    pub fn iter_built(&self) -> impl Iterator<Item = &Building> + '_ {
        self.buildings.iter().filter(|b| b.is_built)
    }

    pub fn built_count(&self) -> usize {
        self.iter_built().count()
    }

    pub fn count_of(&self, kind: BuildingKind) -> usize {
        self.buildings.iter().filter(|b| b.kind == kind).count()
    }

    /// Storage provided by all built buildings for a resource
    pub fn total_storage_capacity(&self, resource: ResourceKind) -> u64 {
        self.iter_built().map(|b| b.storage_capacity(resource)).sum()
    }
}
