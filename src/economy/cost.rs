//! Construction and summoning costs
//!
//! Every building and character kind has a fixed cost set. The dungeon heart
//! is free; everything else costs gold and mana, and creatures also eat food.

use ahash::AHashMap;
use std::collections::BTreeMap;

use crate::dungeon::building::BuildingKind;
use crate::economy::ledger::ResourceLedger;
use crate::economy::resource::ResourceKind;
use crate::entity::character::CharacterKind;

static FREE: CostSet = CostSet(BTreeMap::new());

/// Resources required to create one entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostSet(BTreeMap<ResourceKind, u64>);

impl CostSet {
    /// Build a cost set; repeated kinds are summed
    pub fn new(entries: impl IntoIterator<Item = (ResourceKind, u64)>) -> Self {
        let mut amounts = BTreeMap::new();
        for (kind, amount) in entries {
            let entry: &mut u64 = amounts.entry(kind).or_insert(0);
            *entry = entry.saturating_add(amount);
        }
        Self(amounts)
    }

    pub fn get(&self, kind: ResourceKind) -> u64 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    /// Entries in kind order
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, u64)> + '_ {
        self.0.iter().map(|(kind, amount)| (*kind, *amount))
    }

    /// True when nothing has to be paid
    pub fn is_free(&self) -> bool {
        self.0.values().all(|amount| *amount == 0)
    }

    /// Tag-keyed view for the host
    pub fn to_tag_map(&self) -> BTreeMap<String, u64> {
        self.iter().map(|(kind, amount)| (kind.tag().to_string(), amount)).collect()
    }
}

fn building_cost(kind: BuildingKind) -> CostSet {
    use ResourceKind::{Gold, Mana};
    match kind {
        BuildingKind::DungeonHeart => CostSet::new([(Gold, 0), (Mana, 0)]),
        BuildingKind::Treasury => CostSet::new([(Gold, 200), (Mana, 50)]),
        BuildingKind::DemonLair => CostSet::new([(Gold, 300), (Mana, 100)]),
        BuildingKind::OrcLair => CostSet::new([(Gold, 250), (Mana, 75)]),
        BuildingKind::ArcaneTower => CostSet::new([(Gold, 400), (Mana, 150)]),
        BuildingKind::ArrowTower => CostSet::new([(Gold, 150), (Mana, 25)]),
    }
}

fn character_cost(kind: CharacterKind) -> CostSet {
    use ResourceKind::{Food, Gold, Mana};
    match kind {
        CharacterKind::GoblinEngineer => CostSet::new([(Gold, 150), (Mana, 50), (Food, 20)]),
        CharacterKind::GoblinWorker => CostSet::new([(Gold, 100), (Mana, 25), (Food, 15)]),
        CharacterKind::OrcWarrior => CostSet::new([(Gold, 200), (Mana, 75), (Food, 30)]),
        CharacterKind::Imp => CostSet::new([(Gold, 80), (Mana, 30), (Food, 10)]),
        CharacterKind::Archer => CostSet::new([(Gold, 120), (Mana, 40), (Food, 15)]),
        CharacterKind::Knight => CostSet::new([(Gold, 250), (Mana, 60), (Food, 35)]),
    }
}

/// Read-only cost lookup for every buildable and summonable kind
#[derive(Debug, Clone)]
pub struct CostTable {
    buildings: AHashMap<BuildingKind, CostSet>,
    characters: AHashMap<CharacterKind, CostSet>,
}

impl Default for CostTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CostTable {
    /// The standard price list
    pub fn standard() -> Self {
        Self {
            buildings: BuildingKind::ALL.into_iter().map(|k| (k, building_cost(k))).collect(),
            characters: CharacterKind::ALL.into_iter().map(|k| (k, character_cost(k))).collect(),
        }
    }

    pub fn building_cost(&self, kind: BuildingKind) -> &CostSet {
        self.buildings.get(&kind).unwrap_or(&FREE)
    }

    pub fn character_cost(&self, kind: CharacterKind) -> &CostSet {
        self.characters.get(&kind).unwrap_or(&FREE)
    }

    /// Check every required resource is in the ledger, without touching it.
    ///
    /// The same predicate `ResourceLedger::charge` applies before debiting.
    pub fn can_afford(ledger: &ResourceLedger, cost: &CostSet) -> bool {
        ledger.covers(cost)
    }
}
