//! Character registry - append-only collection of summoned characters

use crate::core::error::{CoreError, Result};
use crate::core::types::{CharacterId, Vec3};
use crate::economy::{CostTable, ResourceKind, ResourceLedger};
use crate::entity::character::{Character, CharacterKind};

/// Every character ever summoned, dead or alive, in summoning order
#[derive(Debug, Clone, Default)]
pub struct CharacterRegistry {
    characters: Vec<Character>,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Pay for and summon a character.
    ///
    /// On success one creature is added to the creature count; on failure
    /// (non-finite position or short of resources) neither the ledger nor the
    /// registry changes.
    pub fn summon(
        &mut self,
        kind: CharacterKind,
        position: Vec3,
        ledger: &mut ResourceLedger,
        costs: &CostTable,
    ) -> Result<CharacterId> {
        if !position.is_finite() {
            tracing::warn!("Rejected {} at non-finite position {}", kind, position);
            return Err(CoreError::InvalidPosition(position));
        }

        let cost = costs.character_cost(kind);
        if !ledger.charge(cost) {
            tracing::debug!("Cannot afford {} at {}", kind, position);
            return Err(CoreError::InsufficientResources(kind.tag().to_string()));
        }

        let id = self.push(Character::from_profile(self.next_id(), kind, position));
        ledger.add(ResourceKind::CreatureCount, 1);
        tracing::info!("Summoned {} at {} ({:?})", kind, position, id);
        Ok(id)
    }

    /// Append a character restored from a snapshot.
    ///
    /// Health is clamped to the profile maximum; a character at zero health is
    /// restored dead whatever its saved flag says.
    pub(crate) fn restore(
        &mut self,
        kind: CharacterKind,
        position: Vec3,
        health: u32,
        is_alive: bool,
    ) -> CharacterId {
        let mut character = Character::from_profile(self.next_id(), kind, position);
        character.health = health.min(character.max_health);
        character.is_alive = is_alive && character.health > 0;
        self.push(character)
    }

    fn next_id(&self) -> CharacterId {
        CharacterId(self.characters.len() as u32)
    }

    fn push(&mut self, character: Character) -> CharacterId {
        let id = character.id;
        self.characters.push(character);
        id
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.index())
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> + '_ {
        self.characters.iter()
    }

    /// Iterate over living characters
    pub fn iter_alive(&self) -> impl Iterator<Item = &Character> + '_ {
        self.characters.iter().filter(|c| c.is_alive)
    }

    pub fn alive_count(&self) -> usize {
        self.iter_alive().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(gold: u64, mana: u64, food: u64) -> ResourceLedger {
        let mut ledger = ResourceLedger::new();
        ledger.add(ResourceKind::Gold, gold);
        ledger.add(ResourceKind::Mana, mana);
        ledger.add(ResourceKind::Food, food);
        ledger
    }

    #[test]
    fn test_summon_charges_and_counts_creature() {
        let mut registry = CharacterRegistry::new();
        let mut ledger = ledger_with(1000, 500, 200);
        let costs = CostTable::standard();

        let id = registry
            .summon(CharacterKind::Imp, Vec3::new(2.0, 0.0, 2.0), &mut ledger, &costs)
            .unwrap();

        assert_eq!(ledger.get(ResourceKind::Gold), 920);
        assert_eq!(ledger.get(ResourceKind::Mana), 470);
        assert_eq!(ledger.get(ResourceKind::Food), 190);
        assert_eq!(ledger.get(ResourceKind::CreatureCount), 1);

        let imp = registry.get(id).unwrap();
        assert_eq!(imp.kind, CharacterKind::Imp);
        assert_eq!(imp.health, 40);
        assert!(imp.is_alive);
    }

    #[test]
    fn test_summon_short_of_food_changes_nothing() {
        let mut registry = CharacterRegistry::new();
        let mut ledger = ledger_with(1000, 500, 20);
        let costs = CostTable::standard();

        let result = registry.summon(CharacterKind::OrcWarrior, Vec3::ORIGIN, &mut ledger, &costs);

        assert!(matches!(result, Err(CoreError::InsufficientResources(_))));
        assert!(registry.is_empty());
        assert_eq!(ledger.get(ResourceKind::Gold), 1000);
        assert_eq!(ledger.get(ResourceKind::Mana), 500);
        assert_eq!(ledger.get(ResourceKind::Food), 20);
        assert_eq!(ledger.get(ResourceKind::CreatureCount), 0);
    }

    #[test]
    fn test_dead_characters_stay_enumerable() {
        let mut registry = CharacterRegistry::new();
        let mut ledger = ledger_with(1000, 500, 200);
        let costs = CostTable::standard();

        let a = registry.summon(CharacterKind::Imp, Vec3::ORIGIN, &mut ledger, &costs).unwrap();
        registry.summon(CharacterKind::Imp, Vec3::ORIGIN, &mut ledger, &costs).unwrap();
        registry.get_mut(a).unwrap().take_damage(1000);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.alive_count(), 1);
        assert_eq!(registry.iter().count(), 2);
        assert!(!registry.get(a).unwrap().is_alive);
    }

    #[test]
    fn test_restore_clamps_health() {
        let mut registry = CharacterRegistry::new();
        let id = registry.restore(CharacterKind::GoblinWorker, Vec3::ORIGIN, 500, true);
        assert_eq!(registry.get(id).unwrap().health, 60);
    }

    #[test]
    fn test_restore_zero_health_is_dead() {
        let mut registry = CharacterRegistry::new();
        let id = registry.restore(CharacterKind::Imp, Vec3::ORIGIN, 0, true);
        let imp = registry.get(id).unwrap();
        assert_eq!(imp.health, 0);
        assert!(!imp.is_alive);
        assert_eq!(registry.alive_count(), 0);
    }

    #[test]
    fn test_summon_non_finite_position_rejected() {
        let mut registry = CharacterRegistry::new();
        let mut ledger = ledger_with(1000, 500, 200);
        let costs = CostTable::standard();

        for position in [Vec3::new(f32::NAN, 0.0, 0.0), Vec3::new(0.0, 0.0, f32::INFINITY)] {
            let result = registry.summon(CharacterKind::Imp, position, &mut ledger, &costs);
            assert!(matches!(result, Err(CoreError::InvalidPosition(_))));
        }

        assert!(registry.is_empty());
        assert_eq!(ledger.get(ResourceKind::Gold), 1000);
        assert_eq!(ledger.get(ResourceKind::Food), 200);
        assert_eq!(ledger.get(ResourceKind::CreatureCount), 0);
    }
}
