//! Character kinds, their base stats, and summoned characters

use std::str::FromStr;

use crate::core::error::{CoreError, Result};
use crate::core::types::{CharacterId, KindCategory, Vec3};
use crate::entity::action::ActionState;

/// Type of summonable character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterKind {
    GoblinEngineer,
    GoblinWorker,
    OrcWarrior,
    Imp,
    Archer,
    Knight,
}

/// Static base stats shared by every character of a kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterProfile {
    pub health: u32,
    pub speed: f32,
    pub attack: u32,
    pub defense: u32,
}

impl CharacterKind {
    pub const ALL: [CharacterKind; 6] = [
        CharacterKind::GoblinEngineer,
        CharacterKind::GoblinWorker,
        CharacterKind::OrcWarrior,
        CharacterKind::Imp,
        CharacterKind::Archer,
        CharacterKind::Knight,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            CharacterKind::GoblinEngineer => "goblin_engineer",
            CharacterKind::GoblinWorker => "goblin_worker",
            CharacterKind::OrcWarrior => "orc_warrior",
            CharacterKind::Imp => "imp",
            CharacterKind::Archer => "archer",
            CharacterKind::Knight => "knight",
        }
    }

    pub fn profile(&self) -> CharacterProfile {
        let (health, speed, attack, defense) = match self {
            CharacterKind::GoblinEngineer => (80, 3.0, 15, 5),
            CharacterKind::GoblinWorker => (60, 2.5, 10, 3),
            CharacterKind::OrcWarrior => (120, 2.0, 25, 8),
            CharacterKind::Imp => (40, 4.0, 12, 2),
            // Archers and knights use the baseline soldier stats
            CharacterKind::Archer | CharacterKind::Knight => (100, 2.0, 10, 5),
        };
        CharacterProfile { health, speed, attack, defense }
    }
}

impl std::fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CharacterKind {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CharacterKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| CoreError::unknown(KindCategory::Character, s))
    }
}

/// A summoned character
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: CharacterId,
    pub kind: CharacterKind,
    pub position: Vec3,
    pub health: u32,
    pub max_health: u32,
    pub speed: f32,
    pub attack: u32,
    pub defense: u32,
    pub is_alive: bool,
    action: ActionState,
}

impl Character {
    /// Instantiate from the kind's profile, alive, at full health and idle
    pub fn from_profile(id: CharacterId, kind: CharacterKind, position: Vec3) -> Self {
        let profile = kind.profile();
        Self {
            id,
            kind,
            position,
            health: profile.health,
            max_health: profile.health,
            speed: profile.speed,
            attack: profile.attack,
            defense: profile.defense,
            is_alive: true,
            action: ActionState::Idle,
        }
    }

    pub fn current_action(&self) -> ActionState {
        self.action
    }

    /// Move to another action state if the transition table allows it
    pub fn transition(&mut self, to: ActionState) -> Result<()> {
        if !self.is_alive || !self.action.can_transition(to) {
            return Err(CoreError::InvalidTransition { from: self.action, to });
        }
        self.action = to;
        Ok(())
    }

    /// Apply damage. Health stops at zero and a character at zero is dead.
    ///
    /// Dead characters stay in the registry; they only lose the alive flag.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 && self.is_alive {
            self.is_alive = false;
            self.action = ActionState::Idle;
            tracing::info!("{} {:?} has died", self.kind, self.id);
        }
    }
}
