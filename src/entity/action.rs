//! Character action states and the legal transitions between them
//!
//! Only `Idle` is entered by the core today. The other states exist so the
//! behavior hook in the tick has a closed set to drive once it is filled in.

use serde::{Deserialize, Serialize};

/// What a character is currently doing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionState {
    #[default]
    Idle,
    Moving,
    Attacking,
    Gathering,
}

impl ActionState {
    pub const ALL: [ActionState; 4] = [
        ActionState::Idle,
        ActionState::Moving,
        ActionState::Attacking,
        ActionState::Gathering,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ActionState::Idle => "idle",
            ActionState::Moving => "moving",
            ActionState::Attacking => "attacking",
            ActionState::Gathering => "gathering",
        }
    }

    /// Transition table.
    ///
    /// Idle can start anything and anything can stop back to Idle. Attacking
    /// and Gathering never switch directly into each other.
    pub fn can_transition(self, to: ActionState) -> bool {
        use ActionState::*;
        match (self, to) {
            (from, to) if from == to => true,
            (_, Idle) => true,
            (Idle, _) => true,
            (Moving, Attacking | Gathering) => true,
            (Attacking | Gathering, Moving) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ActionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ActionState::default(), ActionState::Idle);
    }

    #[test]
    fn test_every_state_can_return_to_idle() {
        for state in ActionState::ALL {
            assert!(state.can_transition(ActionState::Idle));
            assert!(ActionState::Idle.can_transition(state));
            assert!(state.can_transition(state));
        }
    }

    #[test]
    fn test_attack_and_gather_do_not_mix() {
        assert!(!ActionState::Attacking.can_transition(ActionState::Gathering));
        assert!(!ActionState::Gathering.can_transition(ActionState::Attacking));
        assert!(ActionState::Moving.can_transition(ActionState::Attacking));
        assert!(ActionState::Gathering.can_transition(ActionState::Moving));
    }

    #[test]
    fn test_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&ActionState::Idle).unwrap(), "\"idle\"");
        assert_eq!(ActionState::Gathering.to_string(), "gathering");
    }
}
