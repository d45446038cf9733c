//! Game clock - cumulative game time in seconds

use crate::core::error::{CoreError, Result};

/// Cumulative game time. Only moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    game_time: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_time(&self) -> f64 {
        self.game_time
    }

    /// Check a frame delta without applying it
    pub fn validate_delta(delta: f64) -> Result<()> {
        if delta.is_finite() && delta >= 0.0 {
            Ok(())
        } else {
            Err(CoreError::InvalidDelta(delta))
        }
    }

    /// Advance by `delta` seconds; negative or non-finite steps are rejected
    pub fn advance(&mut self, delta: f64) -> Result<f64> {
        Self::validate_delta(delta)?;
        self.game_time += delta;
        Ok(self.game_time)
    }

    /// Restore a saved time; negative or non-finite values restore as zero
    pub(crate) fn restore(game_time: f64) -> Self {
        let game_time = if game_time.is_finite() && game_time > 0.0 {
            game_time
        } else {
            0.0
        };
        Self { game_time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.advance(0.5).unwrap(), 0.5);
        assert_eq!(clock.advance(0.0).unwrap(), 0.5);
        assert_eq!(clock.advance(1.25).unwrap(), 1.75);
    }

    #[test]
    fn test_rejects_bad_deltas() {
        let mut clock = SimulationClock::new();
        clock.advance(2.0).unwrap();

        for bad in [-0.1, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(clock.advance(bad), Err(CoreError::InvalidDelta(_))));
        }
        assert_eq!(clock.game_time(), 2.0);
    }

    #[test]
    fn test_restore_sanitizes() {
        assert_eq!(SimulationClock::restore(12.5).game_time(), 12.5);
        assert_eq!(SimulationClock::restore(-3.0).game_time(), 0.0);
        assert_eq!(SimulationClock::restore(f64::NAN).game_time(), 0.0);
    }
}
