//! Survival-time difficulty ramp
//!
//! The only place game balance scales. Both knobs are pure functions of
//! accumulated survival seconds, monotonic until their clamp. Consumers
//! re-read the current values every tick rather than caching them.

use crate::consts::*;

/// Current balance knobs, recomputed every Playing tick.
///
/// Single-writer: only the tick's difficulty step writes this; the spawner
/// and entity motion read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Rate the trench advances toward the viewer (units/sec)
    pub scroll_speed: f32,
    /// Ticks between fighter spawns
    pub spawn_interval: f32,
}

impl Difficulty {
    /// Knobs for a freshly started run
    pub fn base() -> Self {
        Self::at(0.0)
    }

    /// Knobs after `survival_secs` of play
    pub fn at(survival_secs: f32) -> Self {
        Self {
            scroll_speed: (SCROLL_BASE + survival_secs * SCROLL_RAMP).min(SCROLL_MAX),
            spawn_interval: (SPAWN_INTERVAL_BASE - survival_secs * SPAWN_INTERVAL_RAMP)
                .max(SPAWN_INTERVAL_MIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn base_matches_time_zero() {
        let d = Difficulty::base();
        assert_eq!(d.scroll_speed, SCROLL_BASE);
        assert_eq!(d.spawn_interval, SPAWN_INTERVAL_BASE);
    }

    #[test]
    fn both_knobs_clamp() {
        let d = Difficulty::at(1e6);
        assert_eq!(d.scroll_speed, SCROLL_MAX);
        assert_eq!(d.spawn_interval, SPAWN_INTERVAL_MIN);
    }

    #[test]
    fn clamped_values_stay_constant() {
        let a = Difficulty::at(1e4);
        let b = Difficulty::at(2e4);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn ramp_is_monotonic(t in 0.0..10_000.0f32, dt in 0.0..1_000.0f32) {
            let early = Difficulty::at(t);
            let late = Difficulty::at(t + dt);
            prop_assert!(late.scroll_speed >= early.scroll_speed);
            prop_assert!(late.spawn_interval <= early.spawn_interval);
            prop_assert!(late.scroll_speed <= SCROLL_MAX);
            prop_assert!(late.spawn_interval >= SPAWN_INTERVAL_MIN);
        }
    }
}
