//! Periodic hostile and power-up spawning
//!
//! Two independent tick-counted timers, active only while Playing. The
//! fighter cadence follows the difficulty-controlled interval; power-ups
//! arrive on a fixed one. Spawn positions scatter laterally around the
//! view center at the far end of the trench.

use glam::Vec3;
use rand::Rng;

use super::state::{Fighter, GameState, PowerUp};
use crate::consts::*;

/// Tick counters for both spawn cadences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnTimers {
    pub fighter_ticks: u32,
    pub powerup_ticks: u32,
}

/// Advance both timers by one tick, spawning on expiry.
pub fn run(state: &mut GameState) {
    state.spawn_timers.fighter_ticks += 1;
    if state.spawn_timers.fighter_ticks as f32 >= state.difficulty.spawn_interval {
        state.spawn_timers.fighter_ticks = 0;
        spawn_fighter(state);
    }

    state.spawn_timers.powerup_ticks += 1;
    if state.spawn_timers.powerup_ticks >= POWERUP_SPAWN_INTERVAL {
        state.spawn_timers.powerup_ticks = 0;
        spawn_powerup(state);
    }
}

/// Uniform lateral scatter at the far end of the trench; the vertical
/// offset is fixed at the view center
fn scatter(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        VIEW_CENTER.x + rng.random_range(-SPAWN_SPREAD_X..=SPAWN_SPREAD_X),
        VIEW_CENTER.y,
        SPAWN_DEPTH,
    )
}

fn spawn_fighter(state: &mut GameState) {
    let pos = scatter(&mut state.rng);
    let fighter = Fighter::new(pos, &mut state.rng);
    log::debug!("fighter spawned at {:?}", fighter.pos);
    state.fighters.push(fighter);
    state.player.spawned += 1;
}

fn spawn_powerup(state: &mut GameState) {
    let pos = scatter(&mut state.rng);
    log::debug!("power-up spawned at {pos:?}");
    state.powerups.push(PowerUp {
        pos,
        collected: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fighter_timer_fires_at_the_current_interval() {
        let mut state = GameState::new(1);
        let interval = state.difficulty.spawn_interval as u32;
        for _ in 0..interval - 1 {
            run(&mut state);
        }
        assert!(state.fighters.is_empty());
        run(&mut state);
        assert_eq!(state.fighters.len(), 1);
        assert_eq!(state.player.spawned, 1);
        assert_eq!(state.spawn_timers.fighter_ticks, 0);
    }

    #[test]
    fn powerup_timer_is_fixed() {
        let mut state = GameState::new(2);
        state.spawn_timers.powerup_ticks = POWERUP_SPAWN_INTERVAL - 1;
        run(&mut state);
        assert_eq!(state.powerups.len(), 1);
        assert_eq!(state.spawn_timers.powerup_ticks, 0);
    }

    #[test]
    fn spawns_land_in_the_documented_ranges() {
        let mut state = GameState::new(3);
        for _ in 0..50 {
            spawn_fighter(&mut state);
        }
        for f in &state.fighters {
            assert_eq!(f.pos.z, SPAWN_DEPTH);
            assert!((f.pos.x - VIEW_CENTER.x).abs() <= SPAWN_SPREAD_X);
            assert_eq!(f.pos.y, VIEW_CENTER.y);
        }
        assert_eq!(state.player.spawned, 50);
    }
}
