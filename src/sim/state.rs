//! Simulation state: entities, the player craft, and run bookkeeping
//!
//! Every mobile entity carries a trench-space position `(x, y, z)` and a
//! per-tick displacement rule. The entity set owns the transient
//! collections; the player craft owns health, score, and hit-reaction
//! state; `Difficulty` owns the balance scalars.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::error::SimError;
use super::spawn::SpawnTimers;
use crate::consts::*;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active run
    Playing,
    /// Terminal objective reached; machinery only, no in-core trigger
    Victory,
    /// Player craft destroyed
    Defeat,
}

/// A hostile craft approaching down the trench
#[derive(Debug, Clone)]
pub struct Fighter {
    pub pos: Vec3,
    /// Consumed by a hit this tick; swept at end of tick, never reused
    pub destroyed: bool,
    /// Ticks until the next enemy laser
    pub shoot_ticks: u32,
}

impl Fighter {
    pub fn new(pos: Vec3, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            destroyed: false,
            shoot_ticks: rng.random_range(FIGHTER_SHOOT_MIN_TICKS..=FIGHTER_SHOOT_MAX_TICKS),
        }
    }

    /// Speed derives from the current scroll speed, re-read every tick
    pub fn advance(&mut self, dt: f32, scroll_speed: f32) {
        self.pos.z -= (scroll_speed + SCROLL_UNIT) * FIGHTER_SPEED_FACTOR * dt;
    }

    /// Counts the shoot timer down; on expiry re-arms with a fresh draw
    /// and reports that a laser should be fired this tick.
    pub fn tick_shoot(&mut self, rng: &mut impl Rng) -> bool {
        if self.shoot_ticks == 0 {
            self.shoot_ticks =
                rng.random_range(FIGHTER_SHOOT_MIN_TICKS..=FIGHTER_SHOOT_MAX_TICKS);
            true
        } else {
            self.shoot_ticks -= 1;
            false
        }
    }
}

/// Player-fired shot, moving away from the viewer
#[derive(Debug, Clone)]
pub struct PlayerLaser {
    pub pos: Vec3,
}

impl PlayerLaser {
    pub fn advance(&mut self, dt: f32) {
        self.pos.z += LASER_SPEED * dt;
    }
}

/// Hostile shot, moving toward the viewer
#[derive(Debug, Clone)]
pub struct EnemyLaser {
    pub pos: Vec3,
}

impl EnemyLaser {
    pub fn advance(&mut self, dt: f32, scroll_speed: f32) {
        self.pos.z -= (LASER_SPEED * ENEMY_LASER_FACTOR + scroll_speed) * dt;
    }
}

/// Health pickup drifting toward the viewer
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec3,
    pub collected: bool,
}

impl PowerUp {
    pub fn advance(&mut self, dt: f32, scroll_speed: f32) {
        self.pos.z -= (scroll_speed + POWERUP_DRIFT) * dt;
    }
}

/// Decorative blast; no collision, self-expires
#[derive(Debug, Clone)]
pub struct Explosion {
    pub pos: Vec3,
    pub size: f32,
    pub age_ticks: u32,
    pub lifetime_ticks: u32,
}

impl Explosion {
    pub fn step(&mut self) {
        self.age_ticks += 1;
    }

    pub fn expired(&self) -> bool {
        self.age_ticks >= self.lifetime_ticks
    }

    /// 0.0 fresh, 1.0 expired
    pub fn progress(&self) -> f32 {
        self.age_ticks as f32 / self.lifetime_ticks as f32
    }
}

/// The player craft and its run statistics
#[derive(Debug, Clone)]
pub struct Player {
    /// Play-plane position; depth is fixed at 0
    pub pos: Vec2,
    pub health: f32,
    pub score: u32,
    pub kills: u32,
    /// Fighters spawned this run, for end-of-run accuracy
    pub spawned: u32,
    pub survival_secs: f32,
    pub shake_ticks: u32,
    /// Jitter the presentation applies to the whole frame this tick
    pub shake_offset: Vec2,
    /// One-tick pulse consumed by the presentation layer
    pub hit_flash: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(VIEW_CENTER.x, VIEW_HEIGHT - 100.0),
            health: HEALTH_MAX,
            score: 0,
            kills: 0,
            spawned: 0,
            survival_secs: 0.0,
            shake_ticks: 0,
            shake_offset: Vec2::ZERO,
            hit_flash: false,
        }
    }

    /// Reduce health, clamped at zero, and start the hit reaction.
    /// Negative or non-finite amounts are contract violations.
    pub fn take_damage(&mut self, amount: f32) -> Result<(), SimError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(SimError::InvalidAmount { op: "damage", amount });
        }
        self.health = (self.health - amount).max(0.0);
        self.shake_ticks = SHAKE_TICKS;
        self.hit_flash = true;
        Ok(())
    }

    /// Restore health up to the cap
    pub fn heal(&mut self, amount: f32) -> Result<(), SimError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(SimError::InvalidAmount { op: "heal", amount });
        }
        self.health = (self.health + amount).min(HEALTH_MAX);
        Ok(())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete simulation state for one session
///
/// Single mutator: the tick's one pass. All randomness flows through the
/// state-owned seeded RNG, so a fixed seed reproduces a run exactly.
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub fighters: Vec<Fighter>,
    pub lasers: Vec<PlayerLaser>,
    pub enemy_lasers: Vec<EnemyLaser>,
    pub powerups: Vec<PowerUp>,
    pub explosions: Vec<Explosion>,
    pub difficulty: Difficulty,
    pub spawn_timers: SpawnTimers,
    pub tick_count: u64,
    /// Ticks until the fire signal may produce another laser
    pub fire_cooldown: u32,
    /// Ticks spent in Victory/Defeat, gating the restart input
    pub end_ticks: u32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        log::info!("new run, seed {seed}");
        Self {
            seed,
            phase: GamePhase::Playing,
            player: Player::new(),
            fighters: Vec::new(),
            lasers: Vec::new(),
            enemy_lasers: Vec::new(),
            powerups: Vec::new(),
            explosions: Vec::new(),
            difficulty: Difficulty::base(),
            spawn_timers: SpawnTimers::default(),
            tick_count: 0,
            fire_cooldown: 0,
            end_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset to a fresh run in place. The RNG stream carries over so a
    /// restarted run does not replay the previous run's spawns.
    pub fn restart(&mut self) {
        log::info!(
            "restart after {:.1}s, score {}",
            self.player.survival_secs,
            self.player.score
        );
        self.phase = GamePhase::Playing;
        self.player = Player::new();
        self.fighters.clear();
        self.lasers.clear();
        self.enemy_lasers.clear();
        self.powerups.clear();
        self.explosions.clear();
        self.difficulty = Difficulty::base();
        self.spawn_timers = SpawnTimers::default();
        self.tick_count = 0;
        self.fire_cooldown = 0;
        self.end_ticks = 0;
    }

    /// Transition to Victory. The terminal objective that earns this is
    /// decided outside the core; only the machinery lives here.
    pub fn trigger_victory(&mut self) {
        if self.phase == GamePhase::Playing {
            log::info!("victory at {:.1}s", self.player.survival_secs);
            self.phase = GamePhase::Victory;
            self.end_ticks = 0;
        }
    }

    /// Scatter a cluster of short-lived explosions around a point
    pub fn spawn_burst(&mut self, center: Vec3, count: usize, base_size: f32) {
        for _ in 0..count {
            let jitter = Vec3::new(
                self.rng.random_range(-20.0..=20.0),
                self.rng.random_range(-20.0..=20.0),
                self.rng.random_range(-10.0..=10.0),
            );
            let size = base_size * self.rng.random_range(0.6..=1.4);
            let lifetime = EXPLOSION_LIFETIME_TICKS
                + self.rng.random_range(0..=EXPLOSION_LIFETIME_TICKS / 2);
            self.explosions.push(Explosion {
                pos: center + jitter,
                size,
                age_ticks: 0,
                lifetime_ticks: lifetime,
            });
        }
    }
}
