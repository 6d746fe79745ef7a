//! Trench Run - a perspective-scrolling arcade shooter simulation core
//!
//! The player craft holds the near plane of a scrolling trench while
//! hostile fighters, lasers, and power-ups approach along a signed depth
//! axis. Everything gameplay-related lives in `sim`; rendering, window
//! management, audio, and input polling are the host's problem. Each tick
//! the host feeds sampled input signals in and takes a projected frame
//! snapshot out.

pub mod sim;

pub use sim::{Frame, GamePhase, GameState, SimError, TickInput, tick};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Viewport the projector maps trench space onto
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;
    pub const VIEW_CENTER: Vec2 = Vec2::new(VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0);
    /// Entities projected outside the viewport by more than this are pruned
    pub const OFFSCREEN_MARGIN: f32 = 100.0;

    /// Perspective constant: scale = 1 / (depth * K + 1)
    pub const PERSPECTIVE_K: f32 = 0.01;
    /// Depths at or behind this are behind the camera and never projected
    pub const NEAR_PLANE_DEPTH: f32 = -1.0 / PERSPECTIVE_K;

    /// Depth hostiles and power-ups spawn at
    pub const SPAWN_DEPTH: f32 = 1000.0;
    /// Player lasers past this depth have left the trench
    pub const TRENCH_DEPTH: f32 = 1200.0;

    /// Player craft
    pub const PLAYER_SPEED: f32 = 300.0;
    /// Play-plane margin the craft cannot cross
    pub const PLAY_MARGIN: f32 = 60.0;
    pub const HEALTH_MAX: f32 = 100.0;
    pub const COLLISION_DAMAGE: f32 = 15.0;
    pub const LASER_DAMAGE: f32 = 10.0;
    pub const HEALTH_RESTORE: f32 = 30.0;
    pub const SCORE_PER_KILL: u32 = 10;
    /// Screen shake duration after a hit; jitter fades linearly to zero
    pub const SHAKE_TICKS: u32 = 20;
    pub const SHAKE_AMPLITUDE: f32 = 6.0;
    /// Ticks between lasers while the fire signal is held
    pub const FIRE_COOLDOWN_TICKS: u32 = 8;

    /// Projectile and power-up speeds (trench units per second)
    pub const LASER_SPEED: f32 = 720.0;
    pub const ENEMY_LASER_FACTOR: f32 = 0.7;
    pub const POWERUP_DRIFT: f32 = 120.0;

    /// Scroll speed ramp: base + survival_secs * ramp, clamped to max
    pub const SCROLL_BASE: f32 = 60.0;
    pub const SCROLL_MAX: f32 = 240.0;
    pub const SCROLL_RAMP: f32 = 3.0;
    /// Baseline advance every hostile gets on top of the scroll speed
    pub const SCROLL_UNIT: f32 = 60.0;
    pub const FIGHTER_SPEED_FACTOR: f32 = 1.1;

    /// Fighter spawn interval ramp (ticks): base - survival_secs * ramp
    pub const SPAWN_INTERVAL_BASE: f32 = 150.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 45.0;
    pub const SPAWN_INTERVAL_RAMP: f32 = 1.5;
    pub const POWERUP_SPAWN_INTERVAL: u32 = 900;
    /// Lateral spawn scatter around the view center
    pub const SPAWN_SPREAD_X: f32 = 250.0;
    pub const FIGHTER_SHOOT_MIN_TICKS: u32 = 60;
    pub const FIGHTER_SHOOT_MAX_TICKS: u32 = 180;

    /// Hitbox radii (screen px at scale 1; scaled by the target's projection)
    pub const FIGHTER_HIT_RADIUS: f32 = 30.0;
    /// Depth gate for laser-vs-fighter hits
    pub const LASER_DEPTH_TOLERANCE: f32 = 70.0;
    /// Fighter ramming the player, evaluated near the camera plane
    pub const RAM_RADIUS: f32 = 55.0;
    pub const RAM_DEPTH_BAND: f32 = 40.0;
    pub const ENEMY_LASER_RADIUS: f32 = 32.0;
    pub const ENEMY_LASER_DEPTH_BAND: f32 = 25.0;
    pub const PICKUP_RADIUS: f32 = 55.0;
    pub const PICKUP_DEPTH_BAND: f32 = 40.0;

    /// Explosions are decorative and self-expire
    pub const EXPLOSION_LIFETIME_TICKS: u32 = 30;
    pub const KILL_BURST: usize = 6;
    pub const HIT_BURST: usize = 4;
    pub const HEAL_BURST: usize = 5;
    pub const DEATH_BURST: usize = 16;

    /// Minimum ticks in Victory/Defeat before restart input is honored
    pub const RESTART_DELAY_TICKS: u32 = 60;
}
