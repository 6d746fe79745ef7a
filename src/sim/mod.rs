//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod error;
pub mod project;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::hybrid_hit;
pub use difficulty::Difficulty;
pub use error::SimError;
pub use project::{Projection, project};
pub use snapshot::{ExplosionSprite, Frame, PlayerView, RunStats, Sprite};
pub use state::{
    EnemyLaser, Explosion, Fighter, GamePhase, GameState, Player, PlayerLaser, PowerUp,
};
pub use tick::{TickInput, tick};
