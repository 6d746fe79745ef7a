//! Render-contract frame snapshot
//!
//! The read-only view handed to the presentation layer each tick: player
//! state plus every active entity already projected into screen space.
//! The core never draws; whoever consumes a `Frame` does. Serializable so
//! a host can dump or stream frames for debugging.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::project;
use super::state::{GamePhase, GameState};

/// A projected entity: screen position, perspective scale, and the
/// trench depth it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub screen: Vec2,
    pub scale: f32,
    pub depth: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplosionSprite {
    pub screen: Vec2,
    pub scale: f32,
    pub size: f32,
    /// 0.0 fresh, 1.0 expired
    pub progress: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub health: f32,
    /// Whole-frame jitter, already faded by the shake timer
    pub shake_offset: Vec2,
    /// One-tick damage pulse
    pub hit_flash: bool,
    pub phase: GamePhase,
}

/// End-of-run statistics, discarded on restart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub score: u32,
    pub kills: u32,
    pub spawned: u32,
    pub survival_secs: f32,
}

impl RunStats {
    /// Kill percentage; defined as 0 before anything has spawned
    pub fn accuracy(&self) -> f32 {
        if self.spawned == 0 {
            0.0
        } else {
            self.kills as f32 / self.spawned as f32 * 100.0
        }
    }
}

/// Everything the presentation layer needs to draw one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub player: PlayerView,
    pub stats: RunStats,
    pub fighters: Vec<Sprite>,
    pub lasers: Vec<Sprite>,
    pub enemy_lasers: Vec<Sprite>,
    pub powerups: Vec<Sprite>,
    pub explosions: Vec<ExplosionSprite>,
}

fn sprite(pos: Vec3) -> Option<Sprite> {
    project::project(pos).map(|p| Sprite {
        screen: p.screen,
        scale: p.scale,
        depth: pos.z,
    })
}

impl GameState {
    /// Project the current state for drawing. Entities behind the camera
    /// are omitted, matching what collision sees.
    pub fn frame(&self) -> Frame {
        Frame {
            player: PlayerView {
                pos: self.player.pos,
                health: self.player.health,
                shake_offset: self.player.shake_offset,
                hit_flash: self.player.hit_flash,
                phase: self.phase,
            },
            stats: RunStats {
                score: self.player.score,
                kills: self.player.kills,
                spawned: self.player.spawned,
                survival_secs: self.player.survival_secs,
            },
            fighters: self.fighters.iter().filter_map(|f| sprite(f.pos)).collect(),
            lasers: self.lasers.iter().filter_map(|l| sprite(l.pos)).collect(),
            enemy_lasers: self
                .enemy_lasers
                .iter()
                .filter_map(|l| sprite(l.pos))
                .collect(),
            powerups: self.powerups.iter().filter_map(|p| sprite(p.pos)).collect(),
            explosions: self
                .explosions
                .iter()
                .filter_map(|e| {
                    project::project(e.pos).map(|p| ExplosionSprite {
                        screen: p.screen,
                        scale: p.scale,
                        size: e.size,
                        progress: e.progress(),
                    })
                })
                .collect(),
        }
    }
}
