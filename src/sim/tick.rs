//! Fixed-step simulation tick
//!
//! One logical pass per frame: read input, move the player, advance every
//! entity, spawn, collide, apply outcomes, advance difficulty, prune. The
//! host calls this at the fixed cadence and inspects the result; an error
//! means the session is unrecoverable and must stop.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::difficulty::Difficulty;
use super::error::SimError;
use super::project;
use super::spawn;
use super::state::{EnemyLaser, GamePhase, GameState, PlayerLaser};
use crate::consts::*;

/// Input signals sampled once per tick, before simulation advances
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub restart: bool,
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<(), SimError> {
    match state.phase {
        GamePhase::Playing => playing_tick(state, input)?,
        GamePhase::Victory | GamePhase::Defeat => ended_tick(state, input),
    }
    state.tick_count += 1;
    Ok(())
}

fn playing_tick(state: &mut GameState, input: &TickInput) -> Result<(), SimError> {
    // One-frame pulse: cleared unconditionally, set again on damage
    state.player.hit_flash = false;

    move_player(state, input);
    update_shake(state);
    fire_laser(state, input);
    advance_entities(state);
    spawn::run(state);
    resolve_collisions(state)?;

    state.player.survival_secs += SIM_DT;
    state.difficulty = Difficulty::at(state.player.survival_secs);

    prune(state);
    check_invariants(state)
}

/// Victory/Defeat: existing effects finish playing, nothing new spawns,
/// and the restart signal is honored after the post-transition delay.
fn ended_tick(state: &mut GameState, input: &TickInput) {
    // The one-frame damage pulse must not outlive the tick that set it
    state.player.hit_flash = false;

    update_shake(state);
    for e in &mut state.explosions {
        e.step();
    }
    state.explosions.retain(|e| !e.expired());

    state.end_ticks = state.end_ticks.saturating_add(1);
    if input.restart && state.end_ticks >= RESTART_DELAY_TICKS {
        state.restart();
    }
}

fn move_player(state: &mut GameState, input: &TickInput) {
    let mut dir = Vec2::ZERO;
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }
    let pos = &mut state.player.pos;
    *pos += dir * PLAYER_SPEED * SIM_DT;
    pos.x = pos.x.clamp(PLAY_MARGIN, VIEW_WIDTH - PLAY_MARGIN);
    pos.y = pos.y.clamp(PLAY_MARGIN, VIEW_HEIGHT - PLAY_MARGIN);
}

/// Shake intensity fades linearly with the remaining timer
fn update_shake(state: &mut GameState) {
    if state.player.shake_ticks > 0 {
        state.player.shake_ticks -= 1;
        let strength = state.player.shake_ticks as f32 / SHAKE_TICKS as f32;
        let jx = state.rng.random_range(-1.0..=1.0f32);
        let jy = state.rng.random_range(-1.0..=1.0f32);
        state.player.shake_offset = Vec2::new(jx, jy) * SHAKE_AMPLITUDE * strength;
    } else {
        state.player.shake_offset = Vec2::ZERO;
    }
}

fn fire_laser(state: &mut GameState, input: &TickInput) {
    if state.fire_cooldown > 0 {
        state.fire_cooldown -= 1;
    }
    if input.fire && state.fire_cooldown == 0 {
        state.lasers.push(PlayerLaser {
            pos: state.player.pos.extend(0.0),
        });
        state.fire_cooldown = FIRE_COOLDOWN_TICKS;
    }
}

fn advance_entities(state: &mut GameState) {
    let scroll = state.difficulty.scroll_speed;

    // Fighters move and run their shoot timers; new lasers are buffered so
    // the collection is not grown mid-scan
    let mut shots = Vec::new();
    for fighter in &mut state.fighters {
        fighter.advance(SIM_DT, scroll);
        if fighter.tick_shoot(&mut state.rng) {
            shots.push(fighter.pos);
        }
    }
    state
        .enemy_lasers
        .extend(shots.into_iter().map(|pos| EnemyLaser { pos }));

    for laser in &mut state.lasers {
        laser.advance(SIM_DT);
    }
    for laser in &mut state.enemy_lasers {
        laser.advance(SIM_DT, scroll);
    }
    for powerup in &mut state.powerups {
        powerup.advance(SIM_DT, scroll);
    }
    for explosion in &mut state.explosions {
        explosion.step();
    }
}

/// Run every projectile/target pairing once. Consumed entities are marked
/// or index-buffered so nothing resolves twice in the same tick and
/// nothing is removed mid-scan.
fn resolve_collisions(state: &mut GameState) -> Result<(), SimError> {
    // Player lasers vs fighters: first un-destroyed fighter consumes the laser
    let mut spent = Vec::new();
    let mut kills = Vec::new();
    for (li, laser) in state.lasers.iter().enumerate() {
        for fighter in state.fighters.iter_mut() {
            if fighter.destroyed {
                continue;
            }
            if collision::hybrid_hit(
                fighter.pos,
                laser.pos,
                FIGHTER_HIT_RADIUS,
                LASER_DEPTH_TOLERANCE,
            ) {
                fighter.destroyed = true;
                spent.push(li);
                kills.push(fighter.pos);
                break;
            }
        }
    }
    for li in spent.into_iter().rev() {
        state.lasers.remove(li);
    }
    for pos in kills {
        state.player.score += SCORE_PER_KILL;
        state.player.kills += 1;
        state.spawn_burst(pos, KILL_BURST, 18.0);
        log::debug!("fighter destroyed, score {}", state.player.score);
    }

    // Fighters ramming the player, evaluated inside the near-camera band
    let player_pos = state.player.pos.extend(0.0);
    let mut rams = Vec::new();
    for fighter in state.fighters.iter_mut() {
        if fighter.destroyed {
            continue;
        }
        if collision::hybrid_hit(fighter.pos, player_pos, RAM_RADIUS, RAM_DEPTH_BAND) {
            fighter.destroyed = true;
            rams.push(fighter.pos);
        }
    }
    for pos in rams {
        state.spawn_burst(pos, HIT_BURST, 24.0);
        damage_player(state, COLLISION_DAMAGE)?;
    }

    // Enemy lasers vs the player
    let mut hits = Vec::new();
    for (i, laser) in state.enemy_lasers.iter().enumerate() {
        if collision::hybrid_hit(
            player_pos,
            laser.pos,
            ENEMY_LASER_RADIUS,
            ENEMY_LASER_DEPTH_BAND,
        ) {
            hits.push(i);
        }
    }
    let hit_count = hits.len();
    for i in hits.into_iter().rev() {
        state.enemy_lasers.remove(i);
    }
    for _ in 0..hit_count {
        damage_player(state, LASER_DAMAGE)?;
    }

    // Power-up collection
    let mut collects = Vec::new();
    for powerup in state.powerups.iter_mut() {
        if powerup.collected {
            continue;
        }
        if collision::hybrid_hit(powerup.pos, player_pos, PICKUP_RADIUS, PICKUP_DEPTH_BAND) {
            powerup.collected = true;
            collects.push(powerup.pos);
        }
    }
    for pos in collects {
        state.player.heal(HEALTH_RESTORE)?;
        state.spawn_burst(pos, HEAL_BURST, 14.0);
        log::debug!("power-up collected, health {}", state.player.health);
    }

    Ok(())
}

/// Damage with the full hit reaction; zero health ends the run
fn damage_player(state: &mut GameState, amount: f32) -> Result<(), SimError> {
    state.player.take_damage(amount)?;
    let pos = state.player.pos.extend(0.0);
    state.spawn_burst(pos, HIT_BURST, 12.0);
    if state.player.health <= 0.0 && state.phase == GamePhase::Playing {
        state.phase = GamePhase::Defeat;
        state.end_ticks = 0;
        state.spawn_burst(pos, DEATH_BURST, 40.0);
        log::info!(
            "craft destroyed after {:.1}s, score {}",
            state.player.survival_secs,
            state.player.score
        );
    }
    Ok(())
}

fn prune(state: &mut GameState) {
    state.fighters.retain(|f| !f.destroyed && project::visible(f.pos));
    state.lasers.retain(|l| l.pos.z <= TRENCH_DEPTH);
    state.enemy_lasers.retain(|l| project::visible(l.pos));
    state.powerups.retain(|p| !p.collected && project::visible(p.pos));
    state.explosions.retain(|e| !e.expired());
}

/// Anything non-finite here means a logic defect upstream; the entity
/// collections cannot be trusted and the session must stop.
fn check_invariants(state: &GameState) -> Result<(), SimError> {
    if !state.player.pos.is_finite() || !state.player.health.is_finite() {
        return Err(SimError::CorruptState("player state is non-finite"));
    }
    Ok(())
}
