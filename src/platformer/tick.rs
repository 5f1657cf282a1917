//! Platformer simulation tick

use glam::Vec2;

use super::state::{
    ATTACK_DAMAGE, ATTACK_RANGE, CAST_DAMAGE, CAST_RADIUS, CONTACT_DAMAGE, CONTACT_RANGE,
    EXP_PER_KILL, FALL_DAMAGE, FRICTION, Facing, GRAVITY, HERO_HALF, HERO_START, INVULN_TICKS,
    JUMP_IMPULSE, KILL_PLANE_Y, KNOCKBACK, MANA_REGEN, MAX_RUN_SPEED, MOVE_ACCEL,
    PlatformerState, SPEED_EPSILON, VIEW, WORLD,
};
use crate::input::{Control, Inputs};
use crate::sim::collision::Aabb;
use crate::sim::{ActionKind, Simulate, TickOutcome, camera, proximity_hit, resolve_first};

/// Palette indices for the render collaborator.
const HIT_COLOR: u32 = 2;
const DEATH_COLOR: u32 = 3;
const CAST_COLOR: u32 = 4;
const RESPAWN_COLOR: u32 = 5;

impl Simulate for PlatformerState {
    fn reset(&mut self, epoch: u64) {
        let best_exp = self.best_exp;
        *self = PlatformerState::new(self.base_seed.wrapping_add(epoch));
        self.best_exp = best_exp;
        self.epoch = epoch;
    }

    fn sim_tick(&mut self, inputs: &Inputs) -> TickOutcome {
        move_hero(self, inputs);
        apply_physics(self);
        combat_actions(self, inputs);
        patrol_enemies(self);
        contact_damage(self);
        self.hero.mana.regen(MANA_REGEN);
        self.particles.advance();
        self.camera = camera::follow(self.hero.pos, VIEW, WORLD);

        if self.hero.health.is_empty() {
            hero_down(self);
            return TickOutcome::Over;
        }
        TickOutcome::Running
    }

    fn score_tick(&mut self) {
        self.play_time_ms += crate::consts::SCORE_DT_MS as u64;
    }

    fn advance_timers(&mut self, elapsed_ms: f64, epoch: u64) {
        self.locks.advance(elapsed_ms, epoch);
    }

    fn fade_tick(&mut self) {
        self.particles.advance();
    }

    fn halt(&mut self) {
        self.locks.clear();
        self.particles.clear();
    }
}

fn move_hero(state: &mut PlatformerState, inputs: &Inputs) {
    let hero = &mut state.hero;

    let axis = inputs.axis_x();
    if axis != 0.0 {
        hero.vel.x = (hero.vel.x + axis * MOVE_ACCEL).clamp(-MAX_RUN_SPEED, MAX_RUN_SPEED);
        hero.facing = if axis < 0.0 { Facing::Left } else { Facing::Right };
    } else {
        hero.vel.x *= FRICTION;
        if hero.vel.x.abs() < SPEED_EPSILON {
            hero.vel.x = 0.0;
        }
    }

    // Edge-triggered: holding the key does not re-fire on landing.
    let jump = inputs.held(Control::Jump);
    if jump && !hero.jump_was_held && hero.grounded {
        hero.vel.y = JUMP_IMPULSE;
        hero.grounded = false;
    }
    hero.jump_was_held = jump;
}

fn apply_physics(state: &mut PlatformerState) {
    let hero = &mut state.hero;

    if hero.grounded {
        // Stay grounded only while something still holds the hero up.
        let probe = Aabb::new(hero.pos + Vec2::new(0.0, 1.0), HERO_HALF);
        if !state.solids.iter().any(|solid| probe.overlaps(solid)) {
            hero.grounded = false;
        }
    } else {
        hero.vel.y += GRAVITY;
    }

    let prev = hero.pos;
    hero.pos += hero.vel;
    if let Some(contact) = resolve_first(HERO_HALF, prev, hero.pos, hero.vel, &state.solids) {
        hero.pos = contact.pos;
        hero.vel = contact.vel;
        if contact.grounded {
            hero.grounded = true;
        }
    }

    if state.hero.pos.y - HERO_HALF.y > KILL_PLANE_Y {
        fall_respawn(state);
    }
}

fn fall_respawn(state: &mut PlatformerState) {
    let hero = &mut state.hero;
    hero.health.drain(FALL_DAMAGE);
    hero.pos = HERO_START;
    hero.vel = Vec2::ZERO;
    hero.grounded = false;
    state.locks.clear();
    state
        .locks
        .try_activate(ActionKind::Respawn, None, state.epoch);
    state
        .particles
        .spawn(&mut state.rng, HERO_START, RESPAWN_COLOR, 12);
    log::info!(
        "fell out of the world, {:.0} health left",
        state.hero.health.current()
    );
}

fn combat_actions(state: &mut PlatformerState, inputs: &Inputs) {
    if inputs.held(Control::Attack)
        && state
            .locks
            .try_activate(ActionKind::Attack, None, state.epoch)
    {
        swing(state);
    }

    if inputs.held(Control::Cast)
        && state
            .locks
            .try_activate(ActionKind::Cast, Some(&mut state.hero.mana), state.epoch)
    {
        nova(state);
    }
}

/// Melee swing: hurts every enemy within reach on the facing side.
fn swing(state: &mut PlatformerState) {
    let origin = state.hero.pos;
    let side = state.hero.facing.sign();
    for enemy in &mut state.enemies {
        let toward = enemy.pos.x - origin.x;
        if toward * side >= 0.0 && proximity_hit(enemy.pos, origin, ATTACK_RANGE) {
            enemy.health.drain(ATTACK_DAMAGE);
            state.particles.spawn(&mut state.rng, enemy.pos, HIT_COLOR, 6);
        }
    }
    reap(state);
}

/// Cast nova: hurts every enemy in a radius around the hero.
fn nova(state: &mut PlatformerState) {
    let origin = state.hero.pos;
    state
        .particles
        .spawn(&mut state.rng, origin, CAST_COLOR, 20);
    for enemy in &mut state.enemies {
        if proximity_hit(enemy.pos, origin, CAST_RADIUS) {
            enemy.health.drain(CAST_DAMAGE);
        }
    }
    reap(state);
}

/// Remove dead enemies, pay out experience and burst particles.
fn reap(state: &mut PlatformerState) {
    let mut slain = Vec::new();
    state.enemies.retain(|enemy| {
        if enemy.health.is_empty() {
            slain.push(enemy.pos);
            false
        } else {
            true
        }
    });
    for pos in slain {
        state
            .particles
            .spawn(&mut state.rng, pos, DEATH_COLOR, 10);
        gain_exp(state, EXP_PER_KILL);
    }
}

fn gain_exp(state: &mut PlatformerState, amount: u32) {
    let hero = &mut state.hero;
    hero.exp += amount;
    hero.exp_earned += amount;
    while hero.exp >= hero.exp_to_level() {
        hero.exp -= hero.exp_to_level();
        hero.level += 1;
        hero.health.raise_max(10.0);
        hero.mana.raise_max(5.0);
        log::info!("level up, now {}", hero.level);
    }
}

fn patrol_enemies(state: &mut PlatformerState) {
    for enemy in &mut state.enemies {
        enemy.pos.x += enemy.vel.x;
        if enemy.pos.x <= enemy.patrol_min {
            enemy.pos.x = enemy.patrol_min;
            enemy.vel.x = enemy.vel.x.abs();
        } else if enemy.pos.x >= enemy.patrol_max {
            enemy.pos.x = enemy.patrol_max;
            enemy.vel.x = -enemy.vel.x.abs();
        }
    }
}

fn contact_damage(state: &mut PlatformerState) {
    if state.hero.invuln_ticks > 0 {
        state.hero.invuln_ticks -= 1;
        return;
    }
    if state.locks.is_active(ActionKind::Respawn) {
        return;
    }

    let hero_pos = state.hero.pos;
    let Some(enemy_x) = state
        .enemies
        .iter()
        .find(|enemy| proximity_hit(enemy.pos, hero_pos, CONTACT_RANGE))
        .map(|enemy| enemy.pos.x)
    else {
        return;
    };

    let hero = &mut state.hero;
    hero.health.drain(CONTACT_DAMAGE);
    hero.invuln_ticks = INVULN_TICKS;
    let away = if hero_pos.x < enemy_x { -1.0 } else { 1.0 };
    hero.vel = Vec2::new(KNOCKBACK.x * away, KNOCKBACK.y);
    hero.grounded = false;
    state
        .particles
        .spawn(&mut state.rng, hero_pos, HIT_COLOR, 6);
}

fn hero_down(state: &mut PlatformerState) {
    state
        .particles
        .spawn(&mut state.rng, state.hero.pos, DEATH_COLOR, 16);
    let improved = state.best_exp.offer(state.hero.exp_earned as u64);
    log::info!(
        "hero down at level {} with {} exp{}",
        state.hero.level,
        state.hero.exp_earned,
        if improved { " (best)" } else { "" }
    );
}
