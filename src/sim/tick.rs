//! Per-frame simulation tick
//!
//! Advances the race by one display frame. Only a running state changes;
//! lost, won and idle states are frozen.

use super::collision::{aabb_overlap, car_rect, obstacle_rect, rock_rect};
use super::spawner::{random_lane_x, spawn_hazards};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Advance the game state by one tick, returning what happened
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;
    let tuning = &state.tuning;

    // Finish line scrolls toward the player
    state.finish_y += tuning.scroll_speed;

    // Steering; both keys held apply both moves
    let player = &mut state.player;
    let min_x = TRACK_LEFT;
    let max_x = TRACK_RIGHT - CAR_WIDTH;
    if state.input.left && player.pos.x > min_x + tuning.steer_margin {
        player.pos.x -= player.speed;
    }
    if state.input.right && player.pos.x < max_x - tuning.steer_margin {
        player.pos.x += player.speed;
    }
    player.pos.x = player.pos.x.clamp(min_x, max_x);

    player.pos.y -= tuning.forward_speed;

    let spawned = spawn_hazards(
        &mut state.rng,
        tuning,
        &mut state.obstacles,
        &mut state.rocks,
    );
    if spawned.obstacle {
        log::trace!("Obstacle spawned at tick {}", state.time_ticks);
        events.push(GameEvent::ObstacleSpawned);
    }
    if spawned.rocks {
        log::trace!("Rock pair spawned at tick {}", state.time_ticks);
        events.push(GameEvent::RocksSpawned);
    }

    // Obstacles hit the player and AI cars
    let hazard_speed = tuning.hazard_speed;
    let player = &mut state.player;
    let ai_cars = &mut state.ai_cars;
    let mut player_crashed = false;
    state.obstacles.retain_mut(|obs| {
        obs.pos.y += hazard_speed;
        let hit_box = obstacle_rect(obs.pos);

        if player.alive && aabb_overlap(&car_rect(player.pos), &hit_box) {
            player.alive = false;
            player_crashed = true;
        }
        for (index, ai) in ai_cars.iter_mut().enumerate() {
            if ai.alive && aabb_overlap(&car_rect(ai.pos), &hit_box) {
                ai.alive = false;
                events.push(GameEvent::AiCarWrecked { index });
            }
        }

        obs.pos.y < HEIGHT
    });

    // Rocks only threaten the player
    state.rocks.retain_mut(|rock| {
        rock.pos.y += hazard_speed;
        if player.alive && aabb_overlap(&car_rect(player.pos), &rock_rect(rock.pos)) {
            player.alive = false;
            player_crashed = true;
        }
        rock.pos.y < HEIGHT
    });

    // AI cars drift down and wrap back to the top forever
    let spawn_y = state.tuning.spawn_y;
    for ai in state.ai_cars.iter_mut().filter(|ai| ai.alive) {
        ai.pos.y += ai.speed;
        if ai.pos.y > HEIGHT {
            ai.pos.y = spawn_y;
            ai.pos.x = random_lane_x(&mut state.rng);
        }
    }

    if state.player.alive && state.player.pos.y < state.finish_y {
        state.player.finished = true;
    }

    debug_assert!(state.player.pos.is_finite(), "player position went non-finite");

    if player_crashed {
        state.phase = GamePhase::Lost;
        events.push(GameEvent::PlayerCrashed);
        log::info!("Player crashed at tick {}", state.time_ticks);
    } else if state.player.finished {
        state.phase = GamePhase::Won;
        events.push(GameEvent::PlayerFinished);
        log::info!("Player finished at tick {}", state.time_ticks);
    }

    events
}
