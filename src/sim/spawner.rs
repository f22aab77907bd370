//! Hazard spawning and AI car placement
//!
//! Every draw goes through the state's seeded RNG so a run is reproducible
//! from its seed.

use glam::Vec2;
use rand::Rng;

use super::state::{Car, Hazard};
use crate::consts::*;
use crate::tuning::Tuning;

/// What a single spawner pass produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnResult {
    pub obstacle: bool,
    pub rocks: bool,
}

/// Uniform sample in `[min, min + span)`
#[inline]
fn sample<R: Rng>(rng: &mut R, min: f32, span: f32) -> f32 {
    min + rng.random::<f32>() * span
}

/// One Bernoulli trial. Chances outside `[0, 1]` saturate instead of panicking.
#[inline]
fn roll<R: Rng>(rng: &mut R, chance: f64) -> bool {
    rng.random::<f64>() < chance
}

/// Run both Bernoulli trials for one tick, appending new hazards
pub fn spawn_hazards<R: Rng>(
    rng: &mut R,
    tuning: &Tuning,
    obstacles: &mut Vec<Hazard>,
    rocks: &mut Vec<Hazard>,
) -> SpawnResult {
    let mut result = SpawnResult::default();

    if roll(rng, tuning.obstacle_chance) {
        let half = OBSTACLE_SIZE / 2.0;
        let x = sample(rng, TRACK_LEFT + half, TRACK_RIGHT - TRACK_LEFT - OBSTACLE_SIZE);
        obstacles.push(Hazard::new(Vec2::new(x, tuning.spawn_y)));
        result.obstacle = true;
    }

    // Rocks come in pairs hugging both edges, leaving the middle passable
    if roll(rng, tuning.rock_chance) {
        let left = sample(rng, tuning.rock_edge_offset, tuning.rock_spread);
        let right = sample(
            rng,
            WIDTH - tuning.rock_edge_offset - tuning.rock_spread,
            tuning.rock_spread,
        );
        rocks.push(Hazard::new(Vec2::new(left, tuning.spawn_y)));
        rocks.push(Hazard::new(Vec2::new(right, tuning.spawn_y)));
        result.rocks = true;
    }

    result
}

/// Random x for a car fully inside the track
pub fn random_lane_x<R: Rng>(rng: &mut R) -> f32 {
    sample(rng, TRACK_LEFT, TRACK_RIGHT - TRACK_LEFT - CAR_WIDTH)
}

/// Build the AI field for a fresh race
pub fn spawn_ai_cars<R: Rng>(rng: &mut R, tuning: &Tuning) -> Vec<Car> {
    (0..tuning.ai_car_count)
        .map(|_| {
            let x = random_lane_x(rng);
            let y = sample(rng, 100.0, HEIGHT - 200.0);
            let speed = sample(rng, tuning.ai_min_speed, tuning.ai_speed_spread);
            Car::new(Vec2::new(x, y), speed)
        })
        .collect()
}
