//! Game state and core simulation types
//!
//! `GameState` is owned by a single writer (the session). Readers only ever
//! see a [`Snapshot`] copy.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::{Direction, InputState};
use super::snapshot::{CarView, Snapshot};
use super::spawner;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start, or after a reset
    Idle,
    /// Ticks advance the world
    Running,
    /// Player crashed; state is frozen
    Lost,
    /// Player crossed the finish line; state is frozen
    Won,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ObstacleSpawned,
    RocksSpawned,
    AiCarWrecked { index: usize },
    PlayerCrashed,
    PlayerFinished,
}

/// A car (player or AI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per tick (steering speed for the player)
    pub speed: f32,
    pub alive: bool,
    pub finished: bool,
}

impl Car {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            speed,
            alive: true,
            finished: false,
        }
    }

    /// Player car at its start position
    pub fn player(tuning: &Tuning) -> Self {
        Self::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y), tuning.steer_speed)
    }

    pub fn view(&self) -> CarView {
        CarView {
            x: self.pos.x,
            y: self.pos.y,
            speed: self.speed,
            alive: self.alive,
            finished: self.finished,
        }
    }
}

/// An obstacle or rock; position is the centre of its box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
}

impl Hazard {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Ticks since the current race started
    pub time_ticks: u64,
    pub player: Car,
    /// AI cars in spawn order
    pub ai_cars: Vec<Car>,
    pub obstacles: Vec<Hazard>,
    pub rocks: Vec<Hazard>,
    /// Screen y of the finish line
    pub finish_y: f32,
    pub input: InputState,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an idle game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            phase: GamePhase::Idle,
            time_ticks: 0,
            player: Car::player(&tuning),
            ai_cars: Vec::new(),
            obstacles: Vec::new(),
            rocks: Vec::new(),
            finish_y: tuning.finish_start_y,
            input: InputState::default(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Begin a fresh race. Works from any phase.
    pub fn start_game(&mut self) {
        if self.phase == GamePhase::Running {
            log::debug!("start_game while running, restarting race");
        }
        self.restore_defaults();
        self.ai_cars = spawner::spawn_ai_cars(&mut self.rng, &self.tuning);
        self.phase = GamePhase::Running;
        log::info!("Race started (seed {}, {} AI cars)", self.seed, self.ai_cars.len());
    }

    /// Drop every transient entity and go back to idle
    pub fn reset_game(&mut self) {
        self.restore_defaults();
        self.phase = GamePhase::Idle;
        log::info!("Game reset");
    }

    /// Reseed the RNG; takes effect for the next race
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    fn restore_defaults(&mut self) {
        self.time_ticks = 0;
        self.player = Car::player(&self.tuning);
        self.ai_cars.clear();
        self.obstacles.clear();
        self.rocks.clear();
        self.finish_y = self.tuning.finish_start_y;
        self.input.clear();
    }

    /// Buffer a steering press/release
    pub fn set_direction(&mut self, direction: Direction, pressed: bool) {
        self.input.set_direction(direction, pressed);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Copy of everything the renderer and controller need
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            tick: self.time_ticks,
            player: self.player.view(),
            ai_cars: self.ai_cars.iter().map(Car::view).collect(),
            obstacles: self.obstacles.iter().map(|h| h.pos).collect(),
            rocks: self.rocks.iter().map(|h| h.pos).collect(),
            finish_y: self.finish_y,
            width: WIDTH,
            height: HEIGHT,
            track_left: TRACK_LEFT,
            track_right: TRACK_RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.ai_cars.is_empty());
        assert_eq!(state.player.pos, Vec2::new(250.0, 580.0));
        assert_eq!(state.finish_y, -2000.0);
    }

    #[test]
    fn test_start_builds_field_and_clears_input() {
        let mut state = GameState::new(5, Tuning::default());
        state.set_direction(Direction::Left, true);
        state.start_game();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.ai_cars.len(), AI_CAR_COUNT);
        assert_eq!(state.input, InputState::default());
        assert!(state.player.alive && !state.player.finished);
    }

    #[test]
    fn test_reset_clears_transients() {
        let mut state = GameState::new(5, Tuning::default());
        state.start_game();
        state.obstacles.push(Hazard::new(Vec2::new(100.0, 100.0)));
        state.rocks.push(Hazard::new(Vec2::new(40.0, 100.0)));
        state.player.alive = false;
        state.phase = GamePhase::Lost;
        state.set_direction(Direction::Right, true);

        state.reset_game();
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.ai_cars.is_empty());
        assert!(state.obstacles.is_empty());
        assert!(state.rocks.is_empty());
        assert!(state.player.alive);
        assert!(!state.input.right);
    }

    #[test]
    fn test_reset_twice_matches_once() {
        let mut state = GameState::new(5, Tuning::default());
        state.start_game();
        state.reset_game();
        let once = state.snapshot();
        state.reset_game();
        assert_eq!(state.snapshot(), once);
    }

    #[test]
    fn test_same_seed_same_start() {
        let mut a = GameState::new(42, Tuning::default());
        let mut b = GameState::new(42, Tuning::default());
        a.start_game();
        b.start_game();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
