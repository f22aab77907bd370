//! Jungle Fury: Finish Line - a vertically scrolling arcade racer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, win/lose)
//! - `session`: Controller boundary driving the sim once per display frame
//! - `platform`: Frame scheduling with cancellation
//! - `renderer`: Snapshot to draw commands (Canvas 2D on the web)
//! - `assets`: Optional decorative images
//! - `tuning`: Data-driven game balance

pub mod assets;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use session::GameSession;
pub use tuning::Tuning;

/// Fixed geometry shared by the simulation and the renderer
pub mod consts {
    /// Canvas dimensions
    pub const WIDTH: f32 = 500.0;
    pub const HEIGHT: f32 = 700.0;

    /// Playable x-range of the track
    pub const TRACK_LEFT: f32 = 80.0;
    pub const TRACK_RIGHT: f32 = WIDTH - 80.0;

    /// Car footprint (position is the top-left corner)
    pub const CAR_WIDTH: f32 = 30.0;
    pub const CAR_HEIGHT: f32 = 50.0;

    /// Obstacle (animal) box, centred on the obstacle position
    pub const OBSTACLE_SIZE: f32 = 30.0;
    /// Rock box, centred on the rock position
    pub const ROCK_SIZE: f32 = 40.0;

    /// Finish band thickness (render only)
    pub const FINISH_BAND_HEIGHT: f32 = 20.0;

    /// Player start position
    pub const PLAYER_START_X: f32 = WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = HEIGHT - 120.0;

    /// Number of AI cars on the track
    pub const AI_CAR_COUNT: usize = 7;
}
