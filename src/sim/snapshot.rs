//! Immutable per-tick view of the simulation
//!
//! The snapshot owns its data, so renderers and UI code can hold on to it
//! without aliasing live state. Field names serialize in camelCase for JS.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GamePhase;

/// Read-only copy of a car
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarView {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub alive: bool,
    pub finished: bool,
}

/// Everything visible in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: GamePhase,
    pub tick: u64,
    pub player: CarView,
    pub ai_cars: Vec<CarView>,
    /// Obstacle centres
    pub obstacles: Vec<Vec2>,
    /// Rock centres
    pub rocks: Vec<Vec2>,
    pub finish_y: f32,
    pub width: f32,
    pub height: f32,
    pub track_left: f32,
    pub track_right: f32,
}

impl Snapshot {
    #[inline]
    pub fn player_alive(&self) -> bool {
        self.player.alive
    }

    #[inline]
    pub fn player_finished(&self) -> bool {
        self.player.finished
    }

    /// Whether the finish band falls inside the visible area
    pub fn finish_visible(&self) -> bool {
        self.finish_y > 0.0 && self.finish_y < self.height
    }
}
