//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, aabb_overlap, car_rect, obstacle_rect, rock_rect};
pub use input::{Direction, InputState};
pub use snapshot::{CarView, Snapshot};
pub use spawner::{SpawnResult, spawn_hazards};
pub use state::{Car, GameEvent, GamePhase, GameState, Hazard};
pub use tick::tick;
