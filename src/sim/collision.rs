//! Axis-aligned box collision
//!
//! Cars are boxes anchored at their top-left corner; obstacles and rocks are
//! boxes centred on their position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CAR_HEIGHT, CAR_WIDTH, OBSTACLE_SIZE, ROCK_SIZE};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` centred on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        let half = size / 2.0;
        Self::new(center.x - half, center.y - half, size, size)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Overlap test with strict comparisons on both axes.
///
/// Boxes that only share an edge do not overlap.
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Footprint of a car at `pos`
#[inline]
pub fn car_rect(pos: Vec2) -> Rect {
    Rect::new(pos.x, pos.y, CAR_WIDTH, CAR_HEIGHT)
}

/// Footprint of an obstacle centred at `pos`
#[inline]
pub fn obstacle_rect(pos: Vec2) -> Rect {
    Rect::centered(pos, OBSTACLE_SIZE)
}

/// Footprint of a rock centred at `pos`
#[inline]
pub fn rock_rect(pos: Vec2) -> Rect {
    Rect::centered(pos, ROCK_SIZE)
}
