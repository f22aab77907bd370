//! Gameplay tuning
//!
//! Speeds and spawn chances live here so they can be tweaked without touching
//! the simulation. Geometry stays in [`crate::consts`].

use serde::{Deserialize, Serialize};

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Finish line approach per tick (px)
    pub scroll_speed: f32,
    /// Downward motion of obstacles and rocks per tick (px)
    pub hazard_speed: f32,
    /// Player forward motion per tick (px, toward the top of the screen)
    pub forward_speed: f32,
    /// Player sideways motion per tick while steering (px)
    pub steer_speed: f32,
    /// Steering stops once the car is this close to a track edge (px)
    pub steer_margin: f32,
    /// Per-tick chance of spawning one obstacle
    pub obstacle_chance: f64,
    /// Per-tick chance of spawning a rock pair
    pub rock_chance: f64,
    /// Distance of the rock band from the canvas edge (px)
    pub rock_edge_offset: f32,
    /// Width of the band each rock is placed in (px)
    pub rock_spread: f32,
    /// Off-screen y where hazards and wrapped AI cars appear
    pub spawn_y: f32,
    /// Slowest AI car speed (px/tick)
    pub ai_min_speed: f32,
    /// AI speeds are drawn from `[ai_min_speed, ai_min_speed + ai_speed_spread)`
    pub ai_speed_spread: f32,
    /// Number of AI cars built on start
    pub ai_car_count: usize,
    /// Initial finish line y (negative = above the screen)
    pub finish_start_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scroll_speed: 3.0,
            hazard_speed: 6.0,
            forward_speed: 2.0,
            steer_speed: 6.0,
            steer_margin: 5.0,
            obstacle_chance: 0.033,
            rock_chance: 0.05,
            rock_edge_offset: 30.0,
            rock_spread: 40.0,
            spawn_y: -50.0,
            ai_min_speed: 3.0,
            ai_speed_spread: 2.0,
            ai_car_count: crate::consts::AI_CAR_COUNT,
            finish_start_y: -2000.0,
        }
    }
}

impl Tuning {
    /// Tuning with both spawn chances forced to zero
    pub fn without_spawns() -> Self {
        Self {
            obstacle_chance: 0.0,
            rock_chance: 0.0,
            ..Self::default()
        }
    }

    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Clamp values the simulation cannot work with
    pub fn sanitized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.obstacle_chance) {
            log::warn!("obstacle_chance {} out of range, clamping", self.obstacle_chance);
            self.obstacle_chance = self.obstacle_chance.clamp(0.0, 1.0);
        }
        if !(0.0..=1.0).contains(&self.rock_chance) {
            log::warn!("rock_chance {} out of range, clamping", self.rock_chance);
            self.rock_chance = self.rock_chance.clamp(0.0, 1.0);
        }
        let defaults = Self::default();
        for (name, speed, default) in [
            ("scroll_speed", &mut self.scroll_speed, defaults.scroll_speed),
            ("hazard_speed", &mut self.hazard_speed, defaults.hazard_speed),
        ] {
            if speed.is_nan() {
                log::warn!("{} is NaN, using {}", name, default);
                *speed = default;
            } else if *speed < 0.0 {
                log::warn!("negative {} {}, using magnitude", name, speed);
                *speed = speed.abs();
            }
        }
        if self.steer_speed < 0.0 {
            log::warn!("negative steer_speed {}, using magnitude", self.steer_speed);
            self.steer_speed = self.steer_speed.abs();
        }
        if self.ai_speed_spread < 0.0 {
            log::warn!("negative ai_speed_spread {}, using 0", self.ai_speed_spread);
            self.ai_speed_spread = 0.0;
        }
        if self.rock_spread < 0.0 {
            log::warn!("negative rock_spread {}, using 0", self.rock_spread);
            self.rock_spread = 0.0;
        }
        self
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "jungle_fury_tuning";

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Load tuning from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
