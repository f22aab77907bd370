//! Screen flow for the HUD
//!
//! The UI only looks at two flags from the snapshot to leave the Playing
//! screen; everything else is driven by the start/restart buttons.

use serde::{Deserialize, Serialize};

use crate::sim::Snapshot;

/// Which HUD screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Start,
    Playing,
    GameOver,
    Won,
}

impl Screen {
    /// Follow the snapshot while playing; other screens are sticky
    pub fn observe(self, snapshot: &Snapshot) -> Screen {
        match self {
            Screen::Playing if !snapshot.player_alive() => Screen::GameOver,
            Screen::Playing if snapshot.player_finished() => Screen::Won,
            other => other,
        }
    }

    /// Steering keys only count on the Playing screen
    pub fn accepts_input(self) -> bool {
        self == Screen::Playing
    }

    pub fn is_over(self) -> bool {
        matches!(self, Screen::GameOver | Screen::Won)
    }

    /// HUD status line
    pub fn status_text(self) -> &'static str {
        match self {
            Screen::Start => "Use \u{2190} \u{2192} arrow keys to steer your car",
            Screen::Playing => "Racing...",
            Screen::GameOver => "Game Over!",
            Screen::Won => "You Won!",
        }
    }

    /// CSS-friendly name, used as a class on the HUD root
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Start => "start",
            Screen::Playing => "playing",
            Screen::GameOver => "game-over",
            Screen::Won => "won",
        }
    }
}
