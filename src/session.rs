//! Game session: the controller boundary
//!
//! Owns the simulation state, the HUD screen and the frame loop. The host
//! calls `start_game`, `reset_game` and `key_event`, and forwards every frame
//! callback to `on_frame`. The latest [`Snapshot`] is the only thing readers
//! get to see.

use crate::platform::{FrameLoop, FrameScheduler, FrameToken};
use crate::sim::{Direction, GameEvent, GameState, Snapshot, tick};
use crate::tuning::Tuning;
use crate::ui::Screen;

pub struct GameSession<S: FrameScheduler> {
    state: GameState,
    screen: Screen,
    frames: FrameLoop<S>,
    snapshot: Snapshot,
}

impl<S: FrameScheduler> GameSession<S> {
    pub fn new(seed: u64, tuning: Tuning, scheduler: S) -> Self {
        let state = GameState::new(seed, tuning);
        let snapshot = state.snapshot();
        Self {
            state,
            screen: Screen::Start,
            frames: FrameLoop::new(scheduler),
            snapshot,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frames(&self) -> &FrameLoop<S> {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut FrameLoop<S> {
        &mut self.frames
    }

    /// Begin a new race and start the frame loop
    pub fn start_game(&mut self) {
        self.state.start_game();
        self.screen = Screen::Playing;
        self.publish();
        self.frames.start();
    }

    /// Stop the loop, clear the world and go back to the start screen
    pub fn reset_game(&mut self) {
        self.frames.stop();
        self.state.reset_game();
        self.screen = Screen::Start;
        self.publish();
    }

    /// Like `reset_game`, but the next race uses a new seed
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.state.reseed(seed);
        self.reset_game();
    }

    /// Buffer a steering change; visible to the next tick
    pub fn set_direction(&mut self, direction: Direction, pressed: bool) {
        self.state.set_direction(direction, pressed);
    }

    /// Handle a DOM key name. Returns true when the key was consumed.
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        if !self.screen.accepts_input() {
            return false;
        }
        match Direction::from_key(key) {
            Some(direction) => {
                self.set_direction(direction, pressed);
                true
            }
            None => false,
        }
    }

    /// Run one tick for a delivered frame. Stale frames are ignored and
    /// return `None`.
    pub fn on_frame(&mut self, token: FrameToken) -> Option<Vec<GameEvent>> {
        if !self.frames.begin_frame(token) {
            return None;
        }

        let events = tick(&mut self.state);
        self.publish();
        self.screen = self.screen.observe(&self.snapshot);

        if self.state.is_running() {
            self.frames.schedule_next();
        } else {
            log::info!("Race over: {:?}", self.screen);
            self.frames.stop();
        }
        Some(events)
    }

    fn publish(&mut self) {
        self.snapshot = self.state.snapshot();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualScheduler;
    use crate::sim::GamePhase;

    fn session(tuning: Tuning) -> GameSession<ManualScheduler> {
        GameSession::new(2024, tuning, ManualScheduler::new())
    }

    fn pump(session: &mut GameSession<ManualScheduler>, frames: usize) -> usize {
        let mut ran = 0;
        for _ in 0..frames {
            let Some(token) = session.frames_mut().scheduler_mut().next_frame() else {
                break;
            };
            if session.on_frame(token).is_some() {
                ran += 1;
            }
        }
        ran
    }

    #[test]
    fn test_start_publishes_immediately() {
        let mut s = session(Tuning::default());
        assert_eq!(s.snapshot().phase, GamePhase::Idle);
        s.start_game();
        assert_eq!(s.snapshot().phase, GamePhase::Running);
        assert_eq!(s.snapshot().ai_cars.len(), 7);
        assert_eq!(s.screen(), Screen::Playing);
        assert!(s.frames().is_running());
    }

    #[test]
    fn test_frames_advance_snapshot() {
        let mut s = session(Tuning::without_spawns());
        s.start_game();
        assert_eq!(pump(&mut s, 10), 10);
        assert_eq!(s.snapshot().tick, 10);
        assert_eq!(s.snapshot().player.y, 580.0 - 20.0);
    }

    #[test]
    fn test_keys_steer_only_while_playing() {
        let mut s = session(Tuning::without_spawns());
        assert!(!s.key_event("ArrowRight", true));

        s.start_game();
        assert!(s.key_event("ArrowRight", true));
        assert!(!s.key_event("Space", true));
        pump(&mut s, 10);
        assert_eq!(s.snapshot().player.x, 310.0);

        assert!(s.key_event("ArrowRight", false));
        pump(&mut s, 5);
        assert_eq!(s.snapshot().player.x, 310.0);
    }

    #[test]
    fn test_reset_cancels_pending_frame() {
        let mut s = session(Tuning::default());
        s.start_game();
        pump(&mut s, 3);
        let stale = s.frames().pending().unwrap();

        s.reset_game();
        assert!(!s.frames().is_running());
        assert_eq!(s.frames().scheduler().queued(), 0);

        let idle = s.snapshot().clone();
        assert!(s.on_frame(stale).is_none());
        assert_eq!(s.snapshot(), &idle);
        assert_eq!(s.screen(), Screen::Start);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut s = session(Tuning::default());
        s.start_game();
        pump(&mut s, 20);
        s.reset_game();
        let once = s.snapshot().clone();
        s.reset_game();
        assert_eq!(s.snapshot(), &once);
        assert!(once.ai_cars.is_empty());
        assert!(once.obstacles.is_empty());
    }

    #[test]
    fn test_win_stops_the_loop() {
        let tuning = Tuning {
            finish_start_y: 577.0,
            ..Tuning::without_spawns()
        };
        let mut s = session(tuning);
        s.start_game();
        pump(&mut s, 1);

        assert_eq!(s.screen(), Screen::Won);
        assert!(s.snapshot().player_finished());
        assert!(s.snapshot().player_alive());
        assert!(!s.frames().is_running());
        assert_eq!(s.frames().scheduler().queued(), 0);
        assert!(!s.key_event("ArrowLeft", true));
    }

    #[test]
    fn test_crash_shows_game_over() {
        let tuning = Tuning {
            obstacle_chance: 0.0,
            rock_chance: 0.0,
            ai_car_count: 0,
            ..Tuning::default()
        };
        let mut s = session(tuning);
        s.start_game();
        s.state.obstacles.push(crate::sim::Hazard::new(s.state.player.pos));
        pump(&mut s, 5);

        assert_eq!(s.screen(), Screen::GameOver);
        assert!(!s.snapshot().player_alive());
        assert_eq!(s.snapshot().tick, 1);
        assert!(!s.frames().is_running());
    }

    #[test]
    fn test_restart_after_win() {
        let tuning = Tuning {
            finish_start_y: 577.0,
            ..Tuning::without_spawns()
        };
        let mut s = session(tuning);
        s.start_game();
        pump(&mut s, 1);
        assert_eq!(s.screen(), Screen::Won);

        s.reset_game();
        s.start_game();
        assert_eq!(s.screen(), Screen::Playing);
        assert!(s.frames().is_running());
        assert_eq!(s.frames().scheduler().queued(), 1);
    }
}
