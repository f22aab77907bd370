//! Platform abstraction layer
//!
//! Frame scheduling for the single-threaded game loop. The host (browser or a
//! test harness) calls back once per display frame; `FrameLoop` keeps at most
//! one request outstanding and drops any callback that is no longer current.

#[cfg(target_arch = "wasm32")]
pub mod web;

use std::collections::VecDeque;

/// Identifies one requested frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Something that can call us back on the next display frame
pub trait FrameScheduler {
    /// Host-side handle used to cancel a request
    type Handle: Copy;

    /// Ask for `token` to be delivered on the next frame
    fn request(&mut self, token: FrameToken) -> Self::Handle;

    /// Cancel a request that has not fired yet
    fn cancel(&mut self, handle: Self::Handle);
}

/// Run/stop bookkeeping around a [`FrameScheduler`]
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    running: bool,
    next_token: u64,
    pending: Option<(FrameToken, S::Handle)>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            running: false,
            next_token: 1,
            pending: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Token of the outstanding request, if any
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending.map(|(token, _)| token)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Start requesting frames (no-op if already running)
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.schedule_next();
    }

    /// Stop and cancel the outstanding request synchronously
    pub fn stop(&mut self) {
        self.running = false;
        if let Some((token, handle)) = self.pending.take() {
            log::debug!("Cancelling pending frame {:?}", token);
            self.scheduler.cancel(handle);
        }
    }

    /// Request the following frame while running
    pub fn schedule_next(&mut self) {
        if !self.running || self.pending.is_some() {
            return;
        }
        let token = FrameToken(self.next_token);
        self.next_token += 1;
        let handle = self.scheduler.request(token);
        self.pending = Some((token, handle));
    }

    /// Accept a delivered frame. Returns false for stale or cancelled tokens.
    pub fn begin_frame(&mut self, token: FrameToken) -> bool {
        match self.pending {
            Some((current, _)) if self.running && current == token => {
                self.pending = None;
                true
            }
            _ => {
                log::debug!("Ignoring stale frame {:?}", token);
                false
            }
        }
    }
}

/// Scheduler driven by hand (native runner and tests)
#[derive(Debug, Default)]
pub struct ManualScheduler {
    queue: VecDeque<FrameToken>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the next requested frame, as the host would deliver it
    pub fn next_frame(&mut self) -> Option<FrameToken> {
        self.queue.pop_front()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = FrameToken;

    fn request(&mut self, token: FrameToken) -> FrameToken {
        self.queue.push_back(token);
        token
    }

    fn cancel(&mut self, handle: FrameToken) {
        self.queue.retain(|&t| t != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_outstanding_request() {
        let mut frames = FrameLoop::new(ManualScheduler::new());
        frames.start();
        frames.start();
        frames.schedule_next();
        assert_eq!(frames.scheduler().queued(), 1);
    }

    #[test]
    fn test_frame_accepted_once() {
        let mut frames = FrameLoop::new(ManualScheduler::new());
        frames.start();
        let token = frames.scheduler_mut().next_frame().unwrap();
        assert!(frames.begin_frame(token));
        assert!(!frames.begin_frame(token));
    }

    #[test]
    fn test_stop_cancels_pending() {
        let mut frames = FrameLoop::new(ManualScheduler::new());
        frames.start();
        let token = frames.pending().unwrap();
        frames.stop();

        assert!(!frames.is_running());
        assert_eq!(frames.scheduler().queued(), 0);
        // A callback that slipped through anyway is ignored
        assert!(!frames.begin_frame(token));
    }

    #[test]
    fn test_old_token_after_restart_is_stale() {
        let mut frames = FrameLoop::new(ManualScheduler::new());
        frames.start();
        let old = frames.pending().unwrap();
        frames.stop();
        frames.start();
        let new = frames.pending().unwrap();

        assert_ne!(old, new);
        assert!(!frames.begin_frame(old));
        assert!(frames.begin_frame(new));
    }

    #[test]
    fn test_no_scheduling_while_stopped() {
        let mut frames = FrameLoop::new(ManualScheduler::new());
        frames.schedule_next();
        assert_eq!(frames.pending(), None);
        assert_eq!(frames.scheduler().queued(), 0);
    }
}
