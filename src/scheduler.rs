use std::time::Duration;

use thiserror::Error;

/// The pause before the next frame was cut short.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("frame pause interrupted")]
pub struct Interrupted;

/// Whatever owns the window the frames end up in.
pub trait FrameHost {
    /// Asks for another call to render.
    fn request_redraw(&mut self);

    fn pause(&mut self, delay: Duration) -> Result<(), Interrupted>;

    /// The loop went idle; no more redraws will be requested until the next
    /// start.
    fn on_idle(&mut self) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchedulerState {
    #[default]
    Idle,
    Running,
}

/// Self-rescheduling frame loop.
///
/// Every tick runs one step and, unless the step asked to stop, pauses for
/// `delay` and requests the frame that delivers the next tick.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    state: SchedulerState,
    delay: Duration,
}

impl FrameScheduler {
    pub fn new(delay: Duration) -> Self {
        FrameScheduler {
            state: SchedulerState::Idle,
            delay,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn start<H: FrameHost>(&mut self, host: &mut H) -> bool {
        if self.is_running() {
            return false;
        }

        log::debug!("frame loop running");
        self.state = SchedulerState::Running;
        host.request_redraw();
        true
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            log::debug!("frame loop idle");
        }
        self.state = SchedulerState::Idle;
    }

    /// Runs `step` if the loop is running. `step` returns `true` once the
    /// loop should stop. Returns whether the loop is still running.
    pub fn tick<H, F>(&mut self, host: &mut H, step: F) -> bool
    where
        H: FrameHost,
        F: FnOnce() -> bool,
    {
        if !self.is_running() {
            return false;
        }

        if step() {
            self.stop();
            host.on_idle();
            return false;
        }

        if let Err(e) = host.pause(self.delay) {
            log::debug!("{}, skipping the pause", e);
        }
        host.request_redraw();
        true
    }
}
