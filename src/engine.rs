//! Animation execution engine.
//!
//! [`AnimationEngine`] owns the ring driver, a [`Sleeper`], and the last fully
//! rendered frame, and executes one [`AnimationRequest`] at a time to
//! completion. Callers normally drive it through
//! [`RingAnimator`](crate::RingAnimator) rather than directly; direct use is
//! handy for tests and for hosts that bring their own execution loop.

use std::sync::Arc;
use std::time::Duration;

use palette::Srgb;

use crate::color::{BASIS, FRAME_OFF, Frame, rotated_left, scaled, sector_offset};
use crate::command::AnimationRequest;
use crate::driver::{RingDriver, to_native};
use crate::preempt::PreemptSignal;
use crate::time::Sleeper;

/// Steps in the wakeup/listen intensity ramp; also the full intensity value.
const RAMP_STEPS: i32 = 24;

/// Delay between ramp, bounce and decay frames.
const FRAME_DELAY: Duration = Duration::from_millis(10);

/// Delay between think rotation frames and at speak's bounce endpoints.
const HOLD_DELAY: Duration = Duration::from_millis(200);

/// Initial delay of think's exit fade; halved after every fade frame.
const FADE_DELAY: Duration = Duration::from_millis(100);

/// Frames in think's exit fade.
const FADE_STEPS: i32 = 5;

/// Speak's intensity position bounces between these two values.
const BOUNCE_HIGH: i32 = RAMP_STEPS;
const BOUNCE_LOW: i32 = 4;

/// Executes animations synchronously against a ring driver.
///
/// The engine is single-threaded by construction: it exclusively owns the
/// last rendered frame, so no locking is needed around it. The
/// [`PreemptSignal`] is the only state shared with enqueuing callers.
pub struct AnimationEngine<D, S> {
    driver: D,
    sleeper: S,
    state: Frame,
    preempt: Arc<PreemptSignal>,
}

impl<D: RingDriver, S: Sleeper> AnimationEngine<D, S> {
    /// Creates an engine with an all-dark state.
    pub fn new(driver: D, sleeper: S, preempt: Arc<PreemptSignal>) -> Self {
        Self {
            driver,
            sleeper,
            state: FRAME_OFF,
            preempt,
        }
    }

    /// Runs one request to completion.
    ///
    /// Wakeup, listen and off are bounded and never preempted. Think and
    /// speak loop until the preempt signal is raised, then run their fixed
    /// exit phase before returning.
    pub fn run(&mut self, request: AnimationRequest) {
        log::debug!("running {request:?}");
        match request {
            AnimationRequest::Wakeup { direction } => self.wakeup(direction),
            AnimationRequest::Listen => self.listen(),
            AnimationRequest::Think => self.think(),
            AnimationRequest::Speak => self.speak(),
            AnimationRequest::Off => self.off(),
        }
    }

    /// Returns the last fully rendered frame.
    pub fn state(&self) -> &Frame {
        &self.state
    }

    fn wakeup(&mut self, direction: f32) {
        let basis = rotated_left(BASIS, sector_offset(direction));
        self.ramp_up(basis);
    }

    fn listen(&mut self) {
        self.ramp_up(BASIS);
    }

    /// 24-step intensity ramp over `basis`. Runs to completion
    /// unconditionally.
    fn ramp_up(&mut self, basis: Frame) {
        let mut frame = FRAME_OFF;
        for step in 1..=RAMP_STEPS {
            frame = scaled(basis, step as f32);
            self.render(&frame);
            self.sleeper.sleep(FRAME_DELAY);
        }
        self.state = frame;
    }

    fn think(&mut self) {
        let mut buffer = self.state;

        self.preempt.reset();
        loop {
            buffer = rotated_left(buffer, 1);
            self.render(&buffer);
            self.sleeper.sleep(HOLD_DELAY);
            if self.preempt.is_signaled() {
                break;
            }
        }

        // The exit fade is presentation only: the stored state keeps the
        // unscaled buffer, so the next animation resumes at full intensity.
        let mut delay = FADE_DELAY;
        for step in 0..FADE_STEPS {
            let factor = (FADE_STEPS - 1 - step) as f32 / (FADE_STEPS - 1) as f32;
            self.render(&scaled(buffer, factor));
            self.sleeper.sleep(delay);
            delay /= 2;
        }

        self.state = buffer;
    }

    fn speak(&mut self) {
        let base = self.state;
        let mut position = BOUNCE_HIGH;
        let mut direction = -1;

        self.preempt.reset();
        loop {
            position += direction;
            self.render(&bounced(base, position));

            if position == BOUNCE_HIGH || position == BOUNCE_LOW {
                direction = -direction;
                self.sleeper.sleep(HOLD_DELAY);
            } else {
                self.sleeper.sleep(FRAME_DELAY);
            }

            if self.preempt.is_signaled() {
                break;
            }
        }

        // Decay tail, never preempted: the next request starts only once the
        // ring has reached dark.
        while position > 0 {
            position -= 1;
            self.render(&bounced(base, position));
            self.sleeper.sleep(FRAME_DELAY);
        }

        self.state = base;
    }

    fn off(&mut self) {
        self.render(&FRAME_OFF);
        self.state = FRAME_OFF;
    }

    /// Pushes one frame to the driver.
    ///
    /// A failed driver call is logged and the rest of the frame is skipped;
    /// the engine stays alive so queued requests keep executing.
    fn render(&mut self, frame: &Frame) {
        for (index, color) in frame.iter().enumerate() {
            if let Err(err) = self.driver.set_pixel(index, to_native(*color)) {
                log::warn!("set_pixel({index}) failed, dropping frame: {err}");
                return;
            }
        }

        if let Err(err) = self.driver.show() {
            log::warn!("frame flush failed: {err}");
        }
    }
}

/// `base` attenuated to `position` out of `BOUNCE_HIGH` intensity steps.
///
/// Multiplies before dividing so whole-number channel values stay exact.
fn bounced(base: Frame, position: i32) -> Frame {
    base.map(|color| {
        Srgb::new(
            color.red * position as f32 / BOUNCE_HIGH as f32,
            color.green * position as f32 / BOUNCE_HIGH as f32,
            color.blue * position as f32 / BOUNCE_HIGH as f32,
        )
    })
}
