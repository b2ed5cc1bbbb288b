//! Non-blocking command surface backed by a dedicated worker thread.

use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::command::AnimationRequest;
use crate::driver::RingDriver;
use crate::engine::AnimationEngine;
use crate::preempt::PreemptSignal;
use crate::time::{Sleeper, ThreadSleeper};

/// Handle to a ring animated by a dedicated worker thread.
///
/// All command methods raise the preempt signal, append a request to the
/// worker's queue and return immediately; they are safe to call from any
/// thread and never touch the color state. The worker executes requests
/// strictly in arrival order, one at a time; an indefinite animation (think,
/// speak) ends early once a newer request is queued.
///
/// The queue is unbounded: callers enqueueing faster than animations drain
/// will grow it without limit.
///
/// Dropping the handle preempts the animation in progress, lets the worker
/// drain the queue, and joins the thread.
pub struct RingAnimator {
    sender: Option<Sender<AnimationRequest>>,
    preempt: Arc<PreemptSignal>,
    worker: Option<JoinHandle<()>>,
}

impl RingAnimator {
    /// Spawns the worker thread for `driver`, paced by real thread sleeps.
    pub fn spawn<D>(driver: D) -> Self
    where
        D: RingDriver + Send + 'static,
    {
        Self::with_sleeper(driver, ThreadSleeper)
    }

    /// Spawns the worker with a custom [`Sleeper`], e.g. for accelerated
    /// pacing in tests.
    pub fn with_sleeper<D, S>(driver: D, sleeper: S) -> Self
    where
        D: RingDriver + Send + 'static,
        S: Sleeper + Send + 'static,
    {
        let preempt = Arc::new(PreemptSignal::new());
        let (sender, receiver) = mpsc::channel();

        let worker_preempt = Arc::clone(&preempt);
        let worker = thread::spawn(move || {
            let mut engine = AnimationEngine::new(driver, sleeper, worker_preempt);
            while let Ok(request) = receiver.recv() {
                engine.run(request);
            }
            log::debug!("animation worker shutting down");
        });

        Self {
            sender: Some(sender),
            preempt,
            worker: Some(worker),
        }
    }

    /// Queues the wake animation, ramping up toward `direction` (degrees).
    ///
    /// Pass `0.0` when the wake direction is unknown. Any value is accepted,
    /// including negative angles and angles beyond 360.
    pub fn wakeup(&self, direction: f32) {
        self.enqueue(AnimationRequest::Wakeup { direction });
    }

    /// Queues the listening ramp in the reference orientation.
    pub fn listen(&self) {
        self.enqueue(AnimationRequest::Listen);
    }

    /// Queues the thinking rotation; it runs until the next request arrives.
    pub fn think(&self) {
        self.enqueue(AnimationRequest::Think);
    }

    /// Queues the speaking bounce; it runs until the next request arrives,
    /// then decays to dark before that request starts.
    pub fn speak(&self) {
        self.enqueue(AnimationRequest::Speak);
    }

    /// Queues a single all-dark frame.
    pub fn off(&self) {
        self.enqueue(AnimationRequest::Off);
    }

    fn enqueue(&self, request: AnimationRequest) {
        // Signal before queueing so an animation already polling observes
        // the newcomer no later than its next iteration.
        self.preempt.signal();

        if let Some(sender) = &self.sender {
            if sender.send(request).is_err() {
                log::warn!("animation worker is gone, dropping {request:?}");
            }
        }
    }
}

impl Drop for RingAnimator {
    fn drop(&mut self) {
        // Close the queue so the worker exits once it has drained, and keep
        // the preempt signal raised until it does: a routine that called
        // `reset` concurrently with a single signal could miss it and loop
        // forever.
        self.sender.take();

        if let Some(worker) = self.worker.take() {
            while !worker.is_finished() {
                self.preempt.signal();
                thread::sleep(Duration::from_millis(1));
            }
            let _ = worker.join();
        }
    }
}
