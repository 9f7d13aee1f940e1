//! Repeating one-second schedule driving countdown recomputation.
//!
//! Modeled as an owned handle: `start` spawns the task, `stop` (or drop)
//! cancels it. No tick can land after the handle is gone.

use chrono::Local;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

use super::engine;
use super::models::CountdownState;

/// Owned handle for one card's countdown schedule.
///
/// Computes once immediately on start, then once per second until stopped.
/// The schedule's identity is its `(date, time)` target pair; pointing a
/// card at a new target means stopping this ticker and starting a fresh one.
#[derive(Debug)]
pub struct CountdownTicker {
    target_date: String,
    target_time: String,
    state_rx: watch::Receiver<CountdownState>,
    task: JoinHandle<()>,
}

impl CountdownTicker {
    /// Start the schedule and publish the initial state immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(target_date: impl Into<String>, target_time: impl Into<String>) -> Self {
        let target_date = target_date.into();
        let target_time = target_time.into();

        let initial = engine::compute(&target_date, &target_time, Local::now());
        let (state_tx, state_rx) = watch::channel(initial);

        let task_date = target_date.clone();
        let task_time = target_time.clone();
        let task = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            // A tick that lands while the previous one is still in flight
            // is skipped, not queued.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; the initial
            // state was already published synchronously.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let state = engine::compute(&task_date, &task_time, Local::now());
                if state_tx.send(state).is_err() {
                    // No receivers left.
                    break;
                }
            }
        });

        log::debug!("Countdown ticker started for {target_date} {target_time}");

        Self {
            target_date,
            target_time,
            state_rx,
            task,
        }
    }

    /// Latest published state.
    pub fn state(&self) -> CountdownState {
        *self.state_rx.borrow()
    }

    /// Watch for recomputations, e.g. to drive a repaint loop.
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.state_rx.clone()
    }

    /// The `(date, time)` target pair this schedule was started for.
    pub fn target(&self) -> (&str, &str) {
        (&self.target_date, &self.target_time)
    }

    /// Stop the schedule. Dropping the handle has the same effect.
    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
