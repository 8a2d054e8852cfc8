//! Cancellable one-shot timers that clear transient UI flags.
//!
//! The controller never receives callbacks. It schedules a timer per flag,
//! keeps the returned [`TimerHandle`], and later collects [`Expired`] records
//! from the facility. An expiry whose handle is no longer the stored one is
//! stale and gets dropped.

use std::{collections::HashMap, time::Duration};

use tokio::{sync::mpsc, task::JoinHandle};

use crate::clock::Clock;

pub const ANIMATION_PULSE: Duration = Duration::from_millis(500);
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransientFlag {
    Animating,
    Copied,
}

impl TransientFlag {
    pub fn duration(self) -> Duration {
        match self {
            Self::Animating => ANIMATION_PULSE,
            Self::Copied => COPIED_FEEDBACK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Animating => "animating",
            Self::Copied => "copied",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expired {
    pub handle: TimerHandle,
    pub flag: TransientFlag,
}

pub trait TimerFacility {
    fn schedule(&mut self, delay: Duration, flag: TransientFlag) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
    /// Removes and returns every timer that has fired, oldest deadline first.
    fn drain_expired(&mut self) -> Vec<Expired>;
    fn cancel_all(&mut self);
    fn pending_count(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    handle: TimerHandle,
    flag: TransientFlag,
    deadline: Duration,
}

/// Deadline list polled against a [`Clock`]; suited to frame-driven loops.
#[derive(Debug)]
pub struct DeadlineTimers<C> {
    clock: C,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl<C: Clock> DeadlineTimers<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Time left until the earliest pending deadline.
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.pending
            .iter()
            .map(|timer| timer.deadline.saturating_sub(now))
            .min()
    }
}

impl<C: Clock> TimerFacility for DeadlineTimers<C> {
    fn schedule(&mut self, delay: Duration, flag: TransientFlag) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push(PendingTimer {
            handle,
            flag,
            deadline: self.clock.now() + delay,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|timer| timer.handle != handle);
    }

    fn drain_expired(&mut self) -> Vec<Expired> {
        let now = self.clock.now();
        let (mut fired, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|timer| timer.deadline <= now);
        self.pending = waiting;
        fired.sort_by_key(|timer| (timer.deadline, timer.handle.0));
        fired
            .into_iter()
            .map(|timer| Expired {
                handle: timer.handle,
                flag: timer.flag,
            })
            .collect()
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
    }

    fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Each timer is a spawned `tokio::time::sleep` task that reports back over a
/// channel. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioTimers {
    next_id: u64,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
    expired_tx: mpsc::UnboundedSender<Expired>,
    expired_rx: mpsc::UnboundedReceiver<Expired>,
}

impl TokioTimers {
    pub fn new() -> Self {
        let (expired_tx, expired_rx) = mpsc::unbounded_channel();
        Self {
            next_id: 0,
            tasks: HashMap::new(),
            expired_tx,
            expired_rx,
        }
    }

    /// Waits for the next live expiry. Pends forever while nothing is
    /// scheduled, which makes it safe to use as a `tokio::select!` branch.
    pub async fn next_expired(&mut self) -> Option<Expired> {
        while let Some(expired) = self.expired_rx.recv().await {
            if self.tasks.remove(&expired.handle).is_some() {
                return Some(expired);
            }
        }
        None
    }
}

impl Default for TokioTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerFacility for TokioTimers {
    fn schedule(&mut self, delay: Duration, flag: TransientFlag) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        let tx = self.expired_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Expired { handle, flag });
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }

    fn drain_expired(&mut self) -> Vec<Expired> {
        let mut fired = Vec::new();
        while let Ok(expired) = self.expired_rx.try_recv() {
            // A task can report right before it is cancelled.
            if self.tasks.remove(&expired.handle).is_some() {
                fired.push(expired);
            }
        }
        fired
    }

    fn cancel_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }

    fn pending_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
#[path = "tests/timers_tests.rs"]
mod tests;
