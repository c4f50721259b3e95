//! Cooperative timers driven by the frame clock.
//!
//! Timers are keyed by the node they belong to and a selector name, so each
//! node holds at most one timer per selector. Callbacks receive the whole
//! [`Scene`] and may unschedule themselves (or anything else) while running.

use crate::node::NodeId;
use crate::scene::Scene;
use indexmap::IndexMap;
use std::rc::Rc;
use tactile_core::profiling::profile_function;

/// Callback fired by a timer.
pub type TimerCallback = Rc<dyn Fn(&mut Scene)>;

/// Identifies a timer: the owning node plus a selector name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub target: NodeId,
    pub selector: &'static str,
}

impl TimerKey {
    pub const fn new(target: NodeId, selector: &'static str) -> Self {
        Self { target, selector }
    }
}

/// How many times a timer fires before it removes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Forever,
    /// Total number of firings, including the first.
    Times(u32),
}

struct Timer {
    callback: TimerCallback,
    interval: f32,
    pending_delay: Option<f32>,
    repeat: Repeat,
    fired: u32,
    elapsed: f32,
    generation: u64,
}

impl Timer {
    fn exhausted(&self) -> bool {
        matches!(self.repeat, Repeat::Times(times) if self.fired >= times)
    }

    /// Advance the clock and return how many times the timer fires.
    fn advance(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let mut fires = 0;

        if let Some(delay) = self.pending_delay {
            if self.elapsed < delay {
                return 0;
            }
            self.elapsed -= delay;
            self.pending_delay = None;
            fires += 1;
            self.fired += 1;
            if self.exhausted() {
                return fires;
            }
        }

        if self.interval <= 0.0 {
            // Every frame.
            self.elapsed = 0.0;
            self.fired += 1;
            return fires + 1;
        }

        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fires += 1;
            self.fired += 1;
            if self.exhausted() {
                break;
            }
        }
        fires
    }
}

/// A firing collected during [`Scheduler::collect_due`].
pub(crate) struct DueTimer {
    pub key: TimerKey,
    pub generation: u64,
    pub callback: TimerCallback,
    /// The timer ran out of repeats this frame and is already removed.
    pub detached: bool,
}

/// Frame scheduler for periodic callbacks.
pub struct Scheduler {
    timers: IndexMap<TimerKey, Timer>,
    next_generation: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            timers: IndexMap::new(),
            next_generation: 0,
        }
    }

    /// Schedule `callback` every `interval` seconds after an initial `delay`.
    ///
    /// With a zero delay the first firing happens one interval after
    /// scheduling; with a positive delay it happens once the delay has passed
    /// and later firings follow every interval. Scheduling a key that is
    /// already active only updates its interval and keeps its clock and
    /// callback.
    pub fn schedule(
        &mut self,
        key: TimerKey,
        interval: f32,
        repeat: Repeat,
        delay: f32,
        callback: TimerCallback,
    ) {
        if let Some(timer) = self.timers.get_mut(&key) {
            tracing::debug!(
                ?key,
                from = timer.interval,
                to = interval,
                "timer already scheduled, updating interval"
            );
            timer.interval = interval;
            return;
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        self.timers.insert(
            key,
            Timer {
                callback,
                interval,
                pending_delay: (delay > 0.0).then_some(delay),
                repeat,
                fired: 0,
                elapsed: 0.0,
                generation,
            },
        );
    }

    /// Schedule a repeating timer with no initial delay.
    pub fn schedule_repeating(&mut self, key: TimerKey, interval: f32, callback: TimerCallback) {
        self.schedule(key, interval, Repeat::Forever, 0.0, callback);
    }

    /// Cancel a timer. Returns whether it was scheduled.
    pub fn unschedule(&mut self, key: TimerKey) -> bool {
        self.timers.shift_remove(&key).is_some()
    }

    /// Cancel every timer belonging to `target`.
    pub fn unschedule_all(&mut self, target: NodeId) -> usize {
        let before = self.timers.len();
        self.timers.retain(|key, _| key.target != target);
        before - self.timers.len()
    }

    pub fn is_scheduled(&self, key: TimerKey) -> bool {
        self.timers.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance every timer and collect the resulting firings in order.
    ///
    /// Exhausted timers are removed here; the collected firings stay valid
    /// only while [`Scheduler::is_live`] holds for them.
    pub(crate) fn collect_due(&mut self, dt: f32) -> Vec<DueTimer> {
        profile_function!();
        let mut due = Vec::new();

        self.timers.retain(|&key, timer| {
            let fires = timer.advance(dt);
            let detached = timer.exhausted();
            for _ in 0..fires {
                due.push(DueTimer {
                    key,
                    generation: timer.generation,
                    callback: Rc::clone(&timer.callback),
                    detached,
                });
            }
            !detached
        });

        due
    }

    /// Whether a collected firing should still run.
    ///
    /// A firing is stale once its timer has been cancelled, even if a new
    /// timer was scheduled under the same key since. Firings of a finite
    /// timer that ran out this frame always run.
    pub(crate) fn is_live(&self, due: &DueTimer) -> bool {
        due.detached
            || self
                .timers
                .get(&due.key)
                .is_some_and(|timer| timer.generation == due.generation)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
