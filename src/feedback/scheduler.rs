// src/feedback/scheduler.rs
//
// Cosmetic timers for fades. Nothing here is awaited: tasks are queued,
// and the frontend drains whatever is due at the start of each frame.

use std::cell::Cell;
use std::time::{Duration, Instant};

use super::layer::UiTask;

pub trait Clock {
    /// Time since some fixed origin.
    fn now(&self) -> Duration;
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Test clock; only moves when told to.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

pub trait Scheduler {
    /// Run on the next frame (lets an opacity transition start from 0).
    fn next_frame(&mut self, task: UiTask);

    fn after(&mut self, delay: Duration, task: UiTask);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Due {
    Frame(u64),
    At(Duration),
}

#[derive(Debug)]
struct Pending {
    due: Due,
    seq: u64,
    task: UiTask,
}

/// Frame-driven timer queue.
pub struct TimerQueue<C: Clock> {
    clock: C,
    frame: u64,
    seq: u64,
    pending: Vec<Pending>,
}

impl<C: Clock> TimerQueue<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, frame: 0, seq: 0, pending: Vec::new() }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Start a new frame and hand back every task now due:
    /// next-frame tasks queued before this call, then elapsed timers,
    /// each group in scheduling order.
    pub fn begin_frame(&mut self) -> Vec<UiTask> {
        self.frame += 1;
        let frame = self.frame;
        let now = self.clock.now();

        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| match p.due {
                Due::Frame(f) => f < frame,
                Due::At(t) => t <= now,
            });
        self.pending = rest;

        due.sort_by_key(|p| match p.due {
            Due::Frame(_) => (0, Duration::ZERO, p.seq),
            Due::At(t) => (1, t, p.seq),
        });
        due.into_iter().map(|p| p.task).collect()
    }

    /// How long the frontend may sleep before something becomes due.
    /// `None` when nothing is queued.
    pub fn next_wakeup(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.pending
            .iter()
            .map(|p| match p.due {
                Due::Frame(_) => Duration::ZERO,
                Due::At(t) => t.saturating_sub(now),
            })
            .min()
    }

    fn push(&mut self, due: Due, task: UiTask) {
        self.seq += 1;
        self.pending.push(Pending { due, seq: self.seq, task });
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn next_frame(&mut self, task: UiTask) {
        self.push(Due::Frame(self.frame), task);
    }

    fn after(&mut self, delay: Duration, task: UiTask) {
        let at = self.clock.now() + delay;
        self.push(Due::At(at), task);
    }
}
