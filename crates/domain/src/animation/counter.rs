//! Counter state machine.

use crate::time::FrameTime;

use super::AnimationSettings;

/// Where a counter is in its lifecycle.
///
/// `Idle → Running → Settled`; a target change re-enters `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterPhase {
    /// Constructed, no run started yet (or the run was interrupted).
    Idle,
    /// Frames are being sampled toward the target.
    Running,
    /// The displayed value equals the target.
    Settled,
}

/// Identifies one run of a counter.
///
/// Every start, retarget and interrupt issues a new generation; a frame
/// callback scheduled for an older generation must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Snapshot handed to whoever renders the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub displayed: i64,
    pub phase: CounterPhase,
    pub generation: Generation,
}

/// An integer counter tweening from its current value toward a target.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    settings: AnimationSettings,
    from: i64,
    target: i64,
    displayed: i64,
    started_at: FrameTime,
    phase: CounterPhase,
    generation: Generation,
}

impl CounterAnimation {
    /// A counter showing `0`, idle, that will count toward `target`.
    #[must_use]
    pub fn new(target: i64, settings: AnimationSettings) -> Self {
        Self {
            settings,
            from: 0,
            target,
            displayed: 0,
            started_at: FrameTime::ZERO,
            phase: CounterPhase::Idle,
            generation: Generation::default(),
        }
    }

    #[must_use]
    pub const fn displayed(&self) -> i64 {
        self.displayed
    }

    #[must_use]
    pub const fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub const fn phase(&self) -> CounterPhase {
        self.phase
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether `generation` identifies the current run.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    /// Current state as a [`CounterFrame`].
    #[must_use]
    pub const fn frame(&self) -> CounterFrame {
        CounterFrame {
            displayed: self.displayed,
            phase: self.phase,
            generation: self.generation,
        }
    }

    /// Begin a run at `now`, starting from the value currently displayed.
    ///
    /// Settles immediately when nothing is left to count.
    pub fn start(&mut self, now: FrameTime) -> Generation {
        self.generation = self.generation.next();
        self.from = self.displayed;
        self.started_at = now;
        self.phase = if self.displayed == self.target {
            CounterPhase::Settled
        } else {
            CounterPhase::Running
        };
        self.generation
    }

    /// Point the counter at a new target.
    ///
    /// A started counter restarts from its displayed value and the new
    /// generation is returned. An idle counter only records the target.
    /// Returns `None` when no new run began.
    pub fn retarget(&mut self, target: i64, now: FrameTime) -> Option<Generation> {
        if target == self.target {
            return None;
        }
        self.target = target;
        if self.phase == CounterPhase::Idle {
            return None;
        }
        Some(self.start(now))
    }

    /// Invalidate the current run. A running counter drops back to `Idle`
    /// and keeps its displayed value.
    pub fn interrupt(&mut self) -> Generation {
        self.generation = self.generation.next();
        if self.phase == CounterPhase::Running {
            self.phase = CounterPhase::Idle;
        }
        self.generation
    }

    /// Jump straight to the target.
    pub fn settle(&mut self) {
        self.displayed = self.target;
        self.phase = CounterPhase::Settled;
    }

    /// Advance the running counter to `now`.
    ///
    /// Once the elapsed time reaches the duration the displayed value is
    /// pinned to the target exactly. Outside `Running` this is a no-op.
    pub fn sample(&mut self, now: FrameTime) -> CounterFrame {
        if self.phase != CounterPhase::Running {
            return self.frame();
        }

        let elapsed = now.saturating_since(self.started_at);
        let duration = self.settings.duration();
        if elapsed >= duration {
            self.settle();
            return self.frame();
        }

        let fraction = elapsed.as_secs_f64() / duration.as_secs_f64();
        let progress = self.settings.easing().apply(fraction);
        let next = interpolate(self.from, self.target, progress);
        // never step backwards, whatever the curve rounds to
        self.displayed = if self.from <= self.target {
            self.displayed.max(next)
        } else {
            self.displayed.min(next)
        };
        if self.displayed == self.target {
            self.phase = CounterPhase::Settled;
        }
        self.frame()
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn interpolate(from: i64, target: i64, progress: f64) -> i64 {
    let span = target as f64 - from as f64;
    let value = (from as f64 + span * progress).round() as i64;
    let (low, high) = if from <= target {
        (from, target)
    } else {
        (target, from)
    };
    value.clamp(low, high)
}
