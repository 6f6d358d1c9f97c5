//! Counter driver: runs a counter animation on a frame scheduler.
//!
//! The driver owns the [`CounterAnimation`] exclusively; the only way to move
//! the displayed value is through frames the driver itself scheduled. Every
//! scheduled callback captures the [`Generation`] it belongs to and a weak
//! reference to the driver, so a callback that outlives its run (retarget) or
//! its driver (unmount) does nothing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use flowboard_domain::animation::{
    AnimationSettings, CounterAnimation, CounterFrame, CounterPhase, Generation,
};
use tracing::{debug, trace, warn};

use crate::ports::{Clock, FrameCallback, FrameScheduler};

/// Animated counter bound to a frame scheduler and a clock.
///
/// Dropping the driver cancels its pending frame.
pub struct CounterDriver<S: FrameScheduler, C: Clock> {
    shared: Rc<Shared<S, C>>,
}

struct Shared<S: FrameScheduler, C: Clock> {
    scheduler: S,
    clock: C,
    sink: Box<dyn Fn(CounterFrame)>,
    state: RefCell<DriverState<S::Handle>>,
}

struct DriverState<H> {
    animation: CounterAnimation,
    pending: Option<H>,
}

impl<S, C> CounterDriver<S, C>
where
    S: FrameScheduler + 'static,
    C: Clock + 'static,
{
    /// Create an idle driver counting toward `target`.
    ///
    /// `sink` receives every frame the counter produces, including the
    /// starting frame and the settled one.
    pub fn new(
        target: i64,
        settings: AnimationSettings,
        scheduler: S,
        clock: C,
        sink: impl Fn(CounterFrame) + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                clock,
                sink: Box::new(sink),
                state: RefCell::new(DriverState {
                    animation: CounterAnimation::new(target, settings),
                    pending: None,
                }),
            }),
        }
    }

    /// Start counting from the displayed value (`0` on first mount).
    ///
    /// Does nothing unless the counter is idle.
    pub fn start(&self) {
        let (generation, frame) = {
            let mut state = self.shared.state.borrow_mut();
            if state.animation.phase() != CounterPhase::Idle {
                return;
            }
            let generation = state.animation.start(self.shared.clock.now());
            (generation, state.animation.frame())
        };
        debug!(
            from = frame.displayed,
            target = self.target(),
            "counter animation started"
        );
        self.shared.emit(frame);
        if frame.phase == CounterPhase::Running {
            Shared::schedule(&self.shared, generation);
        }
    }

    /// Point the counter at a new target.
    ///
    /// A running or settled counter cancels its pending frame and starts a new
    /// run from the value it currently displays. An idle counter only records
    /// the target for its next [`start`](Self::start).
    pub fn set_target(&self, target: i64) {
        let (superseded, generation, frame) = {
            let mut state = self.shared.state.borrow_mut();
            let now = self.shared.clock.now();
            let Some(generation) = state.animation.retarget(target, now) else {
                return;
            };
            (state.pending.take(), generation, state.animation.frame())
        };
        if let Some(handle) = superseded {
            self.shared.scheduler.cancel_frame(handle);
        }
        debug!(from = frame.displayed, target, "counter animation retargeted");
        self.shared.emit(frame);
        if frame.phase == CounterPhase::Running {
            Shared::schedule(&self.shared, generation);
        }
    }
}

impl<S: FrameScheduler, C: Clock> CounterDriver<S, C> {
    /// Stop the current run and cancel its pending frame.
    ///
    /// The displayed value is kept; [`start`](Self::start) resumes from it.
    pub fn cancel(&self) {
        let pending = {
            let mut state = self.shared.state.borrow_mut();
            state.animation.interrupt();
            state.pending.take()
        };
        if let Some(handle) = pending {
            trace!("cancelling pending counter frame");
            self.shared.scheduler.cancel_frame(handle);
        }
    }

    /// Latest frame.
    #[must_use]
    pub fn frame(&self) -> CounterFrame {
        self.shared.state.borrow().animation.frame()
    }

    /// Value currently displayed.
    #[must_use]
    pub fn displayed(&self) -> i64 {
        self.shared.state.borrow().animation.displayed()
    }

    /// Value the counter is heading to.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.shared.state.borrow().animation.target()
    }

    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.shared.state.borrow().animation.phase()
    }
}

impl<S: FrameScheduler, C: Clock> Drop for CounterDriver<S, C> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<S: FrameScheduler, C: Clock> Shared<S, C> {
    fn emit(&self, frame: CounterFrame) {
        (self.sink)(frame);
    }
}

impl<S, C> Shared<S, C>
where
    S: FrameScheduler + 'static,
    C: Clock + 'static,
{
    fn schedule(this: &Rc<Self>, generation: Generation) {
        let weak: Weak<Self> = Rc::downgrade(this);
        let callback: FrameCallback = Box::new(move || match weak.upgrade() {
            Some(shared) => Self::on_frame(&shared, generation),
            None => trace!("frame fired after its counter was dropped"),
        });

        match this.scheduler.request_frame(callback) {
            Ok(handle) => this.state.borrow_mut().pending = Some(handle),
            Err(err) => {
                warn!(error = %err, "cannot schedule counter frame, settling at target");
                let frame = {
                    let mut state = this.state.borrow_mut();
                    state.animation.settle();
                    state.animation.frame()
                };
                this.emit(frame);
            }
        }
    }

    fn on_frame(this: &Rc<Self>, generation: Generation) {
        let frame = {
            let mut state = this.state.borrow_mut();
            if !state.animation.is_current(generation) {
                debug!(?generation, "ignoring stale counter frame");
                return;
            }
            state.pending = None;
            state.animation.sample(this.clock.now())
        };
        this.emit(frame);
        match frame.phase {
            CounterPhase::Running => Self::schedule(this, generation),
            CounterPhase::Settled => debug!(value = frame.displayed, "counter animation settled"),
            CounterPhase::Idle => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use flowboard_domain::animation::Easing;

    use super::*;
    use crate::manual::{ManualClock, ManualFrameScheduler};

    const FRAME: Duration = Duration::from_millis(16);

    type Frames = Rc<RefCell<Vec<CounterFrame>>>;

    fn linear(duration_ms: u64) -> AnimationSettings {
        AnimationSettings::builder()
            .duration(Duration::from_millis(duration_ms))
            .easing(Easing::Linear)
            .build()
            .unwrap()
    }

    fn driver(
        target: i64,
        settings: AnimationSettings,
    ) -> (
        CounterDriver<ManualFrameScheduler, ManualClock>,
        ManualFrameScheduler,
        ManualClock,
        Frames,
    ) {
        let scheduler = ManualFrameScheduler::new();
        let clock = ManualClock::new();
        let frames: Frames = Rc::default();
        let sink = Rc::clone(&frames);
        let driver = CounterDriver::new(
            target,
            settings,
            scheduler.clone(),
            clock.clone(),
            move |frame| sink.borrow_mut().push(frame),
        );
        (driver, scheduler, clock, frames)
    }

    fn pump(scheduler: &ManualFrameScheduler, clock: &ManualClock, step: Duration) -> usize {
        let mut frames = 0;
        while scheduler.pending() > 0 {
            clock.advance(step);
            frames += scheduler.run_frame();
        }
        frames
    }

    #[test]
    fn should_stay_idle_until_started() {
        let (driver, scheduler, _clock, frames) = driver(100, AnimationSettings::default());
        assert_eq!(driver.phase(), CounterPhase::Idle);
        assert_eq!(driver.displayed(), 0);
        assert_eq!(scheduler.pending(), 0);
        assert!(frames.borrow().is_empty());
    }

    #[test]
    fn should_emit_zero_then_converge_to_target() {
        let (driver, scheduler, clock, frames) = driver(100, AnimationSettings::default());
        driver.start();

        assert_eq!(frames.borrow()[0].displayed, 0);
        assert_eq!(driver.phase(), CounterPhase::Running);
        assert_eq!(scheduler.pending(), 1);

        pump(&scheduler, &clock, FRAME);

        assert_eq!(driver.displayed(), 100);
        assert_eq!(driver.phase(), CounterPhase::Settled);
        let frames = frames.borrow();
        assert_eq!(frames.last().unwrap().displayed, 100);
        assert!(frames.windows(2).all(|w| w[0].displayed <= w[1].displayed));
    }

    #[test]
    fn should_stop_scheduling_once_settled() {
        let (driver, scheduler, clock, _frames) = driver(10, linear(100));
        driver.start();
        let ran = pump(&scheduler, &clock, Duration::from_millis(50));
        assert_eq!(ran, 2);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(driver.displayed(), 10);
    }

    #[test]
    fn should_ignore_second_start() {
        let (driver, scheduler, _clock, frames) = driver(10, linear(100));
        driver.start();
        driver.start();
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(frames.borrow().len(), 1);
    }

    #[test]
    fn should_settle_immediately_for_zero_target() {
        let (driver, scheduler, _clock, frames) = driver(0, linear(100));
        driver.start();
        assert_eq!(driver.phase(), CounterPhase::Settled);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(frames.borrow().len(), 1);
    }

    #[test]
    fn should_cancel_superseded_frame_and_continue_from_displayed_value() {
        let (driver, scheduler, clock, _frames) = driver(100, linear(1000));
        driver.start();
        clock.advance(Duration::from_millis(500));
        scheduler.run_frame();
        assert_eq!(driver.displayed(), 50);

        driver.set_target(200);
        assert_eq!(scheduler.pending(), 1, "old frame cancelled, new one queued");
        assert_eq!(driver.phase(), CounterPhase::Running);

        clock.advance(Duration::from_millis(500));
        scheduler.run_frame();
        assert_eq!(driver.displayed(), 125);

        pump(&scheduler, &clock, FRAME);
        assert_eq!(driver.displayed(), 200);
    }

    #[test]
    fn should_restart_settled_counter_when_target_changes() {
        let (driver, scheduler, clock, _frames) = driver(10, linear(100));
        driver.start();
        pump(&scheduler, &clock, FRAME);
        assert_eq!(driver.phase(), CounterPhase::Settled);

        driver.set_target(20);
        assert_eq!(driver.phase(), CounterPhase::Running);
        pump(&scheduler, &clock, FRAME);
        assert_eq!(driver.displayed(), 20);
    }

    #[test]
    fn should_ignore_unchanged_target() {
        let (driver, scheduler, _clock, frames) = driver(10, linear(100));
        driver.start();
        driver.set_target(10);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(frames.borrow().len(), 1);
    }

    #[test]
    fn should_record_target_before_start() {
        let (driver, scheduler, clock, _frames) = driver(10, linear(100));
        driver.set_target(40);
        assert_eq!(scheduler.pending(), 0);
        driver.start();
        pump(&scheduler, &clock, FRAME);
        assert_eq!(driver.displayed(), 40);
    }

    #[test]
    fn should_cancel_pending_frame_on_drop() {
        let (driver, scheduler, _clock, frames) = driver(100, linear(1000));
        driver.start();
        assert_eq!(scheduler.pending(), 1);

        drop(driver);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.run_frame(), 0);
        assert_eq!(frames.borrow().len(), 1);
    }

    #[test]
    fn should_ignore_callback_that_outlives_its_run() {
        // A scheduler that cannot cancel: every callback still fires.
        struct Leaky(ManualFrameScheduler);
        impl FrameScheduler for Leaky {
            type Handle = ();
            fn request_frame(&self, callback: FrameCallback) -> Result<(), crate::ports::FrameError> {
                self.0.request_frame(callback).map(|_| ())
            }
            fn cancel_frame(&self, (): ()) {}
        }

        let scheduler = ManualFrameScheduler::new();
        let clock = ManualClock::new();
        let frames: Frames = Rc::default();
        let sink = Rc::clone(&frames);
        let driver = CounterDriver::new(
            100,
            linear(1000),
            Leaky(scheduler.clone()),
            clock.clone(),
            move |frame| sink.borrow_mut().push(frame),
        );
        driver.start();
        driver.set_target(50);
        assert_eq!(scheduler.pending(), 2);

        clock.advance(Duration::from_millis(500));
        scheduler.run_frame();
        // only the current run sampled and rescheduled
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(driver.displayed(), 25);

        drop(driver);
        scheduler.run_frame();
        assert_eq!(frames.borrow().last().unwrap().displayed, 25);
    }

    #[test]
    fn should_resume_from_displayed_value_after_cancel() {
        let (driver, scheduler, clock, _frames) = driver(100, linear(1000));
        driver.start();
        clock.advance(Duration::from_millis(300));
        scheduler.run_frame();
        driver.cancel();
        assert_eq!(driver.phase(), CounterPhase::Idle);
        assert_eq!(scheduler.pending(), 0);

        driver.start();
        assert_eq!(driver.displayed(), 30);
        pump(&scheduler, &clock, FRAME);
        assert_eq!(driver.displayed(), 100);
    }

    #[test]
    fn should_settle_at_target_when_scheduler_is_unavailable() {
        let (driver, scheduler, _clock, frames) = driver(100, linear(1000));
        scheduler.close();
        driver.start();
        assert_eq!(driver.phase(), CounterPhase::Settled);
        assert_eq!(driver.displayed(), 100);
        assert_eq!(frames.borrow().last().unwrap().displayed, 100);
    }
}
