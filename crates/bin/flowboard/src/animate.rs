//! Counter playback for the `animate` subcommand.
//!
//! Live playback runs the driver on tokio frames in real time. Instant
//! playback steps a manual clock by one frame interval per frame, producing
//! the same sequence without waiting.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use flowboard_app::manual::{ManualClock, ManualFrameScheduler};
use flowboard_app::services::counter_driver::CounterDriver;
use flowboard_app::tokio_frames::{TokioClock, TokioFrameScheduler};
use flowboard_domain::animation::{AnimationSettings, CounterFrame, CounterPhase};
use tokio::task::LocalSet;

/// A target change applied while the counter is still animating.
#[derive(Debug, Clone, Copy)]
pub struct Retarget {
    pub to: i64,
    /// Frames observed before the new target is applied.
    pub after_frames: usize,
}

/// What to play.
#[derive(Debug, Clone, Copy)]
pub struct AnimationPlan {
    pub target: i64,
    pub retarget: Option<Retarget>,
}

/// Tracks observed frames and fires the retarget once due.
struct Playback {
    seen: usize,
    retarget: Option<Retarget>,
}

impl Playback {
    fn new(plan: &AnimationPlan) -> Self {
        Self {
            seen: 0,
            retarget: plan.retarget,
        }
    }

    /// Record a frame and return the new target if it is time to retarget.
    ///
    /// A retarget still pending when the counter settles fires immediately.
    fn observe(&mut self, frame: CounterFrame) -> Option<i64> {
        self.seen += 1;
        let seen = self.seen;
        let due = self
            .retarget
            .filter(|r| seen >= r.after_frames || frame.phase == CounterPhase::Settled)?;
        self.retarget = None;
        tracing::debug!(to = due.to, after = seen, "retargeting counter");
        Some(due.to)
    }

    fn finished(&self) -> bool {
        self.retarget.is_none()
    }
}

/// Play the animation on tokio frames, one frame every `interval`.
pub async fn play_live(
    plan: &AnimationPlan,
    settings: AnimationSettings,
    interval: Duration,
    mut on_frame: impl FnMut(CounterFrame),
) {
    let local = Rc::new(LocalSet::new());
    let scheduler = TokioFrameScheduler::new(Rc::clone(&local), interval);
    local
        .run_until(async move {
            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
            let driver = CounterDriver::new(
                plan.target,
                settings,
                scheduler,
                TokioClock::new(),
                move |frame| {
                    let _ = tx.send(frame);
                },
            );
            let mut playback = Playback::new(plan);
            driver.start();

            while let Some(frame) = rx.recv().await {
                on_frame(frame);
                if let Some(to) = playback.observe(frame) {
                    driver.set_target(to);
                }
                if playback.finished() && driver.phase() == CounterPhase::Settled && rx.is_empty()
                {
                    break;
                }
            }
        })
        .await;
}

/// Play the animation against a simulated clock, without waiting.
pub fn play_instant(
    plan: &AnimationPlan,
    settings: AnimationSettings,
    interval: Duration,
    mut on_frame: impl FnMut(CounterFrame),
) {
    let scheduler = ManualFrameScheduler::new();
    let clock = ManualClock::new();
    let queue = Rc::new(RefCell::new(VecDeque::new()));
    let sink = Rc::clone(&queue);
    let driver = CounterDriver::new(
        plan.target,
        settings,
        scheduler.clone(),
        clock.clone(),
        move |frame| sink.borrow_mut().push_back(frame),
    );
    let mut playback = Playback::new(plan);
    driver.start();

    loop {
        loop {
            let Some(frame) = queue.borrow_mut().pop_front() else {
                break;
            };
            on_frame(frame);
            if let Some(to) = playback.observe(frame) {
                driver.set_target(to);
            }
        }
        if scheduler.pending() == 0 {
            break;
        }
        clock.advance(interval);
        scheduler.run_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(ms: u64) -> AnimationSettings {
        AnimationSettings::builder()
            .duration(Duration::from_millis(ms))
            .build()
            .unwrap()
    }

    fn collect_instant(plan: &AnimationPlan, ms: u64) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        play_instant(plan, settings(ms), Duration::from_millis(16), |f| {
            frames.push(f);
        });
        frames
    }

    #[test]
    fn should_play_instant_animation_to_target() {
        let frames = collect_instant(
            &AnimationPlan {
                target: 100,
                retarget: None,
            },
            1000,
        );
        assert_eq!(frames.first().unwrap().displayed, 0);
        let last = frames.last().unwrap();
        assert_eq!(last.displayed, 100);
        assert_eq!(last.phase, CounterPhase::Settled);
        assert!(frames.windows(2).all(|w| w[0].displayed <= w[1].displayed));
    }

    #[test]
    fn should_settle_immediately_for_zero_target() {
        let frames = collect_instant(
            &AnimationPlan {
                target: 0,
                retarget: None,
            },
            1000,
        );
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].phase, CounterPhase::Settled);
    }

    #[test]
    fn should_retarget_mid_flight() {
        let frames = collect_instant(
            &AnimationPlan {
                target: 1_000,
                retarget: Some(Retarget {
                    to: 10,
                    after_frames: 20,
                }),
            },
            1000,
        );
        let last = frames.last().unwrap();
        assert_eq!(last.displayed, 10);
        assert_eq!(last.phase, CounterPhase::Settled);
        assert!(frames.iter().any(|f| f.displayed > 10));
    }

    #[test]
    fn should_apply_late_retarget_after_settling() {
        let frames = collect_instant(
            &AnimationPlan {
                target: 5,
                retarget: Some(Retarget {
                    to: 50,
                    after_frames: 10_000,
                }),
            },
            100,
        );
        assert_eq!(frames.last().unwrap().displayed, 50);
        assert!(frames.iter().any(|f| f.displayed == 5));
    }

    #[tokio::test(start_paused = true)]
    async fn should_play_live_animation_to_target() {
        let mut last = None;
        play_live(
            &AnimationPlan {
                target: -40,
                retarget: None,
            },
            settings(200),
            Duration::from_millis(16),
            |f| last = Some(f),
        )
        .await;
        let last = last.unwrap();
        assert_eq!(last.displayed, -40);
        assert_eq!(last.phase, CounterPhase::Settled);
    }
}
