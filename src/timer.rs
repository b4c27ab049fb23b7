use std::time::Duration;

use crate::state::{SliderAction, SliderState};

#[derive(Debug, PartialEq, Clone, Copy)]
struct Pending {
    from_index: usize,
    elapsed: Duration,
}

/// Single-shot autoplay timer driven by frame time.
///
/// At most one deadline is pending. It is keyed on the slide index it was
/// armed for, and firing yields `SetIndex(from_index + 1)` so autoplay stays
/// on across automatic advances.
#[derive(Debug)]
pub struct AutoplayTimer {
    period: Duration,
    pending: Option<Pending>,
}

impl AutoplayTimer {
    pub fn new(period: Duration) -> Self {
        Self { period, pending: None }
    }

    /// Drops any pending deadline and, while autoplaying, starts a fresh one
    /// for the state's current slide.
    pub fn rearm(&mut self, state: &SliderState) {
        self.pending = state.auto.then_some(Pending {
            from_index: state.current_slide_index,
            elapsed: Duration::ZERO,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Fraction of the period already elapsed, `None` when nothing is pending.
    pub fn progress(&self) -> Option<f32> {
        self.pending.map(|p| (p.elapsed.as_secs_f64() / self.period.as_secs_f64()).min(1.0) as f32)
    }

    /// Advances the clock by `dt`. Returns the advance request once the
    /// period is over; the timer is then spent until the next `rearm`.
    pub fn advance(&mut self, dt: Duration) -> Option<SliderAction> {
        let pending = self.pending.as_mut()?;
        pending.elapsed += dt;
        if pending.elapsed < self.period {
            return None;
        }

        let from_index = pending.from_index;
        self.pending = None;
        Some(SliderAction::SetIndex(from_index as isize + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(3);

    fn armed(index: usize) -> AutoplayTimer {
        let mut timer = AutoplayTimer::new(PERIOD);
        timer.rearm(&SliderState { current_slide_index: index, auto: true });
        timer
    }

    #[test]
    fn fires_once_after_the_period() {
        let mut timer = armed(1);
        assert_eq!(timer.advance(Duration::from_millis(2999)), None);
        assert_eq!(timer.advance(Duration::from_millis(1)), Some(SliderAction::SetIndex(2)));
        assert!(!timer.is_pending());
        assert_eq!(timer.advance(PERIOD * 10), None);
    }

    #[test]
    fn not_armed_while_paused() {
        let mut timer = AutoplayTimer::new(PERIOD);
        timer.rearm(&SliderState { current_slide_index: 0, auto: false });
        assert!(!timer.is_pending());
        assert_eq!(timer.advance(PERIOD), None);
    }

    #[test]
    fn rearm_restarts_the_period() {
        let mut timer = armed(0);
        timer.advance(Duration::from_secs(2));
        timer.rearm(&SliderState { current_slide_index: 2, auto: true });
        assert_eq!(timer.advance(Duration::from_secs(2)), None);
        assert_eq!(timer.advance(Duration::from_secs(1)), Some(SliderAction::SetIndex(3)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = armed(0);
        timer.advance(Duration::from_secs(2));
        timer.cancel();
        assert_eq!(timer.advance(PERIOD), None);
        assert_eq!(timer.progress(), None);
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let mut timer = armed(0);
        assert_eq!(timer.progress(), Some(0.0));
        timer.advance(Duration::from_millis(1500));
        let progress = timer.progress().unwrap();
        assert!((progress - 0.5).abs() < 1e-6);
    }
}
