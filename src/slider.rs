use std::time::Duration;

use log::{debug, trace};

use crate::config::SliderConfig;
use crate::slide::Slide;
use crate::state::{SliderAction, SliderState};
use crate::timer::AutoplayTimer;

type Observer = Box<dyn FnMut(&SliderState, &Slide)>;

/// A slider instance: configuration, current state and the autoplay timer.
///
/// All transitions go through [`Slider::dispatch`]. A transition that changes
/// the state rearms the timer before `dispatch` returns and then notifies
/// every subscriber with the new state and the active slide.
pub struct Slider {
    config: SliderConfig,
    state: SliderState,
    timer: AutoplayTimer,
    observers: Vec<Observer>,
}

impl Slider {
    pub fn new(config: SliderConfig) -> Self {
        Self::with_state(config, SliderState::default())
    }

    /// Starts from `state` instead of the default `{0, auto}`; the index is
    /// wrapped into range.
    pub fn with_state(config: SliderConfig, state: SliderState) -> Self {
        let state = state.set_index(state.current_slide_index as isize, config.slide_count());
        let mut timer = AutoplayTimer::new(config.period());
        timer.rearm(&state);
        Self { config, state, timer, observers: Vec::new() }
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn current_slide(&self) -> &Slide {
        self.config.slide(self.state.current_slide_index)
    }

    /// Fill fraction of the progress bar, `None` while autoplay is off.
    pub fn progress(&self) -> Option<f32> {
        self.timer.progress()
    }

    pub fn is_timer_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&SliderState, &Slide) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Applies `action`. Returns whether the state changed.
    pub fn dispatch(&mut self, action: SliderAction) -> bool {
        let next = self.state.next(action, self.config.slide_count());
        if next == self.state {
            return false;
        }

        debug!("{:?}: {:?} -> {:?}", action, self.state, next);
        self.state = next;
        self.timer.rearm(&self.state);

        let slide = self.config.slide(self.state.current_slide_index);
        for observer in self.observers.iter_mut() {
            observer(&self.state, slide);
        }
        true
    }

    /// Advances the autoplay clock by `dt`, dispatching the timer's request
    /// when it expires. Returns whether the state changed.
    ///
    /// An expiry always starts a new period, even when the advance lands on
    /// the same slide (a single-slide carousel).
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(action) = self.timer.advance(dt) else {
            return false;
        };

        trace!("autoplay timer expired on slide {}", self.state.current_slide_index);
        let changed = self.dispatch(action);
        if !changed {
            self.timer.rearm(&self.state);
        }
        changed
    }

    pub fn set_index(&mut self, to_index: isize) -> bool {
        self.dispatch(SliderAction::SetIndex(to_index))
    }

    pub fn navigate(&mut self, to_index: isize) -> bool {
        self.dispatch(SliderAction::Navigate(to_index))
    }

    pub fn navigate_next(&mut self) -> bool {
        self.dispatch(SliderAction::NavigateNext)
    }

    pub fn navigate_prev(&mut self) -> bool {
        self.dispatch(SliderAction::NavigatePrev)
    }

    pub fn set_auto(&mut self, auto: bool) -> bool {
        self.dispatch(SliderAction::SetAuto(auto))
    }

    /// Cancels the pending timer and releases every subscriber. Consuming the
    /// slider means nothing can be dispatched afterwards.
    pub fn teardown(mut self) -> SliderState {
        self.timer.cancel();
        self.observers.clear();
        self.state
    }
}
