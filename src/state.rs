/// Requests understood by the slider state machine.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SliderAction {
    /// Jump to an index, autoplay untouched (used by the timer).
    SetIndex(isize),
    /// Jump to an index and stop autoplay (user intent).
    Navigate(isize),
    NavigateNext,
    NavigatePrev,
    SetAuto(bool),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SliderState {
    pub current_slide_index: usize,
    pub auto: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self { current_slide_index: 0, auto: true }
    }
}

/// Wraps a requested index into `0..slide_count`.
///
/// `-1` lands on the last slide and `slide_count` on the first. Anything
/// further out is reduced modulo `slide_count` so the result is always a
/// valid index. `slide_count` must be non-zero.
pub fn normalize(index: isize, slide_count: usize) -> usize {
    debug_assert!(slide_count > 0, "normalize called with no slides");
    index.rem_euclid(slide_count as isize) as usize
}

impl SliderState {
    pub fn set_index(self, to_index: isize, slide_count: usize) -> Self {
        Self { current_slide_index: normalize(to_index, slide_count), ..self }
    }

    pub fn navigate(self, to_index: isize, slide_count: usize) -> Self {
        Self { auto: false, ..self.set_index(to_index, slide_count) }
    }

    pub fn navigate_next(self, slide_count: usize) -> Self {
        self.navigate(self.current_slide_index as isize + 1, slide_count)
    }

    pub fn navigate_prev(self, slide_count: usize) -> Self {
        self.navigate(self.current_slide_index as isize - 1, slide_count)
    }

    pub fn set_auto(self, auto: bool) -> Self {
        Self { auto, ..self }
    }

    /// Pure transition function: the state that follows `action`.
    pub fn next(self, action: SliderAction, slide_count: usize) -> Self {
        match action {
            SliderAction::SetIndex(to_index) => self.set_index(to_index, slide_count),
            SliderAction::Navigate(to_index) => self.navigate(to_index, slide_count),
            SliderAction::NavigateNext => self.navigate_next(slide_count),
            SliderAction::NavigatePrev => self.navigate_prev(slide_count),
            SliderAction::SetAuto(auto) => self.set_auto(auto),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SLIDES: usize = 3;

    #[test]
    fn initial_state_autoplays_first_slide() {
        assert_eq!(SliderState::default(), SliderState { current_slide_index: 0, auto: true });
    }

    #[test]
    fn normalize_wraps_one_past_either_end() {
        assert_eq!(normalize(-1, SLIDES), SLIDES - 1);
        assert_eq!(normalize(SLIDES as isize, SLIDES), 0);
    }

    #[test]
    fn navigate_current_bubble_only_stops_autoplay() {
        let state = SliderState::default().next(SliderAction::Navigate(0), SLIDES);
        assert_eq!(state, SliderState { current_slide_index: 0, auto: false });
    }

    #[test]
    fn navigate_prev_from_first_wraps_to_last() {
        let state = SliderState::default().next(SliderAction::NavigatePrev, SLIDES);
        assert_eq!(state, SliderState { current_slide_index: 2, auto: false });
    }

    #[test]
    fn navigate_next_from_last_wraps_to_first() {
        let state = SliderState { current_slide_index: 2, auto: false }
            .next(SliderAction::NavigateNext, SLIDES);
        assert_eq!(state.current_slide_index, 0);
    }

    #[test]
    fn set_auto_round_trip_keeps_index() {
        let start = SliderState { current_slide_index: 1, auto: false };
        let state = start
            .next(SliderAction::SetAuto(true), SLIDES)
            .next(SliderAction::SetAuto(false), SLIDES);
        assert_eq!(state, start);
    }

    #[test]
    fn single_slide_wraps_onto_itself() {
        let state = SliderState::default().next(SliderAction::NavigateNext, 1);
        assert_eq!(state.current_slide_index, 0);
        let state = state.next(SliderAction::NavigatePrev, 1);
        assert_eq!(state.current_slide_index, 0);
    }

    proptest! {
        #[test]
        fn normalize_keeps_valid_indices(count in 1usize..64, seed in any::<usize>()) {
            let i = seed % count;
            prop_assert_eq!(normalize(i as isize, count), i);
        }

        #[test]
        fn normalize_always_lands_in_range(count in 1usize..64, i in -1000isize..1000) {
            prop_assert!(normalize(i, count) < count);
        }

        #[test]
        fn navigate_always_disables_auto(auto in any::<bool>(), index in 0usize..8, to in -1isize..=8) {
            let state = SliderState { current_slide_index: index, auto };
            prop_assert!(!state.next(SliderAction::Navigate(to), 8).auto);
            prop_assert!(!state.next(SliderAction::NavigateNext, 8).auto);
            prop_assert!(!state.next(SliderAction::NavigatePrev, 8).auto);
        }

        #[test]
        fn set_index_never_touches_auto(auto in any::<bool>(), index in 0usize..8, to in -1isize..=8) {
            let state = SliderState { current_slide_index: index, auto };
            prop_assert_eq!(state.next(SliderAction::SetIndex(to), 8).auto, auto);
        }
    }
}
