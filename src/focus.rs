use crate::state::{SliderAction, SliderState};

/// Keyboard focus over the navigation bubbles.
///
/// Focus follows the current slide. Moving focus onto any other bubble counts
/// as a request to navigate there.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct BubbleFocus {
    focused: Option<usize>,
}

impl BubbleFocus {
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Gives focus to `bubble` on the user's behalf.
    pub fn focus(&mut self, bubble: usize, state: &SliderState) -> Option<SliderAction> {
        self.focused = Some(bubble);
        (bubble != state.current_slide_index).then_some(SliderAction::Navigate(bubble as isize))
    }

    /// Programmatic focus: pulls focus onto the current slide's bubble. The
    /// bubble is current, so this never asks for navigation.
    pub fn follow(&mut self, state: &SliderState) {
        self.focused = Some(state.current_slide_index);
    }

    /// `Tab` / `Shift+Tab` traversal, wrapping at either end.
    pub fn traverse(&mut self, backwards: bool, state: &SliderState, bubble_count: usize) -> Option<SliderAction> {
        if bubble_count == 0 {
            return None;
        }
        let from = self.focused.unwrap_or(state.current_slide_index);
        let to = if backwards { (from + bubble_count - 1) % bubble_count } else { (from + 1) % bubble_count };
        self.focus(to, state)
    }

    /// `Enter` / `Space` on the focused bubble behaves like a click.
    pub fn activate(&self) -> Option<SliderAction> {
        self.focused.map(|bubble| SliderAction::Navigate(bubble as isize))
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }
}

/// A click on bubble `i` always navigates, even to the current slide.
pub fn click_bubble(bubble: usize) -> SliderAction {
    SliderAction::Navigate(bubble as isize)
}
