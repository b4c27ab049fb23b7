use carousel::constants::*;
use carousel::focus::click_bubble;
use carousel::{BubbleFocus, Slide, SliderAction, SliderState};
use raylib::prelude::*;

const ACCENT: Color = Color::new(255, 161, 0, 255);
const PANEL: Color = Color::new(0, 0, 0, 170);
const BUTTON: Color = Color::new(60, 60, 60, 255);
const PLACEHOLDER: Color = Color::new(40, 40, 40, 255);

/// Clickable parts of the navigation bar.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Control {
    Bubble(usize),
    Toggle,
    Prev,
    Next,
}

impl Control {
    pub fn action(self, state: &SliderState) -> SliderAction {
        match self {
            Control::Bubble(i) => click_bubble(i),
            Control::Toggle => SliderAction::SetAuto(!state.auto),
            Control::Prev => SliderAction::NavigatePrev,
            Control::Next => SliderAction::NavigateNext,
        }
    }
}

/// One frame's worth of user input, still unresolved.
///
/// Inputs are turned into actions one at a time against the state left by
/// the previous dispatch, so a toggle after a navigation in the same frame
/// sees the navigation's effect.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Input {
    Click(Control),
    /// Pointer focus landing on a bubble, ahead of its click.
    FocusBubble(usize),
    /// `Tab`, or `Shift+Tab` when `backwards`.
    Traverse { backwards: bool },
    Activate,
    Prev,
    Next,
    ToggleAuto,
}

impl Input {
    pub fn resolve(self, focus: &mut BubbleFocus, state: &SliderState, bubble_count: usize) -> Option<SliderAction> {
        match self {
            Input::Click(Control::Bubble(i)) => Some(Control::Bubble(i).action(state)),
            Input::Click(control) => {
                focus.blur();
                Some(control.action(state))
            }
            Input::FocusBubble(i) => focus.focus(i, state),
            Input::Traverse { backwards } => focus.traverse(backwards, state, bubble_count),
            Input::Activate => focus.activate(),
            Input::Prev => Some(SliderAction::NavigatePrev),
            Input::Next => Some(SliderAction::NavigateNext),
            Input::ToggleAuto => Some(SliderAction::SetAuto(!state.auto)),
        }
    }
}

/// Where the slide and the navigation controls go for a given window size.
pub struct Layout {
    pub slide: Rectangle,
    pub bar: Rectangle,
    pub progress: Rectangle,
    pub bubbles: Vec<Rectangle>,
    pub toggle: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
}

impl Layout {
    pub fn new(screen_width: f32, screen_height: f32, bubble_count: usize) -> Self {
        let bar_top = screen_height - NAVIGATION_HEIGHT;
        let controls_y = bar_top + (NAVIGATION_HEIGHT - BUBBLE_SIZE) * 0.5;

        let bubbles = (0..bubble_count)
            .map(|i| {
                let x = CONTROLS_MARGIN + i as f32 * (BUBBLE_SIZE + BUBBLE_GAP);
                Rectangle::new(x, controls_y, BUBBLE_SIZE, BUBBLE_SIZE)
            })
            .collect();

        // Buttons are right-aligned: PAUSE/START, PREV, NEXT
        let button = |slot: f32| {
            let x = screen_width - CONTROLS_MARGIN - slot * (BUTTON_WIDTH + BUBBLE_GAP) - BUTTON_WIDTH;
            Rectangle::new(x, controls_y, BUTTON_WIDTH, BUTTON_HEIGHT)
        };

        Self {
            slide: Rectangle::new(0.0, 0.0, screen_width, bar_top),
            bar: Rectangle::new(0.0, bar_top, screen_width, NAVIGATION_HEIGHT),
            progress: Rectangle::new(0.0, bar_top - PROGRESS_HEIGHT, screen_width, PROGRESS_HEIGHT),
            bubbles,
            toggle: button(2.0),
            prev: button(1.0),
            next: button(0.0),
        }
    }

    pub fn control_at(&self, point: Vector2) -> Option<Control> {
        if let Some(i) = self.bubbles.iter().position(|b| b.check_collision_point_rec(point)) {
            return Some(Control::Bubble(i));
        }
        [(self.toggle, Control::Toggle), (self.prev, Control::Prev), (self.next, Control::Next)]
            .into_iter()
            .find(|(rec, _)| rec.check_collision_point_rec(point))
            .map(|(_, control)| control)
    }
}

/// Draws `texture` scaled to fit inside `area`, centered.
pub fn draw_photo(d: &mut RaylibDrawHandle, texture: &Texture2D, area: Rectangle) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    let scale = (area.width / tex_width).min(area.height / tex_height);

    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;
    let dest = Rectangle::new(
        area.x + (area.width - scaled_width) * 0.5,
        area.y + (area.height - scaled_height) * 0.5,
        scaled_width,
        scaled_height,
    );

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        dest,
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

pub fn draw_slide(d: &mut RaylibDrawHandle, slide: &Slide, texture: Option<&Texture2D>, area: Rectangle) {
    match texture {
        Some(texture) => draw_photo(d, texture, area),
        None => d.draw_rectangle_rec(area, PLACEHOLDER),
    }

    let caption_y = (area.y + area.height) as i32 - TITLE_FONT_SIZE - FONT_SIZE - 3 * CONTROLS_MARGIN as i32;
    let x = CONTROLS_MARGIN as i32;
    d.draw_text(&slide.title, x, caption_y, TITLE_FONT_SIZE, Color::WHITE);
    if !slide.description.is_empty() {
        d.draw_text(&slide.description, x, caption_y + TITLE_FONT_SIZE + 4, FONT_SIZE, Color::LIGHTGRAY);
    }
}

fn draw_button(d: &mut RaylibDrawHandle, rec: Rectangle, label: &str, fill: Color, focused: bool) {
    d.draw_rectangle_rec(rec, fill);
    if focused {
        d.draw_rectangle_lines_ex(rec, 2.0, Color::WHITE);
    }
    // Default font is roughly half as wide as it is tall
    let text_width = label.len() as i32 * FONT_SIZE / 2;
    let x = (rec.x + rec.width * 0.5) as i32 - text_width / 2;
    let y = (rec.y + rec.height * 0.5) as i32 - FONT_SIZE / 2;
    d.draw_text(label, x, y, FONT_SIZE, Color::WHITE);
}

/// Progress bar, bubbles and buttons. `progress` is `None` while paused and
/// the bar is then hidden.
pub fn draw_navigation(
    d: &mut RaylibDrawHandle,
    layout: &Layout,
    state: &SliderState,
    focused: Option<usize>,
    progress: Option<f32>,
) {
    if let Some(progress) = progress {
        let mut filled = layout.progress;
        filled.width *= progress.clamp(0.0, 1.0);
        d.draw_rectangle_rec(filled, ACCENT);
    }

    d.draw_rectangle_rec(layout.bar, PANEL);

    for (i, rec) in layout.bubbles.iter().enumerate() {
        let fill = if i == state.current_slide_index { ACCENT } else { BUTTON };
        draw_button(d, *rec, &(i + 1).to_string(), fill, focused == Some(i));
    }

    let toggle = if state.auto { "PAUSE" } else { "START" };
    draw_button(d, layout.toggle, toggle, BUTTON, false);
    draw_button(d, layout.prev, "PREV", BUTTON, false);
    draw_button(d, layout.next, "NEXT", BUTTON, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel::{Slider, SliderConfig};

    fn center(rec: Rectangle) -> Vector2 {
        Vector2::new(rec.x + rec.width * 0.5, rec.y + rec.height * 0.5)
    }

    #[test]
    fn controls_are_found_under_the_pointer() {
        let layout = Layout::new(1280.0, 720.0, 3);
        assert_eq!(layout.control_at(center(layout.bubbles[2])), Some(Control::Bubble(2)));
        assert_eq!(layout.control_at(center(layout.toggle)), Some(Control::Toggle));
        assert_eq!(layout.control_at(center(layout.prev)), Some(Control::Prev));
        assert_eq!(layout.control_at(center(layout.next)), Some(Control::Next));
        assert_eq!(layout.control_at(center(layout.slide)), None);
    }

    #[test]
    fn toggle_button_flips_autoplay() {
        let playing = SliderState { current_slide_index: 0, auto: true };
        assert_eq!(Control::Toggle.action(&playing), SliderAction::SetAuto(false));
        let paused = SliderState { auto: false, ..playing };
        assert_eq!(Control::Toggle.action(&paused), SliderAction::SetAuto(true));
    }

    fn three_slides() -> Slider {
        let slides = ["a", "b", "c"].map(|t| Slide::new(t, "", format!("{t}.png")));
        Slider::new(SliderConfig::new(slides.to_vec(), 3.0).unwrap())
    }

    fn apply(slider: &mut Slider, focus: &mut BubbleFocus, inputs: &[Input]) {
        for input in inputs {
            let count = slider.config().slide_count();
            if let Some(action) = input.resolve(focus, &slider.state(), count) {
                slider.dispatch(action);
            }
        }
    }

    #[test]
    fn toggle_after_navigation_in_one_frame_sees_the_pause() {
        let mut slider = three_slides();
        let mut focus = BubbleFocus::default();
        apply(&mut slider, &mut focus, &[Input::Click(Control::Prev), Input::ToggleAuto]);
        assert_eq!(slider.state(), SliderState { current_slide_index: 2, auto: true });

        apply(&mut slider, &mut focus, &[Input::Next, Input::Click(Control::Toggle)]);
        assert_eq!(slider.state(), SliderState { current_slide_index: 0, auto: true });
    }

    #[test]
    fn bubble_focus_then_click_lands_on_that_slide() {
        let mut slider = three_slides();
        let mut focus = BubbleFocus::default();
        apply(&mut slider, &mut focus, &[Input::FocusBubble(1), Input::Click(Control::Bubble(1))]);
        assert_eq!(slider.state(), SliderState { current_slide_index: 1, auto: false });
        assert_eq!(focus.focused(), Some(1));
    }

    #[test]
    fn bubble_click_navigates_even_to_current_slide() {
        let state = SliderState { current_slide_index: 1, auto: true };
        assert_eq!(Control::Bubble(1).action(&state), SliderAction::Navigate(1));
    }
}
