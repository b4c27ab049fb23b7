use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use carousel::constants::*;
use carousel::{BubbleFocus, Slider, SliderConfig, SliderState};
use clap::Parser;
use log::info;
use raylib::prelude::*;

mod texture_loader;
mod view;

use crate::texture_loader::load_slide_textures;
use crate::view::{Control, Input, Layout, draw_navigation, draw_slide};

#[derive(Parser, Debug)]
#[command(version, about = "Photo carousel with autoplay and keyboard navigation")]
struct Args {
    /// Directory of photos, or a TOML manifest listing the slides
    source: PathBuf,

    /// Seconds each slide stays up while autoplaying (overrides the manifest)
    #[arg(short, long)]
    duration: Option<f64>,

    /// Start with autoplay paused
    #[arg(long)]
    paused: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

/// Keyboard input for this frame.
fn keyboard_input(rl: &RaylibHandle) -> Option<Input> {
    if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
        let backwards = rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT) || rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT);
        return Some(Input::Traverse { backwards });
    }
    if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        return Some(Input::Activate);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        return Some(Input::Prev);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        return Some(Input::Next);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_P) {
        return Some(Input::ToggleAuto);
    }
    None
}

/// Mouse input for this frame. A bubble takes focus before its click lands.
fn mouse_input(rl: &RaylibHandle, layout: &Layout) -> Vec<Input> {
    if !rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        return Vec::new();
    }
    match layout.control_at(rl.get_mouse_position()) {
        Some(Control::Bubble(i)) => vec![Input::FocusBubble(i), Input::Click(Control::Bubble(i))],
        Some(control) => vec![Input::Click(control)],
        None => Vec::new(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SliderConfig::load(&args.source, args.duration)
        .with_context(|| format!("failed to load slides from {}", args.source.display()))?;
    info!("{} slides, {}s each", config.slide_count(), config.duration());

    let initial = SliderState { current_slide_index: 0, auto: !args.paused };
    let mut slider = Slider::with_state(config, initial);

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&slider.current_slide().title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_slide_textures(&mut rl, &thread, slider.config());

    // Window title follows the active slide
    let pending_title: Rc<Cell<Option<String>>> = Rc::new(Cell::new(None));
    let title_sink = pending_title.clone();
    slider.subscribe(move |_, slide| title_sink.set(Some(slide.title.clone())));

    let bubble_count = slider.config().slide_count();
    let mut focus = BubbleFocus::default();
    focus.follow(&slider.state());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time().max(0.0));
        let layout = Layout::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32, bubble_count);

        // --- Input ---
        let mut inputs = mouse_input(&rl, &layout);
        inputs.extend(keyboard_input(&rl));

        let mut changed = false;
        for input in inputs {
            if let Some(action) = input.resolve(&mut focus, &slider.state(), bubble_count) {
                changed |= slider.dispatch(action);
            }
        }
        changed |= slider.tick(dt);
        if changed {
            focus.follow(&slider.state());
        }

        if let Some(title) = pending_title.take() {
            rl.set_window_title(&thread, &title);
        }

        // --- Render ---
        let state = slider.state();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        draw_slide(&mut d, slider.current_slide(), textures[state.current_slide_index].as_ref(), layout.slide);
        draw_navigation(&mut d, &layout, &state, focus.focused(), slider.progress());
    }

    let last = slider.teardown();
    info!("closed on slide {}", last.current_slide_index + 1);
    Ok(())
}
