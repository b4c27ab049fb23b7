use std::path::Path;
use std::time::Duration;

use carousel::{Slider, SliderConfig, SliderState};

fn demo() -> SliderConfig {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/slides.toml");
    SliderConfig::load(&manifest, None).unwrap()
}

#[test]
fn demo_manifest_loads_three_slides() {
    let config = demo();
    assert_eq!(config.slide_count(), 3);
    assert_eq!(config.duration(), 3.0);
    assert!(config.slide(2).photo.ends_with("slides/jobs.jpeg"));
}

#[test]
fn demo_runs_a_full_autoplay_cycle() {
    let mut slider = Slider::new(demo());
    let mut seen = vec![slider.current_slide().title.clone()];
    for _ in 0..3 {
        // 60 fps frames until the timer fires
        while !slider.tick(Duration::from_millis(16)) {}
        seen.push(slider.current_slide().title.clone());
    }
    assert_eq!(seen, ["Elon Musk", "Bill Gates", "Steve Jobs", "Elon Musk"]);
    assert_eq!(slider.teardown(), SliderState { current_slide_index: 0, auto: true });
}
