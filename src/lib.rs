//! Photo carousel core: the slider state machine, its autoplay timer and the
//! configuration it is built from. The raylib window lives in the binary.

pub mod config;
pub mod constants;
pub mod focus;
pub mod slide;
pub mod slider;
pub mod state;
pub mod timer;

pub use config::{ConfigError, SliderConfig};
pub use focus::BubbleFocus;
pub use slide::Slide;
pub use slider::Slider;
pub use state::{SliderAction, SliderState, normalize};
pub use timer::AutoplayTimer;
