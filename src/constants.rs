pub const WINDOW_WIDTH: i32 = 1280;             // Default window width
pub const WINDOW_HEIGHT: i32 = 720;             // Default window height
pub const FPS: u32 = 60;                        // Frames per second

pub const DEFAULT_DURATION: f64 = 3.0;          // Seconds each slide is shown while autoplaying

pub const NAVIGATION_HEIGHT: f32 = 72.0;        // Height of the navigation bar at the bottom
pub const PROGRESS_HEIGHT: f32 = 6.0;           // Height of the progress bar above the controls
pub const BUBBLE_SIZE: f32 = 36.0;              // Side of a square navigation bubble
pub const BUBBLE_GAP: f32 = 10.0;               // Space between bubbles
pub const BUTTON_WIDTH: f32 = 96.0;             // Width of PAUSE/START, PREV and NEXT
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const CONTROLS_MARGIN: f32 = 16.0;          // Padding around the navigation controls
pub const FONT_SIZE: i32 = 20;
pub const TITLE_FONT_SIZE: i32 = 40;

pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
