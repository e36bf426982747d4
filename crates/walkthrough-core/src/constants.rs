use std::time::Duration;

// Shared tuning constants for the walkthrough state machine.

// Scroll layout
pub const SLIDES_AMT: u32 = 5;
pub const FIRST_SLIDE: i32 = 1;
pub const TERMINAL_SLIDE: i32 = 5; // any index at or above this plays the ending
// Overshoot applied to navigation scroll targets so they land inside the slide
pub const SLIDE_SCROLL_OVERSHOOT: f64 = 1.05;

// Animation timings
pub const CAMERA_TWEEN: Duration = Duration::from_millis(1000);
pub const ANNOTATION_TWEEN: Duration = Duration::from_millis(300);
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);
pub const OVERLAY_HIDE_DELAY: Duration = Duration::from_millis(500);

// Perspective camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 11000.0;

// Screens narrower than this get the alternate framing
pub const NARROW_SCREEN_MAX_WIDTH: f64 = 600.0;

// Annotation line ribbon width in world units
pub const LINE_WIDTH: f32 = 0.1;

// Title copy
pub const OPENING_TITLE: &str = "Ponte D. Luís";
pub const ENDING_TITLE: &str = "Até a próxima!";

// CSS-3D numbers smaller than this print as zero
pub const CSS_EPSILON: f64 = 1e-10;
