/// DOM hooks and presentation classes used by the browser front-end.
///
/// Element ids and class names are shared with `index.html` and the
/// stylesheet, so they live here rather than inline at the call sites.
// Overlay elements
pub const TITLE_ID: &str = "title";
pub const TITLE_BG_ID: &str = "title-bg";
pub const CONTAINER_ID: &str = "container";

// Page layout
pub const MAX_SIZE_BY_RENDERER_CLASS: &str = "max-size-by-renderer";

// Overlay visibility classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const FONT_ZERO_CLASS: &str = "font-zero";
pub const RADIAL_FADE_IN_CLASS: &str = "bg-radial-gradient-fade-in";
pub const RADIAL_FADE_OUT_CLASS: &str = "bg-radial-gradient-fade-out";
pub const IMG_FADE_IN_CLASS: &str = "img-fade-in";
pub const IMG_FADE_OUT_CLASS: &str = "img-fade-out";

// Title classes
pub const TITLE_ON_TOP_CLASS: &str = "position-on-top";
pub const TITLE_ON_BOTTOM_CLASS: &str = "position-on-bottom";
pub const GRADIENT_FADE_IN_CLASS: &str = "bg-gradient-fade-in";
pub const GRADIENT_FADE_OUT_CLASS: &str = "bg-gradient-fade-out";

// Navigation buttons fire on release
pub const NAV_EVENT: &str = "mouseup";

// Shown in #container when no graphics adapter is available
pub const NO_WEBGL_MESSAGE: &str =
    "Your browser or graphics card does not seem to support WebGL. Find out how to get it <a href=\"http://get.webgl.org/\">here</a>.";

// Layer stacking, CSS labels above the canvas
pub const CANVAS_Z_INDEX: &str = "0";
pub const CSS_LAYER_Z_INDEX: &str = "1";

// Clear colours (linear RGB)
pub const SKY_CLEAR: [f64; 3] = [0.42, 0.62, 0.86];
pub const VOID_CLEAR: [f64; 3] = [0.02, 0.02, 0.03];

// Annotation lines are drawn white
pub const LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// Initial vertex buffer capacity, grown on demand
pub const INITIAL_VERTEX_CAPACITY: usize = 256;
