/// Hero canvas and site runtime tuning constants.
///
/// Physics values are per-frame quantities: the integrator runs once per
/// display refresh with no time step scaling.
// Layout
pub const STRING_COUNT: usize = 15;
pub const STRING_SEGMENTS: usize = 10; // points per string = segments + 1

// Point integrator
pub const SPRING_K: f32 = 0.05;
pub const DAMPING: f32 = 0.9;
pub const INTERACTION_RADIUS: f32 = 100.0; // half-width of the square pointer window (px)
pub const POINTER_VELOCITY_THRESHOLD: f32 = 5.0; // px/frame below which the pointer never plucks
pub const IMPULSE_SCALE: f32 = 0.1;

// Motion detection
pub const MOTION_VELOCITY_EPSILON: f32 = 0.01;
pub const MOTION_DISPLACEMENT_EPSILON: f32 = 0.1;
pub const ACTIVE_IDLE_EPSILON: f32 = 0.01;

// Excitation
pub const ACTIVE_DECAY: f32 = 0.95;

// Stroke styling
pub const REST_COLOR: [f32; 3] = [20.0, 20.0, 20.0]; // near-black
pub const ACCENT_COLOR: [f32; 3] = [0.0, 191.0, 255.0]; // sky blue
pub const REST_LINE_WIDTH: f32 = 1.0;
pub const ACCENT_LINE_WIDTH: f32 = 2.5;

// Pointer starts far off-canvas so nothing reacts before the first move
pub const POINTER_SENTINEL: f32 = -1000.0;

// Custom cursor follow factors (fraction of remaining distance per frame)
pub const CURSOR_LERP: f32 = 0.25;
pub const CURSOR_TRAIL_LERP: f32 = 0.12;

// Preloader
pub const PRELOADER_DURATION_MS: u32 = 2000;
pub const PRELOADER_TICK_MS: u32 = 80;
pub const PRELOADER_JITTER_MAX: u32 = 3; // exclusive
pub const PRELOADER_REVEAL_DELAY_MS: i32 = 300;
pub const PRELOADER_HIDE_DELAY_MS: i32 = 800;
pub const PRELOADER_STATUSES: [&str; 6] = [
    "INITIALIZING KERNEL...",
    "LOADING ASSETS...",
    "OPTIMIZING WEBGL...",
    "ESTABLISHING SECURE CONNECTION...",
    "RENDERING VIEWPORT...",
    "SYSTEM READY",
];

// Smooth scroll
pub const SMOOTH_SCROLL_DURATION_SEC: f64 = 1.2;

// Horizontal scroll section
pub const HORIZONTAL_MIN_VIEWPORT: f64 = 768.0;
pub const HORIZONTAL_END_PADDING: f64 = 50.0;

// Reveal line as a fraction of viewport height ("top 80%")
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;

// Custom scrollbar
pub const SCROLLBAR_MIN_THUMB_PX: f64 = 50.0;
pub const SCROLLBAR_CREATE_DELAY_MS: i32 = 1500;

// Diagnostics
pub const FRAME_STATS_INTERVAL_SEC: f32 = 5.0;
