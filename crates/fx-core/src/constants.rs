// Shared tuning constants for the backdrop and the page interactions.

// Particle density: one particle per this many square logical pixels
pub const AREA_PER_PARTICLE: f64 = 28_000.0;
pub const MIN_PARTICLES: usize = 24;
pub const MAX_PARTICLES: usize = 120;

// Sampling ranges for freshly seeded particles
pub const RADIUS_MIN: f64 = 1.0;
pub const RADIUS_MAX: f64 = 2.5;
pub const ALPHA_MIN: f64 = 0.2;
pub const ALPHA_MAX: f64 = 0.7;
pub const SPEED_MAX: f64 = 0.25; // per axis, logical px per frame

// Toroidal wrap happens this far outside the visible surface
pub const WRAP_MARGIN: f64 = 10.0;

// Glow rendering
pub const GLOW_RADIUS_SCALE: f64 = 8.0;
pub const GLOW_INNER_HUE_BASE: f64 = 220.0;
pub const GLOW_INNER_HUE_SPAN: f64 = 100.0;
pub const GLOW_OUTER_HUE_BASE: f64 = 180.0;
pub const GLOW_OUTER_HUE_SPAN: f64 = 80.0;
pub const GLOW_SATURATION: f64 = 80.0;
pub const GLOW_INNER_LIGHTNESS: f64 = 65.0;
pub const GLOW_OUTER_LIGHTNESS: f64 = 60.0;

// Timers (milliseconds)
pub const RESIZE_DEBOUNCE_MS: u32 = 100;
pub const RIPPLE_DURATION_MS: u32 = 700;

// Magnetic buttons follow the pointer by this fraction of its offset from center
pub const MAGNET_FACTOR: f64 = 0.06;

// Persisted flag keys
pub const THEME_KEY: &str = "theme";
pub const ANIMATION_KEY: &str = "bg-anim";

// Intersection observer options
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const NAV_ROOT_MARGIN: &str = "-40% 0px -50% 0px";
pub const NAV_THRESHOLD: f64 = 0.0;
