// DOM anchors, selectors and class names the page markup provides.

// Particle backdrop
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const BG_TOGGLE_ID: &str = "toggle-bg";
pub const BUTTON_LABEL_SELECTOR: &str = ".btn__label";

// Theme
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const DARK_CLASS: &str = "dark";

// Mobile menu
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const SITE_NAV_ID: &str = "siteNav";
pub const SITE_NAV_SELECTOR: &str = "#siteNav";
pub const NAV_TOGGLE_SELECTOR: &str = "#navToggle";
pub const OPEN_CLASS: &str = "is-open";

// Smooth scroll
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Reveal on scroll
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const VISIBLE_CLASS: &str = "is-visible";

// Buttons
pub const BUTTON_SELECTOR: &str = ".btn";
pub const RIPPLE_CLASS: &str = "ripple";
pub const MAGNET_CLASS: &str = "mag";

// Navigation highlight
pub const NAV_LINK_SELECTOR: &str = ".nav__link";
pub const ACTIVE_CLASS: &str = "is-active";

// Media queries
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
