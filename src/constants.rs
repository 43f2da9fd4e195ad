// Shared DOM and rendering constants used by the web frontend.

// Mount points
pub const BACKGROUND_CONTAINER_ID: &str = "threejs-container";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const PULL_CORD_ID: &str = "pull-cord";
pub const MOBILE_MENU_BTN: &str = ".mobile-menu-btn";
pub const MOBILE_MENU: &str = ".mobile-menu";
pub const MOBILE_MENU_CLOSE: &str = ".mobile-menu-close";
pub const NAV_LINKS: &str = ".nav-link";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const REVEAL_TARGETS: &str = ".fade-in, .reveal-up, .scale-on-view, .rotate-in";
pub const INTERACTIVE_TARGETS: &str =
    "a, button, .flip-card, [role=\"button\"], input, textarea";

// Container data attributes (configuration)
pub const ATTR_VARIANT: &str = "data-variant";
pub const ATTR_TEXT: &str = "data-text";
pub const ATTR_PARTICLES: &str = "data-particles";

// Theme pull-cord timing (milliseconds)
pub const PULL_CORD_RELEASE_MS: i32 = 200;
pub const THEME_SWITCH_DELAY_MS: i32 = 150;

// Reveal observer
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Scene colors (linear RGB) and materials
pub const BACKGROUND_COLOR: [f64; 3] = [0.0, 0.0, 0.0];
pub const POINT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const POINT_OPACITY: f32 = 0.9;
pub const POINT_SIZE: f32 = 3.0; // world-attenuated size, like a sized point sprite
pub const LINE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const LINE_OPACITY: f32 = 0.15;

// Frame stats logging interval (seconds)
pub const FRAME_STATS_INTERVAL_SEC: f32 = 5.0;
