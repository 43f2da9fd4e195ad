/// Simulation tuning constants for the particle-network background.
///
/// Rates are per frame: the simulator runs once per display refresh with no
/// fixed timestep, so a faster display simply animates faster.
// Simulation domain: half-extent of the axis-aligned box points live in
pub const DOMAIN_HALF_EXTENT: f32 = 300.0;

// Uniform (free network) strategy
pub const UNIFORM_PARTICLE_COUNT: usize = 300;
pub const UNIFORM_CONNECTION_DISTANCE: f32 = 120.0;
pub const VELOCITY_HALF_RANGE: f32 = 0.25; // per-axis velocity drawn from [-r, r]

// Text (morphing) strategy
pub const TEXT_MIN_PARTICLES: usize = 260;
pub const TEXT_CONNECTION_DISTANCE: f32 = 28.0;
pub const DEFAULT_TEXT: &str = "DESARKA";

// Hard cap on N; the connection pass is O(N²) every frame
pub const MAX_PARTICLES: usize = 400;
pub const MIN_PARTICLES: usize = 2;

// Text raster and sampling
pub const TEXT_RASTER_WIDTH: u32 = 800;
pub const TEXT_RASTER_HEIGHT: u32 = 200;
pub const TEXT_FONT_PX: u32 = 100;
pub const TEXT_SAMPLE_STRIDE: usize = 7;
pub const TEXT_ALPHA_THRESHOLD: u8 = 128;

// Morph progress rates (per frame)
pub const MORPH_RISE_PER_FRAME: f32 = 0.03;
pub const MORPH_FALL_PER_FRAME: f32 = 0.02;
pub const MORPH_SNAP_EPSILON: f32 = 1e-4;
pub const MORPH_EASE: f32 = 0.05; // display position smoothing toward the blend target

// Rotation controller
pub const ROTATION_EASE: f32 = 0.02;
pub const UNIFORM_POINTER_GAIN: f32 = 0.5; // radians at full pointer deflection
pub const TEXT_POINTER_GAIN: f32 = 0.2;
pub const UNIFORM_AUTO_ROTATE: f32 = 0.001;
pub const TEXT_AUTO_ROTATE_IDLE: f32 = 0.0005;
pub const TEXT_AUTO_ROTATE_HOVERED: f32 = 0.0;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 400.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;
