pub mod camera;
pub mod config;
pub mod connections;
pub mod constants;
pub mod controller;
pub mod field;
pub mod lifecycle;
pub mod mask;
pub mod nav;
pub mod sim;
pub mod theme;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use mask::*;
pub use sim::*;

// Shaders bundled as string constants
pub static NETWORK_WGSL: &str = include_str!("../../shaders/network.wgsl");
