// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Per-frame rates are fractions of the full range
    assert!(MORPH_RISE_PER_FRAME > 0.0 && MORPH_RISE_PER_FRAME < 1.0);
    assert!(MORPH_FALL_PER_FRAME > 0.0 && MORPH_FALL_PER_FRAME < 1.0);
    assert!(MORPH_EASE > 0.0 && MORPH_EASE <= 1.0);
    assert!(ROTATION_EASE > 0.0 && ROTATION_EASE <= 1.0);

    // Opacities
    assert!(POINT_OPACITY > 0.0 && POINT_OPACITY <= 1.0);
    assert!(LINE_OPACITY > 0.0 && LINE_OPACITY <= 1.0);
    assert!(REVEAL_THRESHOLD >= 0.0 && REVEAL_THRESHOLD <= 1.0);

    // Auto-rotation never runs backwards
    assert!(UNIFORM_AUTO_ROTATE >= 0.0);
    assert!(TEXT_AUTO_ROTATE_IDLE >= TEXT_AUTO_ROTATE_HOVERED);
    assert!(TEXT_AUTO_ROTATE_HOVERED >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_counts_respect_the_cap() {
    assert!(MIN_PARTICLES >= 2);
    assert!(UNIFORM_PARTICLE_COUNT >= MIN_PARTICLES && UNIFORM_PARTICLE_COUNT <= MAX_PARTICLES);
    assert!(TEXT_MIN_PARTICLES >= MIN_PARTICLES && TEXT_MIN_PARTICLES <= MAX_PARTICLES);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Connection radius must fit inside the domain box
    assert!(UNIFORM_CONNECTION_DISTANCE < 2.0 * DOMAIN_HALF_EXTENT);
    // Text lines only join glyph neighbours
    assert!(TEXT_CONNECTION_DISTANCE < UNIFORM_CONNECTION_DISTANCE);
    assert!(TEXT_CONNECTION_DISTANCE > TEXT_SAMPLE_STRIDE as f32);

    // Assembly is faster than dispersal
    assert!(MORPH_RISE_PER_FRAME > MORPH_FALL_PER_FRAME);
    assert!(MORPH_SNAP_EPSILON < MORPH_FALL_PER_FRAME);

    // The camera sees the whole domain
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_Z + DOMAIN_HALF_EXTENT < CAMERA_FAR);

    // The text raster fits inside the domain after centering
    assert!((TEXT_RASTER_WIDTH as f32) / 2.0 <= 2.0 * DOMAIN_HALF_EXTENT);
    assert!(TEXT_FONT_PX < TEXT_RASTER_HEIGHT);

    // The theme switches while the cord is still pulled
    assert!(THEME_SWITCH_DELAY_MS < PULL_CORD_RELEASE_MS);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}
