use super::constants::{DOMAIN_HALF_EXTENT, MAX_PARTICLES, VELOCITY_HALF_RANGE};
use super::mask::TextMask;
use glam::Vec3;
use rand::Rng;

/// Per-point motion data, one variant per field strategy.
#[derive(Clone, Debug)]
pub enum Motion {
    /// Free drift: `velocity[i]` is added to the display position.
    Drift { velocities: Vec<Vec3> },
    /// Morph: the display position eases toward a blend of two targets.
    Morph {
        scattered: Vec<Vec3>,
        assembled: Vec<Vec3>,
        drift: Vec<Vec3>,
    },
}

/// Fixed-size set of simulated points.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub motion: Motion,
}

impl ParticleField {
    /// Scatter `count` points uniformly in the domain box with small random
    /// velocities.
    pub fn uniform(count: usize, rng: &mut impl Rng) -> Self {
        let positions = (0..count).map(|_| random_in_domain(rng)).collect();
        let velocities = (0..count).map(|_| random_velocity(rng)).collect();
        Self {
            positions,
            motion: Motion::Drift { velocities },
        }
    }

    /// Seed assembled targets from `mask`, padding up to `min_count` points
    /// whose assembled target is itself random so they never pile up at the
    /// origin. Oversized masks are thinned to `MAX_PARTICLES`.
    pub fn from_text_mask(mut mask: TextMask, min_count: usize, rng: &mut impl Rng) -> Self {
        mask.thin_to(MAX_PARTICLES);
        let count = mask.len().max(min_count).min(MAX_PARTICLES);
        let assembled: Vec<Vec3> = (0..count)
            .map(|i| match mask.points.get(i) {
                Some(p) => Vec3::new(p.x, p.y, 0.0),
                None => random_in_domain(rng),
            })
            .collect();
        let scattered: Vec<Vec3> = (0..count).map(|_| random_in_domain(rng)).collect();
        let drift = (0..count).map(|_| random_velocity(rng)).collect();
        Self {
            positions: scattered.clone(),
            motion: Motion::Morph {
                scattered,
                assembled,
                drift,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[inline]
pub fn random_in_domain(rng: &mut impl Rng) -> Vec3 {
    let h = DOMAIN_HALF_EXTENT;
    Vec3::new(
        rng.gen_range(-h..h),
        rng.gen_range(-h..h),
        rng.gen_range(-h..h),
    )
}

#[inline]
pub fn random_velocity(rng: &mut impl Rng) -> Vec3 {
    let r = VELOCITY_HALF_RANGE;
    Vec3::new(
        rng.gen_range(-r..r),
        rng.gen_range(-r..r),
        rng.gen_range(-r..r),
    )
}

/// Advance `position` by `velocity`, turning the velocity back toward the
/// domain on any axis where the position has left it.
#[inline]
pub fn drift_and_reflect(position: &mut Vec3, velocity: &mut Vec3, bound: f32) {
    *position += *velocity;
    for axis in 0..3 {
        let p = position[axis];
        if p > bound {
            velocity[axis] = -velocity[axis].abs();
        } else if p < -bound {
            velocity[axis] = velocity[axis].abs();
        }
    }
}
