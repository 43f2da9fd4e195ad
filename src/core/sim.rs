use super::config::{BackgroundConfig, Strategy};
use super::connections::SegmentBuffer;
use super::constants::*;
use super::controller::{PointerInput, Rotation};
use super::field::{drift_and_reflect, Motion, ParticleField};
use super::mask::TextMask;

/// Complete per-scene simulation state, stepped once per frame.
#[derive(Debug)]
pub struct Simulation {
    pub field: ParticleField,
    pub segments: SegmentBuffer,
    pub rotation: Rotation,
    /// Blend between scattered (0) and assembled (1); only moves for morph fields.
    pub morph_progress: f32,
    pub connection_distance: f32,
    pub pointer_gain: f32,
    hovered: bool,
    frames: u64,
}

impl Simulation {
    pub fn new(field: ParticleField, config: &BackgroundConfig) -> Self {
        let segments = SegmentBuffer::with_point_capacity(field.len());
        Self {
            field,
            segments,
            rotation: Rotation::default(),
            morph_progress: 0.0,
            connection_distance: config.connection_distance,
            pointer_gain: config.pointer_gain,
            hovered: false,
            frames: 0,
        }
    }

    pub fn is_morphing(&self) -> bool {
        matches!(self.field.motion, Motion::Morph { .. })
    }

    /// Hover only matters to morph fields; free networks ignore it.
    fn assembling(&self) -> bool {
        self.hovered && self.is_morphing()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one frame: positions, connections, then rotation.
    pub fn step(&mut self, input: &PointerInput) {
        self.hovered = input.hovered;
        self.update_positions();
        let pair_stride = if self.assembling() { 2 } else { 1 };
        self.segments
            .rebuild(&self.field.positions, self.connection_distance, pair_stride);
        let auto_rotate = match (&self.field.motion, self.hovered) {
            (Motion::Drift { .. }, _) => UNIFORM_AUTO_ROTATE,
            (Motion::Morph { .. }, false) => TEXT_AUTO_ROTATE_IDLE,
            (Motion::Morph { .. }, true) => TEXT_AUTO_ROTATE_HOVERED,
        };
        self.rotation
            .ease_toward(input, self.pointer_gain, ROTATION_EASE, auto_rotate);
        self.frames += 1;
    }

    fn update_positions(&mut self) {
        let bound = DOMAIN_HALF_EXTENT;
        match &mut self.field.motion {
            Motion::Drift { velocities } => {
                for (p, v) in self.field.positions.iter_mut().zip(velocities.iter_mut()) {
                    drift_and_reflect(p, v, bound);
                }
            }
            Motion::Morph {
                scattered,
                assembled,
                drift,
            } => {
                self.morph_progress = advance_morph(self.morph_progress, self.hovered);
                if !self.hovered {
                    for (s, v) in scattered.iter_mut().zip(drift.iter_mut()) {
                        drift_and_reflect(s, v, bound);
                    }
                }
                let t = self.morph_progress;
                for ((p, s), a) in self
                    .field
                    .positions
                    .iter_mut()
                    .zip(scattered.iter())
                    .zip(assembled.iter())
                {
                    let target = s.lerp(*a, t);
                    *p += (target - *p) * MORPH_EASE;
                }
            }
        }
    }
}

/// One frame of morph progress: rise while hovered, fall otherwise, clamped
/// to [0, 1] and snapped onto a bound once within `MORPH_SNAP_EPSILON`.
#[inline]
pub fn advance_morph(progress: f32, hovered: bool) -> f32 {
    let next = if hovered {
        progress + MORPH_RISE_PER_FRAME
    } else {
        progress - MORPH_FALL_PER_FRAME
    };
    if next >= 1.0 - MORPH_SNAP_EPSILON {
        1.0
    } else if next <= MORPH_SNAP_EPSILON {
        0.0
    } else {
        next
    }
}

impl Simulation {
    /// Generate the field for `config` and wrap it in a fresh simulation.
    ///
    /// Text strategies take their assembled targets from `mask`; without a
    /// mask every assembled target is random.
    pub fn from_config(
        config: &BackgroundConfig,
        mask: Option<TextMask>,
        rng: &mut impl rand::Rng,
    ) -> Self {
        let field = match config.strategy {
            Strategy::Uniform => ParticleField::uniform(config.particle_count, rng),
            Strategy::Text { .. } => ParticleField::from_text_mask(
                mask.unwrap_or_default(),
                config.particle_count,
                rng,
            ),
        };
        Self::new(field, config)
    }
}
