use glam::Vec2;

/// Latest pointer state over the mount element. Last event wins.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Normalized pointer position, each axis in [-1, 1].
    pub x: f32,
    pub y: f32,
    pub hovered: bool,
}

impl PointerInput {
    pub fn set_position(&mut self, normalized: Vec2) {
        self.x = normalized.x;
        self.y = normalized.y;
    }
}

/// Map a client-space pointer position to [-1, 1] on both axes relative to
/// an element rect given as `(left, top, width, height)`.
///
/// A zero-sized rect maps to the center.
#[inline]
pub fn normalize_pointer(client_x: f32, client_y: f32, rect: [f32; 4]) -> Vec2 {
    let [left, top, width, height] = rect;
    let nx = if width > 0.0 {
        ((client_x - left) / width - 0.5) * 2.0
    } else {
        0.0
    };
    let ny = if height > 0.0 {
        ((client_y - top) / height - 0.5) * 2.0
    } else {
        0.0
    };
    Vec2::new(nx, ny)
}

/// Rotation of the whole particle system (points and lines share it).
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    /// Ease toward the pointer-derived target, then apply the vertical-axis
    /// auto-rotation increment.
    #[inline]
    pub fn ease_toward(&mut self, input: &PointerInput, gain: f32, ease: f32, auto_rotate: f32) {
        let target_x = input.y * gain;
        let target_y = input.x * gain;
        self.x += (target_x - self.x) * ease;
        self.y += (target_y - self.y) * ease;
        self.y += auto_rotate;
    }
}
