use glam::Vec3;

/// Flat list of line segments, six floats (two endpoints) per segment.
///
/// Capacity is reserved once for the worst case (every pair connected) and
/// the same allocation is reused every frame.
#[derive(Debug)]
pub struct SegmentBuffer {
    floats: Vec<f32>,
    point_capacity: usize,
}

impl SegmentBuffer {
    pub fn with_point_capacity(points: usize) -> Self {
        Self {
            floats: Vec::with_capacity(max_segment_floats(points)),
            point_capacity: points,
        }
    }

    /// Recompute every connection among `positions` from scratch.
    ///
    /// Pairs are visited as `i in (0..n).step_by(stride)`,
    /// `j in (i + stride..n).step_by(stride)`; a pair is emitted when its
    /// Euclidean distance is strictly below `threshold`.
    pub fn rebuild(&mut self, positions: &[Vec3], threshold: f32, stride: usize) {
        self.floats.clear();
        let stride = stride.max(1);
        let n = positions.len().min(self.point_capacity);
        let limit_sq = threshold * threshold;
        for i in (0..n).step_by(stride) {
            let a = positions[i];
            for j in ((i + stride)..n).step_by(stride) {
                let b = positions[j];
                if a.distance_squared(b) < limit_sq {
                    self.floats.extend_from_slice(&[a.x, a.y, a.z, b.x, b.y, b.z]);
                }
            }
        }
    }

    pub fn as_floats(&self) -> &[f32] {
        &self.floats
    }

    pub fn segment_count(&self) -> usize {
        self.floats.len() / 6
    }

    pub fn vertex_count(&self) -> usize {
        self.floats.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty()
    }

    pub fn capacity_floats(&self) -> usize {
        self.floats.capacity()
    }
}

/// Floats needed when all `n(n-1)/2` pairs are connected.
#[inline]
pub fn max_segment_floats(points: usize) -> usize {
    points * points.saturating_sub(1) / 2 * 6
}
