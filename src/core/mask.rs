use glam::Vec2;

/// Scene-space target coordinates sampled from a rasterized string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextMask {
    pub points: Vec<Vec2>,
}

impl TextMask {
    /// Scan an RGBA8 raster every `stride` pixels on both axes and keep the
    /// pixels whose alpha is strictly above `alpha_threshold`.
    ///
    /// Returned coordinates are centered on the raster middle with y growing
    /// upward (raster rows grow downward). A short or empty buffer yields an
    /// empty mask.
    pub fn sample_rgba(
        rgba: &[u8],
        width: usize,
        height: usize,
        stride: usize,
        alpha_threshold: u8,
    ) -> Self {
        let stride = stride.max(1);
        if rgba.len() < width * height * 4 {
            return Self::default();
        }
        let cx = width as f32 / 2.0;
        let cy = height as f32 / 2.0;
        let mut points = Vec::new();
        for y in (0..height).step_by(stride) {
            for x in (0..width).step_by(stride) {
                let alpha = rgba[(y * width + x) * 4 + 3];
                if alpha > alpha_threshold {
                    points.push(Vec2::new(x as f32 - cx, cy - y as f32));
                }
            }
        }
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Keep at most `max` points, dropping evenly across the mask so the
    /// glyph outline stays intact.
    pub fn thin_to(&mut self, max: usize) {
        if self.points.len() <= max {
            return;
        }
        let n = self.points.len();
        self.points = (0..max).map(|k| self.points[k * n / max]).collect();
    }
}
