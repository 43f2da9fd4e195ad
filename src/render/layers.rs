use super::helpers::{make_network_pipeline, uniform_bind_group, OwnedBuffer};
use crate::core::connections::{max_segment_floats, SegmentBuffer};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct NetworkUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) viewport: [f32; 2],
    pub(crate) point_size: f32,
    pub(crate) _pad: f32,
}

/// Color, opacity and sprite size for one layer.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub size: f32,
}

/// Draw-time transform shared by both layers.
#[derive(Clone, Copy)]
pub(crate) struct FrameTransform {
    pub(crate) view_proj: Mat4,
    pub(crate) model: Mat4,
    pub(crate) viewport: [f32; 2],
}

struct LayerUniforms {
    material: Material,
    buffer: OwnedBuffer,
    bind_group: wgpu::BindGroup,
}

impl LayerUniforms {
    fn new(
        device: &wgpu::Device,
        label: &str,
        layout: &wgpu::BindGroupLayout,
        material: Material,
    ) -> Self {
        let buffer = OwnedBuffer::new(
            device,
            label,
            std::mem::size_of::<NetworkUniforms>() as u64,
            wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        );
        let bind_group = uniform_bind_group(device, label, layout, &buffer);
        Self {
            material,
            buffer,
            bind_group,
        }
    }

    fn write(&self, queue: &wgpu::Queue, t: &FrameTransform) {
        let m = self.material;
        let u = NetworkUniforms {
            view_proj: t.view_proj.to_cols_array_2d(),
            model: t.model.to_cols_array_2d(),
            color: [m.color[0], m.color[1], m.color[2], m.opacity],
            viewport: t.viewport,
            point_size: m.size,
            _pad: 0.0,
        };
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&u));
    }
}

/// Point cloud drawn as one instanced quad per particle.
pub(crate) struct PointsLayer {
    pipeline: wgpu::RenderPipeline,
    uniforms: LayerUniforms,
    positions: OwnedBuffer,
    count: u32,
}

impl PointsLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        bgl: &wgpu::BindGroupLayout,
        shader: &wgpu::ShaderModule,
        format: wgpu::TextureFormat,
        material: Material,
        capacity: usize,
    ) -> Self {
        let pipeline = make_network_pipeline(
            device,
            "points_pipeline",
            layout,
            shader,
            "vs_points",
            wgpu::VertexStepMode::Instance,
            wgpu::PrimitiveTopology::TriangleList,
            format,
        );
        let positions = OwnedBuffer::new(
            device,
            "point_positions",
            (capacity * std::mem::size_of::<Vec3>()) as u64,
            wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        );
        Self {
            pipeline,
            uniforms: LayerUniforms::new(device, "points_uniforms", bgl, material),
            positions,
            count: 0,
        }
    }

    /// Mark the position stream dirty: re-upload the whole point buffer.
    pub(crate) fn upload(&mut self, queue: &wgpu::Queue, positions: &[Vec3], t: &FrameTransform) {
        self.uniforms.write(queue, t);
        self.count = positions.len() as u32;
        if !positions.is_empty() {
            queue.write_buffer(&self.positions, 0, bytemuck::cast_slice(positions));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniforms.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.positions.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}

/// Connection lines, rewritten in place every frame.
///
/// The vertex buffer is sized once for the worst case (every pair connected)
/// so a frame never allocates; only the used prefix is drawn.
pub(crate) struct LinesLayer {
    pipeline: wgpu::RenderPipeline,
    uniforms: LayerUniforms,
    segments: OwnedBuffer,
    capacity_floats: usize,
    vertex_count: u32,
}

impl LinesLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        bgl: &wgpu::BindGroupLayout,
        shader: &wgpu::ShaderModule,
        format: wgpu::TextureFormat,
        material: Material,
        point_capacity: usize,
    ) -> Self {
        let pipeline = make_network_pipeline(
            device,
            "lines_pipeline",
            layout,
            shader,
            "vs_lines",
            wgpu::VertexStepMode::Vertex,
            wgpu::PrimitiveTopology::LineList,
            format,
        );
        let capacity_floats = max_segment_floats(point_capacity);
        let segments = OwnedBuffer::new(
            device,
            "line_segments",
            (capacity_floats * std::mem::size_of::<f32>()) as u64,
            wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        );
        Self {
            pipeline,
            uniforms: LayerUniforms::new(device, "lines_uniforms", bgl, material),
            segments,
            capacity_floats,
            vertex_count: 0,
        }
    }

    pub(crate) fn upload(
        &mut self,
        queue: &wgpu::Queue,
        segments: &SegmentBuffer,
        t: &FrameTransform,
    ) {
        self.uniforms.write(queue, t);
        if segments.is_empty() {
            self.vertex_count = 0;
            return;
        }
        let used = segments.as_floats().len().min(self.capacity_floats);
        self.vertex_count = (used / 3) as u32;
        debug_assert_eq!(self.vertex_count as usize, segments.vertex_count());
        let floats = &segments.as_floats()[..used];
        queue.write_buffer(&self.segments, 0, bytemuck::cast_slice(floats));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.vertex_count == 0 {
            return;
        }
        let bytes = self.vertex_count as u64 * 3 * std::mem::size_of::<f32>() as u64;
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.uniforms.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.segments.slice(..bytes));
        rpass.draw(0..self.vertex_count, 0..1);
    }
}
