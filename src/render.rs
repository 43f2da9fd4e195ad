use crate::constants::{
    BACKGROUND_COLOR, LINE_COLOR, LINE_OPACITY, POINT_COLOR, POINT_OPACITY, POINT_SIZE,
};
use crate::core::{model_matrix, Camera, Simulation};
use web_sys as web;

mod helpers;
mod layers;

use layers::{FrameTransform, LinesLayer, Material, PointsLayer};

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointsLayer,
    lines: LinesLayer,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// Acquire an adapter and device for `canvas` and build both layers with
    /// room for `point_capacity` particles.
    pub async fn new(canvas: &web::HtmlCanvasElement, point_capacity: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("network_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::NETWORK_WGSL.into()),
        });
        let bgl = helpers::uniform_bind_group_layout(&device);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("network_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let points = PointsLayer::new(
            &device,
            &layout,
            &bgl,
            &shader,
            format,
            Material {
                color: POINT_COLOR,
                opacity: POINT_OPACITY,
                size: POINT_SIZE,
            },
            point_capacity,
        );
        let lines = LinesLayer::new(
            &device,
            &layout,
            &bgl,
            &shader,
            format,
            Material {
                color: LINE_COLOR,
                opacity: LINE_OPACITY,
                size: 1.0,
            },
            point_capacity,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            lines,
            width,
            height,
            clear_color: wgpu::Color {
                r: BACKGROUND_COLOR[0],
                g: BACKGROUND_COLOR[1],
                b: BACKGROUND_COLOR[2],
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
            log::debug!("[gpu] resized surface to {}x{}", width, height);
        }
    }

    /// Reapply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload this frame's points and segments, then draw lines under points.
    pub fn render(&mut self, sim: &Simulation, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let transform = FrameTransform {
            view_proj: camera.view_proj(),
            model: model_matrix(sim.rotation.x, sim.rotation.y),
            viewport: [self.width as f32, self.height as f32],
        };
        self.points
            .upload(&self.queue, &sim.field.positions, &transform);
        self.lines.upload(&self.queue, &sim.segments, &transform);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("network_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.lines.draw(&mut rpass);
            self.points.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
