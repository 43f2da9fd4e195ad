use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::core::{PointerInput, Simulation};
use crate::events::resize::ViewState;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Simulation,
    pub gpu: Option<render::GpuState>,
    pub input: Rc<RefCell<PointerInput>>,
    pub view: Rc<RefCell<ViewState>>,

    pub last_instant: Instant,
    pub stats_elapsed: f32,
    pub stats_frames: u32,
}

impl FrameContext {
    pub fn new(
        sim: Simulation,
        gpu: Option<render::GpuState>,
        input: Rc<RefCell<PointerInput>>,
        view: Rc<RefCell<ViewState>>,
    ) -> Self {
        Self {
            sim,
            gpu,
            input,
            view,
            last_instant: Instant::now(),
            stats_elapsed: 0.0,
            stats_frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let input = *self.input.borrow();
        self.sim.step(&input);

        let view = self.view.borrow();
        if let Some(g) = &mut self.gpu {
            let (w, h) = view.viewport.physical_size();
            g.resize_if_needed(w, h);
            match g.render(&self.sim, &view.camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
        drop(view);

        self.record_stats(dt_sec);
    }

    fn record_stats(&mut self, dt_sec: f32) {
        self.stats_elapsed += dt_sec;
        self.stats_frames += 1;
        if self.stats_elapsed >= FRAME_STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] #{} {:.1} fps, {} points, {} segments, morph {:.2}",
                self.sim.frames(),
                self.stats_frames as f32 / self.stats_elapsed,
                self.sim.field.len(),
                self.sim.segments.segment_count(),
                self.sim.morph_progress
            );
            self.stats_elapsed = 0.0;
            self.stats_frames = 0;
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running requestAnimationFrame loop. `stop` is the only way to end it.
pub struct FrameLoop {
    tick: TickSlot,
    raf_id: Rc<Cell<Option<i32>>>,
    ctx: Rc<RefCell<FrameContext>>,
}

impl FrameLoop {
    /// Cancel the pending frame, drop the tick closure (breaking its
    /// self-reference) and release the GPU state with all its buffers.
    pub fn stop(self) {
        if let (Some(w), Some(id)) = (web::window(), self.raf_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        let gpu = self.ctx.borrow_mut().gpu.take();
        drop(gpu);
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        raf_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));
    FrameLoop {
        tick,
        raf_id,
        ctx: frame_ctx,
    }
}
