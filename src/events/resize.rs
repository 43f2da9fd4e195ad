use crate::core::{apply_resize, Camera, Viewport};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Projection state touched by the resize handler and read by the frame.
pub struct ViewState {
    pub camera: Camera,
    pub viewport: Viewport,
}

impl ViewState {
    pub fn new(viewport: Viewport) -> Self {
        let camera = Camera {
            aspect: viewport.aspect(),
            ..Camera::default()
        };
        Self { camera, viewport }
    }
}

/// Recompute aspect and backing-store size from the container on every
/// window resize. The surface itself is reconfigured by the next frame.
pub fn wire_resize(
    container: &web::Element,
    canvas: &web::HtmlCanvasElement,
    view: Rc<RefCell<ViewState>>,
) -> Option<Listener> {
    let window = web::window()?;
    let container = container.clone();
    let canvas = canvas.clone();
    Some(Listener::new(&window, "resize", move |_ev: web::Event| {
        let fresh = dom::container_viewport(&container);
        let mut v = view.borrow_mut();
        let ViewState { camera, viewport } = &mut *v;
        viewport.pixel_ratio = fresh.pixel_ratio;
        apply_resize(camera, viewport, fresh.width, fresh.height);
        dom::sync_canvas_backing_size(&canvas, viewport);
        log::debug!(
            "[resize] {}x{} css, aspect {:.3}",
            viewport.width,
            viewport.height,
            camera.aspect
        );
    }))
}
