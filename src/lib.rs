#![cfg(target_arch = "wasm32")]
use crate::constants::{ATTR_PARTICLES, ATTR_TEXT, ATTR_VARIANT, BACKGROUND_CONTAINER_ID};
use crate::core::lifecycle::PageHide;
use crate::core::{BackgroundConfig, PointerInput, Simulation, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod raster;
mod render;
mod site;

/// Everything owned by a running particle background.
struct Background {
    frame_loop: frame::FrameLoop,
    // Dropping these detaches pointer and resize handlers
    listeners: Vec<dom::Listener>,
    canvas: web::HtmlCanvasElement,
}

impl Background {
    fn dispose(self) {
        let Background {
            frame_loop,
            listeners,
            canvas,
        } = self;
        frame_loop.stop();
        drop(listeners);
        canvas.remove();
        log::info!("[background] disposed");
    }
}

thread_local! {
    static BACKGROUND: RefCell<Option<Background>> = const { RefCell::new(None) };
}

/// Stop the background animation and release its GPU and DOM resources.
/// Safe to call more than once.
#[wasm_bindgen]
pub fn dispose_background() {
    if let Some(bg) = BACKGROUND.with(|slot| slot.borrow_mut().take()) {
        bg.dispose();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("desarka-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    site::init_all(&document);

    // The background is optional: no mount point, no background.
    let Some(container) = document.get_element_by_id(BACKGROUND_CONTAINER_ID) else {
        log::debug!("[background] no #{} on this page", BACKGROUND_CONTAINER_ID);
        return Ok(());
    };
    let background = build_background(&document, container).await?;
    BACKGROUND.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(background) {
            previous.dispose();
        }
    });

    dom::add_listener(&window, "pagehide", |ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|ev| ev.persisted());
        let hide = PageHide::from_persisted(persisted);
        log::debug!("[background] pagehide {:?}", hide);
        if hide.disposes() {
            dispose_background();
        }
    });
    Ok(())
}

fn read_config(container: &web::Element) -> BackgroundConfig {
    let (config, warnings) = BackgroundConfig::from_attrs(
        container.get_attribute(ATTR_VARIANT).as_deref(),
        container.get_attribute(ATTR_TEXT).as_deref(),
        container.get_attribute(ATTR_PARTICLES).as_deref(),
    );
    for w in warnings {
        log::warn!("[config] {}", w);
    }
    config
}

async fn build_background(
    document: &web::Document,
    container: web::Element,
) -> anyhow::Result<Background> {
    let config = read_config(&container);
    log::info!(
        "[background] variant={} particles={} threshold={}",
        config.strategy.name(),
        config.particle_count,
        config.connection_distance
    );

    let mask = match &config.strategy {
        Strategy::Text { text } => match raster::text_mask(document, text) {
            Ok(mask) => Some(mask),
            Err(e) => {
                log::warn!("[text] rasterization failed, using random targets: {:?}", e);
                None
            }
        },
        Strategy::Uniform => None,
    };
    let mut rng = StdRng::from_entropy();
    let sim = Simulation::from_config(&config, mask, &mut rng);
    if sim.field.is_empty() {
        anyhow::bail!("particle field is empty");
    }
    log::debug!(
        "[background] {} points, segment buffer reserves {} floats",
        sim.field.len(),
        sim.segments.capacity_floats()
    );

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.set_attribute("style", "display:block;width:100%;height:100%");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let viewport = dom::container_viewport(&container);
    dom::sync_canvas_backing_size(&canvas, &viewport);
    let view = Rc::new(RefCell::new(events::resize::ViewState::new(viewport)));

    let gpu = match render::GpuState::new(&canvas, sim.field.len()).await {
        Ok(g) => g,
        Err(e) => {
            canvas.remove();
            return Err(e.context("WebGPU init"));
        }
    };

    let input = Rc::new(RefCell::new(PointerInput::default()));
    let mut listeners = events::wire_input_handlers(events::InputWiring {
        container: container.clone(),
        input: input.clone(),
    });
    listeners.extend(events::wire_resize(&container, &canvas, view.clone()));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        sim,
        Some(gpu),
        input,
        view,
    )));
    let frame_loop = frame::start_loop(frame_ctx);
    log::info!("[background] running");

    Ok(Background {
        frame_loop,
        listeners,
        canvas,
    })
}
