use crate::core::{normalize_pointer, PointerInput};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::Element,
    pub input: Rc<RefCell<PointerInput>>,
}

/// Wire move/enter/leave on the mount element. The returned listeners
/// detach when dropped.
pub fn wire_input_handlers(w: InputWiring) -> Vec<Listener> {
    vec![
        wire_pointermove(&w),
        wire_hover(&w, "pointerenter", true),
        wire_hover(&w, "pointerleave", false),
    ]
}

fn wire_pointermove(w: &InputWiring) -> Listener {
    let w2 = w.clone();
    Listener::new(&w.container, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = dom::element_rect(&w2.container);
        let pos = normalize_pointer(ev.client_x() as f32, ev.client_y() as f32, rect);
        w2.input.borrow_mut().set_position(pos);
    })
}

fn wire_hover(w: &InputWiring, kind: &'static str, hovered: bool) -> Listener {
    let input = w.input.clone();
    Listener::new(&w.container, kind, move |_ev: web::Event| {
        input.borrow_mut().hovered = hovered;
        log::debug!("[pointer] hovered={}", hovered);
    })
}
