use crate::constants::{MOBILE_MENU, MOBILE_MENU_BTN, MOBILE_MENU_CLOSE};
use crate::dom;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Open/close the mobile menu; a click on the backdrop itself closes it.
pub fn init(document: &web::Document) {
    let Some(menu) = dom::query_one(document, MOBILE_MENU) else {
        return;
    };

    if let Some(btn) = dom::query_one(document, MOBILE_MENU_BTN) {
        let menu = menu.clone();
        dom::add_listener(&btn, "click", move |_ev| {
            _ = menu.class_list().add_1("active");
        });
    }

    if let Some(close) = dom::query_one(document, MOBILE_MENU_CLOSE) {
        let menu = menu.clone();
        dom::add_listener(&close, "click", move |_ev| {
            _ = menu.class_list().remove_1("active");
        });
    }

    let backdrop = menu.clone();
    dom::add_listener(&menu, "click", move |ev: web::Event| {
        let on_backdrop = ev
            .target()
            .map(|t| JsValue::from(t) == JsValue::from(backdrop.clone()))
            .unwrap_or(false);
        if on_backdrop {
            _ = backdrop.class_list().remove_1("active");
        }
    });
}
