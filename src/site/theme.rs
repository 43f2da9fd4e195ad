use crate::constants::{PULL_CORD_ID, PULL_CORD_RELEASE_MS, THEME_SWITCH_DELAY_MS, THEME_TOGGLE_ID};
use crate::core::theme::{Theme, DARK_THEME_CLASS, THEME_STORAGE_KEY};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

fn stored_theme() -> Theme {
    let value = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(value.as_deref())
}

fn save_theme(theme: Theme) {
    if let Some(s) = storage() {
        if let Err(e) = s.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("[theme] could not save preference: {:?}", e);
        }
    }
}

/// Run `f` once after `ms` milliseconds.
fn after(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

fn set_cord_offset(cord: &web::Element, css: &str) {
    if let Some(el) = cord.dyn_ref::<web::HtmlElement>() {
        _ = el.style().set_property("transform", css);
    }
}

/// Apply the saved theme and wire the pull-cord toggle.
pub fn init(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    if stored_theme().is_dark() {
        _ = body.class_list().add_1(DARK_THEME_CLASS);
    }

    let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return;
    };
    let cord = document.get_element_by_id(PULL_CORD_ID);
    let pulling = Rc::new(Cell::new(false));

    {
        let cord = cord.clone();
        let body = body.clone();
        dom::add_listener(&toggle, "click", move |_ev| {
            if pulling.replace(true) {
                return;
            }
            if let Some(cord) = &cord {
                _ = cord.class_list().add_1("pulled");
                let cord = cord.clone();
                after(PULL_CORD_RELEASE_MS, move || {
                    _ = cord.class_list().remove_1("pulled");
                });
            }
            let body = body.clone();
            let pulling = pulling.clone();
            after(THEME_SWITCH_DELAY_MS, move || {
                let classes = body.class_list();
                let theme = Theme::from_dark_flag(classes.contains(DARK_THEME_CLASS)).toggled();
                _ = classes.toggle_with_force(DARK_THEME_CLASS, theme.is_dark());
                save_theme(theme);
                log::debug!("[theme] switched to {}", theme.as_str());
                pulling.set(false);
            });
        });
    }

    if let Some(cord) = cord {
        let cord_enter = cord.clone();
        dom::add_listener(&toggle, "mouseenter", move |_ev| {
            set_cord_offset(&cord_enter, "translateY(3px)");
        });
        dom::add_listener(&toggle, "mouseleave", move |_ev| {
            if !cord.class_list().contains("pulled") {
                set_cord_offset(&cord, "translateY(0)");
            }
        });
    }
}
