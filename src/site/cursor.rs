use crate::constants::INTERACTIVE_TARGETS;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replace the system cursor with a `div.custom-cursor` that tracks the mouse.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let cursor = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = cursor.class_list().add_1("custom-cursor");
    body.append_child(&cursor)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = body.class_list().add_1("custom-cursor-active");

    {
        let cursor = cursor.clone();
        dom::add_listener(document, "mousemove", move |ev: web::Event| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let style = cursor.style();
                _ = style.set_property("left", &format!("{}px", ev.client_x()));
                _ = style.set_property("top", &format!("{}px", ev.client_y()));
            }
        });
    }

    for el in dom::query_all(document, INTERACTIVE_TARGETS) {
        let on = cursor.clone();
        dom::add_listener(&el, "mouseenter", move |_ev| {
            _ = on.class_list().add_1("hover");
        });
        let off = cursor.clone();
        dom::add_listener(&el, "mouseleave", move |_ev| {
            _ = off.class_list().remove_1("hover");
        });
    }

    let hide = cursor.clone();
    dom::add_listener(document, "mouseleave", move |_ev| {
        _ = hide.style().set_property("opacity", "0");
    });
    dom::add_listener(document, "mouseenter", move |_ev| {
        _ = cursor.style().set_property("opacity", "1");
    });
    Ok(())
}
