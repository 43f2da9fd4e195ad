use crate::constants::NAV_LINKS;
use crate::core::nav::is_active_link;
use crate::dom;
use web_sys as web;

/// Mark nav links matching the current location as `active`.
pub fn init(document: &web::Document) {
    let Some(path) = web::window().and_then(|w| w.location().pathname().ok()) else {
        return;
    };
    for link in dom::query_all(document, NAV_LINKS) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if is_active_link(&path, &href) {
            _ = link.class_list().add_1("active");
        }
    }
}
