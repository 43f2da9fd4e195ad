// Page behaviors. Each initializer is a no-op when its mount points are absent.
pub mod cursor;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;

use web_sys as web;

pub fn init_all(document: &web::Document) {
    theme::init(document);
    menu::init(document);
    nav::init(document);
    scroll::init(document);
    if let Err(e) = reveal::init(document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }
    if let Err(e) = cursor::init(document) {
        log::warn!("[cursor] disabled: {:?}", e);
    }
}
