use crate::core::{
    TextMask, TEXT_ALPHA_THRESHOLD, TEXT_FONT_PX, TEXT_RASTER_HEIGHT, TEXT_RASTER_WIDTH,
    TEXT_SAMPLE_STRIDE,
};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draw `text` centered on a detached canvas and read back its RGBA pixels.
pub fn rasterize_text(document: &web::Document, text: &str) -> anyhow::Result<Vec<u8>> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(TEXT_RASTER_WIDTH);
    canvas.set_height(TEXT_RASTER_HEIGHT);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("not a 2d context"))?;

    ctx.set_font(&format!("bold {}px sans-serif", TEXT_FONT_PX));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str("#ffffff");
    let (w, h) = (TEXT_RASTER_WIDTH as f64, TEXT_RASTER_HEIGHT as f64);
    ctx.fill_text(text, w / 2.0, h / 2.0)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let image = ctx
        .get_image_data(0.0, 0.0, w, h)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(image.data().0)
}

/// Rasterize and sample `text` into assembled-state targets.
pub fn text_mask(document: &web::Document, text: &str) -> anyhow::Result<TextMask> {
    let rgba = rasterize_text(document, text)?;
    let mask = TextMask::sample_rgba(
        &rgba,
        TEXT_RASTER_WIDTH as usize,
        TEXT_RASTER_HEIGHT as usize,
        TEXT_SAMPLE_STRIDE,
        TEXT_ALPHA_THRESHOLD,
    );
    if mask.is_empty() {
        log::warn!("[text] {:?} produced no opaque pixels", text);
    } else {
        log::info!("[text] {:?} sampled {} mask points", text, mask.len());
    }
    Ok(mask)
}
