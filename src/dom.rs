use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the canvas backing store at CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// True when the device has no hover-capable fine pointer (touch-only), in
/// which case the cursor overlay must not mount at all.
pub fn touch_only() -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    match window.match_media("(hover: none), (pointer: coarse)") {
        Ok(Some(query)) => query.matches(),
        _ => false,
    }
}

/// Create a `<div>` with the given style attribute, appended to `parent`.
pub fn append_styled_div(
    document: &web::Document,
    parent: &web::Element,
    style: &str,
) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    _ = el.set_attribute("style", style);
    parent.append_child(&el).ok()?;
    el.dyn_into::<web::HtmlElement>().ok()
}

/// Scoped override that hides the system pointer while the custom cursor is
/// mounted. Dropping the guard restores the page's own cursor styling.
pub struct CursorStyleGuard {
    node: web::Element,
}

impl CursorStyleGuard {
    pub fn install(document: &web::Document) -> Option<Self> {
        let node = document.create_element("style").ok()?;
        node.set_text_content(Some("*{cursor:none !important}"));
        document.head()?.append_child(&node).ok()?;
        Some(Self { node })
    }
}

impl Drop for CursorStyleGuard {
    fn drop(&mut self) {
        self.node.remove();
    }
}
