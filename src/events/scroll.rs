use super::EventBinding;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Track the vertical scroll offset with a passive listener. The cell is
/// seeded with the current offset so a page restored mid-scroll renders
/// correctly on its first frame. No-ops when there is no window.
pub fn wire_scroll_tracking(scroll: &Rc<Cell<f32>>) -> Option<EventBinding> {
    let window = web::window()?;
    scroll.set(window.scroll_y().unwrap_or(0.0) as f32);

    let scroll = scroll.clone();
    let reader = window.clone();
    EventBinding::passive(window.as_ref(), "scroll", move |_| {
        if let Ok(y) = reader.scroll_y() {
            scroll.set(y as f32);
        }
    })
}
