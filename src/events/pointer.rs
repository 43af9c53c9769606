use super::EventBinding;
use crate::input::{PointerState, TrailBuffer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared state the pointer listeners write into.
#[derive(Clone)]
pub struct PointerWiring {
    pub pointer: Rc<RefCell<PointerState>>,
    pub trail: Rc<RefCell<TrailBuffer>>,
}

/// Attach pointer move/enter/leave tracking plus hover classification.
/// Returns the live bindings; dropping them detaches everything. No-ops to
/// an empty set when the global window/document is unavailable.
pub fn wire_pointer_tracking(wiring: &PointerWiring) -> Vec<EventBinding> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };

    let mut bindings = Vec::with_capacity(5);

    {
        let w = wiring.clone();
        bindings.extend(EventBinding::new(window.as_ref(), "pointermove", move |ev| {
            let ev: web::PointerEvent = ev.unchecked_into();
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            w.pointer.borrow_mut().record_move(x, y);
            let now = js_sys::Date::now() / 1000.0;
            w.trail.borrow_mut().push(x, y, now);
        }));
    }
    {
        let pointer = wiring.pointer.clone();
        bindings.extend(EventBinding::new(window.as_ref(), "pointerenter", move |_| {
            pointer.borrow_mut().record_enter();
        }));
    }
    {
        let pointer = wiring.pointer.clone();
        bindings.extend(EventBinding::new(window.as_ref(), "pointerleave", move |_| {
            pointer.borrow_mut().record_leave();
        }));
    }
    {
        let pointer = wiring.pointer.clone();
        bindings.extend(EventBinding::new(document.as_ref(), "pointerover", move |ev| {
            if is_interactive(ev.target()) {
                pointer.borrow_mut().set_hovering(true);
            }
        }));
    }
    {
        let pointer = wiring.pointer.clone();
        bindings.extend(EventBinding::new(document.as_ref(), "pointerout", move |_| {
            pointer.borrow_mut().set_hovering(false);
        }));
    }

    bindings
}

/// Interactive iff the target sits inside a link, button, or an element
/// carrying the explicit `data-interactive` marker. A single `closest`
/// lookup keeps the classifier independent of markup depth.
fn is_interactive(target: Option<web::EventTarget>) -> bool {
    let Some(element) = target.and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return false;
    };
    matches!(
        element.closest("a, button, [data-interactive]"),
        Ok(Some(_))
    )
}
