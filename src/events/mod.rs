//! Listener wiring. Every subscription is an [`EventBinding`] that removes
//! itself from its target on Drop, so tearing down the owning view
//! deregisters everything and later events mutate nothing.

mod pointer;
mod scroll;

pub use pointer::{wire_pointer_tracking, PointerWiring};
pub use scroll::wire_scroll_tracking;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A live event listener. Holding the binding keeps the listener attached;
/// dropping it detaches both the listener and the backing closure.
pub struct EventBinding {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventBinding {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Non-blocking listener: the handler may not call `preventDefault`.
    pub fn passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{PointerState, TrailBuffer};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn binding_detaches_on_drop() {
        let document = crate::dom::window_document().unwrap();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let binding = EventBinding::new(document.as_ref(), "pointermove", move |_| {
            counter.set(counter.get() + 1);
        })
        .unwrap();

        let ev = web::Event::new("pointermove").unwrap();
        _ = document.dispatch_event(&ev);
        assert_eq!(hits.get(), 1);

        drop(binding);
        let ev = web::Event::new("pointermove").unwrap();
        _ = document.dispatch_event(&ev);
        assert_eq!(hits.get(), 1, "listener fired after teardown");
    }

    #[wasm_bindgen_test]
    fn pointer_tracking_stops_after_teardown() {
        let wiring = PointerWiring {
            pointer: Rc::new(RefCell::new(PointerState::default())),
            trail: Rc::new(RefCell::new(TrailBuffer::default())),
        };
        let bindings = wire_pointer_tracking(&wiring);
        assert!(!bindings.is_empty());

        let window = web::window().unwrap();
        let ev = web::PointerEvent::new("pointermove").unwrap();
        _ = window.dispatch_event(&ev);
        assert!(wiring.pointer.borrow().visible);
        assert_eq!(wiring.trail.borrow().len(), 1);

        wiring.pointer.borrow_mut().record_leave();
        drop(bindings);

        let ev = web::PointerEvent::new("pointermove").unwrap();
        _ = window.dispatch_event(&ev);
        assert!(!wiring.pointer.borrow().visible, "state mutated after teardown");
        assert_eq!(wiring.trail.borrow().len(), 1);
    }
}
