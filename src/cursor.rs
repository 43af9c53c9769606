//! Overlay cursor renderer.
//!
//! A fixed, input-inert layer of DOM elements: an outer ring and soft glow
//! that trail the pointer on a critically damped spring, an inner dot pinned
//! to the raw coordinates, and a pooled set of fading trail dots. The layer
//! never intercepts pointer events, so the page underneath behaves as if it
//! were not there.

use crate::constants::*;
use crate::dom::{self, CursorStyleGuard};
use crate::input::{PointerState, TrailBuffer};
use crate::spring::Spring;
use web_sys as web;

const PRIMARY: &str = "#a855f7";
const SECONDARY: &str = "#00d4ff";

pub struct CursorFx {
    container: web::HtmlElement,
    ring: web::HtmlElement,
    dot: web::HtmlElement,
    glow: web::HtmlElement,
    trail_nodes: Vec<web::HtmlElement>,
    spring_x: Spring,
    spring_y: Spring,
    _style_guard: CursorStyleGuard,
}

impl CursorFx {
    /// Build the overlay DOM and hide the system cursor. Returns `None` if
    /// the document has no body or element creation fails.
    pub fn mount(document: &web::Document) -> Option<Self> {
        let body = document.body()?;
        let style_guard = CursorStyleGuard::install(document)?;
        let container = dom::append_styled_div(
            document,
            &body,
            "position:fixed;inset:0;pointer-events:none;z-index:9990;",
        )?;

        // stacking inside the container: glow under ring under dot
        let glow = dom::append_styled_div(document, &container, "display:none")?;
        let mut trail_nodes = Vec::with_capacity(TRAIL_CAP);
        for _ in 0..TRAIL_CAP {
            trail_nodes.push(dom::append_styled_div(document, &container, "display:none")?);
        }
        let ring = dom::append_styled_div(document, &container, "display:none")?;
        let dot = dom::append_styled_div(document, &container, "display:none")?;

        // springs start offscreen, like the pointer itself
        Some(Self {
            container,
            ring,
            dot,
            glow,
            trail_nodes,
            spring_x: Spring::new(CURSOR_SPRING_STIFFNESS, CURSOR_SPRING_DAMPING_RATIO, -100.0),
            spring_y: Spring::new(CURSOR_SPRING_STIFFNESS, CURSOR_SPRING_DAMPING_RATIO, -100.0),
            _style_guard: style_guard,
        })
    }

    /// Reposition and restyle every element for this frame.
    pub fn update(&mut self, pointer: &PointerState, trail: &TrailBuffer, now: f64, dt: f32) {
        let sx = self.spring_x.step(pointer.x, dt);
        let sy = self.spring_y.step(pointer.y, dt);
        let opacity = if pointer.visible { 1.0 } else { 0.0 };
        let hovering = pointer.hovering;

        let ring_size = if hovering { RING_HOVER_PX } else { RING_PX };
        let ring_color = if hovering { SECONDARY } else { PRIMARY };
        _ = self.ring.set_attribute(
            "style",
            &format!(
                "position:fixed;left:{sx:.1}px;top:{sy:.1}px;\
                 transform:translate(-50%,-50%);\
                 width:{ring_size:.0}px;height:{ring_size:.0}px;\
                 border:2px solid {ring_color};border-radius:50%;\
                 opacity:{opacity};pointer-events:none;z-index:9999;\
                 transition:width .15s ease-out,height .15s ease-out,\
                 border-color .15s ease-out;"
            ),
        );

        let dot_size = if hovering { DOT_HOVER_PX } else { DOT_PX };
        let dot_shadow = if hovering {
            "0 0 20px 4px rgba(0,212,255,0.6)"
        } else {
            "0 0 10px 2px rgba(168,85,247,0.4)"
        };
        _ = self.dot.set_attribute(
            "style",
            &format!(
                "position:fixed;left:{:.1}px;top:{:.1}px;\
                 transform:translate(-50%,-50%);\
                 width:{dot_size:.0}px;height:{dot_size:.0}px;\
                 background:{ring_color};border-radius:50%;\
                 box-shadow:{dot_shadow};\
                 opacity:{opacity};pointer-events:none;z-index:9999;",
                pointer.x, pointer.y
            ),
        );

        let glow_size = if hovering {
            GLOW_PX * GLOW_HOVER_SCALE
        } else {
            GLOW_PX
        };
        _ = self.glow.set_attribute(
            "style",
            &format!(
                "position:fixed;left:{sx:.1}px;top:{sy:.1}px;\
                 transform:translate(-50%,-50%);\
                 width:{glow_size:.0}px;height:{glow_size:.0}px;\
                 border-radius:50%;\
                 background:radial-gradient(circle,rgba(168,85,247,0.15) 0%,transparent 70%);\
                 opacity:{opacity};pointer-events:none;z-index:9997;"
            ),
        );

        // pooled trail nodes; entries past the live set stay hidden
        let mut dots = trail.iter();
        for (index, node) in self.trail_nodes.iter().enumerate() {
            match dots.next() {
                Some(dot) => {
                    let life = dot.life(now);
                    let size =
                        (TRAIL_BASE_PX + index as f32 * TRAIL_STEP_PX) * (0.5 + 0.5 * life);
                    let dot_opacity = 0.8 * life;
                    _ = node.set_attribute(
                        "style",
                        &format!(
                            "position:fixed;left:{:.1}px;top:{:.1}px;\
                             transform:translate(-50%,-50%);\
                             width:{size:.1}px;height:{size:.1}px;\
                             border-radius:50%;\
                             background:radial-gradient(circle,rgba(168,85,247,{dot_opacity:.2}) 0%,transparent 70%);\
                             pointer-events:none;z-index:9998;",
                            dot.x, dot.y
                        ),
                    );
                }
                None => {
                    _ = node.set_attribute("style", "display:none");
                }
            }
        }
    }
}

impl Drop for CursorFx {
    fn drop(&mut self) {
        self.container.remove();
    }
}
