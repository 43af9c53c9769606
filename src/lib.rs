#![cfg(target_arch = "wasm32")]
//! Scroll-reactive space backdrop with a custom cursor overlay.
//!
//! Mounts onto a full-viewport `#backdrop-canvas` element: a WebGPU scene
//! (star shell, planets, particle cloud, shooting stars) whose camera rides
//! the page scroll, plus a DOM cursor overlay that follows the pointer on a
//! damped spring. Everything is decorative: the layer intercepts no input,
//! persists nothing, and tears down cleanly via [`unmount`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod scene;
mod spring;

use constants::SCENE_SEED;
use events::{EventBinding, PointerWiring};
use frame::{FrameContext, RafLoop};
use input::{PointerState, TrailBuffer};
use instant::Instant;
use scene::{SceneAssets, SceneState};

/// The mounted backdrop. Field order is teardown order: listeners detach,
/// then the loop halts, then the context (overlay DOM, GPU state) drops.
struct App {
    _bindings: Vec<EventBinding>,
    _raf: RafLoop,
    _ctx: Rc<RefCell<FrameContext>>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> Option<EventBinding> {
    dom::sync_canvas_backing_size(canvas);
    let window = web::window()?;
    let canvas = canvas.clone();
    EventBinding::new(window.as_ref(), "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas);
    })
}

async fn init() -> anyhow::Result<()> {
    if APP.with(|slot| slot.borrow().is_some()) {
        log::info!("backdrop already mounted");
        return Ok(());
    }
    let Some(window) = web::window() else {
        log::warn!("no window; backdrop inactive");
        return Ok(());
    };
    let Some(document) = window.document() else {
        log::warn!("no document; backdrop inactive");
        return Ok(());
    };

    let canvas_el = document
        .get_element_by_id("backdrop-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #backdrop-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut bindings = Vec::new();
    bindings.extend(wire_canvas_resize(&canvas));

    let scroll = Rc::new(Cell::new(0.0_f32));
    bindings.extend(events::wire_scroll_tracking(&scroll));

    let assets = Rc::new(SceneAssets::generate(SCENE_SEED));
    let gpu = frame::init_gpu(&canvas, &assets).await;

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let trail = Rc::new(RefCell::new(TrailBuffer::default()));

    let cursor = if dom::touch_only() {
        log::info!("touch-only device; cursor overlay disabled");
        None
    } else {
        let wiring = PointerWiring {
            pointer: pointer.clone(),
            trail: trail.clone(),
        };
        bindings.extend(events::wire_pointer_tracking(&wiring));
        cursor::CursorFx::mount(&document)
    };

    let ctx = Rc::new(RefCell::new(FrameContext {
        scene: SceneState::initial(),
        assets,
        gpu,
        canvas,
        pointer,
        trail,
        scroll,
        cursor,
        last_instant: Instant::now(),
    }));
    let raf = frame::start_loop(&ctx);

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            _bindings: bindings,
            _raf: raf,
            _ctx: ctx,
        });
    });
    log::info!("backdrop mounted");
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Mount the backdrop onto the current document. Safe to call again after
/// [`unmount`]; a second call while mounted is a no-op.
#[wasm_bindgen]
pub fn mount() {
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("mount error: {:?}", e);
        }
    });
}

/// Tear the backdrop down: detach every listener, stop the frame loop,
/// remove the overlay DOM, and restore the system cursor. Events dispatched
/// afterwards mutate nothing.
#[wasm_bindgen]
pub fn unmount() {
    if APP.with(|slot| slot.borrow_mut().take()).is_some() {
        log::info!("backdrop unmounted");
    }
}
