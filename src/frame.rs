use crate::cursor::CursorFx;
use crate::input::{PointerState, TrailBuffer};
use crate::render;
use crate::scene::{FrameInputs, SceneAssets, SceneState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// frames after a background-tab stall resume without a position jump
const MAX_FRAME_DT_SEC: f32 = 0.1;

/// Everything one animation tick reads and writes.
pub struct FrameContext {
    pub scene: SceneState,
    pub assets: Rc<SceneAssets>,
    pub gpu: Option<render::GpuState<'static>>,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub trail: Rc<RefCell<TrailBuffer>>,
    pub scroll: Rc<Cell<f32>>,
    pub cursor: Option<CursorFx>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        // inputs reflect the most recent events processed before this frame
        let inputs = FrameInputs {
            scroll_y: self.scroll.get(),
        };
        self.scene = self.scene.advanced(&inputs, dt);

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = gpu.render(&self.scene, &self.assets) {
                log::error!("render error: {:?}", e);
            }
        }

        if let Some(cursor) = &mut self.cursor {
            let wall_now = js_sys::Date::now() / 1000.0;
            self.trail.borrow_mut().retire_expired(wall_now);
            cursor.update(&self.pointer.borrow(), &self.trail.borrow(), wall_now, dt);
        }
    }
}

/// Handle for the running animation loop. Dropping it stops rescheduling;
/// combined with dropping the context `Rc`, no frame runs after teardown.
pub struct RafLoop {
    alive: Rc<Cell<bool>>,
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    assets: &SceneAssets,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, assets).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("WebGPU unavailable, backdrop will not render: {:?}", e);
            None
        }
    }
}

/// Start the requestAnimationFrame loop. The closure holds only a weak
/// reference to the context, so dropping the owning `Rc` (teardown) both
/// halts the loop and releases the context on the next scheduled tick.
pub fn start_loop(ctx: &Rc<RefCell<FrameContext>>) -> RafLoop {
    let alive = Rc::new(Cell::new(true));
    let weak: Weak<RefCell<FrameContext>> = Rc::downgrade(ctx);

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let alive_tick = alive.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            return;
        }
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    RafLoop { alive }
}
