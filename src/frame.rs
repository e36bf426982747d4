use crate::css3d::CssLayer;
use crate::overlay::DomOverlay;
use crate::render::GpuLayer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use walkthrough_core::{AnimationDriver, Choreographer, LayerPair, Stage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub choreographer: Choreographer,
    pub overlay: DomOverlay,
    pub layers: LayerPair<GpuLayer, CssLayer>,
    pub driver: AnimationDriver,
    pub last_instant: Instant,
    last_error: Option<String>,
}

impl FrameContext {
    pub fn new(
        choreographer: Choreographer,
        overlay: DomOverlay,
        layers: LayerPair<GpuLayer, CssLayer>,
    ) -> Self {
        Self {
            choreographer,
            overlay,
            layers,
            driver: AnimationDriver::default(),
            last_instant: Instant::now(),
            last_error: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let result = self.driver.tick(
            dt,
            &mut self.choreographer,
            &mut self.layers,
            &mut self.overlay,
        );
        // Log each distinct failure once instead of every frame
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                let message = e.to_string();
                if self.last_error.as_deref() != Some(message.as_str()) {
                    log::error!("[frame] {}", message);
                    self.last_error = Some(message);
                }
            }
        }
    }

    pub fn apply_slide(&mut self, slide: i32) -> Option<Stage> {
        self.choreographer.apply_slide(slide, &mut self.overlay)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.layers.resize(width, height) {
            self.choreographer
                .scene_mut()
                .camera
                .set_aspect(width, height);
            log::info!("[resize] {}x{}", width, height);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            if let Some(next) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(next.as_ref().unchecked_ref());
            }
        }
        frame_ctx.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(first)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(first.as_ref().unchecked_ref());
    }
}
