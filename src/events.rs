use crate::constants::NAV_EVENT;
use crate::dom;
use crate::frame::FrameContext;
use crate::nav::NavDirection;
use crate::overlay::DomOverlay;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use walkthrough_core::constants::RESIZE_DEBOUNCE;
use walkthrough_core::ScrollController;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct BoundButton {
    element: web::Element,
    handler: Closure<dyn FnMut()>,
}

/// Next/previous buttons. Each binding targets the neighbours of the slide it
/// was made for, so buttons are rebound on every slide change.
pub struct NavButtons {
    window: web::Window,
    controller: Rc<RefCell<ScrollController>>,
    bound: Vec<BoundButton>,
}

impl NavButtons {
    pub fn new(window: web::Window, controller: Rc<RefCell<ScrollController>>) -> Self {
        Self {
            window,
            controller,
            bound: Vec::new(),
        }
    }

    /// Replace any previous handlers with ones leading away from `current`.
    pub fn bind(&mut self, overlay: &DomOverlay, current: i32) {
        self.unbind();
        for direction in NavDirection::ALL {
            let Some(element) = overlay.element(direction.overlay()) else {
                continue;
            };
            let target = direction.target(current);
            let window = self.window.clone();
            let controller = self.controller.clone();
            let handler = Closure::wrap(Box::new(move || {
                log::info!("going to slide {}", target);
                let top = controller.borrow().go_to_slide_target(target);
                scroll_smooth(&window, top);
            }) as Box<dyn FnMut()>);
            _ = element.add_event_listener_with_callback(
                NAV_EVENT,
                handler.as_ref().unchecked_ref(),
            );
            self.bound.push(BoundButton {
                element: element.clone(),
                handler,
            });
        }
    }

    fn unbind(&mut self) {
        for button in self.bound.drain(..) {
            _ = button.element.remove_event_listener_with_callback(
                NAV_EVENT,
                button.handler.as_ref().unchecked_ref(),
            );
        }
    }
}

fn scroll_smooth(window: &web::Window, top: f64) {
    let options = web::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Re-evaluate the slide on every scroll event and run its transition when it
/// changed. Buttons are rebound for the new slide.
pub fn wire_scroll(
    window: web::Window,
    document: &web::Document,
    ctx: Rc<RefCell<FrameContext>>,
    controller: Rc<RefCell<ScrollController>>,
    nav: Rc<RefCell<NavButtons>>,
) {
    dom::add_listener(document, "scroll", move || {
        let y = dom::scroll_y(&window);
        let Some(slide) = controller.borrow_mut().observe(y) else {
            return;
        };
        let mut ctx = ctx.borrow_mut();
        ctx.apply_slide(slide);
        nav.borrow_mut().bind(&ctx.overlay, slide);
    });
}

/// Resize both layers once the window has stopped resizing.
pub fn wire_resize(window: web::Window, ctx: Rc<RefCell<FrameContext>>) {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let target = window.clone();
    dom::add_listener(&target, "resize", move || {
        if let Some(handle) = pending.take() {
            dom::clear_timeout(&window, handle);
        }
        let ctx = ctx.clone();
        let window_for_timer = window.clone();
        let pending_for_timer = pending.clone();
        let delay = RESIZE_DEBOUNCE.as_millis() as i32;
        let handle = dom::set_timeout(&window, delay, move || {
            pending_for_timer.set(None);
            let (width, height) = dom::viewport_size(&window_for_timer);
            ctx.borrow_mut().resize(width as u32, height as u32);
        });
        pending.set(handle);
    });
}
