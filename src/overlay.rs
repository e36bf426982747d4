use crate::constants::*;
use crate::dom;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use walkthrough_core::constants::OVERLAY_HIDE_DELAY;
use walkthrough_core::{Overlay, OverlayId, Result, TitlePosition, WalkthroughError};
use web_sys as web;

/// Overlay UI backed by the page's fixed elements.
///
/// Every id is resolved once up front; a missing element is a configuration
/// error rather than a silent no-op later on.
pub struct DomOverlay {
    window: web::Window,
    elements: FnvHashMap<OverlayId, web::Element>,
    title: web::Element,
    title_heading: web::Element,
    title_bg: web::Element,
    pending_hides: Rc<RefCell<FnvHashMap<OverlayId, i32>>>,
}

impl DomOverlay {
    pub fn new(window: web::Window, document: &web::Document) -> Result<Self> {
        let mut elements = FnvHashMap::default();
        for id in OverlayId::ALL {
            elements.insert(id, dom::require_element(document, id.dom_id())?);
        }
        let title = dom::require_element(document, TITLE_ID)?;
        let title_heading = title
            .get_elements_by_tag_name("h1")
            .item(0)
            .ok_or_else(|| WalkthroughError::Configuration(format!("missing #{TITLE_ID} h1")))?;
        let title_bg = dom::require_element(document, TITLE_BG_ID)?;
        Ok(Self {
            window,
            elements,
            title,
            title_heading,
            title_bg,
            pending_hides: Rc::new(RefCell::new(FnvHashMap::default())),
        })
    }

    pub fn element(&self, id: OverlayId) -> Option<&web::Element> {
        self.elements.get(&id)
    }

    fn cancel_pending_hide(&self, id: OverlayId) {
        if let Some(handle) = self.pending_hides.borrow_mut().remove(&id) {
            dom::clear_timeout(&self.window, handle);
        }
    }
}

fn swap_images(el: &web::Element, from: &str, to: &str) {
    for img in dom::collection_elements(&el.get_elements_by_tag_name("img")) {
        dom::swap_class(&img, from, to);
    }
}

impl Overlay for DomOverlay {
    fn show_overlay(&mut self, id: OverlayId) {
        self.cancel_pending_hide(id);
        let Some(el) = self.elements.get(&id) else {
            return;
        };
        dom::remove_class(el, HIDDEN_CLASS);
        dom::remove_class(el, FONT_ZERO_CLASS);
        dom::swap_class(el, RADIAL_FADE_OUT_CLASS, RADIAL_FADE_IN_CLASS);
        swap_images(el, IMG_FADE_OUT_CLASS, IMG_FADE_IN_CLASS);
    }

    fn hide_overlay(&mut self, id: OverlayId) {
        let Some(el) = self.elements.get(&id) else {
            return;
        };
        dom::swap_class(el, RADIAL_FADE_IN_CLASS, RADIAL_FADE_OUT_CLASS);
        swap_images(el, IMG_FADE_IN_CLASS, IMG_FADE_OUT_CLASS);

        self.cancel_pending_hide(id);
        let target = el.clone();
        let pending = self.pending_hides.clone();
        let handle = dom::set_timeout(
            &self.window,
            OVERLAY_HIDE_DELAY.as_millis() as i32,
            move || {
                pending.borrow_mut().remove(&id);
                dom::add_class(&target, FONT_ZERO_CLASS);
                dom::add_class(&target, HIDDEN_CLASS);
            },
        );
        if let Some(handle) = handle {
            self.pending_hides.borrow_mut().insert(id, handle);
        }
    }

    fn set_title(&mut self, text: &str, position: TitlePosition) {
        self.title_heading.set_text_content(Some(text));
        let (from, to) = match position {
            TitlePosition::Top => (TITLE_ON_BOTTOM_CLASS, TITLE_ON_TOP_CLASS),
            TitlePosition::Bottom => (TITLE_ON_TOP_CLASS, TITLE_ON_BOTTOM_CLASS),
        };
        dom::swap_class(&self.title, from, to);
        dom::remove_class(&self.title, FONT_ZERO_CLASS);
        dom::swap_class(
            &self.title_bg,
            GRADIENT_FADE_OUT_CLASS,
            GRADIENT_FADE_IN_CLASS,
        );
    }

    fn hide_title(&mut self) {
        dom::add_class(&self.title, FONT_ZERO_CLASS);
        dom::swap_class(
            &self.title_bg,
            GRADIENT_FADE_IN_CLASS,
            GRADIENT_FADE_OUT_CLASS,
        );
    }
}
