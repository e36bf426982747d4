#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use walkthrough_core::constants::FIRST_SLIDE;
use walkthrough_core::{
    Choreographer, LayerPair, Overlay, OverlayId, SceneState, ScreenMeasures, ScrollController,
    WalkthroughConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod css3d;
mod dom;
mod events;
mod frame;
mod nav;
mod overlay;
mod render;

use constants::{CONTAINER_ID, MAX_SIZE_BY_RENDERER_CLASS, NO_WEBGL_MESSAGE};

fn screen_measures(window: &web::Window) -> ScreenMeasures {
    let Ok(screen) = window.screen() else {
        return ScreenMeasures::default();
    };
    match (screen.avail_width(), screen.avail_height()) {
        (Ok(width), Ok(height)) => ScreenMeasures::new(width as f64, height as f64),
        _ => ScreenMeasures::default(),
    }
}

/// Size the scroll track and cap renderer-sized blocks to one viewport.
fn prepare_page(document: &web::Document, page_height: f64, viewport_height: f64) {
    if let Some(body) = document.body() {
        dom::set_style(&body, "height", &dom::px(page_height));
    }
    let blocks = document.get_elements_by_class_name(MAX_SIZE_BY_RENDERER_CLASS);
    for el in dom::collection_elements(&blocks) {
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            dom::set_style(&el, "max-height", &dom::px(viewport_height));
        }
    }
}

fn show_capability_warning(document: &web::Document) {
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        log::warn!("missing #{} for the WebGL warning", CONTAINER_ID);
        return;
    };
    if let Ok(warning) = dom::create_html_element(document, "div") {
        warning.set_id("webgl-error-message");
        warning.set_inner_html(NO_WEBGL_MESSAGE);
        _ = container.append_child(&warning);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("walkthrough-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let (viewport_width, viewport_height) = dom::viewport_size(&window);
    let config = WalkthroughConfig::new(viewport_height, screen_measures(&window))
        .with_assets_base(option_env!("ASSETS_PATH").unwrap_or(""));
    let scroll_state = config.scroll_state()?;
    let (width, height) = (viewport_width as u32, viewport_height as u32);

    let canvas = render::create_canvas(&document)?;
    let gpu = match render::GpuLayer::new(canvas, width, height).await {
        Ok(gpu) => gpu,
        Err(e) => {
            show_capability_warning(&document);
            return Err(e.context("graphics capability check failed"));
        }
    };

    prepare_page(&document, scroll_state.page_height, viewport_height);

    let mut overlay = overlay::DomOverlay::new(window.clone(), &document)?;
    let controller = Rc::new(RefCell::new(
        ScrollController::new(scroll_state).with_overshoot(config.scroll_overshoot),
    ));

    let mut scene = SceneState::bridge(&config.screen);
    scene.camera.set_aspect(width, height);
    let css = css3d::CssLayer::new(&document, &scene.annotations)?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("missing <body>"))?;
    _ = body.append_child(gpu.canvas());
    _ = body.append_child(css.element());
    let mut layers = LayerPair::new(gpu, css);
    layers.resize(width, height);
    let choreographer = Choreographer::new(scene, config.screen);

    overlay.show_overlay(OverlayId::NextSlide);
    let current = controller.borrow().current_slide(dom::scroll_y(&window));
    let nav = Rc::new(RefCell::new(events::NavButtons::new(
        window.clone(),
        controller.clone(),
    )));
    nav.borrow_mut().bind(&overlay, current);

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        choreographer,
        overlay,
        layers,
    )));
    frame::start_loop(ctx.clone());

    let registered = controller.borrow_mut().register(dom::scroll_y(&window));
    events::wire_scroll(
        window.clone(),
        &document,
        ctx.clone(),
        controller.clone(),
        nav.clone(),
    );
    events::wire_resize(window.clone(), ctx.clone());
    if registered != FIRST_SLIDE {
        log::info!("restored at slide {}", registered);
        ctx.borrow_mut().apply_slide(registered);
        nav.borrow_mut().bind(&ctx.borrow().overlay, registered);
    }

    spawn_local(assets::load_scene_content(window, config, ctx));
    Ok(())
}
