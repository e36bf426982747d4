use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use walkthrough_core::{AssetRequest, SceneManifest, WalkthroughConfig, WalkthroughError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn check_url(window: &web::Window, url: &str) -> Result<(), String> {
    let init = web::RequestInit::new();
    init.set_method("HEAD");
    let response = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()))
    }
}

/// Check every path of one request; the first missing one fails it.
async fn check_request(
    window: &web::Window,
    config: &WalkthroughConfig,
    request: &AssetRequest,
) -> Result<(), WalkthroughError> {
    for path in &request.paths {
        let url = config.asset_url(path);
        if let Err(reason) = check_url(window, &url).await {
            return Err(WalkthroughError::AssetLoad {
                name: request.object.name.clone(),
                path: url,
                reason,
            });
        }
    }
    Ok(())
}

/// Fill the content registry as assets resolve. Failures are logged once and
/// the object stays out of the scene.
pub async fn load_scene_content(
    window: web::Window,
    config: WalkthroughConfig,
    ctx: Rc<RefCell<FrameContext>>,
) {
    for request in SceneManifest::ponte_d_luis().requests() {
        let outcome = check_request(&window, &config, &request).await;
        let mut ctx = ctx.borrow_mut();
        let content = &mut ctx.choreographer.scene_mut().content;
        match outcome {
            Ok(()) => content.insert(request.object),
            Err(e) => content.record_failure(e),
        }
    }
}
