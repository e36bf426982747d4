use crate::constants::CSS_LAYER_Z_INDEX;
use crate::dom;
use walkthrough_core::css3d::{
    camera_transform, focal_length_px, label_world_matrix, object_css_matrix,
};
use walkthrough_core::{Annotation, AnnotationId, RenderLayer, Result, SceneState};
use web_sys as web;

struct LabelElement {
    id: AnnotationId,
    element: web::HtmlElement,
}

/// DOM labels placed with CSS 3D transforms so they track the WebGL camera.
pub struct CssLayer {
    view: web::HtmlElement,
    camera: web::HtmlElement,
    labels: Vec<LabelElement>,
    width: u32,
    height: u32,
    perspective: Option<f64>,
}

impl CssLayer {
    pub fn new(document: &web::Document, annotations: &[Annotation]) -> Result<Self> {
        let view = dom::create_html_element(document, "div")?;
        for (property, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("overflow", "hidden"),
            ("pointer-events", "none"),
            ("z-index", CSS_LAYER_Z_INDEX),
        ] {
            dom::set_style(&view, property, value);
        }
        let camera = dom::create_html_element(document, "div")?;
        dom::set_style(&camera, "transform-style", "preserve-3d");
        dom::set_style(&camera, "pointer-events", "none");
        _ = view.append_child(&camera);

        let mut labels = Vec::with_capacity(annotations.len());
        for annotation in annotations {
            let spec = &annotation.spec;
            let text = dom::create_html_element(document, "p")?;
            text.set_inner_text(spec.label);
            _ = text.set_attribute("style", &spec.style.css());

            let element = dom::create_html_element(document, "div")?;
            element.set_id(&annotation.id().label_name());
            dom::set_style(&element, "position", "absolute");
            dom::set_style(&element, "pointer-events", "auto");
            _ = element.append_child(&text);
            _ = camera.append_child(&element);
            labels.push(LabelElement {
                id: annotation.id(),
                element,
            });
        }

        Ok(Self {
            view,
            camera,
            labels,
            width: 0,
            height: 0,
            perspective: None,
        })
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.view
    }
}

impl RenderLayer for CssLayer {
    fn render(&mut self, scene: &SceneState) -> Result<()> {
        let fov = focal_length_px(scene.camera.fov_deg, self.height);
        if self.perspective != Some(fov) {
            dom::set_style(&self.view, "perspective", &dom::px(fov));
            self.perspective = Some(fov);
        }
        dom::set_style(
            &self.camera,
            "transform",
            &camera_transform(&scene.camera, self.width, self.height),
        );
        for label in &self.labels {
            let Some(annotation) = scene.annotation(label.id) else {
                continue;
            };
            let world = label_world_matrix(
                annotation.spec.label_anchor,
                annotation.label_rotation,
                annotation.label_scale,
            );
            dom::set_style(&label.element, "transform", &object_css_matrix(&world));
        }
        Ok(())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        for el in [&self.view, &self.camera] {
            dom::set_style(el, "width", &dom::px(width as f64));
            dom::set_style(el, "height", &dom::px(height as f64));
        }
    }
}
