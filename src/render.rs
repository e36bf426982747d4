use crate::constants::{CANVAS_Z_INDEX, INITIAL_VERTEX_CAPACITY, LINE_COLOR, SKY_CLEAR, VOID_CLEAR};
use crate::dom;
use walkthrough_core::constants::LINE_WIDTH;
use walkthrough_core::{RenderLayer, Result, SceneContent, SceneState, WalkthroughError};
use wasm_bindgen::JsCast;
use web_sys as web;

mod backends;
mod mesh;
mod pipeline;

use backends::instance_descriptor;
use mesh::{build_scene_vertices, SceneUniforms, Vertex};
use pipeline::{create_scene_resources, create_vertex_buffer, SceneResources};

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

/// Canvas for the WebGL layer, fixed behind the CSS-3D labels.
pub fn create_canvas(document: &web::Document) -> Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| WalkthroughError::Configuration(format!("create <canvas>: {e:?}")))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| WalkthroughError::Configuration("<canvas> is not a canvas".into()))?;
    dom::set_style(&canvas, "position", "fixed");
    dom::set_style(&canvas, "top", "0");
    dom::set_style(&canvas, "left", "0");
    dom::set_style(&canvas, "z-index", CANVAS_Z_INDEX);
    Ok(canvas)
}

/// The WebGL half of the layer pair.
pub struct GpuLayer {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneResources,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    vertices: Vec<Vertex>,
}

impl GpuLayer {
    /// Acquire an adapter for `canvas`. Failing here means the browser cannot
    /// draw the scene at all.
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        canvas.set_width(width);
        canvas.set_height(height);

        // Resolves to a GL-only instance when WebGPU is exposed but unusable.
        let descriptor = instance_descriptor();
        let instance = wgpu::util::new_instance_with_webgpu_detection(&descriptor).await;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGL/WebGPU adapter"))?;
        log::info!("[gpu] adapter backend {:?}", adapter.get_info().backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let scene = create_scene_resources(&device, format);
        let vertex_buffer = create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);
        log::info!("[gpu] {:?} surface {}x{}", format, width, height);

        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            scene,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            vertices: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn ensure_vertex_capacity(&mut self, needed: usize) {
        if needed <= self.vertex_capacity {
            return;
        }
        self.vertex_capacity = needed.next_power_of_two();
        self.vertex_buffer = create_vertex_buffer(&self.device, self.vertex_capacity);
    }

    fn clear_color(scene: &SceneState) -> wgpu::Color {
        let [r, g, b] = if scene.content.object("SkyBox").is_some() {
            SKY_CLEAR
        } else {
            VOID_CLEAR
        };
        wgpu::Color { r, g, b, a: 1.0 }
    }
}

impl RenderLayer for GpuLayer {
    fn render(&mut self, scene: &SceneState) -> Result<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(WalkthroughError::RenderBackend(format!("{e:?}"))),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut vertices = std::mem::take(&mut self.vertices);
        build_scene_vertices(scene, LINE_WIDTH, LINE_COLOR, &mut vertices);
        self.ensure_vertex_capacity(vertices.len());
        self.queue.write_buffer(
            &self.scene.uniform_buffer,
            0,
            bytemuck::bytes_of(&SceneUniforms::new(scene.camera.view_proj())),
        );
        if !vertices.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(Self::clear_color(scene)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if !vertices.is_empty() {
                rpass.set_pipeline(&self.scene.pipeline);
                rpass.set_bind_group(0, &self.scene.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                rpass.draw(0..vertices.len() as u32, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        self.vertices = vertices;
        Ok(())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }
}
