/// Instance settings for the WebGL layer. Both browser backends stay on so
/// WebGPU detection can drop to WebGL2 when `navigator.gpu` exists but hands
/// out no adapter.
pub fn instance_descriptor() -> wgpu::InstanceDescriptor {
    wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    }
}
