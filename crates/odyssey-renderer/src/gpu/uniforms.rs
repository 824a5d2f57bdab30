//! Per-frame uniform block shared by every scene pass.
//!
//! `SceneUniforms` lives in bind group 0 of the skybox, sphere, line and
//! galaxy pipelines, uploaded once per frame.

use crate::camera::OrbitCamera;

use super::types::PhysicalSize;

/// GPU-side uniform buffer matching the WGSL `Scene` struct.
///
/// Layout: mat4 + 5 × vec4 = 144 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [f32; 16],
    /// View ray basis for the skybox (xyz, w unused).
    pub ray_forward: [f32; 4],
    pub ray_right: [f32; 4],
    pub ray_up: [f32; 4],
    /// Ambient light color pre-multiplied by intensity (rgb, w unused).
    pub ambient: [f32; 4],
    /// Viewport width, height in pixels; z = height / 2 for point scaling.
    pub viewport: [f32; 4],
}

impl SceneUniforms {
    pub fn new(camera: &OrbitCamera, size: PhysicalSize, ambient: [f32; 3]) -> Self {
        let [forward, right, up] = camera.ray_basis();
        let width = size.width.max(1) as f32;
        let height = size.height.max(1) as f32;
        Self {
            view_proj: camera.view_proj(),
            ray_forward: [forward[0], forward[1], forward[2], 0.0],
            ray_right: [right[0], right[1], right[2], 0.0],
            ray_up: [up[0], up[1], up[2], 0.0],
            ambient: [ambient[0], ambient[1], ambient[2], 1.0],
            viewport: [width, height, height * 0.5, 0.0],
        }
    }
}

/// WGSL declaration of the shared block, prepended to every scene shader.
pub(crate) const SCENE_WGSL: &str = r#"
struct Scene {
    view_proj: mat4x4<f32>,
    ray_forward: vec4<f32>,
    ray_right: vec4<f32>,
    ray_up: vec4<f32>,
    ambient: vec4<f32>,
    viewport: vec4<f32>,
};

@group(0) @binding(0) var<uniform> scene: Scene;
"#;

/// Owns the scene uniform buffer and its bind group.
pub struct SceneBinding {
    pub buffer: wgpu::Buffer,
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl SceneBinding {
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<SceneUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    pub fn update(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}
