use odyssey_common::{Color, Vec3};
use odyssey_config::schema::GalaxyConfig;
use odyssey_universe::GalaxyField;
use wgpu::util::DeviceExt;

use crate::gpu::{DEPTH_FORMAT, SCENE_WGSL};

use super::slot::{GpuSlot, Release};

const SHADER_SOURCE: &str = r#"
struct PointMaterial {
    color: vec4<f32>,
    params: vec4<f32>,
};

@group(1) @binding(0) var<uniform> material: PointMaterial;

@vertex
fn vs_main(@builtin(vertex_index) index: u32, @location(0) center: vec3<f32>) -> @builtin(position) vec4<f32> {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(-1.0, 1.0),
    );
    let corner = corners[index];
    var clip = scene.view_proj * vec4<f32>(center, 1.0);
    let pixels = max(material.params.x * scene.viewport.z / max(clip.w, 0.0001), 1.0);
    clip.x += corner.x * pixels / scene.viewport.x * clip.w;
    clip.y += corner.y * pixels / scene.viewport.y * clip.w;
    return clip;
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return material.color;
}
"#;

/// Vertices per point quad.
const QUAD_VERTICES: u32 = 6;

/// Blend that adds `src * alpha` onto whatever is already drawn.
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::Zero,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// Uniform block matching the WGSL `PointMaterial`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointMaterialUniform {
    /// Linear RGB plus opacity.
    pub color: [f32; 4],
    /// x = world-space point size.
    pub params: [f32; 4],
}

impl PointMaterialUniform {
    pub fn new(color: &str, opacity: f32, size: f32) -> Self {
        let [r, g, b] = Color::from_hex(color).unwrap_or(Color::WHITE).to_linear_f32();
        Self {
            color: [r, g, b, opacity.clamp(0.0, 1.0)],
            params: [size.max(0.0), 0.0, 0.0, 0.0],
        }
    }
}

/// Point positions plus the material they are drawn with.
pub struct GalaxyResources {
    pub positions: wgpu::Buffer,
    pub material_buffer: wgpu::Buffer,
    pub material: wgpu::BindGroup,
    pub count: u32,
}

impl Release for GalaxyResources {
    fn release(&mut self) {
        self.positions.release();
        self.material_buffer.release();
    }
}

pub struct GalaxyLayer {
    pipeline: wgpu::RenderPipeline,
    material_layout: wgpu::BindGroupLayout,
    color: String,
    opacity: f32,
    slot: GpuSlot<GalaxyResources>,
}

impl GalaxyLayer {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        scene_layout: &wgpu::BindGroupLayout,
        config: &GalaxyConfig,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("galaxy shader"),
            source: wgpu::ShaderSource::Wgsl(format!("{SCENE_WGSL}{SHADER_SOURCE}").into()),
        });

        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("galaxy material layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("galaxy pipeline layout"),
            bind_group_layouts: &[scene_layout, &material_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("galaxy pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vec3>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    }],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            material_layout,
            color: config.color.clone(),
            opacity: config.opacity,
            slot: GpuSlot::new(),
        }
    }

    /// Upload `field` as a fresh buffer/material pair, releasing the previous pair.
    pub fn upload(&mut self, device: &wgpu::Device, field: &GalaxyField) {
        let positions = field.positions();
        // Zero-sized vertex buffers cannot be bound, so keep at least one point's worth.
        let size = (std::mem::size_of_val(positions) as u64).max(std::mem::size_of::<Vec3>() as u64);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("galaxy positions"),
            size,
            usage: wgpu::BufferUsages::VERTEX,
            mapped_at_creation: true,
        });
        if !positions.is_empty() {
            buffer.slice(..).get_mapped_range_mut()[..std::mem::size_of_val(positions)]
                .copy_from_slice(bytemuck::cast_slice(positions));
        }
        buffer.unmap();

        let uniform = PointMaterialUniform::new(&self.color, self.opacity, field.params().size);
        let material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("galaxy material"),
            contents: bytemuck::bytes_of(&uniform),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let material = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("galaxy material bind group"),
            layout: &self.material_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: material_buffer.as_entire_binding(),
            }],
        });

        self.slot.replace(GalaxyResources {
            positions: buffer,
            material_buffer,
            material,
            count: positions.len() as u32,
        });
        tracing::debug!(
            points = positions.len(),
            generation = field.generation(),
            "galaxy uploaded"
        );
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, scene: &wgpu::BindGroup) {
        let Some(resources) = self.slot.get() else {
            return;
        };
        if resources.count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, scene, &[]);
        pass.set_bind_group(1, &resources.material, &[]);
        pass.set_vertex_buffer(0, resources.positions.slice(..));
        pass.draw(0..QUAD_VERTICES, 0..resources.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_uniform_is_two_vec4() {
        assert_eq!(std::mem::size_of::<PointMaterialUniform>(), 32);
    }

    #[test]
    fn default_material_is_translucent_pink() {
        let config = GalaxyConfig::default();
        let m = PointMaterialUniform::new(&config.color, config.opacity, config.size);
        assert_eq!(m.color[0], 1.0);
        assert!(m.color[1] < m.color[2]);
        assert_eq!(m.color[3], 0.5);
        assert_eq!(m.params[0], 0.001);
    }

    #[test]
    fn bad_color_falls_back_to_white() {
        let m = PointMaterialUniform::new("nope", 2.0, -1.0);
        assert_eq!(m.color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(m.params[0], 0.0);
    }
}
