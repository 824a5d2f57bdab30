//! Connection curves drawn as one line list with a shared material.

use odyssey_common::Color;
use odyssey_config::schema::ConnectionConfig;
use odyssey_universe::ConnectionCurve;

use crate::gpu::{DEPTH_FORMAT, SCENE_WGSL};

const SHADER_SOURCE: &str = r#"
struct LineMaterial {
    color: vec4<f32>,
};

@group(1) @binding(0) var<uniform> material: LineMaterial;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return scene.view_proj * vec4<f32>(position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return material.color;
}
"#;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

/// Expand each polyline into line-list segment pairs.
pub fn line_list_vertices(curves: &[ConnectionCurve]) -> Vec<LineVertex> {
    let segments: usize = curves
        .iter()
        .map(|c| c.points.len().saturating_sub(1))
        .sum();
    let mut vertices = Vec::with_capacity(segments * 2);
    for curve in curves {
        for pair in curve.points.windows(2) {
            vertices.push(LineVertex { position: pair[0] });
            vertices.push(LineVertex { position: pair[1] });
        }
    }
    vertices
}

/// Linear RGB plus opacity for the line material.
pub fn line_color(config: &ConnectionConfig) -> [f32; 4] {
    let [r, g, b] = Color::from_hex(&config.color)
        .unwrap_or(Color::WHITE)
        .to_linear_f32();
    [r, g, b, config.opacity.clamp(0.0, 1.0)]
}

pub struct ConnectionLines {
    pipeline: wgpu::RenderPipeline,
    material: wgpu::BindGroup,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl ConnectionLines {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        scene_layout: &wgpu::BindGroupLayout,
        config: &ConnectionConfig,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("connection shader"),
            source: wgpu::ShaderSource::Wgsl(format!("{SCENE_WGSL}{SHADER_SOURCE}").into()),
        });

        let material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("connection material"),
            contents: bytemuck::cast_slice(&line_color(config)),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("connection material layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let material = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("connection material bind group"),
            layout: &material_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: material_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("connection pipeline layout"),
            bind_group_layouts: &[scene_layout, &material_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("connection pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LineVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
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
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
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
            material,
            vertex_buffer: None,
            vertex_count: 0,
        }
    }

    /// Replace the drawn curves.
    pub fn set_curves(&mut self, device: &wgpu::Device, curves: &[ConnectionCurve]) {
        use wgpu::util::DeviceExt;

        let vertices = line_list_vertices(curves);
        self.vertex_count = vertices.len() as u32;
        self.vertex_buffer = (!vertices.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("connection vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            })
        });
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, scene: &wgpu::BindGroup) {
        let Some(buffer) = &self.vertex_buffer else {
            return;
        };
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, scene, &[]);
        pass.set_bind_group(1, &self.material, &[]);
        pass.set_vertex_buffer(0, buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}
