//! Instanced, textured sphere pipeline.
//!
//! One shared mesh; each palette texture gets its own bind group and
//! instance buffer so a frame issues one draw per texture in use.

use std::path::Path;

use odyssey_config::schema::SceneConfig;
use wgpu::util::DeviceExt;

use crate::gpu::{DEPTH_FORMAT, SCENE_WGSL};
use crate::texture::{self, GpuTexture};

use super::mesh::generate_sphere_mesh;
use super::types::{InstanceGroup, SphereInstance, SphereVertex};

pub(crate) const SHADER_SOURCE: &str = r#"
@group(1) @binding(0) var palette_texture: texture_2d<f32>;
@group(1) @binding(1) var palette_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) instance: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = in.instance.xyz + in.position * in.instance.w;
    out.clip = scene.view_proj * vec4<f32>(world, 1.0);
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let base = textureSample(palette_texture, palette_sampler, in.uv);
    return vec4<f32>(min(base.rgb * scene.ambient.rgb, vec3<f32>(1.0)), 1.0);
}
"#;

struct GroupBuffers {
    texture: usize,
    buffer: wgpu::Buffer,
    count: u32,
}

pub struct SpherePipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    textures: Vec<wgpu::BindGroup>,
    groups: Vec<GroupBuffers>,
}

impl SpherePipeline {
    /// Build the pipeline and upload the palette from `config.textures`.
    ///
    /// An empty palette still gets one white texture.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        scene_layout: &wgpu::BindGroupLayout,
        config: &SceneConfig,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sphere shader"),
            source: wgpu::ShaderSource::Wgsl(format!("{SCENE_WGSL}{SHADER_SOURCE}").into()),
        });

        let vertices = generate_sphere_mesh(1.0, config.sphere_segments, config.sphere_segments);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere vertex buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let texture_layout = texture::texture_bind_group_layout(device, "palette bind group layout");
        let sampler = texture::linear_sampler(device, "palette sampler", true);
        let asset_dir = Path::new(&config.asset_dir);
        let mut images: Vec<_> = config
            .textures
            .iter()
            .map(|path| texture::load_or_white(&texture::resolve_asset(asset_dir, path)))
            .collect();
        if images.is_empty() {
            images.push(texture::ImageData::white());
        }
        let textures = images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let gpu = GpuTexture::upload(device, queue, image, &format!("palette texture {i}"));
                texture::texture_bind_group(device, &texture_layout, &gpu, &sampler, "palette bind group")
            })
            .collect();

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sphere pipeline layout"),
            bind_group_layouts: &[scene_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sphere pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SphereVertex::LAYOUT, SphereInstance::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
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
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            textures,
            groups: Vec::new(),
        }
    }

    /// Number of palette textures, including any white fallbacks.
    pub fn palette_len(&self) -> usize {
        self.textures.len()
    }

    /// Replace the drawn instances.
    pub fn set_instances(&mut self, device: &wgpu::Device, groups: &[InstanceGroup]) {
        self.groups = groups
            .iter()
            .filter(|g| !g.instances.is_empty() && g.texture < self.textures.len())
            .map(|g| GroupBuffers {
                texture: g.texture,
                buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("sphere instances"),
                    contents: bytemuck::cast_slice(&g.instances),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                count: g.instances.len() as u32,
            })
            .collect();
        tracing::debug!(groups = self.groups.len(), "sphere instances uploaded");
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, scene: &wgpu::BindGroup) {
        if self.groups.is_empty() {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, scene, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        for group in &self.groups {
            pass.set_bind_group(1, &self.textures[group.texture], &[]);
            pass.set_vertex_buffer(1, group.buffer.slice(..));
            pass.draw(0..self.vertex_count, 0..group.count);
        }
    }
}
