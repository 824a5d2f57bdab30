//! Equirectangular skybox drawn as a full-screen triangle.

use std::path::Path;

use odyssey_config::schema::SceneConfig;

use crate::gpu::{DEPTH_FORMAT, SCENE_WGSL};
use crate::texture::{self, GpuTexture};

const SHADER_SOURCE: &str = r#"
@group(1) @binding(0) var sky_texture: texture_2d<f32>;
@group(1) @binding(1) var sky_sampler: sampler;

struct VertexOutput {
    @builtin(position) clip: vec4<f32>,
    @location(0) ndc: vec2<f32>,
};

@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> VertexOutput {
    let x = f32((index << 1u) & 2u) * 2.0 - 1.0;
    let y = f32(index & 2u) * 2.0 - 1.0;
    var out: VertexOutput;
    out.clip = vec4<f32>(x, y, 1.0, 1.0);
    out.ndc = vec2<f32>(x, y);
    return out;
}

const PI: f32 = 3.14159265;

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dir = normalize(scene.ray_forward.xyz + in.ndc.x * scene.ray_right.xyz + in.ndc.y * scene.ray_up.xyz);
    let u = atan2(dir.z, dir.x) / (2.0 * PI) + 0.5;
    let v = 0.5 - asin(clamp(dir.y, -1.0, 1.0)) / PI;
    return textureSampleLevel(sky_texture, sky_sampler, vec2<f32>(u, v), 0.0);
}
"#;

pub struct Skybox {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
}

impl Skybox {
    /// Load `config.skybox`; `None` when the image is missing or broken,
    /// in which case the frame keeps the plain clear color.
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        scene_layout: &wgpu::BindGroupLayout,
        config: &SceneConfig,
    ) -> Option<Self> {
        let path = texture::resolve_asset(Path::new(&config.asset_dir), &config.skybox);
        let image = match texture::load_image(&path) {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!("Skybox {} unavailable ({e}), using clear color", path.display());
                return None;
            }
        };

        let sky = GpuTexture::upload(device, queue, &image, "skybox texture");
        let layout = texture::texture_bind_group_layout(device, "skybox bind group layout");
        let sampler = texture::linear_sampler(device, "skybox sampler", true);
        let bind_group = texture::texture_bind_group(device, &layout, &sky, &sampler, "skybox bind group");

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skybox shader"),
            source: wgpu::ShaderSource::Wgsl(format!("{SCENE_WGSL}{SHADER_SOURCE}").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("skybox pipeline layout"),
            bind_group_layouts: &[scene_layout, &layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("skybox pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
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
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        tracing::info!("Skybox loaded from {} ({}x{})", path.display(), image.width, image.height);
        Some(Self {
            pipeline,
            bind_group,
        })
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, scene: &wgpu::BindGroup) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, scene, &[]);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}
