use std::sync::Arc;
use winit::window::Window;

use odyssey_config::ExplorerConfig;
use odyssey_universe::{GalaxyField, Universe};

use crate::connections::ConnectionLines;
use crate::galaxy::GalaxyLayer;
use crate::gpu::{GpuContext, RendererError, SceneBinding};
use crate::skybox::Skybox;
use crate::sphere::{group_by_texture, SpherePipeline};

use super::helpers::{ambient_light, clear_color};

/// Radius of every odyssey sphere.
pub const SPHERE_RADIUS: f32 = 1.0;

/// Core rendering state: GPU context plus the layers of the scene.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) scene: SceneBinding,
    pub(super) skybox: Option<Skybox>,
    pub(super) spheres: SpherePipeline,
    pub(super) lines: ConnectionLines,
    pub(super) galaxy: GalaxyLayer,
    pub(super) overlay: egui_wgpu::Renderer,
    pub(super) clear_color: wgpu::Color,
    pub(super) ambient: [f32; 3],
}

impl RenderState {
    /// Create the GPU context and every pipeline, loading textures from the
    /// configured asset directory.
    pub async fn new(window: Arc<Window>, config: &ExplorerConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.window.vsync).await?;
        let format = gpu.format();
        let scene = SceneBinding::new(&gpu.device);

        let skybox = Skybox::load(&gpu.device, &gpu.queue, format, &scene.layout, &config.scene);
        let spheres = SpherePipeline::new(&gpu.device, &gpu.queue, format, &scene.layout, &config.scene);
        let lines = ConnectionLines::new(
            &gpu.device,
            format,
            &scene.layout,
            &config.universe.connections,
        );
        let galaxy = GalaxyLayer::new(&gpu.device, format, &scene.layout, &config.galaxy);
        let overlay = egui_wgpu::Renderer::new(&gpu.device, format, None, 1, false);

        Ok(Self {
            gpu,
            scene,
            skybox,
            spheres,
            lines,
            galaxy,
            overlay,
            clear_color: clear_color(&config.scene.clear_color),
            ambient: ambient_light(&config.scene.ambient_color, config.scene.ambient_intensity),
        })
    }

    /// Number of textures odysseys can be drawn with.
    pub fn palette_len(&self) -> usize {
        self.spheres.palette_len()
    }

    /// Upload sphere instances and connection lines for `universe`.
    pub fn set_universe(&mut self, universe: &Universe) {
        let groups = group_by_texture(universe.placed(), self.palette_len(), SPHERE_RADIUS);
        self.spheres.set_instances(&self.gpu.device, &groups);
        self.lines.set_curves(&self.gpu.device, &universe.curves);
    }

    /// Replace the galaxy buffer and material with ones built from `field`.
    pub fn set_galaxy(&mut self, field: &GalaxyField) {
        self.galaxy.upload(&self.gpu.device, field);
    }

    pub fn has_skybox(&self) -> bool {
        self.skybox.is_some()
    }

    /// Handle a window resize by reconfiguring the surface and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }
}
