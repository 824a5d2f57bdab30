use crate::camera::OrbitCamera;
use crate::gpu::{RendererError, SceneUniforms};

use super::helpers::log_first_frame;
use super::overlay::OverlayFrame;
use super::state::RenderState;

/// What happened to a frame that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Presented,
    /// The surface was lost or outdated and has been reconfigured, or it
    /// timed out; nothing was drawn.
    Skipped,
}

impl RenderState {
    /// Render a complete frame: skybox or clear color, spheres, connection
    /// lines, galaxy points, then the debug overlay on top.
    pub fn render_frame(
        &mut self,
        camera: &OrbitCamera,
        overlay: Option<OverlayFrame>,
    ) -> Result<FrameStatus, RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(FrameStatus::Skipped);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Surface texture timed out, skipping frame");
                return Ok(FrameStatus::Skipped);
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("odyssey frame encoder"),
            });

        let uniforms = SceneUniforms::new(camera, self.gpu.size, self.ambient);
        self.scene.update(&self.gpu.queue, &uniforms);

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("odyssey scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let scene = &self.scene.bind_group;
            if let Some(skybox) = &self.skybox {
                skybox.draw(&mut pass, scene);
            }
            self.spheres.draw(&mut pass, scene);
            self.lines.draw(&mut pass, scene);
            self.galaxy.draw(&mut pass, scene);
        }

        if let Some(frame) = overlay {
            self.render_overlay(&mut encoder, &view, frame);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(FrameStatus::Presented)
    }

    fn render_overlay(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        frame: OverlayFrame,
    ) {
        let device = &self.gpu.device;
        let queue = &self.gpu.queue;

        for (id, delta) in &frame.textures_delta.set {
            self.overlay.update_texture(device, queue, *id, delta);
        }

        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.gpu.size.width, self.gpu.size.height],
            pixels_per_point: frame.pixels_per_point,
        };
        let extra = self
            .overlay
            .update_buffers(device, queue, encoder, &frame.paint_jobs, &screen);

        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("odyssey overlay pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();
            self.overlay.render(&mut pass, &frame.paint_jobs, &screen);
        }

        if !extra.is_empty() {
            self.gpu.queue.submit(extra);
        }
        for id in &frame.textures_delta.free {
            self.overlay.free_texture(id);
        }
    }
}
