//! Per-frame update and rendering.

use odyssey_renderer::{FrameStatus, OverlayFrame};

use super::core::ExplorerApp;
use super::debug_panel::PanelStats;

impl ExplorerApp {
    /// Advance the camera, run the debug panel, and draw one frame.
    ///
    /// A render failure other than a lost surface is fatal and flags the
    /// app for exit.
    pub(super) fn render_frame(&mut self) {
        let dt = self.timer.tick();
        self.camera.update(dt);

        let overlay = self.run_panel();

        let Some(ref mut rs) = self.render_state else {
            return;
        };
        match rs.render_frame(&self.camera, overlay) {
            Ok(FrameStatus::Presented) => {}
            Ok(FrameStatus::Skipped) => {
                tracing::trace!("Frame skipped");
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Run the egui pass for the debug panel and regenerate the galaxy if a
    /// slider was released. Returns the tessellated overlay to draw.
    fn run_panel(&mut self) -> Option<OverlayFrame> {
        let window = self.window.clone()?;
        let egui_state = self.egui_state.as_mut()?;

        let stats = PanelStats {
            fps: self.timer.fps(),
            points: self.galaxy.len(),
            odysseys: self.universe.odysseys.len(),
            rings: self.universe.rings.len(),
        };

        let raw_input = egui_state.take_egui_input(&window);
        let mut committed = None;
        let panel = &mut self.panel;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            committed = panel.show(ctx, &stats);
        });
        egui_state.handle_platform_output(&window, full_output.platform_output);

        if let Some(params) = committed {
            tracing::info!(
                count = params.count,
                branches = params.branches,
                spin = params.spin,
                "Regenerating galaxy"
            );
            self.regenerate_galaxy(params);
        }

        let pixels_per_point = full_output.pixels_per_point;
        let paint_jobs = self.egui_ctx.tessellate(full_output.shapes, pixels_per_point);
        Some(OverlayFrame {
            paint_jobs,
            textures_delta: full_output.textures_delta,
            pixels_per_point,
        })
    }
}
