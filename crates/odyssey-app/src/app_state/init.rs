//! Window creation, renderer initialization, and scene upload.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use odyssey_common::ExplorerError;
use odyssey_config::schema::StartupMode;
use odyssey_renderer::RenderState;

use super::core::ExplorerApp;

impl ExplorerApp {
    /// Create the window, initialize the GPU renderer, and upload the scene.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> odyssey_common::Result<()> {
        let window_config = &self.config.window;
        let mut attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));
        attrs = match window_config.startup_mode {
            StartupMode::Windowed => attrs,
            StartupMode::Maximized => attrs.with_maximized(true),
            StartupMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
        };

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| ExplorerError::Window(format!("failed to create window: {e}")))?;

        let mut render_state = pollster::block_on(RenderState::new(window.clone(), &self.config))?;

        render_state.set_universe(&self.universe);
        render_state.set_galaxy(&self.galaxy);
        if !render_state.has_skybox() {
            tracing::info!("No skybox, drawing clear color");
        }

        let size = window.inner_size();
        self.camera.set_viewport(size.width, size.height);

        self.egui_state = Some(egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &*window,
            Some(window.scale_factor() as f32),
            None,
            None,
        ));

        self.render_state = Some(render_state);
        self.window = Some(window);
        tracing::info!(
            odysseys = self.universe.odysseys.len(),
            galaxy_points = self.galaxy.len(),
            "Window created and scene uploaded"
        );
        Ok(())
    }
}
