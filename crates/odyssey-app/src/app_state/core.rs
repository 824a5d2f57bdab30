//! ExplorerApp struct definition and constructor.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::window::Window;

use odyssey_common::ExplorerError;
use odyssey_config::schema::ExplorerConfig;
use odyssey_renderer::{FrameTimer, OrbitCamera, RenderState};
use odyssey_universe::{GalaxyField, GalaxyParams, Universe};

use super::debug_panel::GalaxyPanel;
use super::input::PointerState;

/// Top-level application state.
pub struct ExplorerApp {
    pub(super) config: ExplorerConfig,
    pub(super) seed: u64,
    pub(super) rng: StdRng,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Scene content
    pub(super) universe: Universe,
    pub(super) galaxy: GalaxyField,
    pub(super) camera: OrbitCamera,

    // Debug overlay
    pub(super) egui_ctx: egui::Context,
    pub(super) egui_state: Option<egui_winit::State>,
    pub(super) panel: GalaxyPanel,

    pub(super) pointer: PointerState,
    pub(super) timer: FrameTimer,
    pub(super) should_exit: bool,
    pub(super) failure: Option<ExplorerError>,
}

impl ExplorerApp {
    /// Generate the scene up front; the window and GPU come with `resumed`.
    ///
    /// Without a `seed` one is drawn from entropy and logged so the run can
    /// be reproduced.
    pub fn new(config: ExplorerConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        tracing::info!(seed, "Scene seed");
        let mut rng = StdRng::seed_from_u64(seed);

        let universe = Universe::build(&config.universe, config.scene.textures.len(), &mut rng);
        let params = GalaxyParams::from(&config.galaxy);
        let galaxy = GalaxyField::generate(params, &mut rng);

        let aspect = config.window.width.max(1) as f32 / config.window.height.max(1) as f32;
        let camera = OrbitCamera::from_config(&config.camera, aspect);
        let panel = GalaxyPanel::new(config.debug.show_panel, params);

        Self {
            config,
            seed,
            rng,
            window: None,
            render_state: None,
            universe,
            galaxy,
            camera,
            egui_ctx: egui::Context::default(),
            egui_state: None,
            panel,
            pointer: PointerState::default(),
            timer: FrameTimer::new(),
            should_exit: false,
            failure: None,
        }
    }

    /// Regenerate the galaxy with `params` and push it to the GPU.
    pub(super) fn regenerate_galaxy(&mut self, params: GalaxyParams) {
        self.galaxy.regenerate(params, &mut self.rng);
        if let Some(ref mut rs) = self.render_state {
            rs.set_galaxy(&self.galaxy);
        }
    }

    /// Record a fatal error and flag the event loop to stop. Only the first
    /// failure is kept; `main` reports it.
    pub(super) fn fail(&mut self, err: ExplorerError) {
        self.failure.get_or_insert(err);
        self.should_exit = true;
    }

    /// The fatal error that stopped the event loop, if any.
    pub fn take_failure(&mut self) -> Option<ExplorerError> {
        self.failure.take()
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
