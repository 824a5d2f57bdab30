//! The "Galaxy" debug window: parameter sliders and scene stats.

use std::ops::RangeInclusive;

use odyssey_universe::GalaxyParams;

// Slider increments.
const COUNT_STEP: f64 = 100.0;
const SIZE_STEP: f64 = 0.001;
const RADIUS_STEP: f64 = 1.0;
const BRANCHES_STEP: f64 = 1.0;
const SPIN_STEP: f64 = 0.1;
const RANDOMNESS_STEP: f64 = 0.001;
const Y_HEIGHT_STEP: f64 = 1.0;

/// Read-only numbers shown under the sliders.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelStats {
    pub fps: f64,
    pub points: usize,
    pub odysseys: usize,
    pub rings: usize,
}

/// Slider state for the galaxy parameters.
///
/// Sliders edit a draft; the draft is handed out for regeneration only
/// when an interaction completes, so dragging a slider does not rebuild
/// the field on every intermediate value.
pub struct GalaxyPanel {
    pub visible: bool,
    draft: GalaxyParams,
}

impl GalaxyPanel {
    pub fn new(visible: bool, params: GalaxyParams) -> Self {
        Self {
            visible,
            draft: params,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        tracing::debug!(visible = self.visible, "debug panel toggled");
    }

    pub fn draft(&self) -> &GalaxyParams {
        &self.draft
    }

    /// Draw the panel. Returns the parameters to regenerate with when a
    /// slider interaction finished this frame.
    pub fn show(&mut self, ctx: &egui::Context, stats: &PanelStats) -> Option<GalaxyParams> {
        if !self.visible {
            return None;
        }

        let mut commit = false;
        egui::Window::new("Galaxy")
            .resizable(false)
            .default_pos([12.0, 12.0])
            .show(ctx, |ui| {
                let d = &mut self.draft;
                commit |= slider(ui, "count", &mut d.count, 100..=1_000_000, Some(COUNT_STEP));
                commit |= slider(ui, "size", &mut d.size, 0.001..=0.1, Some(SIZE_STEP));
                commit |= slider(ui, "radius", &mut d.radius, 1.0..=500.0, Some(RADIUS_STEP));
                commit |= slider(ui, "branches", &mut d.branches, 2..=10, Some(BRANCHES_STEP));
                commit |= slider(ui, "spin", &mut d.spin, -3.0..=3.0, Some(SPIN_STEP));
                commit |= slider(ui, "randomness", &mut d.randomness, 0.0..=2.0, Some(RANDOMNESS_STEP));
                commit |= slider(
                    ui,
                    "randomnessPower",
                    &mut d.randomness_power,
                    1.0..=10.0,
                    Some(RANDOMNESS_STEP),
                );
                commit |= slider(
                    ui,
                    "yHeight",
                    &mut d.y_height,
                    1.0..=150.0,
                    Some(Y_HEIGHT_STEP),
                );

                ui.separator();
                ui.label(format!("FPS: {:.0}", stats.fps));
                ui.label(format!("Points: {}", stats.points));
                ui.label(format!("Odysseys: {}", stats.odysseys));
                ui.label(format!("Rings: {}", stats.rings));
            });

        commit.then_some(self.draft)
    }
}

fn slider<N: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut N,
    range: RangeInclusive<N>,
    step: Option<f64>,
) -> bool {
    let mut widget = egui::Slider::new(value, range).text(label);
    if let Some(step) = step {
        widget = widget.step_by(step);
    }
    let response = ui.add(widget);
    interaction_finished(response.changed(), response.dragged(), response.drag_stopped())
}

/// A slider edit is complete when a drag is released, or when the value
/// changed without a drag (click, keyboard, typed value).
pub(super) fn interaction_finished(changed: bool, dragging: bool, drag_stopped: bool) -> bool {
    drag_stopped || (changed && !dragging)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_commits_only_on_release() {
        assert!(!interaction_finished(true, true, false));
        assert!(interaction_finished(false, false, true));
        assert!(interaction_finished(true, false, true));
    }

    #[test]
    fn non_drag_change_commits_immediately() {
        assert!(interaction_finished(true, false, false));
        assert!(!interaction_finished(false, false, false));
    }

    #[test]
    fn coarse_parameters_step_in_whole_units() {
        assert_eq!(RADIUS_STEP, 1.0);
        assert_eq!(SPIN_STEP, 0.1);
        assert_eq!(Y_HEIGHT_STEP, 1.0);
    }

    #[test]
    fn defaults_sit_on_the_slider_grid() {
        let d = GalaxyParams::default();
        for (value, step) in [
            (d.count as f64, COUNT_STEP),
            (d.size as f64, SIZE_STEP),
            (d.radius as f64, RADIUS_STEP),
            (d.branches as f64, BRANCHES_STEP),
            (d.spin as f64, SPIN_STEP),
            (d.randomness as f64, RANDOMNESS_STEP),
            (d.y_height as f64, Y_HEIGHT_STEP),
        ] {
            let steps = value / step;
            assert!((steps - steps.round()).abs() < 1e-3, "{value} / {step}");
        }
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut panel = GalaxyPanel::new(false, GalaxyParams::default());
        panel.toggle();
        assert!(panel.visible);
        panel.toggle();
        assert!(!panel.visible);
    }

    #[test]
    fn hidden_panel_never_commits() {
        let ctx = egui::Context::default();
        let mut panel = GalaxyPanel::new(false, GalaxyParams::default());
        let mut result = Some(GalaxyParams::default());
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            result = panel.show(ctx, &PanelStats::default());
        });
        assert!(result.is_none());
    }

    #[test]
    fn untouched_visible_panel_does_not_commit() {
        let ctx = egui::Context::default();
        let mut panel = GalaxyPanel::new(true, GalaxyParams::default());
        let mut result = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            result = panel.show(ctx, &PanelStats::default());
        });
        assert!(result.is_none());
        assert_eq!(panel.draft(), &GalaxyParams::default());
    }
}
