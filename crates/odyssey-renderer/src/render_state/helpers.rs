use odyssey_common::Color;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Linear clear color for an sRGB surface; unparseable hex gives black.
pub(crate) fn clear_color(hex: &str) -> wgpu::Color {
    let [r, g, b] = Color::from_hex(hex)
        .map(|c| c.to_linear_f32())
        .unwrap_or([0.0; 3]);
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: 1.0,
    }
}

/// Ambient light as a texture multiplier: the color's display value times
/// intensity, so `#404040 × 5` brightens textures by 1.25.
pub(crate) fn ambient_light(hex: &str, intensity: f32) -> [f32; 3] {
    Color::from_hex(hex)
        .unwrap_or(Color::WHITE)
        .to_srgb_f32()
        .map(|c| c * intensity.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ambient_brightens_by_a_quarter() {
        let [r, g, b] = ambient_light("#404040", 5.0);
        assert!((r - 1.2549).abs() < 1e-3);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn clear_color_is_linearized() {
        let c = clear_color("#222222");
        assert!(c.r > 0.0 && c.r < 0.133);
        assert_eq!(c.a, 1.0);
        assert_eq!(clear_color("bogus").r, 0.0);
    }
}
