mod color;

pub use color::*;

/// A point or direction in world space.
pub type Vec3 = [f32; 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff5588").unwrap();
        assert_eq!(c, Color::from_rgba(255, 85, 136, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("222222").unwrap();
        assert_eq!(c, Color::from_rgba(34, 34, 34, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_to_hex_opaque() {
        let c = Color::from_rgba(255, 0, 128, 255);
        assert_eq!(c.to_hex(), "#ff0080");
    }

    #[test]
    fn color_to_hex_with_alpha() {
        let c = Color::from_rgba(255, 0, 128, 128);
        assert_eq!(c.to_hex(), "#ff008080");
    }

    #[test]
    fn srgb_f32_is_normalized() {
        let [r, g, b] = Color::from_rgba(255, 0, 51, 255).to_srgb_f32();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert!(srgb_to_linear(0.0).abs() < 1e-6);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        // Mid grey is darker in linear space.
        assert!(srgb_to_linear(0.5) < 0.25);
    }

    #[test]
    fn white_is_opaque() {
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn color_serialization() {
        let c = Color::from_rgba(1, 2, 3, 4);
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
