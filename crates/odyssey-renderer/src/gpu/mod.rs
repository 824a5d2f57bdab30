mod context;
mod types;
mod uniforms;

pub use context::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_converts_to_explorer_error() {
        let err: odyssey_common::ExplorerError = RendererError::AdapterNotFound.into();
        assert!(matches!(err, odyssey_common::ExplorerError::Renderer(_)));
        assert_eq!(
            err.to_string(),
            "renderer error: no suitable GPU adapter found"
        );
    }

    #[test]
    fn physical_size_is_copy() {
        let size = PhysicalSize {
            width: 800,
            height: 600,
        };
        let copy = size;
        assert_eq!(copy, size);
    }
}
