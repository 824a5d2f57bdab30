//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use super::core::ExplorerApp;

impl ApplicationHandler for ExplorerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            self.fail(e);
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Poll);
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // The debug panel sees every event first; whatever it consumes
        // never reaches the camera or the key bindings.
        let consumed = match (&mut self.egui_state, &self.window) {
            (Some(state), Some(window)) => state.on_window_event(window, &event).consumed,
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.camera.set_viewport(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { ref event, .. } if !consumed => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if consumed {
                    self.pointer.pressed = false;
                } else {
                    self.handle_mouse_input(state, button);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if consumed {
                    self.pointer.last = Some((position.x, position.y));
                } else {
                    self.handle_cursor_moved(position.x, position.y);
                }
            }

            WindowEvent::MouseWheel { delta, .. } if !consumed => {
                self.handle_scroll(delta);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
                if self.should_exit {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::Poll);
        self.request_redraw();
    }
}

impl ExplorerApp {
    /// Drop GPU resources before the window goes away.
    pub(super) fn shutdown(&mut self) {
        tracing::info!(frames = self.timer.frames(), "Shutting down");
        self.egui_state = None;
        self.render_state = None;
        self.should_exit = true;
    }
}
