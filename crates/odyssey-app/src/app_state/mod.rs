//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, scene generation, renderer, camera, and
//! the debug panel.

mod core;
mod debug_panel;
mod event_handler;
mod init;
mod input;
mod render;

pub use core::ExplorerApp;
