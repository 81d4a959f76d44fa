//! GUI input adapter for interactive exploration.
//!
//! Uses winit for the window and event loop, pixels for the framebuffer and
//! egui for the status overlay.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;
