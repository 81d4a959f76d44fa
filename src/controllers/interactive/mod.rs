//! Interactive controller for real-time Burning Ship rendering.
//!
//! A worker thread owns the fractal engine. View states submitted by the
//! input layer replace any pending request, stale passes are cancelled
//! between iteration steps, and finished frames are pushed to a presenter
//! port.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
