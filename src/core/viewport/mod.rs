//! Mapping between canvas pixels and the complex plane.
//!
//! Everything here is a pure function of the view state (origin and zoom)
//! and the canvas size.

pub mod bounds_for;
pub mod errors;
pub mod pixel_to_complex;
pub mod recenter_on_zoom;
pub mod view_state;
pub mod zoom;
