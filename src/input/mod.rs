//! Input adapters for the Burning Ship explorer.
//!
//! Adapters receive input from a source and translate it into view state
//! changes and render requests.

#[cfg(feature = "gui")]
pub mod gui;
