//! Reusable Widgets
//!
//! Small widgets shared by the tally panels.

pub mod field;

pub use field::Field;
