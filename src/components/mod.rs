//! UI components.

pub mod mode;
pub mod particle_background;
