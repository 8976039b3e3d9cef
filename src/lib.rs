//! Rotation matrices for wrist movements (SO(2)) and free 3D rotation (SO(3)),
//! with the slider model, figures and SVG output of the interactive visualizer.

pub mod types;
pub mod kinematics;
pub mod movement;
pub mod render;
pub mod session;

pub use types::*;
