//! Interactive page components.

pub mod counter;
pub mod navigation;
pub mod particle_field;
