//! Animated particle-field background.
//!
//! A fixed number of points drift across a viewport-sized canvas, bounce off
//! its edges, and are joined by faint lines whenever two of them come close:
//! - Per-frame motion with elastic edge reflection
//! - Proximity links with linear opacity falloff
//! - Explicit frame-scheduling and resize ports for headless testing
//!
//! # Example
//!
//! ```ignore
//! use portfolio::components::particle_field::{ParticleCanvas, Theme};
//!
//! view! { <ParticleCanvas theme=Theme::ember() /> }
//! ```

mod browser;
mod component;
mod field;
pub mod particles;
mod render;
pub mod surface;
pub mod theme;

pub use browser::{AnimationFrames, CanvasSurface, WindowResize};
pub use component::ParticleCanvas;
pub use field::{FrameHandle, FrameScheduler, ParticleField, Phase, ResizeEvents};
pub use surface::Surface;
pub use theme::{Color, ParticleStyle, Theme};
