//! Drawing surface abstraction.
//!
//! The particle field only ever issues write-only, immediate-mode commands,
//! so the browser canvas and the recording surface used in tests implement
//! the same small trait.

use super::theme::Color;

/// A rectangular, viewport-sized area that particles are drawn onto.
pub trait Surface {
	/// Current `(width, height)` in surface units.
	fn size(&self) -> (f64, f64);

	/// Resize the surface to match the current viewport.
	fn fit_to_viewport(&mut self);

	/// Clear the entire surface.
	fn clear(&mut self);

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color);
}
