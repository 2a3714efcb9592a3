//! Drawing surface sizing.
//!
//! The backing store is `size x ratio` device pixels, the element is displayed
//! at `size` CSS pixels, and a base scale transform lets every draw call work in
//! CSS pixels.

use super::config::SurfaceConfig;

/// Current size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
	/// Displayed width in CSS pixels.
	pub width: f64,
	/// Displayed height in CSS pixels.
	pub height: f64,
	/// Device pixels per CSS pixel in the backing store.
	pub pixel_ratio: f64,
}

impl Default for SurfaceSize {
	fn default() -> Self {
		Self {
			width: 0.0,
			height: 0.0,
			pixel_ratio: 1.0,
		}
	}
}

impl SurfaceSize {
	/// Sizes a surface for a `width` x `height` container, capping the device
	/// ratio at `max_ratio` when one is given.
	pub fn measure(width: f64, height: f64, device_ratio: f64, max_ratio: Option<f64>) -> Self {
		let ratio = if device_ratio.is_finite() && device_ratio > 0.0 {
			device_ratio
		} else {
			1.0
		};
		let pixel_ratio = match max_ratio {
			Some(max) if max > 0.0 => ratio.min(max),
			_ => ratio,
		};
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
			pixel_ratio,
		}
	}

	/// Backing store width in device pixels.
	pub fn backing_width(&self) -> u32 {
		(self.width * self.pixel_ratio) as u32
	}

	/// Backing store height in device pixels.
	pub fn backing_height(&self) -> u32 {
		(self.height * self.pixel_ratio) as u32
	}
}

/// Host-side view of the canvas and the container it fills.
pub trait Surface {
	/// Content box of the host container in CSS pixels, `None` once detached.
	fn container_size(&self) -> Option<(f64, f64)>;
	/// Device pixels per CSS pixel.
	fn device_pixel_ratio(&self) -> f64;
	/// Writes backing size, display size and base transform.
	fn apply(&mut self, size: &SurfaceSize);
}

/// Re-measures the container and resizes the surface to match.
///
/// Returns `None` without touching the surface when there is no container to
/// size against.
pub fn resize<S: Surface + ?Sized>(surface: &mut S, config: &SurfaceConfig) -> Option<SurfaceSize> {
	let (width, height) = surface.container_size()?;
	let size = SurfaceSize::measure(width, height, surface.device_pixel_ratio(), config.max_pixel_ratio);
	surface.apply(&size);
	Some(size)
}
