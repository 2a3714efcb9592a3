//! In-memory stand-ins for the canvas and the browser, used by unit tests.

use super::lifecycle::{FrameId, Host};
use super::render::{Painter, RadialGradient};
use super::surface::{Surface, SurfaceSize};
use super::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
	Clear(f64, f64),
	Save,
	Restore,
	BeginPath,
	MoveTo(f64, f64),
	LineTo(f64, f64),
	Stroke {
		color: Color,
		width: f64,
	},
	Disc {
		x: f64,
		y: f64,
		radius: f64,
		fill: Color,
		glow: Color,
		blur: f64,
	},
	Radial(RadialGradient),
}

/// Painter that records every call.
#[derive(Debug, Default)]
pub struct RecordingPainter {
	pub ops: Vec<Op>,
}

impl RecordingPainter {
	pub fn discs(&self) -> usize {
		self.ops.iter().filter(|op| matches!(op, Op::Disc { .. })).count()
	}

	pub fn disc_centers(&self) -> Vec<(f64, f64)> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				Op::Disc { x, y, .. } => Some((*x, *y)),
				_ => None,
			})
			.collect()
	}

	pub fn strokes(&self) -> Vec<(Color, f64)> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				Op::Stroke { color, width } => Some((*color, *width)),
				_ => None,
			})
			.collect()
	}

	pub fn line_tos(&self) -> usize {
		self.ops.iter().filter(|op| matches!(op, Op::LineTo(..))).count()
	}

	pub fn clears(&self) -> usize {
		self.ops.iter().filter(|op| matches!(op, Op::Clear(..))).count()
	}
}

impl Painter for RecordingPainter {
	fn clear(&mut self, width: f64, height: f64) {
		self.ops.push(Op::Clear(width, height));
	}

	fn save(&mut self) {
		self.ops.push(Op::Save);
	}

	fn restore(&mut self) {
		self.ops.push(Op::Restore);
	}

	fn begin_path(&mut self) {
		self.ops.push(Op::BeginPath);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ops.push(Op::MoveTo(x, y));
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ops.push(Op::LineTo(x, y));
	}

	fn stroke(&mut self, color: Color, line_width: f64) {
		self.ops.push(Op::Stroke {
			color,
			width: line_width,
		});
	}

	fn fill_glowing_disc(&mut self, x: f64, y: f64, radius: f64, fill: Color, glow: Color, blur: f64) {
		self.ops.push(Op::Disc {
			x,
			y,
			radius,
			fill,
			glow,
			blur,
		});
	}

	fn fill_radial(&mut self, gradient: &RadialGradient, _width: f64, _height: f64) {
		self.ops.push(Op::Radial(*gradient));
	}
}

/// Canvas plus container with a settable content box.
#[derive(Debug, Default)]
pub struct FakeSurface {
	pub container: Option<(f64, f64)>,
	pub device_ratio: f64,
	pub applied: Vec<SurfaceSize>,
	pub painter: RecordingPainter,
}

impl FakeSurface {
	pub fn new(width: f64, height: f64, device_ratio: f64) -> Self {
		Self {
			container: Some((width, height)),
			device_ratio,
			..Self::default()
		}
	}

	pub fn detached() -> Self {
		Self {
			container: None,
			device_ratio: 1.0,
			..Self::default()
		}
	}
}

impl Surface for FakeSurface {
	fn container_size(&self) -> Option<(f64, f64)> {
		self.container
	}

	fn device_pixel_ratio(&self) -> f64 {
		self.device_ratio
	}

	fn apply(&mut self, size: &SurfaceSize) {
		self.applied.push(*size);
	}
}

impl Painter for FakeSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.painter.clear(width, height);
	}

	fn save(&mut self) {
		self.painter.save();
	}

	fn restore(&mut self) {
		self.painter.restore();
	}

	fn begin_path(&mut self) {
		self.painter.begin_path();
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.painter.move_to(x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.painter.line_to(x, y);
	}

	fn stroke(&mut self, color: Color, line_width: f64) {
		self.painter.stroke(color, line_width);
	}

	fn fill_glowing_disc(&mut self, x: f64, y: f64, radius: f64, fill: Color, glow: Color, blur: f64) {
		self.painter.fill_glowing_disc(x, y, radius, fill, glow, blur);
	}

	fn fill_radial(&mut self, gradient: &RadialGradient, width: f64, height: f64) {
		self.painter.fill_radial(gradient, width, height);
	}
}

/// Frame scheduler and listener registry that only counts.
#[derive(Debug, Default)]
pub struct FakeHost {
	pub pending: Vec<FrameId>,
	pub requested: usize,
	pub resize_listener: bool,
	pub visibility_observer: bool,
	next_id: FrameId,
}

impl FakeHost {
	pub fn listeners(&self) -> usize {
		usize::from(self.resize_listener) + usize::from(self.visibility_observer)
	}

	/// Marks `id` as delivered, the way the browser forgets a fired callback.
	pub fn deliver(&mut self, id: FrameId) {
		self.pending.retain(|&p| p != id);
	}
}

impl Host for FakeHost {
	fn request_frame(&mut self) -> Option<FrameId> {
		self.next_id += 1;
		self.requested += 1;
		self.pending.push(self.next_id);
		Some(self.next_id)
	}

	fn cancel_frame(&mut self, id: FrameId) {
		self.pending.retain(|&p| p != id);
	}

	fn attach_listeners(&mut self, observe_visibility: bool) {
		self.resize_listener = true;
		self.visibility_observer = observe_visibility;
	}

	fn detach_listeners(&mut self) {
		self.resize_listener = false;
		self.visibility_observer = false;
	}
}
