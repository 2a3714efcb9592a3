//! Browser implementations of [`Surface`], [`Painter`] and [`Host`].

use std::f64::consts::TAU;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, IntersectionObserver, Window};

use super::lifecycle::{FrameId, Host};
use super::render::{Painter, RadialGradient};
use super::surface::{Surface, SurfaceSize};
use super::theme::Color;

/// A canvas element and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// `None` when the canvas has no 2D context to give.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()??
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}

	/// The element the canvas fills and is sized against.
	pub fn container(&self) -> Option<Element> {
		self.canvas.parent_element()
	}
}

impl Surface for CanvasSurface {
	fn container_size(&self) -> Option<(f64, f64)> {
		let parent = self.canvas.parent_element()?;
		Some((parent.client_width() as f64, parent.client_height() as f64))
	}

	fn device_pixel_ratio(&self) -> f64 {
		web_sys::window()
			.map(|w| w.device_pixel_ratio())
			.unwrap_or(1.0)
	}

	fn apply(&mut self, size: &SurfaceSize) {
		self.canvas.set_width(size.backing_width());
		self.canvas.set_height(size.backing_height());
		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", size.width));
		let _ = style.set_property("height", &format!("{}px", size.height));
		let r = size.pixel_ratio;
		let _ = self.ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0);
	}
}

impl Painter for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn save(&mut self) {
		self.ctx.save();
	}

	fn restore(&mut self) {
		self.ctx.restore();
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ctx.move_to(x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ctx.line_to(x, y);
	}

	fn stroke(&mut self, color: Color, line_width: f64) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(line_width);
		self.ctx.stroke();
	}

	fn fill_glowing_disc(&mut self, x: f64, y: f64, radius: f64, fill: Color, glow: Color, blur: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.set_fill_style_str(&fill.to_css());
		self.ctx.set_shadow_color(&glow.to_css());
		self.ctx.set_shadow_blur(blur);
		self.ctx.fill();
	}

	fn fill_radial(&mut self, gradient: &RadialGradient, width: f64, height: f64) {
		let Ok(fill) = self.ctx.create_radial_gradient(
			gradient.cx,
			gradient.cy,
			gradient.inner_radius,
			gradient.cx,
			gradient.cy,
			gradient.outer_radius,
		) else {
			return;
		};
		let _ = fill.add_color_stop(0.0, &gradient.inner.to_css());
		let _ = fill.add_color_stop(1.0, &gradient.outer.to_css());

		#[allow(deprecated)]
		self.ctx.set_fill_style(&fill);
		self.ctx.fill_rect(0.0, 0.0, width, height);
	}
}

/// `requestAnimationFrame`, the window resize listener and the container's
/// intersection observer.
///
/// Owns the JS callbacks so they live exactly as long as the controller that
/// owns this host.
pub struct WebHost {
	window: Window,
	container: Option<Element>,
	on_frame: Closure<dyn FnMut(f64)>,
	on_resize: Closure<dyn FnMut()>,
	on_visibility: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
	observer: Option<IntersectionObserver>,
	resize_attached: bool,
}

impl WebHost {
	pub fn new(
		window: Window,
		container: Option<Element>,
		on_frame: Closure<dyn FnMut(f64)>,
		on_resize: Closure<dyn FnMut()>,
		on_visibility: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
	) -> Self {
		Self {
			window,
			container,
			on_frame,
			on_resize,
			on_visibility,
			observer: None,
			resize_attached: false,
		}
	}
}

impl Host for WebHost {
	fn request_frame(&mut self) -> Option<FrameId> {
		self.window
			.request_animation_frame(self.on_frame.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, id: FrameId) {
		let _ = self.window.cancel_animation_frame(id);
	}

	fn attach_listeners(&mut self, observe_visibility: bool) {
		if !self.resize_attached {
			let _ = self
				.window
				.add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
			self.resize_attached = true;
		}

		if !observe_visibility || self.observer.is_some() {
			return;
		}
		let Some(container) = &self.container else {
			return;
		};
		match IntersectionObserver::new(self.on_visibility.as_ref().unchecked_ref()) {
			Ok(observer) => {
				observer.observe(container);
				self.observer = Some(observer);
			}
			Err(e) => warn!("wave-backdrop: intersection observer unavailable: {:?}", e),
		}
	}

	fn detach_listeners(&mut self) {
		if self.resize_attached {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
			self.resize_attached = false;
		}
		if let Some(observer) = self.observer.take() {
			observer.disconnect();
		}
	}
}
