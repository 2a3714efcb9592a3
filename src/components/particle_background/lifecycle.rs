//! Frame loop and lifecycle of one background instance.
//!
//! ```text
//! Uninitialized --mount--> Running <--visibility--> Paused
//!                             \                       /
//!                              +------unmount--------+--> TornDown
//! ```
//!
//! The controller owns every piece of mutable animation state. The browser side
//! is reduced to the [`Surface`] it sizes, the [`Painter`] it draws with, and the
//! [`Host`] that schedules frames and holds event listeners, so the whole state
//! machine runs synchronously under test.

use log::{debug, info};

use super::config::{PauseStrategy, RendererConfig};
use super::motion;
use super::particles::ParticleStore;
use super::render::{self, Painter};
use super::surface::{self, Surface, SurfaceSize};
use super::theme::ThemeBundle;
use super::wave::WaveField;

/// Handle of a scheduled animation frame.
pub type FrameId = i32;

/// Browser services the controller drives.
pub trait Host {
	/// Schedules one call to the frame callback. `None` if scheduling failed.
	fn request_frame(&mut self) -> Option<FrameId>;
	/// Cancels a frame scheduled by `request_frame`.
	fn cancel_frame(&mut self, id: FrameId);
	/// Registers the viewport resize listener and, if asked, the visibility
	/// observer on the host container.
	fn attach_listeners(&mut self, observe_visibility: bool);
	/// Releases everything `attach_listeners` registered.
	fn detach_listeners(&mut self);
}

/// Where a controller is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
	/// Built, not mounted.
	Uninitialized,
	/// Drawing every frame.
	Running,
	/// Off-screen.
	Paused,
	/// Unmounted. Terminal.
	TornDown,
}

/// One mounted background: surface, particles, theme and frame loop.
pub struct Controller<S: Surface + Painter, H: Host> {
	surface: S,
	host: H,
	config: RendererConfig,
	theme: ThemeBundle,
	store: ParticleStore,
	size: SurfaceSize,
	state: LifecycleState,
	pending: Option<FrameId>,
	frames_drawn: u64,
}

impl<S: Surface + Painter, H: Host> Controller<S, H> {
	/// Controller over `surface` and `host`. The configuration is sanitized.
	pub fn new(surface: S, host: H, theme: ThemeBundle, config: RendererConfig, rng_seed: u64) -> Self {
		Self {
			surface,
			host,
			config: config.sanitized(),
			theme,
			store: ParticleStore::new(rng_seed),
			size: SurfaceSize::default(),
			state: LifecycleState::Uninitialized,
			pending: None,
			frames_drawn: 0,
		}
	}

	/// Current lifecycle state.
	pub fn state(&self) -> LifecycleState {
		self.state
	}

	/// Frame currently scheduled, if any.
	pub fn pending_frame(&self) -> Option<FrameId> {
		self.pending
	}

	/// Last measured surface size.
	pub fn size(&self) -> SurfaceSize {
		self.size
	}

	/// The particle population.
	pub fn store(&self) -> &ParticleStore {
		&self.store
	}

	/// Frames rendered since mount.
	pub fn frames_drawn(&self) -> u64 {
		self.frames_drawn
	}

	/// Sizes the surface, seeds particles, registers listeners and starts the loop.
	pub fn mount(&mut self) {
		if self.state != LifecycleState::Uninitialized {
			return;
		}
		self.resize_surface();
		self.store.seed(self.size.width, self.size.height, &self.config);
		self.host.attach_listeners(self.config.lifecycle.observe_visibility);
		self.state = LifecycleState::Running;
		self.start_loop();
		info!(
			"wave-backdrop: mounted {}x{} @{}x with {} particles",
			self.size.width,
			self.size.height,
			self.size.pixel_ratio,
			self.store.len()
		);
	}

	/// Visibility observer callback: pause while the container is off-screen.
	pub fn set_visible(&mut self, visible: bool) {
		if !self.config.lifecycle.observe_visibility {
			return;
		}
		match (self.state, visible) {
			(LifecycleState::Running, false) => {
				self.state = LifecycleState::Paused;
				if self.config.lifecycle.pause == PauseStrategy::Stop {
					self.stop_loop();
				}
				debug!("wave-backdrop: paused");
			}
			(LifecycleState::Paused, true) => {
				self.state = LifecycleState::Running;
				self.start_loop();
				debug!("wave-backdrop: resumed");
			}
			_ => {}
		}
	}

	/// Viewport resize: re-measure and reseed from scratch.
	pub fn resize(&mut self) {
		if !matches!(self.state, LifecycleState::Running | LifecycleState::Paused) {
			return;
		}
		self.resize_surface();
		self.store.seed(self.size.width, self.size.height, &self.config);
		debug!(
			"wave-backdrop: resized to {}x{}, {} particles",
			self.size.width,
			self.size.height,
			self.store.len()
		);
	}

	/// Frame callback. Draws the current state, then advances it one tick.
	pub fn frame(&mut self, now_ms: f64) {
		self.pending = None;
		match self.state {
			LifecycleState::Running => {
				self.start_loop();
				let time = self.config.frame_time(now_ms);
				let field = WaveField::new(&self.config.wave, self.store.height(), self.theme.flow);
				render::render(&mut self.surface, &self.store, &field, &self.theme, &self.config, time);
				motion::advance(&mut self.store, &field, time, &self.config.motion);
				self.frames_drawn += 1;
			}
			LifecycleState::Paused if self.config.lifecycle.pause == PauseStrategy::Idle => {
				self.start_loop();
			}
			_ => {}
		}
	}

	/// Cancels the pending frame and releases every listener. Terminal.
	pub fn unmount(&mut self) {
		if self.state == LifecycleState::TornDown {
			return;
		}
		self.stop_loop();
		if self.state != LifecycleState::Uninitialized {
			self.host.detach_listeners();
		}
		self.state = LifecycleState::TornDown;
		debug!("wave-backdrop: unmounted after {} frames", self.frames_drawn);
	}

	fn resize_surface(&mut self) {
		match surface::resize(&mut self.surface, &self.config.surface) {
			Some(size) => self.size = size,
			None => debug!("wave-backdrop: no container to size against"),
		}
	}

	fn start_loop(&mut self) {
		if self.pending.is_none() {
			self.pending = self.host.request_frame();
		}
	}

	fn stop_loop(&mut self) {
		if let Some(id) = self.pending.take() {
			self.host.cancel_frame(id);
		}
	}
}

impl<S: Surface + Painter, H: Host> Drop for Controller<S, H> {
	fn drop(&mut self) {
		self.unmount();
	}
}
