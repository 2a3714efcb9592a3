//! App-wide light/dark display mode.
//!
//! The mode lives in a context so every background zone follows the same
//! toggle. It is mirrored onto the document's `data-theme` attribute for the
//! stylesheet.

use leptos::prelude::*;
use log::{debug, warn};

use super::particle_background::DisplayMode;

/// Shared handle to the current display mode.
#[derive(Clone, Copy, Debug)]
pub struct DisplayModeContext {
	mode: RwSignal<DisplayMode>,
}

impl DisplayModeContext {
	/// A context starting in `initial`, not yet provided.
	pub fn new(initial: DisplayMode) -> Self {
		Self {
			mode: RwSignal::new(initial),
		}
	}

	/// Read-only view, suitable for a component's `mode` prop.
	pub fn signal(&self) -> Signal<DisplayMode> {
		self.mode.into()
	}

	/// Switches between light and dark.
	pub fn toggle(&self) {
		self.mode.update(|m| *m = m.toggled());
	}
}

/// Provides the display mode context and keeps `data-theme` in sync with it.
pub fn provide_display_mode(initial: DisplayMode) -> DisplayModeContext {
	let ctx = DisplayModeContext::new(initial);
	provide_context(ctx);

	let mode = ctx.mode;
	Effect::new(move |_| {
		let mode = mode.get();
		let root = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element());
		if let Some(root) = root {
			let _ = root.set_attribute("data-theme", mode.as_str());
			debug!("wave-backdrop: display mode {}", mode.as_str());
		}
	});

	ctx
}

/// The nearest display mode context, or a detached dark-mode one when the app
/// never provided it.
pub fn use_display_mode() -> DisplayModeContext {
	use_context::<DisplayModeContext>().unwrap_or_else(|| {
		warn!("wave-backdrop: no display mode provided, defaulting to dark");
		DisplayModeContext::new(DisplayMode::default())
	})
}
