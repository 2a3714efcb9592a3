//! Leptos component wrapping the particle background canvas.
//!
//! The component renders an absolutely positioned canvas that fills its parent.
//! Once the canvas exists an effect builds a [`Controller`] around it and mounts
//! it. The effect also tracks the display mode, so a mode change tears the
//! running instance down and mounts a freshly themed one. JS callbacks hold a
//! weak reference to the controller and do nothing once it is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, IntersectionObserver, IntersectionObserverEntry};

use super::canvas::{CanvasSurface, WebHost};
use super::config::RendererConfig;
use super::lifecycle::Controller;
use super::theme::{self, ThemeBundle};
use super::types::{DisplayMode, FlowDirection, ZonePalette};

type WebController = Controller<CanvasSurface, WebHost>;
type Slot = Rc<RefCell<Option<WebController>>>;

/// Animated wave-and-particle background for one page zone.
///
/// Place it as the first child of a `position: relative` container; it sizes
/// itself to that container and never intercepts pointer events.
#[component]
pub fn ParticleBackground(
	#[prop(optional)] zone: ZonePalette,
	#[prop(optional)] flow: FlowDirection,
	#[prop(into)] mode: Signal<DisplayMode>,
	#[prop(optional)] config: RendererConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let slot: Slot = Rc::new(RefCell::new(None));
	let slot_effect = slot.clone();

	Effect::new(move |_| {
		let mode = mode.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		teardown(&slot_effect);
		mount(&slot_effect, canvas, theme::resolve(zone, flow, mode), config.clone());
	});

	let slot_cleanup = StoredValue::new_local(slot);
	on_cleanup(move || {
		slot_cleanup.try_with_value(teardown);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			aria-hidden="true"
			style="position: absolute; inset: 0; pointer-events: none;"
		/>
	}
}

fn mount(slot: &Slot, canvas: HtmlCanvasElement, theme: ThemeBundle, config: RendererConfig) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(surface) = CanvasSurface::new(canvas) else {
		warn!("wave-backdrop: canvas has no 2d context, background disabled");
		return;
	};
	let container = surface.container();

	let weak = Rc::downgrade(slot);
	let on_frame = {
		let weak = weak.clone();
		Closure::new(move |now: f64| with_controller(&weak, |c| c.frame(now)))
	};
	let on_resize = {
		let weak = weak.clone();
		Closure::new(move || with_controller(&weak, |c| c.resize()))
	};
	let on_visibility = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
		let visible = entries
			.iter()
			.filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
			.last()
			.map(|entry| entry.is_intersecting());
		if let Some(visible) = visible {
			with_controller(&weak, |c| c.set_visible(visible));
		}
	});

	let host = WebHost::new(window, container, on_frame, on_resize, on_visibility);
	let mut controller = Controller::new(surface, host, theme, config, rng_seed());
	controller.mount();
	*slot.borrow_mut() = Some(controller);
}

fn with_controller(weak: &Weak<RefCell<Option<WebController>>>, f: impl FnOnce(&mut WebController)) {
	let Some(slot) = weak.upgrade() else {
		return;
	};
	let Ok(mut guard) = slot.try_borrow_mut() else {
		return;
	};
	if let Some(controller) = guard.as_mut() {
		f(controller);
	}
}

fn teardown(slot: &Slot) {
	let previous = slot.borrow_mut().take();
	if let Some(mut controller) = previous {
		controller.unmount();
	}
}

fn rng_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}
