//! wave-backdrop: animated particle-and-wave backgrounds for portfolio page zones.
//!
//! This crate provides a WASM canvas component that paints a themed wave field
//! with drifting particles behind each section of a page, plus a demo app that
//! stacks several zones with alternating palettes and flow directions.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::mode::{DisplayModeContext, provide_display_mode, use_display_mode};
pub use components::particle_background::{
	DisplayMode, FlowDirection, ParticleBackground, RendererConfig, ZonePalette,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("wave-backdrop: logging initialized");
}

/// Load a renderer configuration override from a JSON script element.
/// Missing fields keep their defaults.
fn load_config(id: &str) -> Option<RendererConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<RendererConfig>(&json_text) {
		Ok(config) => {
			info!("wave-backdrop: loaded config override from #{}", id);
			Some(config.sanitized())
		}
		Err(e) => {
			warn!("wave-backdrop: failed to parse #{}: {}", id, e);
			None
		}
	}
}

/// Page zones below the hero: palette, flow direction, heading.
const ZONES: [(ZonePalette, FlowDirection, &str); 4] = [
	(ZonePalette::Neutral, FlowDirection::Reverse, "About & Projects"),
	(ZonePalette::Primary, FlowDirection::Forward, "Skills"),
	(ZonePalette::Neutral, FlowDirection::Reverse, "Experience"),
	(ZonePalette::Primary, FlowDirection::Forward, "Contact"),
];

/// Switches the app between light and dark mode.
#[component]
pub fn ModeToggle() -> impl IntoView {
	let display = use_display_mode();
	let mode = display.signal();

	view! {
		<button class="mode-toggle" on:click=move |_| display.toggle()>
			{move || match mode.get() {
				DisplayMode::Dark => "Light mode",
				DisplayMode::Light => "Dark mode",
			}}
		</button>
	}
}

/// Main application component.
/// Stacks a hero and several themed zones, each with its own background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let mode = provide_display_mode(DisplayMode::Dark).signal();
	let hero = load_config("hero-background-config").unwrap_or_else(RendererConfig::hero);
	let section = load_config("background-config").unwrap_or_else(RendererConfig::section);

	let zones = ZONES
		.into_iter()
		.map(|(zone, flow, title)| {
			view! {
				<section class="zone" style="position: relative; overflow: hidden; min-height: 100vh;">
					<ParticleBackground zone=zone flow=flow mode=mode config=section.clone() />
					<h2>{title}</h2>
				</section>
			}
		})
		.collect_view();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ModeToggle />
		<main>
			<section class="zone hero" style="position: relative; overflow: hidden; min-height: 100vh;">
				<ParticleBackground zone=ZonePalette::Primary flow=FlowDirection::Forward mode=mode config=hero />
				<h1>"Portfolio"</h1>
			</section>
			{zones}
		</main>
	}
}
