//! Animated particle-and-wave background.
//!
//! Paints a canvas behind a page zone with:
//! - A fan of procedurally animated wave lines
//! - Particles that either ride those lines or drift in a damped random walk
//! - Optional proximity lines between nearby particles
//! - A radial vignette over everything
//!
//! Each zone picks a palette and a flow direction; the display mode comes from
//! the app. The loop pauses while the zone is scrolled out of view and reseeds
//! on viewport resize.
//!
//! # Example
//!
//! ```ignore
//! use wave_backdrop::{DisplayMode, FlowDirection, ParticleBackground, ZonePalette};
//!
//! let mode = RwSignal::new(DisplayMode::Dark);
//!
//! view! {
//!     <div style="position: relative; overflow: hidden;">
//!         <ParticleBackground zone=ZonePalette::Neutral flow=FlowDirection::Reverse mode=mode />
//!         <AboutSection />
//!     </div>
//! }
//! ```

mod canvas;
mod component;
pub mod config;
pub mod lifecycle;
pub mod motion;
pub mod particles;
pub mod render;
pub mod surface;
#[cfg(test)]
mod testing;
pub mod theme;
mod types;
pub mod wave;

pub use component::ParticleBackground;
pub use config::RendererConfig;
pub use theme::{ThemeBundle, resolve};
pub use types::{ALL_FLOWS, ALL_MODES, ALL_ZONES, DisplayMode, FlowDirection, ZonePalette};
