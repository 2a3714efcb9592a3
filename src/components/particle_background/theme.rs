//! Zone theming for the background renderer.
//!
//! [`resolve`] maps the three discrete zone inputs to an immutable
//! [`ThemeBundle`]. The draw pipeline only ever reads the bundle, so simulation
//! and drawing code never branch on zone, mode, or direction themselves.

use super::types::{DisplayMode, FlowDirection, ZonePalette};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque black.
	pub const BLACK: Color = Color::rgb(0, 0, 0);

	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, new alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors. Channels truncate toward zero.
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	/// CSS color string for canvas styles.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Two-stop color ramp indexed by a wave line's position in the set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRamp {
	/// Color of the first line.
	pub start: Color,
	/// Color of the last line.
	pub end: Color,
}

impl ColorRamp {
	/// Ramp that never changes color.
	pub const fn solid(color: Color) -> Self {
		Self {
			start: color,
			end: color,
		}
	}

	/// Color at `progress` in `[0, 1]`.
	pub fn at(&self, progress: f64) -> Color {
		self.start.lerp(self.end, progress)
	}
}

/// Everything the draw pipeline needs to paint one zone.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
	/// Alpha of the first wave line.
	pub wave_base_alpha: f64,
	/// Alpha added across the set, reached by the last line.
	pub wave_alpha_range: f64,
	/// Wave line hue across the set.
	pub wave_ramp: ColorRamp,
	/// Disc fill.
	pub particle_fill: Color,
	/// Disc shadow.
	pub particle_glow: Color,
	/// Vignette color at the center.
	pub vignette_inner: Color,
	/// Vignette color at the rim.
	pub vignette_outer: Color,
	/// Connector hue; alpha comes from [`connector_alpha`].
	pub connector: Color,
	/// Direction the zone's waves scroll.
	pub flow: FlowDirection,
}

impl ThemeBundle {
	/// Stroke color of a wave line at `progress` in `[0, 1]` across the set.
	pub fn wave_color(&self, progress: f64) -> Color {
		let alpha = self.wave_base_alpha + progress * self.wave_alpha_range;
		self.wave_ramp.at(progress).with_alpha(alpha)
	}

	/// Stroke color of a connector between particles `distance` apart, or
	/// `None` once the pair is at or beyond `threshold`.
	pub fn connector_color(&self, distance: f64, threshold: f64, max_alpha: f64) -> Option<Color> {
		let alpha = connector_alpha(distance, threshold, max_alpha);
		(alpha > 0.0).then(|| self.connector.with_alpha(alpha))
	}
}

/// Connector alpha: `max_alpha` at zero distance, falling linearly to exactly
/// zero at `threshold`.
pub fn connector_alpha(distance: f64, threshold: f64, max_alpha: f64) -> f64 {
	if threshold <= 0.0 || distance >= threshold {
		return 0.0;
	}
	max_alpha * (1.0 - distance / threshold)
}

/// Resolves the theme bundle for a zone.
///
/// Dark mode puts red particles on the black primary zones and black particles
/// on the maroon neutral zones. Light mode flips that: dark grey particles on the
/// white primary zones, red particles on the grey neutral zones.
pub fn resolve(zone: ZonePalette, flow: FlowDirection, mode: DisplayMode) -> ThemeBundle {
	match (mode, zone) {
		(DisplayMode::Dark, ZonePalette::Primary) => ThemeBundle {
			wave_base_alpha: 0.32,
			wave_alpha_range: 0.18,
			wave_ramp: ColorRamp {
				start: Color::rgb(150, 0, 0),
				end: Color::rgb(255, 0, 0),
			},
			particle_fill: Color::rgb(255, 0, 0),
			particle_glow: Color::rgb(255, 0, 0),
			vignette_inner: Color::rgba(40, 0, 0, 0.08),
			vignette_outer: Color::rgba(0, 0, 0, 0.25),
			connector: Color::rgb(255, 0, 0),
			flow,
		},
		(DisplayMode::Dark, ZonePalette::Neutral) => ThemeBundle {
			wave_base_alpha: 0.25,
			wave_alpha_range: 0.25,
			wave_ramp: ColorRamp::solid(Color::BLACK),
			particle_fill: Color::rgba(0, 0, 0, 0.7),
			particle_glow: Color::rgba(0, 0, 0, 0.5),
			vignette_inner: Color::rgba(0, 0, 0, 0.03),
			vignette_outer: Color::rgba(0, 0, 0, 0.15),
			connector: Color::BLACK,
			flow,
		},
		(DisplayMode::Light, ZonePalette::Primary) => ThemeBundle {
			wave_base_alpha: 0.15,
			wave_alpha_range: 0.15,
			wave_ramp: ColorRamp::solid(Color::BLACK),
			particle_fill: Color::rgba(0, 0, 0, 0.5),
			particle_glow: Color::rgba(0, 0, 0, 0.3),
			vignette_inner: Color::rgba(0, 0, 0, 0.02),
			vignette_outer: Color::rgba(0, 0, 0, 0.08),
			connector: Color::BLACK,
			flow,
		},
		(DisplayMode::Light, ZonePalette::Neutral) => ThemeBundle {
			wave_base_alpha: 0.2,
			wave_alpha_range: 0.15,
			wave_ramp: ColorRamp {
				start: Color::rgb(150, 0, 0),
				end: Color::rgb(205, 0, 0),
			},
			particle_fill: Color::rgb(204, 0, 0),
			particle_glow: Color::rgba(200, 0, 0, 0.4),
			vignette_inner: Color::rgba(0, 0, 0, 0.01),
			vignette_outer: Color::rgba(0, 0, 0, 0.06),
			connector: Color::rgb(200, 0, 0),
			flow,
		},
	}
}
