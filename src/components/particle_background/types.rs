//! Discrete inputs the surrounding page supplies for each background zone.

use serde::Deserialize;

/// Color palette declared by a page zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZonePalette {
	/// Accent zone: red particles on the page background.
	#[default]
	Primary,
	/// Muted zone: dark particles on the card background.
	Neutral,
}

/// Direction the wave lines appear to scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
	#[default]
	/// Time runs forward through the wave field.
	Forward,
	/// Time runs backward, mirroring the scroll.
	Reverse,
}

impl FlowDirection {
	/// Sign applied to time before it enters the wave field.
	pub fn time_sign(self) -> f64 {
		match self {
			FlowDirection::Forward => 1.0,
			FlowDirection::Reverse => -1.0,
		}
	}
}

/// Light/dark display mode owned by the surrounding application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
	/// Light page backgrounds.
	Light,
	/// Dark page backgrounds.
	#[default]
	Dark,
}

impl DisplayMode {
	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			DisplayMode::Light => DisplayMode::Dark,
			DisplayMode::Dark => DisplayMode::Light,
		}
	}

	/// Value written to the document's `data-theme` attribute.
	pub fn as_str(self) -> &'static str {
		match self {
			DisplayMode::Light => "light",
			DisplayMode::Dark => "dark",
		}
	}
}

/// Every palette, for exhaustive iteration.
pub const ALL_ZONES: [ZonePalette; 2] = [ZonePalette::Primary, ZonePalette::Neutral];
/// Every flow direction.
pub const ALL_FLOWS: [FlowDirection; 2] = [FlowDirection::Forward, FlowDirection::Reverse];
/// Every display mode.
pub const ALL_MODES: [DisplayMode; 2] = [DisplayMode::Light, DisplayMode::Dark];
