//! Tunable constants for the background renderer.
//!
//! Every number that shapes the animation lives here so that the two shipped
//! variants differ only in configuration:
//!
//! - [`RendererConfig::section`]: zone backgrounds behind page sections. Density
//!   follows surface height, the loop pauses while the zone is off-screen, and
//!   the device pixel ratio is capped at 2.
//! - [`RendererConfig::hero`]: the landing hero. A fixed population with
//!   proximity connector lines, no visibility observer, and no DPR cap.
//!
//! All structs deserialize with `#[serde(default)]`, so a JSON override only
//! needs to name the fields it changes.

use log::warn;
use serde::Deserialize;

/// Hard ceiling on `DensityConfig::max_particles`. Connectors cost O(n²) per frame.
pub const PARTICLE_CEILING: usize = 2000;

/// Drawing surface sizing.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
	/// Upper bound on the device pixel ratio used for the backing store.
	/// `None` uses the device ratio as reported.
	pub max_pixel_ratio: Option<f64>,
}

impl Default for SurfaceConfig {
	fn default() -> Self {
		Self {
			max_pixel_ratio: Some(2.0),
		}
	}
}

/// Population sizing.
///
/// `count = min(max_particles, max(floor, round(height / reference_height * per_reference)))`, with
/// the narrow pair of constants used below `narrow_breakpoint`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
	/// Surface height the density constants are expressed against.
	pub reference_height: f64,
	/// Particles per `reference_height` on wide surfaces.
	pub per_reference: f64,
	/// Minimum population on wide surfaces.
	pub floor: usize,
	/// Surfaces narrower than this (CSS pixels) use the narrow constants.
	pub narrow_breakpoint: f64,
	/// Narrow-surface counterpart of `per_reference`.
	pub narrow_per_reference: f64,
	/// Narrow-surface counterpart of `floor`.
	pub narrow_floor: usize,
	/// Upper bound on the population, whatever the surface size.
	pub max_particles: usize,
	/// Share of the population that follows the wave lines.
	pub wave_fraction: f64,
	/// Top of the band wave particles are seeded into, as a fraction of height.
	pub band_top: f64,
	/// Height of that band as a fraction of height.
	pub band_span: f64,
}

impl Default for DensityConfig {
	fn default() -> Self {
		Self {
			reference_height: 900.0,
			per_reference: 49.0,
			floor: 28,
			narrow_breakpoint: 768.0,
			narrow_per_reference: 30.0,
			narrow_floor: 15,
			max_particles: 600,
			wave_fraction: 0.6,
			band_top: 0.35,
			band_span: 0.3,
		}
	}
}

/// Per-particle attribute ranges, sampled uniformly at seed time.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	/// Smallest disc radius.
	pub radius_min: f64,
	/// Radii lie in `[radius_min, radius_min + radius_range)`.
	pub radius_range: f64,
	/// Initial velocity components lie in `[-speed / 2, speed / 2)`.
	pub speed: f64,
	/// Smallest glow blur.
	pub glow_min: f64,
	/// Glow blurs lie in `[glow_min, glow_min + glow_range)`.
	pub glow_range: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			radius_min: 1.5,
			radius_range: 2.5,
			speed: 0.15,
			glow_min: 8.0,
			glow_range: 7.0,
		}
	}
}

/// Shape of the procedural wave lines.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
	/// Number of wave lines.
	pub lines: usize,
	/// Seconds per full oscillation of the time argument.
	pub cycle_secs: f64,
	/// Horizontal sampling step when stroking a line (CSS pixels).
	pub sample_step: f64,
	/// Vertical center of the band as a fraction of height.
	pub center: f64,
	/// Half-height of the band as a fraction of height.
	pub band: f64,
	/// Horizontal frequency of the first line (radians per pixel).
	pub base_frequency: f64,
	/// Frequency added per line index.
	pub frequency_step: f64,
	/// Amplitude of the first line as a fraction of the band.
	pub base_amplitude: f64,
	/// Amplitude added per line index.
	pub amplitude_step: f64,
	/// Phase offset added per line index.
	pub phase_step: f64,
	/// Stroke width of the first line.
	pub line_width: f64,
	/// Extra width added across the set, reached by the last line.
	pub line_width_range: f64,
}

impl Default for WaveConfig {
	fn default() -> Self {
		Self {
			lines: 7,
			cycle_secs: 7.0,
			sample_step: 3.0,
			center: 0.5,
			band: 0.15,
			base_frequency: 0.002,
			frequency_step: 0.0003,
			base_amplitude: 0.6,
			amplitude_step: 0.06,
			phase_step: 0.4,
			line_width: 1.5,
			line_width_range: 0.5,
		}
	}
}

/// Per-tick motion constants.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
	/// Fraction of the remaining distance to the wave target covered per tick.
	pub ease: f64,
	/// Amplitude of the per-particle bob around the wave line.
	pub bob_amplitude: f64,
	/// Time multiplier of the bob.
	pub bob_speed: f64,
	/// Multiplier applied to a wave particle's `vx` every tick.
	pub drift_decay: f64,
	/// Ambient velocity perturbation per axis lies in `[-jitter / 2, jitter / 2)`.
	pub jitter: f64,
	/// Multiplier applied to ambient velocity every tick.
	pub damping: f64,
	/// Per-axis ambient speed limit.
	pub max_speed: f64,
	/// Distance beyond each edge at which particles wrap to the other side.
	pub margin: f64,
}

impl Default for MotionConfig {
	fn default() -> Self {
		Self {
			ease: 0.008,
			bob_amplitude: 20.0,
			bob_speed: 0.5,
			drift_decay: 0.995,
			jitter: 0.02,
			damping: 0.99,
			max_speed: 0.3,
			margin: 10.0,
		}
	}
}

/// Proximity lines between nearby particles.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
	/// Draw connector lines at all.
	pub enabled: bool,
	/// Pairs closer than this (CSS pixels) are connected.
	pub distance: f64,
	/// Alpha of a connector between coincident particles.
	pub max_alpha: f64,
	/// Stroke width of a connector.
	pub line_width: f64,
}

impl Default for ConnectorConfig {
	fn default() -> Self {
		Self {
			enabled: false,
			distance: 135.0,
			max_alpha: 0.15,
			line_width: 0.5,
		}
	}
}

/// Radial vignette extents.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VignetteConfig {
	/// Inner radius as a fraction of the shorter surface dimension.
	pub inner: f64,
	/// Outer radius as a fraction of the longer surface dimension.
	pub outer: f64,
}

impl Default for VignetteConfig {
	fn default() -> Self {
		Self {
			inner: 0.1,
			outer: 0.75,
		}
	}
}

/// What the frame loop does while the host container is off-screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseStrategy {
	/// Cancel the pending frame; resume schedules a new one.
	#[default]
	Stop,
	/// Keep scheduling frames but skip all draw and update work.
	Idle,
}

/// Frame loop behavior.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
	/// Pause the loop while the host container is outside the viewport.
	pub observe_visibility: bool,
	/// Behavior while paused.
	pub pause: PauseStrategy,
}

impl Default for LifecycleConfig {
	fn default() -> Self {
		Self {
			observe_visibility: true,
			pause: PauseStrategy::Stop,
		}
	}
}

/// Complete renderer configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
	/// Backing store sizing.
	pub surface: SurfaceConfig,
	/// Population sizing.
	pub density: DensityConfig,
	/// Per-particle attribute ranges.
	pub particle: ParticleConfig,
	/// Wave line shape.
	pub wave: WaveConfig,
	/// Per-tick motion.
	pub motion: MotionConfig,
	/// Proximity lines.
	pub connectors: ConnectorConfig,
	/// Radial vignette.
	pub vignette: VignetteConfig,
	/// Frame loop behavior.
	pub lifecycle: LifecycleConfig,
}

fn positive(value: &mut f64, fallback: f64, name: &str) {
	if !(value.is_finite() && *value > 0.0) {
		warn!("wave-backdrop: {} must be positive, got {}, using {}", name, value, fallback);
		*value = fallback;
	}
}

fn non_negative(value: &mut f64, fallback: f64, name: &str) {
	if !(value.is_finite() && *value >= 0.0) {
		warn!("wave-backdrop: {} must be non-negative, got {}, using {}", name, value, fallback);
		*value = fallback;
	}
}

fn finite(value: &mut f64, fallback: f64, name: &str) {
	if !value.is_finite() {
		warn!("wave-backdrop: {} must be finite, got {}, using {}", name, value, fallback);
		*value = fallback;
	}
}

fn fraction(value: &mut f64, fallback: f64, name: &str) {
	finite(value, fallback, name);
	*value = value.clamp(0.0, 1.0);
}

impl RendererConfig {
	/// Zone background behind page sections (the default).
	pub fn section() -> Self {
		Self::default()
	}

	/// Landing hero: 70 particles regardless of size, connector lines on.
	pub fn hero() -> Self {
		Self {
			surface: SurfaceConfig {
				max_pixel_ratio: None,
			},
			density: DensityConfig {
				per_reference: 0.0,
				floor: 70,
				narrow_per_reference: 0.0,
				narrow_floor: 70,
				..DensityConfig::default()
			},
			motion: MotionConfig {
				drift_decay: 1.0,
				max_speed: 0.25,
				..MotionConfig::default()
			},
			connectors: ConnectorConfig {
				enabled: true,
				..ConnectorConfig::default()
			},
			lifecycle: LifecycleConfig {
				observe_visibility: false,
				pause: PauseStrategy::Stop,
			},
			..Self::default()
		}
	}

	/// Replaces values the renderer cannot work with by their defaults and caps
	/// the population. Applied to every configuration a controller runs with,
	/// since overrides come from page JSON.
	pub fn sanitized(mut self) -> Self {
		let surface = SurfaceConfig::default();
		let density = DensityConfig::default();
		let particle = ParticleConfig::default();
		let wave = WaveConfig::default();
		let motion = MotionConfig::default();
		let connectors = ConnectorConfig::default();
		let vignette = VignetteConfig::default();

		if let Some(ratio) = self.surface.max_pixel_ratio.as_mut() {
			positive(ratio, surface.max_pixel_ratio.unwrap_or(1.0), "surface.max_pixel_ratio");
		}

		let d = &mut self.density;
		positive(&mut d.reference_height, density.reference_height, "density.reference_height");
		non_negative(&mut d.per_reference, density.per_reference, "density.per_reference");
		non_negative(&mut d.narrow_per_reference, density.narrow_per_reference, "density.narrow_per_reference");
		finite(&mut d.narrow_breakpoint, density.narrow_breakpoint, "density.narrow_breakpoint");
		fraction(&mut d.wave_fraction, density.wave_fraction, "density.wave_fraction");
		fraction(&mut d.band_top, density.band_top, "density.band_top");
		fraction(&mut d.band_span, density.band_span, "density.band_span");
		if d.max_particles > PARTICLE_CEILING {
			warn!("wave-backdrop: density.max_particles capped at {}", PARTICLE_CEILING);
			d.max_particles = PARTICLE_CEILING;
		}
		d.floor = d.floor.min(d.max_particles);
		d.narrow_floor = d.narrow_floor.min(d.max_particles);

		let p = &mut self.particle;
		non_negative(&mut p.radius_min, particle.radius_min, "particle.radius_min");
		non_negative(&mut p.radius_range, particle.radius_range, "particle.radius_range");
		finite(&mut p.speed, particle.speed, "particle.speed");
		non_negative(&mut p.glow_min, particle.glow_min, "particle.glow_min");
		non_negative(&mut p.glow_range, particle.glow_range, "particle.glow_range");

		let w = &mut self.wave;
		positive(&mut w.cycle_secs, wave.cycle_secs, "wave.cycle_secs");
		positive(&mut w.sample_step, wave.sample_step, "wave.sample_step");
		finite(&mut w.center, wave.center, "wave.center");
		finite(&mut w.band, wave.band, "wave.band");
		finite(&mut w.base_frequency, wave.base_frequency, "wave.base_frequency");
		finite(&mut w.frequency_step, wave.frequency_step, "wave.frequency_step");
		finite(&mut w.base_amplitude, wave.base_amplitude, "wave.base_amplitude");
		finite(&mut w.amplitude_step, wave.amplitude_step, "wave.amplitude_step");
		finite(&mut w.phase_step, wave.phase_step, "wave.phase_step");
		non_negative(&mut w.line_width, wave.line_width, "wave.line_width");
		finite(&mut w.line_width_range, wave.line_width_range, "wave.line_width_range");

		let m = &mut self.motion;
		finite(&mut m.ease, motion.ease, "motion.ease");
		finite(&mut m.bob_amplitude, motion.bob_amplitude, "motion.bob_amplitude");
		finite(&mut m.bob_speed, motion.bob_speed, "motion.bob_speed");
		finite(&mut m.drift_decay, motion.drift_decay, "motion.drift_decay");
		finite(&mut m.jitter, motion.jitter, "motion.jitter");
		finite(&mut m.damping, motion.damping, "motion.damping");
		non_negative(&mut m.max_speed, motion.max_speed, "motion.max_speed");
		non_negative(&mut m.margin, motion.margin, "motion.margin");

		let c = &mut self.connectors;
		finite(&mut c.distance, connectors.distance, "connectors.distance");
		fraction(&mut c.max_alpha, connectors.max_alpha, "connectors.max_alpha");
		non_negative(&mut c.line_width, connectors.line_width, "connectors.line_width");

		non_negative(&mut self.vignette.inner, vignette.inner, "vignette.inner");
		non_negative(&mut self.vignette.outer, vignette.outer, "vignette.outer");

		self
	}

	/// Converts a `requestAnimationFrame` timestamp to wave-field time.
	pub fn frame_time(&self, now_ms: f64) -> f64 {
		(now_ms / 1000.0) * (std::f64::consts::TAU / self.wave.cycle_secs)
	}
}
