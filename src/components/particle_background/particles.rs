//! Particle population: seeding and sizing.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::{DensityConfig, RendererConfig};

/// Which motion rule a particle follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
	/// Eases toward its wave line with a slow horizontal drift.
	Wave,
	/// Damped random walk over the whole surface.
	Ambient,
}

/// A single particle.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position in CSS pixels.
	pub x: f64,
	/// Vertical position in CSS pixels.
	pub y: f64,
	/// Horizontal velocity in CSS pixels per tick.
	pub vx: f64,
	/// Vertical velocity.
	pub vy: f64,
	/// Disc radius.
	pub radius: f64,
	/// Motion rule.
	pub kind: ParticleKind,
	/// Wave line tracked by [`ParticleKind::Wave`] particles.
	pub wave_index: usize,
	/// Bob phase, so neighbors on a line do not move in sync.
	pub phase_offset: f64,
	/// Shadow blur radius of the glow.
	pub glow_size: f64,
}

/// Owns every particle of one background instance.
///
/// Identity does not survive a resize: [`ParticleStore::seed`] throws the whole
/// set away and draws a new one for the new surface.
pub struct ParticleStore {
	/// Current population, wave-kind first.
	pub particles: Vec<Particle>,
	pub(super) width: f64,
	pub(super) height: f64,
	pub(super) rng: SmallRng,
}

/// Uniform sample in `[0, 1)`.
pub(super) fn unit(rng: &mut SmallRng) -> f64 {
	rng.gen_range(0.0..1.0)
}

/// Population for a surface of the given size, never above `max_particles`.
pub fn population(width: f64, height: f64, density: &DensityConfig) -> usize {
	let (per_reference, floor) = if width < density.narrow_breakpoint {
		(density.narrow_per_reference, density.narrow_floor)
	} else {
		(density.per_reference, density.floor)
	};
	let scaled = (height / density.reference_height * per_reference).round();
	// Negative and NaN saturate to zero.
	floor.max(scaled as usize).min(density.max_particles)
}

/// Number of wave-kind particles in a population of `count`.
pub fn wave_count(count: usize, wave_fraction: f64) -> usize {
	((count as f64 * wave_fraction).floor() as usize).min(count)
}

impl ParticleStore {
	/// Empty store with a deterministic RNG.
	pub fn new(rng_seed: u64) -> Self {
		Self {
			particles: Vec::new(),
			width: 0.0,
			height: 0.0,
			rng: SmallRng::seed_from_u64(rng_seed),
		}
	}

	/// Width of the surface the store was seeded for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Height of the surface the store was seeded for.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True before the first seed.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Number of particles of one kind.
	pub fn count(&self, kind: ParticleKind) -> usize {
		self.particles.iter().filter(|p| p.kind == kind).count()
	}

	/// Replaces the whole population for a `width` x `height` surface.
	pub fn seed(&mut self, width: f64, height: f64, config: &RendererConfig) {
		let density = &config.density;
		let style = &config.particle;
		let count = population(width, height, density);
		let waves = wave_count(count, density.wave_fraction);
		let lines = config.wave.lines.max(1);

		self.width = width;
		self.height = height;
		self.particles.clear();
		self.particles.reserve(count);

		let rng = &mut self.rng;
		for i in 0..count {
			let kind = if i < waves {
				ParticleKind::Wave
			} else {
				ParticleKind::Ambient
			};
			let x = unit(rng) * width;
			let y = match kind {
				ParticleKind::Wave => height * density.band_top + unit(rng) * height * density.band_span,
				ParticleKind::Ambient => unit(rng) * height,
			};

			self.particles.push(Particle {
				x,
				y,
				vx: (unit(rng) - 0.5) * style.speed,
				vy: (unit(rng) - 0.5) * style.speed,
				radius: style.radius_min + unit(rng) * style.radius_range,
				kind,
				wave_index: rng.gen_range(0..lines),
				phase_offset: unit(rng) * std::f64::consts::TAU,
				glow_size: style.glow_min + unit(rng) * style.glow_range,
			});
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn seeded(width: f64, height: f64, rng_seed: u64) -> ParticleStore {
		let mut store = ParticleStore::new(rng_seed);
		store.seed(width, height, &RendererConfig::default());
		store
	}

	#[test]
	fn wide_900_square_has_49_particles() {
		let store = seeded(900.0, 900.0, 7);
		assert_eq!(store.len(), 49);
		assert_eq!(store.count(ParticleKind::Wave), 29);
		assert_eq!(store.count(ParticleKind::Ambient), 20);
	}

	#[test]
	fn reseeding_keeps_size_and_ratio_but_moves_particles() {
		let config = RendererConfig::default();
		let mut store = ParticleStore::new(1);
		store.seed(1280.0, 2400.0, &config);
		let first: Vec<(f64, f64)> = store.particles.iter().map(|p| (p.x, p.y)).collect();
		let (len, waves) = (store.len(), store.count(ParticleKind::Wave));

		store.seed(1280.0, 2400.0, &config);
		assert_eq!(store.len(), len);
		assert_eq!(store.count(ParticleKind::Wave), waves);
		let second: Vec<(f64, f64)> = store.particles.iter().map(|p| (p.x, p.y)).collect();
		assert_ne!(first, second);
	}

	#[test]
	fn same_rng_seed_reproduces_population() {
		let a = seeded(1024.0, 768.0, 99);
		let b = seeded(1024.0, 768.0, 99);
		for (p, q) in a.particles.iter().zip(&b.particles) {
			assert_eq!((p.x, p.y, p.wave_index), (q.x, q.y, q.wave_index));
		}
	}

	#[test]
	fn population_is_floored_and_monotonic() {
		let density = DensityConfig::default();
		assert_eq!(population(1200.0, 0.0, &density), 28);
		assert_eq!(population(400.0, 0.0, &density), 15);
		assert_eq!(population(1200.0, -50.0, &density), 28);
		assert_eq!(population(1200.0, f64::NAN, &density), 28);

		for width in [320.0, 767.0, 768.0, 1920.0] {
			let mut last = 0;
			for step in 0..200 {
				let n = population(width, step as f64 * 37.0, &density);
				assert!(n >= last, "width {width} step {step}");
				last = n;
			}
		}
		assert_eq!(population(400.0, 1800.0, &density), 60);
		assert_eq!(population(1200.0, 1800.0, &density), 98);
	}

	#[test]
	fn wave_fraction_floors() {
		assert_eq!(wave_count(49, 0.6), 29);
		assert_eq!(wave_count(28, 0.6), 16);
		assert_eq!(wave_count(5, 1.5), 5);
		assert_eq!(wave_count(0, 0.6), 0);
	}

	#[test]
	fn attributes_stay_in_range() {
		let config = RendererConfig::default();
		let (w, h) = (1400.0, 1000.0);
		let store = seeded(w, h, 3);
		for p in &store.particles {
			assert!((0.0..w).contains(&p.x));
			match p.kind {
				ParticleKind::Wave => assert!(p.y >= h * 0.35 && p.y < h * 0.65),
				ParticleKind::Ambient => assert!((0.0..h).contains(&p.y)),
			}
			assert!(p.radius >= 1.5 && p.radius < 4.0);
			assert!(p.vx.abs() <= 0.075 && p.vy.abs() <= 0.075);
			assert!(p.wave_index < config.wave.lines);
			assert!((0.0..std::f64::consts::TAU).contains(&p.phase_offset));
			assert!(p.glow_size >= 8.0 && p.glow_size < 15.0);
		}
	}

	#[test]
	fn wave_indices_cover_every_line() {
		let store = seeded(1920.0, 9000.0, 11);
		let mut hits = [0usize; 7];
		for p in &store.particles {
			hits[p.wave_index] += 1;
		}
		assert!(hits.iter().all(|&n| n > 0), "{hits:?}");
	}

	#[test]
	fn degenerate_density_cannot_blow_up_the_population() {
		let mut config = RendererConfig::default();
		config.density.reference_height = 0.0;
		assert_eq!(population(1200.0, 900.0, &config.density), 600);

		let config = config.sanitized();
		let mut store = ParticleStore::new(4);
		assert!(store.is_empty());
		store.seed(1200.0, 900.0, &config);
		assert_eq!(store.len(), 49);
	}

	#[test]
	fn tall_surfaces_stop_at_the_cap() {
		let mut config = RendererConfig::default();
		config.density.max_particles = 100;
		let store = {
			let mut store = ParticleStore::new(8);
			store.seed(1920.0, 90_000.0, &config);
			store
		};
		assert_eq!(store.len(), 100);
		assert_eq!(store.count(ParticleKind::Wave), 60);
	}

	#[test]
	fn zero_sized_surface_still_seeds_the_floor() {
		let store = seeded(0.0, 0.0, 5);
		assert_eq!(store.len(), 15);
		assert!(store.particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}
}
