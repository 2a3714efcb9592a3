//! Frame rendering for the particle background.
//!
//! Each frame clears the surface and draws four passes, back to front:
//! 1. Wave lines
//! 2. Connector lines between nearby particles (when enabled)
//! 3. Glowing particles
//! 4. Vignette, over everything else so it darkens the edges

use super::config::RendererConfig;
use super::particles::ParticleStore;
use super::theme::{Color, ThemeBundle};
use super::wave::WaveField;

/// Radial gradient filling the whole surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient {
	/// Center x.
	pub cx: f64,
	/// Center y.
	pub cy: f64,
	/// Radius of the inner stop.
	pub inner_radius: f64,
	/// Radius of the outer stop.
	pub outer_radius: f64,
	/// Inner stop color.
	pub inner: Color,
	/// Outer stop color.
	pub outer: Color,
}

/// The subset of a 2D canvas context the renderer draws with.
///
/// Coordinates are CSS pixels; the surface's base transform handles the device
/// pixel ratio.
pub trait Painter {
	/// Clears `[0, width] x [0, height]`.
	fn clear(&mut self, width: f64, height: f64);
	/// Pushes the drawing state.
	fn save(&mut self);
	/// Pops the drawing state.
	fn restore(&mut self);
	/// Starts a new path.
	fn begin_path(&mut self);
	/// Moves the pen without drawing.
	fn move_to(&mut self, x: f64, y: f64);
	/// Adds a segment to the current path.
	fn line_to(&mut self, x: f64, y: f64);
	/// Strokes the current path.
	fn stroke(&mut self, color: Color, line_width: f64);
	/// Fills a disc with a blurred shadow of `glow` around it.
	fn fill_glowing_disc(&mut self, x: f64, y: f64, radius: f64, fill: Color, glow: Color, blur: f64);
	/// Fills the whole surface with a radial gradient.
	fn fill_radial(&mut self, gradient: &RadialGradient, width: f64, height: f64);
}

/// Renders one frame of the current particle state.
pub fn render<P: Painter + ?Sized>(
	painter: &mut P,
	store: &ParticleStore,
	field: &WaveField<'_>,
	theme: &ThemeBundle,
	config: &RendererConfig,
	time: f64,
) {
	let (width, height) = (store.width(), store.height());

	painter.clear(width, height);
	draw_waves(painter, field, theme, config, width, time);
	if config.connectors.enabled {
		draw_connectors(painter, store, theme, config);
	}
	draw_particles(painter, store, theme);
	draw_vignette(painter, theme, config, width, height);
}

fn draw_waves<P: Painter + ?Sized>(
	painter: &mut P,
	field: &WaveField<'_>,
	theme: &ThemeBundle,
	config: &RendererConfig,
	width: f64,
	time: f64,
) {
	let step = if config.wave.sample_step > 0.0 {
		config.wave.sample_step
	} else {
		1.0
	};
	let samples = (width / step).floor().max(0.0) as usize;

	for line in 0..field.lines() {
		let progress = field.progress(line);
		painter.begin_path();
		painter.move_to(0.0, field.y(0.0, time, line));
		for s in 1..=samples {
			let x = s as f64 * step;
			painter.line_to(x, field.y(x, time, line));
		}
		painter.stroke(
			theme.wave_color(progress),
			config.wave.line_width + progress * config.wave.line_width_range,
		);
	}
}

/// Proximity graph over all particle pairs; quadratic in the population.
fn draw_connectors<P: Painter + ?Sized>(
	painter: &mut P,
	store: &ParticleStore,
	theme: &ThemeBundle,
	config: &RendererConfig,
) {
	let c = &config.connectors;
	let particles = &store.particles;

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let dist = (dx * dx + dy * dy).sqrt();
			let Some(color) = theme.connector_color(dist, c.distance, c.max_alpha) else {
				continue;
			};
			painter.begin_path();
			painter.move_to(a.x, a.y);
			painter.line_to(b.x, b.y);
			painter.stroke(color, c.line_width);
		}
	}
}

fn draw_particles<P: Painter + ?Sized>(painter: &mut P, store: &ParticleStore, theme: &ThemeBundle) {
	painter.save();
	for p in &store.particles {
		painter.fill_glowing_disc(
			p.x,
			p.y,
			p.radius,
			theme.particle_fill,
			theme.particle_glow,
			p.glow_size,
		);
	}
	painter.restore();
}

fn draw_vignette<P: Painter + ?Sized>(
	painter: &mut P,
	theme: &ThemeBundle,
	config: &RendererConfig,
	width: f64,
	height: f64,
) {
	let gradient = RadialGradient {
		cx: width * 0.5,
		cy: height * 0.5,
		inner_radius: width.min(height) * config.vignette.inner,
		outer_radius: width.max(height) * config.vignette.outer,
		inner: theme.vignette_inner,
		outer: theme.vignette_outer,
	};
	painter.fill_radial(&gradient, width, height);
}

#[cfg(test)]
mod tests {
	use super::super::particles::{Particle, ParticleKind};
	use super::super::testing::{Op, RecordingPainter};
	use super::super::theme::resolve;
	use super::super::types::{DisplayMode, FlowDirection, ZonePalette};
	use super::*;

	fn frame(config: &RendererConfig, store: &ParticleStore) -> RecordingPainter {
		let theme = resolve(ZonePalette::Primary, FlowDirection::Forward, DisplayMode::Dark);
		let field = WaveField::new(&config.wave, store.height(), theme.flow);
		let mut painter = RecordingPainter::default();
		render(&mut painter, store, &field, &theme, config, 1.25);
		painter
	}

	fn particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			kind: ParticleKind::Ambient,
			wave_index: 0,
			phase_offset: 0.0,
			glow_size: 10.0,
		}
	}

	#[test]
	fn layers_are_drawn_back_to_front() {
		let config = RendererConfig::hero();
		let mut store = ParticleStore::new(2);
		store.seed(600.0, 400.0, &config);
		let painter = frame(&config, &store);
		let ops = &painter.ops;

		assert!(matches!(ops.first(), Some(Op::Clear(w, h)) if *w == 600.0 && *h == 400.0));
		assert!(matches!(ops.last(), Some(Op::Radial(_))));

		let first_disc = ops.iter().position(|op| matches!(op, Op::Disc { .. })).unwrap();
		let last_disc = ops.iter().rposition(|op| matches!(op, Op::Disc { .. })).unwrap();
		let last_stroke = ops.iter().rposition(|op| matches!(op, Op::Stroke { .. })).unwrap();
		assert!(last_stroke < first_disc);
		assert!(matches!(ops[first_disc - 1], Op::Save));
		assert!(matches!(ops[last_disc + 1], Op::Restore));
		assert_eq!(painter.discs(), 70);
	}

	#[test]
	fn each_wave_line_spans_the_width() {
		let config = RendererConfig::section();
		let mut store = ParticleStore::new(2);
		store.seed(300.0, 500.0, &config);
		let painter = frame(&config, &store);

		let strokes = painter.strokes();
		assert_eq!(strokes.len(), config.wave.lines);
		// 0, 3, ..., 300
		assert_eq!(painter.line_tos(), config.wave.lines * 100);
		let widths: Vec<f64> = strokes.iter().map(|(_, w)| *w).collect();
		assert_eq!(widths.first(), Some(&1.5));
		assert_eq!(widths.last(), Some(&2.0));
	}

	#[test]
	fn connectors_only_join_close_pairs() {
		let config = RendererConfig::hero();
		let mut store = ParticleStore::new(0);
		store.seed(1000.0, 1000.0, &config);
		store.particles = vec![particle(100.0, 100.0), particle(200.0, 100.0), particle(335.0, 100.0)];

		let painter = frame(&config, &store);
		let connectors: Vec<(Color, f64)> = painter
			.strokes()
			.into_iter()
			.filter(|(_, w)| *w == config.connectors.line_width)
			.collect();
		// 100 apart and 135 apart (exactly at the threshold) from the middle one;
		// 235 apart for the outer pair.
		assert_eq!(connectors.len(), 1);
		let alpha = connectors[0].0.a;
		assert!((alpha - 0.15 * (1.0 - 100.0 / 135.0)).abs() < 1e-12);
	}

	#[test]
	fn connectors_disabled_in_section_variant() {
		let config = RendererConfig::section();
		let mut store = ParticleStore::new(0);
		store.seed(1000.0, 1000.0, &config);
		store.particles = vec![particle(100.0, 100.0), particle(101.0, 100.0)];
		let painter = frame(&config, &store);
		assert_eq!(painter.strokes().len(), config.wave.lines);
	}

	#[test]
	fn vignette_spans_short_to_long_side() {
		let config = RendererConfig::section();
		let mut store = ParticleStore::new(0);
		store.seed(1200.0, 400.0, &config);
		let painter = frame(&config, &store);
		let Some(Op::Radial(g)) = painter.ops.last() else {
			panic!("vignette missing");
		};
		assert_eq!((g.cx, g.cy), (600.0, 200.0));
		assert!((g.inner_radius - 40.0).abs() < 1e-9);
		assert!((g.outer_radius - 900.0).abs() < 1e-9);
		assert!(g.outer.a > g.inner.a);
	}
}
