//! Procedural wave lines shared by the line renderer and particle motion.

use super::config::WaveConfig;
use super::types::FlowDirection;

/// Vertical position of every wave line as a function of `(x, time)`.
///
/// Lines fan out symmetrically around the band center. Each line sums two sines
/// whose frequency, amplitude and phase depend only on the line index, so the
/// set never moves in lockstep. Borrowing the field is free; build one per frame.
#[derive(Clone, Copy, Debug)]
pub struct WaveField<'a> {
	config: &'a WaveConfig,
	height: f64,
	time_sign: f64,
}

impl<'a> WaveField<'a> {
	/// Field for a surface `height` pixels tall scrolling in `flow`.
	pub fn new(config: &'a WaveConfig, height: f64, flow: FlowDirection) -> Self {
		Self {
			config,
			height,
			time_sign: flow.time_sign(),
		}
	}

	/// Number of wave lines.
	pub fn lines(&self) -> usize {
		self.config.lines
	}

	/// Position of line `line` in the set, from 0.0 (first) to 1.0 (last).
	pub fn progress(&self, line: usize) -> f64 {
		if self.config.lines <= 1 {
			0.0
		} else {
			line as f64 / (self.config.lines - 1) as f64
		}
	}

	/// Height of line `line` at `x` and wave-field `time`.
	pub fn y(&self, x: f64, time: f64, line: usize) -> f64 {
		let c = self.config;
		let n = c.lines.max(1) as f64;
		let i = line as f64;

		let center = self.height * c.center;
		let band = self.height * c.band;
		let offset = ((i - (n - 1.0) / 2.0) / n) * band * 2.0;
		let freq = c.base_frequency + i * c.frequency_step;
		let amp = band * (c.base_amplitude + i * c.amplitude_step);
		let phase = i * c.phase_step;
		let t = time * self.time_sign;

		center
			+ offset + (x * freq + t + phase).sin() * amp * 0.5
			+ (x * freq * 1.8 + t * 0.7 + phase * 1.3).sin() * amp * 0.3
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deterministic() {
		let config = WaveConfig::default();
		let field = WaveField::new(&config, 720.0, FlowDirection::Forward);
		for line in 0..config.lines {
			for &(x, t) in &[(0.0, 0.0), (100.0, 1.0), (913.5, -42.25), (1e4, 1e6)] {
				assert_eq!(field.y(x, t, line), field.y(x, t, line));
			}
		}
		let again = WaveField::new(&config, 720.0, FlowDirection::Forward);
		assert_eq!(field.y(321.0, 7.5, 3), again.y(321.0, 7.5, 3));
	}

	#[test]
	fn reverse_flow_negates_time() {
		let config = WaveConfig::default();
		let forward = WaveField::new(&config, 900.0, FlowDirection::Forward);
		let reverse = WaveField::new(&config, 900.0, FlowDirection::Reverse);
		assert_eq!(reverse.y(100.0, 1.0, 0), forward.y(100.0, -1.0, 0));
		assert_ne!(reverse.y(100.0, 1.0, 0), forward.y(100.0, 1.0, 0));
	}

	#[test]
	fn lines_fan_around_center() {
		let config = WaveConfig::default();
		let field = WaveField::new(&config, 1000.0, FlowDirection::Forward);
		// With every sine term at zero only the center and offset remain.
		let flat = WaveConfig {
			base_amplitude: 0.0,
			amplitude_step: 0.0,
			..config.clone()
		};
		let flat_field = WaveField::new(&flat, 1000.0, FlowDirection::Forward);
		let first = flat_field.y(0.0, 0.0, 0);
		let middle = flat_field.y(0.0, 0.0, 3);
		let last = flat_field.y(0.0, 0.0, 6);
		assert!((middle - 500.0).abs() < 1e-9);
		assert!(((500.0 - first) - (last - 500.0)).abs() < 1e-9);
		assert!(first < middle && middle < last);

		for line in 0..config.lines {
			let y = field.y(250.0, 3.0, line);
			assert!(y > 200.0 && y < 800.0, "line {line} at {y}");
		}
	}

	#[test]
	fn progress_spans_unit_interval() {
		let config = WaveConfig::default();
		let field = WaveField::new(&config, 500.0, FlowDirection::Forward);
		assert_eq!(field.progress(0), 0.0);
		assert_eq!(field.progress(6), 1.0);
		assert!((field.progress(3) - 0.5).abs() < 1e-12);

		let single = WaveConfig {
			lines: 1,
			..WaveConfig::default()
		};
		assert_eq!(WaveField::new(&single, 500.0, FlowDirection::Forward).progress(0), 0.0);
	}
}
