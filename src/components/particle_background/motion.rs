//! Per-tick particle motion.

use super::config::MotionConfig;
use super::particles::{ParticleKind, ParticleStore, unit};
use super::wave::WaveField;

/// Wraps `v` to the opposite side once it passes `margin` beyond `[0, max]`.
fn wrap(v: f64, max: f64, margin: f64) -> f64 {
	if v < -margin {
		max + margin
	} else if v > max + margin {
		-margin
	} else {
		v
	}
}

/// Advances every particle by one tick.
///
/// Wave particles ease toward their line (plus a slow bob) and drift
/// horizontally with decaying speed. Ambient particles take a damped, speed
/// limited random walk. Both wrap around every edge so nothing ever parks on a
/// border.
pub fn advance(store: &mut ParticleStore, field: &WaveField<'_>, time: f64, motion: &MotionConfig) {
	let (width, height) = (store.width, store.height);
	let rng = &mut store.rng;

	for p in &mut store.particles {
		match p.kind {
			ParticleKind::Wave => {
				let target = field.y(p.x, time, p.wave_index)
					+ (time * motion.bob_speed + p.phase_offset).sin() * motion.bob_amplitude;
				p.y += (target - p.y) * motion.ease;
				p.x += p.vx;
				p.vx *= motion.drift_decay;
			}
			ParticleKind::Ambient => {
				p.vx += (unit(rng) - 0.5) * motion.jitter;
				p.vy += (unit(rng) - 0.5) * motion.jitter;
				p.vx *= motion.damping;
				p.vy *= motion.damping;
				p.vx = p.vx.clamp(-motion.max_speed, motion.max_speed);
				p.vy = p.vy.clamp(-motion.max_speed, motion.max_speed);
				p.x += p.vx;
				p.y += p.vy;
			}
		}

		p.x = wrap(p.x, width, motion.margin);
		p.y = wrap(p.y, height, motion.margin);
	}
}
