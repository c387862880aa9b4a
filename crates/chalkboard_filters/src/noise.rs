//! Seeded fractal value noise
//!
//! A CPU stand-in for `feTurbulence type="fractalNoise"`: same frequency and
//! octave semantics, output normalized to `[0, 1]`. Used to reproduce the
//! displacement a filter applies so its envelope can be measured.

fn hash(ix: i32, iy: i32, seed: u32) -> u32 {
    let mut h = (ix as u32).wrapping_mul(0x8DA6_B343)
        ^ (iy as u32).wrapping_mul(0xD816_3841)
        ^ seed.wrapping_mul(0xCB1A_B31F);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    h = h.wrapping_mul(0x297A_2D39);
    h ^= h >> 15;
    h
}

/// Lattice value in `[0, 1)`
fn lattice(ix: i32, iy: i32, seed: u32) -> f32 {
    (hash(ix, iy, seed) >> 8) as f32 / (1u32 << 24) as f32
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Single-octave value noise at `(x, y)` in lattice units
pub fn value_noise(x: f32, y: f32, seed: u32) -> f32 {
    let x0 = x.floor();
    let y0 = y.floor();
    let (ix, iy) = (x0 as i32, y0 as i32);
    let tx = smoothstep(x - x0);
    let ty = smoothstep(y - y0);

    let top = lerp(lattice(ix, iy, seed), lattice(ix + 1, iy, seed), tx);
    let bottom = lerp(lattice(ix, iy + 1, seed), lattice(ix + 1, iy + 1, seed), tx);
    lerp(top, bottom, ty)
}

/// Fractal noise at pixel `(x, y)`.
///
/// Each octave doubles the frequency and halves the amplitude. The sum is
/// normalized, so the result stays in `[0, 1]` for any octave count; zero
/// octaves behave like one.
pub fn fractal_noise(x: f32, y: f32, base_frequency: f32, octaves: u32, seed: u32) -> f32 {
    let mut sum = 0.0;
    let mut norm = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = base_frequency;

    for octave in 0..octaves.max(1) {
        let octave_seed = seed.wrapping_add(octave.wrapping_mul(0x9E37_79B9));
        sum += amplitude * value_noise(x * frequency, y * frequency, octave_seed);
        norm += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }

    (sum / norm).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_is_deterministic() {
        assert_eq!(
            fractal_noise(12.5, -3.25, 0.2, 3, 7),
            fractal_noise(12.5, -3.25, 0.2, 3, 7)
        );
    }

    #[test]
    fn test_noise_stays_in_unit_range() {
        for octaves in [0, 1, 3, 8] {
            for i in -50..50 {
                let v = fractal_noise(i as f32 * 1.7, i as f32 * -0.9, 0.5, octaves, 42);
                assert!((0.0..=1.0).contains(&v), "octaves={octaves} v={v}");
            }
        }
    }

    #[test]
    fn test_noise_varies_across_space() {
        let samples: Vec<f32> = (0..64)
            .map(|i| fractal_noise(i as f32 * 3.0, 0.0, 0.2, 3, 1))
            .collect();
        let min = samples.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = samples.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!(max - min > 0.1, "min={min} max={max}");
    }

    #[test]
    fn test_value_noise_matches_lattice_at_integer_points() {
        assert_eq!(value_noise(3.0, 4.0, 9), lattice(3, 4, 9));
    }
}
