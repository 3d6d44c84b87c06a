//! Static star field surrounding the garden at a distance.

use crate::math::Jitter;

/// A single backdrop star
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub position: [f32; 3],
    pub size: f32,
    pub alpha: f32,
    pub color: [f32; 3],
}

/// Distant points scattered over a spherical shell, uploaded once and
/// twinkled in the shader.
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Scatter `count` stars over a shell starting at `radius` and
    /// extending `depth` further out. Stars deeper in the shell fade.
    pub fn new(count: usize, radius: f32, depth: f32, rng: &mut Jitter) -> Self {
        let mut stars = Vec::with_capacity(count);

        for _ in 0..count {
            // Uniform direction on the sphere
            let theta = rng.range(0.0, std::f32::consts::TAU);
            let cos_phi = rng.range(-1.0, 1.0);
            let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();

            let shell = rng.unit();
            let r = radius + shell * depth;

            let position = [
                r * sin_phi * theta.cos(),
                r * cos_phi,
                r * sin_phi * theta.sin(),
            ];

            // Slight warm or cool tint around white
            let tint = rng.centered(0.1);
            let color = [
                (0.95 + tint).clamp(0.0, 1.0),
                0.95,
                (0.95 - tint).clamp(0.0, 1.0),
            ];

            stars.push(Star {
                position,
                size: rng.range(2.0, 4.0),
                alpha: 0.4 + (1.0 - shell) * 0.6,
                color,
            });
        }

        Self { stars }
    }

    pub fn count(&self) -> usize {
        self.stars.len()
    }

    /// Interleaved particle data for the GPU:
    /// position(3) + size(1) + alpha(1) + color(3) = 8 floats per star
    pub fn particle_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.stars.len() * 8);

        for star in &self.stars {
            data.extend_from_slice(&star.position);
            data.push(star.size);
            data.push(star.alpha);
            data.extend_from_slice(&star.color);
        }

        data
    }
}
