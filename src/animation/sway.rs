use crate::math::Mat4;

/// Breathing animation applied to the whole plant each frame.
///
/// The vertical bob runs continuously from elapsed time; the scale pulse
/// only oscillates while the pointer hovers the stage. Evaluated once per
/// display frame on the render thread, never concurrently.
#[derive(Debug, Clone, Copy)]
pub struct SwayAnimation {
    pub bob_speed: f32,
    pub bob_amplitude: f32,
    pub rest_height: f32,
    pub hover_scale: f32,
    pub pulse_speed: f32,
    pub pulse_amplitude: f32,
}

impl Default for SwayAnimation {
    fn default() -> Self {
        Self {
            bob_speed: 0.8,
            bob_amplitude: 0.05,
            rest_height: -0.5,
            hover_scale: 1.05,
            pulse_speed: 2.0,
            pulse_amplitude: 0.02,
        }
    }
}

impl SwayAnimation {
    /// Vertical offset at the given elapsed time; independent of hover
    pub fn offset_y(&self, time: f32) -> f32 {
        (time * self.bob_speed).sin() * self.bob_amplitude + self.rest_height
    }

    /// Uniform scale factor; constant 1.0 unless hovered
    pub fn scale(&self, time: f32, hovered: bool) -> f32 {
        if hovered {
            self.hover_scale + (time * self.pulse_speed).sin() * self.pulse_amplitude
        } else {
            1.0
        }
    }

    /// Model matrix combining the bob offset and scale pulse
    pub fn model_matrix(&self, time: f32, hovered: bool) -> Mat4 {
        let s = self.scale(time, hovered);
        Mat4::translation(0.0, self.offset_y(time), 0.0).mul(&Mat4::scale_uniform(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amplitude_of(f: impl Fn(f32) -> f32) -> f32 {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for i in 0..1000 {
            let v = f(i as f32 * 0.01);
            min = min.min(v);
            max = max.max(v);
        }
        max - min
    }

    #[test]
    fn test_offset_oscillates_around_rest_height() {
        let sway = SwayAnimation::default();
        let amp = amplitude_of(|t| sway.offset_y(t));
        assert!((amp - 0.1).abs() < 0.01); // twice the bob amplitude

        for i in 0..100 {
            let v = sway.offset_y(i as f32 * 0.1);
            assert!((-0.55..=-0.45).contains(&v));
        }
    }

    #[test]
    fn test_scale_constant_when_not_hovered() {
        let sway = SwayAnimation::default();
        let amp = amplitude_of(|t| sway.scale(t, false));
        assert_eq!(amp, 0.0);
        assert_eq!(sway.scale(3.7, false), 1.0);
    }

    #[test]
    fn test_scale_oscillates_when_hovered() {
        let sway = SwayAnimation::default();
        let amp = amplitude_of(|t| sway.scale(t, true));
        assert!(amp > 0.0);
        assert!((amp - 0.04).abs() < 0.005); // twice the pulse amplitude
    }

    #[test]
    fn test_hover_does_not_change_offset() {
        let sway = SwayAnimation::default();
        for i in 0..100 {
            let t = i as f32 * 0.13;
            // offset_y takes no hover input; the matrix translation row proves it
            let plain = sway.model_matrix(t, false);
            let hovered = sway.model_matrix(t, true);
            let dy_plain = plain.data[13];
            let dy_hovered = hovered.data[13];
            assert!((dy_plain - dy_hovered).abs() < 1e-6);
        }
    }

    #[test]
    fn test_model_matrix_scales_points() {
        use crate::math::Vec3;

        let sway = SwayAnimation::default();
        // At t=0 the hover scale is exactly the base hover factor
        let m = sway.model_matrix(0.0, true);
        let p = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((p.x - 1.05).abs() < 0.001);
    }
}
