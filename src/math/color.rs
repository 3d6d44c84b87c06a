/// RGB color with components in the 0.0 to 1.0 range
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create from a hex integer (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xFF8000);
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.5).abs() < 0.01);
        assert!(c.b.abs() < 0.01);
    }

    #[test]
    fn test_from_hex_black_and_white() {
        assert_eq!(Color::from_hex(0x000000), Color::new(0.0, 0.0, 0.0));
        assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
    }

    #[test]
    fn test_lerp() {
        let mid = Color::new(0.0, 0.0, 0.0).lerp(&Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 0.0001);
    }
}
