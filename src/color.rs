use rand::Rng;

/// Distance between opposite corners of the unit RGB cube, i.e. black to white.
pub const MAX_DISTANCE: f32 = 1.7320508;

/// An RGB color with each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Random color with each channel drawn from the 256 levels of an
    /// 8-bit palette: {0/255, 1/255, ..., 255/255}.
    pub fn random(rng: &mut impl Rng) -> Self {
        let r = rng.gen_range(0..=255u32) as f32 / 255.0;
        let g = rng.gen_range(0..=255u32) as f32 / 255.0;
        let b = rng.gen_range(0..=255u32) as f32 / 255.0;
        Self { r, g, b }
    }

    /// Euclidean distance to another color in RGB space.
    pub fn distance(&self, other: &Rgb) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Distance scaled into [0, 1] by the cube diagonal, so a match
    /// tolerance can be expressed as a fraction of the worst case.
    pub fn normalized_distance(&self, other: &Rgb) -> f32 {
        self.distance(other) / MAX_DISTANCE
    }

    pub fn to_rgba(&self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0) as u8,
            (self.g.clamp(0.0, 1.0) * 255.0) as u8,
            (self.b.clamp(0.0, 1.0) * 255.0) as u8,
            255,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_distance_to_self_is_zero() {
        let c = Rgb::new(0.3, 0.6, 0.9);
        assert_eq!(c.distance(&c), 0.0);
        assert_eq!(c.normalized_distance(&c), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Rgb::new(0.1, 0.2, 0.3);
        let b = Rgb::new(0.9, 0.5, 0.0);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn test_black_to_white_normalizes_to_one() {
        let black = Rgb::new(0.0, 0.0, 0.0);
        let white = Rgb::new(1.0, 1.0, 1.0);
        let d = black.normalized_distance(&white);
        assert!((d - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_random_channels_are_quantized_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let c = Rgb::random(&mut rng);
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&ch));
                // Each channel must sit exactly on a 1/255 step.
                let steps = ch * 255.0;
                assert!((steps - steps.round()).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_to_rgba_round_trips_full_channels() {
        assert_eq!(Rgb::new(1.0, 0.0, 1.0).to_rgba(), [255, 0, 255, 255]);
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_rgba(), [0, 0, 0, 255]);
    }
}
