use crate::color::Rgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Side length in pixels of every spawned triangle.
pub const TRIANGLE_SIZE: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct Triangle {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
}

/// Click-to-spawn triangle collection. Starts with one magenta-ish
/// triangle at the window center; each click appends another with a
/// random color.
pub struct TriangleField {
    triangles: Vec<Triangle>,
    rng: StdRng,
}

impl TriangleField {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self::with_rng(window_width, window_height, StdRng::from_entropy())
    }

    pub fn with_rng(window_width: u32, window_height: u32, rng: StdRng) -> Self {
        let seed_triangle = Triangle {
            x: window_width as f32 / 2.0,
            y: window_height as f32 / 2.0,
            color: Rgb::new(0.75, 0.01, 0.4),
        };
        Self {
            triangles: vec![seed_triangle],
            rng,
        }
    }

    /// Spawns a triangle centered at the click position. Unlike the grid
    /// game's palette, spawn colors are continuous in [0, 1].
    pub fn spawn_at(&mut self, x: f32, y: f32) {
        let color = Rgb::new(
            self.rng.gen_range(0.0..=1.0),
            self.rng.gen_range(0.0..=1.0),
            self.rng.gen_range(0.0..=1.0),
        );
        self.triangles.push(Triangle { x, y, color });
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_field() -> TriangleField {
        TriangleField::with_rng(800, 600, StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_starts_with_one_centered_triangle() {
        let field = test_field();
        assert_eq!(field.triangles().len(), 1);
        let first = &field.triangles()[0];
        assert_eq!((first.x, first.y), (400.0, 300.0));
        assert_eq!(first.color, Rgb::new(0.75, 0.01, 0.4));
    }

    #[test]
    fn test_spawn_appends_at_click_position() {
        let mut field = test_field();
        field.spawn_at(120.0, 80.0);
        field.spawn_at(600.0, 400.0);

        assert_eq!(field.triangles().len(), 3);
        let spawned = &field.triangles()[1];
        assert_eq!((spawned.x, spawned.y), (120.0, 80.0));
    }

    #[test]
    fn test_spawned_colors_are_in_unit_range() {
        let mut field = test_field();
        for i in 0..50 {
            field.spawn_at(i as f32, i as f32);
        }
        for triangle in field.triangles() {
            for ch in [triangle.color.r, triangle.color.g, triangle.color.b] {
                assert!((0.0..=1.0).contains(&ch));
            }
        }
    }
}
