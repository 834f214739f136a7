/// One scrolling background layer: an RGBA strip blitted with horizontal
/// wrap, offset by its own fraction of the camera movement.
pub struct Layer {
    speed_factor: f32,
    offset_x: f32,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Layer {
    pub fn new(width: u32, height: u32, speed_factor: f32, pixels: Vec<u8>) -> Self {
        Self {
            speed_factor,
            offset_x: 0.0,
            width,
            height,
            pixels,
        }
    }

    pub fn speed_factor(&self) -> f32 {
        self.speed_factor
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn scroll(&mut self, delta: f32) {
        self.offset_x = (self.offset_x + delta * self.speed_factor).rem_euclid(self.width as f32);
    }
}

/// Ordered back-to-front stack of layers. Scrolling moves every layer by
/// the same camera delta scaled by its speed factor, so near layers slide
/// faster than far ones.
pub struct ParallaxScene {
    layers: Vec<Layer>,
}

impl ParallaxScene {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// The stock scene: gradient sky, stars, and three hill silhouettes
    /// generated procedurally at increasing speed factors.
    pub fn demo(width: u32, height: u32) -> Self {
        let layers = vec![
            Layer::new(width, height, 0.1, sky_pixels(width, height)),
            Layer::new(width, height, 0.2, star_pixels(width, height)),
            Layer::new(width, height, 0.35, hill_pixels(width, height, 0.55, [24, 52, 84], 0.013)),
            Layer::new(width, height, 0.6, hill_pixels(width, height, 0.7, [18, 38, 62], 0.021)),
            Layer::new(width, height, 1.0, hill_pixels(width, height, 0.85, [10, 22, 38], 0.034)),
        ];
        Self::new(layers)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Positive delta scrolls the camera right (layers slide left under it).
    pub fn scroll(&mut self, delta: f32) {
        for layer in &mut self.layers {
            layer.scroll(delta);
        }
    }
}

fn sky_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = vec![0u8; (width * height * 4) as usize];
    for y in 0..height {
        // Vertical gradient from deep night blue to a dim horizon.
        let t = y as f32 / height.max(1) as f32;
        let r = (8.0 + 30.0 * t) as u8;
        let g = (10.0 + 24.0 * t) as u8;
        let b = (28.0 + 60.0 * t) as u8;
        for x in 0..width {
            let index = ((y * width + x) * 4) as usize;
            pixels[index] = r;
            pixels[index + 1] = g;
            pixels[index + 2] = b;
            pixels[index + 3] = 255;
        }
    }
    pixels
}

fn star_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = vec![0u8; (width * height * 4) as usize];
    // Fixed pseudo-random scatter; a hash keeps the pattern stable across
    // runs without carrying an RNG into layer generation.
    let mut state: u32 = 0x9e37_79b9;
    let count = width * height / 600;
    for _ in 0..count {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        let x = state % width.max(1);
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        let y = (state % height.max(1)) * 2 / 3; // keep stars above the hills
        let index = ((y * width + x) * 4) as usize;
        if index + 3 < pixels.len() {
            pixels[index] = 220;
            pixels[index + 1] = 220;
            pixels[index + 2] = 200;
            pixels[index + 3] = 255;
        }
    }
    pixels
}

fn hill_pixels(width: u32, height: u32, base: f32, color: [u8; 3], frequency: f32) -> Vec<u8> {
    let mut pixels = vec![0u8; (width * height * 4) as usize];
    let amplitude = height as f32 * 0.08;
    for x in 0..width {
        // Ridge height from two stacked sines; everything below the ridge
        // is filled with the layer color, everything above stays clear.
        let fx = x as f32;
        let ridge = height as f32 * base
            - amplitude * (frequency * fx).sin()
            - amplitude * 0.5 * (frequency * 2.7 * fx + 1.3).sin();
        let top = ridge.max(0.0) as u32;
        for y in top..height {
            let index = ((y * width + x) * 4) as usize;
            pixels[index] = color[0];
            pixels[index + 1] = color[1];
            pixels[index + 2] = color[2];
            pixels[index + 3] = 255;
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_scene() -> ParallaxScene {
        ParallaxScene::new(vec![
            Layer::new(100, 10, 0.2, vec![0; 100 * 10 * 4]),
            Layer::new(100, 10, 1.0, vec![0; 100 * 10 * 4]),
        ])
    }

    #[test]
    fn test_scroll_scales_by_speed_factor() {
        let mut scene = blank_scene();
        scene.scroll(10.0);
        assert_eq!(scene.layers()[0].offset_x(), 2.0);
        assert_eq!(scene.layers()[1].offset_x(), 10.0);
    }

    #[test]
    fn test_offset_wraps_at_layer_width() {
        let mut scene = blank_scene();
        scene.scroll(250.0); // fast layer: 250 -> wraps to 50
        assert_eq!(scene.layers()[1].offset_x(), 50.0);
        assert_eq!(scene.layers()[0].offset_x(), 50.0); // 250 * 0.2, no wrap
    }

    #[test]
    fn test_negative_scroll_wraps_to_positive_offset() {
        let mut scene = blank_scene();
        scene.scroll(-10.0);
        assert_eq!(scene.layers()[1].offset_x(), 90.0);
        assert_eq!(scene.layers()[0].offset_x(), 98.0);
    }

    #[test]
    fn test_demo_layers_ordered_back_to_front() {
        let scene = ParallaxScene::demo(200, 100);
        let speeds: Vec<f32> = scene.layers().iter().map(Layer::speed_factor).collect();
        let mut sorted = speeds.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(speeds, sorted);
        for layer in scene.layers() {
            assert_eq!(layer.pixels().len(), 200 * 100 * 4);
            assert_eq!(layer.offset_x(), 0.0);
        }
    }
}
