use crate::game::ColorGame;
use crate::parallax::ParallaxScene;
use crate::spawner::Triangle;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];

/// Software rasterizer over a `pixels` framebuffer. Every demo draws into
/// the same RGBA frame: filled rectangles for grid cells, filled triangles
/// for the spawner demo and horizontally-wrapped layer blits for the
/// parallax demo.
pub struct FrameRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl FrameRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    fn clear(frame: &mut [u8], color: [u8; 4]) {
        for pixel in frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Draws every cell still on the board. Eliminated cells leave the
    /// background showing through.
    pub fn render_game(&mut self, game: &ColorGame) {
        let (width, height) = (self.width, self.height);
        let frame = self.pixels.frame_mut();
        Self::clear(frame, BACKGROUND);

        for cell in game.visible_cells() {
            // Cell position is its center; the rect starts half a cell up
            // and to the left.
            let x = (cell.x - cell.width / 2.0) as i32;
            let y = (cell.y - cell.height / 2.0) as i32;
            Self::fill_rect_static(
                frame,
                x,
                y,
                cell.width as u32,
                cell.height as u32,
                cell.color.to_rgba(),
                width,
                height,
            );
        }
    }

    pub fn render_triangles(&mut self, triangles: &[Triangle], size: f32) {
        let (width, height) = (self.width, self.height);
        let frame = self.pixels.frame_mut();
        Self::clear(frame, BACKGROUND);

        let half = size / 2.0;
        for triangle in triangles {
            // Apex up, base below the center.
            let v0 = (triangle.x - half, triangle.y + half);
            let v1 = (triangle.x + half, triangle.y + half);
            let v2 = (triangle.x, triangle.y - half);
            Self::fill_triangle_static(frame, v0, v1, v2, triangle.color.to_rgba(), width, height);
        }
    }

    pub fn render_parallax(&mut self, scene: &ParallaxScene) {
        let (width, height) = (self.width, self.height);
        let frame = self.pixels.frame_mut();
        Self::clear(frame, BACKGROUND);

        // Back to front; transparent layer pixels let the layers behind
        // show through.
        for layer in scene.layers() {
            Self::blit_layer_static(
                frame,
                layer.pixels(),
                layer.width(),
                layer.height(),
                layer.offset_x(),
                width,
                height,
            );
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    fn fill_rect_static(
        frame: &mut [u8],
        x: i32,
        y: i32,
        rect_width: u32,
        rect_height: u32,
        color: [u8; 4],
        width: u32,
        height: u32,
    ) {
        for dy in 0..rect_height as i32 {
            for dx in 0..rect_width as i32 {
                let px = x + dx;
                let py = y + dy;

                if px >= 0 && py >= 0 && (px as u32) < width && (py as u32) < height {
                    let index = ((py as u32 * width + px as u32) * 4) as usize;
                    if index + 3 < frame.len() {
                        frame[index] = color[0];
                        frame[index + 1] = color[1];
                        frame[index + 2] = color[2];
                        frame[index + 3] = color[3];
                    }
                }
            }
        }
    }

    fn fill_triangle_static(
        frame: &mut [u8],
        v0: (f32, f32),
        v1: (f32, f32),
        v2: (f32, f32),
        color: [u8; 4],
        width: u32,
        height: u32,
    ) {
        let min_x = v0.0.min(v1.0).min(v2.0).floor().max(0.0) as u32;
        let max_x = (v0.0.max(v1.0).max(v2.0).ceil() as i64).clamp(0, width as i64 - 1) as u32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor().max(0.0) as u32;
        let max_y = (v0.1.max(v1.1).max(v2.1).ceil() as i64).clamp(0, height as i64 - 1) as u32;

        let edge = |a: (f32, f32), b: (f32, f32), p: (f32, f32)| -> f32 {
            (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
        };

        // Winding-independent: a point is inside when all three edge
        // functions share the signed area's sign.
        let area = edge(v0, v1, v2);
        if area == 0.0 {
            return;
        }

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let p = (px as f32 + 0.5, py as f32 + 0.5);
                let w0 = edge(v1, v2, p) * area.signum();
                let w1 = edge(v2, v0, p) * area.signum();
                let w2 = edge(v0, v1, p) * area.signum();

                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    let index = ((py * width + px) * 4) as usize;
                    if index + 3 < frame.len() {
                        frame[index] = color[0];
                        frame[index + 1] = color[1];
                        frame[index + 2] = color[2];
                        frame[index + 3] = color[3];
                    }
                }
            }
        }
    }

    fn blit_layer_static(
        frame: &mut [u8],
        layer_pixels: &[u8],
        layer_width: u32,
        layer_height: u32,
        offset_x: f32,
        width: u32,
        height: u32,
    ) {
        if layer_width == 0 {
            return;
        }
        let offset = offset_x as u32 % layer_width;

        for y in 0..height.min(layer_height) {
            for x in 0..width {
                // Source column wraps so the layer tiles endlessly.
                let src_x = (x + offset) % layer_width;
                let src = ((y * layer_width + src_x) * 4) as usize;
                let dst = ((y * width + x) * 4) as usize;

                if src + 3 < layer_pixels.len() && dst + 3 < frame.len() {
                    // Alpha zero marks transparent sky above a silhouette.
                    if layer_pixels[src + 3] == 0 {
                        continue;
                    }
                    frame[dst] = layer_pixels[src];
                    frame[dst + 1] = layer_pixels[src + 1];
                    frame[dst + 2] = layer_pixels[src + 2];
                    frame[dst + 3] = 255;
                }
            }
        }
    }
}
