use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use tracing::warn;

use crate::app::geometry::Vec2;

use super::renderer::{load_texture_rgba, LoadedTexture};

const PLACEHOLDER_COLOR: [u8; 4] = [220, 220, 240, 255];

/// Drawing surface for one frame. Coordinates are screen pixels, origin
/// top-left, y down. Draw calls are stateless and assumed to succeed;
/// unresolvable textures fall back to a placeholder rect and warn once.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    texture_paths: &'a HashMap<String, PathBuf>,
    texture_cache: &'a mut HashMap<String, Option<LoadedTexture>>,
    warned_missing_keys: &'a mut HashSet<String>,
}

impl<'a> Canvas<'a> {
    pub(crate) fn new(
        frame: &'a mut [u8],
        width: u32,
        height: u32,
        texture_paths: &'a HashMap<String, PathBuf>,
        texture_cache: &'a mut HashMap<String, Option<LoadedTexture>>,
        warned_missing_keys: &'a mut HashSet<String>,
    ) -> Self {
        Self {
            frame,
            width,
            height,
            texture_paths,
            texture_cache,
            warned_missing_keys,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
    }

    pub fn draw_rect(&mut self, center: Vec2, width: f32, height: f32, color: [u8; 4]) {
        let left = (center.x - width * 0.5).round() as i32;
        let top = (center.y - height * 0.5).round() as i32;
        let right = left + width.round().max(0.0) as i32;
        let bottom = top + height.round().max(0.0) as i32;
        for y in top..bottom {
            for x in left..right {
                write_pixel_rgba_clipped(self.frame, self.width, self.height, x, y, color);
            }
        }
    }

    /// Draws a texture scaled to `width` x `height`, centered at `center`,
    /// rotated clockwise by `rotation_degrees`. Alpha-tested nearest-neighbor
    /// sampling; zero rotation takes the axis-aligned fast path.
    pub fn draw_texture(
        &mut self,
        key: &str,
        center: Vec2,
        width: f32,
        height: f32,
        rotation_degrees: f32,
    ) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let Some(texture) = resolve_cached_texture(
            self.texture_cache,
            self.warned_missing_keys,
            self.texture_paths,
            key,
        ) else {
            self.draw_rect(center, width, height, PLACEHOLDER_COLOR);
            return;
        };
        if texture.width == 0 || texture.height == 0 {
            return;
        }

        if rotation_degrees.abs() < 0.0001 {
            blit_axis_aligned(
                self.frame,
                self.width,
                self.height,
                texture,
                center,
                width,
                height,
            );
        } else {
            blit_rotated(
                self.frame,
                self.width,
                self.height,
                texture,
                center,
                width,
                height,
                rotation_degrees.to_radians(),
            );
        }
    }
}

fn resolve_cached_texture<'a>(
    cache: &'a mut HashMap<String, Option<LoadedTexture>>,
    warned_missing_keys: &mut HashSet<String>,
    texture_paths: &HashMap<String, PathBuf>,
    key: &str,
) -> Option<&'a LoadedTexture> {
    if !cache.contains_key(key) {
        let loaded = match texture_paths.get(key) {
            Some(path) => match load_texture_rgba(path) {
                Ok(texture) => Some(texture),
                Err(reason) => {
                    warn_texture_load_once(warned_missing_keys, key, reason.as_str());
                    None
                }
            },
            None => {
                warn_texture_load_once(warned_missing_keys, key, "unknown_signature");
                None
            }
        };
        cache.insert(key.to_string(), loaded);
    }
    cache.get(key).and_then(Option::as_ref)
}

fn warn_texture_load_once(warned_keys: &mut HashSet<String>, key: &str, reason: &str) {
    if !warned_keys.insert(key.to_string()) {
        return;
    }
    warn!(
        texture_key = key,
        reason, "texture_load_failed_using_placeholder"
    );
}

fn write_pixel_rgba_clipped(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    color: [u8; 4],
) {
    if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
        return;
    }
    let offset = (y as usize * width as usize + x as usize) * 4;
    if offset + 4 > frame.len() {
        return;
    }
    frame[offset..offset + 4].copy_from_slice(&color);
}

fn blit_axis_aligned(
    frame: &mut [u8],
    frame_width: u32,
    frame_height: u32,
    texture: &LoadedTexture,
    center: Vec2,
    width: f32,
    height: f32,
) {
    let dest_w = width.round().max(1.0) as i32;
    let dest_h = height.round().max(1.0) as i32;
    let left = (center.x - width * 0.5).round() as i32;
    let top = (center.y - height * 0.5).round() as i32;

    let draw_left = left.max(0);
    let draw_top = top.max(0);
    let draw_right = (left + dest_w).min(frame_width as i32);
    let draw_bottom = (top + dest_h).min(frame_height as i32);
    if draw_left >= draw_right || draw_top >= draw_bottom {
        return;
    }

    for out_y in draw_top..draw_bottom {
        let src_y =
            (((out_y - top) as f32 / dest_h as f32) * texture.height as f32).floor() as u32;
        let src_y = src_y.min(texture.height - 1) as usize;
        for out_x in draw_left..draw_right {
            let src_x =
                (((out_x - left) as f32 / dest_w as f32) * texture.width as f32).floor() as u32;
            let src_x = src_x.min(texture.width - 1) as usize;
            copy_texel(
                frame,
                frame_width,
                texture,
                src_x,
                src_y,
                out_x,
                out_y,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn blit_rotated(
    frame: &mut [u8],
    frame_width: u32,
    frame_height: u32,
    texture: &LoadedTexture,
    center: Vec2,
    width: f32,
    height: f32,
    rotation_radians: f32,
) {
    let half_w = width * 0.5;
    let half_h = height * 0.5;
    let radius = (half_w * half_w + half_h * half_h).sqrt().ceil() as i32;
    let (sin, cos) = rotation_radians.sin_cos();

    let left = (center.x as i32 - radius).max(0);
    let top = (center.y as i32 - radius).max(0);
    let right = (center.x as i32 + radius + 1).min(frame_width as i32);
    let bottom = (center.y as i32 + radius + 1).min(frame_height as i32);

    for out_y in top..bottom {
        for out_x in left..right {
            let dx = out_x as f32 + 0.5 - center.x;
            let dy = out_y as f32 + 0.5 - center.y;
            // Inverse rotation takes the output pixel back into the
            // unrotated texture rectangle.
            let local_x = dx * cos + dy * sin;
            let local_y = -dx * sin + dy * cos;
            if local_x < -half_w || local_x >= half_w || local_y < -half_h || local_y >= half_h {
                continue;
            }
            let src_x = (((local_x + half_w) / width) * texture.width as f32).floor() as u32;
            let src_y = (((local_y + half_h) / height) * texture.height as f32).floor() as u32;
            let src_x = src_x.min(texture.width - 1) as usize;
            let src_y = src_y.min(texture.height - 1) as usize;
            copy_texel(
                frame,
                frame_width,
                texture,
                src_x,
                src_y,
                out_x,
                out_y,
            );
        }
    }
}

fn copy_texel(
    frame: &mut [u8],
    frame_width: u32,
    texture: &LoadedTexture,
    src_x: usize,
    src_y: usize,
    out_x: i32,
    out_y: i32,
) {
    let src_offset = (src_y * texture.width as usize + src_x) * 4;
    if src_offset + 4 > texture.rgba.len() {
        return;
    }
    let alpha = texture.rgba[src_offset + 3];
    if alpha == 0 {
        return;
    }
    let dst_offset = (out_y as usize * frame_width as usize + out_x as usize) * 4;
    if dst_offset + 4 > frame.len() {
        return;
    }
    frame[dst_offset..dst_offset + 4].copy_from_slice(&texture.rgba[src_offset..src_offset + 4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * width as usize + x as usize) * 4;
        [
            frame[offset],
            frame[offset + 1],
            frame[offset + 2],
            frame[offset + 3],
        ]
    }

    fn canvas_fixture<'a>(
        frame: &'a mut [u8],
        width: u32,
        height: u32,
        texture_paths: &'a HashMap<String, PathBuf>,
        texture_cache: &'a mut HashMap<String, Option<LoadedTexture>>,
        warned: &'a mut HashSet<String>,
    ) -> Canvas<'a> {
        Canvas::new(frame, width, height, texture_paths, texture_cache, warned)
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        let paths = HashMap::new();
        let mut cache = HashMap::new();
        let mut warned = HashSet::new();
        let mut canvas = canvas_fixture(&mut frame, 8, 8, &paths, &mut cache, &mut warned);
        canvas.clear([1, 2, 3, 255]);
        assert_eq!(pixel(&frame, 8, 0, 0), [1, 2, 3, 255]);
        assert_eq!(pixel(&frame, 8, 7, 7), [1, 2, 3, 255]);
    }

    #[test]
    fn draw_rect_is_clipped_at_frame_edges() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        let paths = HashMap::new();
        let mut cache = HashMap::new();
        let mut warned = HashSet::new();
        let mut canvas = canvas_fixture(&mut frame, 8, 8, &paths, &mut cache, &mut warned);
        canvas.draw_rect(Vec2::new(0.0, 0.0), 6.0, 6.0, [9, 9, 9, 255]);
        assert_eq!(pixel(&frame, 8, 0, 0), [9, 9, 9, 255]);
        assert_eq!(pixel(&frame, 8, 2, 2), [9, 9, 9, 255]);
        assert_eq!(pixel(&frame, 8, 4, 4), [0, 0, 0, 0]);
    }

    #[test]
    fn missing_texture_draws_placeholder_and_warns_once() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        let paths = HashMap::new();
        let mut cache = HashMap::new();
        let mut warned = HashSet::new();
        {
            let mut canvas = canvas_fixture(&mut frame, 8, 8, &paths, &mut cache, &mut warned);
            canvas.draw_texture("Nope", Vec2::new(4.0, 4.0), 4.0, 4.0, 0.0);
            canvas.draw_texture("Nope", Vec2::new(4.0, 4.0), 4.0, 4.0, 0.0);
        }
        assert_eq!(pixel(&frame, 8, 4, 4), PLACEHOLDER_COLOR);
        assert!(warned.contains("Nope"));
        assert_eq!(warned.len(), 1);
        assert!(matches!(cache.get("Nope"), Some(None)));
    }

    #[test]
    fn axis_aligned_blit_scales_texture_to_dest_rect() {
        let texture = LoadedTexture {
            width: 2,
            height: 2,
            rgba: vec![
                255, 0, 0, 255, /* */ 0, 255, 0, 255, //
                0, 0, 255, 255, /* */ 255, 255, 0, 255,
            ],
        };
        let mut frame = vec![0u8; 8 * 8 * 4];
        blit_axis_aligned(&mut frame, 8, 8, &texture, Vec2::new(4.0, 4.0), 4.0, 4.0);
        // Top-left quadrant of the dest rect samples texel (0,0).
        assert_eq!(pixel(&frame, 8, 2, 2), [255, 0, 0, 255]);
        assert_eq!(pixel(&frame, 8, 5, 5), [255, 255, 0, 255]);
        // Outside the dest rect stays untouched.
        assert_eq!(pixel(&frame, 8, 0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn transparent_texels_are_skipped() {
        let texture = LoadedTexture {
            width: 1,
            height: 1,
            rgba: vec![255, 255, 255, 0],
        };
        let mut frame = vec![7u8; 4 * 4 * 4];
        blit_axis_aligned(&mut frame, 4, 4, &texture, Vec2::new(2.0, 2.0), 2.0, 2.0);
        assert_eq!(pixel(&frame, 4, 2, 2), [7, 7, 7, 7]);
    }

    #[test]
    fn quarter_turn_swaps_rect_extents() {
        let texture = LoadedTexture {
            width: 1,
            height: 1,
            rgba: vec![9, 9, 9, 255],
        };
        let mut frame = vec![0u8; 16 * 16 * 4];
        // A wide flat rect rotated 90 degrees covers a tall thin column.
        blit_rotated(
            &mut frame,
            16,
            16,
            &texture,
            Vec2::new(8.0, 8.0),
            10.0,
            2.0,
            std::f32::consts::FRAC_PI_2,
        );
        assert_eq!(pixel(&frame, 16, 8, 4), [9, 9, 9, 255]);
        assert_eq!(pixel(&frame, 16, 8, 12), [9, 9, 9, 255]);
        assert_eq!(pixel(&frame, 16, 4, 8), [0, 0, 0, 0]);
        assert_eq!(pixel(&frame, 16, 12, 8), [0, 0, 0, 0]);
    }
}
