use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageReader;
use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use super::canvas::Canvas;

pub(crate) struct LoadedTexture {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) rgba: Vec<u8>,
}

pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
    texture_paths: HashMap<String, PathBuf>,
    texture_cache: HashMap<String, Option<LoadedTexture>>,
    warned_missing_keys: HashSet<String>,
}

impl Renderer {
    pub fn new(
        window: Arc<Window>,
        texture_paths: HashMap<String, PathBuf>,
    ) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width, size.height)?;
        Ok(Self {
            window,
            pixels,
            width: size.width,
            height: size.height,
            texture_paths,
            texture_cache: HashMap::new(),
            warned_missing_keys: HashSet::new(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    pub fn render_frame(&mut self, draw: impl FnOnce(&mut Canvas<'_>)) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }
        let frame = self.pixels.frame_mut();
        let mut canvas = Canvas::new(
            frame,
            self.width,
            self.height,
            &self.texture_paths,
            &mut self.texture_cache,
            &mut self.warned_missing_keys,
        );
        draw(&mut canvas);
        self.pixels.render()
    }
}

pub(crate) fn load_texture_rgba(path: &Path) -> Result<LoadedTexture, String> {
    let reader = ImageReader::open(path).map_err(|error| format!("file_open_failed:{error}"))?;
    let decoded = reader
        .decode()
        .map_err(|error| format!("decode_failed:{error}"))?;
    let image = decoded.to_rgba8();
    Ok(LoadedTexture {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}
