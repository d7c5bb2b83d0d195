use skia_safe::{AlphaType, ColorType, ImageInfo, image::CachingHint, surfaces};

use crate::error::FrameError;
use crate::renderer::{DrawList, Renderer};

/// Tightly packed RGB pixels of an offscreen frame.
#[derive(Clone, Debug)]
pub struct RasterFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RasterFrame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 3) as usize;
        Some((
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ))
    }
}

fn read_frame(renderer: &mut Renderer, size: (u32, u32)) -> Result<RasterFrame, FrameError> {
    let (width, height) = size;
    let image = renderer.surface_mut().image_snapshot();
    let image_info = ImageInfo::new(
        (width as i32, height as i32),
        ColorType::RGB888x,
        AlphaType::Opaque,
        None,
    );
    let row_bytes = image_info.min_row_bytes();
    let mut pixels = vec![0u8; row_bytes * height as usize];
    let ok = image.read_pixels(
        &image_info,
        pixels.as_mut_slice(),
        row_bytes,
        (0, 0),
        CachingHint::Disallow,
    );
    if !ok {
        return Err(FrameError::Skia("failed to read back raster pixels"));
    }

    let mut rgb = Vec::with_capacity((width * height * 3) as usize);
    for chunk in pixels.chunks_exact(4) {
        rgb.push(chunk[0]);
        rgb.push(chunk[1]);
        rgb.push(chunk[2]);
    }

    Ok(RasterFrame {
        width,
        height,
        data: rgb,
    })
}

/// Renders a draw list offscreen, without a window or GL context.
pub fn render_frame(draw_list: &DrawList, size: (u32, u32)) -> Result<RasterFrame, FrameError> {
    let width = size.0.max(1);
    let height = size.1.max(1);

    let image_info = ImageInfo::new(
        (width as i32, height as i32),
        ColorType::BGRA8888,
        AlphaType::Premul,
        None,
    );
    let surface = surfaces::raster(&image_info, None, None)
        .ok_or(FrameError::Skia("failed to create raster surface"))?;

    let mut renderer = Renderer::from_surface(surface);
    renderer.redraw(draw_list);
    read_frame(&mut renderer, (width, height))
}
