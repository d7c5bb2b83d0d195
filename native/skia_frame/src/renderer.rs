use std::sync::OnceLock;

use skia_safe::{
    Canvas, Color, ColorType, Font, FontMgr, FontStyle, Paint, Point, Surface, Typeface,
    gpu::{self, SurfaceOrigin, backend_render_targets, gl::FramebufferInfo},
};

use crate::color::Palette;
use crate::error::FrameError;

/// One recorded draw command. Coordinates are logical pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    /// `x`/`y` is the top-left corner of the text box.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
    Circle {
        center: (f32, f32),
        radius: f32,
        color: Color,
    },
}

/// Draw commands recorded by a scene for a single frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_background(&mut self, color: Palette) {
        self.ops.push(DrawOp::Clear(color.into()));
    }

    pub fn draw_text(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        color: Palette,
    ) {
        self.ops.push(DrawOp::Text {
            text: text.into(),
            x,
            y,
            size,
            color: color.into(),
        });
    }

    pub fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Palette) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: color.into(),
        });
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

fn create_skia_surface(
    dimensions: (i32, i32),
    fb_info: FramebufferInfo,
    gr_context: &mut gpu::DirectContext,
    num_samples: usize,
    stencil_size: usize,
) -> Result<Surface, FrameError> {
    let backend_render_target =
        backend_render_targets::make_gl(dimensions, num_samples, stencil_size, fb_info);

    gpu::surfaces::wrap_backend_render_target(
        gr_context,
        &backend_render_target,
        SurfaceOrigin::BottomLeft,
        ColorType::RGBA8888,
        None,
        None,
    )
    .ok_or(FrameError::Skia("could not wrap the GL framebuffer in a Skia surface"))
}

#[derive(Clone, Copy)]
pub enum SurfaceSource {
    Gl {
        fb_info: FramebufferInfo,
        num_samples: usize,
        stencil_size: usize,
    },
    Raster,
}

pub struct Renderer {
    surface: Surface,
    gr_context: Option<gpu::DirectContext>,
    source: SurfaceSource,
    scale_factor: f32,
}

impl Renderer {
    pub fn new(
        dimensions: (u32, u32),
        fb_info: FramebufferInfo,
        mut gr_context: gpu::DirectContext,
        num_samples: usize,
        stencil_size: usize,
    ) -> Result<Self, FrameError> {
        let surface = create_skia_surface(
            (dimensions.0 as i32, dimensions.1 as i32),
            fb_info,
            &mut gr_context,
            num_samples,
            stencil_size,
        )?;

        Ok(Self {
            surface,
            gr_context: Some(gr_context),
            source: SurfaceSource::Gl {
                fb_info,
                num_samples,
                stencil_size,
            },
            scale_factor: 1.0,
        })
    }

    pub fn from_surface(surface: Surface) -> Self {
        Self {
            surface,
            gr_context: None,
            source: SurfaceSource::Raster,
            scale_factor: 1.0,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor.max(0.1);
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn redraw(&mut self, draw_list: &DrawList) {
        let canvas = self.surface.canvas();

        canvas.save();
        if (self.scale_factor - 1.0).abs() > f32::EPSILON {
            canvas.scale((self.scale_factor, self.scale_factor));
        }

        for op in draw_list.ops() {
            draw_op(canvas, op);
        }

        canvas.restore();

        if let Some(gr) = self.gr_context.as_mut() {
            gr.flush_and_submit();
        }
    }

    pub fn resize(&mut self, dimensions: (u32, u32)) -> Result<(), FrameError> {
        if let SurfaceSource::Gl {
            fb_info,
            num_samples,
            stencil_size,
        } = self.source
            && let Some(context) = self.gr_context.as_mut()
        {
            self.surface = create_skia_surface(
                (dimensions.0 as i32, dimensions.1 as i32),
                fb_info,
                context,
                num_samples,
                stencil_size,
            )?;
        }
        Ok(())
    }
}

fn draw_op(canvas: &Canvas, op: &DrawOp) {
    match op {
        DrawOp::Clear(color) => {
            canvas.clear(*color);
        }
        DrawOp::Circle {
            center,
            radius,
            color,
        } => {
            let mut paint = Paint::default();
            paint.set_anti_alias(true);
            paint.set_color(*color);
            canvas.draw_circle(Point::new(center.0, center.1), *radius, &paint);
        }
        DrawOp::Text {
            text,
            x,
            y,
            size,
            color,
        } => {
            let Some(font) = default_font(*size) else {
                return;
            };
            let mut paint = Paint::default();
            paint.set_anti_alias(true);
            paint.set_color(*color);
            // Skia positions text by its baseline.
            let ascent = font.metrics().1.ascent;
            canvas.draw_str(text, (*x, *y - ascent), &font, &paint);
        }
    }
}

fn default_font(size: f32) -> Option<Font> {
    static DEFAULT_TYPEFACE: OnceLock<Option<Typeface>> = OnceLock::new();
    let typeface = DEFAULT_TYPEFACE
        .get_or_init(|| {
            let fm = FontMgr::new();
            let typeface = fm
                .match_family_style("DejaVu Sans", FontStyle::normal())
                .or_else(|| fm.match_family_style("Sans", FontStyle::normal()));
            if typeface.is_none() {
                log::warn!("no system typeface found; text will not be drawn");
            }
            typeface
        })
        .clone()?;
    Some(Font::new(typeface, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_list_records_in_call_order() {
        let mut list = DrawList::new();
        list.clear_background(Palette::RayWhite);
        list.draw_circle((400.0, 225.0), 50.0, Palette::Maroon);
        list.draw_text("hi", 10.0, 10.0, 20.0, Palette::DarkGray);

        assert_eq!(list.ops().len(), 3);
        assert_eq!(list.ops()[0], DrawOp::Clear(Palette::RayWhite.into()));
        assert_eq!(
            list.ops()[1],
            DrawOp::Circle {
                center: (400.0, 225.0),
                radius: 50.0,
                color: Palette::Maroon.into(),
            }
        );
        assert!(matches!(&list.ops()[2], DrawOp::Text { text, .. } if text == "hi"));

        list.clear();
        assert!(list.ops().is_empty());
    }
}
