//! Thin window + input + 2D drawing layer on winit, glutin and Skia.
//!
//! A program implements [`Scene`] and hands it to [`run`] together with a
//! [`WindowConfig`]. Every frame the scene reads the polled [`InputState`],
//! updates itself and records draw commands into a [`DrawList`].

mod backend;
pub mod color;
pub mod config;
pub mod cursor;
pub mod error;
pub mod frame_loop;
pub mod input;
pub mod input_translate;
pub mod pacing;
pub mod raster_backend;
pub mod renderer;

pub use backend::run;
pub use color::Palette;
pub use config::WindowConfig;
pub use cursor::CursorState;
pub use error::FrameError;
pub use frame_loop::{FrameContext, FrameLoop, LoopStatus, Scene};
pub use input::{Action, InputEvent, InputState};
pub use input_translate::{Key, MouseButton};
pub use pacing::FramePacer;
pub use raster_backend::{RasterFrame, render_frame};
pub use renderer::{DrawList, DrawOp};
