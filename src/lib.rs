//! The core examples: a bare window, keyboard-driven ball, mouse-driven ball.
//!
//! Each module holds the example's state and per-frame logic as a
//! [`skia_frame::Scene`]; the binaries under `src/bin` only open the window.

pub mod basic_window;
pub mod input_keys;
pub mod input_mouse;

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 450;
