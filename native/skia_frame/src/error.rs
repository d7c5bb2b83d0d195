//! Errors surfaced while bringing up or driving a window.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to build display: {0}")]
    Display(String),

    #[error("could not create window: {0}")]
    Os(#[from] winit::error::OsError),

    #[error("failed to get window handle: {0}")]
    WindowHandle(#[from] raw_window_handle::HandleError),

    #[error("GL error: {0}")]
    Gl(#[from] glutin::error::Error),

    #[error("skia error: {0}")]
    Skia(&'static str),
}
