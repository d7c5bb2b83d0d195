use std::{ffi::CString, num::NonZeroU32, time::Instant};

use glutin::{
    config::{Config as GlutinConfig, ConfigTemplateBuilder, GlConfig},
    context::{ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext},
    display::{Display, DisplayApiPreference, GetGlDisplay, GlDisplay},
    prelude::GlSurface,
    surface::{Surface as GlutinSurface, SurfaceAttributesBuilder, WindowSurface},
};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};
use skia_safe::gpu::gl::FramebufferInfo;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalPosition, LogicalSize, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::config::WindowConfig;
use crate::error::FrameError;
use crate::frame_loop::{FrameLoop, LoopStatus, Scene};
use crate::input::{Action, InputEvent};
use crate::input_translate::{map_mouse_button, map_physical_key};
use crate::renderer::{DrawList, Renderer};

struct Env {
    gl_surface: GlutinSurface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: Window,
}

struct App<S> {
    // Dropped before `env`: the Skia context must go before the window.
    renderer: Option<Renderer>,
    env: Option<Env>,
    config: WindowConfig,
    frame_loop: FrameLoop<S>,
    scale_factor: f64,
    error: Option<FrameError>,
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

fn proc_address(gl_config: &GlutinConfig, name: &str) -> *const std::ffi::c_void {
    match CString::new(name) {
        Ok(symbol) => gl_config.display().get_proc_address(symbol.as_c_str()),
        Err(_) => std::ptr::null(),
    }
}

/// Picks the config with the fewest samples; Skia does its own AA.
fn fewest_samples<C>(
    configs: impl Iterator<Item = C>,
    num_samples: impl Fn(&C) -> u8,
) -> Result<C, FrameError> {
    configs
        .min_by_key(|config| num_samples(config))
        .ok_or_else(|| FrameError::Display("display offered no GL configs".into()))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_preference(_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Egl
}

#[cfg(windows)]
fn display_preference(window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::WglThenEgl(Some(window))
}

#[cfg(target_os = "macos")]
fn display_preference(_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

fn create_env_renderer(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<(Env, Renderer), FrameError> {
    let (width, height) = config.size;
    let window_attributes = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_resizable(config.resizable)
        .with_inner_size(LogicalSize::new(width, height));

    let window = event_loop.create_window(window_attributes)?;
    let raw_window_handle = window.window_handle()?.as_raw();
    let raw_display_handle = window.display_handle()?.as_raw();

    let gl_display =
        unsafe { Display::new(raw_display_handle, display_preference(raw_window_handle)) }?;

    let template = ConfigTemplateBuilder::new()
        .with_alpha_size(8)
        .compatible_with_native_window(raw_window_handle)
        .build();
    let gl_config = fewest_samples(unsafe { gl_display.find_configs(template) }?, |cfg| {
        cfg.num_samples()
    })?;

    // Try core GL, fall back to GLES.
    let context_attributes = ContextAttributesBuilder::new().build(Some(raw_window_handle));
    let fallback_context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::Gles(None))
        .build(Some(raw_window_handle));

    let not_current_gl_context = unsafe {
        match gl_config
            .display()
            .create_context(&gl_config, &context_attributes)
        {
            Ok(context) => context,
            Err(err) => {
                log::warn!("desktop GL context unavailable ({err}), falling back to GLES");
                gl_config
                    .display()
                    .create_context(&gl_config, &fallback_context_attributes)?
            }
        }
    };

    let (width, height): (u32, u32) = window.inner_size().into();
    let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
        raw_window_handle,
        non_zero(width),
        non_zero(height),
    );

    let gl_surface = unsafe {
        gl_config
            .display()
            .create_window_surface(&gl_config, &attrs)?
    };

    let gl_context = not_current_gl_context.make_current(&gl_surface)?;

    gl::load_with(|s| proc_address(&gl_config, s));

    let interface = skia_safe::gpu::gl::Interface::new_load_with(|name| {
        if name == "eglGetCurrentDisplay" {
            return std::ptr::null();
        }
        proc_address(&gl_config, name)
    })
    .ok_or(FrameError::Skia("could not create Skia GL interface"))?;

    let gr_context = skia_safe::gpu::direct_contexts::make_gl(interface, None)
        .ok_or(FrameError::Skia("could not create Skia direct context"))?;

    let fb_info = {
        let mut fboid: i32 = 0;
        unsafe { gl::GetIntegerv(gl::FRAMEBUFFER_BINDING, &mut fboid) };

        FramebufferInfo {
            fboid: fboid as u32,
            format: skia_safe::gpu::gl::Format::RGBA8.into(),
            ..Default::default()
        }
    };

    let num_samples = gl_config.num_samples() as usize;
    let stencil_size = gl_config.stencil_size() as usize;

    let renderer = Renderer::new(
        (width, height),
        fb_info,
        gr_context,
        num_samples,
        stencil_size,
    )?;

    log::info!(
        "opened window \"{}\" at {width}x{height} ({num_samples} samples)",
        config.title
    );

    let env = Env {
        gl_surface,
        gl_context,
        window,
    };

    Ok((env, renderer))
}

impl<S: Scene> App<S> {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: FrameError) {
        log::error!("{err}");
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    fn handle_resize(&mut self, event_loop: &ActiveEventLoop, physical_size: PhysicalSize<u32>) {
        let (w, h): (u32, u32) = physical_size.into();
        let result = match (self.env.as_mut(), self.renderer.as_mut()) {
            (Some(env), Some(renderer)) => {
                env.gl_surface
                    .resize(&env.gl_context, non_zero(w), non_zero(h));
                env.window.request_redraw();
                renderer.resize((w.max(1), h.max(1)))
            }
            _ => Ok(()),
        };
        if let Err(err) = result {
            self.fail(event_loop, err);
        }
    }

    fn present(&mut self, draw_list: &DrawList) -> Result<(), FrameError> {
        if let (Some(env), Some(renderer)) = (self.env.as_mut(), self.renderer.as_mut()) {
            renderer.set_scale_factor(self.scale_factor as f32);
            renderer.redraw(draw_list);
            env.gl_surface.swap_buffers(&env.gl_context)?;
        }
        Ok(())
    }

    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        // Redraws the OS asks for between deadlines only re-present.
        match self.frame_loop.step_if_due(Instant::now()) {
            Some(LoopStatus::Exit) => {
                log::debug!("close signal observed, leaving frame loop");
                event_loop.exit();
                return;
            }
            Some(LoopStatus::Continue) => {
                if let (Some(visible), Some(env)) =
                    (self.frame_loop.cursor_mut().take_change(), self.env.as_ref())
                {
                    log::debug!("cursor visible: {visible}");
                    env.window.set_cursor_visible(visible);
                }
            }
            None => {}
        }

        if self.frame_loop.draw_list().ops().is_empty() {
            return;
        }
        let draw_list = self.frame_loop.draw_list().clone();
        if let Err(err) = self.present(&draw_list) {
            self.fail(event_loop, err);
        }
    }

    fn push_input(&mut self, event: InputEvent) {
        self.frame_loop.push_input(event);
    }
}

impl<S: Scene> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.env.is_some() {
            return;
        }

        match create_env_renderer(event_loop, &self.config) {
            Ok((env, renderer)) => {
                self.scale_factor = env.window.scale_factor();
                self.env = Some(env);
                self.renderer = Some(renderer);

                // Wayland windows often only appear after the first present.
                let mut first = DrawList::new();
                first.clear_background(self.config.clear_color);
                if let Err(err) = self.present(&first) {
                    self.fail(event_loop, err);
                }
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(key) = map_physical_key(event.physical_key) {
                    let action = match event.state {
                        ElementState::Pressed => Action::Press,
                        ElementState::Released => Action::Release,
                    };
                    self.push_input(InputEvent::Key {
                        key,
                        action,
                        repeat: event.repeat,
                    });
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical: LogicalPosition<f64> = position.to_logical(self.scale_factor);
                self.push_input(InputEvent::CursorPos {
                    x: logical.x as f32,
                    y: logical.y as f32,
                });
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = map_mouse_button(button) {
                    let action = match state {
                        ElementState::Pressed => Action::Press,
                        ElementState::Released => Action::Release,
                    };
                    self.push_input(InputEvent::CursorButton { button, action });
                }
            }

            WindowEvent::CloseRequested => {
                log::debug!("window close requested");
                self.push_input(InputEvent::CloseRequested);
                if let Some(env) = self.env.as_ref() {
                    env.window.request_redraw();
                }
            }

            WindowEvent::Resized(physical_size) => {
                self.handle_resize(event_loop, physical_size);
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
                if let Some(size) = self.env.as_ref().map(|env| env.window.inner_size()) {
                    self.handle_resize(event_loop, size);
                }
            }

            WindowEvent::RedrawRequested => self.run_frame(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(env) = self.env.as_ref() else {
            return;
        };

        let pacer = self.frame_loop.pacer();
        if pacer.is_due(Instant::now()) {
            env.window.request_redraw();
        }
        match pacer.deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Poll),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.renderer = None;
        self.env = None;
        log::info!("window closed");
    }
}

/// Opens a window and runs `scene` until the close signal is observed.
pub fn run<S: Scene>(config: WindowConfig, scene: S) -> Result<(), FrameError> {
    let event_loop = EventLoop::new()?;
    let frame_loop = FrameLoop::new(scene, config.target_fps, config.exit_key, Instant::now());

    let mut app = App {
        renderer: None,
        env: None,
        config,
        frame_loop,
        scale_factor: 1.0,
        error: None,
    };
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewest_samples_prefers_the_lowest_count() {
        let picked = fewest_samples([4u8, 0, 8, 0].into_iter().enumerate(), |(_, n)| *n);
        assert_eq!(picked.ok(), Some((1, 0)));
    }

    #[test]
    fn fewest_samples_reports_an_empty_display() {
        let picked = fewest_samples(std::iter::empty::<u8>(), |n| *n);
        assert!(matches!(picked, Err(FrameError::Display(_))));
    }
}
