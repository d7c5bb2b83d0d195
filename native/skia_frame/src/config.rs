use crate::color::Palette;
use crate::input_translate::Key;

/// Window and loop settings for one program run.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    /// Logical size in pixels.
    pub size: (u32, u32),
    pub resizable: bool,
    /// Frames per second to pace at; 0 runs unpaced.
    pub target_fps: u32,
    /// Key that closes the window, in addition to the close control.
    pub exit_key: Option<Key>,
    /// Colour the surface is cleared to before the first frame is drawn.
    pub clear_color: Palette,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "skia-frame".to_string(),
            size: (800, 450),
            resizable: false,
            target_fps: 60,
            exit_key: Some(Key::Escape),
            clear_color: Palette::RayWhite,
        }
    }
}

impl WindowConfig {
    pub fn new(title: &str, width: u32, height: u32) -> Self {
        Self {
            title: title.to_string(),
            size: (width, height),
            ..Self::default()
        }
    }

    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn with_exit_key(mut self, key: Option<Key>) -> Self {
        self.exit_key = key;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn with_clear_color(mut self, color: Palette) -> Self {
        self.clear_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_loop_defaults() {
        let config = WindowConfig::new("demo", 640, 480).with_target_fps(30);
        assert_eq!(config.title, "demo");
        assert_eq!(config.size, (640, 480));
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.exit_key, Some(Key::Escape));
        assert!(!config.resizable);
    }
}
