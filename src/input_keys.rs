use skia_frame::{DrawList, FrameContext, Key, Palette, Scene, WindowConfig};

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const TITLE: &str = "raylib [core] example - keyboard input";

/// Pixels the ball moves per frame while an arrow key is held.
pub const STEP: f32 = 10.0;
pub const BALL_RADIUS: f32 = 50.0;

pub fn config() -> WindowConfig {
    WindowConfig::new(TITLE, SCREEN_WIDTH, SCREEN_HEIGHT).with_target_fps(60)
}

#[derive(Debug)]
pub struct InputKeys {
    pub ball_position: (f32, f32),
}

impl InputKeys {
    pub fn new() -> Self {
        Self {
            ball_position: (SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0),
        }
    }
}

impl Default for InputKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for InputKeys {
    // Opposite keys are applied one after the other, so holding both cancels.
    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        let input = ctx.input;
        if input.is_key_down(Key::Right) {
            self.ball_position.0 += STEP;
        }
        if input.is_key_down(Key::Left) {
            self.ball_position.0 -= STEP;
        }
        if input.is_key_down(Key::Up) {
            self.ball_position.1 -= STEP;
        }
        if input.is_key_down(Key::Down) {
            self.ball_position.1 += STEP;
        }
    }

    fn draw(&self, draw_list: &mut DrawList) {
        draw_list.clear_background(Palette::RayWhite);
        draw_list.draw_text(
            "move the ball with arrow keys",
            10.0,
            10.0,
            20.0,
            Palette::DarkGray,
        );
        draw_list.draw_circle(self.ball_position, BALL_RADIUS, Palette::Maroon);
    }
}
