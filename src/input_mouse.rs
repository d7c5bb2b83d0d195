use skia_frame::{DrawList, FrameContext, Key, MouseButton, Palette, Scene, WindowConfig};

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const TITLE: &str = "raylib [core] example - mouse input";
pub const BALL_RADIUS: f32 = 40.0;

/// Checked in order; the first button pressed this frame picks the colour.
pub const BUTTON_COLORS: [(MouseButton, Palette); 6] = [
    (MouseButton::Left, Palette::Maroon),
    (MouseButton::Middle, Palette::Lime),
    (MouseButton::Side, Palette::Purple),
    (MouseButton::Extra, Palette::Yellow),
    (MouseButton::Forward, Palette::Orange),
    (MouseButton::Back, Palette::Beige),
];

pub fn config() -> WindowConfig {
    WindowConfig::new(TITLE, SCREEN_WIDTH, SCREEN_HEIGHT).with_target_fps(60)
}

#[derive(Debug)]
pub struct InputMouse {
    pub ball_position: (f32, f32),
    pub ball_color: Palette,
    pub cursor_hidden: bool,
}

impl InputMouse {
    pub fn new() -> Self {
        Self {
            ball_position: (-100.0, -100.0),
            ball_color: Palette::DarkBlue,
            cursor_hidden: false,
        }
    }
}

impl Default for InputMouse {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for InputMouse {
    fn update(&mut self, ctx: &mut FrameContext<'_>) {
        if ctx.input.is_key_pressed(Key::H) {
            if self.cursor_hidden {
                ctx.cursor.show();
            } else {
                ctx.cursor.hide();
            }
            self.cursor_hidden = !self.cursor_hidden;
        }

        self.ball_position = ctx.input.cursor_pos();

        if let Some(&(_, color)) = BUTTON_COLORS
            .iter()
            .find(|(button, _)| ctx.input.is_button_pressed(*button))
        {
            self.ball_color = color;
        }
    }

    fn draw(&self, draw_list: &mut DrawList) {
        draw_list.clear_background(Palette::RayWhite);
        draw_list.draw_circle(self.ball_position, BALL_RADIUS, self.ball_color);
        draw_list.draw_text(
            "move the ball with mouse and click button to change color",
            10.0,
            10.0,
            20.0,
            Palette::DarkGray,
        );
        draw_list.draw_text(
            "Press 'H' to toggle cursor visibility",
            10.0,
            30.0,
            20.0,
            Palette::DarkGray,
        );

        if self.cursor_hidden {
            draw_list.draw_text("CURSOR HIDDEN", 20.0, 60.0, 20.0, Palette::Red);
        } else {
            draw_list.draw_text("CURSOR VISIBLE", 20.0, 60.0, 20.0, Palette::Lime);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use skia_frame::{Action, DrawOp, FrameLoop, InputEvent};

    fn frame_loop() -> FrameLoop<InputMouse> {
        FrameLoop::new(InputMouse::new(), 60, Some(Key::Escape), Instant::now())
    }

    fn click(button: MouseButton) -> [InputEvent; 2] {
        [
            InputEvent::CursorButton {
                button,
                action: Action::Press,
            },
            InputEvent::CursorButton {
                button,
                action: Action::Release,
            },
        ]
    }

    fn key(key: Key, action: Action, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            action,
            repeat,
        }
    }

    #[test]
    fn ball_follows_pointer() {
        let mut frames = frame_loop();
        frames.push_input(InputEvent::CursorPos { x: 120.0, y: 80.0 });
        frames.step(Instant::now());
        assert_eq!(frames.scene().ball_position, (120.0, 80.0));
    }

    #[test]
    fn left_wins_over_middle() {
        let mut frames = frame_loop();
        for event in click(MouseButton::Middle).into_iter().chain(click(MouseButton::Left)) {
            frames.push_input(event);
        }
        frames.step(Instant::now());
        assert_eq!(frames.scene().ball_color, Palette::Maroon);
    }

    #[test]
    fn each_button_maps_to_its_color() {
        for (button, color) in BUTTON_COLORS {
            let mut frames = frame_loop();
            frames.push_input(InputEvent::CursorButton {
                button,
                action: Action::Press,
            });
            frames.step(Instant::now());
            assert_eq!(frames.scene().ball_color, color);
        }
    }

    #[test]
    fn color_sticks_without_new_presses() {
        let mut frames = frame_loop();
        frames.push_input(InputEvent::CursorButton {
            button: MouseButton::Forward,
            action: Action::Press,
        });
        frames.step(Instant::now());
        // Still held, but no new press.
        frames.step(Instant::now());
        assert_eq!(frames.scene().ball_color, Palette::Orange);

        frames.push_input(InputEvent::CursorButton {
            button: MouseButton::Right,
            action: Action::Press,
        });
        frames.step(Instant::now());
        assert_eq!(frames.scene().ball_color, Palette::Orange);
    }

    #[test]
    fn h_toggles_cursor_once_per_press() {
        let mut frames = frame_loop();
        frames.push_input(key(Key::H, Action::Press, false));
        frames.step(Instant::now());
        assert!(frames.scene().cursor_hidden);
        assert_eq!(frames.cursor_mut().take_change(), Some(false));

        // Held and auto-repeating: no further toggles.
        frames.push_input(key(Key::H, Action::Press, true));
        frames.step(Instant::now());
        frames.step(Instant::now());
        assert!(frames.scene().cursor_hidden);
        assert_eq!(frames.cursor_mut().take_change(), None);

        frames.push_input(key(Key::H, Action::Release, false));
        frames.push_input(key(Key::H, Action::Press, false));
        frames.step(Instant::now());
        assert!(!frames.scene().cursor_hidden);
        assert_eq!(frames.cursor_mut().take_change(), Some(true));
    }

    #[test]
    fn status_line_tracks_cursor_flag() {
        let mut scene = InputMouse::new();
        let mut list = DrawList::new();
        scene.draw(&mut list);
        assert!(matches!(
            list.ops().last(),
            Some(DrawOp::Text { text, .. }) if text == "CURSOR VISIBLE"
        ));

        scene.cursor_hidden = true;
        list.clear();
        scene.draw(&mut list);
        assert!(matches!(
            list.ops().last(),
            Some(DrawOp::Text { text, color, .. })
                if text == "CURSOR HIDDEN" && *color == Palette::Red.to_color()
        ));
    }
}
