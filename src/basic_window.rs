//! raylib's basic window sample. Its title and greeting are spelled
//! correctly here; upstream ships "-basic windwos" and "Congrates! You cretaed".

use skia_frame::{DrawList, FrameContext, Palette, Scene, WindowConfig};

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const TITLE: &str = "raylib [core] example - basic window";
pub const GREETING: &str = "Congrats! You created your first window!";

pub fn config() -> WindowConfig {
    WindowConfig::new(TITLE, SCREEN_WIDTH, SCREEN_HEIGHT).with_target_fps(60)
}

/// No state: clears and prints a greeting every frame.
#[derive(Debug, Default)]
pub struct BasicWindow;

impl Scene for BasicWindow {
    fn update(&mut self, _ctx: &mut FrameContext<'_>) {}

    fn draw(&self, draw_list: &mut DrawList) {
        draw_list.clear_background(Palette::RayWhite);
        draw_list.draw_text(
            GREETING,
            190.0,
            200.0,
            20.0,
            Palette::LightGray,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skia_frame::DrawOp;

    #[test]
    fn draws_greeting_on_raywhite() {
        let mut list = DrawList::new();
        BasicWindow.draw(&mut list);
        assert_eq!(list.ops()[0], DrawOp::Clear(Palette::RayWhite.into()));
        assert!(matches!(
            &list.ops()[1],
            DrawOp::Text { x, y, size, .. } if (*x, *y, *size) == (190.0, 200.0, 20.0)
        ));
    }

    #[test]
    fn title_and_greeting_use_corrected_spelling() {
        assert_eq!(TITLE, "raylib [core] example - basic window");
        let mut list = DrawList::new();
        BasicWindow.draw(&mut list);
        assert_eq!(
            list.ops()[1],
            DrawOp::Text {
                text: "Congrats! You created your first window!".into(),
                x: 190.0,
                y: 200.0,
                size: 20.0,
                color: Palette::LightGray.into(),
            }
        );
    }
}
