//! Window-free half of the frame loop.
//!
//! [`FrameLoop`] owns the scene together with the input, cursor and pacing
//! state. The winit backend feeds it events and presents the draw list that
//! [`FrameLoop::step`] produces; tests drive it directly.

use std::time::Instant;

use crate::cursor::CursorState;
use crate::input::{InputEvent, InputState};
use crate::input_translate::Key;
use crate::pacing::FramePacer;
use crate::renderer::DrawList;

/// Per-frame view handed to [`Scene::update`].
pub struct FrameContext<'a> {
    pub input: &'a InputState,
    pub cursor: &'a mut CursorState,
}

/// A program's state and per-frame behavior.
pub trait Scene {
    fn update(&mut self, ctx: &mut FrameContext<'_>);
    fn draw(&self, draw_list: &mut DrawList);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopStatus {
    Continue,
    Exit,
}

pub struct FrameLoop<S> {
    scene: S,
    input: InputState,
    cursor: CursorState,
    pacer: FramePacer,
    exit_key: Option<Key>,
    draw_list: DrawList,
}

impl<S: Scene> FrameLoop<S> {
    pub fn new(scene: S, target_fps: u32, exit_key: Option<Key>, now: Instant) -> Self {
        Self {
            scene,
            input: InputState::new(),
            cursor: CursorState::new(),
            pacer: FramePacer::new(target_fps, now),
            exit_key,
            draw_list: DrawList::new(),
        }
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    /// True once the window was asked to close or the exit key went down.
    pub fn should_close(&self) -> bool {
        self.input.close_requested()
            || self
                .exit_key
                .is_some_and(|key| self.input.is_key_pressed(key))
    }

    /// Runs one frame: close check, scene update, draw recording.
    ///
    /// The scene is not updated on the frame the close signal is seen.
    pub fn step(&mut self, now: Instant) -> LoopStatus {
        if self.should_close() {
            return LoopStatus::Exit;
        }

        self.pacer.tick(now);
        let mut ctx = FrameContext {
            input: &self.input,
            cursor: &mut self.cursor,
        };
        self.scene.update(&mut ctx);

        self.draw_list.clear();
        self.scene.draw(&mut self.draw_list);
        self.input.end_frame();
        LoopStatus::Continue
    }

    /// Like [`FrameLoop::step`], but only once the pacer says the next frame
    /// is due. Returns `None` for early redraws, which should re-present the
    /// last draw list.
    pub fn step_if_due(&mut self, now: Instant) -> Option<LoopStatus> {
        self.pacer.is_due(now).then(|| self.step(now))
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn cursor_mut(&mut self) -> &mut CursorState {
        &mut self.cursor
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;
    use crate::input::Action;

    #[derive(Default)]
    struct Counter {
        frames: u32,
    }

    impl Scene for Counter {
        fn update(&mut self, _ctx: &mut FrameContext<'_>) {
            self.frames += 1;
        }

        fn draw(&self, draw_list: &mut DrawList) {
            draw_list.clear_background(Palette::RayWhite);
        }
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            action: Action::Press,
            repeat: false,
        }
    }

    #[test]
    fn runs_until_close_requested() {
        let now = Instant::now();
        let mut frame_loop = FrameLoop::new(Counter::default(), 60, Some(Key::Escape), now);
        for _ in 0..3 {
            assert_eq!(frame_loop.step(now), LoopStatus::Continue);
        }
        frame_loop.push_input(InputEvent::CloseRequested);
        assert_eq!(frame_loop.step(now), LoopStatus::Exit);
        assert_eq!(frame_loop.scene().frames, 3);
    }

    #[test]
    fn exit_key_press_closes() {
        let now = Instant::now();
        let mut frame_loop = FrameLoop::new(Counter::default(), 60, Some(Key::Escape), now);
        frame_loop.push_input(press(Key::Space));
        assert_eq!(frame_loop.step(now), LoopStatus::Continue);
        frame_loop.push_input(press(Key::Escape));
        assert_eq!(frame_loop.step(now), LoopStatus::Exit);
        assert_eq!(frame_loop.scene().frames, 1);
    }

    #[test]
    fn exit_key_can_be_disabled() {
        let now = Instant::now();
        let mut frame_loop = FrameLoop::new(Counter::default(), 60, None, now);
        frame_loop.push_input(press(Key::Escape));
        assert_eq!(frame_loop.step(now), LoopStatus::Continue);
    }

    #[test]
    fn early_redraws_do_not_advance_the_scene() {
        let start = Instant::now();
        let mut frame_loop = FrameLoop::new(Counter::default(), 60, None, start);
        let interval = frame_loop.pacer().interval().expect("paced");

        assert_eq!(frame_loop.step_if_due(start), Some(LoopStatus::Continue));
        assert_eq!(frame_loop.step_if_due(start + interval / 2), None);
        assert_eq!(frame_loop.scene().frames, 1);
        assert_eq!(frame_loop.draw_list().ops().len(), 1);

        assert_eq!(
            frame_loop.step_if_due(start + interval),
            Some(LoopStatus::Continue)
        );
        assert_eq!(frame_loop.scene().frames, 2);
    }

    #[test]
    fn early_redraws_keep_press_edges() {
        let start = Instant::now();
        let mut frame_loop = FrameLoop::new(Counter::default(), 60, Some(Key::Escape), start);
        let interval = frame_loop.pacer().interval().expect("paced");
        frame_loop.step_if_due(start);

        frame_loop.push_input(press(Key::Escape));
        assert_eq!(frame_loop.step_if_due(start + interval / 2), None);
        assert_eq!(
            frame_loop.step_if_due(start + interval),
            Some(LoopStatus::Exit)
        );
    }

    #[test]
    fn unpaced_loop_steps_on_every_redraw() {
        let start = Instant::now();
        let mut frame_loop = FrameLoop::new(Counter::default(), 0, None, start);
        for _ in 0..4 {
            assert_eq!(frame_loop.step_if_due(start), Some(LoopStatus::Continue));
        }
        assert_eq!(frame_loop.scene().frames, 4);
    }

    #[test]
    fn step_records_the_scene_draw_list() {
        let now = Instant::now();
        let mut frame_loop = FrameLoop::new(Counter::default(), 60, None, now);
        frame_loop.step(now);
        frame_loop.step(now);
        assert_eq!(frame_loop.draw_list().ops().len(), 1);
    }
}
