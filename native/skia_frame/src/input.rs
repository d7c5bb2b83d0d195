use std::collections::HashSet;

use crate::input_translate::{Key, MouseButton};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Press,
    Release,
}

/// Window input, already translated out of winit types.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        action: Action,
        repeat: bool,
    },
    CursorPos {
        x: f32,
        y: f32,
    },
    CursorButton {
        button: MouseButton,
        action: Action,
    },
    CloseRequested,
}

/// Keyboard and mouse state as seen by the current frame.
///
/// Events are folded in as they arrive between frames. "Down" queries
/// report held state, "pressed" queries report transitions that happened
/// since the previous call to [`InputState::end_frame`].
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
    keys_pressed: HashSet<Key>,
    buttons_down: HashSet<MouseButton>,
    buttons_pressed: HashSet<MouseButton>,
    cursor_pos: (f32, f32),
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key {
                key,
                action: Action::Press,
                repeat,
            } => {
                // OS auto-repeat keeps the key held but is not a new press.
                if self.keys_down.insert(key) && !repeat {
                    self.keys_pressed.insert(key);
                }
            }
            InputEvent::Key {
                key,
                action: Action::Release,
                ..
            } => {
                self.keys_down.remove(&key);
            }
            InputEvent::CursorPos { x, y } => self.cursor_pos = (x, y),
            InputEvent::CursorButton {
                button,
                action: Action::Press,
            } => {
                if self.buttons_down.insert(button) {
                    self.buttons_pressed.insert(button);
                }
            }
            InputEvent::CursorButton {
                button,
                action: Action::Release,
            } => {
                self.buttons_down.remove(&button);
            }
            InputEvent::CloseRequested => self.close_requested = true,
        }
    }

    /// Clears the per-frame press edges. Held state carries over.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Last pointer location in logical window coordinates.
    pub fn cursor_pos(&self) -> (f32, f32) {
        self.cursor_pos
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}
