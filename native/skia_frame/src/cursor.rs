/// Pointer visibility as requested by the scene.
///
/// The scene flips `visible` through [`CursorState::hide`] and
/// [`CursorState::show`]; the backend picks the change up once via
/// [`CursorState::take_change`] and applies it to the window.
#[derive(Debug, Clone, Copy)]
pub struct CursorState {
    visible: bool,
    pending: Option<bool>,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            visible: true,
            pending: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    pub fn show(&mut self) {
        self.set_visible(true);
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.pending = Some(visible);
        }
    }

    pub fn take_change(&mut self) -> Option<bool> {
        self.pending.take()
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_reports_one_change() {
        let mut cursor = CursorState::new();
        cursor.hide();
        cursor.hide();
        assert!(!cursor.is_visible());
        assert_eq!(cursor.take_change(), Some(false));
        assert_eq!(cursor.take_change(), None);
    }

    #[test]
    fn hide_then_show_collapses_to_latest() {
        let mut cursor = CursorState::new();
        cursor.hide();
        cursor.show();
        assert!(cursor.is_visible());
        assert_eq!(cursor.take_change(), Some(true));
    }

    #[test]
    fn show_when_visible_is_a_no_op() {
        let mut cursor = CursorState::new();
        cursor.show();
        assert_eq!(cursor.take_change(), None);
    }
}
