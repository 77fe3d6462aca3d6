use glam::Vec2;

/// Turns absolute cursor positions into accumulated look offsets.
///
/// The first sample after creation or [`reset`](Self::reset) only records
/// the position, so the camera does not jump toward wherever the cursor
/// entered the window.
#[derive(Debug, Default)]
pub(crate) struct CursorTracker {
    last_pos: Option<Vec2>,
    pending: Vec2,
}

impl CursorTracker {
    /// Record a cursor sample. Y offsets are flipped so moving the cursor
    /// up the screen yields a positive (upward) pitch offset.
    pub(crate) fn handle_position(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        if let Some(last) = self.last_pos {
            self.pending += Vec2::new(pos.x - last.x, last.y - pos.y);
        }
        self.last_pos = Some(pos);
    }

    /// Forget the last position; the next sample re-anchors.
    pub(crate) fn reset(&mut self) {
        self.last_pos = None;
        self.pending = Vec2::ZERO;
    }

    /// Offsets accumulated since the previous call.
    pub(crate) fn take_offset(&mut self) -> Vec2 {
        std::mem::take(&mut self.pending)
    }
}
