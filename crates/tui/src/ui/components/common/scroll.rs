//! Vertical scroll bookkeeping for the two page panels.

/// Scroll offset clamped against the last measured content and viewport heights.
///
/// Heights are in terminal rows so the offset feeds `Paragraph::scroll`
/// directly. Bounds are refreshed on every render; key handling between
/// renders uses the most recent measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollState {
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Records the latest measurements and re-clamps the offset.
    pub fn set_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Moves by `delta` rows (`+` down, `-` up).
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.offset = u16::try_from(next).unwrap_or(self.offset);
    }

    /// Moves by whole viewports, keeping one row of overlap.
    pub fn page(&mut self, pages: i32) {
        let step = i32::from(self.viewport_height.saturating_sub(1).max(1));
        self.scroll_by(step * pages);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }
}
