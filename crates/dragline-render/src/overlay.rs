use dragline_core::overlay::OverlaySurface;
use kurbo::Line;

/// Retained overlay state painted on top of the board each frame.
#[derive(Debug, Clone, Default)]
pub struct OverlayLayer {
    line: Option<Line>,
    dirty: bool,
}

impl OverlayLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The line currently on screen, if a drag is in progress.
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    pub fn is_visible(&self) -> bool {
        self.line.is_some()
    }

    /// Return and clear the repaint request.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl OverlaySurface for OverlayLayer {
    fn present(&mut self, line: Line) {
        log::trace!("overlay {:?} -> {:?}", line.p0, line.p1);
        self.line = Some(line);
        self.dirty = true;
    }

    fn dismiss(&mut self) {
        if self.line.take().is_some() {
            self.dirty = true;
        }
    }
}
