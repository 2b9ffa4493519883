//! The transient line shown while a connection is being dragged.
//!
//! A [`LineOverlay`] is plain data; drawing it is the job of an
//! [`OverlaySurface`]. `remove` consumes the overlay, so a removed overlay
//! cannot be moved or removed again.

use crate::barbell::BarbellParams;
use crate::style::ConnectionStyle;
use kurbo::{Line, Point};

/// Host-side presenter for the drag line.
pub trait OverlaySurface {
    /// Show the line, or move it if already shown.
    fn present(&mut self, line: Line);

    /// Take the line off screen.
    fn dismiss(&mut self);
}

/// A surface that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl OverlaySurface for NullSurface {
    fn present(&mut self, _line: Line) {}
    fn dismiss(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineOverlay {
    from: Point,
    to: Point,
}

impl LineOverlay {
    pub fn create(from: Point, to: Point, surface: &mut impl OverlaySurface) -> Self {
        let overlay = Self { from, to };
        surface.present(overlay.line());
        overlay
    }

    pub fn move_to(&mut self, to: Point, surface: &mut impl OverlaySurface) {
        self.to = to;
        surface.present(self.line());
    }

    pub fn remove(self, surface: &mut impl OverlaySurface) {
        surface.dismiss();
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    pub fn line(&self) -> Line {
        Line::new(self.from, self.to)
    }

    /// The overlay drawn as a barbell in the given style.
    pub fn barbell(&self, style: &ConnectionStyle) -> BarbellParams {
        BarbellParams::new(self.from, self.to, style.bar_thickness, style.bell_radius)
    }
}
