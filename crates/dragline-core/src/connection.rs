use crate::barbell::BarbellParams;
use crate::board::EndpointBoard;
use crate::id::EndpointId;
use crate::style::ConnectionStyle;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A committed link between two endpoints, anchored at their centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: EndpointId,
    pub target: EndpointId,
    pub from: Point,
    pub to: Point,
}

impl Connection {
    /// Anchor a connection between two endpoints on the board.
    /// Returns `None` if either endpoint is missing.
    pub fn between(board: &EndpointBoard, source: EndpointId, target: EndpointId) -> Option<Self> {
        Some(Self {
            source,
            target,
            from: board.anchor(source)?,
            to: board.anchor(target)?,
        })
    }

    pub fn barbell(&self, style: &ConnectionStyle) -> BarbellParams {
        BarbellParams::new(self.from, self.to, style.bar_thickness, style.bell_radius)
    }
}
