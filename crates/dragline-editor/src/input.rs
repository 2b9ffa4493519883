//! Input abstraction layer.
//!
//! Normalizes the host's mouse/touch callbacks into a unified `InputEvent`
//! enum consumed by the connect tool. Modifier keys are not carried: a
//! connection drag behaves the same with or without them.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A normalized pointer event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f64, y: f64 },

    /// Pointer moved while pressed.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp { x: f64, y: f64 },

    /// The gesture was aborted by the host (escape, pointer left the
    /// application, window lost focus).
    Cancel,
}

impl InputEvent {
    pub fn from_pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp { x, y }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Some(Point::new(x, y))
            }
            Self::Cancel => None,
        }
    }
}
