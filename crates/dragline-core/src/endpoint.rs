//! Connectable endpoints and their drag state machine.
//!
//! ```text
//!            begin_as_source            session_ended
//!   Idle ───────────────────▶ Source ───────────────▶ Idle
//!    │
//!    │ drag_entered(true)      drag_exited / session_ended / perform_drop
//!    └───────────────────▶ Target ─────────────────────────────────▶ Idle
//! ```
//!
//! Requests that do not apply to the current state are ignored. Every real
//! transition raises the needs-display flag so the host can repaint.

use crate::id::EndpointId;
use crate::style::{EndpointTheme, ShapeStyle};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Natural size of an endpoint widget.
pub const INTRINSIC_SIZE: Size = Size::new(80.0, 80.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EndpointState {
    #[default]
    Idle,
    Source,
    Target,
}

/// Answer of an endpoint asked to accept a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    Accept,
    Reject,
}

#[derive(Debug, Clone)]
pub struct Endpoint {
    pub id: EndpointId,
    pub frame: Rect,
    state: EndpointState,
    needs_display: bool,
}

impl Endpoint {
    pub fn new(id: EndpointId, frame: Rect) -> Self {
        Self {
            id,
            frame,
            state: EndpointState::Idle,
            needs_display: true,
        }
    }

    /// An endpoint of [`INTRINSIC_SIZE`] with its top-left corner at `origin`.
    pub fn at(id: EndpointId, origin: Point) -> Self {
        Self::new(id, Rect::from_origin_size(origin, INTRINSIC_SIZE))
    }

    pub fn state(&self) -> EndpointState {
        self.state
    }

    pub fn center(&self) -> Point {
        self.frame.center()
    }

    pub fn style<'a>(&self, theme: &'a EndpointTheme) -> &'a ShapeStyle {
        theme.style(self.state)
    }

    /// Return and clear the repaint request.
    pub fn take_needs_display(&mut self) -> bool {
        std::mem::take(&mut self.needs_display)
    }

    /// Idle → Source.
    pub fn begin_as_source(&mut self) -> bool {
        match self.state {
            EndpointState::Idle => self.set_state(EndpointState::Source),
            _ => false,
        }
    }

    /// Idle → Target, only while another endpoint is the active source.
    pub fn drag_entered(&mut self, has_active_foreign_source: bool) -> bool {
        match self.state {
            EndpointState::Idle if has_active_foreign_source => {
                self.set_state(EndpointState::Target)
            }
            _ => false,
        }
    }

    /// Target → Idle.
    pub fn drag_exited(&mut self) -> bool {
        match self.state {
            EndpointState::Target => self.set_state(EndpointState::Idle),
            _ => false,
        }
    }

    /// Source/Target → Idle. Idempotent.
    pub fn session_ended(&mut self) -> bool {
        match self.state {
            EndpointState::Idle => false,
            EndpointState::Source | EndpointState::Target => self.set_state(EndpointState::Idle),
        }
    }

    /// Accept a drop if this endpoint is the current target.
    pub fn perform_drop(&mut self) -> DropResult {
        match self.state {
            EndpointState::Target => {
                self.set_state(EndpointState::Idle);
                DropResult::Accept
            }
            _ => {
                log::debug!("{} rejected drop while {:?}", self.id, self.state);
                DropResult::Reject
            }
        }
    }

    fn set_state(&mut self, state: EndpointState) -> bool {
        log::debug!("{}: {:?} -> {:?}", self.id, self.state, state);
        self.state = state;
        self.needs_display = true;
        true
    }
}
