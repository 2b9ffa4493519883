//! Connect tool: routes pointer events into the drag coordinator.
//!
//! The host hit-tests each event and passes the endpoint under the pointer
//! alongside it, or lets [`ConnectTool::handle_on_board`] hit-test the board.
//!
//! | Event | Inactive | Active |
//! |-------|----------|--------|
//! | **PointerDown** | begin on hit endpoint | refused (`AlreadyActive`) |
//! | **PointerMove** | ignored | move line, update hover |
//! | **PointerUp** | ignored | drop on hit endpoint |
//! | **Cancel** | ignored | cancel |

use crate::coordinator::{DragCoordinator, DropOutcome};
use crate::input::InputEvent;
use crate::sink::ConnectionSink;
use dragline_core::board::EndpointBoard;
use dragline_core::error::DragError;
use dragline_core::id::EndpointId;
use dragline_core::overlay::{NullSurface, OverlaySurface};
use dragline_render::hit_test;
use kurbo::Point;

pub struct ConnectTool<S: OverlaySurface = NullSurface> {
    pub coordinator: DragCoordinator<S>,
}

impl Default for ConnectTool<NullSurface> {
    fn default() -> Self {
        Self::new(NullSurface)
    }
}

impl<S: OverlaySurface> ConnectTool<S> {
    pub fn new(surface: S) -> Self {
        Self {
            coordinator: DragCoordinator::new(surface),
        }
    }

    /// Handle an event, hit-testing its position against the board.
    pub fn handle_on_board(
        &mut self,
        event: &InputEvent,
        board: &mut EndpointBoard,
        sink: &mut impl ConnectionSink,
    ) -> Result<Option<DropOutcome>, DragError> {
        let hit = event.position().and_then(|p| hit_test(board, p));
        self.handle(event, hit, board, sink)
    }

    /// Handle one input event.
    ///
    /// Returns the outcome when the event ended a session.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        hit: Option<EndpointId>,
        board: &mut EndpointBoard,
        sink: &mut impl ConnectionSink,
    ) -> Result<Option<DropOutcome>, DragError> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                if let Some(source) = hit {
                    self.coordinator
                        .begin_session(board, source, Point::new(x, y))?;
                } else if self.coordinator.is_active() {
                    log::warn!("pointer down on empty space during a drag");
                }
                Ok(None)
            }
            InputEvent::PointerMove { x, y } => {
                if !self.coordinator.is_active() {
                    return Ok(None);
                }
                self.coordinator.update_session(Point::new(x, y))?;
                self.coordinator.hover(board, hit)?;
                Ok(None)
            }
            InputEvent::PointerUp { x, y } => {
                if !self.coordinator.is_active() {
                    return Ok(None);
                }
                let outcome = self
                    .coordinator
                    .attempt_drop(board, hit, Point::new(x, y), sink)?;
                Ok(Some(outcome))
            }
            InputEvent::Cancel => {
                if !self.coordinator.is_active() {
                    return Ok(None);
                }
                self.coordinator.cancel(board)?;
                Ok(Some(DropOutcome::Cancelled))
            }
        }
    }
}
