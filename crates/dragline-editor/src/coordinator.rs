//! Drag coordinator: one connection drag from pointer-down to release.
//!
//! The coordinator is a long-lived object; a session's state survives
//! between the host's event callbacks inside it. It owns the overlay
//! surface and refers to endpoints only by id, resolving them on the
//! board at each use. A session ends through exactly one path,
//! `end_session`, whether the drop connects, is rejected, or is cancelled.
//!
//! ```text
//!   Inactive ──begin_session──▶ Active ──attempt_drop / cancel──▶ Inactive
//!                                 │ ▲
//!                                 └─┘ update_session, hover
//! ```

use crate::sink::ConnectionSink;
use dragline_core::board::EndpointBoard;
use dragline_core::connection::Connection;
use dragline_core::endpoint::DropResult;
use dragline_core::error::DragError;
use dragline_core::id::EndpointId;
use dragline_core::overlay::{LineOverlay, NullSurface, OverlaySurface};
use kurbo::{Point, Rect};

/// What is being dragged: the source's frame and identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPayload {
    pub frame: Rect,
    pub contents: EndpointId,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    Connected(Connection),
    /// The endpoint under the pointer refused the drop.
    Rejected,
    /// Released over empty space or the source itself, or cancelled.
    Cancelled,
}

#[derive(Debug)]
struct DragSession {
    source: EndpointId,
    overlay: LineOverlay,
    payload: DragPayload,
    hovered: Option<EndpointId>,
}

pub struct DragCoordinator<S: OverlaySurface = NullSurface> {
    surface: S,
    session: Option<DragSession>,
    sessions_ended: usize,
}

impl Default for DragCoordinator<NullSurface> {
    fn default() -> Self {
        Self::new(NullSurface)
    }
}

impl<S: OverlaySurface> DragCoordinator<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            session: None,
            sessions_ended: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn source(&self) -> Option<EndpointId> {
        self.session.as_ref().map(|s| s.source)
    }

    /// Endpoint currently under the pointer, as last reported by `hover`.
    pub fn hovered(&self) -> Option<EndpointId> {
        self.session.as_ref().and_then(|s| s.hovered)
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.session.as_ref().map(|s| &s.payload)
    }

    pub fn overlay(&self) -> Option<&LineOverlay> {
        self.session.as_ref().map(|s| &s.overlay)
    }

    /// Number of sessions that have been ended so far.
    pub fn sessions_ended(&self) -> usize {
        self.sessions_ended
    }

    // ─── Session lifecycle ───────────────────────────────────────────────

    /// Start dragging from `source`, with the line anchored at `origin`.
    ///
    /// # Errors
    /// `AlreadyActive` if a session is running; `UnknownEndpoint` if `source`
    /// is not on the board.
    pub fn begin_session(
        &mut self,
        board: &mut EndpointBoard,
        source: EndpointId,
        origin: Point,
    ) -> Result<(), DragError> {
        if let Some(active) = &self.session {
            return Err(DragError::AlreadyActive(active.source));
        }
        let endpoint = board
            .get_mut(source)
            .ok_or(DragError::UnknownEndpoint(source))?;

        if !endpoint.begin_as_source() {
            log::warn!("{source} began a drag while {:?}", endpoint.state());
        }
        let payload = DragPayload {
            frame: endpoint.frame,
            contents: source,
        };
        let overlay = LineOverlay::create(origin, origin, &mut self.surface);

        self.session = Some(DragSession {
            source,
            overlay,
            payload,
            hovered: None,
        });
        log::debug!("drag session started from {source} at {origin:?}");
        Ok(())
    }

    /// Move the free end of the drag line.
    pub fn update_session(&mut self, point: Point) -> Result<(), DragError> {
        let session = self.session.as_mut().ok_or(DragError::Inactive)?;
        session.overlay.move_to(point, &mut self.surface);
        Ok(())
    }

    /// Report the endpoint under the pointer (or none).
    ///
    /// Leaving an endpoint sends it `drag_exited`; entering one sends it
    /// `drag_entered`, flagged with whether a live source other than itself
    /// is being dragged.
    pub fn hover(
        &mut self,
        board: &mut EndpointBoard,
        hit: Option<EndpointId>,
    ) -> Result<(), DragError> {
        let session = self.session.as_mut().ok_or(DragError::Inactive)?;
        if session.hovered == hit {
            return Ok(());
        }

        if let Some(previous) = session.hovered.take()
            && let Some(endpoint) = board.get_mut(previous)
        {
            endpoint.drag_exited();
        }

        if let Some(id) = hit {
            let foreign_source = id != session.source && board.contains(session.source);
            if let Some(endpoint) = board.get_mut(id) {
                endpoint.drag_entered(foreign_source);
            }
            session.hovered = Some(id);
        }
        Ok(())
    }

    /// Release the drag over `target` (or over nothing).
    ///
    /// The target is entered first if the pointer was not already over it,
    /// so a release is judged the same way whether or not a move reported
    /// the endpoint beforehand. The session always ends, including when an
    /// error is returned.
    ///
    /// # Errors
    /// `Inactive` without a session; `StaleSource` if the source left the
    /// board; `UnknownEndpoint` if `target` is not on the board.
    pub fn attempt_drop(
        &mut self,
        board: &mut EndpointBoard,
        target: Option<EndpointId>,
        point: Point,
        sink: &mut impl ConnectionSink,
    ) -> Result<DropOutcome, DragError> {
        let session = self.session.as_mut().ok_or(DragError::Inactive)?;
        session.overlay.move_to(point, &mut self.surface);
        let source = session.source;

        let outcome = match target {
            Some(target) if target != source => self
                .hover(board, Some(target))
                .and_then(|()| self.drop_on(board, target, sink)),
            _ => Ok(DropOutcome::Cancelled),
        };

        self.end_session(board);
        outcome
    }

    /// Abort the running session.
    pub fn cancel(&mut self, board: &mut EndpointBoard) -> Result<(), DragError> {
        if self.session.is_none() {
            return Err(DragError::Inactive);
        }
        self.end_session(board);
        Ok(())
    }

    /// Commit a connection from the session's source to `target` and report
    /// it to `sink`. Only reachable through an accepted drop.
    fn connect(
        &self,
        board: &EndpointBoard,
        target: EndpointId,
        sink: &mut impl ConnectionSink,
    ) -> Result<Connection, DragError> {
        let source = self.source().ok_or(DragError::Inactive)?;
        if !board.contains(source) {
            log::warn!("cannot connect {source} to {target}: source is gone");
            return Err(DragError::StaleSource(source));
        }
        let connection = Connection::between(board, source, target)
            .ok_or(DragError::UnknownEndpoint(target))?;
        sink.connect(&connection);
        Ok(connection)
    }

    fn drop_on(
        &self,
        board: &mut EndpointBoard,
        target: EndpointId,
        sink: &mut impl ConnectionSink,
    ) -> Result<DropOutcome, DragError> {
        let endpoint = board
            .get_mut(target)
            .ok_or(DragError::UnknownEndpoint(target))?;

        match endpoint.perform_drop() {
            DropResult::Accept => {
                let connection = self.connect(board, target, sink)?;
                Ok(DropOutcome::Connected(connection))
            }
            DropResult::Reject => Ok(DropOutcome::Rejected),
        }
    }

    /// The single cleanup path of every session.
    fn end_session(&mut self, board: &mut EndpointBoard) {
        let Some(session) = self.session.take() else {
            return;
        };
        session.overlay.remove(&mut self.surface);

        match board.get_mut(session.source) {
            Some(endpoint) => {
                endpoint.session_ended();
            }
            None => log::warn!("drag source {} left the board mid-session", session.source),
        }
        if let Some(hovered) = session.hovered
            && hovered != session.source
            && let Some(endpoint) = board.get_mut(hovered)
        {
            endpoint.session_ended();
        }

        self.sessions_ended += 1;
        log::debug!("drag session from {} ended", session.source);
    }
}
