//! Integration tests: full connection drags (dragline-editor ↔ dragline-core).
//!
//! Drives the connect tool and coordinator with pointer sequences and checks
//! endpoint states, overlay lifetime, and the connections reported.

use dragline_core::connection::Connection;
use dragline_core::endpoint::{Endpoint, EndpointState};
use dragline_core::error::DragError;
use dragline_core::id::EndpointId;
use dragline_core::overlay::OverlaySurface;
use dragline_core::EndpointBoard;
use dragline_editor::coordinator::{DragCoordinator, DropOutcome};
use dragline_editor::input::InputEvent;
use dragline_editor::tool::ConnectTool;
use kurbo::{Line, Point};
use pretty_assertions::assert_eq;

/// Surface that records every call and fails on a dismiss while hidden.
#[derive(Default)]
struct RecordingSurface {
    visible: bool,
    presents: usize,
    dismissals: usize,
    last: Option<Line>,
}

impl OverlaySurface for RecordingSurface {
    fn present(&mut self, line: Line) {
        self.visible = true;
        self.presents += 1;
        self.last = Some(line);
    }

    fn dismiss(&mut self) {
        assert!(self.visible, "overlay dismissed while not shown");
        self.visible = false;
        self.dismissals += 1;
    }
}

fn two_endpoints(prefix: &str) -> (EndpointBoard, EndpointId, EndpointId) {
    let a = EndpointId::intern(&format!("{prefix}_a"));
    let b = EndpointId::intern(&format!("{prefix}_b"));
    let mut board = EndpointBoard::new();
    board.add(Endpoint::at(a, Point::ORIGIN));
    board.add(Endpoint::at(b, Point::new(20.0, 40.0)));
    (board, a, b)
}

// ─── Reference scenario ─────────────────────────────────────────────────

#[test]
fn drag_from_a_to_b_connects_once() {
    let (mut board, a, b) = two_endpoints("ref");
    let mut coord = DragCoordinator::new(RecordingSurface::default());
    let mut sink: Vec<Connection> = Vec::new();

    coord.begin_session(&mut board, a, Point::new(10.0, 10.0)).unwrap();
    assert_eq!(board.get(a).unwrap().state(), EndpointState::Source);
    assert!(coord.surface().visible);

    coord.update_session(Point::new(50.0, 60.0)).unwrap();
    assert_eq!(
        coord.surface().last,
        Some(Line::new((10.0, 10.0), (50.0, 60.0)))
    );
    assert_eq!(coord.surface().presents, 2);
    assert_eq!(board.get(b).unwrap().state(), EndpointState::Idle);

    // B was never hovered: the drop itself enters it before asking it.
    let outcome = coord
        .attempt_drop(&mut board, Some(b), Point::new(50.0, 60.0), &mut sink)
        .unwrap();

    let expected = Connection::between(&board, a, b).unwrap();
    assert_eq!(outcome, DropOutcome::Connected(expected));
    assert_eq!(sink, vec![expected]);
    assert_eq!(board.get(a).unwrap().state(), EndpointState::Idle);
    assert_eq!(board.get(b).unwrap().state(), EndpointState::Idle);
    assert!(!coord.surface().visible);
    assert!(!coord.is_active());
    assert_eq!(coord.sessions_ended(), 1);
}

#[test]
fn same_gesture_through_connect_tool() {
    let (mut board, a, b) = two_endpoints("tool_ref");
    let mut tool = ConnectTool::new(RecordingSurface::default());
    let mut sink: Vec<Connection> = Vec::new();

    let events = [
        InputEvent::from_pointer_down(10.0, 10.0),
        InputEvent::from_pointer_move(30.0, 30.0),
        InputEvent::from_pointer_move(50.0, 60.0),
        InputEvent::from_pointer_up(50.0, 60.0),
    ];
    let mut outcomes = Vec::new();
    for event in &events {
        outcomes.push(tool.handle_on_board(event, &mut board, &mut sink).unwrap());
    }

    // (50, 60) is over both endpoints; b is topmost.
    assert_eq!(outcomes[..3].to_vec(), vec![None, None, None]);
    assert!(matches!(outcomes[3], Some(DropOutcome::Connected(_))));
    assert_eq!(sink.len(), 1);
    assert_eq!((sink[0].source, sink[0].target), (a, b));
    assert_eq!(board.get(a).unwrap().state(), EndpointState::Idle);
    assert_eq!(board.get(b).unwrap().state(), EndpointState::Idle);
}

// ─── Cleanup invariant ──────────────────────────────────────────────────

/// Every way a session can end dismisses the overlay exactly once and
/// leaves every endpoint idle.
#[test]
fn every_termination_path_ends_session_once() {
    type Ending = fn(
        &mut DragCoordinator<RecordingSurface>,
        &mut EndpointBoard,
        EndpointId,
        EndpointId,
    ) -> Result<DropOutcome, DragError>;

    let endings: [(&str, Ending); 5] = [
        ("accept", |c, board, _, b| {
            c.hover(board, Some(b))?;
            c.attempt_drop(board, Some(b), Point::new(30.0, 50.0), &mut Vec::<Connection>::new())
        }),
        ("reject_source_removed", |c, board, a, b| {
            board.remove(a);
            c.attempt_drop(board, Some(b), Point::new(30.0, 50.0), &mut Vec::<Connection>::new())
        }),
        ("drop_on_source", |c, board, a, _| {
            c.attempt_drop(board, Some(a), Point::new(5.0, 5.0), &mut Vec::<Connection>::new())
        }),
        ("drop_on_empty_space", |c, board, _, b| {
            c.hover(board, Some(b))?;
            c.hover(board, None)?;
            c.attempt_drop(board, None, Point::new(500.0, 500.0), &mut Vec::<Connection>::new())
        }),
        ("cancel_while_hovering", |c, board, _, b| {
            c.hover(board, Some(b))?;
            c.cancel(board).map(|()| DropOutcome::Cancelled)
        }),
    ];

    for (name, ending) in endings {
        let (mut board, a, b) = two_endpoints(&format!("cleanup_{name}"));
        let mut coord = DragCoordinator::new(RecordingSurface::default());

        assert!(coord.overlay().is_none());
        coord.begin_session(&mut board, a, Point::new(5.0, 5.0)).unwrap();
        for step in 1..4 {
            coord.update_session(Point::new(5.0 * step as f64, 5.0)).unwrap();
            assert_eq!(coord.overlay().is_some(), coord.is_active(), "{name}");
            assert!(coord.surface().visible, "{name}");
        }

        let result = ending(&mut coord, &mut board, a, b);
        assert!(result.is_ok(), "{name}: {result:?}");

        assert_eq!(coord.sessions_ended(), 1, "{name}");
        assert_eq!(coord.surface().dismissals, 1, "{name}");
        assert!(!coord.surface().visible, "{name}");
        assert!(coord.overlay().is_none(), "{name}");
        assert!(!coord.is_active(), "{name}");
        for ep in board.iter() {
            assert_eq!(ep.state(), EndpointState::Idle, "{name}: {}", ep.id);
        }
    }
}

#[test]
fn drop_after_source_removed_is_rejected() {
    let (mut board, a, b) = two_endpoints("reject");
    let mut coord = DragCoordinator::new(RecordingSurface::default());
    let mut sink: Vec<Connection> = Vec::new();

    coord.begin_session(&mut board, a, Point::ORIGIN).unwrap();
    board.remove(a);
    let outcome = coord
        .attempt_drop(&mut board, Some(b), Point::new(30.0, 50.0), &mut sink)
        .unwrap();

    // Without a live source the target never becomes a target.
    assert_eq!(outcome, DropOutcome::Rejected);
    assert!(sink.is_empty());
    assert_eq!(board.get(b).unwrap().state(), EndpointState::Idle);
    assert_eq!(coord.surface().dismissals, 1);
}

#[test]
fn release_over_endpoint_the_last_move_missed_connects() {
    let a = EndpointId::intern("late_target_a");
    let b = EndpointId::intern("late_target_b");
    let mut board = EndpointBoard::new();
    board.add(Endpoint::at(a, Point::ORIGIN));
    board.add(Endpoint::at(b, Point::new(200.0, 0.0)));
    let mut tool = ConnectTool::new(RecordingSurface::default());
    let mut sink: Vec<Connection> = Vec::new();

    let down = tool.handle_on_board(&InputEvent::from_pointer_down(40.0, 40.0), &mut board, &mut sink);
    assert_eq!(down, Ok(None));
    let over_gap = tool.handle_on_board(&InputEvent::from_pointer_move(120.0, 40.0), &mut board, &mut sink);
    assert_eq!(over_gap, Ok(None));
    assert_eq!(tool.coordinator.hovered(), None);

    let up = tool
        .handle_on_board(&InputEvent::from_pointer_up(240.0, 40.0), &mut board, &mut sink)
        .unwrap();

    let expected = Connection::between(&board, a, b).unwrap();
    assert_eq!(up, Some(DropOutcome::Connected(expected)));
    assert_eq!(sink, vec![expected]);
    assert_eq!(board.get(a).unwrap().state(), EndpointState::Idle);
    assert_eq!(board.get(b).unwrap().state(), EndpointState::Idle);
    assert!(!tool.coordinator.surface().visible);
}

#[test]
fn drop_on_source_is_a_cancel() {
    let (mut board, a, _) = two_endpoints("self_drop");
    let mut coord = DragCoordinator::new(RecordingSurface::default());
    let mut sink: Vec<Connection> = Vec::new();

    coord.begin_session(&mut board, a, Point::ORIGIN).unwrap();
    coord.hover(&mut board, Some(a)).unwrap();
    let outcome = coord
        .attempt_drop(&mut board, Some(a), Point::new(1.0, 1.0), &mut sink)
        .unwrap();
    assert_eq!(outcome, DropOutcome::Cancelled);
    assert!(sink.is_empty());
    assert_eq!(board.get(a).unwrap().state(), EndpointState::Idle);
}

// ─── Stale source ───────────────────────────────────────────────────────

#[test]
fn stale_source_is_reported_and_overlay_still_removed() {
    let (mut board, a, b) = two_endpoints("stale");
    let mut coord = DragCoordinator::new(RecordingSurface::default());
    let mut sink: Vec<Connection> = Vec::new();

    coord.begin_session(&mut board, a, Point::ORIGIN).unwrap();
    coord.hover(&mut board, Some(b)).unwrap();
    assert_eq!(board.get(b).unwrap().state(), EndpointState::Target);

    board.remove(a);
    let result = coord.attempt_drop(&mut board, Some(b), Point::new(30.0, 50.0), &mut sink);

    assert_eq!(result, Err(DragError::StaleSource(a)));
    assert!(sink.is_empty());
    assert!(!coord.is_active());
    assert!(!coord.surface().visible);
    assert_eq!(coord.surface().dismissals, 1);
    assert_eq!(board.get(b).unwrap().state(), EndpointState::Idle);

    // The coordinator is usable again afterwards.
    coord.begin_session(&mut board, b, Point::ORIGIN).unwrap();
    assert!(coord.is_active());
}

#[test]
fn stale_and_inactive_errors_are_distinct() {
    let a = EndpointId::intern("distinct");
    assert_ne!(DragError::StaleSource(a), DragError::Inactive);
    assert_eq!(
        DragError::StaleSource(a).to_string(),
        "source endpoint @distinct is no longer on the board"
    );
    assert_eq!(DragError::Inactive.to_string(), "no drag session is active");
}

// ─── Sequencing ─────────────────────────────────────────────────────────

#[test]
fn consecutive_sessions_each_clean_up() {
    let (mut board, a, b) = two_endpoints("sequence");
    let mut tool = ConnectTool::new(RecordingSurface::default());
    let mut sink: Vec<Connection> = Vec::new();

    for (source, target) in [(a, b), (b, a)] {
        tool.handle(&InputEvent::from_pointer_down(0.0, 0.0), Some(source), &mut board, &mut sink)
            .unwrap();
        tool.handle(&InputEvent::from_pointer_move(9.0, 9.0), Some(target), &mut board, &mut sink)
            .unwrap();
        tool.handle(&InputEvent::from_pointer_up(9.0, 9.0), Some(target), &mut board, &mut sink)
            .unwrap();
    }

    assert_eq!(tool.coordinator.sessions_ended(), 2);
    assert_eq!(tool.coordinator.surface().dismissals, 2);
    assert_eq!(
        sink.iter().map(|c| (c.source, c.target)).collect::<Vec<_>>(),
        vec![(a, b), (b, a)]
    );
}

#[test]
fn pointer_down_during_drag_is_refused() {
    let (mut board, a, b) = two_endpoints("double_down");
    let mut tool = ConnectTool::new(RecordingSurface::default());
    let mut sink: Vec<Connection> = Vec::new();

    tool.handle(&InputEvent::from_pointer_down(0.0, 0.0), Some(a), &mut board, &mut sink)
        .unwrap();
    let second = tool.handle(&InputEvent::from_pointer_down(30.0, 50.0), Some(b), &mut board, &mut sink);
    assert_eq!(second, Err(DragError::AlreadyActive(a)));
    assert_eq!(tool.coordinator.source(), Some(a));
    assert_eq!(board.get(b).unwrap().state(), EndpointState::Idle);
}
