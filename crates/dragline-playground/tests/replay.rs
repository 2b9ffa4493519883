//! Integration tests: replaying a scripted gesture end to end and exporting
//! the result as SVG.

use dragline_core::config::DragConfig;
use dragline_core::endpoint::EndpointState;
use dragline_core::id::EndpointId;
use dragline_editor::coordinator::DropOutcome;
use dragline_playground::script::{GestureScript, ScriptError, replay};
use dragline_playground::svg::{SvgScene, render_svg};
use kurbo::{Line, Point, Rect};
use pretty_assertions::assert_eq;

const CONNECT_TWO: &str = include_str!("fixtures/connect_two.json");

#[test]
fn script_builds_board_with_default_and_explicit_sizes() {
    let script = GestureScript::from_json(CONNECT_TWO).unwrap();
    let board = script.board();

    assert_eq!(board.len(), 3);
    let left = board.get(EndpointId::intern("left")).unwrap();
    assert_eq!(left.frame, Rect::new(0.0, 0.0, 80.0, 80.0));
    let wide = board.get(EndpointId::intern("wide")).unwrap();
    assert_eq!(wide.frame, Rect::new(0.0, 200.0, 160.0, 240.0));
}

#[test]
fn replay_connects_cancels_and_leaves_last_drag_open() {
    let script = GestureScript::from_json(CONNECT_TWO).unwrap();
    let result = replay(&script);

    let left = EndpointId::intern("left");
    let right = EndpointId::intern("right");
    let wide = EndpointId::intern("wide");

    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.connections.len(), 1);
    assert_eq!(
        (result.connections[0].source, result.connections[0].target),
        (left, right)
    );
    assert_eq!(result.connections[0].from, Point::new(40.0, 40.0));
    assert_eq!(result.connections[0].to, Point::new(240.0, 40.0));

    assert!(matches!(result.outcomes[0], DropOutcome::Connected(_)));
    assert_eq!(result.outcomes[1], DropOutcome::Cancelled);
    assert_eq!(result.outcomes.len(), 2);

    // The third drag never ended: its source and line are still live.
    assert_eq!(result.board.get(wide).unwrap().state(), EndpointState::Source);
    assert_eq!(result.board.get(left).unwrap().state(), EndpointState::Idle);
    assert_eq!(result.board.get(right).unwrap().state(), EndpointState::Idle);
    assert_eq!(
        result.overlay.line(),
        Some(Line::new((150.0, 220.0), (300.0, 300.0)))
    );
}

#[test]
fn replay_svg_contains_board_connection_and_drag_line() {
    let script = GestureScript::from_json(CONNECT_TWO).unwrap();
    let result = replay(&script);

    let svg = render_svg(
        &SvgScene {
            board: Some(&result.board),
            connections: &result.connections,
            drag_line: result.overlay.line(),
            ..Default::default()
        },
        &DragConfig::default(),
    );

    assert_eq!(svg.matches("<rect").count(), 3);
    // Shadow + body for the connection and again for the drag line.
    assert_eq!(svg.matches("<path").count(), 4);
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn malformed_script_is_a_json_error() {
    let err = GestureScript::from_json(r#"{ "endpoints": [] }"#).unwrap_err();
    assert!(matches!(err, ScriptError::Json(_)));
}
