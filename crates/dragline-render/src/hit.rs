//! Hit testing: point → endpoint lookup.
//!
//! Walks the board front-to-back to find which endpoint is under a
//! given surface position.

use dragline_core::board::EndpointBoard;
use dragline_core::id::EndpointId;
use kurbo::Point;

/// Find the topmost endpoint at `point`.
/// Returns `None` if the point is over empty space.
pub fn hit_test(board: &EndpointBoard, point: Point) -> Option<EndpointId> {
    // Last painted = topmost
    board
        .iter()
        .rev()
        .find(|ep| ep.frame.contains(point))
        .map(|ep| ep.id)
}
