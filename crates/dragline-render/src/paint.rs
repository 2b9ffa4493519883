//! Board → Vello drawing commands.
//!
//! Paints, bottom to top: committed connections, endpoints, then the live
//! drag line. Connections and the drag line are barbells; endpoints are
//! rounded rectangles styled by their state.

use crate::overlay::OverlayLayer;
use dragline_core::barbell::BarbellParams;
use dragline_core::board::EndpointBoard;
use dragline_core::config::DragConfig;
use dragline_core::connection::Connection;
use dragline_core::endpoint::Endpoint;
use dragline_core::style::{Color as StyleColor, ConnectionStyle, ShapeStyle, StrokeJoin};
use kurbo::{Affine, Join, Shape, Stroke as KurboStroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Paint one full frame.
///
/// Call once per frame with a freshly-cleared `Scene`.
/// The caller presents the scene via wgpu.
pub fn paint_board(
    scene: &mut Scene,
    board: &EndpointBoard,
    connections: &[Connection],
    overlay: &OverlayLayer,
    config: &DragConfig,
) {
    for connection in connections {
        paint_connection(scene, connection, &config.connection);
    }
    for endpoint in board.iter() {
        paint_endpoint(scene, endpoint, config);
    }
    paint_overlay(scene, overlay, &config.drag_line);
}

// ─── Shape painters ──────────────────────────────────────────────────────────

pub fn paint_endpoint(scene: &mut Scene, endpoint: &Endpoint, config: &DragConfig) {
    let style = endpoint.style(&config.theme);
    let line_width = style.stroke.map_or(0.0, |s| s.width);
    let shape = endpoint
        .frame
        .inset(-line_width / 2.0)
        .to_rounded_rect(config.corner_radius);
    log::trace!("ENDPOINT {} {:?}", endpoint.id, endpoint.state());
    fill_shape(scene, &shape, style);
    stroke_shape(scene, &shape, style);
}

pub fn paint_connection(scene: &mut Scene, connection: &Connection, style: &ConnectionStyle) {
    log::trace!("CONNECTION {} -> {}", connection.source, connection.target);
    paint_barbell(scene, &connection.barbell(style), style);
}

/// The live drag line, if the layer is showing one.
pub fn paint_overlay(scene: &mut Scene, layer: &OverlayLayer, style: &ConnectionStyle) {
    let Some(line) = layer.line() else {
        return;
    };
    let params = BarbellParams::new(line.p0, line.p1, style.bar_thickness, style.bell_radius);
    paint_barbell(scene, &params, style);
}

fn paint_barbell(scene: &mut Scene, params: &BarbellParams, style: &ConnectionStyle) {
    if let Some(shadow) = &style.shape.shadow {
        // Vello has no blur for arbitrary paths; the silhouette is drawn sharp.
        let silhouette = params.inflated(style.shadow_inflation()).to_path();
        let offset = Affine::translate((shadow.offset_x, shadow.offset_y));
        scene.fill(Fill::NonZero, offset, to_peniko(shadow.color), None, &silhouette);
    }
    let path = params.to_path();
    fill_shape(scene, &path, &style.shape);
    stroke_shape(scene, &path, &style.shape);
}

// ─── Fill and stroke ─────────────────────────────────────────────────────────

fn fill_shape<S: Shape>(scene: &mut Scene, shape: &S, style: &ShapeStyle) {
    if let Some(fill) = style.fill {
        scene.fill(Fill::NonZero, Affine::IDENTITY, to_peniko(fill), None, shape);
    }
}

fn stroke_shape<S: Shape>(scene: &mut Scene, shape: &S, style: &ShapeStyle) {
    if let Some(stroke) = &style.stroke {
        let vello_stroke = KurboStroke::new(stroke.width).with_join(map_join(stroke.join));
        scene.stroke(
            &vello_stroke,
            Affine::IDENTITY,
            to_peniko(stroke.color),
            None,
            shape,
        );
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn map_join(join: StrokeJoin) -> Join {
    match join {
        StrokeJoin::Miter => Join::Miter,
        StrokeJoin::Round => Join::Round,
        StrokeJoin::Bevel => Join::Bevel,
    }
}

fn to_peniko(c: StyleColor) -> Color {
    Color::new([c.r, c.g, c.b, c.a])
}
