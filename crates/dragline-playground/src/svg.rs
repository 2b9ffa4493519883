//! SVG export of a board, its connections, and any drag line.
//!
//! Barbells are written as `<path>` elements; shadows use a Gaussian blur
//! filter, which SVG (unlike the Vello painter) supports on any path.

use dragline_core::barbell::BarbellParams;
use dragline_core::board::EndpointBoard;
use dragline_core::config::DragConfig;
use dragline_core::connection::Connection;
use dragline_core::style::{ConnectionStyle, ShapeStyle};
use kurbo::{Line, Rect, Shape};

fn paint_attrs(style: &ShapeStyle) -> String {
    let fill = style.fill.map_or_else(|| "none".to_string(), |c| c.to_hex());
    match &style.stroke {
        Some(stroke) => format!(
            "fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            fill,
            stroke.color.to_hex(),
            stroke.width
        ),
        None => format!("fill=\"{fill}\" stroke=\"none\""),
    }
}

/// Everything drawn in one SVG document.
#[derive(Debug, Default)]
pub struct SvgScene<'a> {
    pub board: Option<&'a EndpointBoard>,
    pub connections: &'a [Connection],
    pub barbells: &'a [BarbellParams],
    pub drag_line: Option<Line>,
}

pub fn render_svg(scene: &SvgScene<'_>, config: &DragConfig) -> String {
    let mut barbells: Vec<(BarbellParams, &ConnectionStyle)> = scene
        .connections
        .iter()
        .map(|c| (c.barbell(&config.connection), &config.connection))
        .collect();
    barbells.extend(scene.barbells.iter().map(|b| (*b, &config.connection)));

    // Determine the overall bounding box
    let mut bounds: Option<Rect> = None;
    let mut include = |r: Rect| bounds = Some(bounds.map_or(r, |b| b.union(r)));
    if let Some(board) = scene.board {
        for ep in board.iter() {
            include(ep.frame);
        }
    }
    for (params, style) in &barbells {
        include(params.inflated(style.shadow_inflation()).to_path().bounding_box());
    }
    let drag_params = scene.drag_line.map(|line| {
        BarbellParams::new(
            line.p0,
            line.p1,
            config.drag_line.bar_thickness,
            config.drag_line.bell_radius,
        )
    });
    if let Some(params) = &drag_params {
        include(params.to_path().bounding_box());
    }

    let pad = 16.0;
    let bounds = bounds.unwrap_or(Rect::new(0.0, 0.0, 800.0, 600.0)).inflate(pad, pad);
    let (width, height) = (bounds.width(), bounds.height());

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    ));
    if let Some(shadow) = config.connection.shape.shadow {
        svg.push_str(&format!(
            "<defs><filter id=\"shadow\"><feGaussianBlur stdDeviation=\"{}\" /></filter></defs>\n",
            shadow.radius / 2.0
        ));
    }
    svg.push_str(&format!(
        "<g transform=\"translate({}, {})\">\n",
        -bounds.x0, -bounds.y0
    ));

    for (params, style) in &barbells {
        render_barbell_svg(&mut svg, params, style);
    }

    if let Some(board) = scene.board {
        for ep in board.iter() {
            let style = ep.style(&config.theme);
            let inset = style.stroke.map_or(0.0, |s| s.width / 2.0);
            let r = ep.frame.inset(-inset);
            out_rect(&mut svg, r, config.corner_radius, style);
        }
    }

    if let Some(params) = &drag_params {
        render_barbell_svg(&mut svg, params, &config.drag_line);
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn out_rect(out: &mut String, r: Rect, corner_radius: f64, style: &ShapeStyle) {
    out.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" ry=\"{}\" {} />\n",
        r.x0,
        r.y0,
        r.width(),
        r.height(),
        corner_radius,
        corner_radius,
        paint_attrs(style)
    ));
}

fn render_barbell_svg(out: &mut String, params: &BarbellParams, style: &ConnectionStyle) {
    if let Some(shadow) = &style.shape.shadow {
        let silhouette = params.inflated(style.shadow_inflation()).to_path();
        out.push_str(&format!(
            "  <path d=\"{}\" fill=\"{}\" transform=\"translate({}, {})\" filter=\"url(#shadow)\" />\n",
            silhouette.to_svg(),
            shadow.color.to_hex(),
            shadow.offset_x,
            shadow.offset_y
        ));
    }
    out.push_str(&format!(
        "  <path d=\"{}\" {} />\n",
        params.to_path().to_svg(),
        paint_attrs(&style.shape)
    ));
}
