//! Barbell path builder.
//!
//! A barbell is the outline of two end-cap circles ("bells") joined by a
//! straight bar. It is used for the live drag line and for committed
//! connections. The contour is built in a local frame where the axis runs
//! along +x from the origin to `(length, 0)`, then moved onto the real
//! `start → end` vector with a rigid transform.
//!
//! The builder is total: inputs are clamped into range, never rejected.

use kurbo::{Affine, Arc, BezPath, Circle, Point, Shape, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Flattening tolerance used when approximating the cap arcs with cubics.
pub const ARC_TOLERANCE: f64 = 1e-3;

/// Inputs of one barbell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarbellParams {
    pub start: Point,
    pub end: Point,
    pub bar_thickness: f64,
    pub bell_radius: f64,
}

/// Derived numbers of a barbell after clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarbellGeometry {
    /// Distance between the two cap centers.
    pub length: f64,
    /// Effective bar thickness (never negative).
    pub bar_thickness: f64,
    /// Effective bell radius (never below half the bar thickness).
    pub bell_radius: f64,
    /// Distance along the axis from a cap center to where its arc meets the bar.
    pub x_offset: f64,
    /// Half-height of the bar where it meets the arcs.
    pub y_offset: f64,
    /// Angle from the axis at which each cap arc meets its tangent segment.
    pub joint_angle: f64,
    /// True when the caps overlapped and were merged at the midpoint.
    pub merged: bool,
}

impl BarbellGeometry {
    /// Coincident endpoints render as a single circle.
    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0
    }
}

impl BarbellParams {
    pub fn new(start: Point, end: Point, bar_thickness: f64, bell_radius: f64) -> Self {
        Self {
            start,
            end,
            bar_thickness,
            bell_radius,
        }
    }

    /// Clamp thickness and radius into the valid domain.
    ///
    /// `bar_thickness >= 0` and `bell_radius >= bar_thickness / 2`. NaN
    /// inputs fall to the lower bound.
    pub fn clamped(&self) -> Self {
        let bar_thickness = self.bar_thickness.max(0.0);
        let bell_radius = self.bell_radius.max(bar_thickness / 2.0);
        Self {
            bar_thickness,
            bell_radius,
            ..*self
        }
    }

    /// Grow both thickness and radius by `amount`.
    ///
    /// Used for the shadow silhouette drawn around a stroked barbell.
    pub fn inflated(&self, amount: f64) -> Self {
        Self {
            bar_thickness: self.bar_thickness + amount,
            bell_radius: self.bell_radius + amount,
            ..*self
        }
    }

    pub fn geometry(&self) -> BarbellGeometry {
        let p = self.clamped();
        let r = p.bell_radius;
        let length = (p.end - p.start).hypot();

        let mut y_offset = p.bar_thickness / 2.0;
        let mut x_offset = sqrt_clamped(r * r - y_offset * y_offset);

        let half_length = length / 2.0;
        let merged = x_offset > half_length;
        if merged {
            // Caps would overlap before the bar starts: they meet at the midpoint.
            x_offset = half_length;
            y_offset = sqrt_clamped(r * r - x_offset * x_offset);
        }

        let joint_angle = if r > 0.0 {
            (y_offset / r).clamp(-1.0, 1.0).asin()
        } else {
            0.0
        };

        BarbellGeometry {
            length,
            bar_thickness: p.bar_thickness,
            bell_radius: r,
            x_offset,
            y_offset,
            joint_angle,
            merged,
        }
    }

    /// Build the closed contour.
    pub fn to_path(&self) -> BezPath {
        let p = self.clamped();
        let geo = self.geometry();
        let r = geo.bell_radius;

        if geo.is_degenerate() {
            return Circle::new(p.start, r).to_path(ARC_TOLERANCE);
        }

        let joint = geo.joint_angle;
        let radii = Vec2::new(r, r);
        let near = Arc {
            center: Point::ORIGIN,
            radii,
            start_angle: joint,
            sweep_angle: TAU - 2.0 * joint,
            x_rotation: 0.0,
        };
        let far = Arc {
            center: Point::new(geo.length, 0.0),
            radii,
            start_angle: PI + joint,
            sweep_angle: TAU - 2.0 * joint,
            x_rotation: 0.0,
        };

        let mut path = BezPath::new();
        path.move_to(point_on_circle(near.center, r, near.start_angle));
        path.extend(near.append_iter(ARC_TOLERANCE));
        path.line_to(point_on_circle(far.center, r, far.start_angle));
        path.extend(far.append_iter(ARC_TOLERANCE));
        path.close_path();

        let unit = (p.end - p.start) / geo.length;
        path.apply_affine(Affine::new([
            unit.x, unit.y, -unit.y, unit.x, p.start.x, p.start.y,
        ]));
        path
    }
}

/// Build the barbell contour from `start` to `end`.
pub fn barbell_path(start: Point, end: Point, bar_thickness: f64, bell_radius: f64) -> BezPath {
    BarbellParams::new(start, end, bar_thickness, bell_radius).to_path()
}

/// Square root that treats small negative rounding residue as zero.
fn sqrt_clamped(v: f64) -> f64 {
    v.max(0.0).sqrt()
}

fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * radius
}
