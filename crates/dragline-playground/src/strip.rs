//! The barbell showcase: a row of barbells whose length grows from zero,
//! crossing from the single-blob case through merged caps to a visible bar,
//! followed by one long diagonal connection.

use dragline_core::barbell::BarbellParams;
use dragline_core::style::ConnectionStyle;
use kurbo::Point;

const STEP: f64 = 0.4;
const MAX_LENGTH: f64 = 9.0;

pub fn barbell_strip(style: &ConnectionStyle) -> Vec<BarbellParams> {
    let steps = (MAX_LENGTH / STEP).floor() as usize;
    let mut strip: Vec<BarbellParams> = (0..=steps)
        .map(|k| {
            let i = k as f64 * STEP;
            let x = i * 40.0 + 15.0;
            BarbellParams::new(
                Point::new(x, 50.0),
                Point::new(x, 50.0 + i),
                style.bar_thickness,
                style.bell_radius,
            )
        })
        .collect();

    strip.push(BarbellParams::new(
        Point::new(50.0, 100.0),
        Point::new(350.0, 150.0),
        style.bar_thickness,
        style.bell_radius,
    ));
    strip
}
