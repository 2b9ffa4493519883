//! Playground for the barbell path builder and connection drags.
//!
//! Renders to SVG so results can be inspected without a GPU surface.

pub mod script;
pub mod strip;
pub mod svg;

pub use script::{GestureScript, Replay, ScriptError, replay};
pub use strip::barbell_strip;
pub use svg::{SvgScene, render_svg};
