pub mod hit;
pub mod overlay;
pub mod paint;

pub use hit::hit_test;
pub use overlay::OverlayLayer;
pub use paint::paint_board;
