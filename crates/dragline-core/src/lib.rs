pub mod barbell;
pub mod board;
pub mod config;
pub mod connection;
pub mod endpoint;
pub mod error;
pub mod id;
pub mod overlay;
pub mod style;

pub use barbell::{BarbellGeometry, BarbellParams, barbell_path};
pub use board::EndpointBoard;
pub use config::DragConfig;
pub use connection::Connection;
pub use endpoint::{DropResult, Endpoint, EndpointState};
pub use error::{ConfigError, DragError};
pub use id::EndpointId;
pub use overlay::{LineOverlay, NullSurface, OverlaySurface};
pub use style::{Color, ConnectionStyle, EndpointTheme, ShapeStyle};

// Re-export kurbo geometry so downstream crates share one version
pub use kurbo;
