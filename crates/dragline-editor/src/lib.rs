pub mod coordinator;
pub mod input;
pub mod sink;
pub mod tool;

pub use coordinator::{DragCoordinator, DragPayload, DropOutcome};
pub use input::InputEvent;
pub use sink::ConnectionSink;
pub use tool::ConnectTool;
