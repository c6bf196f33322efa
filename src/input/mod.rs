pub mod autopilot;
pub mod handler;

pub use autopilot::Autopilot;
pub use handler::InputHandler;
