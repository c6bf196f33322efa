pub mod pace;
pub mod play;

pub use pace::TickPace;
pub use play::PlayMode;
