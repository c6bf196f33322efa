pub mod canvas;
pub mod renderer;

pub use canvas::{Canvas, Cell, Renderable, SnakeBody};
pub use renderer::Renderer;
