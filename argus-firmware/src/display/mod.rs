//! Status screen composition and terminal output

pub mod renderer;
pub mod term;

pub use renderer::Renderer;
pub use term::{flush_screen, init_terminal};
