//! Reusable TUI widgets.

mod slider;
mod text_input;

pub use slider::Slider;
pub use text_input::TextInput;
