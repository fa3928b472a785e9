pub mod position;
pub mod span;

pub use position::{count_line_breaks, Position};
pub use span::Span;
