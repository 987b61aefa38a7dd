//! Structured profile report records and their text rendering.

pub mod github;
pub mod linkedin;
pub mod render;
mod section;

pub use render::{NOT_AVAILABLE, ReportRenderer, TextRenderer};
pub use section::Section;
