pub mod color;
pub mod requirement;
pub mod version;

pub use color::Color;
pub use requirement::Requirement;
pub use version::{SemanticVersion, VersionParseError};
