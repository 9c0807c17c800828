mod diagram_source;
mod log_level;

pub use diagram_source::{DiagramSource, DiagramSourceError};
pub use log_level::LogLevel;
