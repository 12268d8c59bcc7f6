/// Route module for file-based routing
///
/// Contains the pure components that turn a page path into a URL pattern.

pub mod parser;
pub mod pattern;

// Re-export commonly used types
pub use parser::parse_pattern;
pub use pattern::{classify_segment, PatternSegmentType};
