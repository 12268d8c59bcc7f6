/// Pattern parsing for page path segments
///
/// Pure functional parsing of file-based route segments into typed segments.
/// All functions are **pure**: same input → same output, no side effects.

/// Represents different types of route pattern segments
///
/// # Examples
///
/// ```
/// use nexus_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// assert!(matches!(classify_segment("about"), PatternSegmentType::Static(_)));
/// assert!(matches!(classify_segment("[slug]"), PatternSegmentType::Required(_)));
/// assert!(matches!(classify_segment("[slug?]"), PatternSegmentType::Optional(_)));
/// assert!(matches!(classify_segment("[...rest]"), PatternSegmentType::CatchAll(_)));
/// assert!(matches!(classify_segment("[[...rest]]"), PatternSegmentType::OptionalCatchAll(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// Catch-all segment: [...slug]
    CatchAll(String),
    /// Optional catch-all segment: [[...slug]]
    OptionalCatchAll(String),
    /// Optional parameter: [id?]
    Optional(String),
    /// Required parameter: [id]
    Required(String),
    /// Static text segment
    Static(String),
}

impl PatternSegmentType {
    /// Renders this segment as it appears in a URL pattern, leading `/` included
    pub fn to_pattern(&self) -> String {
        match self {
            PatternSegmentType::CatchAll(name) => format!("/*{}", name),
            PatternSegmentType::OptionalCatchAll(name) => format!("/*{}?", name),
            PatternSegmentType::Optional(name) => format!("/:{}?", name),
            PatternSegmentType::Required(name) => format!("/:{}", name),
            PatternSegmentType::Static(seg) => format!("/{}", seg),
        }
    }
}

/// Classifies a segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional catch-all**: `[[...name]]`
/// 2. **Catch-all**: `[...name]`
/// 3. **Optional param**: `[name?]`
/// 4. **Required param**: `[name]`
/// 5. **Static**: Any other text
///
/// An empty bracket pair (`[]`) has no parameter name and stays static.
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    if let Some(name) = segment
        .strip_prefix("[[...")
        .and_then(|s| s.strip_suffix("]]"))
        .filter(|s| !s.is_empty())
    {
        return PatternSegmentType::OptionalCatchAll(name.to_string());
    }

    match segment
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .filter(|s| !s.is_empty())
    {
        Some(inner) => {
            if let Some(name) = inner.strip_prefix("...").filter(|s| !s.is_empty()) {
                return PatternSegmentType::CatchAll(name.to_string());
            }

            if let Some(name) = inner.strip_suffix('?').filter(|s| !s.is_empty()) {
                return PatternSegmentType::Optional(name.to_string());
            }

            PatternSegmentType::Required(inner.to_string())
        }
        None => PatternSegmentType::Static(segment.to_string()),
    }
}
