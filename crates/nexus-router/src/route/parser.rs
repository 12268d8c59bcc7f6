/// Pattern parsing for page paths
///
/// Pure functional parser that folds the segments of an extension-less page
/// path into a URL pattern.

use super::pattern::classify_segment;

/// Pattern accumulator for fold-based parsing
#[derive(Default)]
struct ParseState {
    pattern: String,
}

impl ParseState {
    fn with_segment(mut self, segment: &str) -> Self {
        self.pattern.push_str(&classify_segment(segment).to_pattern());
        self
    }

    /// Finalizes the pattern, handling the empty pattern case
    fn finalize(self) -> String {
        if self.pattern.is_empty() {
            "/".to_string()
        } else {
            self.pattern
        }
    }
}

/// Processes a single segment and updates the parse state
///
/// `is_last` is true for the file name segment, where `index` contributes
/// nothing to the pattern.
fn process_segment(state: ParseState, (segment, is_last): (&str, bool)) -> ParseState {
    if segment.is_empty() || (is_last && segment == "index") {
        return state;
    }
    state.with_segment(segment)
}

/// Parses an extension-less page path into a URL pattern (pure function)
///
/// # Examples
///
/// ```
/// use nexus_router::route::parser::parse_pattern;
///
/// assert_eq!(parse_pattern("about"), "/about");
/// assert_eq!(parse_pattern("index"), "/");
/// assert_eq!(parse_pattern("blog/index"), "/blog");
/// assert_eq!(parse_pattern("blog/[slug]"), "/blog/:slug");
/// assert_eq!(parse_pattern("docs/[...rest]"), "/docs/*rest");
/// ```
pub fn parse_pattern(path: &str) -> String {
    let count = path.split('/').count();
    path.split('/')
        .enumerate()
        .map(|(i, segment)| (segment, i + 1 == count))
        .fold(ParseState::default(), process_segment)
        .finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern_static() {
        assert_eq!(parse_pattern("about"), "/about");
        assert_eq!(parse_pattern("settings/profile"), "/settings/profile");
    }

    #[test]
    fn test_parse_pattern_index() {
        assert_eq!(parse_pattern("index"), "/");
        assert_eq!(parse_pattern("blog/index"), "/blog");
    }

    #[test]
    fn test_parse_pattern_index_directory_is_literal() {
        assert_eq!(parse_pattern("index/about"), "/index/about");
    }

    #[test]
    fn test_parse_pattern_dynamic() {
        assert_eq!(parse_pattern("users/[id]/posts"), "/users/:id/posts");
        assert_eq!(parse_pattern("posts/[id?]"), "/posts/:id?");
    }

    #[test]
    fn test_parse_pattern_catch_all() {
        assert_eq!(parse_pattern("docs/[...slug]"), "/docs/*slug");
        assert_eq!(parse_pattern("docs/[[...slug]]"), "/docs/*slug?");
    }

    #[test]
    fn test_parse_pattern_skips_empty_segments() {
        assert_eq!(parse_pattern(""), "/");
        assert_eq!(parse_pattern("blog//post"), "/blog/post");
    }
}
