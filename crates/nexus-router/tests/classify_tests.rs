//! Integration tests for page classification
//!
//! Covers:
//! - Output file naming for both source extensions
//! - Depth counting
//! - Pattern conventions (index, dynamic, catch-all, reserved)
//! - Component references

use nexus_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("index.tsx", "index.js")]
#[case("about.jsx", "about.js")]
#[case("blog/[slug].tsx", "blog/[slug].js")]
#[case("docs/[...rest].jsx", "docs/[...rest].js")]
#[case("v1.2/index.tsx", "v1.2/index.js")]
fn test_output_file(#[case] path: &str, #[case] file: &str) {
    assert_eq!(classify(path).file, file);
}

#[rstest]
#[case("index.tsx", 1)]
#[case("blog/[slug].tsx", 2)]
#[case("a/b/c/d.jsx", 4)]
#[case("blog//post.tsx", 3)]
fn test_depth_counts_slash_segments(#[case] path: &str, #[case] depth: usize) {
    assert_eq!(classify(path).depth, depth);
    assert_eq!(classify(path).depth, path.split('/').count());
}

#[rstest]
#[case("index.tsx", "/")]
#[case("about.tsx", "/about")]
#[case("blog/index.tsx", "/blog")]
#[case("blog/[slug].tsx", "/blog/:slug")]
#[case("users/[id]/settings.jsx", "/users/:id/settings")]
#[case("posts/[page?].tsx", "/posts/:page?")]
#[case("docs/[...rest].tsx", "/docs/*rest")]
#[case("docs/[[...rest]].tsx", "/docs/*rest?")]
#[case("404.tsx", "*")]
#[case("app.tsx", "")]
fn test_pattern(#[case] path: &str, #[case] pattern: &str) {
    assert_eq!(classify(path).pattern, pattern);
}

#[test]
fn test_component_points_at_mirrored_module() {
    assert_eq!(classify("about.tsx").component, "./pages/about.js");
    assert_eq!(
        classify("blog/[slug].jsx").component,
        "./pages/blog/[slug].js"
    );
}

#[test]
fn test_both_extensions_share_one_identity() {
    assert_eq!(classify("about.tsx").file, classify("about.jsx").file);
}

#[test]
fn test_classification_is_independent_of_order() {
    let paths = ["index.tsx", "blog/[slug].tsx", "404.tsx", "about.tsx"];

    let forward: Vec<RouteRecord> = paths.iter().map(|p| classify(p)).collect();
    let backward: Vec<RouteRecord> = paths.iter().rev().map(|p| classify(p)).collect();

    for record in &forward {
        assert!(backward.contains(record));
    }
}

#[test]
fn test_reserved_detection() {
    assert!(classify("404.tsx").is_reserved());
    assert!(classify("app.tsx").is_reserved());
    assert!(!classify("index.tsx").is_reserved());
    assert!(!classify("appendix.tsx").is_reserved());
    assert!(!classify("1404.tsx").is_reserved());
}
