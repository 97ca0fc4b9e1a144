//! Corpus-Based Tests
//!
//! Exercises route discovery and matching against the fixture project in
//! `tests/corpus/nextjs`, which has both a `src/app` and a `pages` router.
//!
//! Test categories:
//! - Discovery (conventions, route groups, skipped files, ordering)
//! - Matching (exact, dynamic segments, containment both ways)


use route_finder::{Convention, RouteIndex, RouteRoot, RouteScanner};
use test_helpers::*;

// ==================== Discovery Tests ====================

#[test]
fn test_corpus_index_order() {
    let index = setup_corpus();

    let routes: Vec<&str> = index.entries().iter().map(|e| e.route.as_str()).collect();
    assert_eq!(
        routes,
        vec![
            // src/app
            "about",
            "pricing",
            "api/health",
            "blog/[slug]",
            "blog",
            "",
            "",
            "users/[id]/edit",
            "users/[id]",
            // pages
            "_app",
            "docs/[...slug]",
            "docs",
            "",
            "legacy",
        ]
    );
}

#[test]
fn test_corpus_stats() {
    let stats = setup_corpus().stats();

    assert_eq!(stats.total_routes, 14);
    assert_eq!(stats.roots_scanned, 2);
    assert_eq!(stats.routes_by_source.get("src/app"), Some(&9));
    assert_eq!(stats.routes_by_source.get("pages"), Some(&5));
}

#[test]
fn test_sources_follow_roots() {
    let index = setup_corpus();

    for entry in index.entries() {
        let convention = index
            .roots()
            .iter()
            .find(|r| r.path == entry.source)
            .map(|r| r.convention)
            .unwrap();
        let root_dir = corpus_root().join(&entry.source);
        assert!(entry.file.starts_with(&root_dir), "{:?} not under {:?}", entry.file, root_dir);
        if convention == Convention::App {
            let name = entry.file.file_name().unwrap().to_string_lossy();
            assert!(
                name.starts_with("page.") || name.starts_with("layout.") || name.starts_with("route."),
                "unexpected app file {}",
                name
            );
        }
    }
}

#[test]
fn test_route_group_not_in_routes() {
    let index = setup_corpus();

    assert!(index.entries().iter().all(|e| !e.route.contains("marketing")));
    let all: Vec<_> = index.entries().iter().collect();
    assert_file_match(&all, "src/app/(marketing)/about/page.tsx");
    assert_file_match(&all, "src/app/(marketing)/pricing/page.tsx");
}

#[test]
fn test_non_route_files_skipped() {
    let index = setup_corpus();

    assert!(index.entries().iter().all(|e| !e.file.ends_with("blog/components/PostCard.tsx")));
    assert!(index.entries().iter().all(|e| e.file.extension().unwrap() != "css"));
    assert!(index.entries().iter().all(|e| e.file.extension().unwrap() != "md"));
}

#[test]
fn test_pages_index_files_map_to_directory() {
    let index = setup_corpus();
    let all: Vec<_> = index.entries().iter().collect();

    let docs: Vec<_> = all.iter().copied().filter(|e| e.route == "docs").collect();
    assert_eq!(docs.len(), 1);
    assert!(docs[0].file.ends_with("pages/docs/index.ts"));

    let root_pages: Vec<_> = all
        .iter()
        .copied()
        .filter(|e| e.route.is_empty() && e.source == "pages")
        .collect();
    assert_eq!(root_pages.len(), 1);
    assert!(root_pages[0].file.ends_with("pages/index.tsx"));
}

// ==================== Matching Tests ====================

#[test]
fn test_empty_query_has_no_candidates() {
    assert!(find_routes("").is_empty());
}

#[test]
fn test_dynamic_user_route() {
    let results = setup_corpus().find("/users/42");

    assert_route_found(&results, "users/[id]");
    assert_route_missing(&results, "users/[id]/edit");
    assert_eq!(routes_of(&results), vec!["", "", "users/[id]", ""]);
}

#[test]
fn test_dynamic_blog_post() {
    assert_eq!(
        find_routes("/blog/hello-world"),
        vec!["blog/[slug]", "blog", "", "", ""]
    );
}

#[test]
fn test_catch_all_is_single_segment_placeholder() {
    let results = setup_corpus().find("/docs/getting-started");
    assert_route_found(&results, "docs/[...slug]");
    assert_route_found(&results, "docs");

    // deeper paths do not match a bracket segment positionally
    let results = setup_corpus().find("/docs/guides/routing");
    assert_route_missing(&results, "docs/[...slug]");
    assert_route_found(&results, "docs");
}

#[test]
fn test_substring_both_directions() {
    let results = setup_corpus().find("blog");
    assert_route_found(&results, "blog");
    assert_route_found(&results, "blog/[slug]");

    let results = setup_corpus().find("/api/health/check");
    assert_route_found(&results, "api/health");
}

#[test]
fn test_group_name_is_not_searchable() {
    let results = setup_corpus().find("marketing");
    // only the root routes, which every query contains
    assert!(results.iter().all(|e| e.route.is_empty()));
}

#[test]
fn test_slash_alone_matches_everything() {
    assert_eq!(find_routes("/").len(), setup_corpus().len());
}

#[test]
fn test_relative_project_root_indexes_absolute_files() {
    // cargo runs integration tests from the package root
    let mut index = RouteIndex::new("tests/corpus/nextjs", RouteRoot::defaults());
    index.rebuild();

    assert_eq!(index.len(), setup_corpus().len());
    for entry in index.entries() {
        assert!(entry.file.is_absolute(), "file not absolute: {:?}", entry.file);
    }
    assert_eq!(
        index.entries()[0].relative_file(index.project_root()),
        "src/app/(marketing)/about/page.tsx"
    );
}

#[test]
fn test_scan_of_relative_root_yields_absolute_files() {
    let entries = RouteScanner::default().scan("tests/corpus/nextjs/pages", Convention::Pages, "pages");

    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e.file.is_absolute()));
}
