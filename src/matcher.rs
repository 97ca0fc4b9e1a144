//! Route matching against a typed query
//!
//! A query matches an indexed route when any of four rules holds, checked in
//! order: exact equality, dynamic-segment match (`users/[id]` vs
//! `users/42`), route contains query, query contains route. Results keep
//! index order; there is no relevance ranking.

use serde::Serialize;
use strum::Display;

use crate::models::RouteEntry;

/// Which rule admitted a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchKind {
    /// Route equals the query
    Exact,
    /// Same segment count; every non-placeholder segment equal
    Dynamic,
    /// Route contains the query
    Contains,
    /// Query contains the route
    ContainedBy,
}

/// Strip a single leading `/` from a user query
pub fn normalize_query(query: &str) -> &str {
    query.strip_prefix('/').unwrap_or(query)
}

/// Whether a route segment is a dynamic placeholder (`[id]`, `[...slug]`)
pub fn is_dynamic_segment(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with('[') && segment.ends_with(']')
}

/// Segment-wise match where placeholders in `route` accept any non-empty
/// query segment
pub fn is_dynamic_route_match(route: &str, query: &str) -> bool {
    let route_parts: Vec<&str> = route.split('/').collect();
    let query_parts: Vec<&str> = query.split('/').collect();

    if route_parts.len() != query_parts.len() {
        return false;
    }

    route_parts
        .iter()
        .zip(query_parts.iter())
        .all(|(route_part, query_part)| {
            if is_dynamic_segment(route_part) {
                !query_part.is_empty()
            } else {
                route_part == query_part
            }
        })
}

/// Classify how `route` matches an already-normalized `query`
pub fn classify(route: &str, query: &str) -> Option<MatchKind> {
    if route == query {
        Some(MatchKind::Exact)
    } else if is_dynamic_route_match(route, query) {
        Some(MatchKind::Dynamic)
    } else if route.contains(query) {
        Some(MatchKind::Contains)
    } else if query.contains(route) {
        Some(MatchKind::ContainedBy)
    } else {
        None
    }
}

/// Return every entry matching `query`, in index order
///
/// An empty query yields no candidates.
pub fn match_routes<'a>(entries: &'a [RouteEntry], query: &str) -> Vec<&'a RouteEntry> {
    match_routes_with_kind(entries, query)
        .into_iter()
        .map(|(entry, _)| entry)
        .collect()
}

/// Like [`match_routes`], also reporting which rule admitted each entry
pub fn match_routes_with_kind<'a>(entries: &'a [RouteEntry], query: &str) -> Vec<(&'a RouteEntry, MatchKind)> {
    if query.is_empty() {
        return Vec::new();
    }

    let normalized = normalize_query(query);
    log::debug!("Matching query '{}' against {} routes", normalized, entries.len());

    entries
        .iter()
        .filter_map(|entry| classify(&entry.route, normalized).map(|kind| (entry, kind)))
        .collect()
}
