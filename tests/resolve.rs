//! End-to-end resolution tests over canned metadata payloads, plus
//! property tests for the ranking invariants. Nothing here touches the
//! network: payloads are built locally with the same encoding the
//! platform uses.
//!
//! Invariants covered:
//! A - Ranking is a permutation of the quality order, anchored at the
//!     desired itag
//! B - Positional distance never decreases along the ranking
//! C - Selection returns the first ranked itag that is available
//! D - No overlap between ranking and availability is a benign miss

use proptest::prelude::*;
use std::collections::HashMap;
use ytresolve::{
    available_formats, extract_video_id, rank_by_similarity, resolve_quality, select_stream,
    Category, ItagCatalog, YtResolveError,
};

/// Build a get_video_info-style payload offering the given streams
fn stream_map_body(records: &[(&str, &str, &str)]) -> String {
    let stream_map = records
        .iter()
        .map(|(itag, url, sig)| {
            url::form_urlencoded::Serializer::new(String::new())
                .append_pair("itag", itag)
                .append_pair("url", url)
                .append_pair("sig", sig)
                .finish()
        })
        .collect::<Vec<_>>()
        .join(",");

    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("status", "ok")
        .append_pair("url_encoded_fmt_stream_map", &stream_map)
        .finish()
}

fn resolve(
    raw_input: &str,
    quality: &str,
    category: Category,
    body: &str,
) -> Result<Option<(String, String)>, YtResolveError> {
    let catalog = ItagCatalog::new();
    let order = catalog.quality_order(category);

    // Same order of operations as the binary: quality resolution and
    // ranking first, then the (here injected) metadata payload
    let desired = resolve_quality(quality, order)?;
    let ranked = rank_by_similarity(&desired, order)?;

    assert_eq!(extract_video_id(raw_input).len(), 11);
    let available: HashMap<String, String> = available_formats(body)?.into_iter().collect();

    Ok(select_stream(&ranked, &available)
        .map(|(itag, url)| (itag.to_string(), url.to_string())))
}

#[test]
fn high_quality_falls_back_to_best_available() {
    let body = stream_map_body(&[
        ("18", "https://cdn.example/18", "S18"),
        ("22", "https://cdn.example/22", "S22"),
    ]);

    let picked = resolve("dQw4w9WgXcQ", "high", Category::Standard, &body)
        .unwrap()
        .unwrap();
    assert_eq!(picked.0, "22");
    assert_eq!(picked.1, "https://cdn.example/22&signature=S22");
}

#[test]
fn low_quality_falls_back_upward() {
    let body = stream_map_body(&[
        ("18", "https://cdn.example/18", "S18"),
        ("22", "https://cdn.example/22", "S22"),
    ]);

    let picked = resolve("dQw4w9WgXcQ", "low", Category::Standard, &body)
        .unwrap()
        .unwrap();
    assert_eq!(picked.0, "18");
}

#[test]
fn explicit_itag_is_honored_when_offered() {
    let body = stream_map_body(&[
        ("18", "https://cdn.example/18", "S18"),
        ("22", "https://cdn.example/22", "S22"),
    ]);

    let picked = resolve("dQw4w9WgXcQ", "18", Category::Standard, &body)
        .unwrap()
        .unwrap();
    assert_eq!(picked.0, "18");
}

#[test]
fn explicit_itag_outside_category_is_rejected_before_fetch() {
    // 22 is a standard itag; in the 3D category it must be refused
    let catalog = ItagCatalog::new();
    let order = catalog.quality_order(Category::Stereoscopic);

    let desired = resolve_quality("22", order).unwrap();
    let err = rank_by_similarity(&desired, order).unwrap_err();
    assert!(matches!(err, YtResolveError::InvalidItag(itag) if itag == "22"));
}

#[test]
fn stereoscopic_request_against_flat_video_is_a_benign_miss() {
    let body = stream_map_body(&[
        ("18", "https://cdn.example/18", "S18"),
        ("22", "https://cdn.example/22", "S22"),
    ]);

    let picked = resolve("dQw4w9WgXcQ", "medium", Category::Stereoscopic, &body).unwrap();
    assert!(picked.is_none());
}

#[test]
fn watch_url_input_resolves_like_a_bare_id() {
    let body = stream_map_body(&[("43", "https://cdn.example/43", "S43")]);

    let picked = resolve(
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "medium",
        Category::Standard,
        &body,
    )
    .unwrap()
    .unwrap();
    assert_eq!(picked.0, "43");
}

#[test]
fn platform_error_payload_propagates_reason() {
    let body = "status=fail&errorcode=100&reason=Video+not+found";

    let err = resolve("dQw4w9WgXcQ", "medium", Category::Standard, body).unwrap_err();
    assert!(matches!(err, YtResolveError::PlatformApi(reason) if reason == "Video not found"));
}

proptest! {
    #[test]
    fn prop_ranking_is_anchored_permutation(len in 1usize..32, pick in any::<prop::sample::Index>()) {
        let owned: Vec<String> = (0..len).map(|i| format!("itag{i}")).collect();
        let order: Vec<&str> = owned.iter().map(String::as_str).collect();
        let desired = order[pick.index(len)];

        let ranked = rank_by_similarity(desired, &order).unwrap();

        prop_assert_eq!(ranked[0], desired);
        let mut ranked_sorted = ranked.clone();
        ranked_sorted.sort_unstable();
        let mut order_sorted = order.clone();
        order_sorted.sort_unstable();
        prop_assert_eq!(ranked_sorted, order_sorted);
    }

    #[test]
    fn prop_ranking_distance_never_decreases(len in 1usize..32, pick in any::<prop::sample::Index>()) {
        let owned: Vec<String> = (0..len).map(|i| format!("itag{i}")).collect();
        let order: Vec<&str> = owned.iter().map(String::as_str).collect();
        let position = pick.index(len);

        let ranked = rank_by_similarity(order[position], &order).unwrap();
        let distances: Vec<usize> = ranked
            .iter()
            .map(|itag| {
                let i = order.iter().position(|o| o == itag).unwrap();
                i.abs_diff(position)
            })
            .collect();

        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_selection_is_first_available(len in 1usize..16, pick in any::<prop::sample::Index>(), mask in any::<u16>()) {
        let owned: Vec<String> = (0..len).map(|i| format!("itag{i}")).collect();
        let order: Vec<&str> = owned.iter().map(String::as_str).collect();
        let ranked = rank_by_similarity(order[pick.index(len)], &order).unwrap();

        let available: HashMap<String, String> = ranked
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u16 << i) != 0)
            .map(|(_, itag)| (itag.to_string(), format!("https://cdn.example/{itag}")))
            .collect();

        let expected = ranked.iter().find(|itag| available.contains_key(**itag));
        match select_stream(&ranked, &available) {
            Some((itag, url)) => {
                prop_assert_eq!(Some(&itag), expected);
                prop_assert_eq!(url, format!("https://cdn.example/{itag}"));
            }
            None => prop_assert!(expected.is_none()),
        }
    }
}
