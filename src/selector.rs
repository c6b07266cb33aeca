//! Quality resolution and itag selection
//!
//! Maps a requested quality expression onto one itag of the active
//! category, then ranks the whole category by closeness to it so the
//! caller can fall back gracefully when the exact itag is not offered.

use crate::error::YtResolveError;
use std::collections::HashMap;
use tracing::debug;

/// Resolve a quality expression to a single desired itag.
///
/// Named tiers index into the category's quality order; an explicit
/// numeric itag is passed through verbatim and validated later against
/// the order by [`rank_by_similarity`].
pub fn resolve_quality(quality: &str, order: &[&str]) -> Result<String, YtResolveError> {
    let index = match quality {
        "high" => 0,
        "medium" => order.len() / 2,
        "low" => order.len() - 1,
        other if other.parse::<u32>().is_ok() => return Ok(other.to_string()),
        other => return Err(YtResolveError::UnknownQualityGroup(other.to_string())),
    };
    Ok(order[index].to_string())
}

/// Rank every itag of `order` by positional distance from `desired`.
///
/// The sort is stable over the position index, so neighbors at equal
/// distance keep the quality order's own relative ordering. Errors if
/// `desired` does not belong to `order` at all.
pub fn rank_by_similarity<'a>(
    desired: &str,
    order: &[&'a str],
) -> Result<Vec<&'a str>, YtResolveError> {
    let position = order
        .iter()
        .position(|&itag| itag == desired)
        .ok_or_else(|| YtResolveError::InvalidItag(desired.to_string()))?;

    let mut indices: Vec<usize> = (0..order.len()).collect();
    indices.sort_by_key(|&i| i.abs_diff(position));
    Ok(indices.into_iter().map(|i| order[i]).collect())
}

/// Pick the first ranked itag that the video actually offers.
///
/// `None` is the expected outcome for a video with no overlap at all,
/// e.g. a request for 3D formats against a flat-only video.
pub fn select_stream<'a, 'b>(
    ranked: &[&'a str],
    available: &'b HashMap<String, String>,
) -> Option<(&'a str, &'b str)> {
    debug!("Scanning {} ranked itags against {} available", ranked.len(), available.len());
    ranked
        .iter()
        .find_map(|&itag| available.get(itag).map(|url| (itag, url.as_str())))
}
