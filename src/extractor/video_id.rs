//! Video identifier extraction
//!
//! The CLI accepts either a bare video ID or a full watch-page URL;
//! both collapse to the 11-character ID the metadata endpoint expects.

use tracing::debug;
use url::Url;

/// YouTube video identifiers are always 11 characters
pub const VIDEO_ID_LEN: usize = 11;

/// Extract an 11-character video ID from a bare ID or a watch URL.
///
/// Never fails: anything that is not a URL with a `v` parameter falls
/// back to the last `/`-delimited segment of the input, truncated. A
/// `v` value shorter than 11 characters passes through unpadded.
pub fn extract_video_id(raw: &str) -> String {
    if let Some(id) = id_from_watch_url(raw) {
        return id;
    }
    debug!("Input is not a watch URL, treating it as a video ID: {}", raw);
    let tail = raw.rsplit('/').next().unwrap_or(raw);
    truncate_id(tail)
}

fn id_from_watch_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let (_, value) = parsed.query_pairs().find(|(key, _)| key == "v")?;
    Some(truncate_id(&value))
}

fn truncate_id(candidate: &str) -> String {
    candidate.chars().take(VIDEO_ID_LEN).collect()
}
