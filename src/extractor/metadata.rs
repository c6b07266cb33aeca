//! Metadata retrieval and stream-map decoding
//!
//! The platform's `get_video_info` endpoint answers with URL-encoded
//! key/value data. Its `url_encoded_fmt_stream_map` field is a
//! comma-separated list of further URL-encoded records, one per
//! offered stream. Decoding is kept separate from the fetch so it can
//! be tested on canned payloads without touching the network.

use crate::error::YtResolveError;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::form_urlencoded;

/// Fixed metadata endpoint, parameterized by video id
pub const VIDEO_INFO_URL: &str = "https://www.youtube.com/get_video_info";

/// Request locale; the endpoint localizes its `reason` texts
const LOCALE: &str = "en";

const USER_AGENT: &str = concat!("ytresolve/", env!("CARGO_PKG_VERSION"));

/// The endpoint has no documented latency bound; this timeout is ours
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client used for the single metadata request
pub fn http_client() -> Result<Client, YtResolveError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

/// Fetch the raw metadata payload for a video id
pub async fn fetch_video_info(client: &Client, video_id: &str) -> Result<String, YtResolveError> {
    debug!("Fetching video info for {}", video_id);

    let response = client
        .get(VIDEO_INFO_URL)
        .query(&[("hl", LOCALE), ("video_id", video_id)])
        .send()
        .await?;

    Ok(response.text().await?)
}

/// Decode a metadata payload into (itag, direct URL) pairs.
///
/// Each stream record carries the itag, a base URL and usually a
/// detached signature that must be appended as a `signature` query
/// parameter. A payload without a stream map is an error response from
/// the platform and surfaces as [`YtResolveError::PlatformApi`] with
/// the payload's own `reason` text.
pub fn available_formats(body: &str) -> Result<Vec<(String, String)>, YtResolveError> {
    let info = decode_query(body);
    let stream_map = match info.get("url_encoded_fmt_stream_map") {
        Some(raw) => raw,
        None => return Err(platform_error(&info)),
    };

    let mut formats = Vec::with_capacity(stream_map.matches(',').count() + 1);
    for record in stream_map.split(',') {
        let fields = decode_query(record);
        let (itag, base_url) = match (fields.get("itag"), fields.get("url")) {
            (Some(itag), Some(url)) => (itag.clone(), url.clone()),
            _ => return Err(platform_error(&info)),
        };
        let url = match fields.get("sig") {
            Some(sig) => format!("{base_url}&signature={sig}"),
            None => {
                warn!("Stream record for itag {} has no signature", itag);
                base_url
            }
        };
        formats.push((itag, url));
    }

    debug!("Decoded {} stream records", formats.len());
    Ok(formats)
}

/// Decode URL-encoded key/value data, keeping the first value per key
fn decode_query(raw: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        map.entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    map
}

fn platform_error(info: &HashMap<String, String>) -> YtResolveError {
    let reason = info
        .get("reason")
        .cloned()
        .unwrap_or_else(|| "no reason given by the API".to_string());
    YtResolveError::PlatformApi(reason)
}
