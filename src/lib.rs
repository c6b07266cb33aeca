//! ytresolve library
//!
//! Resolves a YouTube video ID or watch-page URL into a direct media
//! URL by picking the closest available itag to a requested quality.

pub mod catalog;
pub mod error;
pub mod extractor;
pub mod selector;

// Re-export main types for easier use
pub use catalog::{Category, FormatDescriptor, ItagCatalog};
pub use error::YtResolveError;
pub use extractor::{available_formats, extract_video_id, fetch_video_info, http_client};
pub use selector::{rank_by_similarity, resolve_quality, select_stream};
