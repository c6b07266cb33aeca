pub mod metadata;
pub mod video_id;

pub use metadata::{available_formats, fetch_video_info, http_client, VIDEO_INFO_URL};
pub use video_id::extract_video_id;
