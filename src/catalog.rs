//! Static itag catalog
//!
//! YouTube identifies each encoded stream variant by an integer "itag".
//! This module holds the descriptor table for the classic progressive
//! itags, split into the standard and the stereoscopic (3D) category,
//! and derives a per-category quality order from it.

use std::collections::HashMap;

/// Itag grouping: classic progressive streams vs stereoscopic encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Standard,
    Stereoscopic,
}

impl Category {
    /// Short name for diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Stereoscopic => "3D",
        }
    }
}

/// Static metadata for one encoded stream variant.
///
/// Bitrates are in kbit/s, the sample rate in Hz, so the whole quality
/// tuple stays integer-comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub itag: &'static str,
    pub resolution_area: u64,
    pub video_bitrate: u32,
    pub audio_bitrate: u32,
    pub audio_sample_rate: u32,
    pub video_encoding: &'static str,
}

impl FormatDescriptor {
    const fn new(
        itag: &'static str,
        width: u64,
        height: u64,
        video_bitrate: u32,
        audio_bitrate: u32,
        audio_sample_rate: u32,
        video_encoding: &'static str,
    ) -> Self {
        Self {
            itag,
            resolution_area: width * height,
            video_bitrate,
            audio_bitrate,
            audio_sample_rate,
            video_encoding,
        }
    }

    /// Key used to rank variants by presumed quality
    fn quality_key(&self) -> (u64, u32, u32, u32, &'static str) {
        (
            self.resolution_area,
            self.video_bitrate,
            self.audio_bitrate,
            self.audio_sample_rate,
            self.video_encoding,
        )
    }
}

const STANDARD: &[FormatDescriptor] = &[
    FormatDescriptor::new("5", 400, 240, 250, 64, 22050, "h263"),
    FormatDescriptor::new("6", 480, 270, 800, 64, 22050, "h263"),
    FormatDescriptor::new("13", 176, 144, 500, 64, 22050, "mp4v"),
    FormatDescriptor::new("17", 176, 144, 2000, 24, 22050, "mp4v"),
    FormatDescriptor::new("18", 640, 360, 500, 96, 44100, "h264"),
    FormatDescriptor::new("22", 1280, 720, 2900, 192, 44100, "h264"),
    FormatDescriptor::new("34", 640, 360, 500, 128, 44100, "h264"),
    FormatDescriptor::new("35", 854, 480, 1000, 128, 44100, "h264"),
    FormatDescriptor::new("36", 320, 240, 170, 38, 44100, "mp4v"),
    FormatDescriptor::new("37", 1920, 1080, 2900, 192, 44100, "h264"),
    FormatDescriptor::new("38", 4096, 3072, 5000, 192, 44100, "h264"),
    FormatDescriptor::new("43", 640, 360, 500, 128, 44100, "vp8"),
    FormatDescriptor::new("44", 854, 480, 1000, 128, 44100, "vp8"),
    FormatDescriptor::new("45", 1280, 720, 2000, 192, 44100, "vp8"),
    FormatDescriptor::new("46", 1920, 1080, 2900, 192, 44100, "vp8"),
];

const STEREOSCOPIC: &[FormatDescriptor] = &[
    FormatDescriptor::new("82", 640, 360, 500, 96, 44100, "h264"),
    FormatDescriptor::new("83", 854, 480, 500, 96, 44100, "h264"),
    FormatDescriptor::new("84", 1280, 720, 2900, 152, 44100, "h264"),
    FormatDescriptor::new("85", 1920, 1080, 2900, 152, 44100, "h264"),
    FormatDescriptor::new("100", 640, 360, 500, 128, 44100, "vp8"),
    FormatDescriptor::new("101", 854, 480, 1000, 192, 44100, "vp8"),
    FormatDescriptor::new("102", 1280, 720, 2000, 192, 44100, "vp8"),
];

/// Immutable itag catalog, built once at startup.
///
/// Exposes each category's itags sorted best quality first. The sort
/// key is the full quality tuple, so the order is total and stable
/// across runs without any hand-maintained ranking.
#[derive(Debug)]
pub struct ItagCatalog {
    orders: HashMap<Category, Vec<&'static str>>,
}

impl ItagCatalog {
    pub fn new() -> Self {
        let mut orders = HashMap::new();
        for category in [Category::Standard, Category::Stereoscopic] {
            let mut descriptors: Vec<&FormatDescriptor> =
                Self::descriptors(category).iter().collect();
            descriptors.sort_by(|a, b| b.quality_key().cmp(&a.quality_key()));
            orders.insert(
                category,
                descriptors.into_iter().map(|d| d.itag).collect(),
            );
        }
        Self { orders }
    }

    /// Raw descriptor table for a category
    pub fn descriptors(category: Category) -> &'static [FormatDescriptor] {
        match category {
            Category::Standard => STANDARD,
            Category::Stereoscopic => STEREOSCOPIC,
        }
    }

    /// Itags for a category, best quality first
    pub fn quality_order(&self, category: Category) -> &[&'static str] {
        &self.orders[&category]
    }
}

impl Default for ItagCatalog {
    fn default() -> Self {
        Self::new()
    }
}
