//! ytresolve - YouTube direct stream URL resolver
//!
//! Resolves a video ID or watch-page URL into a direct media URL and
//! prints it on stdout. All diagnostics go to stderr so the output can
//! be piped straight into a player or downloader.

use anyhow::Result;
use clap::Parser;
use std::collections::HashMap;
use std::process::ExitCode;
use tracing::{error, info};
use ytresolve::{extractor, selector};
use ytresolve::{Category, ItagCatalog};

#[derive(Parser)]
#[command(version, about = "Resolve a YouTube video to a direct media URL")]
struct Args {
    /// Video ID or watch-page URL
    video: String,

    /// Desired quality: low, medium, high, or an explicit itag
    #[arg(short, long, default_value = "medium")]
    quality: String,

    /// Select from stereoscopic (3D) formats instead of standard ones
    #[arg(short = '3', long = "3d")]
    three_d: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Keep stdout clean for the resolved URL
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let category = if args.three_d {
        Category::Stereoscopic
    } else {
        Category::Standard
    };
    let catalog = ItagCatalog::new();
    let order = catalog.quality_order(category);

    // Resolve and rank before spending the network round trip; only an
    // explicit numeric itag outside the category can fail here
    let desired = selector::resolve_quality(&args.quality, order)?;
    let ranked = selector::rank_by_similarity(&desired, order)?;

    let video_id = extractor::extract_video_id(&args.video);
    let client = extractor::http_client()?;
    let body = extractor::fetch_video_info(&client, &video_id).await?;
    let available: HashMap<String, String> =
        extractor::available_formats(&body)?.into_iter().collect();

    match selector::select_stream(&ranked, &available) {
        Some((itag, url)) => {
            info!("Using itag {}", itag);
            println!("{}", url);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            error!(
                "No {} itags for video {} are available",
                category.as_str(),
                video_id
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
