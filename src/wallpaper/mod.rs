//! Wallpaper sources
//!
//! A [`WallpaperSource`] returns the image-metadata records for a range of
//! days. Two implementations exist:
//!
//! - [`BingClient`]: one HTTP GET against the Bing image archive per call
//! - [`MockSource`]: canned records for tests and offline development

use async_trait::async_trait;

use crate::{error::WallpaperResult, model::WallpaperImage};

pub mod bing;
pub mod mock;

pub use bing::BingClient;
pub use mock::MockSource;

/// Default day offset: today
pub const DEFAULT_OFFSET: u32 = 0;

/// Default number of days to fetch
pub const DEFAULT_COUNT: u32 = 1;

/// A source of daily wallpaper metadata.
///
/// Implementations perform no caching; every call reflects the source's
/// current state. An empty list is a valid answer and not an error.
#[async_trait]
pub trait WallpaperSource: Send + Sync {
    /// Fetches `count` consecutive days of wallpapers, starting `offset`
    /// days back from today.
    ///
    /// Values are not range-checked; the source decides what out-of-range
    /// requests return.
    async fn fetch_wallpapers(
        &self,
        offset: u32,
        count: u32,
    ) -> WallpaperResult<Vec<WallpaperImage>>;
}
