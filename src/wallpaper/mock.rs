//! Mock wallpaper source for testing
//!
//! [`MockSource`] implements [`WallpaperSource`] without touching the
//! network. It returns a fixed list of images, and can be configured to
//! sleep before answering or to fail with an injected error.
//!
//! # Examples
//!
//! ```
//! use bing_wallpaper_mcp::{
//!     model::WallpaperImage,
//!     wallpaper::{MockSource, WallpaperSource},
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = MockSource::with_images(vec![WallpaperImage {
//!         url: "/th?id=OHR.Test".to_string(),
//!         ..Default::default()
//!     }]);
//!
//!     let images = source.fetch_wallpapers(0, 1).await.unwrap();
//!     assert_eq!(images.len(), 1);
//!     assert_eq!(source.calls(), vec![(0, 1)]);
//! }
//! ```

use std::{sync::Mutex, time::Duration};

use async_trait::async_trait;

use super::WallpaperSource;
use crate::{
    error::{WallpaperError, WallpaperResult},
    model::WallpaperImage,
};

/// In-process wallpaper source with canned data
#[derive(Debug, Default)]
pub struct MockSource {
    /// Images returned by every successful fetch
    images:          Vec<WallpaperImage>,
    /// Optional delay to simulate upstream latency
    delay:           Option<Duration>,
    /// Optional error returned instead of images
    error_injection: Option<WallpaperError>,
    /// `(offset, count)` of every fetch, in call order
    calls:           Mutex<Vec<(u32, u32)>>,
}

impl MockSource {
    /// Creates a source that always returns an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source that returns `images` on every fetch
    pub fn with_images(images: Vec<WallpaperImage>) -> Self {
        Self {
            images,
            ..Self::default()
        }
    }

    /// Sleeps for `delay` before answering each fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fails every fetch with `error`
    pub fn with_error(mut self, error: WallpaperError) -> Self {
        self.error_injection = Some(error);
        self
    }

    /// Returns the `(offset, count)` arguments of every fetch so far
    pub fn calls(&self) -> Vec<(u32, u32)> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn check_error_injection(&self) -> WallpaperResult<()> {
        if let Some(ref error) = self.error_injection {
            return Err(match error {
                WallpaperError::UpstreamUnavailable { reason } => {
                    WallpaperError::UpstreamUnavailable {
                        reason: reason.clone(),
                    }
                }
                WallpaperError::UpstreamStatus { status } => {
                    WallpaperError::UpstreamStatus { status: *status }
                }
                WallpaperError::MalformedPayload { reason } => WallpaperError::MalformedPayload {
                    reason: reason.clone(),
                },
                WallpaperError::InvalidParameter { parameter, reason } => {
                    WallpaperError::InvalidParameter {
                        parameter: parameter.clone(),
                        reason:    reason.clone(),
                    }
                }
                WallpaperError::ResourceNotFound { uri } => {
                    WallpaperError::ResourceNotFound { uri: uri.clone() }
                }
                WallpaperError::Serialization(e) => WallpaperError::MalformedPayload {
                    reason: e.to_string(),
                },
            });
        }
        Ok(())
    }
}

#[async_trait]
impl WallpaperSource for MockSource {
    async fn fetch_wallpapers(
        &self,
        offset: u32,
        count: u32,
    ) -> WallpaperResult<Vec<WallpaperImage>> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((offset, count));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.check_error_injection()?;
        Ok(self.images.clone())
    }
}
