//! Bing image archive client
//!
//! Thin wrapper around `reqwest::Client` that issues exactly one GET per
//! fetch against `HPImageArchive.aspx` and decodes the JSON body.

use async_trait::async_trait;
use tracing::debug;

use super::WallpaperSource;
use crate::{
    config::ServerConfig,
    error::{WallpaperError, WallpaperResult},
    model::{WallpaperImage, WallpaperResponse},
};

/// Path of the archive endpoint relative to the API base
const ARCHIVE_PATH: &str = "/HPImageArchive.aspx";

/// HTTP client for the Bing image archive
#[derive(Debug, Clone)]
pub struct BingClient {
    inner:    reqwest::Client,
    api_base: String,
}

impl BingClient {
    /// Creates a client from the server configuration
    ///
    /// Applies the configured request timeout, if any. Connections are not
    /// kept alive between fetches.
    pub fn new(config: &ServerConfig) -> WallpaperResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(0);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build()?;

        Ok(Self {
            inner,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Full archive URL for an offset/count pair
    ///
    /// # Examples
    ///
    /// ```
    /// use bing_wallpaper_mcp::{config::ServerConfig, wallpaper::BingClient};
    ///
    /// let client = BingClient::new(&ServerConfig::default()).unwrap();
    /// assert_eq!(
    ///     client.archive_url(0, 1),
    ///     "https://cn.bing.com/HPImageArchive.aspx?format=js&idx=0&n=1"
    /// );
    /// ```
    pub fn archive_url(&self, offset: u32, count: u32) -> String {
        format!("{}{}?format=js&idx={}&n={}", self.api_base, ARCHIVE_PATH, offset, count)
    }
}

#[async_trait]
impl WallpaperSource for BingClient {
    async fn fetch_wallpapers(
        &self,
        offset: u32,
        count: u32,
    ) -> WallpaperResult<Vec<WallpaperImage>> {
        let url = self.archive_url(offset, count);
        debug!(%url, "Fetching Bing wallpaper metadata");

        let response = self.inner.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        let data: WallpaperResponse =
            serde_json::from_slice(&body).map_err(|e| WallpaperError::MalformedPayload {
                reason: e.to_string(),
            })?;

        debug!(count = data.images.len(), "Fetched Bing wallpaper metadata");
        Ok(data.images)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use super::*;

    fn client_for(server: &MockServer) -> BingClient {
        let config = ServerConfig::default().with_api_base(server.uri());
        BingClient::new(&config).unwrap()
    }

    #[test]
    fn test_archive_url_trims_trailing_slash() {
        let config = ServerConfig::default().with_api_base("http://localhost:9999/");
        let client = BingClient::new(&config).unwrap();
        assert_eq!(
            client.archive_url(3, 2),
            "http://localhost:9999/HPImageArchive.aspx?format=js&idx=3&n=2"
        );
    }

    #[tokio::test]
    async fn test_fetch_forwards_offset_and_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/HPImageArchive.aspx"))
            .and(query_param("format", "js"))
            .and(query_param("idx", "2"))
            .and(query_param("n", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "images": [
                    { "url": "/th?id=OHR.A", "title": "A" },
                    { "url": "/th?id=OHR.B", "title": "B" },
                    { "url": "/th?id=OHR.C", "title": "C" }
                ],
                "tooltips": { "loading": "正在加载..." }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let images = client.fetch_wallpapers(2, 3).await.unwrap();

        let titles: Vec<&str> = images.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_fetch_empty_images_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "images": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let images = client.fetch_wallpapers(0, 1).await.unwrap();
        assert!(images.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.fetch_wallpapers(0, 1).await.unwrap_err();
        assert!(matches!(error, WallpaperError::UpstreamStatus { status: 503 }));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.fetch_wallpapers(0, 1).await.unwrap_err();
        assert!(matches!(error, WallpaperError::MalformedPayload { .. }));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind and drop a listener to get a port with nothing behind it
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let config = ServerConfig::default().with_api_base(format!("http://127.0.0.1:{port}"));
        let client = BingClient::new(&config).unwrap();
        let error = client.fetch_wallpapers(0, 1).await.unwrap_err();
        assert!(matches!(error, WallpaperError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "images": [] }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = ServerConfig::default()
            .with_api_base(server.uri())
            .with_request_timeout(Duration::from_secs(1));
        let client = BingClient::new(&config).unwrap();
        let error = client.fetch_wallpapers(0, 1).await.unwrap_err();
        assert!(matches!(error, WallpaperError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_sub_second_timeout_allows_fast_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "images": [] })))
            .mount(&server)
            .await;

        let config = ServerConfig::default()
            .with_api_base(server.uri())
            .with_request_timeout(Duration::from_millis(500));
        let client = BingClient::new(&config).unwrap();
        let images = client.fetch_wallpapers(0, 1).await.unwrap();
        assert!(images.is_empty());
    }
}
