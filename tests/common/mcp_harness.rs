//! MCP Server Test Harness
//!
//! Provides reusable fixtures for exercising the bing-wallpaper MCP server
//! against a mock wallpaper source.
//!
//! # Usage
//!
//! ```rust
//! use common::mcp_harness::{ContentValidator, McpTestContext};
//!
//! #[tokio::test]
//! async fn test_info() {
//!     let ctx = McpTestContext::new_with_mock();
//!     let read = ctx.read("app://info").await.unwrap();
//!     let item = ContentValidator::first_item(&read).unwrap();
//!     assert_eq!(item.uri, "app://info");
//! }
//! ```

use std::sync::Arc;

use bing_wallpaper_mcp::{
    config::ServerConfig,
    mcp::BingWallpaperServer,
    model::{AddParams, WallpaperImage},
    wallpaper::MockSource,
};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ErrorData, ReadResourceResult},
};
use serde_json::Value;

/// Test fixture for MCP server integration tests
///
/// Wraps a `BingWallpaperServer` and keeps a handle on its `MockSource` so
/// tests can inspect which fetches were issued.
pub struct McpTestContext {
    /// The MCP server instance
    pub server: BingWallpaperServer,
    /// Source used by the server
    pub source: Arc<MockSource>,
}

impl McpTestContext {
    /// Create test context with an empty MockSource
    pub fn new_with_mock() -> Self {
        Self::new_with_configured_mock(MockSource::new())
    }

    /// Create test context with a configured MockSource
    ///
    /// Use this to supply images, inject errors or add delays.
    pub fn new_with_configured_mock(mock: MockSource) -> Self {
        let source = Arc::new(mock);
        let server = BingWallpaperServer::new(source.clone(), &ServerConfig::default());
        Self { server, source }
    }

    /// Create test context whose source returns a single image
    pub fn new_with_image(url: &str, title: &str, copyright: &str) -> Self {
        Self::new_with_configured_mock(MockSource::with_images(vec![WallpaperImage {
            url: url.to_string(),
            title: title.to_string(),
            copyright: copyright.to_string(),
            ..Default::default()
        }]))
    }

    // --- Tool invocation helpers ---

    /// Call the bing-wallpaper-add tool
    pub async fn add(&self, a: f64, b: f64) -> Result<CallToolResult, ErrorData> {
        self.server.add(Parameters(AddParams { a, b })).await
    }

    // --- Resource helpers ---

    /// Read a resource through the MCP conversion layer
    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, ErrorData> {
        self.server.read(uri).await
    }
}

/// One content item of a read result, flattened from its wire JSON
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub uri:       String,
    pub mime_type: Option<String>,
    pub text:      Option<String>,
    pub meta:      Value,
}

/// Validates MCP read results against the wire shape clients see
pub struct ContentValidator;

impl ContentValidator {
    /// Serializes `read` and returns its content items
    pub fn items(read: &ReadResourceResult) -> Result<Vec<ContentItem>, String> {
        let json = serde_json::to_value(read).map_err(|e| e.to_string())?;
        let contents = json["contents"]
            .as_array()
            .ok_or("contents should be an array")?;
        if contents.is_empty() {
            return Err("contents should not be empty".to_string());
        }

        Ok(contents
            .iter()
            .map(|item| ContentItem {
                uri:       item["uri"].as_str().unwrap_or_default().to_string(),
                mime_type: item["mimeType"].as_str().map(str::to_string),
                text:      item["text"].as_str().map(str::to_string),
                meta:      item["_meta"].clone(),
            })
            .collect())
    }

    /// First content item of `read`
    pub fn first_item(read: &ReadResourceResult) -> Result<ContentItem, String> {
        Self::items(read)?
            .into_iter()
            .next()
            .ok_or_else(|| "missing first item".to_string())
    }

    /// Text of the first content item
    pub fn first_text(read: &ReadResourceResult) -> Result<String, String> {
        Self::first_item(read)?
            .text
            .ok_or_else(|| "first item should be text".to_string())
    }

    /// Asserts the metadata triple on the first content item
    pub fn assert_meta(read: &ReadResourceResult, title: &str, description: &str, copyright: &str) {
        let item = Self::first_item(read).expect("read result should have contents");
        assert_eq!(item.meta["title"], title, "title mismatch");
        assert_eq!(item.meta["description"], description, "description mismatch");
        assert_eq!(item.meta["copyright"], copyright, "copyright mismatch");
    }

    /// Text of the single content item of a tool result
    pub fn tool_text(result: &CallToolResult) -> Result<String, String> {
        if result.is_error.unwrap_or(false) {
            return Err("tool result is an error".to_string());
        }
        let first = result.content.first().ok_or("tool result has no content")?;
        first
            .as_text()
            .map(|t| t.text.clone())
            .ok_or_else(|| "tool content should be text".to_string())
    }
}
