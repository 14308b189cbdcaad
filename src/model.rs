//! Data models and type definitions for bing-wallpaper-mcp
//!
//! This module defines the core types used throughout the application:
//! - Upstream Bing image archive records (`WallpaperImage`,
//!   `WallpaperResponse`)
//! - Outward-facing resource payloads (`ResourceResult`)
//! - Tool parameter structures with JSON schemas for the MCP protocol

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// MIME type used for every text resource returned by the server
pub const TEXT_PLAIN: &str = "text/plain";

/// One day's wallpaper record from the Bing image archive
///
/// Field names follow Rust conventions; serde renames map them to the
/// upstream keys (`startdate`, `urlbase`, `wp`, `hsh`, ...). Every field is
/// defaulted so a partial record still parses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperImage {
    /// First day the image is shown (`YYYYMMDD`)
    #[serde(rename = "startdate")]
    pub start_date:        String,
    /// Start timestamp (`YYYYMMDDHHMM`)
    #[serde(rename = "fullstartdate")]
    pub full_start_date:   String,
    /// Day after the last day the image is shown (`YYYYMMDD`)
    #[serde(rename = "enddate")]
    pub end_date:          String,
    /// Path of the image relative to the Bing host
    pub url:               String,
    /// Path prefix used to build other resolutions
    #[serde(rename = "urlbase")]
    pub url_base:          String,
    /// Attribution text
    pub copyright:         String,
    /// Link to more information about the image
    #[serde(rename = "copyrightlink")]
    pub copyright_link:    String,
    /// Image title
    pub title:             String,
    /// Link to the daily quiz
    pub quiz:              String,
    /// Whether the image may be used as a desktop wallpaper
    #[serde(rename = "wp")]
    pub wallpaper_enabled: bool,
    /// Content hash
    #[serde(rename = "hsh")]
    pub hash:              String,
    /// Darkness layout hint
    #[serde(rename = "drk")]
    pub darkness:          f64,
    /// Top layout hint
    pub top:               f64,
    /// Bottom layout hint
    #[serde(rename = "bot")]
    pub bottom:            f64,
    /// Supplemental hotspot records, kept as opaque JSON
    #[serde(rename = "hs")]
    pub hotspots:          Vec<serde_json::Value>,
}

impl WallpaperImage {
    /// Fully-qualified image URL: `host` followed by the relative `url`
    ///
    /// # Examples
    ///
    /// ```
    /// use bing_wallpaper_mcp::model::WallpaperImage;
    ///
    /// let image = WallpaperImage {
    ///     url: "/th?id=OHR.Test".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(image.full_url("https://cn.bing.com"), "https://cn.bing.com/th?id=OHR.Test");
    /// ```
    pub fn full_url(&self, host: &str) -> String {
        format!("{}{}", host, self.url)
    }
}

/// Tooltip labels returned alongside the images
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperTooltips {
    pub loading:  Option<String>,
    pub previous: Option<String>,
    pub next:     Option<String>,
    pub walle:    Option<String>,
    pub walls:    Option<String>,
}

/// Envelope of one Bing image archive fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WallpaperResponse {
    /// Images in upstream order; may be empty
    #[serde(default)]
    pub images:   Vec<WallpaperImage>,
    /// Tooltip labels, absent on some upstream variants
    #[serde(default)]
    pub tooltips: Option<WallpaperTooltips>,
}

/// Payload of a single resource content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePayload {
    /// UTF-8 text
    Text(String),
    /// Raw bytes, base64-encoded on the wire
    Blob(Vec<u8>),
}

/// One content item of a resource read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceContent {
    /// URI the content was read from
    pub uri:       String,
    /// MIME type, if known
    pub mime_type: Option<String>,
    /// Text or binary payload
    pub payload:   ResourcePayload,
}

impl ResourceContent {
    /// Creates a text content item without a MIME type
    pub fn text(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri:       uri.into(),
            mime_type: None,
            payload:   ResourcePayload::Text(text.into()),
        }
    }

    /// Creates a `text/plain` content item
    pub fn plain_text(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self::text(uri, text).with_mime_type(TEXT_PLAIN)
    }

    /// Creates a binary content item
    pub fn blob(uri: impl Into<String>, data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            uri:       uri.into(),
            mime_type: Some(mime_type.into()),
            payload:   ResourcePayload::Blob(data),
        }
    }

    /// Sets the MIME type
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Returns the text payload, or `None` for blobs
    pub fn as_text(&self) -> Option<&str> {
        match &self.payload {
            ResourcePayload::Text(text) => Some(text),
            ResourcePayload::Blob(_) => None,
        }
    }
}

/// Descriptive metadata attached to a resource read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResourceMeta {
    pub title:       String,
    pub description: String,
    pub copyright:   String,
}

impl ResourceMeta {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        copyright: impl Into<String>,
    ) -> Self {
        Self {
            title:       title.into(),
            description: description.into(),
            copyright:   copyright.into(),
        }
    }
}

/// Result of reading a resource: at least one content item plus metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceResult {
    contents: Vec<ResourceContent>,
    meta:     ResourceMeta,
}

impl ResourceResult {
    /// Creates a result with its first (mandatory) content item
    pub fn new(first: ResourceContent, meta: ResourceMeta) -> Self {
        Self {
            contents: vec![first],
            meta,
        }
    }

    /// Appends another content item
    pub fn with_content(mut self, content: ResourceContent) -> Self {
        self.contents.push(content);
        self
    }

    /// Content items in order; never empty
    pub fn contents(&self) -> &[ResourceContent] {
        &self.contents
    }

    pub fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    /// Text of the first content item, if it is text
    pub fn first_text(&self) -> Option<&str> {
        self.contents.first().and_then(ResourceContent::as_text)
    }
}

/// Parameters for the `bing-wallpaper-add` tool
#[derive(Debug, Clone, Copy, Deserialize, Serialize, JsonSchema)]
pub struct AddParams {
    /// First addend
    pub a: f64,
    /// Second addend
    pub b: f64,
}
