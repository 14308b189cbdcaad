//! MCP content builders for resource reads
//!
//! Converts [`ResourceResult`] into the protocol's `ReadResourceResult` and
//! builds the resource/template listings. `ReadResourceResult` has no
//! result-level `_meta`, so title, description and copyright are carried on
//! each content item's `_meta`.
//!
//! # Examples
//!
//! ```
//! use bing_wallpaper_mcp::{
//!     mcp_content::build_read_result,
//!     model::{ResourceContent, ResourceMeta, ResourceResult},
//! };
//!
//! let result = ResourceResult::new(
//!     ResourceContent::plain_text("app://info", "hello"),
//!     ResourceMeta::new("title", "description", "copyright"),
//! );
//!
//! let read = build_read_result(&result).unwrap();
//! assert_eq!(read.contents.len(), 1);
//! ```

use base64::{Engine, engine::general_purpose::STANDARD};
use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceTemplate};
use serde_json::{Map, Value, json};

use crate::{
    error::WallpaperResult,
    model::{ResourceContent, ResourcePayload, ResourceResult, TEXT_PLAIN},
    resources::{
        INFO_DESCRIPTION, INFO_NAME, INFO_URI, USER_INFO_DESCRIPTION, USER_INFO_NAME,
        USER_INFO_TEMPLATE, WALLPAPER_DESCRIPTION, WALLPAPER_NAME, WALLPAPER_TEMPLATE,
    },
};

/// Builds the wire JSON of one content item
///
/// Text payloads go to `text`, blob payloads are base64-encoded into `blob`
/// (no `data:` prefix).
pub fn content_to_json(content: &ResourceContent, meta: &Value) -> Value {
    let mut item = Map::new();
    item.insert("uri".to_string(), json!(content.uri));
    if let Some(mime_type) = &content.mime_type {
        item.insert("mimeType".to_string(), json!(mime_type));
    }
    match &content.payload {
        ResourcePayload::Text(text) => {
            item.insert("text".to_string(), json!(text));
        }
        ResourcePayload::Blob(data) => {
            item.insert("blob".to_string(), json!(STANDARD.encode(data)));
        }
    }
    item.insert("_meta".to_string(), meta.clone());
    Value::Object(item)
}

/// Converts a resource result into the MCP `ReadResourceResult`
pub fn build_read_result(result: &ResourceResult) -> WallpaperResult<ReadResourceResult> {
    let meta = serde_json::to_value(result.meta())?;
    let contents: Vec<Value> = result
        .contents()
        .iter()
        .map(|content| content_to_json(content, &meta))
        .collect();

    let read = serde_json::from_value(json!({ "contents": contents }))?;
    Ok(read)
}

/// Concrete resources advertised by `resources/list`
pub fn list_static_resources() -> Vec<Resource> {
    let mut info = RawResource::new(INFO_URI, INFO_NAME);
    info.description = Some(INFO_DESCRIPTION.to_string());
    vec![info.no_annotation()]
}

/// Resource templates advertised by `resources/templates/list`
pub fn list_resource_templates() -> WallpaperResult<Vec<ResourceTemplate>> {
    let templates = [
        (USER_INFO_TEMPLATE, USER_INFO_NAME, USER_INFO_DESCRIPTION, None),
        (WALLPAPER_TEMPLATE, WALLPAPER_NAME, WALLPAPER_DESCRIPTION, Some(TEXT_PLAIN)),
    ];

    let mut listed: Vec<ResourceTemplate> = Vec::with_capacity(templates.len());
    for (uri_template, name, description, mime_type) in templates {
        listed.push(serde_json::from_value(json!({
            "uriTemplate": uri_template,
            "name": name,
            "description": description,
            "mimeType": mime_type,
        }))?);
    }
    Ok(listed)
}
