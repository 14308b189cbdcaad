//! MCP service implementation with tool and resource routing
//!
//! This module provides the bing-wallpaper MCP server: the
//! `bing-wallpaper-add` tool and the three resources described in
//! [`crate::resources`].

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ListResourceTemplatesResult,
        ListResourcesResult, PaginatedRequestParam, ReadResourceRequestParam, ReadResourceResult,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use tracing::debug;

use crate::{
    config::ServerConfig,
    error::WallpaperResult,
    mcp_content::{build_read_result, list_resource_templates, list_static_resources},
    model::{AddParams, ResourceResult},
    resources::{ResourceRoute, info_resource, user_info_resource, wallpaper_resource},
    wallpaper::{BingClient, MockSource, WallpaperSource},
};

/// Formats a number the way the add tool reports it
///
/// Integral values carry no fractional part, negative zero prints as `0`
/// and overflow prints as `Infinity`/`-Infinity`.
///
/// # Examples
///
/// ```
/// use bing_wallpaper_mcp::mcp::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::MAX * 2.0), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    // Magnitudes >= 1e21 or < 1e-6 print in positional notation, not exponent form
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Bing wallpaper MCP server
///
/// An immutable registry of one tool and three resources. Build it once,
/// then hand it to a transport with `ServiceExt::serve`.
///
/// # Tools
///
/// - `bing-wallpaper-add`: sum of two numbers
///
/// # Resources
///
/// - `app://info`: service description
/// - `users://{userId}/info`: per-user placeholder
/// - `bingwallpaper://{index}`: Bing wallpaper URL, `index` days back
#[derive(Clone)]
pub struct BingWallpaperServer {
    /// Tool router for dispatching tool calls
    /// Note: This field is used by the #[tool_handler] macro
    tool_router: ToolRouter<Self>,
    /// Source of wallpaper metadata
    source:      Arc<dyn WallpaperSource>,
    /// Host prefixed to relative image URLs
    image_host:  String,
}

#[tool_router]
impl BingWallpaperServer {
    /// Creates a server backed by `source`
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bing_wallpaper_mcp::{
    ///     config::ServerConfig, mcp::BingWallpaperServer, wallpaper::MockSource,
    /// };
    ///
    /// let source = Arc::new(MockSource::new());
    /// let server = BingWallpaperServer::new(source, &ServerConfig::default());
    /// ```
    pub fn new(source: Arc<dyn WallpaperSource>, config: &ServerConfig) -> Self {
        Self {
            tool_router: Self::tool_router(),
            source,
            image_host: config.image_host.clone(),
        }
    }

    /// Creates a server that fetches from the Bing image archive
    pub fn from_config(config: &ServerConfig) -> WallpaperResult<Self> {
        let client = BingClient::new(config)?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Creates a server with an empty [`MockSource`] and default settings
    ///
    /// Useful for testing and development.
    pub fn new_with_mock() -> Self {
        Self::new(Arc::new(MockSource::new()), &ServerConfig::default())
    }

    /// Addition tool - returns `a + b` as text
    ///
    /// # Examples
    ///
    /// Request:
    /// ```json
    /// {
    ///   "method": "tools/call",
    ///   "params": {
    ///     "name": "bing-wallpaper-add",
    ///     "arguments": { "a": 1, "b": 2 }
    ///   }
    /// }
    /// ```
    ///
    /// Response:
    /// ```json
    /// { "content": [{ "type": "text", "text": "3" }] }
    /// ```
    #[tool(name = "bing-wallpaper-add", description = "Add two numbers and return the sum as text")]
    pub async fn add(&self, params: Parameters<AddParams>) -> Result<CallToolResult, McpError> {
        let AddParams { a, b } = params.0;
        let sum = format_number(a + b);
        debug!(a, b, %sum, "Add tool called");
        Ok(CallToolResult::success(vec![Content::text(sum)]))
    }
}

impl BingWallpaperServer {
    /// Resolves `uri` and builds its domain-level result
    pub async fn resolve(&self, uri: &str) -> WallpaperResult<ResourceResult> {
        match ResourceRoute::parse(uri)? {
            ResourceRoute::Info => Ok(info_resource(uri)),
            ResourceRoute::UserInfo { user_id } => Ok(user_info_resource(uri, &user_id)),
            ResourceRoute::Wallpaper { index } => {
                wallpaper_resource(uri, &index, self.source.as_ref(), &self.image_host).await
            }
        }
    }

    /// Reads `uri` and converts the result into its MCP shape
    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let result = self.resolve(uri).await?;
        Ok(build_read_result(&result)?)
    }
}

#[tool_handler]
impl ServerHandler for BingWallpaperServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "bing-wallpaper".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            instructions: Some(
                "Bing wallpaper MCP server.\n\n\
                 Tools:\n\
                 - bing-wallpaper-add: add two numbers\n\n\
                 Resources:\n\
                 - app://info: service description\n\
                 - users://{userId}/info: per-user placeholder\n\
                 - bingwallpaper://{index}: URL of the Bing wallpaper `index` days back \
                 (0 = today)"
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(list_static_resources()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(list_resource_templates()?))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read(&request.uri).await
    }
}
