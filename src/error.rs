//! Error types for wallpaper fetching and resource resolution
//!
//! This module defines the error taxonomy of the server with user-facing
//! messages and remediation hints. Each error knows which MCP error code it
//! maps to when it crosses the protocol boundary.

use rmcp::model::ErrorData as McpError;
use serde_json::json;

/// Result type alias for wallpaper and resource operations
pub type WallpaperResult<T> = Result<T, WallpaperError>;

/// Error type for the wallpaper server
///
/// Upstream variants (`UpstreamUnavailable`, `UpstreamStatus`,
/// `MalformedPayload`) describe a failed fetch against the Bing archive.
/// The wallpaper resource turns them into its "retrieval failed" fallback;
/// they only reach the client when a caller asks for them directly.
#[derive(Debug, thiserror::Error)]
pub enum WallpaperError {
    /// Network or transport failure while contacting the upstream endpoint
    #[error("Upstream wallpaper service unavailable: {reason}")]
    UpstreamUnavailable {
        /// Underlying transport error
        reason: String,
    },

    /// Upstream endpoint answered with a non-success status
    #[error("Upstream wallpaper service returned HTTP {status}")]
    UpstreamStatus {
        /// HTTP status code
        status: u16,
    },

    /// Upstream body could not be parsed as a wallpaper response
    #[error("Malformed upstream payload: {reason}")]
    MalformedPayload {
        /// Parser error message
        reason: String,
    },

    /// Invalid parameter provided by the client
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: String,
        /// Reason why it's invalid
        reason:    String,
    },

    /// Requested URI matches no registered resource
    #[error("Resource not found: {uri}")]
    ResourceNotFound {
        /// The URI that was requested
        uri: String,
    },

    /// Converting a result into its MCP wire shape failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WallpaperError {
    /// Returns true for errors caused by the upstream wallpaper service
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            WallpaperError::UpstreamUnavailable { .. }
                | WallpaperError::UpstreamStatus { .. }
                | WallpaperError::MalformedPayload { .. }
        )
    }

    /// Returns an actionable remediation hint for this error
    ///
    /// # Examples
    ///
    /// ```
    /// use bing_wallpaper_mcp::error::WallpaperError;
    ///
    /// let error = WallpaperError::InvalidParameter {
    ///     parameter: "index".to_string(),
    ///     reason:    "not a number".to_string(),
    /// };
    ///
    /// assert!(error.remediation_hint().contains("non-negative integer"));
    /// ```
    pub fn remediation_hint(&self) -> &str {
        match self {
            WallpaperError::UpstreamUnavailable { .. } => {
                "Check network connectivity to the Bing image archive. The server does not retry; \
                 request the resource again once the network is back."
            }
            WallpaperError::UpstreamStatus { status } if *status >= 500 => {
                "The Bing image archive reported a server error. Try again later."
            }
            WallpaperError::UpstreamStatus { .. } => {
                "The Bing image archive rejected the request. Verify the configured API base URL."
            }
            WallpaperError::MalformedPayload { .. } => {
                "The Bing image archive returned an unexpected body. The endpoint format may have \
                 changed, or a proxy replaced the response."
            }
            WallpaperError::InvalidParameter { parameter, .. } => match parameter.as_str() {
                "index" => "The wallpaper index must be a non-negative integer, e.g. bingwallpaper://0.",
                _ => "Check the parameter value against the resource template.",
            },
            WallpaperError::ResourceNotFound { .. } => {
                "Use resources/list and resources/templates/list to see available resources."
            }
            WallpaperError::Serialization(_) => {
                "Building the MCP response failed. This is a server bug; please report it."
            }
        }
    }
}

impl From<reqwest::Error> for WallpaperError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            WallpaperError::UpstreamStatus {
                status: status.as_u16(),
            }
        } else if error.is_decode() {
            WallpaperError::MalformedPayload {
                reason: error.to_string(),
            }
        } else {
            WallpaperError::UpstreamUnavailable {
                reason: error.to_string(),
            }
        }
    }
}

impl From<WallpaperError> for McpError {
    fn from(error: WallpaperError) -> Self {
        let data = Some(json!({ "hint": error.remediation_hint() }));
        match &error {
            WallpaperError::InvalidParameter { .. } => McpError::invalid_params(error.to_string(), data),
            WallpaperError::ResourceNotFound { uri } => McpError::resource_not_found(
                error.to_string(),
                Some(json!({ "uri": uri, "hint": error.remediation_hint() })),
            ),
            WallpaperError::UpstreamUnavailable { .. }
            | WallpaperError::UpstreamStatus { .. }
            | WallpaperError::MalformedPayload { .. }
            | WallpaperError::Serialization(_) => McpError::internal_error(error.to_string(), data),
        }
    }
}
