//! Resource routing and responders
//!
//! Three resources are registered:
//!
//! | name | URI | content |
//! |---|---|---|
//! | `bing-wallpaper-info` | `app://info` | fixed service description |
//! | `bing-wallpaper-user-info` | `users://{userId}/info` | echo of the user id |
//! | `bing-wallpaper-index` | `bingwallpaper://{index}` | wallpaper URL for that day |
//!
//! [`ResourceRoute::parse`] maps a concrete URI onto one of them, and the
//! responder functions build the [`ResourceResult`] for it.

use tracing::{info, warn};

use crate::{
    error::{WallpaperError, WallpaperResult},
    model::{ResourceContent, ResourceMeta, ResourceResult},
    wallpaper::{DEFAULT_COUNT, DEFAULT_OFFSET, WallpaperSource},
};

/// Copyright attached to every resource the server authors itself
pub const COPYRIGHT: &str = "@MatiasTang";

pub const INFO_NAME: &str = "bing-wallpaper-info";
pub const INFO_URI: &str = "app://info";
pub const INFO_TEXT: &str = "这是一个获取最近的 bing 壁纸图片的服务";
const INFO_TITLE: &str = "服务信息";
pub const INFO_DESCRIPTION: &str = "bing 壁纸服务的基本信息";

pub const USER_INFO_NAME: &str = "bing-wallpaper-user-info";
pub const USER_INFO_TEMPLATE: &str = "users://{userId}/info";
const USER_INFO_PREFIX: &str = "users://";
const USER_INFO_SUFFIX: &str = "/info";
const USER_INFO_TITLE: &str = "用户基本信息";
pub const USER_INFO_DESCRIPTION: &str = "userId对应用户的基本信息";

pub const WALLPAPER_NAME: &str = "bing-wallpaper-index";
pub const WALLPAPER_TEMPLATE: &str = "bingwallpaper://{index}";
const WALLPAPER_PREFIX: &str = "bingwallpaper://";
pub const WALLPAPER_TITLE: &str = "Bing 每日壁纸";
pub const WALLPAPER_DESCRIPTION: &str = "Bing 最新的壁纸";
pub const WALLPAPER_FAILURE_TEXT: &str = "获取Bing壁纸失败";
pub const WALLPAPER_URL_PREFIX: &str = "Bing 今日的图片地址为：";

/// A resolved resource URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRoute {
    /// `app://info`
    Info,
    /// `users://{userId}/info`
    UserInfo { user_id: String },
    /// `bingwallpaper://{index}`; `index` is the raw, unparsed segment
    Wallpaper { index: String },
}

impl ResourceRoute {
    /// Resolves `uri` against the registered resources
    ///
    /// # Examples
    ///
    /// ```
    /// use bing_wallpaper_mcp::resources::ResourceRoute;
    ///
    /// assert_eq!(
    ///     ResourceRoute::parse("users://42/info").unwrap(),
    ///     ResourceRoute::UserInfo { user_id: "42".to_string() }
    /// );
    /// assert!(ResourceRoute::parse("file:///etc/passwd").is_err());
    /// ```
    pub fn parse(uri: &str) -> WallpaperResult<Self> {
        if uri == INFO_URI {
            return Ok(ResourceRoute::Info);
        }

        if let Some(user_id) = uri
            .strip_prefix(USER_INFO_PREFIX)
            .and_then(|rest| rest.strip_suffix(USER_INFO_SUFFIX))
            .filter(|id| is_template_segment(id))
        {
            return Ok(ResourceRoute::UserInfo {
                user_id: user_id.to_string(),
            });
        }

        if let Some(index) = uri
            .strip_prefix(WALLPAPER_PREFIX)
            .filter(|index| index.is_empty() || is_template_segment(index))
        {
            return Ok(ResourceRoute::Wallpaper {
                index: index.to_string(),
            });
        }

        Err(WallpaperError::ResourceNotFound {
            uri: uri.to_string(),
        })
    }
}

/// A template variable spans one non-empty path segment
fn is_template_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains('/')
}

/// Parses the wallpaper index segment
///
/// An empty segment means the caller omitted the index and selects today.
/// Anything other than a non-negative integer is rejected.
pub fn parse_index(raw: &str) -> WallpaperResult<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_OFFSET);
    }

    trimmed.parse::<u32>().map_err(|_| WallpaperError::InvalidParameter {
        parameter: "index".to_string(),
        reason:    format!("'{}' is not a non-negative integer", raw),
    })
}

/// Static service description
pub fn info_resource(uri: &str) -> ResourceResult {
    ResourceResult::new(
        ResourceContent::text(uri, INFO_TEXT),
        ResourceMeta::new(INFO_TITLE, INFO_DESCRIPTION, COPYRIGHT),
    )
}

/// Placeholder per-user resource; echoes the identifier without a lookup
pub fn user_info_resource(uri: &str, user_id: &str) -> ResourceResult {
    ResourceResult::new(
        ResourceContent::text(uri, format!("这里是URERID={}的用户的基本信息", user_id)),
        ResourceMeta::new(USER_INFO_TITLE, USER_INFO_DESCRIPTION, COPYRIGHT),
    )
}

/// Wallpaper-of-the-day resource
///
/// Fetches one image `index` days back. An empty answer or a failed fetch
/// yields the "retrieval failed" text. A malformed `index`, or a
/// source error that is not an upstream failure, is returned as an error.
pub async fn wallpaper_resource(
    uri: &str,
    raw_index: &str,
    source: &dyn WallpaperSource,
    image_host: &str,
) -> WallpaperResult<ResourceResult> {
    info!(%uri, index = %raw_index, "Wallpaper resource requested");
    let index = parse_index(raw_index)?;

    let images = match source.fetch_wallpapers(index, DEFAULT_COUNT).await {
        Ok(images) => images,
        Err(e) if e.is_upstream() => {
            warn!(error = %e, hint = e.remediation_hint(), "Wallpaper fetch failed");
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let Some(image) = images.first() else {
        return Ok(wallpaper_fallback(uri));
    };
    info!(?image, "Fetched wallpaper record");

    let image_url = image.full_url(image_host);
    Ok(ResourceResult::new(
        ResourceContent::plain_text(uri, format!("{}{}", WALLPAPER_URL_PREFIX, image_url)),
        ResourceMeta::new(
            WALLPAPER_TITLE,
            format!("Bing 最新的壁纸图，名为{}", image.title),
            image.copyright.clone(),
        ),
    ))
}

fn wallpaper_fallback(uri: &str) -> ResourceResult {
    ResourceResult::new(
        ResourceContent::plain_text(uri, WALLPAPER_FAILURE_TEXT),
        ResourceMeta::new(WALLPAPER_TITLE, WALLPAPER_DESCRIPTION, COPYRIGHT),
    )
}
