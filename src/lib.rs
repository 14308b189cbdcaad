//! bing-wallpaper-mcp: Bing wallpaper of the day as an MCP server
//!
//! This library provides a Model Context Protocol (MCP) server that exposes
//! an addition tool, a static info resource, a templated per-user resource
//! and a resource returning the URL of the current Bing wallpaper.

pub mod config;
pub mod error;
pub mod mcp;
pub mod mcp_content;
pub mod model;
pub mod resources;
pub mod wallpaper;
