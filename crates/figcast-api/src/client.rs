//! HTTP client for the Figma REST API.

use crate::ApiError;
use figcast_node::{DesignNode, ImageUrlMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

const API_BASE: &str = "https://api.figma.com/v1";

/// Response of `GET /v1/files/{key}`. Serializable so the CLI can
/// snapshot a fetched tree to disk and generate from it offline.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaFile {
    pub name: String,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub document: DesignNode,
}

/// Response of `GET /v1/images/{key}`. Individual entries are null
/// when Figma could not render that node.
#[derive(Debug, Clone, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    err: Option<String>,
    #[serde(default)]
    images: HashMap<String, Option<String>>,
}

/// Authenticated client for the file and image endpoints.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: reqwest::Client,
    token: String,
}

impl FigmaClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
        }
    }

    /// Fetch a file's node tree. A non-2xx status becomes
    /// [`ApiError::Status`] with the response body as the message.
    pub async fn fetch_file(&self, file_key: &str) -> Result<FigmaFile, ApiError> {
        let response = self
            .http
            .get(format!("{API_BASE}/files/{file_key}"))
            .header("X-Figma-Token", &self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Resolve thumbnail URLs for a batch of node ids in one call.
    /// Nodes Figma could not render come back null and are dropped
    /// from the map (logged, not fatal); an `err` field in the body is
    /// an upstream error for the whole batch.
    pub async fn fetch_image_urls(
        &self,
        file_key: &str,
        ids: &[String],
    ) -> Result<ImageUrlMap, ApiError> {
        if ids.is_empty() {
            return Ok(ImageUrlMap::new());
        }

        let response = self
            .http
            .get(format!("{API_BASE}/images/{file_key}"))
            .header("X-Figma-Token", &self.token)
            .query(&[("ids", ids.join(",")), ("format", "png".to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: ImageResponse = response.json().await?;
        if let Some(err) = body.err {
            return Err(ApiError::Upstream(err));
        }

        Ok(resolve_urls(body.images))
    }
}

/// Keep the entries Figma actually resolved; null URLs are logged and
/// skipped so the batch yields partial results instead of failing.
fn resolve_urls(images: HashMap<String, Option<String>>) -> ImageUrlMap {
    let mut resolved = ImageUrlMap::new();
    for (id, url) in images {
        match url {
            Some(url) if !url.is_empty() => {
                resolved.insert(id, url);
            }
            _ => log::warn!("no rendered image for node {id}"),
        }
    }
    resolved
}

/// Extract a file key from a raw key or a Figma share URL
/// (`figma.com/file/KEY/…`, `/design/KEY/…`, `/proto/KEY/…`).
pub fn parse_file_key(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if !trimmed.contains("://") && !trimmed.contains('/') {
        return Some(trimmed.to_string());
    }

    let url = Url::parse(trimmed).ok()?;
    let segments: Vec<&str> = url.path_segments()?.collect();
    let markers = ["file", "design", "proto"];
    let marker_index = segments
        .iter()
        .position(|segment| markers.contains(segment))?;
    segments
        .get(marker_index + 1)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}
