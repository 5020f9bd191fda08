//! Image resolver.
//!
//! Collects the ids of image-bearing nodes, normalizing composite ids
//! to their pre-`;` component (the image endpoint addresses nodes by
//! that component). The URL batch is one call; the per-image downloads
//! fan out concurrently, with each download wrapped so an individual
//! failure is logged and dropped while the rest of the fleet proceeds.

use crate::ApiError;
use figcast_node::{DesignNode, ImageUrlMap};
use futures::future::join_all;
use std::collections::HashMap;

/// Recursively collect export ids of image-bearing nodes, in tree
/// order, deduplicated.
pub fn collect_image_ids(roots: &[DesignNode]) -> Vec<String> {
    let mut ids = Vec::new();
    for root in roots {
        collect_into(root, &mut ids);
    }
    ids
}

fn collect_into(node: &DesignNode, ids: &mut Vec<String>) {
    if node.bears_image() {
        let id = node.export_id().to_string();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    for child in &node.children {
        collect_into(child, ids);
    }
}

/// Download every resolved URL concurrently. A failed download is
/// logged and yields no entry; the aggregate wait always completes.
/// No retries, no timeouts beyond the client's defaults.
pub async fn download_images(
    client: &reqwest::Client,
    urls: &ImageUrlMap,
) -> HashMap<String, Vec<u8>> {
    let downloads = urls.iter().map(|(id, url)| async move {
        match fetch_bytes(client, url).await {
            Ok(bytes) => Some((id.clone(), bytes)),
            Err(e) => {
                log::warn!("image download failed for {id}: {e}");
                None
            }
        }
    });

    join_all(downloads).await.into_iter().flatten().collect()
}

async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, ApiError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: url.to_string(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}
