//! Content loader: fetches a collection's JSON index plus the Markdown body
//! of every item. The result becomes visible to the app exactly once, when
//! everything has resolved; there is no incremental rendering while body
//! files stream in.

use std::collections::HashMap;

use gloo_net::http::Request;
use thiserror::Error;

use crate::model::{Collection, ContentItem, Kind, sort_by_date_desc};
use crate::util::cerror;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },
    #[error("bad index file: {0}")]
    Parse(#[from] serde_json::Error),
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    Ok(response.text().await?)
}

/// Load one collection: index first, sorted newest-first, then each item's
/// Markdown body sequentially into the body cache. A body that fails to
/// fetch is logged and skipped; its modal simply never opens (the cache
/// stays partial, matching the page's fail-soft error model).
pub async fn load(kind: Kind) -> Result<Collection, LoadError> {
    let index = fetch_text(kind.index_url()).await?;
    let mut items: Vec<ContentItem> = serde_json::from_str(&index)?;
    sort_by_date_desc(&mut items);

    let mut bodies = HashMap::with_capacity(items.len());
    for item in &items {
        match fetch_text(&item.content_file).await {
            Ok(text) => {
                bodies.insert(item.id.clone(), text);
            }
            Err(err) => {
                cerror(&format!(
                    "error loading {} body for '{}': {err}",
                    kind.as_str(),
                    item.id
                ));
            }
        }
    }

    Ok(Collection { items, bodies })
}
