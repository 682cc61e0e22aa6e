//! Item Endpoints
//!
//! Frontend bindings for the backend's item endpoints.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::ApiError;
use crate::config;
use crate::models::ItemsResponse;

fn items_url() -> String {
    format!("{}/items", config::backend_url())
}

/// `GET /items` — the full item collection, in insertion order.
pub async fn fetch_items() -> Result<ItemsResponse, ApiError> {
    let resp = Request::get(&items_url())
        .send()
        .await
        .map_err(ApiError::Network)?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<ItemsResponse>().await.map_err(ApiError::Decode)
}

/// `POST /items` — register a new item.
///
/// The server reads multipart fields `name`, `category`, and `image`.
pub async fn post_item(name: &str, category: &str, image: Option<&File>) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form.append_with_str("name", name)
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    form.append_with_str("category", category)
        .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|e| ApiError::Request(format!("{e:?}")))?;
    }

    let resp = Request::post(&items_url())
        .body(form)
        .map_err(ApiError::Network)?
        .send()
        .await
        .map_err(ApiError::Network)?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_endpoint_targets_backend() {
        assert_eq!(items_url(), "http://localhost:9000/items");
    }
}
