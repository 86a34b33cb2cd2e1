//! Catalog proxy access.
//!
//! # Design
//! - One `GET /products` per app boot; no retry.
//! - A non-success status is an error even when the body parses.

/// Proxy location used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Full URL of the product listing for `base_url`.
#[must_use]
pub fn products_url(base_url: &str) -> String {
    format!("{}/products", base_url.trim_end_matches('/'))
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn fetch_products(
    base_url: &str,
) -> anyhow::Result<Vec<shopfront_api_models::Product>> {
    use gloo_net::http::Request;
    use shopfront_api_models::ProductListResponse;

    let response = Request::get(&products_url(base_url)).send().await?;
    if !response.ok() {
        anyhow::bail!("proxy responded with status {}", response.status());
    }
    let body: ProductListResponse = response.json().await?;
    Ok(body.products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_url_joins_without_double_slash() {
        assert_eq!(
            products_url(DEFAULT_API_BASE_URL),
            "http://localhost:3000/products"
        );
        assert_eq!(
            products_url("http://proxy.test/"),
            "http://proxy.test/products"
        );
    }
}
