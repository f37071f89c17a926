//! API utilities for frontend-backend communication
//!
//! URL construction, query strings and envelope handling shared by every
//! resource client. Each client function issues exactly one request and
//! returns the `data` field of the `{ "data": ... }` envelope.

use super::api_error::ApiError;
use contracts::domain::common::ApiResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Version prefix of every REST path
pub const API_PREFIX: &str = "/v1";

/// Get the base URL for API requests
///
/// `API_BASE_URL` set at build time wins (e.g. `API_BASE_URL=https://shop.example.com trunk build`).
/// Otherwise the URL is derived from the current window location, using port 3000
/// for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(configured) = option_env!("API_BASE_URL") {
        return configured.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a resource path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/brands/3"); // http://host:3000/v1/brands/3
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}{}", api_base(), API_PREFIX, path)
}

/// Serialize parameters into a query string.
///
/// Fields skipped by `skip_serializing_if` do not appear at all.
pub fn build_query<T: Serialize>(params: &T) -> Result<String, ApiError> {
    Ok(serde_qs::to_string(params)?)
}

/// Append a query string to a path; an empty query leaves the path untouched
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Join several query strings, skipping empty ones
pub fn join_queries(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("&")
}

/// Send a prepared request, mapping transport failures and non-2xx statuses
pub async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response)
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::http(response.status(), response.status_text()))
    }
}

/// Decode `{ "data": T }` and return `T`
pub async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let envelope: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.into_data())
}

/// GET a path and unwrap the envelope
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = finish(Request::get(&api_url(path)))?;
    read_data(send(request).await?).await
}

/// Finish a body-less request (query-string mutations, PATCH, DELETE)
pub fn finish(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder
        .header("Accept", "application/json")
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// Finish a request with a JSON body
pub fn finish_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
    builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::aggregate::ProductListParams;
    use contracts::domain::a002_brand::aggregate::BrandParams;
    use contracts::domain::a003_category::aggregate::CategoryParams;
    use contracts::enums::Season;

    #[test]
    fn test_brand_params_in_declaration_order() {
        let params = BrandParams {
            name: "Michelin".to_string(),
            country: Some("Fransiya".to_string()),
        };
        assert_eq!(build_query(&params).unwrap(), "name=Michelin&country=Fransiya");
    }

    #[test]
    fn test_blank_country_is_omitted() {
        let params = BrandParams {
            name: "Nokian".to_string(),
            country: Some("  ".to_string()),
        };
        assert_eq!(build_query(&params).unwrap(), "name=Nokian");
    }

    #[test]
    fn test_category_id_present_only_when_set() {
        let with_category = ProductListParams {
            category_id: Some(5),
            ..Default::default()
        };
        assert_eq!(build_query(&with_category).unwrap(), "categoryId=5");

        let zero = ProductListParams {
            category_id: Some(0),
            ..Default::default()
        };
        assert_eq!(build_query(&zero).unwrap(), "");
        assert_eq!(build_query(&ProductListParams::default()).unwrap(), "");
    }

    #[test]
    fn test_product_filters_full_set() {
        let params = ProductListParams {
            page: Some(0),
            size: Some(20),
            search: Some("pilot".to_string()),
            brand_id: Some(1),
            category_id: None,
            season: Some(Season::Winter),
        };
        assert_eq!(
            build_query(&params).unwrap(),
            "page=0&size=20&search=pilot&brandId=1&season=WINTER"
        );
    }

    #[test]
    fn test_empty_search_is_omitted() {
        let params = ProductListParams {
            search: Some(String::new()),
            brand_id: Some(2),
            ..Default::default()
        };
        assert_eq!(build_query(&params).unwrap(), "brandId=2");
    }

    #[test]
    fn test_category_parent_is_optional() {
        let params = CategoryParams {
            name: "Trucks".to_string(),
            description: None,
            parent_id: Some(2),
        };
        assert_eq!(build_query(&params).unwrap(), "name=Trucks&parentId=2");
    }

    #[test]
    fn test_with_query_and_join() {
        assert_eq!(with_query("/brands", ""), "/brands");
        assert_eq!(with_query("/brands", "name=A"), "/brands?name=A");
        assert_eq!(join_queries(&["format=pdf", "", "search=x"]), "format=pdf&search=x");
    }
}
