use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, build_query, finish, get_data, read_data, send, with_query};
use crate::shared::export::ExportApi;
use contracts::domain::a002_brand::aggregate::{Brand, BrandParams};
use contracts::domain::common::EntityId;
use gloo_net::http::Request;

pub const BASE_PATH: &str = "/brands";

/// Выгрузка справочника брендов
pub fn export() -> ExportApi {
    ExportApi::new(BASE_PATH, "brands")
}

pub fn item_path(id: EntityId) -> String {
    format!("{}/{}", BASE_PATH, id)
}

pub fn create_path(params: &BrandParams) -> Result<String, ApiError> {
    Ok(with_query(BASE_PATH, &build_query(params)?))
}

pub fn update_path(id: EntityId, params: &BrandParams) -> Result<String, ApiError> {
    Ok(with_query(&item_path(id), &build_query(params)?))
}

/// Fetch all brands
pub async fn fetch_brands() -> Result<Vec<Brand>, ApiError> {
    get_data(BASE_PATH).await
}

/// Create brand; name and country travel in the query string
pub async fn create_brand(params: &BrandParams) -> Result<Brand, ApiError> {
    let request = finish(Request::post(&api_url(&create_path(params)?)))?;
    read_data(send(request).await?).await
}

pub async fn update_brand(id: EntityId, params: &BrandParams) -> Result<Brand, ApiError> {
    let request = finish(Request::put(&api_url(&update_path(id, params)?)))?;
    read_data(send(request).await?).await
}

pub async fn delete_brand(id: EntityId) -> Result<(), ApiError> {
    let request = finish(Request::delete(&api_url(&item_path(id))))?;
    send(request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::API_PREFIX;

    #[test]
    fn test_create_michelin_url() {
        let params = BrandParams {
            name: "Michelin".to_string(),
            country: Some("Fransiya".to_string()),
        };
        let path = create_path(&params).unwrap();
        assert_eq!(
            format!("{}{}", API_PREFIX, path),
            "/v1/brands?name=Michelin&country=Fransiya"
        );
    }

    #[test]
    fn test_update_and_delete_paths() {
        let params = BrandParams {
            name: "Nokian".to_string(),
            country: None,
        };
        assert_eq!(update_path(4, &params).unwrap(), "/brands/4?name=Nokian");
        assert_eq!(item_path(4), "/brands/4");
        assert_eq!(export().base_path(), "/brands");
    }
}
