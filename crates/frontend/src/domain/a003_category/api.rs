use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, build_query, finish, get_data, read_data, send, with_query};
use crate::shared::export::ExportApi;
use contracts::domain::a003_category::aggregate::{Category, CategoryParams};
use contracts::domain::a003_category::tree::CategoryTreeNode;
use contracts::domain::common::EntityId;
use gloo_net::http::Request;

pub const BASE_PATH: &str = "/categories";

pub fn export() -> ExportApi {
    ExportApi::new(BASE_PATH, "categories")
}

pub fn item_path(id: EntityId) -> String {
    format!("{}/{}", BASE_PATH, id)
}

pub fn create_path(params: &CategoryParams) -> Result<String, ApiError> {
    Ok(with_query(BASE_PATH, &build_query(params)?))
}

pub fn update_path(id: EntityId, params: &CategoryParams) -> Result<String, ApiError> {
    Ok(with_query(&item_path(id), &build_query(params)?))
}

/// Fetch all categories as a flat list
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_data(BASE_PATH).await
}

/// Fetch categories nested by parent
pub async fn fetch_category_tree() -> Result<Vec<CategoryTreeNode>, ApiError> {
    get_data(&format!("{}/tree", BASE_PATH)).await
}

pub async fn create_category(params: &CategoryParams) -> Result<Category, ApiError> {
    let request = finish(Request::post(&api_url(&create_path(params)?)))?;
    read_data(send(request).await?).await
}

pub async fn update_category(id: EntityId, params: &CategoryParams) -> Result<Category, ApiError> {
    let request = finish(Request::put(&api_url(&update_path(id, params)?)))?;
    read_data(send(request).await?).await
}

pub async fn delete_category(id: EntityId) -> Result<(), ApiError> {
    let request = finish(Request::delete(&api_url(&item_path(id))))?;
    send(request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::API_PREFIX;

    #[test]
    fn test_delete_category_three() {
        assert_eq!(format!("{}{}", API_PREFIX, item_path(3)), "/v1/categories/3");
    }

    #[test]
    fn test_create_path_with_all_fields() {
        let params = CategoryParams {
            name: "Winter".to_string(),
            description: Some("Studded".to_string()),
            parent_id: Some(1),
        };
        assert_eq!(
            create_path(&params).unwrap(),
            "/categories?name=Winter&description=Studded&parentId=1"
        );
    }

    #[test]
    fn test_update_path_without_parent() {
        let params = CategoryParams {
            name: "Trucks".to_string(),
            description: None,
            parent_id: None,
        };
        assert_eq!(update_path(2, &params).unwrap(), "/categories/2?name=Trucks");
    }
}
