use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{
    api_url, build_query, finish, finish_json, get_data, read_data, send, with_query,
};
use crate::shared::export::ExportApi;
use contracts::domain::a001_product::aggregate::{
    Product, ProductDto, ProductListParams, StockAdjustmentParams,
};
use contracts::domain::common::{EntityId, PageResponse};
use gloo_net::http::Request;

pub const BASE_PATH: &str = "/products";

/// Выгрузка каталога товаров с текущими фильтрами
pub fn export() -> ExportApi {
    ExportApi::new(BASE_PATH, "products")
}

pub fn item_path(id: EntityId) -> String {
    format!("{}/{}", BASE_PATH, id)
}

pub fn list_path(params: &ProductListParams) -> Result<String, ApiError> {
    Ok(with_query(BASE_PATH, &build_query(params)?))
}

pub fn low_stock_path() -> String {
    format!("{}/low-stock", BASE_PATH)
}

pub fn stock_path(id: EntityId, adjustment: i32) -> Result<String, ApiError> {
    let query = build_query(&StockAdjustmentParams { adjustment })?;
    Ok(with_query(&format!("{}/stock", item_path(id)), &query))
}

/// Страница товаров с фильтрами
pub async fn fetch_products(params: &ProductListParams) -> Result<PageResponse<Product>, ApiError> {
    get_data(&list_path(params)?).await
}

pub async fn fetch_product(id: EntityId) -> Result<Product, ApiError> {
    get_data(&item_path(id)).await
}

/// Товары с остатком не выше минимального
pub async fn fetch_low_stock() -> Result<Vec<Product>, ApiError> {
    get_data(&low_stock_path()).await
}

pub async fn create_product(dto: &ProductDto) -> Result<Product, ApiError> {
    let request = finish_json(Request::post(&api_url(BASE_PATH)), dto)?;
    read_data(send(request).await?).await
}

pub async fn update_product(id: EntityId, dto: &ProductDto) -> Result<Product, ApiError> {
    let request = finish_json(Request::put(&api_url(&item_path(id))), dto)?;
    read_data(send(request).await?).await
}

pub async fn delete_product(id: EntityId) -> Result<(), ApiError> {
    let request = finish(Request::delete(&api_url(&item_path(id))))?;
    send(request).await?;
    Ok(())
}

/// Изменить остаток на `adjustment` (может быть отрицательным).
/// Тело запроса пустое, в ответе обновлённый товар.
pub async fn adjust_stock(id: EntityId, adjustment: i32) -> Result<Product, ApiError> {
    let request = finish(Request::patch(&api_url(&stock_path(id, adjustment)?)))?;
    read_data(send(request).await?).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Season;

    #[test]
    fn test_list_path_skips_unset_filters() {
        let params = ProductListParams {
            page: Some(0),
            size: Some(20),
            search: Some(String::new()),
            brand_id: Some(0),
            category_id: None,
            season: None,
        };
        assert_eq!(list_path(&params).unwrap(), "/products?page=0&size=20");
    }

    #[test]
    fn test_list_path_with_filters() {
        let params = ProductListParams {
            page: Some(2),
            size: Some(50),
            search: None,
            brand_id: Some(7),
            category_id: Some(3),
            season: Some(Season::AllSeason),
        };
        assert_eq!(
            list_path(&params).unwrap(),
            "/products?page=2&size=50&brandId=7&categoryId=3&season=ALL_SEASON"
        );
    }

    #[test]
    fn test_stock_path_carries_signed_delta() {
        assert_eq!(stock_path(12, 1).unwrap(), "/products/12/stock?adjustment=1");
        assert_eq!(stock_path(12, -1).unwrap(), "/products/12/stock?adjustment=-1");
    }

    #[test]
    fn test_fixed_paths() {
        assert_eq!(low_stock_path(), "/products/low-stock");
        assert_eq!(item_path(5), "/products/5");
        assert_eq!(export().base_path(), "/products");
    }
}
