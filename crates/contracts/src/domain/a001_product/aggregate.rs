use crate::domain::common::query::{is_blank, is_unset_id};
use crate::domain::common::EntityId;
use crate::enums::Season;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Товар (шина) в том виде, в котором его отдаёт API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub brand_id: EntityId,
    /// Денормализованное имя бренда
    #[serde(default)]
    pub brand_name: Option<String>,
    pub category_id: EntityId,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
    /// Типоразмер, например "205/55 R16"
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i32,
    /// Порог, ниже которого товар попадает в `low-stock`
    #[serde(default)]
    pub min_stock: Option<i32>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Остаток не выше минимального порога
    pub fn is_low_stock(&self) -> bool {
        self.min_stock.map_or(false, |min| self.stock <= min)
    }
}

// ============================================================================
// DTO
// ============================================================================

/// JSON-тело для `POST /products` и `PUT /products/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub brand_id: EntityId,
    pub category_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub price: f64,
    pub stock: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i32>,
}

impl ProductDto {
    /// Валидация перед отправкой
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Наименование обязательно для заполнения");
        }
        if self.brand_id <= 0 {
            return Err("Выберите бренд");
        }
        if self.category_id <= 0 {
            return Err("Выберите категорию");
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной");
        }
        if self.stock < 0 {
            return Err("Остаток не может быть отрицательным");
        }
        Ok(())
    }
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            sku: p.sku.clone(),
            brand_id: p.brand_id,
            category_id: p.category_id,
            season: p.season,
            size: p.size.clone(),
            price: p.price,
            stock: p.stock,
            min_stock: p.min_stock,
        }
    }
}

// ============================================================================
// Query parameters
// ============================================================================

/// Параметры `GET /products`. Незаданные фильтры в URL не попадают.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "is_blank")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "is_unset_id")]
    pub brand_id: Option<EntityId>,
    #[serde(skip_serializing_if = "is_unset_id")]
    pub category_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
}

impl ProductListParams {
    /// Те же фильтры без пагинации (для выгрузки)
    pub fn without_paging(&self) -> Self {
        Self {
            page: None,
            size: None,
            ..self.clone()
        }
    }
}

/// Параметры `PATCH /products/{id}/stock`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockAdjustmentParams {
    pub adjustment: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        serde_json::from_str(
            r#"{"id":11,"name":"Pilot Sport 4","brandId":1,"brandName":"Michelin",
                "categoryId":3,"season":"SUMMER","size":"225/45 R17",
                "price":149.5,"stock":2,"minStock":4}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decodes_camel_case_product() {
        let p = sample();
        assert_eq!(p.brand_name.as_deref(), Some("Michelin"));
        assert_eq!(p.season, Some(Season::Summer));
        assert_eq!(p.category_name, None);
        assert!(p.is_low_stock());
    }

    #[test]
    fn test_dto_from_product_keeps_fields() {
        let dto = ProductDto::from(&sample());
        assert_eq!(dto.name, "Pilot Sport 4");
        assert_eq!(dto.brand_id, 1);
        assert_eq!(dto.min_stock, Some(4));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_dto_validation() {
        let mut dto = ProductDto::from(&sample());
        dto.name = "  ".to_string();
        assert!(dto.validate().is_err());

        let mut dto = ProductDto::from(&sample());
        dto.category_id = 0;
        assert_eq!(dto.validate(), Err("Выберите категорию"));
    }

    #[test]
    fn test_dto_skips_empty_optionals() {
        let dto = ProductDto {
            name: "X".into(),
            brand_id: 1,
            category_id: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("sku").is_none());
        assert!(json.get("season").is_none());
        assert_eq!(json["brandId"], 1);
    }

    #[test]
    fn test_without_paging_keeps_filters() {
        let params = ProductListParams {
            page: Some(3),
            size: Some(50),
            search: Some("pilot".into()),
            ..Default::default()
        };
        let stripped = params.without_paging();
        assert_eq!(stripped.page, None);
        assert_eq!(stripped.size, None);
        assert_eq!(stripped.search.as_deref(), Some("pilot"));
    }
}
