use crate::domain::common::query::is_blank;
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Бренд (производитель)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// Параметры `POST /brands` и `PUT /brands/{id}`; передаются строкой запроса
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandParams {
    pub name: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_is_optional_on_decode() {
        let brand: Brand = serde_json::from_str(r#"{"id":4,"name":"Nokian"}"#).unwrap();
        assert_eq!(brand.country, None);
    }
}
