use serde::{Deserialize, Serialize};

/// Обёртка ответа API: каждый успешный ответ приходит как `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Отбросить обёртку и вернуть полезную нагрузку
    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
        name: String,
    }

    #[test]
    fn test_unwraps_list_payload() {
        let json = r#"{"data":[{"id":1,"name":"Michelin"},{"id":2,"name":"Nokian"}]}"#;
        let parsed: ApiResponse<Vec<Item>> = serde_json::from_str(json).unwrap();
        let items = parsed.into_data();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Nokian");
    }

    #[test]
    fn test_ignores_extra_envelope_fields() {
        let json = r#"{"data":{"id":7,"name":"Hankook"},"message":"ok","timestamp":"2024-03-15"}"#;
        let parsed: ApiResponse<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.into_data(),
            Item {
                id: 7,
                name: "Hankook".to_string()
            }
        );
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let json = r#"{"message":"ok"}"#;
        assert!(serde_json::from_str::<ApiResponse<Item>>(json).is_err());
    }
}
