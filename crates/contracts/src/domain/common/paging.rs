use serde::{Deserialize, Serialize};

/// Страница результатов списка с серверной пагинацией
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Номер страницы (с нуля)
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub total_elements: usize,
    #[serde(default)]
    pub total_pages: usize,
}

impl<T> Default for PageResponse<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            page: 0,
            size: 0,
            total_elements: 0,
            total_pages: 0,
        }
    }
}

impl<T> PageResponse<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_camel_case_page() {
        let json = r#"{"content":[1,2,3],"page":2,"size":3,"totalElements":9,"totalPages":3}"#;
        let page: PageResponse<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_elements, 9);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let page: PageResponse<i32> = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
