use contracts::domain::a001_product::aggregate::{Product, ProductListParams};
use contracts::domain::common::{EntityId, PageResponse};
use contracts::enums::Season;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductListState {
    // filters
    pub search: String,
    pub brand_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub season: Option<Season>,
    pub low_stock_only: bool,

    // data
    pub items: Vec<Product>,
    pub is_loading: bool,
    pub error: Option<String>,

    // pagination
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            brand_id: None,
            category_id: None,
            season: None,
            low_stock_only: false,
            items: Vec::new(),
            is_loading: false,
            error: None,
            page: 0,
            page_size: 20,
            total_count: 0,
            total_pages: 0,
        }
    }
}

impl ProductListState {
    /// Параметры запроса текущей страницы
    pub fn to_params(&self) -> ProductListParams {
        ProductListParams {
            page: Some(self.page),
            size: Some(self.page_size),
            search: Some(self.search.clone()),
            brand_id: self.brand_id,
            category_id: self.category_id,
            season: self.season,
        }
    }

    /// Любое изменение фильтра возвращает на первую страницу
    pub fn set_filter(&mut self, f: impl FnOnce(&mut Self)) {
        f(self);
        self.page = 0;
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 0;
    }

    pub fn apply_page(&mut self, page: PageResponse<Product>) {
        self.total_count = page.total_elements;
        self.total_pages = page.total_pages;
        self.page = page.page;
        self.items = page.content;
        self.error = None;
    }

    /// Список `low-stock` приходит целиком, без пагинации
    pub fn apply_low_stock(&mut self, items: Vec<Product>) {
        self.total_count = items.len();
        self.total_pages = 1;
        self.page = 0;
        self.items = items;
        self.error = None;
    }

    pub fn can_export(&self) -> bool {
        !self.is_loading && !self.items.is_empty()
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: EntityId, stock: i32) -> Product {
        Product {
            id,
            name: format!("Tyre {}", id),
            sku: None,
            brand_id: 1,
            brand_name: None,
            category_id: 1,
            category_name: None,
            season: None,
            size: None,
            price: 100.0,
            stock,
            min_stock: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = ProductListState {
            page: 4,
            ..Default::default()
        };
        state.set_filter(|s| s.brand_id = Some(2));
        assert_eq!(state.page, 0);
        assert_eq!(state.to_params().brand_id, Some(2));
    }

    #[test]
    fn test_blank_search_left_out_of_query() {
        let state = ProductListState {
            search: "   ".to_string(),
            page: 1,
            page_size: 50,
            ..Default::default()
        };
        let params = state.to_params();
        assert_eq!(params.page, Some(1));
        assert_eq!(params.size, Some(50));
        let query = crate::shared::api_utils::build_query(&params).unwrap();
        assert!(!query.contains("search"), "{query}");
    }

    #[test]
    fn test_search_sent_verbatim() {
        let state = ProductListState {
            search: "pilot ".to_string(),
            ..Default::default()
        };
        assert_eq!(state.to_params().search.as_deref(), Some("pilot "));
    }

    #[test]
    fn test_apply_page_updates_totals() {
        let mut state = ProductListState::default();
        state.error = Some("old".to_string());
        state.apply_page(PageResponse {
            content: vec![product(1, 5), product(2, 0)],
            page: 1,
            size: 20,
            total_elements: 22,
            total_pages: 2,
        });
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.total_count, 22);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.page, 1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_low_stock_is_single_page() {
        let mut state = ProductListState {
            page: 3,
            ..Default::default()
        };
        state.apply_low_stock(vec![product(1, 5), product(2, 0)]);
        assert_eq!(state.page, 0);
        assert_eq!(state.total_count, 2);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn test_export_needs_loaded_rows() {
        let mut state = ProductListState::default();
        assert!(!state.can_export());
        state.apply_low_stock(vec![product(1, 5)]);
        assert!(state.can_export());
        state.is_loading = true;
        assert!(!state.can_export());
    }
}
