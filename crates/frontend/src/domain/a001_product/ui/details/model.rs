use crate::shared::number_input::RawNumber;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use contracts::domain::common::query::non_blank;
use contracts::domain::common::EntityId;
use contracts::enums::Season;

/// Буфер формы товара. Числа хранятся текстом, как их ввёл пользователь.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFormData {
    pub name: String,
    pub sku: String,
    pub brand_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub season: Option<Season>,
    pub size: String,
    pub price: String,
    pub stock: String,
    pub min_stock: String,
}

impl ProductFormData {
    pub fn from_product(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            sku: p.sku.clone().unwrap_or_default(),
            brand_id: Some(p.brand_id),
            category_id: Some(p.category_id),
            season: p.season,
            size: p.size.clone().unwrap_or_default(),
            price: p.price.to_string(),
            stock: p.stock.to_string(),
            min_stock: p.min_stock.map(|m| m.to_string()).unwrap_or_default(),
        }
    }

    /// Собрать тело запроса; текст ошибки показывается в форме
    pub fn to_dto(&self) -> Result<ProductDto, String> {
        let price = RawNumber::from(self.price.trim().to_string())
            .commit()
            .ok_or_else(|| "Укажите цену".to_string())?;
        let stock = parse_count(&self.stock)?.unwrap_or(0);
        let min_stock = parse_count(&self.min_stock)?;

        let dto = ProductDto {
            name: self.name.trim().to_string(),
            sku: non_blank(&self.sku),
            brand_id: self.brand_id.unwrap_or_default(),
            category_id: self.category_id.unwrap_or_default(),
            season: self.season,
            size: non_blank(&self.size),
            price,
            stock,
            min_stock,
        };
        dto.validate()?;
        Ok(dto)
    }
}

/// Целое количество; пустое поле означает "не задано"
fn parse_count(text: &str) -> Result<Option<i32>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<i32>()
        .map(Some)
        .map_err(|_| format!("Некорректное количество: {}", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductFormData {
        ProductFormData {
            name: " Hakkapeliitta 10 ".to_string(),
            sku: String::new(),
            brand_id: Some(2),
            category_id: Some(3),
            season: Some(Season::Winter),
            size: "205/55 R16".to_string(),
            price: "8990.50".to_string(),
            stock: "12".to_string(),
            min_stock: String::new(),
        }
    }

    #[test]
    fn test_to_dto_trims_and_parses() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.name, "Hakkapeliitta 10");
        assert_eq!(dto.sku, None);
        assert_eq!(dto.size.as_deref(), Some("205/55 R16"));
        assert_eq!(dto.price, 8990.5);
        assert_eq!(dto.stock, 12);
        assert_eq!(dto.min_stock, None);
    }

    #[test]
    fn test_brand_and_category_are_required() {
        let mut form = filled();
        form.brand_id = None;
        assert_eq!(form.to_dto().unwrap_err(), "Выберите бренд");

        let mut form = filled();
        form.category_id = None;
        assert_eq!(form.to_dto().unwrap_err(), "Выберите категорию");
    }

    #[test]
    fn test_transient_price_is_rejected() {
        let mut form = filled();
        form.price = "-".to_string();
        assert!(form.to_dto().is_err());
    }

    #[test]
    fn test_bad_stock_is_reported() {
        let mut form = filled();
        form.stock = "12.5".to_string();
        assert!(form.to_dto().unwrap_err().contains("12.5"));
    }

    #[test]
    fn test_prefill_round_trips_into_dto() {
        let product = Product {
            id: 9,
            name: "Pilot Sport 5".to_string(),
            sku: Some("MI-PS5".to_string()),
            brand_id: 1,
            brand_name: Some("Michelin".to_string()),
            category_id: 4,
            category_name: None,
            season: Some(Season::Summer),
            size: None,
            price: 12500.0,
            stock: 3,
            min_stock: Some(4),
            updated_at: None,
        };
        let dto = ProductFormData::from_product(&product).to_dto().unwrap();
        assert_eq!(dto, ProductDto::from(&product));
    }
}
