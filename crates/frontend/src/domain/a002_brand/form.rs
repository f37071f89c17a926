use crate::shared::crud_state::{FormData, Identified};
use contracts::domain::a002_brand::aggregate::{Brand, BrandParams};
use contracts::domain::common::query::non_blank;
use contracts::domain::common::EntityId;

impl Identified for Brand {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Буфер формы бренда
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandFormData {
    pub name: String,
    pub country: String,
}

impl FormData for BrandFormData {
    type Entity = Brand;
    type Params = BrandParams;

    fn from_entity(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
            country: brand.country.clone().unwrap_or_default(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_params(&self) -> BrandParams {
        BrandParams {
            name: self.name.trim().to_string(),
            country: non_blank(&self.country),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud_state::{CrudState, SaveCommand};

    fn michelin() -> Brand {
        Brand {
            id: 1,
            name: "Michelin".to_string(),
            country: Some("Fransiya".to_string()),
        }
    }

    #[test]
    fn test_from_entity_prefills() {
        let form = BrandFormData::from_entity(&michelin());
        assert_eq!(form.name, "Michelin");
        assert_eq!(form.country, "Fransiya");
    }

    #[test]
    fn test_create_michelin_then_reload() {
        let mut state: CrudState<Brand, BrandFormData> = CrudState::new();
        state.open_modal(None);
        state.update_form(|f| {
            f.name = "Michelin".into();
            f.country = "Fransiya".into();
        });

        let command = state.begin_save();
        assert_eq!(
            command,
            Some(SaveCommand::Create(BrandParams {
                name: "Michelin".into(),
                country: Some("Fransiya".into()),
            }))
        );

        state.save_succeeded();
        assert!(!state.modal_open);

        // перезагрузка списка после мутации
        state.begin_load();
        state.finish_load(Some(vec![michelin()]));
        assert!(state
            .items
            .iter()
            .any(|b| b.name == "Michelin" && b.country.as_deref() == Some("Fransiya")));
    }

    #[test]
    fn test_empty_country_becomes_none() {
        let form = BrandFormData {
            name: " Nokian ".into(),
            country: "   ".into(),
        };
        assert_eq!(
            form.to_params(),
            BrandParams {
                name: "Nokian".into(),
                country: None
            }
        );
    }
}
