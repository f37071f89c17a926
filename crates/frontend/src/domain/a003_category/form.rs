use crate::shared::crud_state::{FormData, Identified};
use contracts::domain::a003_category::aggregate::{Category, CategoryParams};
use contracts::domain::common::query::non_blank;
use contracts::domain::common::EntityId;

impl Identified for Category {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Буфер формы категории
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFormData {
    pub name: String,
    pub description: String,
    pub parent_id: Option<EntityId>,
}

impl FormData for CategoryFormData {
    type Entity = Category;
    type Params = CategoryParams;

    fn from_entity(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            parent_id: category.parent_id,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_params(&self) -> CategoryParams {
        CategoryParams {
            name: self.name.trim().to_string(),
            description: non_blank(&self.description),
            parent_id: self.parent_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud_state::CrudState;

    fn winter() -> Category {
        Category {
            id: 3,
            name: "Winter".to_string(),
            description: None,
            parent_id: Some(1),
            parent_name: Some("Passenger".to_string()),
        }
    }

    #[test]
    fn test_prefill_from_category() {
        let form = CategoryFormData::from_entity(&winter());
        assert_eq!(form.name, "Winter");
        assert_eq!(form.description, "");
        assert_eq!(form.parent_id, Some(1));
    }

    #[test]
    fn test_confirmed_delete_targets_pending_category() {
        let mut state: CrudState<Category, CategoryFormData> = CrudState::new();
        state.items = vec![winter()];
        state.request_delete(&winter());
        assert_eq!(state.begin_delete(), Some(3));
        state.delete_succeeded();
        state.begin_load();
        state.finish_load(Some(Vec::new()));
        assert!(state.items.is_empty());
        assert!(state.pending_delete.is_none());
    }
}
