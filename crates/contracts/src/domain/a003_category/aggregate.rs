use crate::domain::common::query::{is_blank, is_unset_id};
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Категория товаров. Дерево строится по `parent_id`;
/// `parent_name` денормализуется сервером на один уровень.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<EntityId>,
    #[serde(default)]
    pub parent_name: Option<String>,
}

/// Параметры `POST /categories` и `PUT /categories/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryParams {
    pub name: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_unset_id")]
    pub parent_id: Option<EntityId>,
}

/// Категории, которые можно выбрать родителем.
///
/// Редактируемая категория из списка исключается.
pub fn available_parents(all: &[Category], editing_id: Option<EntityId>) -> Vec<&Category> {
    all.iter()
        .filter(|c| Some(c.id) != editing_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: EntityId, name: &str, parent_id: Option<EntityId>) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: None,
            parent_id,
            parent_name: None,
        }
    }

    #[test]
    fn test_editing_category_is_not_a_parent_option() {
        let all = vec![
            category(1, "Легковые", None),
            category(2, "Грузовые", None),
            category(3, "Зимние легковые", Some(1)),
        ];
        let options = available_parents(&all, Some(3));
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|c| c.id != 3));
    }

    #[test]
    fn test_new_category_sees_every_option() {
        let all = vec![category(1, "Легковые", None), category(2, "Грузовые", None)];
        assert_eq!(available_parents(&all, None).len(), 2);
    }

    #[test]
    fn test_decodes_parent_name() {
        let c: Category = serde_json::from_str(
            r#"{"id":3,"name":"Зимние","parentId":1,"parentName":"Легковые"}"#,
        )
        .unwrap();
        assert_eq!(c.parent_id, Some(1));
        assert_eq!(c.parent_name.as_deref(), Some("Легковые"));
        assert_eq!(c.description, None);
    }
}
