use super::aggregate::Category;
use serde::{Deserialize, Serialize};

/// Узел ответа `GET /categories/tree`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTreeNode {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub children: Vec<CategoryTreeNode>,
}

/// Общее количество узлов во всех поддеревьях
pub fn count_nodes(nodes: &[CategoryTreeNode]) -> usize {
    nodes.iter().map(|n| 1 + count_nodes(&n.children)).sum()
}

/// Сортировка по имени без учёта регистра на всех уровнях
pub fn sort_tree(nodes: &mut [CategoryTreeNode]) {
    nodes.sort_by(|a, b| {
        a.category
            .name
            .to_lowercase()
            .cmp(&b.category.name.to_lowercase())
    });
    for node in nodes.iter_mut() {
        sort_tree(&mut node.children);
    }
}
