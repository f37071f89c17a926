use crate::domain::a003_category::api::fetch_category_tree;
use crate::shared::icons::icon;
use contracts::domain::a003_category::aggregate::Category;
use contracts::domain::a003_category::tree::{count_nodes, sort_tree, CategoryTreeNode};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone)]
struct TreeRow {
    category: Category,
    children: Vec<TreeRow>,
    expanded: RwSignal<bool>,
}

fn to_rows(nodes: Vec<CategoryTreeNode>) -> Vec<TreeRow> {
    nodes
        .into_iter()
        .map(|node| TreeRow {
            category: node.category,
            children: to_rows(node.children),
            expanded: RwSignal::new(true),
        })
        .collect()
}

fn render_rows(row: TreeRow, level: usize, on_open: Callback<Category>) -> Vec<AnyView> {
    let mut rows: Vec<AnyView> = Vec::new();

    let has_children = !row.children.is_empty();
    let expanded = row.expanded;

    let toggle: AnyView = if has_children {
        view! {
            <button class="tree-toggle" on:click=move |_| expanded.update(|v| *v = !*v)>
                {move || if expanded.get() { icon("chevron-down") } else { icon("chevron-right") }}
            </button>
        }
        .into_any()
    } else {
        view! { <span class="tree-toggle tree-toggle--empty"></span> }.into_any()
    };

    let node_icon = if has_children {
        if expanded.get() {
            icon("folder-open")
        } else {
            icon("folder-closed")
        }
    } else {
        icon("item")
    };

    let category = row.category.clone();
    let description = row.category.description.clone().unwrap_or_default();
    let children_count = row.children.len();

    rows.push(
        view! {
            <tr class="tree-row">
                <td class="table__cell">
                    <div class="tree-cell" style=format!("padding-left: {}px;", level * 16)>
                        {toggle}
                        <span class="tree-icon">{node_icon}</span>
                        <span class="tree-label" on:click=move |_| on_open.run(category.clone())>
                            {row.category.name.clone()}
                        </span>
                    </div>
                </td>
                <td class="table__cell">{description}</td>
                <td class="table__cell table__cell--numeric">
                    {if children_count > 0 { children_count.to_string() } else { String::new() }}
                </td>
            </tr>
        }
        .into_any(),
    );

    if expanded.get() {
        for child in row.children {
            rows.append(&mut render_rows(child, level + 1, on_open));
        }
    }

    rows
}

/// Дерево категорий (`GET /categories/tree`).
///
/// Перезагружается при каждом изменении `version`: список категорий
/// увеличивает его после каждой мутации.
#[component]
pub fn CategoryTree(
    #[prop(into)] version: Signal<u64>,
    on_open: Callback<Category>,
) -> impl IntoView {
    let roots = RwSignal::new(Vec::<TreeRow>::new());
    let total = RwSignal::new(0usize);
    let is_loading = RwSignal::new(false);

    Effect::new(move |_| {
        version.track();
        is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_category_tree().await {
                Ok(mut nodes) => {
                    sort_tree(&mut nodes);
                    total.set(count_nodes(&nodes));
                    roots.set(to_rows(nodes));
                }
                Err(e) => log::error!("Failed to load category tree: {}", e),
            }
            is_loading.set(false);
        });
    });

    view! {
        <div class="table-container">
            {move || is_loading.get().then(|| view! { <Spinner /> })}
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Наименование"</th>
                        <th class="table__header-cell">"Описание"</th>
                        <th class="table__header-cell">"Подкатегорий"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = roots.get();
                        if rows.is_empty() {
                            view! {
                                <tr><td colspan="3" class="table__cell table__cell--empty">"Категорий пока нет"</td></tr>
                            }.into_any()
                        } else {
                            rows.into_iter()
                                .flat_map(|row| render_rows(row, 0, on_open))
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
            <div class="table__footer">{move || format!("Всего: {}", total.get())}</div>
        </div>
    }
}
