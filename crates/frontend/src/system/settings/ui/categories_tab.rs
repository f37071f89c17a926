use super::view_model::{CrudResource, CrudVm};
use crate::domain::a003_category::api;
use crate::domain::a003_category::form::CategoryFormData;
use crate::domain::a003_category::ui::tree::CategoryTree;
use crate::shared::api_error::ApiError;
use crate::shared::components::export_buttons::ExportButtons;
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::ExportApi;
use crate::shared::icons::icon;
use crate::shared::modal::{ConfirmDialog, Modal};
use contracts::domain::a003_category::aggregate::{available_parents, Category, CategoryParams};
use contracts::domain::common::EntityId;
use contracts::domain::common::query::parse_id_option;
use leptos::prelude::*;
use std::future::Future;
use thaw::*;

pub struct Categories;

impl CrudResource for Categories {
    type Entity = Category;
    type Form = CategoryFormData;

    const LABEL: &'static str = "categories";

    fn fetch_all() -> impl Future<Output = Result<Vec<Category>, ApiError>> {
        api::fetch_categories()
    }

    fn create(params: CategoryParams) -> impl Future<Output = Result<Category, ApiError>> {
        async move { api::create_category(&params).await }
    }

    fn update(
        id: EntityId,
        params: CategoryParams,
    ) -> impl Future<Output = Result<Category, ApiError>> {
        async move { api::update_category(id, &params).await }
    }

    fn delete(id: EntityId) -> impl Future<Output = Result<(), ApiError>> {
        api::delete_category(id)
    }

    fn export() -> ExportApi {
        api::export()
    }
}

pub type CategoriesVm = CrudVm<Categories>;

#[component]
pub fn CategoriesTab(vm: CategoriesVm) -> impl IntoView {
    let state = vm.state;
    let (show_tree, set_show_tree) = signal(false);

    // Варианты родителя без самой редактируемой категории
    let parent_options = Signal::derive(move || {
        state.with(|s| {
            let editing_id = s.editing.as_ref().map(|c| c.id);
            available_parents(&s.items, editing_id)
                .into_iter()
                .map(|c| (c.id, c.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="settings-section">
            <PageHeader title="Категории">
                <div class="view-toggle">
                    <button
                        type="button"
                        class=move || if show_tree.get() { "view-toggle__item" } else { "view-toggle__item view-toggle__item--active" }
                        on:click=move |_| set_show_tree.set(false)
                        title="Списком"
                    >
                        {icon("list")}
                    </button>
                    <button
                        type="button"
                        class=move || if show_tree.get() { "view-toggle__item view-toggle__item--active" } else { "view-toggle__item" }
                        on:click=move |_| set_show_tree.set(true)
                        title="Деревом"
                    >
                        {icon("folder-open")}
                    </button>
                </div>
                <ExportButtons
                    disabled=vm.export_disabled()
                    on_export=Callback::new(move |format| vm.export(format))
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_busy()
                    on_click=move |_| vm.open_new()
                >
                    {icon("plus")}
                    " Добавить"
                </Button>
            </PageHeader>

            {move || vm.is_loading().get().then(|| view! { <Spinner /> })}

            {move || if show_tree.get() {
                view! {
                    <CategoryTree
                        version=vm.version
                        on_open=Callback::new(move |category: Category| vm.open_edit(&category))
                    />
                }.into_any()
            } else {
                view! {
                    <div class="table-wrapper">
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Наименование"</th>
                                    <th class="table__header-cell">"Описание"</th>
                                    <th class="table__header-cell">"Родитель"</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let items = vm.items().get();
                                    if items.is_empty() {
                                        return view! {
                                            <tr><td colspan="4" class="table__cell table__cell--empty">"Категорий пока нет"</td></tr>
                                        }.into_any();
                                    }
                                    items.into_iter().map(|category| {
                                        let for_edit = category.clone();
                                        let for_delete = category.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{category.name.clone()}</td>
                                                <td class="table__cell">{category.description.clone().unwrap_or_default()}</td>
                                                <td class="table__cell">{category.parent_name.clone().unwrap_or_default()}</td>
                                                <td class="table__cell table__cell--actions">
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=vm.is_busy()
                                                        on_click=move |_| vm.open_edit(&for_edit)
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=vm.is_busy()
                                                        on_click=move |_| vm.request_delete(&for_delete)
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            <Show when=move || state.with(|s| s.modal_open)>
                <Modal
                    title=Signal::derive(move || {
                        let title = if state.with(|s| s.editing.is_some()) { "Редактирование категории" } else { "Новая категория" };
                        title.to_string()
                    })
                    on_close=Callback::new(move |_| vm.close())
                >
                    <div class="form__group">
                        <label class="form__label" for="category-name">"Наименование *"</label>
                        <input
                            id="category-name"
                            class="form__input"
                            type="text"
                            prop:value=move || state.with(|s| s.form.name.clone())
                            on:input=move |ev| vm.update_form(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="category-description">"Описание"</label>
                        <textarea
                            id="category-description"
                            class="form__textarea"
                            rows="3"
                            prop:value=move || state.with(|s| s.form.description.clone())
                            on:input=move |ev| vm.update_form(|f| f.description = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="category-parent">"Родительская категория"</label>
                        <select
                            id="category-parent"
                            class="form__select"
                            on:change=move |ev| {
                                let parent_id = parse_id_option(&event_target_value(&ev));
                                vm.update_form(|f| f.parent_id = parent_id);
                            }
                        >
                            <option value="" selected=move || state.with(|s| s.form.parent_id.is_none())>
                                "— нет —"
                            </option>
                            {move || parent_options.get().into_iter().map(|(id, name)| view! {
                                <option
                                    value=id.to_string()
                                    selected=move || state.with(|s| s.form.parent_id == Some(id))
                                >
                                    {name}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="modal-footer">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.close()>
                            "Отмена"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=vm.is_saving()
                            on_click=move |_| vm.save()
                        >
                            {icon("save")}
                            {move || if vm.is_saving().get() { " Сохранение..." } else { " Сохранить" }}
                        </Button>
                    </div>
                </Modal>
            </Show>

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title="Удаление категории"
                    message=Signal::derive(move || {
                        state.with(|s| s.pending_delete.as_ref().map(|c| format!("Удалить категорию \"{}\"?", c.name)))
                            .unwrap_or_default()
                    })
                    busy=vm.is_deleting()
                    on_confirm=Callback::new(move |_| vm.confirm_delete())
                    on_cancel=Callback::new(move |_| vm.cancel_delete())
                />
            </Show>
        </div>
    }
}
