use super::view_model::{CrudResource, CrudVm};
use crate::domain::a002_brand::api;
use crate::domain::a002_brand::form::BrandFormData;
use crate::shared::api_error::ApiError;
use crate::shared::components::export_buttons::ExportButtons;
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::ExportApi;
use crate::shared::icons::icon;
use crate::shared::modal::{ConfirmDialog, Modal};
use contracts::domain::a002_brand::aggregate::{Brand, BrandParams};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::future::Future;
use thaw::*;

pub struct Brands;

impl CrudResource for Brands {
    type Entity = Brand;
    type Form = BrandFormData;

    const LABEL: &'static str = "brands";

    fn fetch_all() -> impl Future<Output = Result<Vec<Brand>, ApiError>> {
        api::fetch_brands()
    }

    fn create(params: BrandParams) -> impl Future<Output = Result<Brand, ApiError>> {
        async move { api::create_brand(&params).await }
    }

    fn update(id: EntityId, params: BrandParams) -> impl Future<Output = Result<Brand, ApiError>> {
        async move { api::update_brand(id, &params).await }
    }

    fn delete(id: EntityId) -> impl Future<Output = Result<(), ApiError>> {
        api::delete_brand(id)
    }

    fn export() -> ExportApi {
        api::export()
    }
}

pub type BrandsVm = CrudVm<Brands>;

#[component]
pub fn BrandsTab(vm: BrandsVm) -> impl IntoView {
    let state = vm.state;

    view! {
        <div class="settings-section">
            <PageHeader title="Бренды">
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

            <div class="table-wrapper">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Наименование"</th>
                            <th class="table__header-cell">"Страна"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = vm.items().get();
                            if items.is_empty() {
                                return view! {
                                    <tr><td colspan="3" class="table__cell table__cell--empty">"Брендов пока нет"</td></tr>
                                }.into_any();
                            }
                            items.into_iter().map(|brand| {
                                let for_edit = brand.clone();
                                let for_delete = brand.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{brand.name.clone()}</td>
                                        <td class="table__cell">{brand.country.clone().unwrap_or_default()}</td>
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

            <Show when=move || state.with(|s| s.modal_open)>
                <Modal
                    title=Signal::derive(move || {
                        let title = if state.with(|s| s.editing.is_some()) { "Редактирование бренда" } else { "Новый бренд" };
                        title.to_string()
                    })
                    on_close=Callback::new(move |_| vm.close())
                >
                    <div class="form__group">
                        <label class="form__label" for="brand-name">"Наименование *"</label>
                        <input
                            id="brand-name"
                            class="form__input"
                            type="text"
                            prop:value=move || state.with(|s| s.form.name.clone())
                            on:input=move |ev| vm.update_form(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="brand-country">"Страна"</label>
                        <input
                            id="brand-country"
                            class="form__input"
                            type="text"
                            prop:value=move || state.with(|s| s.form.country.clone())
                            on:input=move |ev| vm.update_form(|f| f.country = event_target_value(&ev))
                        />
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
                    title="Удаление бренда"
                    message=Signal::derive(move || {
                        state.with(|s| s.pending_delete.as_ref().map(|b| format!("Удалить бренд \"{}\"?", b.name)))
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn michelin() -> Brand {
        Brand {
            id: 1,
            name: "Michelin".to_string(),
            country: Some("France".to_string()),
        }
    }

    #[test]
    fn test_typing_in_form_keeps_table_rows() {
        let owner = Owner::new();
        owner.set();
        let vm = BrandsVm::new();
        vm.state.update(|s| s.finish_load(Some(vec![michelin()])));

        let renders = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&renders);
        let rows = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            vm.items().with(|items| items.len())
        });
        assert_eq!(rows.get_untracked(), 1);

        vm.open_edit(&michelin());
        vm.update_form(|f| f.name.push_str(" Pilot"));
        assert_eq!(rows.get_untracked(), 1);
        assert_eq!(renders.load(Ordering::SeqCst), 1);

        vm.state.update(|s| s.finish_load(Some(Vec::new())));
        assert_eq!(rows.get_untracked(), 0);
        assert_eq!(renders.load(Ordering::SeqCst), 2);
    }
}
