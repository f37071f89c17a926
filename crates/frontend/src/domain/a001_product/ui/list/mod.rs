mod state;

use self::state::{create_state, ProductListState};
use super::details::{ProductDetails, ProductDetailsVm};
use crate::domain::a001_product::api;
use crate::domain::a002_brand::api::fetch_brands;
use crate::domain::a003_category::api::fetch_categories;
use crate::shared::components::export_buttons::ExportButtons;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::format::format_price;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_brand::aggregate::Brand;
use contracts::domain::a003_category::aggregate::Category;
use contracts::domain::common::EntityId;
use contracts::domain::common::query::parse_id_option;
use contracts::enums::{ExportFormat, Season};
use leptos::prelude::*;
use thaw::*;

/// Каталог товаров: фильтры, пагинация, остатки, выгрузка
#[component]
pub fn ProductList() -> impl IntoView {
    let state = create_state();
    let brands = RwSignal::new(Vec::<Brand>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let search_query = RwSignal::new(String::new());
    let details = ProductDetailsVm::new();

    let pending_delete = RwSignal::new(None::<Product>);
    let deleting = RwSignal::new(false);
    // Товар, остаток которого сейчас меняется
    let adjusting = RwSignal::new(None::<EntityId>);

    let load_items = move || {
        state.update(|s| s.is_loading = true);
        let snapshot = state.get_untracked();

        leptos::task::spawn_local(async move {
            let result = if snapshot.low_stock_only {
                api::fetch_low_stock()
                    .await
                    .map(|items| state.update(|s| s.apply_low_stock(items)))
            } else {
                api::fetch_products(&snapshot.to_params())
                    .await
                    .map(|page| state.update(|s| s.apply_page(page)))
            };
            if let Err(e) = result {
                log::error!("Failed to load products: {}", e);
                state.update(|s| s.error = Some(e.to_string()));
            }
            state.update(|s| s.is_loading = false);
        });
    };

    // Справочники для фильтров и формы
    let load_references = move || {
        leptos::task::spawn_local(async move {
            match fetch_brands().await {
                Ok(items) => brands.set(items),
                Err(e) => log::error!("Failed to load brands: {}", e),
            }
        });
        leptos::task::spawn_local(async move {
            match fetch_categories().await {
                Ok(items) => categories.set(items),
                Err(e) => log::error!("Failed to load categories: {}", e),
            }
        });
    };

    load_references();
    load_items();

    let apply_filter = move |f: Box<dyn FnOnce(&mut ProductListState)>| {
        state.update(|s| s.set_filter(f));
        load_items();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        load_items();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
        load_items();
    };

    let adjust = move |id: EntityId, delta: i32| {
        if adjusting.get_untracked().is_some() {
            return;
        }
        adjusting.set(Some(id));
        leptos::task::spawn_local(async move {
            match api::adjust_stock(id, delta).await {
                Ok(product) => log::info!("Stock of {} is now {}", product.id, product.stock),
                Err(e) => log::error!("Failed to adjust stock of {}: {}", id, e),
            }
            adjusting.set(None);
            load_items();
        });
    };

    let confirm_delete = move |_| {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        leptos::task::spawn_local(async move {
            match api::delete_product(product.id).await {
                Ok(()) => {
                    pending_delete.set(None);
                    load_items();
                }
                Err(e) => log::error!("Failed to delete product {}: {}", product.id, e),
            }
            deleting.set(false);
        });
    };

    let on_export = Callback::new(move |format: ExportFormat| {
        let filters = state.get_untracked().to_params().without_paging();
        leptos::task::spawn_local(async move {
            if let Err(e) = api::export().export_data(format, &filters).await {
                log::error!("Failed to export products: {}", e);
            }
        });
    });

    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));

    view! {
        <div class="page">
            <PageHeader
                title="Товары"
                subtitle=Signal::derive(move || Some(format!("Найдено: {}", state.with(|s| s.total_count))))
            >
                <ExportButtons
                    disabled=Signal::derive(move || !state.with(|s| s.can_export()))
                    on_export=on_export
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| details.open_new()>
                    {icon("plus")}
                    " Добавить"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 320px;">
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Поиск:"</Label>
                            <Input value=search_query placeholder="Наименование, артикул, размер..." />
                        </Flex>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=is_loading
                        on_click=move |_| {
                            let query = search_query.get_untracked();
                            apply_filter(Box::new(move |s: &mut ProductListState| s.search = query));
                        }
                    >
                        "Найти"
                    </Button>

                    <select
                        class="form__select"
                        on:change=move |ev| {
                            let id = parse_id_option(&event_target_value(&ev));
                            apply_filter(Box::new(move |s: &mut ProductListState| s.brand_id = id));
                        }
                    >
                        <option value="">"Все бренды"</option>
                        {move || brands.get().into_iter().map(|b| view! {
                            <option value=b.id.to_string()>{b.name}</option>
                        }).collect_view()}
                    </select>

                    <select
                        class="form__select"
                        on:change=move |ev| {
                            let id = parse_id_option(&event_target_value(&ev));
                            apply_filter(Box::new(move |s: &mut ProductListState| s.category_id = id));
                        }
                    >
                        <option value="">"Все категории"</option>
                        {move || categories.get().into_iter().map(|c| view! {
                            <option value=c.id.to_string()>{c.name}</option>
                        }).collect_view()}
                    </select>

                    <select
                        class="form__select"
                        on:change=move |ev| {
                            let season = Season::from_code(&event_target_value(&ev));
                            apply_filter(Box::new(move |s: &mut ProductListState| s.season = season));
                        }
                    >
                        <option value="">"Любой сезон"</option>
                        {Season::all().into_iter().map(|season| view! {
                            <option value=season.code()>{season.display_name()}</option>
                        }).collect_view()}
                    </select>

                    <label class="filter-panel__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.low_stock_only)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                apply_filter(Box::new(move |s: &mut ProductListState| s.low_stock_only = checked));
                            }
                        />
                        " Мало на складе"
                    </label>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                        disabled=is_loading
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </Flex>
            </div>

            {move || state.with(|s| s.error.clone()).map(|err| view! {
                <div class="alert alert--error">{format!("Ошибка загрузки: {}", err)}</div>
            })}

            <div class="table-wrapper">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Наименование"</th>
                            <th class="table__header-cell">"Артикул"</th>
                            <th class="table__header-cell">"Бренд"</th>
                            <th class="table__header-cell">"Категория"</th>
                            <th class="table__header-cell">"Сезон"</th>
                            <th class="table__header-cell">"Размер"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Цена"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Остаток"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = state.with(|s| s.items.clone());
                            if items.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="9" class="table__cell table__cell--empty">
                                            {if is_loading.get() { "Загрузка..." } else { "Товары не найдены" }}
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            items.into_iter().map(|p| {
                                let id = p.id;
                                let low = p.is_low_stock();
                                let stock = p.stock;
                                let row_for_edit = p.clone();
                                let row_for_delete = p.clone();
                                let busy = Signal::derive(move || adjusting.get().is_some());
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <a href="#" class="table__link" on:click=move |ev| {
                                                ev.prevent_default();
                                                details.open_edit(&row_for_edit);
                                            }>{p.name.clone()}</a>
                                        </td>
                                        <td class="table__cell">{p.sku.clone().unwrap_or_default()}</td>
                                        <td class="table__cell">{p.brand_name.clone().unwrap_or_default()}</td>
                                        <td class="table__cell">{p.category_name.clone().unwrap_or_default()}</td>
                                        <td class="table__cell">{p.season.map(|s| s.display_name()).unwrap_or("")}</td>
                                        <td class="table__cell">{p.size.clone().unwrap_or_default()}</td>
                                        <td class="table__cell table__cell--numeric">{format_price(p.price)}</td>
                                        <td class="table__cell table__cell--numeric">
                                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=Signal::derive(move || busy.get() || stock <= 0)
                                                    on_click=move |_| adjust(id, -1)
                                                >
                                                    {icon("minus")}
                                                </Button>
                                                {if low {
                                                    view! {
                                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                                                            {stock.to_string()}
                                                        </Badge>
                                                    }.into_any()
                                                } else {
                                                    view! { <span>{stock.to_string()}</span> }.into_any()
                                                }}
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=busy
                                                    on_click=move |_| adjust(id, 1)
                                                >
                                                    {icon("plus")}
                                                </Button>
                                            </Flex>
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| pending_delete.set(Some(row_for_delete.clone()))
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

            <Show when=move || { !state.with(|s| s.low_stock_only) }>
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />
            </Show>

            <ProductDetails
                vm=details
                brands=brands
                categories=categories
                on_saved=Callback::new(move |_| load_items())
            />

            <Show when=move || pending_delete.with(|p| p.is_some())>
                <ConfirmDialog
                    title="Удаление товара"
                    message=Signal::derive(move || {
                        pending_delete
                            .get()
                            .map(|p| format!("Удалить товар \"{}\"?", p.name))
                            .unwrap_or_default()
                    })
                    busy=deleting
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| {
                        if !deleting.get_untracked() {
                            pending_delete.set(None);
                        }
                    })
                />
            </Show>
        </div>
    }
}
