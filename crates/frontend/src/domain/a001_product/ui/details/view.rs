use super::view_model::ProductDetailsVm;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_brand::aggregate::Brand;
use contracts::domain::a003_category::aggregate::Category;
use contracts::domain::common::query::parse_id_option;
use contracts::enums::Season;
use leptos::prelude::*;
use thaw::*;

/// Модальная форма создания/редактирования товара
#[component]
pub fn ProductDetails(
    vm: ProductDetailsVm,
    #[prop(into)] brands: Signal<Vec<Brand>>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let on_close = Callback::new(move |_| vm.close());
    let form = vm.form;

    view! {
        <Show when=move || vm.open.get()>
            <Modal title=vm.title() on_close=on_close>
                {move || vm.error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                })}
                {move || vm.loading.get().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}

                <div class="form__group">
                    <label class="form__label" for="product-name">"Наименование *"</label>
                    <input
                        id="product-name"
                        class="form__input"
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| vm.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="product-sku">"Артикул"</label>
                        <input
                            id="product-sku"
                            class="form__input"
                            type="text"
                            prop:value=move || form.get().sku
                            on:input=move |ev| vm.update(|f| f.sku = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="product-size">"Типоразмер"</label>
                        <input
                            id="product-size"
                            class="form__input"
                            type="text"
                            placeholder="205/55 R16"
                            prop:value=move || form.get().size
                            on:input=move |ev| vm.update(|f| f.size = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="product-brand">"Бренд *"</label>
                        <select
                            id="product-brand"
                            class="form__select"
                            on:change=move |ev| vm.update(|f| f.brand_id = parse_id_option(&event_target_value(&ev)))
                            prop:value=move || form.get().brand_id.map(|id| id.to_string()).unwrap_or_default()
                        >
                            <option value="">"— выберите —"</option>
                            {move || brands.get().into_iter().map(|b| {
                                let id = b.id;
                                view! {
                                    <option value=id.to_string() selected=move || form.get().brand_id == Some(id)>
                                        {b.name}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="product-category">"Категория *"</label>
                        <select
                            id="product-category"
                            class="form__select"
                            on:change=move |ev| vm.update(|f| f.category_id = parse_id_option(&event_target_value(&ev)))
                            prop:value=move || form.get().category_id.map(|id| id.to_string()).unwrap_or_default()
                        >
                            <option value="">"— выберите —"</option>
                            {move || categories.get().into_iter().map(|c| {
                                let id = c.id;
                                view! {
                                    <option value=id.to_string() selected=move || form.get().category_id == Some(id)>
                                        {c.name}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="product-season">"Сезон"</label>
                        <select
                            id="product-season"
                            class="form__select"
                            on:change=move |ev| vm.update(|f| f.season = Season::from_code(&event_target_value(&ev)))
                            prop:value=move || form.get().season.map(|s| s.code().to_string()).unwrap_or_default()
                        >
                            <option value="">"—"</option>
                            {Season::all().into_iter().map(|season| view! {
                                <option value=season.code() selected=move || form.get().season == Some(season)>
                                    {season.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="product-price">"Цена *"</label>
                        <input
                            id="product-price"
                            class="form__input"
                            type="text"
                            inputmode="decimal"
                            prop:value=move || form.get().price
                            on:input=move |ev| vm.update(|f| f.price = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="product-stock">"Остаток"</label>
                        <input
                            id="product-stock"
                            class="form__input"
                            type="text"
                            inputmode="numeric"
                            prop:value=move || form.get().stock
                            on:input=move |ev| vm.update(|f| f.stock = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="product-min-stock">"Мин. остаток"</label>
                        <input
                            id="product-min-stock"
                            class="form__input"
                            type="text"
                            inputmode="numeric"
                            prop:value=move || form.get().min_stock
                            on:input=move |ev| vm.update(|f| f.min_stock = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.close()>
                        "Отмена"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.saving.get())
                        on_click=move |_| vm.save(on_saved)
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { " Сохранение..." } else { " Сохранить" }}
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
