use super::brands_tab::{BrandsTab, BrandsVm};
use super::categories_tab::{CategoriesTab, CategoriesVm};
use super::debts_tab::{DebtSettingsVm, DebtsTab};
use crate::shared::components::page_header::PageHeader;
use crate::shared::notification::{NotificationHost, NotificationService};
use crate::shared::theme::ThemeOptions;
use leptos::prelude::*;

const TABS: [(&str, &str); 4] = [
    ("appearance", "Оформление"),
    ("brands", "Бренды"),
    ("categories", "Категории"),
    ("debts", "Долги"),
];

/// Страница настроек. Данные всех вкладок загружаются сразу при открытии,
/// переключение вкладки только меняет видимый раздел.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal("appearance");

    let brands = BrandsVm::new();
    let categories = CategoriesVm::new();
    let debts = DebtSettingsVm::new();
    let notifications = NotificationService::new();

    brands.load();
    categories.load();
    debts.load();

    view! {
        <div class="page">
            <PageHeader title="Настройки" />

            <NotificationHost service=notifications />

            <div class="detail-tabs">
                {TABS.into_iter().map(|(key, label)| view! {
                    <button
                        type="button"
                        class=move || if active_tab.get() == key { "detail-tabs__item detail-tabs__item--active" } else { "detail-tabs__item" }
                        on:click=move |_| set_active_tab.set(key)
                    >
                        {label}
                    </button>
                }).collect_view()}
            </div>

            <div class="page__content">
                {move || match active_tab.get() {
                    "brands" => view! { <BrandsTab vm=brands /> }.into_any(),
                    "categories" => view! { <CategoriesTab vm=categories /> }.into_any(),
                    "debts" => view! { <DebtsTab vm=debts notifications=notifications /> }.into_any(),
                    _ => view! {
                        <div class="settings-section">
                            <h3 class="settings-section__title">"Тема оформления"</h3>
                            <ThemeOptions />
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
